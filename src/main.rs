//! # barcode128 CLI
//!
//! Command-line interface for Code128 encoding.
//!
//! ## Usage
//!
//! ```bash
//! # Show symbols, checksum and modules
//! barcode128 encode "Hello 123"
//!
//! # Same, as JSON
//! barcode128 encode --json "Hello 123"
//!
//! # Decode a module string back to symbols and text
//! barcode128 decode 11010010000...
//!
//! # Render an image (format from extension)
//! barcode128 render "http://am-wd.de" -o barcode.png --height 130
//!
//! # With caption and code text
//! barcode128 render "ABC-42" -o label.gif --font Font.ttf --caption "Shelf 7"
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

use barcode128::{
    Barcode, BarcodeError, RenderConfig,
    decode::{decode_bits, decode_text, verify_checksum},
    encode,
};

/// barcode128 - Code128 barcode encoder
#[derive(Parser, Debug)]
#[command(name = "barcode128")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log encoder and renderer details to stderr
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Encode text and print the symbol stream
    Encode {
        /// Text to encode (ASCII only)
        text: String,

        /// Print the full stream as JSON
        #[arg(long)]
        json: bool,
    },

    /// Decode a string of 0/1 modules
    Decode {
        /// Module string as produced by `encode`
        bits: String,
    },

    /// Render text as a barcode image
    Render {
        /// Text to encode (ASCII only)
        text: String,

        /// Output file; the extension picks PNG, GIF or JPEG
        #[arg(long, short, value_name = "FILE")]
        output: PathBuf,

        /// Image height in pixels
        #[arg(long, default_value = "150", allow_hyphen_values = true)]
        height: i64,

        /// Width of one module in pixels
        #[arg(long, default_value = "1", allow_hyphen_values = true)]
        module_width: i64,

        /// Border line width in pixels
        #[arg(long, default_value = "2", allow_hyphen_values = true)]
        border_width: i64,

        /// Gap between border and content in pixels
        #[arg(long, default_value = "10", allow_hyphen_values = true)]
        border_spacing: i64,

        /// Gap between bars and text in pixels
        #[arg(long, default_value = "5", allow_hyphen_values = true)]
        text_spacing: i64,

        /// Caption printed above the bars (needs --font)
        #[arg(long)]
        caption: Option<String>,

        /// TrueType/OpenType font for caption and code text
        #[arg(long, value_name = "FONT")]
        font: Option<PathBuf>,

        /// Font size in pixels
        #[arg(long, default_value = "10", allow_hyphen_values = true)]
        font_size: i64,

        /// Size the code text to the bar width
        #[arg(long)]
        fit_font: bool,

        /// Do not print the encoded text under the bars
        #[arg(long)]
        hide_code: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { LevelFilter::DEBUG } else { LevelFilter::WARN };
    let filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(command: Commands) -> Result<(), BarcodeError> {
    match command {
        Commands::Encode { text, json } => {
            let stream = encode(&text)?;
            if json {
                let out = serde_json::to_string_pretty(&stream).map_err(std::io::Error::from)?;
                println!("{}", out);
                return Ok(());
            }

            let symbols: Vec<String> = stream.symbols().iter().map(u8::to_string).collect();
            match stream.start_set() {
                Some(set) => println!("Start set: {}", set),
                None => println!("Start set: none (empty text)"),
            }
            println!("Symbols:   {}", symbols.join(" "));
            println!("Checksum:  {}", stream.checksum());
            println!("Modules:   {} ({})", stream.bits(), stream.width());
        }

        Commands::Decode { bits } => {
            let symbols = decode_bits(bits.trim())?;
            let values: Vec<String> = symbols.iter().map(u8::to_string).collect();
            println!("Symbols:  {}", values.join(" "));
            println!(
                "Checksum: {}",
                if verify_checksum(&symbols) { "ok" } else { "MISMATCH" }
            );
            println!("Text:     {:?}", decode_text(&symbols)?);
        }

        Commands::Render {
            text,
            output,
            height,
            module_width,
            border_width,
            border_spacing,
            text_spacing,
            caption,
            font,
            font_size,
            fit_font,
            hide_code,
        } => {
            let mut config = RenderConfig::new();
            // height is checked against the frame already set
            config.set_border_width(0)?;
            config.set_border_spacing(0)?;
            config.set_height(height)?;
            config.set_module_width(module_width)?;
            config.set_border_width(border_width)?;
            config.set_border_spacing(border_spacing)?;
            config.set_text_spacing(text_spacing)?;
            config.set_show_code(!hide_code);
            config.set_fit_font(fit_font);
            if let Some(caption) = caption {
                config.set_caption(&caption);
            }
            if let Some(path) = font {
                config.set_font(&path, font_size)?;
            }

            let barcode = Barcode::with_config(&text, config)?;
            barcode.save(&output)?;
            tracing::info!(path = %output.display(), width = barcode.width()?, "saved");
            println!("Saved to {}", output.display());
        }
    }

    Ok(())
}
