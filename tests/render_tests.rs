//! Rendering and file output tests.

use barcode128::render::{
    Barcode, CaptionFont, OutputFormat, RenderConfig, encode_image, image_width, render,
};
use barcode128::{BarcodeError, encode};
use image::GrayImage;
use pretty_assertions::assert_eq;
use std::ops::Range;
use std::path::PathBuf;

/// Default frame: 2 px border + 10 px spacing
const FRAME: u32 = 12;
const TEXT_SPACING: u32 = 5;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("barcode128-{}-{}", std::process::id(), name))
}

fn test_font() -> CaptionFont {
    let bytes = include_bytes!("fonts/DejaVuSansMono.ttf");
    CaptionFont::from_bytes(bytes.to_vec(), "DejaVuSansMono.ttf").unwrap()
}

/// Dark pixels in `rows`, inside the frame.
fn ink_in_rows(image: &GrayImage, rows: Range<u32>) -> usize {
    let columns = FRAME..image.width() - FRAME;
    rows.flat_map(|y| columns.clone().map(move |x| (x, y)))
        .filter(|&(x, y)| image.get_pixel(x, y)[0] < 128)
        .count()
}

/// Whether every pixel in `rows` inside the frame is background.
fn blank_rows(image: &GrayImage, rows: Range<u32>) -> bool {
    let columns = FRAME..image.width() - FRAME;
    rows.flat_map(|y| columns.clone().map(move |x| (x, y)))
        .all(|(x, y)| image.get_pixel(x, y)[0] == 255)
}

#[test]
fn test_save_png_roundtrip() {
    let barcode = Barcode::new("http://am-wd.de").unwrap();
    let path = temp_path("url.png");
    barcode.save(&path).unwrap();

    let image = image::open(&path).unwrap().to_luma8();
    assert_eq!(image.dimensions(), (barcode.width().unwrap(), 150));
    assert_eq!(image, barcode.render().unwrap());

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_save_picks_format_from_extension() {
    let barcode = Barcode::new("0123").unwrap();
    let cases: [(&str, &[u8]); 3] = [
        ("a.gif", b"GIF"),
        ("b.jpg", &[0xFF, 0xD8]),
        ("c.out", b"\x89PNG"),
    ];
    for (name, magic) in cases {
        let path = temp_path(name);
        barcode.save(&path).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(magic), "{} has wrong signature", name);
        std::fs::remove_file(&path).unwrap();
    }
}

#[test]
fn test_to_bytes_matches_encode_image() {
    let barcode = Barcode::new("ABC").unwrap();
    let bytes = barcode.to_bytes(OutputFormat::Png).unwrap();
    let direct = encode_image(&barcode.render().unwrap(), OutputFormat::Png).unwrap();
    assert_eq!(bytes, direct);
}

#[test]
fn test_stop_is_wider_than_data_symbols() {
    let mut config = RenderConfig::default();
    config.set_border_width(0).unwrap();
    config.set_border_spacing(0).unwrap();
    config.set_module_width(2).unwrap();
    config.set_height(4).unwrap();

    let stream = encode("x").unwrap();
    let image = render(&stream, &config).unwrap();
    // START, x, checksum at 11 modules; STOP at 13
    assert_eq!(image.width(), (3 * 11 + 13) * 2);

    // STOP ends on a two-module bar
    let right = image.width() - 1;
    assert_eq!(image.get_pixel(right, 0)[0], 0);
    assert_eq!(image.get_pixel(right - 3, 0)[0], 0);
}

#[test]
fn test_bad_font_surfaces_at_assignment() {
    let path = temp_path("not-a-font.ttf");
    std::fs::write(&path, b"definitely not a font").unwrap();

    let mut config = RenderConfig::default();
    let err = config.set_font(&path, 12).unwrap_err();
    assert!(matches!(err, BarcodeError::Font(_)));
    assert!(config.font().is_none());

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_caption_without_font_keeps_full_bar_height() {
    let config = RenderConfig::default().with_caption("Shelf 7");
    let plain = Barcode::new("Z9").unwrap().render().unwrap();
    let captioned = Barcode::with_config("Z9", config).unwrap().render().unwrap();
    assert_eq!(plain, captioned);
}

#[test]
fn test_caption_drawn_above_bars() {
    let font = test_font();
    let caption = font.measure("TOP", 14.0);

    let mut config = RenderConfig::default().with_caption("TOP");
    config.set_loaded_font(font, 14).unwrap();
    config.set_show_code(false);
    let image = Barcode::with_config("AIM", config).unwrap().render().unwrap();

    let caption_bottom = FRAME + caption.height;
    let bar_top = caption_bottom + TEXT_SPACING;
    assert!(ink_in_rows(&image, FRAME..caption_bottom) > 0);
    assert!(blank_rows(&image, caption_bottom..bar_top));

    // first module of START is a bar
    assert_eq!(image.get_pixel(FRAME, bar_top)[0], 0);
    assert_eq!(image.get_pixel(FRAME, bar_top - 1)[0], 255);
    assert_eq!(image.get_pixel(FRAME, 150 - FRAME - 1)[0], 0);
}

#[test]
fn test_code_text_drawn_below_bars() {
    let font = test_font();
    let code = font.measure("AIM", 12.0);

    let mut config = RenderConfig::default();
    config.set_loaded_font(font, 12).unwrap();
    let image = Barcode::with_config("AIM", config).unwrap().render().unwrap();

    let text_top = 150 - FRAME - code.height;
    let bar_bottom = text_top - TEXT_SPACING;
    assert!(ink_in_rows(&image, text_top..150 - FRAME) > 0);
    assert!(blank_rows(&image, bar_bottom..text_top));

    assert_eq!(image.get_pixel(FRAME, FRAME)[0], 0);
    assert_eq!(image.get_pixel(FRAME, bar_bottom - 1)[0], 0);
    assert_eq!(image.get_pixel(FRAME, bar_bottom)[0], 255);
}

#[test]
fn test_hidden_code_and_empty_text_draw_no_text() {
    let mut config = RenderConfig::default();
    config.set_loaded_font(test_font(), 12).unwrap();
    config.set_show_code(false);
    let hidden = Barcode::with_config("AIM", config).unwrap().render().unwrap();
    assert_eq!(hidden, Barcode::new("AIM").unwrap().render().unwrap());

    let mut config = RenderConfig::default();
    config.set_loaded_font(test_font(), 12).unwrap();
    let empty = Barcode::with_config("", config).unwrap().render().unwrap();
    assert_eq!(empty, Barcode::new("").unwrap().render().unwrap());
}

#[test]
fn test_fit_font_sizes_code_to_bar_width() {
    let text = "0123456789";
    let font = test_font();
    let stream = encode(text).unwrap();

    let mut config = RenderConfig::default();
    config.set_loaded_font(font.clone(), 10).unwrap();
    config.set_fit_font(true);

    let width = image_width(&stream, &config).unwrap();
    let available = width - 2 * (FRAME + TEXT_SPACING);
    let size = font.fit_size(text, available, 150);
    assert!(size > 10, "fitted size {} should grow past the configured 10", size);

    let code = font.measure(text, size as f32);
    assert!(code.width < available);

    let image = render(&stream, &config).unwrap();
    let text_top = 150 - FRAME - code.height;
    let bar_bottom = text_top - TEXT_SPACING;
    assert!(ink_in_rows(&image, text_top..150 - FRAME) > 0);
    assert!(blank_rows(&image, bar_bottom..text_top));
    assert_eq!(image.get_pixel(FRAME, bar_bottom - 1)[0], 0);
}

#[test]
fn test_text_too_tall_for_height() {
    let mut config = RenderConfig::default();
    config.set_height(40).unwrap();
    config.set_loaded_font(test_font(), 30).unwrap();
    let err = Barcode::with_config("AIM", config).unwrap().render().unwrap_err();
    assert!(matches!(err, BarcodeError::InvalidDimension { name: "height", .. }));
}
