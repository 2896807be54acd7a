//! Unit tests for the frame renderer.
//!
//! These tests drive the public render API over in-memory pixel buffers:
//! - Glyph selection per charset
//! - Color escapes and delta emission
//! - Region clipping and sampling
//! - Brightness and contrast

use fbscope::framebuffer::{Geometry, OutOfBounds, PixelFormat, PixelSource, PixelView, Rgb};
use fbscope::render::*;

fn rgb888(width: u32, height: u32, pixels: &[[u8; 3]]) -> Vec<u8> {
    assert_eq!(pixels.len(), (width * height) as usize);
    pixels.iter().flatten().copied().collect()
}

fn config(width: u32, height: u32, color: ColorMode, charset: CharsetMode) -> DisplayConfig {
    DisplayConfig {
        output_width: width,
        output_height: height,
        color_mode: color,
        charset_mode: charset,
        ..DisplayConfig::default()
    }
}

// ==================== Glyph Output Tests ====================

#[test]
fn test_render_primary_colors_no_color() {
    let bytes = rgb888(
        2,
        2,
        &[[255, 0, 0], [0, 255, 0], [0, 0, 255], [255, 255, 255]],
    );
    let view = PixelView::new(&bytes, Geometry::packed(2, 2, 24, PixelFormat::Rgb888)).unwrap();

    let text = render(&view, &config(2, 2, ColorMode::None, CharsetMode::Simple)).unwrap();
    // Luminance 76, 149, 29 and 255
    assert_eq!(text, "⣂⣅\n⣁⣿\n");
}

#[test]
fn test_render_no_color_has_no_escapes() {
    let bytes = rgb888(2, 1, &[[10, 200, 30], [250, 5, 90]]);
    let view = PixelView::new(&bytes, Geometry::packed(2, 1, 24, PixelFormat::Rgb888)).unwrap();

    let text = render(&view, &config(8, 3, ColorMode::None, CharsetMode::Blocks)).unwrap();
    assert!(!text.contains('\x1b'));
    assert_eq!(text.lines().count(), 3);
    for line in text.lines() {
        assert_eq!(line.chars().count(), 8);
    }
}

#[test]
fn test_render_extremes_per_charset() {
    let black = [0u8, 0, 0];
    let white = [255u8, 255, 255];
    let bytes = rgb888(2, 1, &[black, white]);
    let view = PixelView::new(&bytes, Geometry::packed(2, 1, 24, PixelFormat::Rgb888)).unwrap();

    for (charset, dark, light) in [
        (CharsetMode::Blocks, "█", "░"),
        (CharsetMode::Half, "▀", "▐"),
        (CharsetMode::Braille, "@", "."),
        (CharsetMode::Art, " ", "⠇"),
        (CharsetMode::Simple, "⣀", "⣿"),
    ] {
        let text = render(&view, &config(2, 1, ColorMode::None, charset)).unwrap();
        assert_eq!(text, format!("{}{}\n", dark, light), "charset {:?}", charset);
    }
}

// ==================== Color Escape Tests ====================

#[test]
fn test_render_uniform_row_emits_colors_once() {
    let bytes = rgb888(4, 1, &[[255, 0, 0]; 4]);
    let view = PixelView::new(&bytes, Geometry::packed(4, 1, 24, PixelFormat::Rgb888)).unwrap();

    let text = render(&view, &config(4, 1, ColorMode::TrueColor, CharsetMode::Simple)).unwrap();
    assert_eq!(
        text,
        "\x1b[38;2;255;0;0m\x1b[48;2;127;0;0m⣂⣂⣂⣂\x1b[0m\n"
    );
}

#[test]
fn test_render_escapes_on_every_transition() {
    let red = [255u8, 0, 0];
    let white = [255u8, 255, 255];
    let bytes = rgb888(4, 1, &[red, white, white, red]);
    let view = PixelView::new(&bytes, Geometry::packed(4, 1, 24, PixelFormat::Rgb888)).unwrap();

    let text = render(&view, &config(4, 1, ColorMode::TrueColor, CharsetMode::Simple)).unwrap();
    assert_eq!(text.matches("\x1b[38;2;").count(), 3);
    assert_eq!(text.matches("\x1b[48;2;").count(), 3);
}

#[test]
fn test_render_delta_state_resets_each_row() {
    let bytes = rgb888(1, 2, &[[0, 0, 255], [0, 0, 255]]);
    let view = PixelView::new(&bytes, Geometry::packed(1, 2, 24, PixelFormat::Rgb888)).unwrap();

    let text = render(&view, &config(1, 2, ColorMode::Cube256, CharsetMode::Simple)).unwrap();
    // Same color on both rows, but each row starts fresh after its reset
    let row = "\x1b[38;5;21m\x1b[48;5;18m⣁\x1b[0m\n";
    assert_eq!(text, format!("{row}{row}"));
}

#[test]
fn test_render_basic_and_gray_escapes() {
    let bytes = rgb888(1, 1, &[[255, 255, 255]]);
    let view = PixelView::new(&bytes, Geometry::packed(1, 1, 24, PixelFormat::Rgb888)).unwrap();

    let basic = render(&view, &config(1, 1, ColorMode::Basic8, CharsetMode::Simple)).unwrap();
    // fg 7 from 255, bg 3 from the halved 127
    assert_eq!(basic, "\x1b[37m\x1b[43m⣿\x1b[0m\n");

    let gray = render(&view, &config(1, 1, ColorMode::Gray24, CharsetMode::Simple)).unwrap();
    assert_eq!(gray, "\x1b[38;5;255m\x1b[48;5;243m⣿\x1b[0m\n");
}

#[test]
fn test_escape_for_layers() {
    let white = Rgb::new(255, 255, 255);
    assert_eq!(escape_for(white, ColorMode::Basic8, Layer::Foreground), "\x1b[37m");
    assert_eq!(escape_for(white, ColorMode::Basic8, Layer::Background), "\x1b[47m");
    assert_eq!(escape_for(white, ColorMode::Cube256, Layer::Foreground), "\x1b[38;5;231m");
    assert_eq!(escape_for(white, ColorMode::None, Layer::Foreground), "");
    assert_eq!(TermColor::Indexed(9).escape(Layer::Foreground), "\x1b[91m");
    assert_eq!(TermColor::Indexed(9).escape(Layer::Background), "\x1b[101m");
}

// ==================== Region Tests ====================

#[test]
fn test_render_region_selects_subrect() {
    let black = [0u8, 0, 0];
    let white = [255u8, 255, 255];
    let bytes = rgb888(3, 1, &[black, black, white]);
    let view = PixelView::new(&bytes, Geometry::packed(3, 1, 24, PixelFormat::Rgb888)).unwrap();

    let mut cfg = config(2, 1, ColorMode::None, CharsetMode::Simple);
    cfg.region = Region { x: 1, y: 0, w: 0, h: 0 };
    assert_eq!(render(&view, &cfg).unwrap(), "⣀⣿\n");
}

#[test]
fn test_render_region_outside_source_fails() {
    let bytes = rgb888(2, 2, &[[0, 0, 0]; 4]);
    let view = PixelView::new(&bytes, Geometry::packed(2, 2, 24, PixelFormat::Rgb888)).unwrap();

    let mut cfg = config(2, 2, ColorMode::None, CharsetMode::Simple);
    cfg.region = Region { x: 5, y: 0, w: 0, h: 0 };
    assert!(matches!(
        render(&view, &cfg),
        Err(RenderError::EmptyRegion { .. })
    ));
}

#[test]
fn test_clip_region_trims_to_source() {
    let mut cfg = DisplayConfig::default();
    cfg.region = Region { x: 600, y: 400, w: 400, h: 400 };
    let clipped = clip_region(&cfg, 800, 600).unwrap();
    assert_eq!(
        clipped,
        ClippedRegion { x: 600, y: 400, width: 200, height: 200 }
    );
}

#[test]
fn test_render_zero_output_size_fails() {
    let bytes = rgb888(1, 1, &[[0, 0, 0]]);
    let view = PixelView::new(&bytes, Geometry::packed(1, 1, 24, PixelFormat::Rgb888)).unwrap();
    let cfg = config(0, 5, ColorMode::None, CharsetMode::Simple);
    assert_eq!(
        render(&view, &cfg),
        Err(RenderError::InvalidOutputSize { width: 0, height: 5 })
    );
}

// ==================== Sampling Tests ====================

/// White source whose second column cannot be read.
struct MissingColumn;

impl PixelSource for MissingColumn {
    fn width(&self) -> u32 {
        2
    }
    fn height(&self) -> u32 {
        1
    }
    fn read_pixel(&self, x: u32, y: u32) -> Result<Rgb, OutOfBounds> {
        if x == 1 {
            Err(OutOfBounds { x, y })
        } else {
            Ok(Rgb::new(255, 255, 255))
        }
    }
}

#[test]
fn test_render_unreadable_pixel_is_black() {
    let text = render(
        &MissingColumn,
        &config(2, 1, ColorMode::TrueColor, CharsetMode::Simple),
    )
    .unwrap();
    assert_eq!(
        text,
        "\x1b[38;2;255;255;255m\x1b[48;2;127;127;127m⣿\x1b[38;2;0;0;0m\x1b[48;2;0;0;0m⣀\x1b[0m\n"
    );
}

#[test]
fn test_render_upscales_nearest_neighbor() {
    let bytes = rgb888(2, 1, &[[0, 0, 0], [255, 255, 255]]);
    let view = PixelView::new(&bytes, Geometry::packed(2, 1, 24, PixelFormat::Rgb888)).unwrap();

    let text = render(&view, &config(4, 2, ColorMode::None, CharsetMode::Simple)).unwrap();
    assert_eq!(text, "⣀⣀⣿⣿\n⣀⣀⣿⣿\n");
}

#[test]
fn test_frame_renderer_reuses_buffer() {
    let bytes = rgb888(1, 1, &[[255, 255, 255]]);
    let view = PixelView::new(&bytes, Geometry::packed(1, 1, 24, PixelFormat::Rgb888)).unwrap();

    let mut renderer = FrameRenderer::new(config(3, 1, ColorMode::None, CharsetMode::Simple));
    let first = renderer.render(&view).unwrap().to_string();
    let second = renderer.render(&view).unwrap().to_string();
    assert_eq!(first, "⣿⣿⣿\n");
    assert_eq!(first, second);
}

// ==================== Adjustment Tests ====================

#[test]
fn test_render_zero_brightness_darkens() {
    let bytes = rgb888(1, 1, &[[100, 100, 100]]);
    let view = PixelView::new(&bytes, Geometry::packed(1, 1, 24, PixelFormat::Rgb888)).unwrap();

    let mut cfg = config(1, 1, ColorMode::None, CharsetMode::Simple);
    cfg.brightness = 0.0;
    // (100 - 128) * 1 + 0 clamps to 0
    assert_eq!(render(&view, &cfg).unwrap(), "⣀\n");
}

#[test]
fn test_render_high_contrast_saturates() {
    let bytes = rgb888(2, 1, &[[120, 120, 120], [140, 140, 140]]);
    let view = PixelView::new(&bytes, Geometry::packed(2, 1, 24, PixelFormat::Rgb888)).unwrap();

    let mut cfg = config(2, 1, ColorMode::None, CharsetMode::Simple);
    cfg.contrast = 100.0;
    assert_eq!(render(&view, &cfg).unwrap(), "⣀⣿\n");
}

#[test]
fn test_luminance_primaries() {
    assert_eq!(luminance(Rgb::new(255, 0, 0)), 76);
    assert_eq!(luminance(Rgb::new(0, 255, 0)), 149);
    assert_eq!(luminance(Rgb::new(0, 0, 255)), 29);
    assert_eq!(luminance(Rgb::new(255, 255, 255)), 255);
    assert_eq!(luminance(Rgb::BLACK), 0);
}
