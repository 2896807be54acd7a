//! Frame assembly: sampling, adjustment, quantization and delta escapes.

use crate::framebuffer::{PixelSource, Rgb};

use super::adjust::{adjust, luminance};
use super::color::{quantize, ColorMode, Layer, TermColor};
use super::display::DisplayConfig;

/// SGR reset emitted at the end of every colored row.
pub const SGR_RESET: &str = "\x1b[0m";

/// Errors that abort a single render call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error(
        "Region {x},{y} {width}x{height} has no overlap with the {source_width}x{source_height} source"
    )]
    EmptyRegion {
        x: u32,
        y: u32,
        width: i64,
        height: i64,
        source_width: u32,
        source_height: u32,
    },

    #[error("Output size must be at least 1x1, got {width}x{height}")]
    InvalidOutputSize { width: u32, height: u32 },
}

/// A region clipped to the source extent. Always non-empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClippedRegion {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Resolve zero sizes to the full extent and clip to the source.
pub fn clip_region(
    config: &DisplayConfig,
    source_width: u32,
    source_height: u32,
) -> Result<ClippedRegion, RenderError> {
    let region = config.region;
    let mut width = (if region.w > 0 { region.w } else { source_width }) as i64;
    let mut height = (if region.h > 0 { region.h } else { source_height }) as i64;

    if region.x as i64 + width > source_width as i64 {
        width = source_width as i64 - region.x as i64;
    }
    if region.y as i64 + height > source_height as i64 {
        height = source_height as i64 - region.y as i64;
    }

    if width <= 0 || height <= 0 {
        return Err(RenderError::EmptyRegion {
            x: region.x,
            y: region.y,
            width,
            height,
            source_width,
            source_height,
        });
    }

    Ok(ClippedRegion {
        x: region.x,
        y: region.y,
        width: width as u32,
        height: height as u32,
    })
}

/// Foreground and background for one cell. Background is suppressed
/// entirely in [`ColorMode::None`].
fn cell_colors(rgb: Rgb, mode: ColorMode) -> (Option<TermColor>, Option<TermColor>) {
    if mode == ColorMode::None {
        return (None, None);
    }
    let shade = Rgb::new(rgb.r / 2, rgb.g / 2, rgb.b / 2);
    (quantize(rgb, mode), quantize(shade, mode))
}

/// Render one text frame from `source` into `out`, replacing its contents.
///
/// Color escapes are written only when a cell's colors differ from the
/// previous cell in the same row, so the escape volume follows the number of
/// color transitions rather than the cell count.
pub fn render_into<S: PixelSource + ?Sized>(
    source: &S,
    config: &DisplayConfig,
    out: &mut String,
) -> Result<(), RenderError> {
    if config.output_width == 0 || config.output_height == 0 {
        return Err(RenderError::InvalidOutputSize {
            width: config.output_width,
            height: config.output_height,
        });
    }
    let region = clip_region(config, source.width(), source.height())?;

    // Nearest-neighbor sampling
    let x_step = region.width as f32 / config.output_width as f32;
    let y_step = region.height as f32 / config.output_height as f32;

    out.clear();
    out.reserve(config.output_width as usize * config.output_height as usize * 4);

    for oy in 0..config.output_height {
        let iy = region.y + (oy as f32 * y_step) as u32;
        let mut last: (Option<TermColor>, Option<TermColor>) = (None, None);

        for ox in 0..config.output_width {
            let ix = region.x + (ox as f32 * x_step) as u32;

            let raw = source.read_pixel(ix, iy).unwrap_or(Rgb::BLACK);
            let rgb = adjust(raw, config.brightness, config.contrast);

            let colors = cell_colors(rgb, config.color_mode);
            if colors != last {
                if let Some(fg) = colors.0 {
                    fg.write_escape(Layer::Foreground, out);
                }
                if let Some(bg) = colors.1 {
                    bg.write_escape(Layer::Background, out);
                }
                last = colors;
            }

            out.push_str(config.charset_mode.glyph(luminance(rgb)));
        }

        if config.color_mode != ColorMode::None {
            out.push_str(SGR_RESET);
        }
        out.push('\n');
    }

    Ok(())
}

/// Render one text frame from `source`.
pub fn render<S: PixelSource + ?Sized>(
    source: &S,
    config: &DisplayConfig,
) -> Result<String, RenderError> {
    let mut out = String::new();
    render_into(source, config, &mut out)?;
    Ok(out)
}

/// Renderer holding its configuration and a reusable output buffer.
#[derive(Debug, Clone)]
pub struct FrameRenderer {
    config: DisplayConfig,
    buffer: String,
}

impl FrameRenderer {
    pub fn new(config: DisplayConfig) -> Self {
        Self {
            config,
            buffer: String::new(),
        }
    }

    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    /// Render a frame. The returned text is valid until the next call.
    pub fn render<S: PixelSource + ?Sized>(&mut self, source: &S) -> Result<&str, RenderError> {
        render_into(source, &self.config, &mut self.buffer)?;
        Ok(&self.buffer)
    }
}
