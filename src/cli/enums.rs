//! CLI enum types for color and charset options.

use clap::ValueEnum;

use crate::render::{CharsetMode, ColorMode};

/// Terminal color capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// No color escapes
    None,
    /// 8 standard ANSI colors
    Basic,
    /// 256-color cube
    #[value(name = "256")]
    Cube,
    /// 24-bit color
    True,
    /// 24-step grayscale
    Gray,
}

impl From<ColorChoice> for ColorMode {
    fn from(c: ColorChoice) -> Self {
        match c {
            ColorChoice::None => ColorMode::None,
            ColorChoice::Basic => ColorMode::Basic8,
            ColorChoice::Cube => ColorMode::Cube256,
            ColorChoice::True => ColorMode::TrueColor,
            ColorChoice::Gray => ColorMode::Gray24,
        }
    }
}

/// Glyph ramp for drawing cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CharsetChoice {
    Simple,
    Blocks,
    Half,
    Braille,
    Art,
}

impl From<CharsetChoice> for CharsetMode {
    fn from(c: CharsetChoice) -> Self {
        match c {
            CharsetChoice::Simple => CharsetMode::Simple,
            CharsetChoice::Blocks => CharsetMode::Blocks,
            CharsetChoice::Half => CharsetMode::Half,
            CharsetChoice::Braille => CharsetMode::Braille,
            CharsetChoice::Art => CharsetMode::Art,
        }
    }
}
