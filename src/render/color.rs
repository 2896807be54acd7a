//! Color quantization to terminal palettes and SGR escape generation.

use std::fmt::Write as _;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::framebuffer::Rgb;

/// Color capability of the target terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ColorMode {
    /// No color escapes at all
    #[serde(rename = "none")]
    None,
    /// The 8 standard ANSI colors, picked by average brightness
    #[serde(rename = "basic")]
    Basic8,
    /// 6x6x6 color cube of the 256-color palette
    #[serde(rename = "256")]
    Cube256,
    /// 24-bit color
    #[default]
    #[serde(rename = "true")]
    TrueColor,
    /// 24-step grayscale ramp of the 256-color palette
    #[serde(rename = "gray")]
    Gray24,
}

impl ColorMode {
    pub fn name(&self) -> &'static str {
        match self {
            ColorMode::None => "none",
            ColorMode::Basic8 => "basic",
            ColorMode::Cube256 => "256",
            ColorMode::TrueColor => "true",
            ColorMode::Gray24 => "gray",
        }
    }
}

impl FromStr for ColorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(ColorMode::None),
            "basic" => Ok(ColorMode::Basic8),
            "256" => Ok(ColorMode::Cube256),
            "true" => Ok(ColorMode::TrueColor),
            "gray" => Ok(ColorMode::Gray24),
            other => Err(format!(
                "Unknown color mode '{}'. Expected one of: none, basic, 256, true, gray",
                other
            )),
        }
    }
}

/// Foreground or background.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    Foreground,
    Background,
}

/// A quantized terminal color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermColor {
    /// Palette index 0-255
    Indexed(u8),
    /// Direct 24-bit color
    Rgb(u8, u8, u8),
}

impl TermColor {
    /// Append the SGR sequence selecting this color on `layer`.
    ///
    /// Indices 0-7 use `3n`/`4n`, 8-15 the bright `9n`/`10n` forms, and the
    /// rest `38;5;n`/`48;5;n`.
    pub fn write_escape(&self, layer: Layer, out: &mut String) {
        let (base, bright, extended) = match layer {
            Layer::Foreground => (30, 90, 38),
            Layer::Background => (40, 100, 48),
        };
        // Writing into a String cannot fail
        let _ = match *self {
            TermColor::Indexed(i) if i < 8 => write!(out, "\x1b[{}m", base + i as u32),
            TermColor::Indexed(i) if i < 16 => write!(out, "\x1b[{}m", bright + (i - 8) as u32),
            TermColor::Indexed(i) => write!(out, "\x1b[{};5;{}m", extended, i),
            TermColor::Rgb(r, g, b) => write!(out, "\x1b[{};2;{};{};{}m", extended, r, g, b),
        };
    }

    pub fn escape(&self, layer: Layer) -> String {
        let mut out = String::with_capacity(20);
        self.write_escape(layer, &mut out);
        out
    }
}

/// Map a color to the palette of `mode`. `None` for [`ColorMode::None`].
pub fn quantize(rgb: Rgb, mode: ColorMode) -> Option<TermColor> {
    let (r, g, b) = (rgb.r as u32, rgb.g as u32, rgb.b as u32);
    match mode {
        ColorMode::None => None,
        ColorMode::Basic8 => {
            let avg = (r + g + b) / 3;
            Some(TermColor::Indexed((avg / 32).min(7) as u8))
        }
        ColorMode::Cube256 => {
            let index = 16 + 36 * (r / 51) + 6 * (g / 51) + b / 51;
            Some(TermColor::Indexed(index as u8))
        }
        ColorMode::Gray24 => {
            let avg = (r + g + b) / 3;
            Some(TermColor::Indexed((232 + avg * 24 / 256) as u8))
        }
        ColorMode::TrueColor => Some(TermColor::Rgb(rgb.r, rgb.g, rgb.b)),
    }
}

/// Escape string for `rgb` on `layer`; empty for [`ColorMode::None`].
pub fn escape_for(rgb: Rgb, mode: ColorMode, layer: Layer) -> String {
    quantize(rgb, mode)
        .map(|color| color.escape(layer))
        .unwrap_or_default()
}
