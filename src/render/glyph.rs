//! Luminance to glyph mapping.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Every glyph the renderer can emit. Each [`CharsetMode`] indexes its own
/// segment of this ramp.
pub const GLYPH_RAMP: [&str; 34] = [
    // Blocks
    "█", "▓", "▒", "░",
    // Half blocks
    "▀", "▄", "▌", "▐",
    // Braille mode segment
    "@", "#", "8", "&", "o", ":", "*", ".",
    // Art
    " ", "⠀", "⠁", "⠂", "⠃", "⠄", "⠅", "⠆", "⠇",
    // Simple
    "⣀", "⣁", "⣂", "⣃", "⣄", "⣅", "⣆", "⣇", "⣿",
];

/// Glyph ramp used to draw each cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharsetMode {
    Simple,
    Blocks,
    Half,
    #[default]
    Braille,
    Art,
}

impl CharsetMode {
    /// Index of the first glyph and number of buckets for this mode.
    const fn segment(&self) -> (usize, usize) {
        match self {
            CharsetMode::Blocks => (0, 4),
            CharsetMode::Half => (4, 4),
            CharsetMode::Braille => (8, 8),
            CharsetMode::Art => (16, 9),
            CharsetMode::Simple => (25, 9),
        }
    }

    /// Highest ramp index this mode can produce.
    pub const fn max_index(&self) -> usize {
        let (start, buckets) = self.segment();
        start + buckets - 1
    }

    /// Ramp index for `luminance`. Non-decreasing in `luminance`.
    pub fn glyph_index(&self, luminance: u8) -> usize {
        let (start, buckets) = self.segment();
        start + (luminance as usize * buckets / 256).min(buckets - 1)
    }

    pub fn glyph(&self, luminance: u8) -> &'static str {
        GLYPH_RAMP[self.glyph_index(luminance)]
    }

    pub fn name(&self) -> &'static str {
        match self {
            CharsetMode::Simple => "simple",
            CharsetMode::Blocks => "blocks",
            CharsetMode::Half => "half",
            CharsetMode::Braille => "braille",
            CharsetMode::Art => "art",
        }
    }
}

impl FromStr for CharsetMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "simple" => Ok(CharsetMode::Simple),
            "blocks" => Ok(CharsetMode::Blocks),
            "half" => Ok(CharsetMode::Half),
            "braille" => Ok(CharsetMode::Braille),
            "art" => Ok(CharsetMode::Art),
            other => Err(format!(
                "Unknown charset '{}'. Expected one of: simple, blocks, half, braille, art",
                other
            )),
        }
    }
}

/// Glyph for `luminance` in `mode`.
pub fn glyph(luminance: u8, mode: CharsetMode) -> &'static str {
    mode.glyph(luminance)
}
