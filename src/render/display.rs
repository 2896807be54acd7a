//! Per-run display settings.

use super::color::ColorMode;
use super::glyph::CharsetMode;

/// Source rectangle to sample. A zero `w` or `h` means "to the edge of the
/// source".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Region {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl Region {
    /// The whole source.
    pub const FULL: Region = Region { x: 0, y: 0, w: 0, h: 0 };

    pub fn is_full(&self) -> bool {
        *self == Region::FULL
    }
}

impl std::str::FromStr for Region {
    type Err = String;

    /// Parse `X,Y,W,H`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        if parts.len() != 4 {
            return Err(format!(
                "Invalid region '{}'. Use X,Y,W,H (e.g., 0,0,640,480; 0 for W/H means full extent)",
                s
            ));
        }
        let mut values = [0u32; 4];
        for (value, part) in values.iter_mut().zip(&parts) {
            *value = part
                .parse()
                .map_err(|_| format!("Invalid region component '{}' in '{}'", part, s))?;
        }
        Ok(Region {
            x: values[0],
            y: values[1],
            w: values[2],
            h: values[3],
        })
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{},{},{}", self.x, self.y, self.w, self.h)
    }
}

/// Settings fixed for the duration of a capture run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayConfig {
    /// Output width in character cells
    pub output_width: u32,
    /// Output height in character cells
    pub output_height: u32,
    pub color_mode: ColorMode,
    pub charset_mode: CharsetMode,
    /// Additive offset multiplier, 1.0 leaves colors unchanged
    pub brightness: f32,
    /// Multiplier around mid-gray, 1.0 leaves colors unchanged
    pub contrast: f32,
    /// Target frames per second; 0 runs unpaced
    pub fps: u32,
    pub region: Region,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            output_width: 80,
            output_height: 24,
            color_mode: ColorMode::TrueColor,
            charset_mode: CharsetMode::Braille,
            brightness: 1.0,
            contrast: 1.0,
            fps: 10,
            region: Region::FULL,
        }
    }
}
