//! Pixel formats and per-format channel decoding.

use std::fmt;

/// An 8-bit-per-channel color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Binary layout of a single framebuffer pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    /// 16-bit little-endian, 5-6-5 bits.
    Rgb565,
    /// Three bytes in r, g, b order.
    Rgb888,
    /// Three bytes in b, g, r order.
    Bgr888,
    /// Four bytes, first three read as r, g, b. Alpha ignored.
    Rgba8888,
    /// Four bytes, first three read as b, g, r. Alpha ignored.
    Bgra8888,
    /// Anything else. Decoded as grayscale from the first byte.
    Unknown,
}

impl PixelFormat {
    /// Pick a format from the bit depth and channel bit offsets reported by
    /// the device.
    ///
    /// Only the two common 32-bit layouts are recognized; other 32-bit layouts
    /// fall back to [`PixelFormat::Unknown`]. 24-bit depth is assumed to be BGR.
    pub fn detect(bits_per_pixel: u32, red_offset: u32, green_offset: u32, blue_offset: u32) -> Self {
        match bits_per_pixel {
            32 => match (red_offset, green_offset, blue_offset) {
                (16, 8, 0) => PixelFormat::Rgba8888,
                (0, 8, 16) => PixelFormat::Bgra8888,
                _ => PixelFormat::Unknown,
            },
            24 => PixelFormat::Bgr888,
            16 => PixelFormat::Rgb565,
            _ => PixelFormat::Unknown,
        }
    }

    /// Number of bytes [`PixelFormat::decode`] reads from the start of a pixel.
    pub fn bytes_needed(&self) -> usize {
        match self {
            PixelFormat::Rgb565 => 2,
            PixelFormat::Rgb888
            | PixelFormat::Bgr888
            | PixelFormat::Rgba8888
            | PixelFormat::Bgra8888 => 3,
            PixelFormat::Unknown => 1,
        }
    }

    /// Decode the pixel that starts at `bytes[0]`.
    ///
    /// Returns `None` when `bytes` is shorter than [`PixelFormat::bytes_needed`].
    pub fn decode(&self, bytes: &[u8]) -> Option<Rgb> {
        let px = bytes.get(..self.bytes_needed())?;
        let rgb = match self {
            PixelFormat::Rgb565 => {
                let v = u16::from_le_bytes([px[0], px[1]]);
                Rgb {
                    r: (((v >> 11) & 0x1F) * 8) as u8,
                    g: (((v >> 5) & 0x3F) * 4) as u8,
                    b: ((v & 0x1F) * 8) as u8,
                }
            }
            PixelFormat::Rgb888 | PixelFormat::Rgba8888 => Rgb::new(px[0], px[1], px[2]),
            PixelFormat::Bgr888 | PixelFormat::Bgra8888 => Rgb::new(px[2], px[1], px[0]),
            PixelFormat::Unknown => Rgb::new(px[0], px[0], px[0]),
        };
        Some(rgb)
    }

    pub fn name(&self) -> &'static str {
        match self {
            PixelFormat::Rgb565 => "RGB565",
            PixelFormat::Rgb888 => "RGB888",
            PixelFormat::Bgr888 => "BGR888",
            PixelFormat::Rgba8888 => "RGBA8888",
            PixelFormat::Bgra8888 => "BGRA8888",
            PixelFormat::Unknown => "unknown",
        }
    }
}

impl fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
