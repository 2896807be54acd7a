//! Screen geometry and bounds-checked pixel access over a raw byte buffer.

use std::fmt;

use super::format::{PixelFormat, Rgb};

/// A read outside the visible `width` x `height` area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutOfBounds {
    pub x: u32,
    pub y: u32,
}

impl fmt::Display for OutOfBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pixel ({}, {}) is outside the buffer", self.x, self.y)
    }
}

/// Layout of the visible area inside a framebuffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    /// Visible width in pixels
    pub width: u32,
    /// Visible height in pixels
    pub height: u32,
    pub bits_per_pixel: u32,
    /// Bytes per scanline, may include padding past `width * bytes_per_pixel`
    pub line_length: u32,
    pub format: PixelFormat,
}

impl Geometry {
    /// Tightly packed geometry (no scanline padding).
    pub fn packed(width: u32, height: u32, bits_per_pixel: u32, format: PixelFormat) -> Self {
        Self {
            width,
            height,
            bits_per_pixel,
            line_length: width * (bits_per_pixel / 8),
            format,
        }
    }

    pub fn bytes_per_pixel(&self) -> usize {
        (self.bits_per_pixel / 8) as usize
    }

    /// Minimum number of bytes a buffer needs to hold every visible scanline.
    pub fn required_len(&self) -> usize {
        self.line_length as usize * self.height as usize
    }

    /// Byte offset of pixel `(x, y)`, or `None` outside the visible area.
    pub fn offset(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y as usize * self.line_length as usize + x as usize * self.bytes_per_pixel())
    }

    /// Decode pixel `(x, y)` from `buffer`.
    pub fn read_pixel(&self, buffer: &[u8], x: u32, y: u32) -> Result<Rgb, OutOfBounds> {
        self.offset(x, y)
            .and_then(|offset| buffer.get(offset..))
            .and_then(|bytes| self.format.decode(bytes))
            .ok_or(OutOfBounds { x, y })
    }
}

/// Anything the renderer can sample pixels from.
pub trait PixelSource {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn read_pixel(&self, x: u32, y: u32) -> Result<Rgb, OutOfBounds>;
}

/// Borrowed pixel buffer with a known geometry.
///
/// Used for in-memory captures and for tests; the device-backed
/// [`Framebuffer`](super::Framebuffer) goes through the same decoding path.
#[derive(Debug, Clone, Copy)]
pub struct PixelView<'a> {
    bytes: &'a [u8],
    geometry: Geometry,
}

impl<'a> PixelView<'a> {
    /// Returns `None` if `bytes` cannot hold `geometry.required_len()` bytes.
    pub fn new(bytes: &'a [u8], geometry: Geometry) -> Option<Self> {
        if bytes.len() < geometry.required_len() {
            return None;
        }
        Some(Self { bytes, geometry })
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }
}

impl PixelSource for PixelView<'_> {
    fn width(&self) -> u32 {
        self.geometry.width
    }

    fn height(&self) -> u32 {
        self.geometry.height
    }

    fn read_pixel(&self, x: u32, y: u32) -> Result<Rgb, OutOfBounds> {
        self.geometry.read_pixel(self.bytes, x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn padded_rgb888() -> Geometry {
        // 2x2, 3 bytes per pixel, 8 bytes per line (2 bytes padding)
        Geometry {
            width: 2,
            height: 2,
            bits_per_pixel: 24,
            line_length: 8,
            format: PixelFormat::Rgb888,
        }
    }

    #[test]
    fn test_offset_honours_line_length() {
        let geometry = padded_rgb888();
        assert_eq!(geometry.offset(0, 0), Some(0));
        assert_eq!(geometry.offset(1, 0), Some(3));
        assert_eq!(geometry.offset(0, 1), Some(8));
        assert_eq!(geometry.offset(1, 1), Some(11));
    }

    #[test]
    fn test_offset_out_of_bounds() {
        let geometry = padded_rgb888();
        assert_eq!(geometry.offset(2, 0), None);
        assert_eq!(geometry.offset(0, 2), None);
    }

    #[test]
    fn test_read_pixel_skips_padding() {
        let bytes = [
            1, 2, 3, 4, 5, 6, 0xEE, 0xEE, //
            7, 8, 9, 10, 11, 12, 0xEE, 0xEE,
        ];
        let view = PixelView::new(&bytes, padded_rgb888()).unwrap();
        assert_eq!(view.read_pixel(1, 0), Ok(Rgb::new(4, 5, 6)));
        assert_eq!(view.read_pixel(0, 1), Ok(Rgb::new(7, 8, 9)));
        assert_eq!(view.read_pixel(5, 5), Err(OutOfBounds { x: 5, y: 5 }));
    }

    #[test]
    fn test_view_rejects_short_buffer() {
        let bytes = [0u8; 15];
        assert!(PixelView::new(&bytes, padded_rgb888()).is_none());
    }

    #[test]
    fn test_read_pixel_truncated_tail_is_out_of_bounds() {
        // Last pixel of a 32bpp row needs 3 bytes but the buffer's final
        // stride is cut short; geometry claims only what it needs per line.
        let geometry = Geometry {
            width: 2,
            height: 1,
            bits_per_pixel: 32,
            line_length: 5,
            format: PixelFormat::Bgra8888,
        };
        let bytes = [1, 2, 3, 4, 5];
        let view = PixelView::new(&bytes, geometry).unwrap();
        assert_eq!(view.read_pixel(0, 0), Ok(Rgb::new(3, 2, 1)));
        assert!(view.read_pixel(1, 0).is_err());
    }

    #[test]
    fn test_packed_line_length() {
        let geometry = Geometry::packed(640, 480, 32, PixelFormat::Rgba8888);
        assert_eq!(geometry.line_length, 2560);
        assert_eq!(geometry.required_len(), 2560 * 480);
    }
}
