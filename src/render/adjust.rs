//! Brightness/contrast adjustment and luminance.

use crate::framebuffer::Rgb;

/// `(c - 128) * contrast + 128 * brightness`, truncated toward zero and
/// clamped to `0..=255`.
fn adjust_channel(c: u8, brightness: f32, contrast: f32) -> u8 {
    let v = (c as f32 - 128.0) * contrast + 128.0 * brightness;
    // `as` saturates NaN to 0 and infinities to the i32 range
    (v as i32).clamp(0, 255) as u8
}

/// Apply contrast then brightness to each channel independently.
pub fn adjust(rgb: Rgb, brightness: f32, contrast: f32) -> Rgb {
    Rgb {
        r: adjust_channel(rgb.r, brightness, contrast),
        g: adjust_channel(rgb.g, brightness, contrast),
        b: adjust_channel(rgb.b, brightness, contrast),
    }
}

/// BT.601 luma `0.299r + 0.587g + 0.114b`, truncated.
pub fn luminance(rgb: Rgb) -> u8 {
    let y = 0.299 * rgb.r as f64 + 0.587 * rgb.g as f64 + 0.114 * rgb.b as f64;
    y as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_at_unity() {
        for c in [0u8, 1, 64, 127, 128, 200, 255] {
            let rgb = Rgb::new(c, 255 - c, c / 2);
            assert_eq!(adjust(rgb, 1.0, 1.0), rgb);
        }
    }

    #[test]
    fn test_contrast_before_brightness() {
        // (200 - 128) * 2 + 128 * 0.5 = 208
        assert_eq!(adjust(Rgb::new(200, 200, 200), 0.5, 2.0), Rgb::new(208, 208, 208));
        // (100 - 128) * 0.5 + 128 * 1.5 = 178
        assert_eq!(adjust(Rgb::new(100, 100, 100), 1.5, 0.5), Rgb::new(178, 178, 178));
    }

    #[test]
    fn test_clamped_under_extremes() {
        let rgb = Rgb::new(0, 128, 255);
        assert_eq!(adjust(rgb, 100.0, 100.0), Rgb::new(0, 255, 255));
        assert_eq!(adjust(rgb, -100.0, 1.0), Rgb::new(0, 0, 0));
        // 0 * inf is NaN, which saturates to 0
        assert_eq!(adjust(rgb, 1.0, f32::INFINITY), Rgb::new(0, 0, 255));
        assert_eq!(adjust(rgb, f32::NAN, f32::NAN), Rgb::new(0, 0, 0));
    }

    #[test]
    fn test_truncation_toward_zero() {
        // (129 - 128) * 0.5 + 128 * 1.0 = 128.5 -> 128
        assert_eq!(adjust(Rgb::new(129, 129, 129), 1.0, 0.5).r, 128);
    }

    #[test]
    fn test_luminance_reference_points() {
        assert_eq!(luminance(Rgb::new(255, 255, 255)), 255);
        assert_eq!(luminance(Rgb::new(0, 0, 0)), 0);
        assert_eq!(luminance(Rgb::new(255, 0, 0)), 76);
        assert_eq!(luminance(Rgb::new(0, 255, 0)), 149);
        assert_eq!(luminance(Rgb::new(0, 0, 255)), 29);
    }
}
