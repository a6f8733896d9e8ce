//! RGB colors and hue/lightness/saturation conversion.

/// An 8-bit-per-channel RGB triple.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

pub const WHITE: Color = Color::new(255, 255, 255);
pub const BLACK: Color = Color::new(0, 0, 0);

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn channels(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    pub fn from_channels([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }

    /// Moves each channel `factor` of the way toward `other`, truncating toward zero.
    pub fn blend(&self, other: Color, factor: f64) -> Color {
        let mix = |a: u8, b: u8| {
            let delta = (b as f64 - a as f64) * factor;
            (a as i32 + delta.trunc() as i32).clamp(0, 255) as u8
        };
        Color::new(
            mix(self.r, other.r),
            mix(self.g, other.g),
            mix(self.b, other.b),
        )
    }

    /// Linear interpolation with the whole result truncated, for color sweeps
    /// along a bone. `t` is expected in [0, 1].
    pub fn lerp(&self, other: Color, t: f64) -> Color {
        let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).clamp(0.0, 255.0) as u8;
        Color::new(
            mix(self.r, other.r),
            mix(self.g, other.g),
            mix(self.b, other.b),
        )
    }
}

/// Converts hue (degrees, 0-359), lightness and saturation (percent, 0-100) to RGB.
///
/// Each float channel `v` in [0, 1] becomes `trunc(255 * v)`.
pub fn hls_to_rgb(hue: f64, lightness: f64, saturation: f64) -> Color {
    let h = hue / 360.0;
    let l = lightness / 100.0;
    let s = saturation / 100.0;

    let (r, g, b) = if s == 0.0 {
        (l, l, l)
    } else {
        let m2 = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let m1 = 2.0 * l - m2;
        (
            hue_channel(m1, m2, h + 1.0 / 3.0),
            hue_channel(m1, m2, h),
            hue_channel(m1, m2, h - 1.0 / 3.0),
        )
    };

    let to_byte = |v: f64| (255.0 * v).clamp(0.0, 255.0) as u8;
    Color::new(to_byte(r), to_byte(g), to_byte(b))
}

fn hue_channel(m1: f64, m2: f64, hue: f64) -> f64 {
    let hue = hue.rem_euclid(1.0);
    if hue < 1.0 / 6.0 {
        m1 + (m2 - m1) * hue * 6.0
    } else if hue < 0.5 {
        m2
    } else if hue < 2.0 / 3.0 {
        m1 + (m2 - m1) * (2.0 / 3.0 - hue) * 6.0
    } else {
        m1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_hues() {
        assert_eq!(hls_to_rgb(0.0, 50.0, 100.0), Color::new(255, 0, 0));
        assert_eq!(hls_to_rgb(120.0, 50.0, 100.0), Color::new(0, 255, 0));
        assert_eq!(hls_to_rgb(240.0, 50.0, 100.0), Color::new(0, 0, 255));
    }

    #[test]
    fn lightness_extremes() {
        assert_eq!(hls_to_rgb(200.0, 100.0, 60.0), WHITE);
        assert_eq!(hls_to_rgb(200.0, 0.0, 60.0), BLACK);
    }

    #[test]
    fn zero_saturation_is_grey() {
        let c = hls_to_rgb(77.0, 50.0, 0.0);
        assert_eq!(c, Color::new(127, 127, 127));
    }

    #[test]
    fn blend_truncates_toward_zero() {
        let a = Color::new(10, 200, 0);
        let b = Color::new(13, 100, 255);
        assert_eq!(a.blend(b, 0.5), Color::new(11, 150, 127));
        assert_eq!(a.blend(b, 0.0), a);
        assert_eq!(a.blend(b, 1.0), b);
    }

    #[test]
    fn lerp_truncates_the_sum() {
        let a = Color::new(200, 0, 0);
        let b = Color::new(0, 0, 255);
        // 200 - 200 * 0.25 = 150; 255 * 0.25 = 63.75
        assert_eq!(a.lerp(b, 0.25), Color::new(150, 0, 63));
        assert_eq!(a.lerp(b, 1.0), b);
    }
}
