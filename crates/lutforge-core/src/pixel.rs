//! Per-channel pixel math.
//!
//! Every grading stage works on normalized `f32` channels. This module
//! collects the small numeric helpers those stages share: clamping,
//! negative-safe exponentiation, BT.709 luma, and the hue/chroma
//! measures used by the monochrome stage.

/// Rec.709 luma coefficient for the red channel.
///
/// Used in the standard luma formula: `Y = 0.2126*R + 0.7152*G + 0.0722*B`
pub const REC709_LUMA_R: f32 = 0.2126;

/// Rec.709 luma coefficient for the green channel.
pub const REC709_LUMA_G: f32 = 0.7152;

/// Rec.709 luma coefficient for the blue channel.
pub const REC709_LUMA_B: f32 = 0.0722;

/// Rec.709 luma coefficients as an array [R, G, B].
pub const REC709_LUMA: [f32; 3] = [REC709_LUMA_R, REC709_LUMA_G, REC709_LUMA_B];

/// Calculate Rec.709 luma from RGB values.
///
/// `Y = 0.2126*R + 0.7152*G + 0.0722*B`
///
/// # Example
///
/// ```
/// use lutforge_core::pixel::luminance_rec709;
/// let luma = luminance_rec709([0.5, 0.3, 0.2]);
/// assert!((luma - 0.3353).abs() < 0.0001);
/// ```
#[inline]
pub fn luminance_rec709(rgb: [f32; 3]) -> f32 {
    rgb[0] * REC709_LUMA_R + rgb[1] * REC709_LUMA_G + rgb[2] * REC709_LUMA_B
}

/// Clamp a channel value into [0, 1].
#[inline]
pub fn clamp01(v: f32) -> f32 {
    v.clamp(0.0, 1.0)
}

/// Raise `v` to `power`, flooring negative bases to 0 first.
///
/// Grading stages can push intermediate values below zero (negative lift,
/// cool white balance on dark pixels). A fractional power of a negative
/// base is NaN in IEEE math; flooring keeps the pipeline total.
#[inline]
pub fn safe_pow(v: f32, power: f32) -> f32 {
    if v < 0.0 { 0.0 } else { v.powf(power) }
}

/// Convert an 8-bit channel value to normalized float.
#[inline]
pub fn u8_to_f32(v: u8) -> f32 {
    v as f32 / 255.0
}

/// Convert a normalized float channel value to 8-bit, clamping first.
#[inline]
pub fn f32_to_u8(v: f32) -> u8 {
    (clamp01(v) * 255.0 + 0.5) as u8
}

/// Chroma of an RGB triple: `max(R,G,B) - min(R,G,B)`.
///
/// Zero for neutral grays, approaching 1 for fully saturated primaries.
#[inline]
pub fn chroma(rgb: [f32; 3]) -> f32 {
    let max = rgb[0].max(rgb[1]).max(rgb[2]);
    let min = rgb[0].min(rgb[1]).min(rgb[2]);
    max - min
}

/// HSV-style hue of an RGB triple, normalized to [0, 1).
///
/// Returns 0.0 for achromatic input (chroma == 0), where hue is undefined.
pub fn hue(rgb: [f32; 3]) -> f32 {
    let [r, g, b] = rgb;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let c = max - min;
    if c <= 0.0 {
        return 0.0;
    }
    let h = if max == r {
        ((g - b) / c).rem_euclid(6.0)
    } else if max == g {
        (b - r) / c + 2.0
    } else {
        (r - g) / c + 4.0
    };
    h / 6.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn luma_weights_sum_to_one() {
        assert_relative_eq!(REC709_LUMA_R + REC709_LUMA_G + REC709_LUMA_B, 1.0, epsilon = 1e-6);
        assert_relative_eq!(luminance_rec709([1.0, 1.0, 1.0]), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn safe_pow_floors_negative_bases() {
        assert_eq!(safe_pow(-0.5, 1.1), 0.0);
        assert!(safe_pow(-0.5, 0.5).is_finite());
        assert_relative_eq!(safe_pow(0.25, 0.5), 0.5, epsilon = 1e-6);
    }

    #[test]
    fn byte_conversion_round_trips_endpoints() {
        assert_eq!(f32_to_u8(u8_to_f32(0)), 0);
        assert_eq!(f32_to_u8(u8_to_f32(255)), 255);
        assert_eq!(f32_to_u8(u8_to_f32(128)), 128);
        // out-of-range floats clamp rather than wrap
        assert_eq!(f32_to_u8(1.7), 255);
        assert_eq!(f32_to_u8(-0.3), 0);
    }

    #[test]
    fn hue_of_primaries() {
        assert_relative_eq!(hue([1.0, 0.0, 0.0]), 0.0, epsilon = 1e-6);
        assert_relative_eq!(hue([0.0, 1.0, 0.0]), 1.0 / 3.0, epsilon = 1e-6);
        assert_relative_eq!(hue([0.0, 0.0, 1.0]), 2.0 / 3.0, epsilon = 1e-6);
        // red wraps around from both sides
        assert!(hue([1.0, 0.0, 0.1]) > 0.9);
    }

    #[test]
    fn chroma_of_gray_is_zero() {
        assert_eq!(chroma([0.42, 0.42, 0.42]), 0.0);
        assert_relative_eq!(chroma([1.0, 0.0, 0.0]), 1.0, epsilon = 1e-6);
    }
}
