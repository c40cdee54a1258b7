//! Shared stage math.
//!
//! Small pure helpers the two engines compose. Each takes and returns
//! plain channel values; clamping policy stays with the engines (only the
//! final output is bounded, intermediates may exceed [0, 1]).

use lutforge_core::pixel::{chroma, clamp01, luminance_rec709};

/// Exposure in photographic stops: multiply by `2^stops`.
#[inline]
pub fn exposure(rgb: [f32; 3], stops: f32) -> [f32; 3] {
    let m = 2.0_f32.powf(stops);
    [rgb[0] * m, rgb[1] * m, rgb[2] * m]
}

/// White balance as signed channel shifts.
///
/// Positive `temperature` warms (R up, B down); negative cools. Positive
/// `tint` pushes magenta-ward... green channel up here, matching the
/// source convention where tint > 0 raises G. `scale` is the shift per
/// unit of parameter (0.2 for the normalized -1..1 knobs).
#[inline]
pub fn white_balance(rgb: [f32; 3], temperature: f32, tint: f32, scale: f32) -> [f32; 3] {
    [
        rgb[0] + temperature * scale,
        rgb[1] + tint * scale,
        rgb[2] - temperature * scale,
    ]
}

/// Contrast pivoted on mid-gray 0.5.
#[inline]
pub fn contrast(rgb: [f32; 3], factor: f32) -> [f32; 3] {
    [
        (rgb[0] - 0.5) * factor + 0.5,
        (rgb[1] - 0.5) * factor + 0.5,
        (rgb[2] - 0.5) * factor + 0.5,
    ]
}

/// Saturation around BT.709 luma. 0 = grayscale, 1 = unchanged.
#[inline]
pub fn saturation(rgb: [f32; 3], factor: f32) -> [f32; 3] {
    let luma = luminance_rec709(rgb);
    [
        luma + (rgb[0] - luma) * factor,
        luma + (rgb[1] - luma) * factor,
        luma + (rgb[2] - luma) * factor,
    ]
}

/// Split-tone weighting flavor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToneWeight {
    /// Linear `(1-L)` / `L` masks (cinematic profile).
    Linear,
    /// Squared `(1-L)^2` / `L^2` masks (camera profile).
    Squared,
}

/// Split toning: add a shadow tint weighted toward dark pixels and a
/// highlight tint weighted toward bright ones.
///
/// Skipped by callers when all six components are exactly 0; running it
/// anyway is harmless (the weights multiply zero).
#[inline]
pub fn split_tone(
    rgb: [f32; 3],
    shadow: [f32; 3],
    highlight: [f32; 3],
    weight: ToneWeight,
) -> [f32; 3] {
    let luma = clamp01(luminance_rec709(rgb));
    let (shadow_str, high_str) = match weight {
        ToneWeight::Linear => (1.0 - luma, luma),
        ToneWeight::Squared => ((1.0 - luma) * (1.0 - luma), luma * luma),
    };
    [
        rgb[0] + shadow[0] * shadow_str + highlight[0] * high_str,
        rgb[1] + shadow[1] * shadow_str + highlight[1] * high_str,
        rgb[2] + shadow[2] * shadow_str + highlight[2] * high_str,
    ]
}

/// Fade: lift values toward white, blacks hardest.
///
/// `amount` is normalized 0..1; full fade lifts black to 0.5.
#[inline]
pub fn fade(rgb: [f32; 3], amount: f32) -> [f32; 3] {
    [
        rgb[0] + amount * (1.0 - rgb[0]) * 0.5,
        rgb[1] + amount * (1.0 - rgb[1]) * 0.5,
        rgb[2] + amount * (1.0 - rgb[2]) * 0.5,
    ]
}

/// Shadow/highlight tonal masks: cubed luma weighting, signed strength
/// added per channel.
#[inline]
pub fn tonal_masks(rgb: [f32; 3], shadows: f32, highlights: f32) -> [f32; 3] {
    let luma = clamp01(luminance_rec709(rgb));
    let shadow_mask = (1.0 - luma).powi(3);
    let highlight_mask = luma.powi(3);
    let lift = shadows * shadow_mask + highlights * highlight_mask;
    [rgb[0] + lift, rgb[1] + lift, rgb[2] + lift]
}

/// Posterize: quantize each channel to `steps` discrete levels via
/// floor-division. Callers skip the stage at zero strength.
#[inline]
pub fn posterize(rgb: [f32; 3], steps: f32) -> [f32; 3] {
    [
        (rgb[0] * steps).floor() / steps,
        (rgb[1] * steps).floor() / steps,
        (rgb[2] * steps).floor() / steps,
    ]
}

/// Vibrance: saturation that protects already-saturated pixels.
///
/// Positive `amount` (normalized 0..1) boosts scaled by how desaturated
/// the pixel currently is; negative amounts desaturate uniformly.
#[inline]
pub fn vibrance(rgb: [f32; 3], amount: f32) -> [f32; 3] {
    let factor = if amount > 0.0 {
        1.0 + amount * (1.0 - chroma(rgb))
    } else {
        1.0 + amount
    };
    saturation(rgb, factor)
}
