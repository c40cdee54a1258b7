//! The camera profile: the richer live-feed engine.
//!
//! Documented stage order (distinct from the cinematic profile, never
//! interleaved with it):
//!
//! 1. brightness (multiplier `1 + b/100`)
//! 2. contrast - the -50..50 slider is normalized to a 0.5..1.5
//!    multiplier and then squared (the squared convention)
//! 3. gamma curve `v^(1/gamma)`, guarded against non-positive inputs and
//!    skipped entirely when gamma == 1.0 (exact equality, not a tolerance)
//! 4. fade (lift toward white, blacks hardest)
//! 5. shadow/highlight tonal masks (cubed luma weights, signed strength)
//! 6. posterize - skipped at 0; otherwise quantize to
//!    `2 + (1 - p/100) * 20` levels via floor-division
//! 7. warmth / tint channel shifts
//! 8. saturation (multiplier `1 + s/100`)
//! 9. vibrance (protects already-saturated pixels, uniform desaturation
//!    when negative)
//! 10. split toning with squared luma weights (skipped when all six
//!     components are exactly 0)
//! 11. optional monochrome: a hue band near red survives in color, the
//!     rest collapses to luma through a fixed contrast curve
//! 12. final clamp to [0, 1]

use lutforge_core::ColorGrade;
use lutforge_core::pixel::{chroma, clamp01, hue, luminance_rec709};
use serde::{Deserialize, Serialize};

use crate::schema::{FlagSpec, ParamSet, ParamSpec};
use crate::stages::{self, ToneWeight};

/// Warmth/tint shift per full slider deflection.
const WB_SCALE: f32 = 0.2;

/// Slope of the luma contrast curve applied by the monochrome stage.
const MONO_CONTRAST: f32 = 1.15;

/// Camera grading parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CameraParams {
    /// Brightness slider, -100..100. 0 is neutral.
    pub brightness: f32,
    /// Contrast slider, -50..50. 0 is neutral (squared convention).
    pub contrast: f32,
    /// Gamma, 0.2..3.0. 1.0 is neutral and short-circuits the stage.
    pub gamma: f32,
    /// Fade, 0..100. 0 is neutral.
    pub fade: f32,
    /// Shadow lift, -100..100. 0 is neutral.
    pub shadows: f32,
    /// Highlight lift, -100..100. 0 is neutral.
    pub highlights: f32,
    /// Posterize strength, 0..100. 0 disables the stage.
    pub posterize: f32,
    /// Warmth slider, -100..100. 0 is neutral.
    pub warmth: f32,
    /// Tint slider, -100..100. 0 is neutral.
    pub tint: f32,
    /// Saturation slider, -100..100. 0 is neutral.
    pub saturation: f32,
    /// Vibrance slider, -100..100. 0 is neutral.
    pub vibrance: f32,
    /// Split-tone shadow tint, red. -0.2..0.2.
    pub shadow_tint_r: f32,
    /// Split-tone shadow tint, green.
    pub shadow_tint_g: f32,
    /// Split-tone shadow tint, blue.
    pub shadow_tint_b: f32,
    /// Split-tone highlight tint, red. -0.2..0.2.
    pub highlight_tint_r: f32,
    /// Split-tone highlight tint, green.
    pub highlight_tint_g: f32,
    /// Split-tone highlight tint, blue.
    pub highlight_tint_b: f32,
    /// Monochrome mode: desaturate everything outside a red hue band.
    pub monochrome: bool,
}

impl Default for CameraParams {
    fn default() -> Self {
        Self {
            brightness: 0.0,
            contrast: 0.0,
            gamma: 1.0,
            fade: 0.0,
            shadows: 0.0,
            highlights: 0.0,
            posterize: 0.0,
            warmth: 0.0,
            tint: 0.0,
            saturation: 0.0,
            vibrance: 0.0,
            shadow_tint_r: 0.0,
            shadow_tint_g: 0.0,
            shadow_tint_b: 0.0,
            highlight_tint_r: 0.0,
            highlight_tint_g: 0.0,
            highlight_tint_b: 0.0,
            monochrome: false,
        }
    }
}

impl CameraParams {
    /// Effective contrast multiplier: normalize the slider to 0.5..1.5,
    /// then square.
    #[inline]
    fn contrast_factor(&self) -> f32 {
        let m = 0.5 + (self.contrast + 50.0) / 100.0;
        m * m
    }

    #[inline]
    fn split_tone_is_neutral(&self) -> bool {
        self.shadow_tint_r == 0.0
            && self.shadow_tint_g == 0.0
            && self.shadow_tint_b == 0.0
            && self.highlight_tint_r == 0.0
            && self.highlight_tint_g == 0.0
            && self.highlight_tint_b == 0.0
    }
}

/// Monochrome stage: keep a red hue band in color, collapse the rest to
/// luma through a fixed contrast curve.
fn monochrome(rgb: [f32; 3]) -> [f32; 3] {
    let h = hue(rgb);
    let c = chroma(rgb);
    let max = rgb[0].max(rgb[1]).max(rgb[2]);
    let red_band = h >= 0.96 || h <= 0.04;
    if red_band && c > 0.15 && max > 0.2 {
        return rgb;
    }
    let luma = luminance_rec709(rgb);
    let curved = (luma - 0.5) * MONO_CONTRAST + 0.5;
    [curved, curved, curved]
}

impl ColorGrade for CameraParams {
    fn grade(&self, rgb: [f32; 3]) -> [f32; 3] {
        // 1. Brightness
        let b = 1.0 + self.brightness / 100.0;
        let mut px = [rgb[0] * b, rgb[1] * b, rgb[2] * b];

        // 2. Contrast (squared convention)
        px = stages::contrast(px, self.contrast_factor());

        // 3. Gamma curve. Exact-equality short-circuit at 1.0.
        if self.gamma != 1.0 {
            let inv = 1.0 / self.gamma;
            px = [
                if px[0] > 0.0 { px[0].powf(inv) } else { px[0] },
                if px[1] > 0.0 { px[1].powf(inv) } else { px[1] },
                if px[2] > 0.0 { px[2].powf(inv) } else { px[2] },
            ];
        }

        // 4. Fade
        px = stages::fade(px, self.fade / 100.0);

        // 5. Shadow/highlight masks
        px = stages::tonal_masks(px, self.shadows / 100.0, self.highlights / 100.0);

        // 6. Posterize, skipped at zero strength
        if self.posterize != 0.0 {
            let steps = 2.0 + (1.0 - self.posterize / 100.0) * 20.0;
            px = stages::posterize(px, steps);
        }

        // 7. Warmth / tint
        px = stages::white_balance(px, self.warmth / 100.0, self.tint / 100.0, WB_SCALE);

        // 8. Saturation
        px = stages::saturation(px, 1.0 + self.saturation / 100.0);

        // 9. Vibrance
        px = stages::vibrance(px, self.vibrance / 100.0);

        // 10. Split toning, squared luma weights
        if !self.split_tone_is_neutral() {
            px = stages::split_tone(
                px,
                [self.shadow_tint_r, self.shadow_tint_g, self.shadow_tint_b],
                [self.highlight_tint_r, self.highlight_tint_g, self.highlight_tint_b],
                ToneWeight::Squared,
            );
        }

        // 11. Monochrome
        if self.monochrome {
            px = monochrome(px);
        }

        // 12. Final clamp
        [clamp01(px[0]), clamp01(px[1]), clamp01(px[2])]
    }

    fn is_identity(&self) -> bool {
        *self == Self::default()
    }
}

impl ParamSet for CameraParams {
    const PROFILE: &'static str = "camera";

    const SPECS: &'static [ParamSpec] = &[
        ParamSpec { key: "brightness", min: -100.0, max: 100.0, default: 0.0, doc: "Brightness slider (0 is neutral)" },
        ParamSpec { key: "contrast", min: -50.0, max: 50.0, default: 0.0, doc: "Contrast slider (0 is neutral)" },
        ParamSpec { key: "gamma", min: 0.2, max: 3.0, default: 1.0, doc: "Gamma curve (1.0 is neutral)" },
        ParamSpec { key: "fade", min: 0.0, max: 100.0, default: 0.0, doc: "Washed-film black lift (0 is off)" },
        ParamSpec { key: "shadows", min: -100.0, max: 100.0, default: 0.0, doc: "Shadow lift/crush (0 is neutral)" },
        ParamSpec { key: "highlights", min: -100.0, max: 100.0, default: 0.0, doc: "Highlight lift/crush (0 is neutral)" },
        ParamSpec { key: "posterize", min: 0.0, max: 100.0, default: 0.0, doc: "Posterize strength (0 disables)" },
        ParamSpec { key: "warmth", min: -100.0, max: 100.0, default: 0.0, doc: "Warmth: negative cool, positive warm" },
        ParamSpec { key: "tint", min: -100.0, max: 100.0, default: 0.0, doc: "Tint: negative green, positive magenta" },
        ParamSpec { key: "saturation", min: -100.0, max: 100.0, default: 0.0, doc: "Saturation slider (0 is neutral)" },
        ParamSpec { key: "vibrance", min: -100.0, max: 100.0, default: 0.0, doc: "Vibrance: boosts muted colors, protects saturated ones" },
        ParamSpec { key: "shadowTintR", min: -0.2, max: 0.2, default: 0.0, doc: "Split-tone shadow tint, red" },
        ParamSpec { key: "shadowTintG", min: -0.2, max: 0.2, default: 0.0, doc: "Split-tone shadow tint, green" },
        ParamSpec { key: "shadowTintB", min: -0.2, max: 0.2, default: 0.0, doc: "Split-tone shadow tint, blue" },
        ParamSpec { key: "highlightTintR", min: -0.2, max: 0.2, default: 0.0, doc: "Split-tone highlight tint, red" },
        ParamSpec { key: "highlightTintG", min: -0.2, max: 0.2, default: 0.0, doc: "Split-tone highlight tint, green" },
        ParamSpec { key: "highlightTintB", min: -0.2, max: 0.2, default: 0.0, doc: "Split-tone highlight tint, blue" },
    ];

    const FLAGS: &'static [FlagSpec] = &[FlagSpec {
        key: "monochrome",
        default: false,
        doc: "Black & white with a preserved red hue band",
    }];

    fn get(&self, key: &str) -> Option<f32> {
        Some(match key {
            "brightness" => self.brightness,
            "contrast" => self.contrast,
            "gamma" => self.gamma,
            "fade" => self.fade,
            "shadows" => self.shadows,
            "highlights" => self.highlights,
            "posterize" => self.posterize,
            "warmth" => self.warmth,
            "tint" => self.tint,
            "saturation" => self.saturation,
            "vibrance" => self.vibrance,
            "shadowTintR" => self.shadow_tint_r,
            "shadowTintG" => self.shadow_tint_g,
            "shadowTintB" => self.shadow_tint_b,
            "highlightTintR" => self.highlight_tint_r,
            "highlightTintG" => self.highlight_tint_g,
            "highlightTintB" => self.highlight_tint_b,
            _ => return None,
        })
    }

    fn set(&mut self, key: &str, value: f32) -> bool {
        let Some(spec) = Self::spec(key) else {
            return false;
        };
        let value = spec.clamp(value);
        let field = match key {
            "brightness" => &mut self.brightness,
            "contrast" => &mut self.contrast,
            "gamma" => &mut self.gamma,
            "fade" => &mut self.fade,
            "shadows" => &mut self.shadows,
            "highlights" => &mut self.highlights,
            "posterize" => &mut self.posterize,
            "warmth" => &mut self.warmth,
            "tint" => &mut self.tint,
            "saturation" => &mut self.saturation,
            "vibrance" => &mut self.vibrance,
            "shadowTintR" => &mut self.shadow_tint_r,
            "shadowTintG" => &mut self.shadow_tint_g,
            "shadowTintB" => &mut self.shadow_tint_b,
            "highlightTintR" => &mut self.highlight_tint_r,
            "highlightTintG" => &mut self.highlight_tint_g,
            "highlightTintB" => &mut self.highlight_tint_b,
            _ => return false,
        };
        *field = value;
        true
    }

    fn get_flag(&self, key: &str) -> Option<bool> {
        (key == "monochrome").then_some(self.monochrome)
    }

    fn set_flag(&mut self, key: &str, value: bool) -> bool {
        if key == "monochrome" {
            self.monochrome = value;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn defaults_are_identity() {
        let params = CameraParams::default();
        assert!(params.is_identity());
        for px in [[0.0, 0.0, 0.0], [0.5, 0.5, 0.5], [1.0, 1.0, 1.0], [0.2, 0.7, 0.4]] {
            let out = params.grade(px);
            for c in 0..3 {
                assert_relative_eq!(out[c], px[c], epsilon = 1e-5);
            }
        }
    }

    #[test]
    fn contrast_slider_squares_the_multiplier() {
        let params = CameraParams { contrast: 50.0, ..Default::default() };
        assert_relative_eq!(params.contrast_factor(), 2.25, epsilon = 1e-6);
        let neutral = CameraParams::default();
        assert_relative_eq!(neutral.contrast_factor(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn gamma_one_short_circuits() {
        // A value pushed above 1.0 by brightness must pass through the
        // gamma stage untouched when gamma is exactly 1.0.
        let params = CameraParams { brightness: 50.0, ..Default::default() };
        let out = params.grade([0.9, 0.9, 0.9]);
        for c in out {
            assert_relative_eq!(c, 1.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn posterize_zero_is_skipped() {
        let a = CameraParams::default();
        let b = CameraParams { posterize: 0.0, ..Default::default() };
        let px = [0.333, 0.666, 0.123];
        assert_eq!(a.grade(px), b.grade(px));
    }

    #[test]
    fn posterize_quantizes() {
        let params = CameraParams { posterize: 100.0, ..Default::default() };
        // steps = 2: every channel lands on 0, 0.5, or 1
        let out = params.grade([0.3, 0.6, 0.9]);
        for c in out {
            assert!((c - 0.0).abs() < 1e-6 || (c - 0.5).abs() < 1e-6 || (c - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn monochrome_preserves_strong_reds() {
        let params = CameraParams { monochrome: true, ..Default::default() };
        let red = params.grade([0.8, 0.1, 0.1]);
        assert!(red[0] > red[1], "red band should stay in color");
        let green = params.grade([0.1, 0.8, 0.1]);
        assert_relative_eq!(green[0], green[1], epsilon = 1e-6);
        assert_relative_eq!(green[1], green[2], epsilon = 1e-6);
    }

    #[test]
    fn output_stays_in_range_for_extreme_params() {
        for extreme in [true, false] {
            let mut params = CameraParams::default();
            for spec in CameraParams::SPECS {
                params.set(spec.key, if extreme { spec.max } else { spec.min });
            }
            params.set_flag("monochrome", extreme);
            for px in [[0.0, 0.0, 0.0], [1.0, 1.0, 1.0], [0.9, 0.1, 0.5], [0.2, 0.2, 0.2]] {
                let out = params.grade(px);
                for c in out {
                    assert!(c.is_finite() && (0.0..=1.0).contains(&c), "out of range: {out:?}");
                }
            }
        }
    }

    #[test]
    fn fade_lifts_blacks_hardest() {
        let params = CameraParams { fade: 100.0, ..Default::default() };
        let black = params.grade([0.0, 0.0, 0.0]);
        let white = params.grade([1.0, 1.0, 1.0]);
        assert_relative_eq!(black[0], 0.5, epsilon = 1e-5);
        assert_relative_eq!(white[0], 1.0, epsilon = 1e-5);
    }
}
