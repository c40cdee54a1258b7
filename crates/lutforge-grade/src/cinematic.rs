//! The cinematic profile: exposure, white balance, ASC-CDL, contrast,
//! saturation, split toning.
//!
//! Stage order is load-bearing; later stages operate on the output of
//! earlier ones and reordering changes the look:
//!
//! 1. exposure (photographic stops)
//! 2. white balance (temperature / tint channel shifts)
//! 3. primary correction: per-channel `pow(max(0, v*gain + lift), gamma)`
//! 4. contrast pivoted on 0.5 - the knob IS the multiplier (linear
//!    convention, 0.5..1.5)
//! 5. saturation around BT.709 luma
//! 6. split toning with linear `(1-L)` / `L` weights
//! 7. final clamp to [0, 1]
//!
//! Intermediates may exceed [0, 1]; only the CDL stage floors its own
//! base at 0 and only the final output is clamped.

use lutforge_core::ColorGrade;
use lutforge_core::pixel::{clamp01, safe_pow};
use serde::{Deserialize, Serialize};

use crate::schema::{ParamSet, ParamSpec};
use crate::stages::{self, ToneWeight};

/// White-balance shift per unit of temperature/tint.
const WB_SCALE: f32 = 0.2;

/// Cinematic grading parameters.
///
/// All knobs default to neutral; [`ColorGrade::grade`] with the default
/// set is the identity transform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GradeParams {
    /// Exposure in stops, -2..2. 0 is neutral.
    pub exposure: f32,
    /// Contrast multiplier, 0.5..1.5. 1 is neutral.
    pub contrast: f32,
    /// Saturation multiplier, 0..2. 1 is neutral.
    pub saturation: f32,
    /// Temperature, -1 (cool) .. 1 (warm). 0 is neutral.
    pub temperature: f32,
    /// Tint, -1 (green) .. 1 (magenta). 0 is neutral.
    pub tint: f32,
    /// CDL lift (shadows), red. -0.2..0.2.
    pub lift_r: f32,
    /// CDL lift, green.
    pub lift_g: f32,
    /// CDL lift, blue.
    pub lift_b: f32,
    /// CDL gamma (midtones), red. 0.8..1.2.
    pub gamma_r: f32,
    /// CDL gamma, green.
    pub gamma_g: f32,
    /// CDL gamma, blue.
    pub gamma_b: f32,
    /// CDL gain (highlights), red. 0.8..1.2.
    pub gain_r: f32,
    /// CDL gain, green.
    pub gain_g: f32,
    /// CDL gain, blue.
    pub gain_b: f32,
    /// Shadow tint, red. -0.2..0.2.
    pub shadow_tint_r: f32,
    /// Shadow tint, green.
    pub shadow_tint_g: f32,
    /// Shadow tint, blue.
    pub shadow_tint_b: f32,
    /// Highlight tint, red. -0.2..0.2.
    pub highlight_tint_r: f32,
    /// Highlight tint, green.
    pub highlight_tint_g: f32,
    /// Highlight tint, blue.
    pub highlight_tint_b: f32,
}

impl Default for GradeParams {
    fn default() -> Self {
        Self {
            exposure: 0.0,
            contrast: 1.0,
            saturation: 1.0,
            temperature: 0.0,
            tint: 0.0,
            lift_r: 0.0,
            lift_g: 0.0,
            lift_b: 0.0,
            gamma_r: 1.0,
            gamma_g: 1.0,
            gamma_b: 1.0,
            gain_r: 1.0,
            gain_g: 1.0,
            gain_b: 1.0,
            shadow_tint_r: 0.0,
            shadow_tint_g: 0.0,
            shadow_tint_b: 0.0,
            highlight_tint_r: 0.0,
            highlight_tint_g: 0.0,
            highlight_tint_b: 0.0,
        }
    }
}

impl GradeParams {
    /// True when every split-tone component is exactly 0.
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

impl ColorGrade for GradeParams {
    fn grade(&self, rgb: [f32; 3]) -> [f32; 3] {
        // 1. Exposure
        let mut px = stages::exposure(rgb, self.exposure);

        // 2. White balance
        px = stages::white_balance(px, self.temperature, self.tint, WB_SCALE);

        // 3. ASC-CDL primary correction
        px = [
            safe_pow(px[0] * self.gain_r + self.lift_r, self.gamma_r),
            safe_pow(px[1] * self.gain_g + self.lift_g, self.gamma_g),
            safe_pow(px[2] * self.gain_b + self.lift_b, self.gamma_b),
        ];

        // 4. Contrast (the knob is the multiplier)
        px = stages::contrast(px, self.contrast);

        // 5. Saturation
        px = stages::saturation(px, self.saturation);

        // 6. Split toning, linear luma weights
        if !self.split_tone_is_neutral() {
            px = stages::split_tone(
                px,
                [self.shadow_tint_r, self.shadow_tint_g, self.shadow_tint_b],
                [self.highlight_tint_r, self.highlight_tint_g, self.highlight_tint_b],
                ToneWeight::Linear,
            );
        }

        // 7. Final clamp
        [clamp01(px[0]), clamp01(px[1]), clamp01(px[2])]
    }

    fn is_identity(&self) -> bool {
        *self == Self::default()
    }
}

impl ParamSet for GradeParams {
    const PROFILE: &'static str = "cinematic";

    const SPECS: &'static [ParamSpec] = &[
        ParamSpec { key: "exposure", min: -2.0, max: 2.0, default: 0.0, doc: "Exposure in stops (0.0 is neutral)" },
        ParamSpec { key: "contrast", min: 0.5, max: 1.5, default: 1.0, doc: "Contrast multiplier around mid-gray (1.0 is neutral)" },
        ParamSpec { key: "saturation", min: 0.0, max: 2.0, default: 1.0, doc: "Saturation multiplier (1.0 is neutral, 0.0 is grayscale)" },
        ParamSpec { key: "temperature", min: -1.0, max: 1.0, default: 0.0, doc: "White balance: -1.0 (blue/cool) to 1.0 (orange/warm)" },
        ParamSpec { key: "tint", min: -1.0, max: 1.0, default: 0.0, doc: "White balance: -1.0 (green) to 1.0 (magenta)" },
        ParamSpec { key: "liftR", min: -0.2, max: 0.2, default: 0.0, doc: "Shadow offset, red channel" },
        ParamSpec { key: "liftG", min: -0.2, max: 0.2, default: 0.0, doc: "Shadow offset, green channel" },
        ParamSpec { key: "liftB", min: -0.2, max: 0.2, default: 0.0, doc: "Shadow offset, blue channel" },
        ParamSpec { key: "gammaR", min: 0.8, max: 1.2, default: 1.0, doc: "Midtone power, red channel" },
        ParamSpec { key: "gammaG", min: 0.8, max: 1.2, default: 1.0, doc: "Midtone power, green channel" },
        ParamSpec { key: "gammaB", min: 0.8, max: 1.2, default: 1.0, doc: "Midtone power, blue channel" },
        ParamSpec { key: "gainR", min: 0.8, max: 1.2, default: 1.0, doc: "Highlight scale, red channel" },
        ParamSpec { key: "gainG", min: 0.8, max: 1.2, default: 1.0, doc: "Highlight scale, green channel" },
        ParamSpec { key: "gainB", min: 0.8, max: 1.2, default: 1.0, doc: "Highlight scale, blue channel" },
        ParamSpec { key: "shadowTintR", min: -0.2, max: 0.2, default: 0.0, doc: "Split-tone shadow tint, red" },
        ParamSpec { key: "shadowTintG", min: -0.2, max: 0.2, default: 0.0, doc: "Split-tone shadow tint, green" },
        ParamSpec { key: "shadowTintB", min: -0.2, max: 0.2, default: 0.0, doc: "Split-tone shadow tint, blue" },
        ParamSpec { key: "highlightTintR", min: -0.2, max: 0.2, default: 0.0, doc: "Split-tone highlight tint, red" },
        ParamSpec { key: "highlightTintG", min: -0.2, max: 0.2, default: 0.0, doc: "Split-tone highlight tint, green" },
        ParamSpec { key: "highlightTintB", min: -0.2, max: 0.2, default: 0.0, doc: "Split-tone highlight tint, blue" },
    ];

    fn get(&self, key: &str) -> Option<f32> {
        Some(match key {
            "exposure" => self.exposure,
            "contrast" => self.contrast,
            "saturation" => self.saturation,
            "temperature" => self.temperature,
            "tint" => self.tint,
            "liftR" => self.lift_r,
            "liftG" => self.lift_g,
            "liftB" => self.lift_b,
            "gammaR" => self.gamma_r,
            "gammaG" => self.gamma_g,
            "gammaB" => self.gamma_b,
            "gainR" => self.gain_r,
            "gainG" => self.gain_g,
            "gainB" => self.gain_b,
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
            "exposure" => &mut self.exposure,
            "contrast" => &mut self.contrast,
            "saturation" => &mut self.saturation,
            "temperature" => &mut self.temperature,
            "tint" => &mut self.tint,
            "liftR" => &mut self.lift_r,
            "liftG" => &mut self.lift_g,
            "liftB" => &mut self.lift_b,
            "gammaR" => &mut self.gamma_r,
            "gammaG" => &mut self.gamma_g,
            "gammaB" => &mut self.gamma_b,
            "gainR" => &mut self.gain_r,
            "gainG" => &mut self.gain_g,
            "gainB" => &mut self.gain_b,
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
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn defaults_are_identity() {
        let params = GradeParams::default();
        assert!(params.is_identity());
        for px in [[0.0, 0.0, 0.0], [0.5, 0.5, 0.5], [1.0, 1.0, 1.0], [0.1, 0.6, 0.9]] {
            let out = params.grade(px);
            for c in 0..3 {
                assert_relative_eq!(out[c], px[c], epsilon = 1e-6);
            }
        }
    }

    #[test]
    fn one_stop_doubles_mid_gray_to_white() {
        // exposure=1.0 doubles (0.5,0.5,0.5) to (1,1,1); every other stage
        // is identity at default, so the clamped output is pure white.
        let params = GradeParams { exposure: 1.0, ..Default::default() };
        let out = params.grade([0.5, 0.5, 0.5]);
        for c in out {
            assert_relative_eq!(c, 1.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn exposure_is_monotonic_on_mid_gray() {
        let mut prev = 0.0;
        for i in 0..=40 {
            let stops = -2.0 + i as f32 * 0.1;
            let params = GradeParams { exposure: stops, ..Default::default() };
            let out = params.grade([0.5, 0.5, 0.5]);
            let luma = lutforge_core::luminance_rec709(out);
            assert!(luma >= prev - 1e-6, "luma decreased at {stops} stops");
            prev = luma;
        }
    }

    #[test]
    fn output_stays_in_range_for_extreme_params() {
        let mut params = GradeParams::default();
        for spec in GradeParams::SPECS {
            params.set(spec.key, spec.max);
        }
        let corners = [
            [0.0, 0.0, 0.0],
            [1.0, 1.0, 1.0],
            [1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [0.0, 0.0, 1.0],
            [0.3, 0.7, 0.2],
        ];
        for px in corners {
            let out = params.grade(px);
            for c in out {
                assert!(c.is_finite() && (0.0..=1.0).contains(&c), "out of range: {out:?}");
            }
        }
        for spec in GradeParams::SPECS {
            params.set(spec.key, spec.min);
        }
        for px in corners {
            let out = params.grade(px);
            for c in out {
                assert!(c.is_finite() && (0.0..=1.0).contains(&c), "out of range: {out:?}");
            }
        }
    }

    #[test]
    fn negative_lift_never_produces_nan() {
        let params = GradeParams {
            lift_r: -0.2,
            gamma_r: 1.1,
            ..Default::default()
        };
        let out = params.grade([0.05, 0.05, 0.05]);
        assert!(out.iter().all(|c| c.is_finite()));
    }

    #[test]
    fn warm_temperature_pushes_red_over_blue() {
        let params = GradeParams { temperature: 0.5, ..Default::default() };
        let out = params.grade([0.5, 0.5, 0.5]);
        assert!(out[0] > out[2]);
        let cool = GradeParams { temperature: -0.5, ..Default::default() };
        let out = cool.grade([0.5, 0.5, 0.5]);
        assert!(out[2] > out[0]);
    }

    #[test]
    fn set_clamps_into_range() {
        let mut params = GradeParams::default();
        assert!(params.set("exposure", 9.0));
        assert_eq!(params.exposure, 2.0);
        assert!(!params.set("thoughtProcess", 1.0));
    }

    #[test]
    fn serde_wire_keys_are_camel_case() {
        let json = serde_json::to_value(GradeParams::default()).unwrap();
        assert!(json.get("liftR").is_some());
        assert!(json.get("shadowTintB").is_some());
        let parsed: GradeParams = serde_json::from_str(r#"{"exposure": 1.5}"#).unwrap();
        assert_eq!(parsed.exposure, 1.5);
        assert_eq!(parsed.contrast, 1.0);
    }
}
