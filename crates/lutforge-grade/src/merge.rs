//! Merging untrusted JSON into a parameter schema.
//!
//! Remote replies and user parameter files are both JSON objects of
//! unknown quality: extra keys, numbers-as-strings, out-of-range values.
//! The merge is the single point where external values become state, and
//! it follows the merge-over-defaults policy: start from the neutral set,
//! overlay every recognized, salvageable key, and drop the rest. It never
//! fails and never yields a partially valid set.

use serde_json::{Map, Value};

use crate::schema::ParamSet;

/// What happened to each incoming key during a merge.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MergeReport {
    /// Keys applied as-is (after range clamping).
    pub applied: Vec<String>,
    /// Keys applied after string-to-number coercion.
    pub coerced: Vec<String>,
    /// Known keys whose values were unusable; the default was kept.
    pub defaulted: Vec<String>,
    /// Keys not part of the schema, silently dropped.
    pub ignored: Vec<String>,
}

impl MergeReport {
    /// True when no incoming key survived.
    pub fn nothing_applied(&self) -> bool {
        self.applied.is_empty() && self.coerced.is_empty()
    }
}

/// Builds a parameter set from defaults overlaid with `incoming`.
///
/// Per key: numbers pass through (NaN/infinite are unusable), strings are
/// coerced when they parse as a number, booleans feed the schema's flag
/// knobs, everything else keeps the default. All applied values are
/// clamped into the schema range.
pub fn merge_over_defaults<P: ParamSet>(incoming: &Map<String, Value>) -> (P, MergeReport) {
    let mut params = P::default();
    let mut report = MergeReport::default();

    for (key, value) in incoming {
        if let Some(flag) = P::FLAGS.iter().find(|f| f.key == key) {
            match coerce_bool(value) {
                Some(b) => {
                    params.set_flag(flag.key, b);
                    report.applied.push(key.clone());
                }
                None => report.defaulted.push(key.clone()),
            }
            continue;
        }

        if P::spec(key).is_none() {
            report.ignored.push(key.clone());
            continue;
        }

        match value {
            Value::Number(n) => match n.as_f64() {
                Some(v) if v.is_finite() => {
                    params.set(key, v as f32);
                    report.applied.push(key.clone());
                }
                _ => report.defaulted.push(key.clone()),
            },
            Value::String(s) => match s.trim().parse::<f32>() {
                Ok(v) if v.is_finite() => {
                    params.set(key, v);
                    report.coerced.push(key.clone());
                }
                _ => report.defaulted.push(key.clone()),
            },
            _ => report.defaulted.push(key.clone()),
        }
    }

    (params, report)
}

fn coerce_bool(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::CameraParams;
    use crate::cinematic::GradeParams;

    fn obj(json: &str) -> Map<String, Value> {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let incoming = obj(r#"{"exposure": 1.0, "thought_process": "moody", "filmStock": 3}"#);
        let (params, report) = merge_over_defaults::<GradeParams>(&incoming);
        assert_eq!(params.exposure, 1.0);
        assert_eq!(report.ignored, vec!["filmStock", "thought_process"]);
    }

    #[test]
    fn numeric_strings_are_coerced() {
        let incoming = obj(r#"{"contrast": "1.3", "saturation": " 0.8 "}"#);
        let (params, report) = merge_over_defaults::<GradeParams>(&incoming);
        assert_eq!(params.contrast, 1.3);
        assert_eq!(params.saturation, 0.8);
        assert_eq!(report.coerced.len(), 2);
    }

    #[test]
    fn garbage_falls_back_to_defaults() {
        let incoming =
            obj(r#"{"exposure": "quite bright", "tint": null, "liftR": [0.1], "gammaG": {"v": 1}}"#);
        let (params, report) = merge_over_defaults::<GradeParams>(&incoming);
        assert_eq!(params, GradeParams::default());
        assert_eq!(report.defaulted.len(), 4);
        assert!(report.nothing_applied());
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let incoming = obj(r#"{"exposure": 12.0, "liftB": -3.0}"#);
        let (params, _) = merge_over_defaults::<GradeParams>(&incoming);
        assert_eq!(params.exposure, 2.0);
        assert_eq!(params.lift_b, -0.2);
    }

    #[test]
    fn partial_reply_keeps_defaults_for_missing_keys() {
        let incoming = obj(r#"{"temperature": -0.6}"#);
        let (params, _) = merge_over_defaults::<GradeParams>(&incoming);
        assert_eq!(params.temperature, -0.6);
        assert_eq!(params.contrast, 1.0);
        assert_eq!(params.gain_r, 1.0);
    }

    #[test]
    fn boolean_knob_accepts_bool_and_stringly_bool() {
        let incoming = obj(r#"{"monochrome": true, "vibrance": 25}"#);
        let (params, _) = merge_over_defaults::<CameraParams>(&incoming);
        assert!(params.monochrome);
        assert_eq!(params.vibrance, 25.0);

        let incoming = obj(r#"{"monochrome": "true"}"#);
        let (params, report) = merge_over_defaults::<CameraParams>(&incoming);
        assert!(params.monochrome);
        assert_eq!(report.applied, vec!["monochrome"]);

        let incoming = obj(r#"{"monochrome": 7}"#);
        let (params, report) = merge_over_defaults::<CameraParams>(&incoming);
        assert!(!params.monochrome);
        assert_eq!(report.defaulted, vec!["monochrome"]);
    }

    #[test]
    fn never_panics_on_hostile_payloads() {
        for raw in [
            r#"{}"#,
            r#"{"exposure": "1e999"}"#,
            r#"{"exposure": "NaN"}"#,
            r#"{"": 1, "exposure": {}}"#,
        ] {
            let incoming = obj(raw);
            let (_, _) = merge_over_defaults::<GradeParams>(&incoming);
        }
    }
}
