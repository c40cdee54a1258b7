//! System-instruction builder.
//!
//! The instruction enumerates every knob of the active schema with its
//! exact range and meaning, so the endpoint only ever speaks our
//! vocabulary. It is generated from the same spec tables the merge step
//! validates against; the two cannot drift apart.

use lutforge_grade::ParamSet;

/// Builds the fixed system instruction for a parameter schema.
pub fn build_instruction<P: ParamSet>() -> String {
    let mut out = String::with_capacity(2048);
    out.push_str(
        "You are an expert senior colorist. Translate the user's natural-language \
         description of a look into a JSON configuration for a color grading engine.\n\
         \n\
         INSTRUCTIONS:\n\
         1. Analyze the mood, lighting, and style of the request.\n\
         2. Map it onto the parameters listed below, staying inside the stated ranges.\n\
         3. Return ONLY a single valid JSON object. No prose, no markdown, no code fences.\n\
         4. Omit any parameter you want left at its neutral default.\n\
         \n\
         PARAMETERS (strict ranges):\n",
    );
    for spec in P::SPECS {
        out.push_str(&format!(
            "- \"{}\": {} to {} (default {}). {}\n",
            spec.key, spec.min, spec.max, spec.default, spec.doc
        ));
    }
    for flag in P::FLAGS {
        out.push_str(&format!(
            "- \"{}\": true or false (default {}). {}\n",
            flag.key, flag.default, flag.doc
        ));
    }
    out.push_str("\nUse only the keys listed above. Values must be plain numbers or booleans.\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use lutforge_grade::{CameraParams, GradeParams};

    #[test]
    fn lists_every_numeric_knob() {
        let text = build_instruction::<GradeParams>();
        for spec in GradeParams::SPECS {
            assert!(text.contains(&format!("\"{}\"", spec.key)), "missing {}", spec.key);
        }
        assert!(text.contains("-2 to 2"));
    }

    #[test]
    fn lists_boolean_knobs_for_the_camera_schema() {
        let text = build_instruction::<CameraParams>();
        assert!(text.contains("\"monochrome\": true or false"));
    }

    #[test]
    fn demands_bare_json() {
        let text = build_instruction::<GradeParams>();
        assert!(text.contains("ONLY a single valid JSON object"));
    }
}
