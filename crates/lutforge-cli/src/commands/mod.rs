//! Subcommand implementations.

pub mod grade;
pub mod lut;
pub mod lut_info;
pub mod preview;
pub mod prompt;

use std::path::Path;

use anyhow::{Context, Result, bail};
use lutforge_grade::look::{Look, Profile};
use serde_json::Value;
use tracing::warn;

/// Builds the active look: neutral defaults, overlaid with an optional
/// parameter file, then `--set` overrides. External values go through the
/// merge (clamped, coerced, unknowns dropped); `--set` keys are typed by
/// the user and get a hard error instead of a silent drop.
pub fn build_look(profile: Profile, params: Option<&Path>, sets: &[String]) -> Result<Look> {
    let mut look = match params {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read parameter file {}", path.display()))?;
            let value: Value = serde_json::from_str(&text)
                .with_context(|| format!("invalid JSON in {}", path.display()))?;
            let Value::Object(map) = value else {
                bail!("{} must contain a JSON object", path.display());
            };
            let (look, report) = Look::merged(profile, &map);
            if !report.ignored.is_empty() {
                warn!(keys = ?report.ignored, "ignoring unknown parameter keys");
            }
            if !report.defaulted.is_empty() {
                warn!(keys = ?report.defaulted, "unusable values replaced by defaults");
            }
            look
        }
        None => Look::neutral(profile),
    };

    for entry in sets {
        let (key, raw) = entry
            .split_once('=')
            .with_context(|| format!("expected KEY=VALUE, got '{entry}'"))?;
        apply_set(&mut look, key.trim(), raw.trim())
            .with_context(|| format!("bad --set '{entry}'"))?;
    }

    Ok(look)
}

fn apply_set(look: &mut Look, key: &str, raw: &str) -> Result<()> {
    if let Ok(flag) = raw.parse::<bool>() {
        if look.set_flag(key, flag) {
            return Ok(());
        }
    }
    match raw.parse::<f32>() {
        Ok(value) => {
            if look.set(key, value) {
                Ok(())
            } else {
                bail!("unknown parameter '{key}' for the {} profile", look.profile())
            }
        }
        Err(_) => bail!("value '{raw}' is neither a number nor a boolean"),
    }
}
