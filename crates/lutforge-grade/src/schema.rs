//! Parameter schema introspection.
//!
//! Each parameter set is a closed collection of named knobs. The static
//! spec tables drive three consumers: range clamping on `set`, the merge
//! step for external values, and the system-instruction builder that
//! teaches the remote endpoint the vocabulary.

/// One numeric knob: wire key, valid range, neutral default, and the
/// one-line meaning sent to the remote endpoint.
#[derive(Debug, Clone, Copy)]
pub struct ParamSpec {
    /// Wire key (camelCase, as the remote endpoint emits it).
    pub key: &'static str,
    /// Minimum valid value.
    pub min: f32,
    /// Maximum valid value.
    pub max: f32,
    /// Neutral default; all-neutral means identity.
    pub default: f32,
    /// Semantic meaning, phrased for the instruction builder.
    pub doc: &'static str,
}

impl ParamSpec {
    /// Clamps a candidate value into this knob's range.
    #[inline]
    pub fn clamp(&self, value: f32) -> f32 {
        value.clamp(self.min, self.max)
    }
}

/// One boolean knob.
#[derive(Debug, Clone, Copy)]
pub struct FlagSpec {
    /// Wire key.
    pub key: &'static str,
    /// Neutral default.
    pub default: bool,
    /// Semantic meaning.
    pub doc: &'static str,
}

/// A closed, introspectable parameter set.
///
/// `Default` must produce the all-neutral (identity) set. `set` clamps
/// into the spec range and returns `false` for unknown keys, so callers
/// can report rather than silently drop typos when that matters.
pub trait ParamSet: Default {
    /// Human-readable profile name ("cinematic", "camera").
    const PROFILE: &'static str;

    /// Numeric knob table.
    const SPECS: &'static [ParamSpec];

    /// Boolean knob table (empty for most profiles).
    const FLAGS: &'static [FlagSpec] = &[];

    /// Reads a numeric knob by wire key.
    fn get(&self, key: &str) -> Option<f32>;

    /// Writes a numeric knob by wire key, clamping into range.
    /// Returns `false` when the key is not part of the schema.
    fn set(&mut self, key: &str, value: f32) -> bool;

    /// Reads a boolean knob by wire key.
    fn get_flag(&self, _key: &str) -> Option<bool> {
        None
    }

    /// Writes a boolean knob by wire key.
    fn set_flag(&mut self, _key: &str, _value: bool) -> bool {
        false
    }

    /// Looks up the spec for a wire key.
    fn spec(key: &str) -> Option<&'static ParamSpec> {
        Self::SPECS.iter().find(|s| s.key == key)
    }
}
