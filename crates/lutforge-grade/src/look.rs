//! Profile selection.
//!
//! A [`Look`] wraps either parameter schema behind one [`ColorGrade`]
//! value so the CLI and preview loop can pick a profile at runtime
//! without generics leaking upward.

use std::str::FromStr;

use lutforge_core::ColorGrade;
use serde_json::Map;

use crate::camera::CameraParams;
use crate::cinematic::GradeParams;
use crate::merge::{MergeReport, merge_over_defaults};
use crate::schema::ParamSet;

/// A parameter set of either profile.
#[derive(Debug, Clone, PartialEq)]
pub enum Look {
    /// Cinematic profile ([`GradeParams`]).
    Cinematic(GradeParams),
    /// Camera profile ([`CameraParams`]).
    Camera(CameraParams),
}

impl Look {
    /// Neutral look for the named profile.
    pub fn neutral(profile: Profile) -> Self {
        match profile {
            Profile::Cinematic => Self::Cinematic(GradeParams::default()),
            Profile::Camera => Self::Camera(CameraParams::default()),
        }
    }

    /// Profile of this look.
    pub fn profile(&self) -> Profile {
        match self {
            Self::Cinematic(_) => Profile::Cinematic,
            Self::Camera(_) => Profile::Camera,
        }
    }

    /// Rebuilds the look from defaults overlaid with `incoming`
    /// (merge-over-defaults policy; see [`merge_over_defaults`]).
    pub fn merged(profile: Profile, incoming: &Map<String, serde_json::Value>) -> (Self, MergeReport) {
        match profile {
            Profile::Cinematic => {
                let (params, report) = merge_over_defaults::<GradeParams>(incoming);
                (Self::Cinematic(params), report)
            }
            Profile::Camera => {
                let (params, report) = merge_over_defaults::<CameraParams>(incoming);
                (Self::Camera(params), report)
            }
        }
    }

    /// Serializes the current parameter values to a JSON object with wire
    /// keys.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Cinematic(p) => serde_json::to_value(p).expect("params serialize"),
            Self::Camera(p) => serde_json::to_value(p).expect("params serialize"),
        }
    }

    /// Sets one numeric knob by wire key.
    pub fn set(&mut self, key: &str, value: f32) -> bool {
        match self {
            Self::Cinematic(p) => p.set(key, value),
            Self::Camera(p) => p.set(key, value),
        }
    }

    /// Sets one boolean knob by wire key.
    pub fn set_flag(&mut self, key: &str, value: bool) -> bool {
        match self {
            Self::Cinematic(p) => p.set_flag(key, value),
            Self::Camera(p) => p.set_flag(key, value),
        }
    }
}

impl ColorGrade for Look {
    fn grade(&self, rgb: [f32; 3]) -> [f32; 3] {
        match self {
            Self::Cinematic(p) => p.grade(rgb),
            Self::Camera(p) => p.grade(rgb),
        }
    }

    fn is_identity(&self) -> bool {
        match self {
            Self::Cinematic(p) => p.is_identity(),
            Self::Camera(p) => p.is_identity(),
        }
    }
}

/// Profile name, parseable from CLI arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Profile {
    /// Exposure / CDL / split-tone stills profile.
    #[default]
    Cinematic,
    /// Live-feed profile with fade, posterize, vibrance, monochrome.
    Camera,
}

impl FromStr for Profile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "cinematic" => Ok(Self::Cinematic),
            "camera" => Ok(Self::Camera),
            other => Err(format!("unknown profile '{other}' (expected: cinematic, camera)")),
        }
    }
}

impl std::fmt::Display for Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cinematic => write!(f, "cinematic"),
            Self::Camera => write!(f, "camera"),
        }
    }
}
