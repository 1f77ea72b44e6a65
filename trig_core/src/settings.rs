//! # Calculator Settings
//!
//! Application-level configuration: sample densities for the charts, the
//! section shown at start-up and the UI theme. Settings never hold user
//! inputs; every section is recomputed from its current parameters.
//!
//! Settings serialize to a small JSON file (see [`crate::file_io`]).
//!
//! ## Example
//!
//! ```rust
//! use trig_core::settings::Settings;
//!
//! let settings = Settings::default();
//! assert_eq!(settings.samples.wave, 2000);
//!
//! let json = serde_json::to_string_pretty(&settings).unwrap();
//! let roundtrip: Settings = serde_json::from_str(&json).unwrap();
//! assert_eq!(settings, roundtrip);
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::calculations::Section;
use crate::errors::TrigResult;
use crate::file_io::load_settings;

/// Current schema version for settings files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Environment variable naming a settings file
pub const SETTINGS_ENV_VAR: &str = "TRIGCALC_SETTINGS";

/// Smallest sample count that still draws a line
const MIN_SAMPLES: usize = 2;

/// Global calculator settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Schema version for compatibility checking
    pub version: String,

    /// Section shown when the application starts
    pub default_section: Section,

    /// Sample counts used when building charts
    pub samples: SampleDensity,

    /// Dark UI theme
    pub dark_mode: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            version: SCHEMA_VERSION.to_string(),
            default_section: Section::BasicFunctions,
            samples: SampleDensity::default(),
            dark_mode: false,
        }
    }
}

impl Settings {
    /// Resolve settings from an explicit path, else the `TRIGCALC_SETTINGS`
    /// environment variable, else defaults.
    ///
    /// A configured file that does not exist yields defaults with a warning;
    /// a file that exists but cannot be parsed is an error.
    pub fn resolve(path: Option<&Path>) -> TrigResult<Settings> {
        match Settings::locate(path) {
            Some(path) if path.exists() => load_settings(&path),
            Some(path) => {
                log::warn!("settings file {} not found, using defaults", path.display());
                Ok(Settings::default())
            }
            None => Ok(Settings::default()),
        }
    }

    /// The settings file in effect: the explicit path, else `TRIGCALC_SETTINGS`.
    pub fn locate(path: Option<&Path>) -> Option<PathBuf> {
        path.map(Path::to_path_buf)
            .or_else(|| std::env::var_os(SETTINGS_ENV_VAR).map(PathBuf::from))
    }

    /// Copy with sample counts raised to the drawable minimum
    pub fn normalized(&self) -> Settings {
        Settings {
            samples: self.samples.normalized(),
            ..self.clone()
        }
    }
}

/// Number of samples per plotted curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SampleDensity {
    /// Function curves over [-2π, 2π] and inverse curves
    pub curve: usize,
    /// Wave curves over [-4π, 4π]
    pub wave: usize,
    /// Triangle angle sweep over [1°, 89°]
    pub sweep: usize,
    /// Principal-branch highlight
    pub branch: usize,
}

impl Default for SampleDensity {
    fn default() -> Self {
        SampleDensity {
            curve: 1000,
            wave: 2000,
            sweep: 100,
            branch: 100,
        }
    }
}

impl SampleDensity {
    pub fn normalized(&self) -> SampleDensity {
        SampleDensity {
            curve: self.curve.max(MIN_SAMPLES),
            wave: self.wave.max(MIN_SAMPLES),
            sweep: self.sweep.max(MIN_SAMPLES),
            branch: self.branch.max(MIN_SAMPLES),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.version, SCHEMA_VERSION);
        assert_eq!(settings.default_section, Section::BasicFunctions);
        assert_eq!(settings.samples.curve, 1000);
        assert_eq!(settings.samples.sweep, 100);
        assert!(!settings.dark_mode);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings: Settings = serde_json::from_str(r#"{ "dark_mode": true, "samples": { "wave": 500 } }"#).unwrap();
        assert!(settings.dark_mode);
        assert_eq!(settings.samples.wave, 500);
        assert_eq!(settings.samples.curve, 1000);
        assert_eq!(settings.version, SCHEMA_VERSION);
    }

    #[test]
    fn test_normalized_raises_sample_counts() {
        let mut settings = Settings::default();
        settings.samples.curve = 0;
        settings.samples.branch = 1;
        let normalized = settings.normalized();
        assert_eq!(normalized.samples.curve, 2);
        assert_eq!(normalized.samples.branch, 2);
        assert_eq!(normalized.samples.wave, 2000);
    }

    #[test]
    fn test_locate_prefers_explicit_path() {
        let path = Path::new("explicit.json");
        assert_eq!(Settings::locate(Some(path)), Some(PathBuf::from("explicit.json")));
    }

    #[test]
    fn test_resolve_missing_file_uses_defaults() {
        let path = std::env::temp_dir().join("trigcalc_test_missing_settings.json");
        let _ = std::fs::remove_file(&path);
        let settings = Settings::resolve(Some(&path)).unwrap();
        assert_eq!(settings, Settings::default());
    }
}
