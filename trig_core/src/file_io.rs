//! # File I/O Module
//!
//! Reads and writes settings files with the same safety rules the rest of
//! the tooling relies on:
//! - **Atomic saves**: Write to .tmp, verify, rename to prevent corruption
//! - **Version validation**: Ensure schema compatibility
//!
//! ## File Format
//!
//! Settings are plain pretty-printed JSON.
//!
//! ## Example
//!
//! ```rust,no_run
//! use trig_core::file_io::{save_settings, load_settings};
//! use trig_core::settings::Settings;
//! use std::path::Path;
//!
//! let path = Path::new("trigcalc.json");
//! save_settings(&Settings::default(), path).unwrap();
//! let loaded = load_settings(path).unwrap();
//! assert_eq!(loaded.samples.curve, 1000);
//! ```

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;

use crate::errors::{TrigError, TrigResult};
use crate::settings::{Settings, SCHEMA_VERSION};

/// Save settings using an atomic write pattern.
///
/// 1. Write to `<path>.tmp`
/// 2. Re-read and parse the temp file
/// 3. Rename over the target
pub fn save_settings(settings: &Settings, path: &Path) -> TrigResult<()> {
    let json = serde_json::to_string_pretty(settings).map_err(|e| TrigError::SerializationError {
        reason: e.to_string(),
    })?;

    let tmp_path = path.with_extension("json.tmp");

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        TrigError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.write_all(json.as_bytes()).map_err(|e| {
        TrigError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.sync_all().map_err(|e| {
        TrigError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
    })?;
    drop(tmp_file);

    // Verify before replacing the previous file
    let written = fs::read_to_string(&tmp_path).map_err(|e| {
        TrigError::file_error("verify temp file", tmp_path.display().to_string(), e.to_string())
    })?;
    if let Err(e) = serde_json::from_str::<Settings>(&written) {
        let _ = fs::remove_file(&tmp_path);
        return Err(TrigError::SerializationError {
            reason: format!("Verification of {} failed: {}", tmp_path.display(), e),
        });
    }

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        TrigError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    log::info!("saved settings to {}", path.display());
    Ok(())
}

/// Load settings from a file.
///
/// # Returns
///
/// * `Ok(Settings)` - Successfully loaded (sample counts normalized)
/// * `Err(TrigError::VersionMismatch)` - File version is incompatible
/// * `Err(TrigError::SerializationError)` - Invalid JSON
/// * `Err(TrigError::FileError)` - I/O error
pub fn load_settings(path: &Path) -> TrigResult<Settings> {
    let mut file = File::open(path).map_err(|e| {
        TrigError::file_error("open", path.display().to_string(), e.to_string())
    })?;

    let mut contents = String::new();
    file.read_to_string(&mut contents).map_err(|e| {
        TrigError::file_error("read", path.display().to_string(), e.to_string())
    })?;

    let settings: Settings = serde_json::from_str(&contents).map_err(|e| TrigError::SerializationError {
        reason: format!("Invalid JSON in {}: {}", path.display(), e),
    })?;

    validate_version(&settings.version)?;

    log::info!("loaded settings from {}", path.display());
    Ok(settings.normalized())
}

/// Settings files are readable when their major version matches ours.
fn validate_version(file_version: &str) -> TrigResult<()> {
    let major = |v: &str| v.split('.').next().and_then(|m| m.parse::<u32>().ok());

    match (major(file_version), major(SCHEMA_VERSION)) {
        (Some(file), Some(ours)) if file == ours => Ok(()),
        _ => Err(TrigError::VersionMismatch {
            file_version: file_version.to_string(),
            expected_version: SCHEMA_VERSION.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env::temp_dir;
    use std::path::PathBuf;

    fn temp_settings_path(name: &str) -> PathBuf {
        temp_dir().join(format!("trigcalc_test_{}.json", name))
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let path = temp_settings_path("roundtrip");

        let mut settings = Settings::default();
        settings.dark_mode = true;
        settings.samples.wave = 4000;
        save_settings(&settings, &path).unwrap();

        let loaded = load_settings(&path).unwrap();
        assert!(loaded.dark_mode);
        assert_eq!(loaded.samples.wave, 4000);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_atomic_save_creates_no_tmp_file() {
        let path = temp_settings_path("atomic");
        let tmp_path = path.with_extension("json.tmp");

        save_settings(&Settings::default(), &path).unwrap();

        assert!(!tmp_path.exists());
        assert!(path.exists());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_invalid_json() {
        let path = temp_settings_path("invalid");
        fs::write(&path, "{ not json").unwrap();

        let err = load_settings(&path).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_missing_file() {
        let path = temp_settings_path("does_not_exist");
        let _ = fs::remove_file(&path);
        let err = load_settings(&path).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }

    #[test]
    fn test_load_normalizes_samples() {
        let path = temp_settings_path("normalize");
        fs::write(&path, r#"{ "version": "0.1.0", "samples": { "curve": 0 } }"#).unwrap();

        let loaded = load_settings(&path).unwrap();
        assert_eq!(loaded.samples.curve, 2);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_version_validation() {
        assert!(validate_version(SCHEMA_VERSION).is_ok());
        assert!(validate_version("0.1.5").is_ok());
        assert!(validate_version("0.4").is_ok());
        assert!(validate_version("1.0.0").is_err());
        assert!(validate_version("garbage").is_err());
        assert!(validate_version("").is_err());
    }
}
