//! Settings persistence - versioned JSON load/save of the user's record.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::settings::LifeSettings;

/// Schema version written by `save_settings`.
const SETTINGS_VERSION: u8 = 1;

/// On-disk wrapper around the settings record.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct SettingsFile {
    version: u8,
    settings: LifeSettings,
}

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("settings file io error: {0}")]
    Io(#[from] io::Error),
    #[error("settings file is not valid json: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("unsupported settings version: {0}")]
    UnsupportedVersion(u8),
}

/// Load the settings record, or `Ok(None)` when no file exists yet
/// (first launch).
pub fn load_settings(path: &Path) -> Result<Option<LifeSettings>, PersistenceError> {
    if !path.exists() {
        return Ok(None);
    }

    let raw = fs::read_to_string(path)?;
    let file: SettingsFile = serde_json::from_str(&raw)?;

    if file.version != SETTINGS_VERSION {
        return Err(PersistenceError::UnsupportedVersion(file.version));
    }

    Ok(Some(file.settings))
}

/// Write the settings record, creating parent directories as needed.
pub fn save_settings(path: &Path, settings: &LifeSettings) -> Result<(), PersistenceError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let file = SettingsFile {
        version: SETTINGS_VERSION,
        settings: settings.clone(),
    };
    let json = serde_json::to_string_pretty(&file)?;
    fs::write(path, json)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let settings = LifeSettings::new(
            NaiveDate::from_ymd_opt(1995, 1, 1).unwrap(),
            75,
            4,
            2,
        );
        save_settings(&path, &settings).unwrap();

        let loaded = load_settings(&path).unwrap();
        assert_eq!(loaded, Some(settings));
    }

    #[test]
    fn test_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("never-written.json");

        assert_eq!(load_settings(&path).unwrap(), None);
    }

    #[test]
    fn test_unknown_version_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let json = r#"{"version":9,"settings":{"birth_date":"1995-01-01","expectancy_years":75,"expectancy_months":0,"expectancy_weeks":0}}"#;
        fs::write(&path, json).unwrap();

        assert!(matches!(
            load_settings(&path),
            Err(PersistenceError::UnsupportedVersion(9))
        ));
    }

    #[test]
    fn test_garbage_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "not json").unwrap();

        assert!(matches!(
            load_settings(&path),
            Err(PersistenceError::Parse(_))
        ));
    }
}
