use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::{
    DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, DEFAULT_INITIAL_SPEED, DEFAULT_SPEED_INCREMENT,
};

const APP_DIR_NAME: &str = "torus-snake";
const SETTINGS_FILE_NAME: &str = "settings.json";

/// Persisted user preferences, merged under command-line flags.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub grid_width: u16,
    pub grid_height: u16,
    pub initial_speed: u32,
    pub speed_increment: u32,
    pub theme: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            grid_width: DEFAULT_GRID_WIDTH,
            grid_height: DEFAULT_GRID_HEIGHT,
            initial_speed: DEFAULT_INITIAL_SPEED,
            speed_increment: DEFAULT_SPEED_INCREMENT,
            theme: "classic".to_owned(),
        }
    }
}

/// Returns the platform-correct settings file path.
#[must_use]
pub fn settings_path() -> PathBuf {
    let mut base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base.push(SETTINGS_FILE_NAME);
    base
}

/// Loads settings from disk.
///
/// Returns defaults when the file does not yet exist (first run).
/// Returns `Err` when the file exists but cannot be read or parsed, so
/// the caller can surface a warning before entering raw terminal mode.
pub fn load_settings() -> io::Result<Settings> {
    load_settings_from_path(&settings_path())
}

/// Saves settings to disk, creating parent directories when needed.
pub fn save_settings(settings: &Settings) -> io::Result<()> {
    save_settings_to_path(&settings_path(), settings)
}

fn load_settings_from_path(path: &Path) -> io::Result<Settings> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Settings::default()),
        Err(e) => return Err(e),
    };

    serde_json::from_str(&raw).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

fn save_settings_to_path(path: &Path, settings: &Settings) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(settings)
        .map_err(|error| io::Error::new(io::ErrorKind::InvalidData, error))?;

    fs::write(path, json)
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::{load_settings_from_path, save_settings_to_path, Settings};

    #[test]
    fn settings_serialization_round_trip() {
        let path = unique_test_path("round_trip");
        let settings = Settings {
            grid_width: 48,
            grid_height: 30,
            initial_speed: 12,
            speed_increment: 2,
            theme: "ocean".to_owned(),
        };

        save_settings_to_path(&path, &settings).expect("settings save should succeed");
        let loaded = load_settings_from_path(&path).expect("load should succeed");

        assert_eq!(loaded, settings);
        cleanup_test_path(&path);
    }

    #[test]
    fn missing_settings_file_returns_defaults() {
        let path = unique_test_path("missing");
        // Deliberately do not create the file.
        let loaded = load_settings_from_path(&path).expect("missing file should yield defaults");
        assert_eq!(loaded, Settings::default());
    }

    #[test]
    fn malformed_settings_file_returns_error() {
        let path = unique_test_path("malformed");
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("test parent directory should be creatable");
        }
        fs::write(&path, "not-json").expect("test file write should succeed");

        assert!(
            load_settings_from_path(&path).is_err(),
            "malformed file should return Err"
        );

        cleanup_test_path(&path);
    }

    fn unique_test_path(label: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time should be after epoch")
            .as_nanos();

        std::env::temp_dir()
            .join("torus-snake-settings-tests")
            .join(format!("{label}-{nanos}.json"))
    }

    fn cleanup_test_path(path: &PathBuf) {
        let _ = fs::remove_file(path);
        if let Some(parent) = path.parent() {
            let _ = fs::remove_dir(parent);
        }
    }
}
