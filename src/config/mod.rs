//! This module handles the toast subsystem's configuration, including loading
//! and saving display preferences to a `notifications.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use toast_stack::config::{self, Position};
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.position = Position::TopRight;
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub mod defaults;

use defaults::DEFAULT_MAX_NOTIFICATIONS;

const CONFIG_FILE: &str = "notifications.toml";
const APP_NAME: &str = "ToastStack";

/// Screen anchor for the toast overlay.
///
/// Presentation-only: it affects where the widget layer stacks the toasts,
/// never how the store behaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
    TopLeft,
    TopCenter,
    TopRight,
    BottomLeft,
    BottomCenter,
    #[default]
    BottomRight,
}

/// Process-wide toast settings, fixed at store construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub position: Position,
    #[serde(default = "default_max_notifications")]
    pub max_notifications: usize,
}

fn default_max_notifications() -> usize {
    DEFAULT_MAX_NOTIFICATIONS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            position: Position::default(),
            max_notifications: DEFAULT_MAX_NOTIFICATIONS,
        }
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            position: Position::TopCenter,
            max_notifications: 8,
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("notifications.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("notifications.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("notifications.toml");
        fs::write(&config_path, "position = \"top-left\"").expect("failed to write config");

        let loaded = load_from_path(&config_path).expect("failed to load config");
        assert_eq!(loaded.position, Position::TopLeft);
        assert_eq!(loaded.max_notifications, DEFAULT_MAX_NOTIFICATIONS);
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let nested_dir = temp_dir.path().join("deep").join("path");
        let config_path = nested_dir.join("notifications.toml");

        save_to_path(&Config::default(), &config_path).expect("save should create directories");
        assert!(config_path.exists());
    }

    #[test]
    fn default_config_anchors_bottom_right_with_five_slots() {
        let config = Config::default();
        assert_eq!(config.position, Position::BottomRight);
        assert_eq!(config.max_notifications, 5);
    }

    #[test]
    fn positions_serialize_as_kebab_case() {
        let config = Config {
            position: Position::BottomCenter,
            max_notifications: 5,
        };
        let serialized = toml::to_string(&config).expect("failed to serialize");
        assert!(serialized.contains("bottom-center"));
    }
}
