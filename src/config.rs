// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Application settings.
//!
//! Read once at startup from `<config dir>/poletally/config.yaml`. A missing
//! file means defaults; a malformed one is logged and ignored.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File name of the settings file inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// User-adjustable settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Where the saved project list lives; platform data directory when unset
    pub storage_path: Option<PathBuf>,
    /// Default log filter (`error`, `warn`, `info`, `debug`, `trace`); `RUST_LOG` wins
    pub log_level: String,
    /// Tallest the sketch is shown on the counting screen, in points
    pub max_display_height: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            storage_path: None,
            log_level: "info".to_string(),
            max_display_height: 600.0,
        }
    }
}

impl Settings {
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("poletally").join(CONFIG_FILE_NAME))
    }

    /// Load from the default location, falling back to defaults.
    pub fn load_or_default() -> Self {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Load from `path`, falling back to defaults.
    ///
    /// Runs before the logger is set up, so problems go to stderr.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match std::fs::read_to_string(path)
            .map_err(anyhow::Error::from)
            .and_then(|yaml| Ok(serde_yaml::from_str::<Settings>(&yaml)?))
        {
            Ok(settings) => settings,
            Err(e) => {
                eprintln!("Ignoring settings file {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(Settings::load_from(&dir.path().join(CONFIG_FILE_NAME)), Settings::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "log_level: debug\nstorage_path: /srv/poles.json\n").unwrap();

        let settings = Settings::load_from(&path);
        assert_eq!(settings.log_level, "debug");
        assert_eq!(settings.storage_path, Some(PathBuf::from("/srv/poles.json")));
        assert_eq!(settings.max_display_height, 600.0);
    }

    #[test]
    fn test_malformed_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "max_display_height: [not, a, number]").unwrap();
        assert_eq!(Settings::load_from(&path), Settings::default());
    }
}
