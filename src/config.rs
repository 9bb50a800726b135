//! # Configuration
//!
//! Optional global configuration, stored as TOML at
//! `~/.config/tasklist/config`.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::constants::{CONFIG_DIR, CONFIG_FILENAME};

thread_local! {
    /// Thread-local override for the home directory path.
    /// Used by integration tests to redirect config and the task file
    /// without modifying environment variables.
    static HOME_OVERRIDE: RefCell<Option<PathBuf>> = const { RefCell::new(None) };
}

/// Sets a thread-local override for the home directory.
/// Pass `None` to restore the default behavior.
pub fn set_home_override(path: Option<PathBuf>) {
    HOME_OVERRIDE.with(|override_path| {
        *override_path.borrow_mut() = path;
    });
}

fn get_home_override() -> Option<PathBuf> {
    HOME_OVERRIDE.with(|override_path| override_path.borrow().clone())
}

/// The user's home directory, honoring the test override.
pub fn home_dir() -> Option<PathBuf> {
    get_home_override().or_else(dirs::home_dir)
}

/// Global configuration.
///
/// Every field is optional; a missing file means defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Task file location override (default: `tasks.yml` in the home
    /// directory).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    task_file: Option<PathBuf>,

    /// Show absolute dates by default, as if `-a` were always passed.
    #[serde(default)]
    absolute_dates: bool,
}

impl Config {
    /// Returns the path to the global config file
    /// (`~/.config/tasklist/config`).
    ///
    /// Uses `~/.config` directly rather than the platform config directory
    /// so the location is the same on every Unix-alike.
    pub fn path() -> Option<PathBuf> {
        home_dir().map(|home| home.join(".config").join(CONFIG_DIR).join(CONFIG_FILENAME))
    }

    /// Loads the global config, falling back to defaults when the file does
    /// not exist.
    pub fn load() -> Result<Self> {
        let Some(path) = Self::path() else {
            return Ok(Self::default());
        };
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// The configured task file location, if any.
    pub fn task_file(&self) -> Option<&Path> {
        self.task_file.as_deref()
    }

    /// Whether dates should display absolute by default.
    pub const fn absolute_dates(&self) -> bool {
        self.absolute_dates
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.task_file().is_none());
        assert!(!config.absolute_dates());
    }

    #[test]
    fn test_parse_full_config() {
        let config: Config = toml::from_str(
            r#"
task_file = "/data/tasks.yml"
absolute_dates = true
"#,
        )
        .expect("config should parse");

        assert_eq!(config.task_file(), Some(Path::new("/data/tasks.yml")));
        assert!(config.absolute_dates());
    }

    #[test]
    fn test_parse_partial_config() {
        let config: Config = toml::from_str("absolute_dates = true").expect("config should parse");
        assert!(config.task_file().is_none());
        assert!(config.absolute_dates());
    }

    #[test]
    fn test_home_override() {
        let override_path = PathBuf::from("/test/home");
        set_home_override(Some(override_path.clone()));
        assert_eq!(home_dir(), Some(override_path.clone()));
        assert_eq!(
            Config::path(),
            Some(override_path.join(".config").join("tasklist").join("config"))
        );
        set_home_override(None);
    }
}
