//! # Storage
//!
//! Wholesale persistence of the task file. Every command loads the full
//! store, works on it in memory, and writes the whole file back.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::config::{self, Config};
use crate::constants::TASK_FILE_NAME;
use crate::error::FatalError;
use crate::task::Task;

/// Resolves the task file location: the config override when set, otherwise
/// `tasks.yml` in the user's home directory.
pub fn task_file_path(config: &Config) -> Result<PathBuf> {
    if let Some(path) = config.task_file() {
        return Ok(path.to_path_buf());
    }

    config::home_dir()
        .map(|home| home.join(TASK_FILE_NAME))
        .ok_or_else(|| FatalError::NoHomeDirectory.into())
}

/// Loads the persisted tasks.
///
/// `Ok(None)` means the file does not exist, which is distinct from an
/// existing file holding zero tasks. Only the add command treats an absent
/// file as an empty store; everything else reports it.
pub fn load(path: &Path) -> Result<Option<Vec<Task>>> {
    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read task file: {}", path.display()))?;

    if content.trim().is_empty() {
        return Ok(Some(Vec::new()));
    }

    let tasks = serde_yml::from_str(&content)
        .with_context(|| format!("Failed to parse task file: {}", path.display()))?;

    Ok(Some(tasks))
}

/// Rewrites the whole task file.
pub fn save(path: &Path, tasks: &[Task]) -> Result<()> {
    let content = serde_yml::to_string(&tasks).context("Failed to serialize tasks")?;

    fs::write(path, content)
        .with_context(|| format!("Failed to write task file: {}", path.display()))
}
