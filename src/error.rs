//! # Errors
//!
//! Fatal failure classes and their process exit codes.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::path::PathBuf;

use thiserror::Error;

use crate::constants::{
    EXIT_INVALID_DATE, EXIT_INVALID_PRIORITY, EXIT_NO_HOME_DIR, EXIT_TASK_FILE_MISSING,
};

/// Failures that abort the whole command.
///
/// Each class maps to a distinct exit code so scripts can tell them apart.
/// Zero always means success; lookup misses (an ID that resolves to no task)
/// are warnings, not failures.
#[derive(Debug, Error)]
pub enum FatalError {
    /// The task file is gone and the command cannot proceed without it.
    #[error("The file {} does not exist. There are no tasks to display.", path.display())]
    TaskFileMissing {
        /// Path the task file was expected at.
        path: PathBuf,
    },

    /// A due date that failed pre-validation.
    #[error("{input} is not a valid date")]
    InvalidDate {
        /// The rejected input.
        input: String,
    },

    /// A priority that failed pre-validation.
    #[error("The priority given is not valid: {input}")]
    InvalidPriority {
        /// The rejected input.
        input: String,
    },

    /// The home directory could not be determined.
    #[error("Could not determine the home directory")]
    NoHomeDirectory,
}

impl FatalError {
    /// Returns the process exit code for this failure class.
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::TaskFileMissing { .. } => EXIT_TASK_FILE_MISSING,
            Self::InvalidDate { .. } => EXIT_INVALID_DATE,
            Self::InvalidPriority { .. } => EXIT_INVALID_PRIORITY,
            Self::NoHomeDirectory => EXIT_NO_HOME_DIR,
        }
    }
}
