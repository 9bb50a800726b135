//! # Constants
//!
//! Centralized constants for magic values used throughout tasklist.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

// =============================================================================
// File System
// =============================================================================

/// Name of the task file (inside the user's home directory).
pub const TASK_FILE_NAME: &str = "tasks.yml";

/// Global configuration directory name (inside `~/.config`).
pub const CONFIG_DIR: &str = "tasklist";

/// Global configuration file name (inside `CONFIG_DIR`).
pub const CONFIG_FILENAME: &str = "config";

// =============================================================================
// UI Display
// =============================================================================

/// Column width for ID in list display.
pub const COL_ID_WIDTH: usize = 3;

/// Column width for priority in list display.
pub const COL_PRIORITY_WIDTH: usize = 3;

/// Column width for the due date in list display.
pub const COL_DUE_WIDTH: usize = 20;

/// Column width for the creation date in list display.
pub const COL_CREATED_WIDTH: usize = 15;

/// Column width for the description in list display (truncated with ellipsis).
pub const COL_DESCRIPTION_WIDTH: usize = 20;

/// Column width for tags in list display.
pub const COL_TAGS_WIDTH: usize = 20;

/// Column width for the note in the single-task view.
pub const COL_NOTE_WIDTH: usize = 40;

// =============================================================================
// Exit Codes
// =============================================================================

/// Exit code when the task file does not exist.
pub const EXIT_TASK_FILE_MISSING: i32 = 3;

/// Exit code for an unparseable due date.
pub const EXIT_INVALID_DATE: i32 = 4;

/// Exit code for an unparseable priority.
pub const EXIT_INVALID_PRIORITY: i32 = 5;

/// Exit code when the home directory cannot be determined.
pub const EXIT_NO_HOME_DIR: i32 = 6;
