//! # Commands
//!
//! One module per subcommand. Every command follows the same shape: load the
//! config, resolve the task file, work on the store in memory, save.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::path::Path;

use anyhow::Result;

use crate::error::FatalError;
use crate::storage;
use crate::task::TaskStore;

pub mod add;
pub mod completions;
pub mod delete;
pub mod display;
pub mod list;
pub mod modify;
pub mod priority;
pub mod search;

pub use add::{execute as add, AddArgs};
pub use completions::execute as completions;
pub use delete::{execute as delete, DeleteArgs};
pub use display::{execute as display, DisplayArgs};
pub use list::{execute as list, ListArgs};
pub use modify::{execute as modify, ModifyArgs};
pub use priority::{execute as priority, PriorityArgs};
pub use search::{execute as search, SearchArgs};

/// Loads the store, treating a missing task file as fatal. Only the add
/// command starts from an empty store instead.
fn load_store(path: &Path) -> Result<TaskStore> {
    let tasks = storage::load(path)?.ok_or_else(|| FatalError::TaskFileMissing {
        path: path.to_path_buf(),
    })?;
    Ok(TaskStore::from_tasks(tasks))
}
