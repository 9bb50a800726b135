//! # Delete Command
//!
//! Removes a task and renumbers the rest, so IDs stay contiguous.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::Result;

use crate::{config::Config, storage, ui};

/// Arguments for the delete command
#[derive(Debug, Clone)]
pub struct DeleteArgs {
    /// ID of the task to remove
    pub id: String,
}

/// Executes the delete command.
pub fn execute(args: &DeleteArgs) -> Result<()> {
    let config = Config::load()?;
    let path = storage::task_file_path(&config)?;
    let mut store = super::load_store(&path)?;

    let removed = args.id.parse::<u32>().ok().and_then(|id| store.delete(id));

    match removed {
        Some(task) => {
            store.renumber();
            ui::print_success("Deleted", &task);
        }
        None => ui::print_warning(&format!("{} is not an existing task!", args.id)),
    }

    storage::save(&path, store.tasks())
}
