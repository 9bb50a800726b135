//! # Display Command
//!
//! Shows a single task in full, including its note.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::Result;

use crate::{config::Config, storage, ui};

/// Arguments for the display command
#[derive(Debug, Clone)]
pub struct DisplayArgs {
    /// ID of the task to show
    pub id: String,
}

/// Executes the display command.
pub fn execute(args: &DisplayArgs) -> Result<()> {
    let config = Config::load()?;
    let path = storage::task_file_path(&config)?;
    let store = super::load_store(&path)?;

    // Anything that does not resolve to a task, numeric or not, is the same
    // warning. The command still succeeds.
    match args.id.parse::<u32>().ok().and_then(|id| store.find(id)) {
        Some(task) => ui::render_detail(task),
        None => ui::print_warning(&format!("{} is not an existing task!", args.id)),
    }

    storage::save(&path, store.tasks())
}
