//! # tasklist
//!
//! A minimal command-line task manager.
//!
//! Tasks live in a single YAML file in the user's home directory. Every
//! command loads it, does one thing, and writes it back.
//!
//! ## Features
//!
//! - **Single-File Storage**: All tasks in one human-readable YAML file
//! - **Faithful Dates**: Due dates redisplay exactly as they were typed
//! - **Priority Buckets**: Group by high, medium, low, unset, completed
//! - **Urgency Colors**: Upcoming, due, and overdue tasks stand apart
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod commands;
pub mod config;
pub mod constants;
pub mod date;
pub mod error;
pub mod storage;
pub mod task;
pub mod ui;

pub use config::{set_home_override, Config};
pub use date::{DateFormat, DueDate, Urgency};
pub use error::FatalError;
pub use task::{Priority, Task, TaskStore, TaskUpdate};
