//! # Task
//!
//! The task record and the single-field updates it accepts.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::date::DueDate;

pub mod query;
pub mod store;

pub use store::TaskStore;

// =============================================================================
// Priority
// =============================================================================

/// Error returned when a priority code is not one of `L`, `M`, or `H`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0} is not a valid priority")]
pub struct ParsePriorityError(String);

/// Task priority, entered as a single letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            Self::Low => "L",
            Self::Medium => "M",
            Self::High => "H",
        };
        write!(f, "{code}")
    }
}

impl FromStr for Priority {
    type Err = ParsePriorityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "L" | "l" => Ok(Self::Low),
            "M" | "m" => Ok(Self::Medium),
            "H" | "h" => Ok(Self::High),
            other => Err(ParsePriorityError(other.to_string())),
        }
    }
}

// =============================================================================
// Task
// =============================================================================

/// A single task.
///
/// IDs are assigned by the store and renumbered after deletions, so they
/// always run 1..=N in file order. Everything beyond the description is
/// optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    id: u32,

    description: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    priority: Option<Priority>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    due: Option<DueDate>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    tags: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    note: Option<String>,

    #[serde(default)]
    completed: bool,

    created_at: DateTime<Local>,
}

impl Task {
    /// Creates a new open task stamped with the current time. Tasks are only
    /// created through [`TaskStore::add`], which assigns the ID.
    pub(crate) fn new(
        id: u32,
        description: String,
        priority: Option<Priority>,
        due: Option<DueDate>,
        tags: Option<String>,
        note: Option<String>,
    ) -> Self {
        Self {
            id,
            description,
            priority,
            due,
            tags,
            note,
            completed: false,
            created_at: Local::now(),
        }
    }

    pub const fn id(&self) -> u32 {
        self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub const fn priority(&self) -> Option<Priority> {
        self.priority
    }

    pub const fn due(&self) -> Option<&DueDate> {
        self.due.as_ref()
    }

    pub fn tags(&self) -> Option<&str> {
        self.tags.as_deref()
    }

    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }

    pub const fn completed(&self) -> bool {
        self.completed
    }

    pub const fn created_at(&self) -> DateTime<Local> {
        self.created_at
    }

    /// Case-insensitive match against the description, note, and tags.
    pub fn matches(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        let contains = |field: &str| field.to_lowercase().contains(&needle);

        contains(&self.description)
            || self.note.as_deref().is_some_and(contains)
            || self.tags.as_deref().is_some_and(contains)
    }

    /// Applies a single-field update, leaving every other field untouched.
    pub fn apply(&mut self, update: TaskUpdate) {
        match update {
            TaskUpdate::Description(description) => self.description = description,
            TaskUpdate::Priority(priority) => self.priority = Some(priority),
            TaskUpdate::Due(due) => self.due = Some(due),
            TaskUpdate::Tags(tags) => self.tags = Some(tags),
            TaskUpdate::Note(note) => self.note = Some(note),
            TaskUpdate::Completed => self.completed = true,
        }
    }
}

// =============================================================================
// Updates
// =============================================================================

/// One field of a task to change.
///
/// Modifications are single-field by construction; there is no way to hand
/// the store an ambiguous bundle of changes.
#[derive(Debug, Clone, PartialEq)]
pub enum TaskUpdate {
    Description(String),
    Priority(Priority),
    Due(DueDate),
    Tags(String),
    Note(String),
    Completed,
}
