//! # Query
//!
//! Read-only views over the task store: ID order, priority buckets, and the
//! semantic highlights the renderer turns into colors.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use crate::date::{DueDate, Urgency};
use crate::task::{Priority, Task};

// =============================================================================
// Views
// =============================================================================

/// All tasks in store order, which is ID order for a renumbered store.
pub fn by_id(tasks: &[Task]) -> Vec<&Task> {
    tasks.iter().collect()
}

/// The bucket a task lands in when grouped by priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    High,
    Medium,
    Low,
    Unset,
    Completed,
}

/// Tasks grouped by priority, in display order.
///
/// Completion wins over priority: a completed task lands in the completed
/// bucket no matter what priority it carries. Within every bucket, tasks
/// with a due date come first, earliest deadline first; undated tasks follow
/// in their original order.
#[derive(Debug)]
pub struct PriorityView<'a> {
    high: Vec<&'a Task>,
    medium: Vec<&'a Task>,
    low: Vec<&'a Task>,
    unset: Vec<&'a Task>,
    completed: Vec<&'a Task>,
}

impl<'a> PriorityView<'a> {
    /// The buckets in display order: high, medium, low, unset, completed.
    pub fn buckets(&self) -> [(Bucket, &[&'a Task]); 5] {
        [
            (Bucket::High, self.high.as_slice()),
            (Bucket::Medium, self.medium.as_slice()),
            (Bucket::Low, self.low.as_slice()),
            (Bucket::Unset, self.unset.as_slice()),
            (Bucket::Completed, self.completed.as_slice()),
        ]
    }

    pub fn is_empty(&self) -> bool {
        self.buckets().iter().all(|(_, tasks)| tasks.is_empty())
    }
}

/// Groups tasks into priority buckets.
pub fn by_priority(tasks: &[Task]) -> PriorityView<'_> {
    let mut view = PriorityView {
        high: Vec::new(),
        medium: Vec::new(),
        low: Vec::new(),
        unset: Vec::new(),
        completed: Vec::new(),
    };

    for task in tasks {
        if task.completed() {
            view.completed.push(task);
        } else {
            match task.priority() {
                Some(Priority::High) => view.high.push(task),
                Some(Priority::Medium) => view.medium.push(task),
                Some(Priority::Low) => view.low.push(task),
                None => view.unset.push(task),
            }
        }
    }

    for bucket in [
        &mut view.high,
        &mut view.medium,
        &mut view.low,
        &mut view.unset,
        &mut view.completed,
    ] {
        sort_by_due(bucket);
    }

    view
}

// Stable sort: dated tasks ascending by deadline, undated ones after them in
// their original order.
fn sort_by_due(tasks: &mut [&Task]) {
    tasks.sort_by_key(|task| (task.due().is_none(), task.due().map(DueDate::deadline)));
}

// =============================================================================
// Highlights
// =============================================================================

/// Semantic emphasis for a table cell. The renderer decides actual colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight {
    /// Low priority.
    Caution,
    /// Medium priority, or due within the day.
    Notice,
    /// High priority, or overdue.
    Critical,
    /// Due more than a day out.
    Distant,
    /// Completed rows.
    Muted,
}

/// The emphasis a priority cell carries.
pub const fn priority_highlight(priority: Priority) -> Highlight {
    match priority {
        Priority::Low => Highlight::Caution,
        Priority::Medium => Highlight::Notice,
        Priority::High => Highlight::Critical,
    }
}

/// The emphasis a due date cell carries.
pub const fn due_highlight(urgency: Urgency) -> Highlight {
    match urgency {
        Urgency::Upcoming => Highlight::Distant,
        Urgency::DueSoon => Highlight::Notice,
        Urgency::Overdue => Highlight::Critical,
    }
}
