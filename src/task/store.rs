//! # Task Store
//!
//! The in-memory collection of tasks and the ID bookkeeping around it.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use crate::date::DueDate;
use crate::task::{Priority, Task, TaskUpdate};

/// An ordered collection of tasks with contiguous 1-based IDs.
///
/// `last_id` tracks the highest ID handed out. Deleting leaves a gap until
/// [`TaskStore::renumber`] closes it; the delete command always renumbers, so
/// persisted stores have IDs running 1..=N in file order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct TaskStore {
    tasks: Vec<Task>,
    last_id: u32,
}

impl TaskStore {
    /// An empty store.
    pub const fn new() -> Self {
        Self {
            tasks: Vec::new(),
            last_id: 0,
        }
    }

    /// Wraps tasks loaded from disk. The ID counter restarts at the task
    /// count, which is exact for the contiguous stores this tool writes.
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        let last_id = u32::try_from(tasks.len()).unwrap_or(u32::MAX);
        Self { tasks, last_id }
    }

    /// Appends a new task under the next free ID and returns it.
    pub fn add(
        &mut self,
        description: String,
        priority: Option<Priority>,
        due: Option<DueDate>,
        tags: Option<String>,
        note: Option<String>,
    ) -> &Task {
        self.last_id += 1;
        let task = Task::new(self.last_id, description, priority, due, tags, note);
        self.tasks.push(task);
        let index = self.tasks.len() - 1;
        &self.tasks[index]
    }

    /// Looks up a task by ID.
    pub fn find(&self, id: u32) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    /// Looks up a task by ID for mutation.
    pub fn find_mut(&mut self, id: u32) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|task| task.id() == id)
    }

    /// Removes the task with the given ID, preserving the order of the rest.
    /// Returns the removed task, still carrying its old ID.
    pub fn delete(&mut self, id: u32) -> Option<Task> {
        let index = self.tasks.iter().position(|task| task.id() == id)?;
        Some(self.tasks.remove(index))
    }

    /// Reassigns IDs 1..=N in the current order and resets the ID counter.
    pub fn renumber(&mut self) {
        let mut next = 0;
        for task in &mut self.tasks {
            next += 1;
            task.id = next;
        }
        self.last_id = next;
    }

    /// Applies a single-field update to the task with the given ID. Returns
    /// false when the ID resolves to no task.
    pub fn modify(&mut self, id: u32, update: TaskUpdate) -> bool {
        match self.find_mut(id) {
            Some(task) => {
                task.apply(update);
                true
            }
            None => false,
        }
    }

    /// Case-insensitive search across descriptions, notes, and tags,
    /// preserving store order.
    pub fn search(&self, needle: &str) -> Vec<&Task> {
        self.tasks.iter().filter(|task| task.matches(needle)).collect()
    }

    /// All tasks in store order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(descriptions: &[&str]) -> TaskStore {
        let mut store = TaskStore::new();
        for description in descriptions {
            store.add((*description).to_string(), None, None, None, None);
        }
        store
    }

    #[test]
    fn test_add_assigns_contiguous_ids() {
        let store = store_with(&["one", "two", "three"]);
        let ids: Vec<u32> = store.tasks().iter().map(Task::id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_add_returns_the_new_task() {
        let mut store = TaskStore::new();
        let task = store.add(
            "Buy milk".to_string(),
            Some(Priority::High),
            None,
            None,
            None,
        );
        assert_eq!(task.id(), 1);
        assert_eq!(task.description(), "Buy milk");
        assert_eq!(task.priority(), Some(Priority::High));
    }

    #[test]
    fn test_find_resolves_ids() {
        let store = store_with(&["one", "two"]);
        assert_eq!(store.find(2).map(Task::description), Some("two"));
        assert!(store.find(3).is_none());
        assert!(store.find(0).is_none());
    }

    #[test]
    fn test_delete_preserves_order_of_the_rest() {
        let mut store = store_with(&["one", "two", "three"]);
        let removed = store.delete(2).expect("task 2 should exist");

        assert_eq!(removed.id(), 2);
        assert_eq!(removed.description(), "two");

        let remaining: Vec<&str> = store.tasks().iter().map(Task::description).collect();
        assert_eq!(remaining, vec!["one", "three"]);
    }

    #[test]
    fn test_delete_unknown_id_is_a_noop() {
        let mut store = store_with(&["one"]);
        assert!(store.delete(5).is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_renumber_restores_contiguity() {
        let mut store = store_with(&["one", "two", "three"]);
        store.delete(1);
        store.renumber();

        let ids: Vec<u32> = store.tasks().iter().map(Task::id).collect();
        assert_eq!(ids, vec![1, 2]);
        let descriptions: Vec<&str> = store.tasks().iter().map(Task::description).collect();
        assert_eq!(descriptions, vec!["two", "three"]);

        // The counter is reset too, so the next add reuses the freed ID.
        store.add("four".to_string(), None, None, None, None);
        assert_eq!(store.find(3).map(Task::description), Some("four"));
    }

    #[test]
    fn test_delete_then_add_without_renumber_skips_the_gap() {
        let mut store = store_with(&["one", "two"]);
        store.delete(1);
        store.add("three".to_string(), None, None, None, None);

        let ids: Vec<u32> = store.tasks().iter().map(Task::id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn test_modify_applies_one_field() {
        let mut store = store_with(&["one"]);
        assert!(store.modify(1, TaskUpdate::Description("renamed".to_string())));
        assert_eq!(store.find(1).map(Task::description), Some("renamed"));
    }

    #[test]
    fn test_modify_unknown_id_reports_failure() {
        let mut store = store_with(&["one"]);
        assert!(!store.modify(9, TaskUpdate::Completed));
        assert!(!store.find(1).is_some_and(Task::completed));
    }

    #[test]
    fn test_search_is_case_insensitive_and_ordered() {
        let mut store = TaskStore::new();
        store.add("Buy milk".to_string(), None, None, None, None);
        store.add("Write report".to_string(), None, None, Some("milky".to_string()), None);
        store.add("Call dentist".to_string(), None, None, None, None);

        let hits = store.search("MILK");
        let ids: Vec<u32> = hits.iter().map(|task| task.id()).collect();
        assert_eq!(ids, vec![1, 2]);

        assert!(store.search("nothing here").is_empty());
    }

    #[test]
    fn test_from_tasks_restarts_the_counter() {
        let mut store = store_with(&["one", "two"]);
        let reloaded = TaskStore::from_tasks(store.tasks().to_vec());
        store = reloaded;
        store.add("three".to_string(), None, None, None, None);
        assert_eq!(store.find(3).map(Task::description), Some("three"));
    }
}
