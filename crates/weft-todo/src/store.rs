//! In-memory task store.
//!
//! The rendering engine needs exactly two things from persistence: scalar
//! counts usable as printable context fields, and iterable collections of
//! row-like values whose fields are reachable through simple projections.
//! This store provides both over a shared in-memory table.

use std::sync::{Arc, RwLock};

/// One row of the task table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: u64,
    pub description: String,
}

#[derive(Debug, Default)]
struct Table {
    next_id: u64,
    rows: Vec<Task>,
}

/// Handle to the shared task table.
///
/// Clone is cheap: the handle wraps `Arc<RwLock<..>>`. Locks are held only
/// for the duration of each call, never across an await point.
#[derive(Debug, Clone, Default)]
pub struct TaskStore {
    table: Arc<RwLock<Table>>,
}

impl TaskStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a task and return the stored row.
    pub fn add(&self, description: impl Into<String>) -> Task {
        let mut table = self.table.write().expect("task table lock poisoned");
        table.next_id += 1;
        let task = Task {
            id: table.next_id,
            description: description.into(),
        };
        table.rows.push(task.clone());
        task
    }

    /// All tasks in insertion order.
    pub fn all(&self) -> Vec<Task> {
        self.table
            .read()
            .expect("task table lock poisoned")
            .rows
            .clone()
    }

    /// Number of stored tasks.
    pub fn count(&self) -> usize {
        self.table
            .read()
            .expect("task table lock poisoned")
            .rows
            .len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_assigns_sequential_ids() {
        let store = TaskStore::new();
        assert_eq!(store.add("first").id, 1);
        assert_eq!(store.add("second").id, 2);
        assert_eq!(store.count(), 2);
    }

    #[test]
    fn test_all_preserves_insertion_order() {
        let store = TaskStore::new();
        store.add("a");
        store.add("b");
        store.add("c");

        let descriptions: Vec<_> = store.all().into_iter().map(|t| t.description).collect();
        assert_eq!(descriptions, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_clones_share_the_table() {
        let store = TaskStore::new();
        let handle = store.clone();
        store.add("shared");
        assert_eq!(handle.count(), 1);
    }
}
