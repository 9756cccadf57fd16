//! Registry of every task created since process start.

use std::collections::HashMap;

use parking_lot::RwLock;

use super::task::{Task, TaskHandle, TaskId};

#[derive(Default)]
struct RegistryInner {
    /// Creation order.
    order: Vec<TaskId>,
    tasks: HashMap<TaskId, TaskHandle>,
}

/// Append-only task registry.
///
/// The id index and creation order live behind one `RwLock`; each task sits
/// behind its own mutex inside [`TaskHandle`], so an executor updating its
/// task never blocks lookups of other tasks. Tasks are never removed.
#[derive(Default)]
pub struct TaskRegistry {
    inner: RwLock<RegistryInner>,
}

impl TaskRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a fresh `Running` task and return the handle its executor writes through.
    pub fn create(&self) -> TaskHandle {
        let handle = TaskHandle::new(Task::new());
        let mut inner = self.inner.write();
        inner.order.push(handle.id());
        inner.tasks.insert(handle.id(), handle.clone());
        drop(inner);
        tracing::debug!(task_id = %handle.id(), "task registered");
        handle
    }

    /// Snapshot of the task with `id`, if it exists.
    pub fn find(&self, id: TaskId) -> Option<Task> {
        let handle = self.inner.read().tasks.get(&id).cloned();
        handle.map(|h| h.snapshot())
    }

    /// Snapshots of every task in creation order.
    pub fn list(&self) -> Vec<Task> {
        let handles: Vec<TaskHandle> = {
            let inner = self.inner.read();
            inner
                .order
                .iter()
                .filter_map(|id| inner.tasks.get(id).cloned())
                .collect()
        };
        handles.iter().map(TaskHandle::snapshot).collect()
    }

    /// Number of registered tasks.
    pub fn len(&self) -> usize {
        self.inner.read().order.len()
    }

    /// Whether no task was ever registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
