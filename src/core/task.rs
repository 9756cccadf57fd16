//! Task model and the handle an executor uses to mutate its own task.

use std::sync::Arc;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::util::clock::now_ms;

/// Process-unique task identifier.
pub type TaskId = Uuid;

/// Lifecycle status of a task.
///
/// `Running` is initial; `Ready` and `Failed` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// The executor is still resolving URLs.
    Running,
    /// Every requested URL has a result.
    Ready,
    /// Resolution stopped at a URL that could not be resolved.
    Failed,
}

impl TaskStatus {
    /// Whether the task can still change.
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Running)
    }
}

/// Outcome for a single requested URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlResult {
    /// Normalized URL.
    pub url: String,
    /// HTTP status code observed (or served from cache).
    pub status_code: u16,
}

/// Why a task stopped before resolving every URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskFailure {
    /// URL whose resolution failed.
    pub url: String,
    /// Human-readable failure reason.
    pub reason: String,
}

/// Snapshot of a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Task identifier.
    pub id: TaskId,
    /// Current status.
    pub status: TaskStatus,
    /// Results in request order. Complete only once `status` is `Ready`.
    pub result: Vec<UrlResult>,
    /// Creation time (ms since epoch).
    pub created_at_ms: u128,
    /// Set when `status` is `Failed`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure: Option<TaskFailure>,
}

impl Task {
    /// A fresh task in `Running` state with an empty result.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            status: TaskStatus::Running,
            result: Vec::new(),
            created_at_ms: now_ms(),
            failure: None,
        }
    }
}

impl Default for Task {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared, mutable reference to one registered task.
///
/// The registry hands one of these to the task's executor; the executor is the
/// only writer. Mutations after the task reached a terminal state are ignored.
#[derive(Debug, Clone)]
pub struct TaskHandle {
    id: TaskId,
    inner: Arc<Mutex<Task>>,
}

impl TaskHandle {
    pub(crate) fn new(task: Task) -> Self {
        Self {
            id: task.id,
            inner: Arc::new(Mutex::new(task)),
        }
    }

    /// Identifier of the underlying task.
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Clone the current state of the task.
    pub fn snapshot(&self) -> Task {
        self.inner.lock().clone()
    }

    /// Current status.
    pub fn status(&self) -> TaskStatus {
        self.inner.lock().status
    }

    /// Append one resolved URL.
    pub fn push_result(&self, url: impl Into<String>, status_code: u16) {
        let mut task = self.inner.lock();
        if task.status.is_terminal() {
            return;
        }
        task.result.push(UrlResult {
            url: url.into(),
            status_code,
        });
    }

    /// Move to `Ready`.
    pub fn mark_ready(&self) {
        let mut task = self.inner.lock();
        if !task.status.is_terminal() {
            task.status = TaskStatus::Ready;
        }
    }

    /// Move to `Failed`, keeping whatever results were already appended.
    pub fn mark_failed(&self, url: impl Into<String>, reason: impl Into<String>) {
        let mut task = self.inner.lock();
        if task.status.is_terminal() {
            return;
        }
        task.status = TaskStatus::Failed;
        task.failure = Some(TaskFailure {
            url: url.into(),
            reason: reason.into(),
        });
    }
}
