//! API-facing request/response models.
//!
//! Request bodies are a JSON array of `{"url": "..."}` items; responses are
//! task snapshots `{id, status, result}`.

use serde::{Deserialize, Serialize};

use crate::core::{
    ProbeClient, ResultCache, Spawn, Task, TaskError, TaskFailure, TaskId, TaskService,
    TaskStatus, UrlResult,
};
use crate::util::parse_probe_url;

/// One requested URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlItem {
    /// Raw URL as submitted.
    pub url: String,
}

impl From<&str> for UrlItem {
    fn from(url: &str) -> Self {
        Self { url: url.to_string() }
    }
}

/// Task snapshot as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskView {
    /// Task identifier.
    pub id: TaskId,
    /// Current status.
    pub status: TaskStatus,
    /// Results so far, in request order.
    pub result: Vec<UrlResult>,
    /// Failure details for `failed` tasks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<TaskFailure>,
}

impl From<Task> for TaskView {
    fn from(task: Task) -> Self {
        Self {
            id: task.id,
            status: task.status,
            result: task.result,
            error: task.failure,
        }
    }
}

/// Validate every URL, then create a task for them.
///
/// Nothing is registered if any URL is invalid.
pub fn submit_task<C, P, S>(
    service: &TaskService<C, P, S>,
    items: &[UrlItem],
) -> Result<TaskView, TaskError>
where
    C: ResultCache,
    P: ProbeClient,
    S: Spawn,
{
    let urls = items
        .iter()
        .map(|item| {
            parse_probe_url(&item.url).map_err(|reason| TaskError::InvalidUrl {
                url: item.url.clone(),
                reason,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(service.create_task(urls).into())
}

/// Look up a task by its textual identifier.
pub fn lookup_task<C, P, S>(
    service: &TaskService<C, P, S>,
    raw_id: &str,
) -> Result<TaskView, TaskError>
where
    C: ResultCache,
    P: ProbeClient,
    S: Spawn,
{
    let id: TaskId = raw_id
        .trim()
        .parse()
        .map_err(|_| TaskError::InvalidTaskId(raw_id.to_string()))?;
    service.get_task(id).map(TaskView::from)
}
