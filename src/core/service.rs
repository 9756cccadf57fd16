//! Task service: creation, lookup, and fire-and-forget dispatch of executors.

use std::future::Future;
use std::sync::Arc;

use url::Url;

use super::task::{Task, TaskId};
use super::{ProbeClient, ResultCache, TaskError, TaskExecutor, TaskRegistry};

/// Abstraction for spawning task execution on a runtime.
pub trait Spawn {
    /// Spawn a detached future; the caller keeps no handle to it.
    fn spawn<F>(&self, fut: F)
    where
        F: Future<Output = ()> + Send + 'static;
}

/// Front door for creating and polling URL-probing tasks.
///
/// Holds the registry and a template executor; every created task gets its own
/// executor clone spawned onto `S`. The result cache and host counters are
/// shared by all tasks through the executor.
pub struct TaskService<C, P, S> {
    registry: Arc<TaskRegistry>,
    executor: TaskExecutor<C, P>,
    spawner: S,
}

impl<C, P, S> TaskService<C, P, S>
where
    C: ResultCache,
    P: ProbeClient,
    S: Spawn,
{
    /// Create a service with a fresh registry.
    pub fn new(cache: Arc<C>, probe: P, spawner: S) -> Self {
        Self::with_registry(Arc::new(TaskRegistry::new()), cache, probe, spawner)
    }

    /// Create a service over an existing registry.
    pub const fn with_registry(
        registry: Arc<TaskRegistry>,
        cache: Arc<C>,
        probe: P,
        spawner: S,
    ) -> Self {
        Self {
            registry,
            executor: TaskExecutor::new(cache, probe),
            spawner,
        }
    }

    /// Register a task for `urls`, dispatch its executor, and return at once.
    ///
    /// The returned snapshot is taken before dispatch, so it is always
    /// `Running` with an empty result.
    pub fn create_task(&self, urls: Vec<Url>) -> Task {
        let handle = self.registry.create();
        let snapshot = handle.snapshot();
        tracing::info!(task_id = %handle.id(), urls = urls.len(), "task created");

        let executor = self.executor.clone();
        self.spawner.spawn(async move {
            executor.run(urls, handle).await;
        });

        snapshot
    }

    /// Current snapshot of a task.
    pub fn get_task(&self, id: TaskId) -> Result<Task, TaskError> {
        self.registry.find(id).ok_or(TaskError::NotFound(id))
    }

    /// Snapshots of every task in creation order.
    pub fn list_tasks(&self) -> Vec<Task> {
        self.registry.list()
    }

    /// Cumulative number of resolutions for `host` across all tasks.
    pub fn host_count(&self, host: &str) -> Result<u64, super::CacheError> {
        self.executor.cache().get_host_counter(host)
    }

    /// Shared result cache.
    pub const fn cache(&self) -> &Arc<C> {
        self.executor.cache()
    }

    /// Underlying registry.
    pub const fn registry(&self) -> &Arc<TaskRegistry> {
        &self.registry
    }
}
