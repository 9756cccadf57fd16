//! Task model, registry, executor, cache abstraction, and sweeper.

pub mod cache;
pub mod error;
pub mod executor;
pub mod probe;
pub mod registry;
pub mod service;
pub mod sweeper;
pub mod task;

pub use cache::ResultCache;
pub use error::{AppResult, CacheError, ExecutorError, ProbeError, TaskError};
pub use executor::TaskExecutor;
pub use probe::ProbeClient;
pub use registry::TaskRegistry;
pub use service::{Spawn, TaskService};
pub use sweeper::{CacheSweeper, SweeperHandle, SweeperState};
pub use task::{Task, TaskFailure, TaskHandle, TaskId, TaskStatus, UrlResult};
