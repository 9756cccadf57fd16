//! Error types for task, cache, and probe operations.

use thiserror::Error;

use crate::core::task::TaskId;

/// Errors returned by a [`ProbeClient`](crate::core::ProbeClient).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProbeError {
    /// Connection, DNS, TLS, or protocol failure.
    #[error("transport error: {0}")]
    Transport(String),
    /// The request did not complete within the client's timeout.
    #[error("probe timed out")]
    Timeout,
}

/// Errors produced by result-cache backends.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CacheError {
    /// The backing store could not be reached.
    #[error("cache unavailable: {0}")]
    Unavailable(String),
}

/// Failure that stops a task executor for the remainder of its task.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ExecutorError {
    /// Probing a URL failed.
    #[error("probe of {url} failed: {source}")]
    Probe {
        /// URL being resolved.
        url: String,
        /// Underlying probe failure.
        source: ProbeError,
    },
    /// The result cache or host-counter store failed.
    #[error("cache failure while resolving {url}: {source}")]
    Cache {
        /// URL being resolved.
        url: String,
        /// Underlying cache failure.
        source: CacheError,
    },
}

impl ExecutorError {
    /// URL that was being resolved when the executor stopped.
    pub fn url(&self) -> &str {
        match self {
            Self::Probe { url, .. } | Self::Cache { url, .. } => url,
        }
    }
}

/// Errors surfaced to callers of the task service.
#[derive(Debug, Error)]
pub enum TaskError {
    /// No task with this identifier was ever created.
    #[error("task not found: {0}")]
    NotFound(TaskId),
    /// A submitted URL is not an absolute http(s) URL.
    #[error("invalid url `{url}`: {reason}")]
    InvalidUrl {
        /// Raw input.
        url: String,
        /// Why it was rejected.
        reason: String,
    },
    /// A task identifier could not be parsed.
    #[error("invalid task id: {0}")]
    InvalidTaskId(String),
    /// Service configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    /// A cache sweeper is already running for this cache.
    #[error("cache sweeper already running")]
    SweeperAlreadyRunning,
}

/// Application-facing result using anyhow for higher-level contexts.
pub type AppResult<T> = Result<T, anyhow::Error>;
