//! Tests for error types

use url_probe_tasks::core::{CacheError, ExecutorError, ProbeError, TaskError};

#[test]
fn test_probe_error_display() {
    let err = ProbeError::Transport("connection refused".to_string());
    assert_eq!(format!("{}", err), "transport error: connection refused");
    assert_eq!(format!("{}", ProbeError::Timeout), "probe timed out");
}

#[test]
fn test_cache_error_display() {
    let err = CacheError::Unavailable("redis down".to_string());
    assert_eq!(format!("{}", err), "cache unavailable: redis down");
}

#[test]
fn test_executor_error_carries_url() {
    let err = ExecutorError::Probe {
        url: "http://a.test/".to_string(),
        source: ProbeError::Timeout,
    };
    assert_eq!(err.url(), "http://a.test/");
    assert_eq!(format!("{}", err), "probe of http://a.test/ failed: probe timed out");
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn test_not_found_error() {
    let id = uuid::Uuid::nil();
    let err = TaskError::NotFound(id);
    assert_eq!(
        format!("{}", err),
        "task not found: 00000000-0000-0000-0000-000000000000"
    );
}

#[test]
fn test_sweeper_already_running_error() {
    let err = TaskError::SweeperAlreadyRunning;
    assert_eq!(format!("{}", err), "cache sweeper already running");
}
