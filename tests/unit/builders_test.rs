//! Tests for service builders

use std::sync::Arc;

use url_probe_tasks::builders::{build_http_probe, build_runtime, build_service};
use url_probe_tasks::config::ServiceConfig;
use url_probe_tasks::core::{SweeperState, TaskError};
use url_probe_tasks::infra::InMemoryResultCache;
use url_probe_tasks::runtime::TokioSpawner;

#[tokio::test]
async fn test_build_service_starts_one_sweeper() {
    let cfg = ServiceConfig::default();
    let probe = build_http_probe(&cfg).expect("probe client");
    let app = build_service(
        &cfg,
        Arc::new(InMemoryResultCache::new()),
        probe,
        TokioSpawner::current(),
    )
    .expect("service builds");

    assert!(app.service.list_tasks().is_empty());
    assert_eq!(app.sweeper.cycles(), 0);
    app.shutdown().await;
}

#[tokio::test]
async fn test_sweeper_stops_on_shutdown() {
    let cfg = ServiceConfig::default();
    let app = build_service(
        &cfg,
        Arc::new(InMemoryResultCache::new()),
        build_http_probe(&cfg).unwrap(),
        TokioSpawner::current(),
    )
    .unwrap();
    tokio::task::yield_now().await;
    assert_eq!(app.sweeper.state(), SweeperState::Sleeping);

    app.shutdown().await;
}

#[test]
fn test_build_http_probe_rejects_invalid_config() {
    let cfg = ServiceConfig {
        probe_timeout_secs: Some(0),
        ..ServiceConfig::default()
    };
    assert!(matches!(build_http_probe(&cfg), Err(TaskError::InvalidConfig(_))));
}

#[tokio::test]
async fn test_second_build_over_same_cache_rejected() {
    let cfg = ServiceConfig::default();
    let cache = Arc::new(InMemoryResultCache::new());
    let first = build_service(
        &cfg,
        Arc::clone(&cache),
        build_http_probe(&cfg).unwrap(),
        TokioSpawner::current(),
    )
    .expect("first service builds");

    let second = build_service(
        &cfg,
        Arc::clone(&cache),
        build_http_probe(&cfg).unwrap(),
        TokioSpawner::current(),
    );
    assert!(matches!(second, Err(TaskError::SweeperAlreadyRunning)));

    first.shutdown().await;
    let rebuilt = build_service(
        &cfg,
        cache,
        build_http_probe(&cfg).unwrap(),
        TokioSpawner::current(),
    )
    .expect("cache free again after shutdown");
    rebuilt.shutdown().await;
}

#[test]
fn test_build_runtime_uses_worker_threads() {
    let cfg = ServiceConfig {
        worker_threads: 3,
        ..ServiceConfig::default()
    };
    let (runtime, _spawner) = build_runtime(&cfg).expect("runtime builds");
    assert_eq!(runtime.metrics().num_workers(), 3);
}

#[test]
fn test_build_runtime_rejects_invalid_config() {
    let cfg = ServiceConfig {
        worker_threads: 0,
        ..ServiceConfig::default()
    };
    assert!(matches!(build_runtime(&cfg), Err(TaskError::InvalidConfig(_))));
}

#[test]
fn test_shutdown_driven_from_owned_runtime() {
    let cfg = ServiceConfig {
        worker_threads: 2,
        ..ServiceConfig::default()
    };
    let (runtime, spawner) = build_runtime(&cfg).expect("runtime builds");
    let app = build_service(
        &cfg,
        Arc::new(InMemoryResultCache::new()),
        build_http_probe(&cfg).unwrap(),
        spawner,
    )
    .expect("service builds");

    runtime.block_on(app.shutdown());
    drop(runtime);
}
