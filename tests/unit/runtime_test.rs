//! Tests for tokio spawner utilities

use std::time::Duration;

use url_probe_tasks::core::Spawn;
use url_probe_tasks::runtime::tokio_spawner::TokioSpawner;

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_tokio_spawner_spawn() {
    let spawner = TokioSpawner::new(tokio::runtime::Handle::current());

    let (tx, rx) = tokio::sync::oneshot::channel();
    spawner.spawn(async move {
        tx.send(123).unwrap();
    });

    let result = rx.await.expect("oneshot result");
    assert_eq!(result, 123);
}

#[test]
fn test_tokio_spawner_with_worker_threads() {
    let (spawner, runtime) = TokioSpawner::with_worker_threads(2).expect("runtime builds");

    let (tx, rx) = tokio::sync::oneshot::channel();
    spawner.spawn(async move {
        tokio::time::sleep(Duration::from_millis(5)).await;
        tx.send("done").unwrap();
    });

    assert_eq!(runtime.block_on(rx).unwrap(), "done");
    assert_eq!(runtime.metrics().num_workers(), 2);

    // Clones of the spawner outliving the runtime are inert, not owners.
    let orphan = spawner.clone();
    drop(runtime);
    drop(orphan);
}
