//! Tokio runtime spawner implementation.

use std::future::Future;

use crate::core::Spawn;

/// Tokio-based spawner that runs detached task executors and the sweeper.
///
/// Holds only a runtime handle; whoever built the runtime keeps ownership of
/// it and decides where it is dropped.
#[derive(Clone)]
pub struct TokioSpawner {
    handle: tokio::runtime::Handle,
}

impl TokioSpawner {
    /// Create a spawner from a tokio runtime handle.
    pub const fn new(handle: tokio::runtime::Handle) -> Self {
        Self { handle }
    }

    /// Spawner for the runtime the caller is running on.
    ///
    /// # Panics
    ///
    /// Panics when called outside a tokio runtime.
    pub fn current() -> Self {
        Self::new(tokio::runtime::Handle::current())
    }

    /// Build a new multi-threaded runtime with the given number of worker
    /// threads and return it alongside a spawner for it.
    ///
    /// The runtime must be dropped outside async context, e.g. after
    /// `runtime.block_on(app.shutdown())` returns.
    pub fn with_worker_threads(
        worker_threads: usize,
    ) -> Result<(Self, tokio::runtime::Runtime), std::io::Error> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(worker_threads)
            .thread_name("url-probe-worker")
            .enable_all()
            .build()?;
        Ok((Self::new(runtime.handle().clone()), runtime))
    }

    /// Handle of the underlying runtime.
    pub const fn handle(&self) -> &tokio::runtime::Handle {
        &self.handle
    }
}

impl Spawn for TokioSpawner {
    fn spawn<F>(&self, fut: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.handle.spawn(fut);
    }
}
