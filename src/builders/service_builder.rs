//! Builders to wire the service, its shared cache, and the single sweeper.

use std::sync::Arc;

use crate::config::ServiceConfig;
use crate::core::{
    CacheSweeper, ProbeClient, ResultCache, Spawn, SweeperHandle, TaskError, TaskService,
};
use crate::infra::HttpProbeClient;
use crate::runtime::TokioSpawner;

/// A task service together with the process-wide cache sweeper.
pub struct ProbeService<C, P, S> {
    /// Task creation and lookup.
    pub service: TaskService<C, P, S>,
    /// The one sweeper clearing `service`'s cache.
    pub sweeper: SweeperHandle,
}

impl<C, P, S> ProbeService<C, P, S> {
    /// Stop the sweeper and wait for it to exit. In-flight tasks keep running
    /// on the spawner until the runtime itself shuts down.
    ///
    /// Safe to drive with `runtime.block_on(app.shutdown())`; the spawner never
    /// owns the runtime, so dropping the service here never drops it.
    pub async fn shutdown(self) {
        self.sweeper.shutdown().await;
    }
}

/// Build a task service from configuration and start exactly one sweeper for
/// its cache.
pub fn build_service<C, P, S>(
    cfg: &ServiceConfig,
    cache: Arc<C>,
    probe: P,
    spawner: S,
) -> Result<ProbeService<C, P, S>, TaskError>
where
    C: ResultCache,
    P: ProbeClient,
    S: Spawn,
{
    cfg.validate().map_err(TaskError::InvalidConfig)?;

    let sweeper = CacheSweeper::new(Arc::clone(&cache), cfg.sweep_interval()).start(&spawner)?;
    let service = TaskService::new(cache, probe, spawner);
    tracing::info!(
        sweep_interval_secs = cfg.sweep_interval_secs,
        "task service built"
    );

    Ok(ProbeService { service, sweeper })
}

/// Build the reqwest-backed probe client configured by `cfg`.
pub fn build_http_probe(cfg: &ServiceConfig) -> Result<HttpProbeClient, TaskError> {
    cfg.validate().map_err(TaskError::InvalidConfig)?;
    HttpProbeClient::new(cfg.probe_timeout())
        .map_err(|e| TaskError::InvalidConfig(format!("probe client: {e}")))
}

/// Build the multi-threaded runtime sized by `cfg.worker_threads` and a
/// spawner for it.
///
/// The caller owns the returned runtime and must drop it outside async
/// context.
pub fn build_runtime(
    cfg: &ServiceConfig,
) -> Result<(tokio::runtime::Runtime, TokioSpawner), TaskError> {
    cfg.validate().map_err(TaskError::InvalidConfig)?;
    let (spawner, runtime) = TokioSpawner::with_worker_threads(cfg.worker_threads)
        .map_err(|e| TaskError::InvalidConfig(format!("runtime: {e}")))?;
    tracing::debug!(worker_threads = cfg.worker_threads, "runtime built");
    Ok((runtime, spawner))
}
