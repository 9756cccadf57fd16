//! Background job that resolves the URLs of one task.

use std::sync::Arc;

use tracing::{debug, info, warn};
use url::Url;

use super::task::TaskHandle;
use super::{ExecutorError, ProbeClient, ResultCache};
use crate::util::host_key;

/// Resolves URLs for tasks, sharing one result cache across all of them.
///
/// Cloning is cheap; each spawned task job owns a clone.
pub struct TaskExecutor<C, P> {
    cache: Arc<C>,
    probe: P,
}

impl<C, P: Clone> Clone for TaskExecutor<C, P> {
    fn clone(&self) -> Self {
        Self {
            cache: Arc::clone(&self.cache),
            probe: self.probe.clone(),
        }
    }
}

impl<C, P> TaskExecutor<C, P>
where
    C: ResultCache,
    P: ProbeClient,
{
    /// Create an executor over a shared cache and a probe client.
    pub const fn new(cache: Arc<C>, probe: P) -> Self {
        Self { cache, probe }
    }

    /// Shared result cache.
    pub const fn cache(&self) -> &Arc<C> {
        &self.cache
    }

    /// Resolve every URL in order, recording results into `task`.
    ///
    /// On the first unresolvable URL the task moves to `Failed` with the
    /// results gathered so far left in place; otherwise it ends `Ready`.
    pub async fn run(&self, urls: Vec<Url>, task: TaskHandle) {
        let task_id = task.id();
        debug!(%task_id, urls = urls.len(), "executing task");

        for url in &urls {
            match self.resolve(url).await {
                Ok(status_code) => task.push_result(url.as_str(), status_code),
                Err(err) => {
                    warn!(%task_id, url = %url, error = %err, "task failed");
                    task.mark_failed(err.url(), err.to_string());
                    return;
                }
            }
        }

        task.mark_ready();
        info!(%task_id, urls = urls.len(), "task ready");
    }

    /// Resolve one URL: serve it from cache or probe and populate the cache,
    /// then bump the host counter.
    pub async fn resolve(&self, url: &Url) -> Result<u16, ExecutorError> {
        let key = url.as_str();
        let cache_err = |source| ExecutorError::Cache {
            url: key.to_string(),
            source,
        };

        let status_code = if let Some(code) = self.cache.get(key).map_err(cache_err)? {
            debug!(url = key, status_code = code, "cache hit");
            code
        } else {
            let code = self
                .probe
                .probe(url)
                .await
                .map_err(|source| ExecutorError::Probe {
                    url: key.to_string(),
                    source,
                })?;
            debug!(url = key, status_code = code, "cache miss, probed");
            self.cache.put(key, code).map_err(cache_err)?;
            code
        };

        let host = host_key(url);
        let count = self.cache.increment_host_counter(&host).map_err(cache_err)?;
        debug!(host = %host, count, "host counter incremented");

        Ok(status_code)
    }
}
