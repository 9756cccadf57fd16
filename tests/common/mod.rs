//! Shared probe stubs and polling helpers for integration tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use url::Url;

use url_probe_tasks::core::{
    ProbeClient, ProbeError, ResultCache, Spawn, Task, TaskId, TaskService,
};

/// Probe stub answering from a fixed table, optionally failing after a call budget.
#[derive(Clone)]
pub struct ScriptedProbe {
    responses: Arc<HashMap<String, u16>>,
    default_status: u16,
    max_calls: Option<usize>,
    calls: Arc<AtomicUsize>,
}

impl ScriptedProbe {
    /// Every URL answers `status`.
    pub fn always(status: u16) -> Self {
        Self {
            responses: Arc::new(HashMap::new()),
            default_status: status,
            max_calls: None,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Answers `status` once; every later call is a transport error.
    pub fn once_then_fail(status: u16) -> Self {
        Self {
            max_calls: Some(1),
            ..Self::always(status)
        }
    }

    /// Per-URL answers; URLs not in the table answer 200.
    pub fn table(entries: &[(&str, u16)]) -> Self {
        Self {
            responses: Arc::new(
                entries
                    .iter()
                    .map(|(url, code)| ((*url).to_string(), *code))
                    .collect(),
            ),
            ..Self::always(200)
        }
    }

    /// Number of probes attempted so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ProbeClient for ScriptedProbe {
    async fn probe(&self, url: &Url) -> Result<u16, ProbeError> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        if self.max_calls.is_some_and(|max| n > max) {
            return Err(ProbeError::Transport(format!(
                "unexpected probe #{n} of {url}"
            )));
        }
        if url.host_str() == Some("unreachable.test") {
            return Err(ProbeError::Transport("connection refused".into()));
        }
        Ok(self
            .responses
            .get(url.as_str())
            .copied()
            .unwrap_or(self.default_status))
    }
}

/// Poll until the task leaves `running` or the deadline passes.
pub async fn wait_for_terminal<C, P, S>(service: &TaskService<C, P, S>, id: TaskId) -> Task
where
    C: ResultCache,
    P: ProbeClient,
    S: Spawn,
{
    let deadline = tokio::time::Instant::now() + Duration::from_secs(5);
    loop {
        let task = service.get_task(id).expect("task registered");
        if task.status.is_terminal() || tokio::time::Instant::now() >= deadline {
            return task;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
}

/// Parse a list of absolute URLs.
pub fn urls(raw: &[&str]) -> Vec<Url> {
    raw.iter().map(|u| Url::parse(u).expect("valid url")).collect()
}
