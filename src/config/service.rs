//! Service configuration structures.

use std::time::Duration;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::core::AppResult;

/// Environment variable holding the sweep interval in seconds.
pub const ENV_SWEEP_INTERVAL_SECS: &str = "URL_PROBE_SWEEP_INTERVAL_SECS";
/// Environment variable holding the probe request timeout in seconds.
pub const ENV_PROBE_TIMEOUT_SECS: &str = "URL_PROBE_TIMEOUT_SECS";
/// Environment variable holding the number of runtime worker threads.
pub const ENV_WORKER_THREADS: &str = "URL_PROBE_WORKER_THREADS";

const DEFAULT_SWEEP_INTERVAL_SECS: u64 = 60;

fn default_sweep_interval_secs() -> u64 {
    DEFAULT_SWEEP_INTERVAL_SECS
}

fn default_worker_threads() -> usize {
    num_cpus::get()
}

/// Service configuration, read once at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Seconds between whole-cache sweeps.
    #[serde(default = "default_sweep_interval_secs")]
    pub sweep_interval_secs: u64,
    /// Per-probe request timeout in seconds; `None` waits indefinitely.
    #[serde(default)]
    pub probe_timeout_secs: Option<u64>,
    /// Worker threads for the runtime built by [`build_runtime`](crate::builders::build_runtime).
    #[serde(default = "default_worker_threads")]
    pub worker_threads: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            sweep_interval_secs: default_sweep_interval_secs(),
            probe_timeout_secs: None,
            worker_threads: default_worker_threads(),
        }
    }
}

impl ServiceConfig {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), String> {
        if self.sweep_interval_secs == 0 {
            return Err("sweep_interval_secs must be greater than 0".into());
        }
        if self.probe_timeout_secs == Some(0) {
            return Err("probe_timeout_secs must be greater than 0 when set".into());
        }
        if self.worker_threads == 0 {
            return Err("worker_threads must be greater than 0".into());
        }
        Ok(())
    }

    /// Interval between cache sweeps.
    pub const fn sweep_interval(&self) -> Duration {
        Duration::from_secs(self.sweep_interval_secs)
    }

    /// Probe timeout, if configured.
    pub fn probe_timeout(&self) -> Option<Duration> {
        self.probe_timeout_secs.map(Duration::from_secs)
    }

    /// Parse configuration from a JSON string and validate.
    pub fn from_json_str(input: &str) -> Result<Self, String> {
        let cfg: Self = serde_json::from_str(input).map_err(|e| format!("parse error: {e}"))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Load configuration from the process environment, after reading a `.env`
    /// file if one is present. Unset variables keep their defaults.
    pub fn from_env() -> AppResult<Self> {
        // A missing .env file is fine.
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup, then validate.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();
        if let Some(raw) = lookup(ENV_SWEEP_INTERVAL_SECS) {
            cfg.sweep_interval_secs = raw
                .trim()
                .parse()
                .with_context(|| format!("{ENV_SWEEP_INTERVAL_SECS}=`{raw}` is not a number"))?;
        }
        if let Some(raw) = lookup(ENV_PROBE_TIMEOUT_SECS) {
            cfg.probe_timeout_secs = Some(
                raw.trim()
                    .parse()
                    .with_context(|| format!("{ENV_PROBE_TIMEOUT_SECS}=`{raw}` is not a number"))?,
            );
        }
        if let Some(raw) = lookup(ENV_WORKER_THREADS) {
            cfg.worker_threads = raw
                .trim()
                .parse()
                .with_context(|| format!("{ENV_WORKER_THREADS}=`{raw}` is not a number"))?;
        }
        cfg.validate().map_err(anyhow::Error::msg)?;
        Ok(cfg)
    }
}
