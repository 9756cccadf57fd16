//! # URL Probe Tasks
//!
//! An asynchronous task service that accepts a batch of URLs, probes each one
//! in a background job, and lets clients poll the task for completion.
//!
//! ## Core Problem Solved
//!
//! Probing many URLs is slow and repetitive across clients:
//!
//! - **Non-blocking submission**: creating a task returns immediately; the work
//!   runs detached on the runtime
//! - **Shared results**: a result cache keyed by normalized URL lets later
//!   tasks reuse earlier probes until the next sweep
//! - **Coarse freshness**: a single background sweeper clears the whole cache
//!   on a fixed interval
//! - **Per-host telemetry**: cumulative resolution counts per host, never swept
//!
//! ## Key Features
//!
//! - **Ordered results**: each task resolves its URLs sequentially and appends
//!   results in request order
//! - **Explicit failure**: a probe or cache failure moves the task to `failed`
//!   with the failing URL recorded, keeping partial results
//! - **Pluggable collaborators**: `ProbeClient`, `ResultCache`, and `Spawn`
//!   traits with reqwest, in-memory, and tokio implementations
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use url_probe_tasks::builders::{build_http_probe, build_service};
//! use url_probe_tasks::config::ServiceConfig;
//! use url_probe_tasks::infra::InMemoryResultCache;
//! use url_probe_tasks::runtime::{lookup_task, submit_task, TokioSpawner, UrlItem};
//!
//! let cfg = ServiceConfig::from_env()?;
//! let probe = build_http_probe(&cfg)?;
//! let app = build_service(&cfg, Arc::new(InMemoryResultCache::new()), probe, TokioSpawner::current())?;
//!
//! let created = submit_task(&app.service, &[UrlItem::from("https://example.com")])?;
//! // ... later
//! let task = lookup_task(&app.service, &created.id.to_string())?;
//! app.shutdown().await;
//! ```
//!
//! For complete scenarios, see `tests/task_service_test.rs`.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Task model, registry, executor, cache abstraction, and sweeper.
pub mod core;
/// Configuration models for the service, sweeper, and probe transport.
pub mod config;
/// Builders to construct the service from configuration.
pub mod builders;
/// Infrastructure adapters for the cache and probe transport.
pub mod infra;
/// Runtime adapters and API surface.
pub mod runtime;
/// Shared utilities.
pub mod util;
