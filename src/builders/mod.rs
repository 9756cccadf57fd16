//! Builders to construct the task service from configuration.

pub mod service_builder;

pub use service_builder::{build_http_probe, build_runtime, build_service, ProbeService};
