//! Probe client backends.

pub mod http;

pub use http::HttpProbeClient;
