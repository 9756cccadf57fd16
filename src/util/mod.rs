//! Shared utilities.

pub mod clock;
pub mod telemetry;
pub mod probe_url;

pub use clock::*;
pub use telemetry::*;
pub use probe_url::{host_key, parse_probe_url};
