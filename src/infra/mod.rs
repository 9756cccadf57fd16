//! Infrastructure adapters for the result cache and the probe transport.

pub mod cache;
pub mod probe;

pub use cache::InMemoryResultCache;
pub use probe::HttpProbeClient;
