//! Configuration for the task service, sweeper, and probe transport.

pub mod service;

pub use service::ServiceConfig;
