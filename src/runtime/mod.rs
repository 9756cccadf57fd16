//! Runtime adapters and API surface.

pub mod api;
pub mod tokio_spawner;

pub use api::{lookup_task, submit_task, TaskView, UrlItem};
pub use tokio_spawner::TokioSpawner;
