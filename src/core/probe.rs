//! Probe client abstraction.

use async_trait::async_trait;
use url::Url;

use super::ProbeError;

/// Performs a single outbound check of a URL and reports its HTTP status code.
///
/// Implementations are stateless with respect to results: caching belongs to
/// the [`ResultCache`](super::ResultCache), and retries, if any, belong here.
///
/// # Example
///
/// ```rust,ignore
/// use async_trait::async_trait;
/// use url::Url;
/// use url_probe_tasks::core::{ProbeClient, ProbeError};
///
/// #[derive(Clone)]
/// struct AlwaysOk;
///
/// #[async_trait]
/// impl ProbeClient for AlwaysOk {
///     async fn probe(&self, _url: &Url) -> Result<u16, ProbeError> {
///         Ok(200)
///     }
/// }
/// ```
#[async_trait]
pub trait ProbeClient: Send + Sync + Clone + 'static {
    /// Probe `url` and return the response status code.
    async fn probe(&self, url: &Url) -> Result<u16, ProbeError>;
}
