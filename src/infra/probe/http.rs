//! HTTP probe client backed by reqwest.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::redirect::Policy;
use url::Url;

use crate::core::{ProbeClient, ProbeError};

/// Issues a `GET` against the URL and reports the raw response status.
///
/// Redirects are not followed, so a `301` or `302` is reported as-is.
#[derive(Clone)]
pub struct HttpProbeClient {
    client: reqwest::Client,
}

impl HttpProbeClient {
    /// Build a client with an optional per-request timeout.
    pub fn new(timeout: Option<Duration>) -> Result<Self, ProbeError> {
        let mut builder = reqwest::Client::builder().redirect(Policy::none());
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ProbeError::Transport(format!("client build failed: {e}")))?;
        Ok(Self { client })
    }

    /// Wrap an existing reqwest client.
    pub const fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ProbeClient for HttpProbeClient {
    async fn probe(&self, url: &Url) -> Result<u16, ProbeError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ProbeError::Timeout
                } else {
                    ProbeError::Transport(e.to_string())
                }
            })?;
        Ok(response.status().as_u16())
    }
}
