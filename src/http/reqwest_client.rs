//! `reqwest`-backed HTTP client

use super::{HttpClient, HttpClientCompletion, HttpClientResult, HttpResponse};
use crate::config::HttpConfig;
use crate::error::{Error, Result};
use tokio::runtime::Handle;
use tracing::debug;
use url::Url;

/// [`HttpClient`] implementation backed by a shared `reqwest::Client`
///
/// Each `get` is spawned onto the Tokio runtime captured at construction, so
/// the caller never blocks and the completion runs on a runtime worker.
/// Mapping of `reqwest` outcomes:
/// - request or body-read failure → `Err(Error::Network)`
/// - any received response → `Ok(HttpResponse)`, including non-2xx statuses
#[derive(Clone)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
    runtime: Handle,
}

impl ReqwestHttpClient {
    /// Create a client from transport settings
    ///
    /// # Errors
    /// Returns `Error::Config` when called outside a Tokio runtime, or
    /// `Error::Other` if the underlying client cannot be built.
    pub fn new(config: &HttpConfig) -> Result<Self> {
        let runtime = Handle::try_current().map_err(|e| Error::Config {
            message: format!("HTTP client requires a Tokio runtime: {}", e),
            key: None,
        })?;

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| Error::Other(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self::with_client(client, runtime))
    }

    /// Wrap an existing `reqwest::Client`, spawning requests on `runtime`
    pub fn with_client(client: reqwest::Client, runtime: Handle) -> Self {
        Self { client, runtime }
    }

    async fn fetch(client: reqwest::Client, url: Url) -> HttpClientResult {
        let response = client.get(url).send().await?;

        let status = response.status().as_u16();
        let final_url = response.url().clone();
        let headers = response.headers().clone();
        let body = response.bytes().await?;

        debug!(url = %final_url, status, bytes = body.len(), "received HTTP response");

        Ok(HttpResponse {
            url: final_url,
            status,
            headers,
            body: body.to_vec(),
        })
    }
}

impl HttpClient for ReqwestHttpClient {
    fn get(&self, url: &Url, completion: HttpClientCompletion) {
        let client = self.client.clone();
        let url = url.clone();

        debug!(url = %url, "issuing HTTP GET");
        self.runtime.spawn(async move {
            let result = Self::fetch(client, url).await;
            completion(result);
        });
    }
}
