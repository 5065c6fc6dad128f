//! Feed loader backed by an [`HttpClient`]

use super::FeedItemsMapper;
use crate::config::Config;
use crate::error::{LoadError, Result};
use crate::feed::{FeedLoader, FeedLoaderCompletion, LoadFeedResult};
use crate::http::{HttpClient, HttpClientResult, ReqwestHttpClient};
use std::sync::{Arc, Weak};
use tokio::sync::oneshot;
use tracing::{debug, warn};
use url::Url;

/// State owned by a loader and observed (never owned) by in-flight requests
struct LoaderState {
    url: Url,
}

/// Loads the feed from a fixed URL through an [`HttpClient`]
///
/// Each call to [`load`](FeedLoader::load) issues exactly one GET; calls do
/// not share in-flight state, so concurrent loads are independent.
///
/// In-flight requests hold only a weak handle to the loader. If the loader is
/// dropped before the transport reports back, the completion is never called.
/// The request itself is not cancelled, its result is just discarded.
pub struct RemoteFeedLoader {
    state: Arc<LoaderState>,
    client: Arc<dyn HttpClient>,
}

impl RemoteFeedLoader {
    /// Create a loader for `url`. No request is made until `load` is called.
    pub fn new(url: Url, client: Arc<dyn HttpClient>) -> Self {
        Self {
            state: Arc::new(LoaderState { url }),
            client,
        }
    }

    /// Create a loader with a [`ReqwestHttpClient`] built from `config`
    ///
    /// # Errors
    /// Returns `Error::Config` if the configuration is invalid or no Tokio
    /// runtime is available.
    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate()?;
        let url = config.parsed_feed_url()?;
        let client = ReqwestHttpClient::new(&config.http)?;
        Ok(Self::new(url, Arc::new(client)))
    }

    /// The URL every load requests
    pub fn url(&self) -> &Url {
        &self.state.url
    }

    /// Load the feed and await the result
    ///
    /// Resolves to `Err(LoadError::Connectivity)` if the client drops the
    /// completion without calling it.
    pub async fn load_async(&self) -> LoadFeedResult {
        let (tx, rx) = oneshot::channel();
        self.load(Box::new(move |result| {
            tx.send(result).ok();
        }));

        rx.await.unwrap_or_else(|_| {
            warn!(url = %self.state.url, "HTTP client dropped the request without completing it");
            Err(LoadError::Connectivity)
        })
    }

    /// Turn one transport outcome into the result delivered to the caller
    fn translate(url: &Url, result: HttpClientResult) -> LoadFeedResult {
        let response = match result {
            Ok(response) => response,
            Err(e) => {
                warn!(url = %url, error = %e, "feed request failed");
                return Err(LoadError::Connectivity);
            }
        };

        match FeedItemsMapper::map_response(&response) {
            Ok(items) => {
                debug!(url = %url, items = items.len(), "feed loaded");
                Ok(items)
            }
            Err(e) => {
                warn!(url = %url, status = response.status, reason = %e, "feed payload rejected");
                Err(e.into())
            }
        }
    }
}

impl FeedLoader for RemoteFeedLoader {
    fn load(&self, completion: FeedLoaderCompletion) {
        let state: Weak<LoaderState> = Arc::downgrade(&self.state);

        debug!(url = %self.state.url, "requesting feed");
        self.client.get(
            &self.state.url,
            Box::new(move |result| {
                let Some(state) = state.upgrade() else {
                    debug!("feed loader dropped before the response arrived, discarding result");
                    return;
                };

                completion(Self::translate(&state.url, result));
            }),
        );
    }
}
