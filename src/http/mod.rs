//! HTTP transport capability
//!
//! The core abstraction is the [`HttpClient`] trait: one GET operation that
//! reports its outcome to a completion callback. Status validation and body
//! decoding are left to higher layers, so a client reports every response it
//! receives as a success, whatever the status code.
//!
//! - [`ReqwestHttpClient`]: the concrete binding, backed by `reqwest` on Tokio

mod reqwest_client;

pub use reqwest_client::ReqwestHttpClient;

use crate::error::Error;
use reqwest::header::HeaderMap;
use url::Url;

/// HTTP status code of the only response the feed mapper accepts
pub const OK_200: u16 = 200;

/// A response received from the remote end
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// URL the response was received from (after redirects)
    pub url: Url,
    /// HTTP status code
    pub status: u16,
    /// Response headers; not inspected by the feed pipeline
    pub headers: HeaderMap,
    /// Raw body bytes, possibly empty
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Create a response with no headers
    pub fn new(url: Url, status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            url,
            status,
            headers: HeaderMap::new(),
            body: body.into(),
        }
    }
}

/// Outcome of one GET: a response, or the transport error that prevented one
pub type HttpClientResult = std::result::Result<HttpResponse, Error>;

/// Callback receiving an [`HttpClientResult`]
pub type HttpClientCompletion = Box<dyn FnOnce(HttpClientResult) + Send + 'static>;

/// Trait for performing HTTP GET requests
///
/// Contract:
/// - `completion` is invoked exactly once per call to [`get`](HttpClient::get)
/// - No threading guarantee: the completion may run on any thread or task
/// - A successful result always carries a status code
/// - Timeouts are the implementation's responsibility
pub trait HttpClient: Send + Sync {
    /// Perform a GET for `url` and report the result through `completion`
    fn get(&self, url: &Url, completion: HttpClientCompletion);
}
