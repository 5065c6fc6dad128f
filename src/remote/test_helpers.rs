//! Test double for [`HttpClient`] shared by the remote loader tests.

use crate::error::Error;
use crate::http::{HttpClient, HttpClientCompletion, HttpResponse};
use std::sync::Mutex;
use url::Url;

/// Records every GET without touching the network.
///
/// Requests stay pending until completed by index, which lets tests decide
/// when, from which thread, and with what the transport reports back.
#[derive(Default)]
pub(crate) struct HttpClientSpy {
    messages: Mutex<Vec<(Url, Option<HttpClientCompletion>)>>,
}

impl HttpClientSpy {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// URLs requested so far, in request order.
    pub(crate) fn requested_urls(&self) -> Vec<Url> {
        self.messages
            .lock()
            .unwrap()
            .iter()
            .map(|(url, _)| url.clone())
            .collect()
    }

    /// Complete request `index` with a transport error.
    pub(crate) fn complete_with_error(&self, error: Error, index: usize) {
        let completion = self.take_completion(index);
        completion(Err(error));
    }

    /// Complete request `index` with a response carrying `status` and `data`.
    pub(crate) fn complete_with_status(&self, status: u16, data: &[u8], index: usize) {
        let url = self.requested_urls()[index].clone();
        let completion = self.take_completion(index);
        completion(Ok(HttpResponse::new(url, status, data)));
    }

    /// Drop request `index` without ever completing it.
    pub(crate) fn abandon(&self, index: usize) {
        drop(self.take_completion(index));
    }

    // The lock is released before the completion runs.
    fn take_completion(&self, index: usize) -> HttpClientCompletion {
        self.messages.lock().unwrap()[index]
            .1
            .take()
            .expect("request already completed")
    }
}

impl HttpClient for HttpClientSpy {
    fn get(&self, url: &Url, completion: HttpClientCompletion) {
        self.messages
            .lock()
            .unwrap()
            .push((url.clone(), Some(completion)));
    }
}

/// Helper: a transport error with no network behind it.
pub(crate) fn any_transport_error() -> Error {
    Error::Other("connection reset by peer".into())
}
