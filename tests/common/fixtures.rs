//! Feed payload fixtures and mock server helpers

use remote_feed::{Config, RemoteFeedLoader};
use serde_json::{Value, json};
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Path the mock server serves the feed on
pub const FEED_PATH: &str = "/v1/feed";

/// Two entries: one with every field, one with only the required ones
pub fn sample_feed() -> Value {
    json!({
        "items": [
            {
                "id": "73a7f70c-6e8d-4f21-9b0e-4c5f6a7b8c9d",
                "description": "Morning light over the harbour",
                "location": "Lisbon",
                "image": "https://images.example.com/harbour.jpg"
            },
            {
                "id": "0f8b1c2d-3e4f-4a5b-8c6d-7e8f9a0b1c2d",
                "description": null,
                "location": null,
                "image": "https://images.example.com/untitled.png"
            }
        ]
    })
}

/// Start a mock server answering `GET FEED_PATH` with `template`
pub async fn serve_feed(template: ResponseTemplate) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(FEED_PATH))
        .respond_with(template)
        .mount(&server)
        .await;
    server
}

/// Configuration pointing at the feed on `server`, with short timeouts
pub fn config_for(server: &MockServer) -> Config {
    let mut config = Config::new(format!("{}{}", server.uri(), FEED_PATH));
    config.http.timeout = Duration::from_secs(5);
    config.http.connect_timeout = Duration::from_secs(2);
    config
}

/// Loader backed by the real HTTP client, targeting `server`
pub fn loader_for(server: &MockServer) -> RemoteFeedLoader {
    RemoteFeedLoader::from_config(&config_for(server)).expect("loader should build")
}
