//! # remote-feed
//!
//! Client-side feed loading: fetch a JSON feed over HTTP, validate the
//! response, and map it into immutable [`FeedImage`] values.
//!
//! ## Design Philosophy
//!
//! remote-feed is designed to be:
//! - **Transport-agnostic** - The pipeline talks to an [`HttpClient`] trait; `reqwest` is one binding
//! - **Strict** - Only status 200 with a fully valid payload succeeds, there is no partial result
//! - **Lifecycle-safe** - Dropping a loader guarantees its pending requests never call back
//! - **Library-first** - No CLI or UI, purely a Rust crate for embedding
//!
//! ## Quick Start
//!
//! ```no_run
//! use remote_feed::{Config, RemoteFeedLoader};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::new("https://example.com/feed.json");
//!     let loader = RemoteFeedLoader::from_config(&config)?;
//!
//!     match loader.load_async().await {
//!         Ok(images) => println!("loaded {} images", images.len()),
//!         Err(e) => eprintln!("load failed: {} ({})", e, e.code()),
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! Callback style, for callers without an async context:
//!
//! ```no_run
//! use remote_feed::{FeedLoader, RemoteFeedLoader, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let loader = RemoteFeedLoader::from_config(&Config::new("https://example.com/feed.json"))?;
//! loader.load(Box::new(|result| {
//!     // May run on any thread
//!     println!("{:?}", result);
//! }));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

/// Configuration types
pub mod config;
/// Error types
pub mod error;
/// Domain model and loading use case
pub mod feed;
/// HTTP transport capability
pub mod http;
/// Remote loading pipeline
pub mod remote;

// Re-export commonly used types
pub use config::{Config, HttpConfig};
pub use error::{Error, InvalidDataError, LoadError, Result};
pub use feed::{FeedImage, FeedLoader, FeedLoaderCompletion, LoadFeedResult};
pub use http::{HttpClient, HttpClientCompletion, HttpClientResult, HttpResponse, ReqwestHttpClient};
pub use remote::{FeedItemsMapper, RemoteFeedItem, RemoteFeedLoader};
