//! Remote feed loading: HTTP response → validated payload → domain entries
//!
//! The pipeline for one load:
//! 1. [`RemoteFeedLoader`] issues a GET through an [`HttpClient`](crate::http::HttpClient)
//! 2. Transport failures become [`LoadError::Connectivity`](crate::error::LoadError::Connectivity)
//! 3. Responses go through [`FeedItemsMapper`], which accepts only status 200
//!    with a well-formed `{"items": [...]}` document
//! 4. Any rejection becomes [`LoadError::InvalidData`](crate::error::LoadError::InvalidData)
//!
//! Expected JSON shape:
//!
//! ```json
//! {
//!   "items": [
//!     {
//!       "id": "A1B2C3D4-E5F6-7890-1234-56789ABCDEF0",
//!       "description": "optional text",
//!       "location": null,
//!       "image": "https://example.com/image.png"
//!     }
//!   ]
//! }
//! ```

mod item;
mod loader;
mod mapper;

pub use item::RemoteFeedItem;
pub use loader::RemoteFeedLoader;
pub use mapper::FeedItemsMapper;

// unwrap/expect are acceptable in tests for concise failure-on-error assertions
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
pub(crate) mod test_helpers;
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests;
