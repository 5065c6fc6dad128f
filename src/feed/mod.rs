//! Feed feature: the domain model and the loading use case
//!
//! Nothing in this module knows about HTTP, JSON or storage. Loaders that
//! source feeds from the network, a cache or a composite of both all
//! implement [`FeedLoader`] and deliver [`FeedImage`] values.

mod image;
mod loader;

pub use image::FeedImage;
pub use loader::{FeedLoader, FeedLoaderCompletion, LoadFeedResult};
