//! Feed loading use case

use super::FeedImage;
use crate::error::LoadError;

/// Outcome of one feed load: the entries in payload order, or one error kind
pub type LoadFeedResult = std::result::Result<Vec<FeedImage>, LoadError>;

/// Callback receiving a [`LoadFeedResult`]
pub type FeedLoaderCompletion = Box<dyn FnOnce(LoadFeedResult) + Send + 'static>;

/// Trait for anything that can load the feed
///
/// Contract:
/// - `completion` is invoked at most once per call to [`load`](FeedLoader::load)
/// - No threading guarantee: the completion may run on any thread, so callers
///   dispatch to their own context if they need one
/// - Implementations may source data from the network, a cache, or both
pub trait FeedLoader: Send + Sync {
    /// Start loading the feed and report the outcome through `completion`
    fn load(&self, completion: FeedLoaderCompletion);
}
