//! Error types for remote-feed
//!
//! This module provides error handling for the library at three levels:
//! - [`Error`]: crate-wide failures (configuration, transport, serialization)
//! - [`LoadError`]: the two error kinds ever delivered to a feed loader's caller
//! - [`InvalidDataError`]: the detailed reason a payload was rejected by the mapper
//!
//! Only [`LoadError`] crosses the loader boundary. The other two carry context
//! for logging and for callers that use the transport or mapper directly.

use thiserror::Error;

/// Result type alias for remote-feed operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for remote-feed
///
/// This is the error type used by configuration, client construction and the
/// failure side of a transport result. Each variant includes contextual
/// information to help diagnose issues.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error with context about which setting is invalid
    #[error("configuration error: {message}")]
    Config {
        /// Human-readable error message describing the configuration issue
        message: String,
        /// The configuration key that caused the error (e.g., "feed_url")
        key: Option<String>,
    },

    /// Network error raised by the HTTP stack (DNS, connect, timeout, body read)
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Other error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Shorthand for a configuration error tied to a specific key
    pub(crate) fn config(key: &str, message: impl Into<String>) -> Self {
        Error::Config {
            message: message.into(),
            key: Some(key.to_string()),
        }
    }
}

/// Error kinds surfaced to callers of a feed loader
///
/// These are the only two kinds. A 404 and a 500 are both `InvalidData`;
/// a DNS failure and a timeout are both `Connectivity`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum LoadError {
    /// The transport could not complete the exchange
    #[error("connectivity error: the request could not be completed")]
    Connectivity,

    /// A response arrived but failed status or payload validation
    #[error("invalid data: the response failed validation")]
    InvalidData,
}

impl LoadError {
    /// Machine-readable error code
    pub fn code(&self) -> &'static str {
        match self {
            LoadError::Connectivity => "connectivity",
            LoadError::InvalidData => "invalid_data",
        }
    }
}

/// Reason a response payload was rejected by
/// [`FeedItemsMapper`](crate::remote::FeedItemsMapper)
///
/// Any single record failing validation rejects the whole batch, so the
/// `index` fields only identify the first offending record.
#[derive(Debug, Error)]
pub enum InvalidDataError {
    /// HTTP status other than 200
    #[error("unexpected HTTP status {0}")]
    UnexpectedStatus(u16),

    /// Body is not JSON, or does not match the `{"items": [...]}` schema
    #[error("malformed payload: {0}")]
    Malformed(#[from] serde_json::Error),

    /// A record's `id` is not a valid UUID
    #[error("item {index}: invalid id {value:?}")]
    InvalidId {
        /// Position of the record in the `items` array
        index: usize,
        /// The rejected value
        value: String,
    },

    /// A record's `image` is not a valid absolute URL
    #[error("item {index}: invalid image URL {value:?}: {source}")]
    InvalidImageUrl {
        /// Position of the record in the `items` array
        index: usize,
        /// The rejected value
        value: String,
        /// Parser failure
        source: url::ParseError,
    },
}

impl From<InvalidDataError> for LoadError {
    fn from(_: InvalidDataError) -> Self {
        LoadError::InvalidData
    }
}
