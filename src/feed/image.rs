//! Immutable feed entry

use serde::{Deserialize, Serialize};
use url::Url;
use uuid::Uuid;

/// A single feed entry as understood by the application
///
/// Fields are private and exposed through accessors, so a value never
/// changes after construction. Equality is structural.
///
/// The image URL is always a valid absolute URL, but is kept exactly as it
/// was supplied: `"http://a-url.com"` stays `"http://a-url.com"`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "FeedImageFields")]
pub struct FeedImage {
    id: Uuid,
    description: Option<String>,
    location: Option<String>,
    url: String,
}

/// Unchecked shape used to validate deserialized entries
#[derive(Deserialize)]
struct FeedImageFields {
    id: Uuid,
    description: Option<String>,
    location: Option<String>,
    url: String,
}

impl TryFrom<FeedImageFields> for FeedImage {
    type Error = url::ParseError;

    fn try_from(fields: FeedImageFields) -> Result<Self, Self::Error> {
        Self::try_new(fields.id, fields.description, fields.location, fields.url)
    }
}

impl FeedImage {
    /// Create a feed entry from an already parsed URL.
    /// Only `description` and `location` are optional.
    pub fn new(id: Uuid, description: Option<String>, location: Option<String>, url: Url) -> Self {
        Self::from_validated(id, description, location, url.into())
    }

    /// Create a feed entry from a URL string, keeping it verbatim
    ///
    /// # Errors
    /// Returns the parser error if `url` is not a valid absolute URL.
    pub fn try_new(
        id: Uuid,
        description: Option<String>,
        location: Option<String>,
        url: impl Into<String>,
    ) -> Result<Self, url::ParseError> {
        let url = url.into();
        Url::parse(&url)?;
        Ok(Self::from_validated(id, description, location, url))
    }

    /// `url` must already have passed `Url::parse`.
    pub(crate) fn from_validated(
        id: Uuid,
        description: Option<String>,
        location: Option<String>,
        url: String,
    ) -> Self {
        Self {
            id,
            description,
            location,
            url,
        }
    }

    /// Unique identity
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Free-text description, if any
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Free-text location, if any
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    /// Location of the image resource, as supplied
    pub fn url(&self) -> &str {
        &self.url
    }
}
