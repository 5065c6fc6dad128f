//! Wire representation of a single feed entry

use crate::error::InvalidDataError;
use crate::feed::FeedImage;
use serde::Deserialize;
use url::Url;
use uuid::Uuid;

/// One entry exactly as it appears on the wire, before format checks.
///
/// Missing `id` or `image` already fails here; `description` and `location`
/// may be absent or `null`. Unknown fields are ignored.
#[derive(Debug, Deserialize)]
pub(crate) struct WireItem {
    id: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    location: Option<String>,
    image: String,
}

/// Validated feed entry as decoded from the remote payload
///
/// Lives only for the duration of one mapping pass before being turned into
/// a [`FeedImage`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteFeedItem {
    /// Entry identity
    pub id: Uuid,
    /// Optional description
    pub description: Option<String>,
    /// Optional location
    pub location: Option<String>,
    /// Image URL (`image` on the wire), validated but kept as received
    pub image: String,
}

impl RemoteFeedItem {
    /// Check `id` and `image` formats for the record at `index`
    pub(crate) fn from_wire(index: usize, wire: WireItem) -> Result<Self, InvalidDataError> {
        let id = Uuid::parse_str(&wire.id).map_err(|_| InvalidDataError::InvalidId {
            index,
            value: wire.id.clone(),
        })?;

        Url::parse(&wire.image).map_err(|source| InvalidDataError::InvalidImageUrl {
            index,
            value: wire.image.clone(),
            source,
        })?;

        Ok(Self {
            id,
            description: wire.description,
            location: wire.location,
            image: wire.image,
        })
    }
}

impl From<RemoteFeedItem> for FeedImage {
    fn from(item: RemoteFeedItem) -> Self {
        FeedImage::from_validated(item.id, item.description, item.location, item.image)
    }
}
