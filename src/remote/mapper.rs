//! Status and schema validation for feed payloads

use super::item::{RemoteFeedItem, WireItem};
use crate::error::InvalidDataError;
use crate::feed::FeedImage;
use crate::http::{HttpResponse, OK_200};
use serde::Deserialize;

/// Top-level payload that wraps the array of entries
#[derive(Deserialize)]
struct Root {
    items: Vec<WireItem>,
}

/// Maps raw HTTP payloads into `Vec<FeedImage>`
///
/// Stateless. The batch is all-or-nothing: a single bad record rejects the
/// whole payload.
pub struct FeedItemsMapper;

impl FeedItemsMapper {
    /// Validate `status` and decode `data` into feed entries, in payload order
    ///
    /// # Errors
    /// - [`InvalidDataError::UnexpectedStatus`] for any status other than 200;
    ///   the body is not looked at
    /// - [`InvalidDataError::Malformed`] if the body is not an object with an
    ///   `items` array, or a record lacks `id` or `image`
    /// - [`InvalidDataError::InvalidId`] / [`InvalidDataError::InvalidImageUrl`]
    ///   for the first record with a bad UUID or URL
    pub fn map(data: &[u8], status: u16) -> Result<Vec<FeedImage>, InvalidDataError> {
        if status != OK_200 {
            return Err(InvalidDataError::UnexpectedStatus(status));
        }

        let root: Root = serde_json::from_slice(data)?;

        root.items
            .into_iter()
            .enumerate()
            .map(|(index, wire)| RemoteFeedItem::from_wire(index, wire).map(FeedImage::from))
            .collect()
    }

    /// [`map`](Self::map) applied to a received response
    pub fn map_response(response: &HttpResponse) -> Result<Vec<FeedImage>, InvalidDataError> {
        Self::map(&response.body, response.status)
    }
}
