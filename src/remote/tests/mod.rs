use super::*;
use crate::error::{InvalidDataError, LoadError};
use crate::feed::{FeedImage, FeedLoader, LoadFeedResult};
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};
use url::Url;
use uuid::Uuid;


/// Creates a `FeedImage` and its JSON representation.
/// `None` description/location are left out of the JSON entirely.
fn make_item(
    id: Uuid,
    description: Option<&str>,
    location: Option<&str>,
    image_url: &str,
) -> (FeedImage, Value) {
    let model = FeedImage::try_new(
        id,
        description.map(str::to_string),
        location.map(str::to_string),
        image_url,
    )
    .unwrap();

    let mut json = json!({
        "id": id.to_string(),
        "description": description,
        "location": location,
        "image": image_url,
    });
    let object = json.as_object_mut().unwrap();
    object.retain(|_, v| !v.is_null());

    (model, json)
}

/// Wraps item objects in the `{"items": [...]}` envelope and serializes them.
fn make_items_json(items: Vec<Value>) -> Vec<u8> {
    serde_json::to_vec(&json!({ "items": items })).unwrap()
}

/// Collects every result a loader delivers.
#[derive(Clone, Default)]
struct CapturedResults(Arc<Mutex<Vec<LoadFeedResult>>>);

impl CapturedResults {
    fn load_into(&self, loader: &RemoteFeedLoader) {
        let captured = self.0.clone();
        loader.load(Box::new(move |result| captured.lock().unwrap().push(result)));
    }

    fn take(&self) -> Vec<LoadFeedResult> {
        std::mem::take(&mut *self.0.lock().unwrap())
    }
}
