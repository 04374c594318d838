//! Wire types for posts fetched from the content platform.
//!
//! The map core consumes only `{id, position, categories}` projected from a
//! post document and is agnostic to the transport that delivered it.

use foundation::geo::GeoPoint;
use foundation::ids::FeatureId;
use markers::feature::PostFeature;
use serde::{Deserialize, Serialize};

/// Raw post document as returned by the content platform.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PostDocument {
    pub author: String,
    pub permlink: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
    /// Free-form metadata blob; location and tags live here when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub json_metadata: Option<serde_json::Value>,
}

impl PostDocument {
    /// Stable identity used for markers and interaction handlers.
    pub fn feature_id(&self) -> FeatureId {
        FeatureId::new(format!("{}/{}", self.author, self.permlink))
    }
}

/// The subset of post metadata the map cares about.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct PostMetadata {
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub location: Option<RawLocation>,
}

#[derive(Debug, Copy, Clone, Deserialize, PartialEq)]
pub struct RawLocation {
    pub latitude: f64,
    pub longitude: f64,
}

/// Projects a post document onto a plottable feature.
///
/// Posts without parseable, finite coordinates are simply not plottable;
/// that is `None`, not an error. Malformed metadata is treated the same way
/// because the platform does not validate what authors put there.
pub fn project_feature(doc: &PostDocument) -> Option<PostFeature> {
    let metadata = doc.json_metadata.as_ref()?;
    let metadata: PostMetadata = serde_json::from_value(metadata.clone()).ok()?;
    let location = metadata.location?;

    let position = GeoPoint::new(location.latitude, location.longitude);
    if !position.is_finite() {
        return None;
    }

    let mut feature = PostFeature::new(doc.feature_id(), position);
    for tag in metadata.tags {
        feature.categories.insert(tag);
    }
    Some(feature)
}
