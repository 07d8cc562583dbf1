//! Records returned by the TrailService API.
//!
//! The API is not described by a schema, so every field is optional and any
//! key this crate does not know about is kept in `extra`. A missing key
//! decodes to `None` instead of failing.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The `commentId` value meaning "no comment".
pub const NO_COMMENT: &str = "NC";

/// A TrailService user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Any other key in the response object.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A hiking trail.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrailRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trail_id: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trail_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Any other key in the response object.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One GPS-tagged sample along a trail.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationPoint {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    /// Elevation in meters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elevation: Option<f64>,
    /// Comment identifier, or [`NO_COMMENT`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trail_name: Option<String>,
    /// Any other key in the response object.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl LocationPoint {
    /// Create a point at the given position with no other fields set.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude: Some(latitude),
            longitude: Some(longitude),
            ..Default::default()
        }
    }

    /// Set the elevation.
    pub fn with_elevation(mut self, elevation: f64) -> Self {
        self.elevation = Some(elevation);
        self
    }

    /// Set the comment identifier.
    pub fn with_comment_id(mut self, comment_id: impl Into<String>) -> Self {
        self.comment_id = Some(comment_id.into());
        self
    }

    /// Set the trail name.
    pub fn with_trail_name(mut self, trail_name: impl Into<String>) -> Self {
        self.trail_name = Some(trail_name.into());
        self
    }

    /// Whether this point carries a real comment (anything but [`NO_COMMENT`]).
    ///
    /// A point without a `commentId` key counts as commented.
    pub fn has_comment(&self) -> bool {
        self.comment_id.as_deref() != Some(NO_COMMENT)
    }
}
