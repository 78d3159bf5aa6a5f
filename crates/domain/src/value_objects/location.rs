//! Location preview value object
//!
//! A lightweight reference to a location entity (id, name, type, dimension)
//! short of its full attribute set. Character payloads carry only a
//! location's name and resource URL, so previews derived from them leave
//! `type` and `dimension` unset; only a richer per-location fetch could
//! fill those in.

use serde::{Deserialize, Serialize};

/// Sentinel value marking "identifier unknown/unparseable".
///
/// Every identifier sourced from a foreign reference URL is either a valid
/// non-negative integer extracted from that URL's final path segment, or
/// this sentinel.
pub const UNKNOWN_ID: i32 = -1;

/// A lightweight reference to a location entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationPreview {
    /// The unique identifier for the location, or [`UNKNOWN_ID`].
    pub id: i32,
    /// The name of the location.
    pub name: String,
    /// The type or category of the location, when known.
    pub r#type: Option<String>,
    /// The dimension or universe where this location exists, when known.
    pub dimension: Option<String>,
}

impl LocationPreview {
    /// Preview for "no location known": empty name, sentinel id, nothing else.
    pub fn empty() -> Self {
        Self {
            id: UNKNOWN_ID,
            name: String::new(),
            r#type: None,
            dimension: None,
        }
    }
}

impl Default for LocationPreview {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_preview_uses_sentinel_id() {
        let preview = LocationPreview::empty();
        assert_eq!(preview.id, UNKNOWN_ID);
        assert_eq!(preview.name, "");
        assert_eq!(preview.r#type, None);
        assert_eq!(preview.dimension, None);
    }

    #[test]
    fn default_equals_empty() {
        assert_eq!(LocationPreview::default(), LocationPreview::empty());
    }

    #[test]
    fn serializes_type_field_without_raw_prefix() {
        let preview = LocationPreview {
            id: 20,
            name: "Citadel".to_string(),
            r#type: Some("Space station".to_string()),
            dimension: None,
        };
        let json = serde_json::to_value(&preview).expect("serializable");
        assert_eq!(json["type"], "Space station");
        assert_eq!(json["id"], 20);
    }
}
