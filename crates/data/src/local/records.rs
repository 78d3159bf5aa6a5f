//! Storage records - the flattened, persistence-friendly character shape
//!
//! Nested wire structures are flattened to scalars so a record can live
//! in any keyed store: the origin reference becomes a name plus an id
//! extracted from its URL. Status and gender stay verbatim strings; they
//! are only interpreted when mapped to the domain.

use portaldex_domain::{LocationPreview, UNKNOWN_ID};
use serde::{Deserialize, Serialize};

/// The persisted character shape, keyed by `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterRecord {
    pub id: i32,
    pub name: String,
    /// Status string exactly as the wire delivered it.
    pub status: String,
    pub species: String,
    pub r#type: String,
    /// Gender string exactly as the wire delivered it.
    pub gender: String,
    pub origin_name: String,
    /// Id extracted from the origin's reference URL, or [`UNKNOWN_ID`]
    /// when no trailing id could be parsed.
    pub origin_id: i32,
    pub image: String,
    /// Creation timestamp kept as the verbatim wire string.
    pub created: String,
}

impl Default for CharacterRecord {
    fn default() -> Self {
        Self {
            id: UNKNOWN_ID,
            name: String::new(),
            status: String::new(),
            species: String::new(),
            r#type: String::new(),
            gender: String::new(),
            origin_name: String::new(),
            origin_id: UNKNOWN_ID,
            image: String::new(),
            created: String::new(),
        }
    }
}

/// A record together with its transient location preview.
///
/// The preview is populated when the record was just mapped from a wire
/// response and absent when the record was reloaded from the store; it
/// is never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HydratedCharacterRecord {
    pub record: CharacterRecord,
    pub location: Option<LocationPreview>,
}

impl From<CharacterRecord> for HydratedCharacterRecord {
    fn from(record: CharacterRecord) -> Self {
        Self {
            record,
            location: None,
        }
    }
}
