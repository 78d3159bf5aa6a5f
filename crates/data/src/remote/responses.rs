//! Wire DTOs mirroring the character API's JSON payloads
//!
//! Field names and nesting follow the API verbatim; nothing here is
//! interpreted. Flattening and sentinel handling happen later, in
//! [`crate::mapping`].

use serde::{Deserialize, Serialize};

/// A named reference to another API resource.
///
/// The target's identifier is only present as the trailing segment of
/// `url`, which may be empty when the API has no target to point at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRef {
    pub name: String,
    pub url: String,
}

/// One character exactly as the API serializes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterResponse {
    pub id: i32,
    pub name: String,
    /// Free-form status string, e.g. "Alive"; never interpreted here.
    pub status: String,
    pub species: String,
    pub r#type: String,
    pub gender: String,
    pub origin: ResourceRef,
    pub location: ResourceRef,
    pub image: String,
    pub created: String,
}

/// Pagination metadata attached to every listing response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    pub count: i32,
    pub pages: i32,
    pub next: Option<String>,
    pub prev: Option<String>,
}

/// One page of the character listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterPage {
    pub info: PageInfo,
    pub results: Vec<CharacterResponse>,
}
