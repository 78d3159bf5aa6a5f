//! Portaldex Domain - strongly-typed character models
//!
//! This crate holds the in-memory representations consumed by application
//! logic: the [`Character`] snapshot, its closed [`CharacterStatus`] /
//! [`CharacterGender`] enumerations, and the [`LocationPreview`] value
//! object shared with the storage layer.
//!
//! Domain values are produced by the data layer's mappers and carry no
//! behavior beyond lookup helpers; the tolerant rehydration rules (exact
//! variant-name match with an `Unknown` fallback, [`UNKNOWN_ID`] sentinel
//! for unparseable identifiers) live on the types themselves so every
//! consumer sees the same fallback semantics.

pub mod entities;
pub mod error;
pub mod value_objects;

// Re-export the domain surface (explicit lists in the module files)
pub use entities::{Character, CharacterGender, CharacterStatus};
pub use error::DomainError;
pub use value_objects::{LocationPreview, UNKNOWN_ID};
