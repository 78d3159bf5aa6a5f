//! Character entity - the in-memory model consumed by application logic
//!
//! Instances are produced by the data layer's storage-to-domain mapping at
//! read time and are immutable value snapshots from then on. The closed
//! enumerations rehydrate from stored strings by exact variant name with a
//! guaranteed `Unknown` fallback, so the mapping can never fail on them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_objects::LocationPreview;

/// Current status of a character (e.g. 'Alive', 'Dead').
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CharacterStatus {
    Alive,
    Dead,
    /// Fallback for stored strings that match no known variant.
    #[default]
    #[serde(other)]
    Unknown,
}

impl CharacterStatus {
    /// Look up a variant by its exact name, falling back to `Unknown`.
    ///
    /// The match is deliberately case-sensitive: the storage layer keeps
    /// whatever string the wire delivered, and only an exact variant name
    /// counts as known.
    pub fn from_name(name: &str) -> Self {
        name.parse().unwrap_or(Self::Unknown)
    }

    /// The variant's canonical name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Alive => "Alive",
            Self::Dead => "Dead",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for CharacterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CharacterStatus {
    type Err = DomainError;

    /// Strict counterpart of [`CharacterStatus::from_name`]: unknown names
    /// are an error instead of a fallback.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Alive" => Ok(Self::Alive),
            "Dead" => Ok(Self::Dead),
            "Unknown" => Ok(Self::Unknown),
            _ => Err(DomainError::parse(format!(
                "Unknown character status: {s}"
            ))),
        }
    }
}

/// Gender of a character (e.g. 'Female', 'Male').
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CharacterGender {
    Female,
    Male,
    Genderless,
    /// Fallback for stored strings that match no known variant.
    #[default]
    #[serde(other)]
    Unknown,
}

impl CharacterGender {
    /// Look up a variant by its exact name, falling back to `Unknown`.
    pub fn from_name(name: &str) -> Self {
        name.parse().unwrap_or(Self::Unknown)
    }

    /// The variant's canonical name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Female => "Female",
            Self::Male => "Male",
            Self::Genderless => "Genderless",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for CharacterGender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CharacterGender {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Female" => Ok(Self::Female),
            "Male" => Ok(Self::Male),
            "Genderless" => Ok(Self::Genderless),
            "Unknown" => Ok(Self::Unknown),
            _ => Err(DomainError::parse(format!(
                "Unknown character gender: {s}"
            ))),
        }
    }
}

/// A character as seen by application logic.
///
/// Created exclusively by the data layer's storage-to-domain mapping; an
/// immutable snapshot with no independent lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    /// Unique identifier of the character.
    pub id: i32,
    pub name: String,
    pub status: CharacterStatus,
    /// Biological species of the character.
    pub species: String,
    /// The type or subspecies of the character (empty when the wire sends none).
    pub r#type: String,
    pub gender: CharacterGender,
    /// Origin location as a (name, id) pair; the id is [`crate::UNKNOWN_ID`]
    /// when the origin's reference URL carried no parseable identifier.
    pub origin: (String, i32),
    /// The current or last known location of the character.
    pub location: LocationPreview,
    /// URL pointing to the character's avatar image.
    pub avatar_url: String,
}
