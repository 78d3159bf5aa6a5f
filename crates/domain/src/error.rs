//! Unified error type for the domain layer
//!
//! The tolerant lookup paths (`from_name`, the data layer's mappers) never
//! produce errors; this type exists for the strict `FromStr` surface that
//! callers use when they want validation instead of a fallback.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Parse error (for string-to-type conversions)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl DomainError {
    /// Creates a parse error for string-to-type conversion failures.
    ///
    /// Use this in `FromStr` implementations when the input string doesn't
    /// match any known variant:
    ///
    /// ```ignore
    /// impl FromStr for CharacterStatus {
    ///     type Err = DomainError;
    ///     fn from_str(s: &str) -> Result<Self, Self::Err> {
    ///         match s {
    ///             "Alive" => Ok(Self::Alive),
    ///             _ => Err(DomainError::parse(format!("Unknown character status: {s}"))),
    ///         }
    ///     }
    /// }
    /// ```
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}
