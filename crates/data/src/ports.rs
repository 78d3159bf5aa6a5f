//! Port traits the repository is composed over
//!
//! `CharacterSource` abstracts the remote API, `CharacterStore` the local
//! persistence. Both are object-safe so the repository can hold them as
//! trait objects and tests can substitute mocks.

use async_trait::async_trait;

use crate::error::DataError;
use crate::local::records::CharacterRecord;
use crate::remote::responses::{CharacterPage, CharacterResponse};

/// Read access to the remote character API.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CharacterSource: Send + Sync {
    /// Fetch a single character by identifier.
    async fn character(&self, id: i32) -> Result<CharacterResponse, DataError>;

    /// Fetch one page of the character listing. `None` requests the
    /// API's first page.
    async fn characters(&self, page: Option<i32>) -> Result<CharacterPage, DataError>;
}

/// Keyed access to locally persisted character records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CharacterStore: Send + Sync {
    /// Look up a persisted record by character identifier.
    async fn get(&self, id: i32) -> Result<Option<CharacterRecord>, DataError>;

    /// Insert or overwrite the record keyed by its id.
    async fn save(&self, record: &CharacterRecord) -> Result<(), DataError>;
}
