//! Character repository - local-first orchestration over the two ports
//!
//! Single-character reads try the store before the remote source and
//! persist whatever the source returns. Listing reads always go remote,
//! persisting every record on the way through.

use std::sync::Arc;

use portaldex_domain::Character;

use crate::error::DataError;
use crate::local::records::HydratedCharacterRecord;
use crate::ports::{CharacterSource, CharacterStore};

/// Local-first access to characters.
#[derive(Clone)]
pub struct CharacterRepository {
    source: Arc<dyn CharacterSource>,
    store: Arc<dyn CharacterStore>,
}

impl CharacterRepository {
    pub fn new(source: Arc<dyn CharacterSource>, store: Arc<dyn CharacterStore>) -> Self {
        Self { source, store }
    }

    /// Get one character, serving from the local store when possible.
    ///
    /// On a store miss the character is fetched remotely, its record
    /// persisted, and the freshly mapped entity returned with its
    /// location preview intact.
    pub async fn character(&self, id: i32) -> Result<Character, DataError> {
        if let Some(record) = self.store.get(id).await? {
            tracing::debug!(id, "serving character from local store");
            return Ok(Character::from(record));
        }

        tracing::debug!(id, "character not stored locally, fetching");
        let response = self.source.character(id).await?;
        let hydrated = HydratedCharacterRecord::from(response);
        self.store.save(&hydrated.record).await?;

        Ok(Character::from(hydrated))
    }

    /// Fetch one page of characters, persisting each record.
    ///
    /// Returned entities keep the API's ordering and their location
    /// previews, since each is mapped straight from the wire.
    pub async fn characters(&self, page: Option<i32>) -> Result<Vec<Character>, DataError> {
        let page = self.source.characters(page).await?;

        let mut characters = Vec::with_capacity(page.results.len());
        for response in page.results {
            let hydrated = HydratedCharacterRecord::from(response);
            self.store.save(&hydrated.record).await?;
            characters.push(Character::from(hydrated));
        }

        Ok(characters)
    }
}
