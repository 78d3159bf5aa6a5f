//! In-memory character store
//!
//! Reference [`CharacterStore`] backed by a `RwLock<HashMap>`. Suitable
//! for tests and as the cache tier in front of the remote source.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::DataError;
use crate::local::records::CharacterRecord;
use crate::ports::CharacterStore;

/// Process-local store of character records keyed by id.
#[derive(Debug, Default)]
pub struct InMemoryCharacterStore {
    records: RwLock<HashMap<i32, CharacterRecord>>,
}

impl InMemoryCharacterStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl CharacterStore for InMemoryCharacterStore {
    async fn get(&self, id: i32) -> Result<Option<CharacterRecord>, DataError> {
        Ok(self.records.read().await.get(&id).cloned())
    }

    async fn save(&self, record: &CharacterRecord) -> Result<(), DataError> {
        tracing::debug!(id = record.id, "persisting character record");
        self.records
            .write()
            .await
            .insert(record.id, record.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: i32, name: &str) -> CharacterRecord {
        CharacterRecord {
            id,
            name: name.into(),
            ..CharacterRecord::default()
        }
    }

    #[tokio::test]
    async fn saved_records_are_returned_by_get() {
        let store = InMemoryCharacterStore::new();
        let rick = record(1, "Rick Sanchez");

        store.save(&rick).await.expect("save succeeds");

        let loaded = store.get(1).await.expect("get succeeds");
        assert_eq!(loaded, Some(rick));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn missing_ids_return_none() {
        let store = InMemoryCharacterStore::new();
        assert_eq!(store.get(99).await.expect("get succeeds"), None);
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn saving_twice_overwrites_the_record() {
        let store = InMemoryCharacterStore::new();
        store.save(&record(1, "Rick")).await.expect("save succeeds");
        store
            .save(&record(1, "Rick Sanchez"))
            .await
            .expect("save succeeds");

        let loaded = store.get(1).await.expect("get succeeds");
        assert_eq!(
            loaded.map(|r| r.name),
            Some("Rick Sanchez".to_string())
        );
        assert_eq!(store.len().await, 1);
    }
}
