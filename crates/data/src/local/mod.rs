//! Local side of the data layer: storage records and the in-memory store.

pub mod memory;
pub mod records;

pub use memory::InMemoryCharacterStore;
