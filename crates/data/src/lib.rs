//! Portaldex data layer
//!
//! Sits between the remote character API and application logic. Wire
//! payloads are decoded into [`remote::responses`] DTOs, flattened into
//! [`local::records`] for persistence, and rehydrated into domain
//! [`Character`](portaldex_domain::Character) values on the way out.
//!
//! The mappings are tolerant end to end: URL-embedded identifiers that
//! fail to parse become the [`UNKNOWN_ID`](portaldex_domain::UNKNOWN_ID)
//! sentinel, and stored enum strings that match no variant rehydrate as
//! `Unknown` rather than failing the read.

pub mod error;
pub mod local;
pub mod mapping;
pub mod ports;
pub mod remote;
pub mod repository;

pub use error::DataError;
pub use ports::{CharacterSource, CharacterStore};
pub use repository::CharacterRepository;
