//! Domain entities - core objects consumed by application logic

mod character;

pub use character::{Character, CharacterGender, CharacterStatus};
