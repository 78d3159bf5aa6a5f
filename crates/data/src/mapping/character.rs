//! Character mappings: wire response to storage record, storage record
//! to domain entity
//!
//! The wire-to-storage direction flattens nested references into scalar
//! columns and keeps the full location as a transient preview alongside
//! the record. The storage-to-domain direction rehydrates enum strings
//! tolerantly and substitutes an empty preview when none was carried.

use portaldex_domain::{Character, CharacterGender, CharacterStatus, LocationPreview};

use crate::local::records::{CharacterRecord, HydratedCharacterRecord};
use crate::mapping::parse_trailing_id;
use crate::remote::responses::CharacterResponse;

impl From<CharacterResponse> for HydratedCharacterRecord {
    /// Flatten a wire response into its storable record, carrying the
    /// location along as a transient preview.
    fn from(response: CharacterResponse) -> Self {
        let location = LocationPreview {
            id: parse_trailing_id(&response.location.url),
            name: response.location.name,
            r#type: None,
            dimension: None,
        };

        let record = CharacterRecord {
            id: response.id,
            name: response.name,
            status: response.status,
            species: response.species,
            r#type: response.r#type,
            gender: response.gender,
            origin_name: response.origin.name,
            origin_id: parse_trailing_id(&response.origin.url),
            image: response.image,
            created: response.created,
        };

        Self {
            record,
            location: Some(location),
        }
    }
}

impl From<&HydratedCharacterRecord> for Character {
    /// Rehydrate a stored record into the domain entity.
    ///
    /// Enum strings map by exact variant name with `Unknown` as the
    /// fallback; a missing location preview becomes the empty preview.
    fn from(hydrated: &HydratedCharacterRecord) -> Self {
        let record = &hydrated.record;

        Self {
            id: record.id,
            name: record.name.clone(),
            status: CharacterStatus::from_name(&record.status),
            species: record.species.clone(),
            r#type: record.r#type.clone(),
            gender: CharacterGender::from_name(&record.gender),
            origin: (record.origin_name.clone(), record.origin_id),
            location: hydrated
                .location
                .clone()
                .unwrap_or_else(LocationPreview::empty),
            avatar_url: record.image.clone(),
        }
    }
}

impl From<HydratedCharacterRecord> for Character {
    fn from(hydrated: HydratedCharacterRecord) -> Self {
        Self::from(&hydrated)
    }
}

impl From<CharacterRecord> for Character {
    /// Convenience for the reload path: a bare record maps as if it had
    /// been rehydrated without a preview.
    fn from(record: CharacterRecord) -> Self {
        Self::from(HydratedCharacterRecord::from(record))
    }
}

#[cfg(test)]
mod tests {
    use portaldex_domain::UNKNOWN_ID;

    use super::*;
    use crate::remote::responses::ResourceRef;

    fn rick_response() -> CharacterResponse {
        CharacterResponse {
            id: 1,
            name: "Rick Sanchez".into(),
            status: "Alive".into(),
            species: "Human".into(),
            r#type: "".into(),
            gender: "Male".into(),
            origin: ResourceRef {
                name: "Earth (C-137)".into(),
                url: "https://api.portaldex.io/api/location/1".into(),
            },
            location: ResourceRef {
                name: "Citadel of Ricks".into(),
                url: "https://api.portaldex.io/api/location/20".into(),
            },
            image: "https://api.portaldex.io/api/character/avatar/1.jpeg".into(),
            created: "2017-11-04T18:48:46.250Z".into(),
        }
    }

    #[test]
    fn wire_response_flattens_into_record_and_preview() {
        let hydrated = HydratedCharacterRecord::from(rick_response());

        assert_eq!(hydrated.record.id, 1);
        assert_eq!(hydrated.record.name, "Rick Sanchez");
        assert_eq!(hydrated.record.status, "Alive");
        assert_eq!(hydrated.record.origin_name, "Earth (C-137)");
        assert_eq!(hydrated.record.origin_id, 1);
        assert_eq!(hydrated.record.created, "2017-11-04T18:48:46.250Z");

        let location = hydrated.location.expect("preview carried along");
        assert_eq!(location.id, 20);
        assert_eq!(location.name, "Citadel of Ricks");
        assert_eq!(location.r#type, None);
        assert_eq!(location.dimension, None);
    }

    #[test]
    fn empty_origin_url_flattens_to_sentinel_id() {
        let mut response = rick_response();
        response.origin = ResourceRef {
            name: "".into(),
            url: "".into(),
        };

        let hydrated = HydratedCharacterRecord::from(response);
        assert_eq!(hydrated.record.origin_name, "");
        assert_eq!(hydrated.record.origin_id, UNKNOWN_ID);

        let character = Character::from(&hydrated);
        assert_eq!(character.origin, (String::new(), UNKNOWN_ID));
    }

    #[test]
    fn freshly_mapped_record_keeps_its_location_in_the_domain() {
        let character = Character::from(HydratedCharacterRecord::from(rick_response()));

        assert_eq!(character.id, 1);
        assert_eq!(character.name, "Rick Sanchez");
        assert_eq!(character.status, CharacterStatus::Alive);
        assert_eq!(character.species, "Human");
        assert_eq!(character.r#type, "");
        assert_eq!(character.gender, CharacterGender::Male);
        assert_eq!(character.origin, ("Earth (C-137)".to_string(), 1));
        assert_eq!(character.location.id, 20);
        assert_eq!(character.location.name, "Citadel of Ricks");
        assert_eq!(
            character.avatar_url,
            "https://api.portaldex.io/api/character/avatar/1.jpeg"
        );
    }

    #[test]
    fn reloaded_record_maps_to_empty_location() {
        let stored = HydratedCharacterRecord::from(rick_response()).record;

        let character = Character::from(stored);
        assert_eq!(character.location, LocationPreview::empty());
        assert_eq!(character.location.id, UNKNOWN_ID);
        // The flattened origin survives the round trip regardless.
        assert_eq!(character.origin, ("Earth (C-137)".to_string(), 1));
    }

    #[test]
    fn unrecognized_enum_strings_rehydrate_as_unknown() {
        let mut response = rick_response();
        response.status = "Mutated".into();
        response.gender = "Cronenberg".into();

        let hydrated = HydratedCharacterRecord::from(response);
        // Storage keeps the strings verbatim.
        assert_eq!(hydrated.record.status, "Mutated");
        assert_eq!(hydrated.record.gender, "Cronenberg");

        let character = Character::from(&hydrated);
        assert_eq!(character.status, CharacterStatus::Unknown);
        assert_eq!(character.gender, CharacterGender::Unknown);
    }

    #[test]
    fn mapping_the_same_record_twice_is_idempotent() {
        let hydrated = HydratedCharacterRecord::from(rick_response());

        let first = Character::from(&hydrated);
        let second = Character::from(&hydrated);
        assert_eq!(first, second);
    }

    #[test]
    fn type_field_passes_through_verbatim() {
        let mut response = rick_response();
        response.r#type = "Superhuman (Ghost trains summoner)".into();

        let character = Character::from(HydratedCharacterRecord::from(response));
        assert_eq!(character.r#type, "Superhuman (Ghost trains summoner)");
    }
}
