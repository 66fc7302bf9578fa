//! Album records and the id rules that keep local inserts clear of seeded ids.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Highest id the remote resource seeds. Ids above it only exist locally.
pub const SEED_ID_CEILING: u64 = 100;

/// Local ids always start above this, whatever the collection holds.
pub const LOCAL_ID_FLOOR: u64 = 100;

/// One album record as exchanged with the REST resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Album {
    #[serde(rename = "userId")]
    pub user_id: u64,
    pub id: u64,
    pub title: String,
}

impl Album {
    #[must_use]
    pub fn new(id: u64, user_id: u64, title: impl Into<String>) -> Self {
        Self {
            user_id,
            id,
            title: title.into(),
        }
    }

    /// Whether the record came from the remote seed data rather than a local insert.
    #[must_use]
    pub fn is_seeded(&self) -> bool {
        is_seeded_id(self.id)
    }
}

/// POST body: an album that has not been given an id yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlbumDraft {
    #[serde(rename = "userId")]
    pub user_id: u64,
    pub title: String,
}

#[must_use]
pub fn is_seeded_id(id: u64) -> bool {
    id <= SEED_ID_CEILING
}

/// Id the next local insert receives: one past the largest id present,
/// clamped so it never lands in the seeded range.
#[must_use]
pub fn next_local_id(records: &[Album]) -> u64 {
    records
        .iter()
        .map(|album| album.id)
        .max()
        .unwrap_or(0)
        .max(LOCAL_ID_FLOOR)
        .saturating_add(1)
}

/// Reject non-positive owner ids coming in from the UI layer.
pub fn validate_owner_id(owner_id: i64) -> Result<u64, ValidationError> {
    u64::try_from(owner_id)
        .ok()
        .filter(|value| *value > 0)
        .ok_or(ValidationError::NonPositiveOwnerId(owner_id))
}

pub fn validate_title(title: &str) -> Result<(), ValidationError> {
    if title.trim().is_empty() {
        return Err(ValidationError::BlankTitle);
    }
    Ok(())
}

pub fn validate_id(id: u64) -> Result<(), ValidationError> {
    if id == 0 {
        return Err(ValidationError::NonPositiveId);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[test]
    fn album_json_uses_remote_field_names() {
        let album = Album::new(7, 3, "quidem molestiae enim");
        let json = serde_json::to_value(&album).expect("serialize album");
        assert_eq!(json["userId"], 3);
        assert_eq!(json["id"], 7);
        assert_eq!(json["title"], "quidem molestiae enim");

        let parsed: Album =
            serde_json::from_str(r#"{"userId":1,"id":2,"title":"sunt qui"}"#).expect("parse");
        assert_eq!(parsed, Album::new(2, 1, "sunt qui"));
    }

    #[test]
    fn draft_serializes_without_id() {
        let draft = AlbumDraft {
            user_id: 4,
            title: "new".to_string(),
        };
        let json = serde_json::to_value(&draft).expect("serialize draft");
        assert!(json.get("id").is_none());
        assert_eq!(json["userId"], 4);
    }

    #[test]
    fn next_local_id_starts_past_floor_for_empty_collection() {
        assert_eq!(next_local_id(&[]), 101);
    }

    #[test]
    fn next_local_id_skips_seeded_range() {
        assert_eq!(next_local_id(&[Album::new(1, 1, "A")]), 101);
        assert_eq!(next_local_id(&[Album::new(100, 1, "A")]), 101);
        assert!(!Album::new(next_local_id(&[Album::new(7, 1, "A")]), 1, "B").is_seeded());
    }

    #[test]
    fn next_local_id_uses_max_not_last() {
        let records = vec![
            Album::new(140, 1, "a"),
            Album::new(3, 1, "b"),
            Album::new(12, 1, "c"),
        ];
        assert_eq!(next_local_id(&records), 141);
    }

    #[rstest]
    #[case(0)]
    #[case(-1)]
    #[case(i64::MIN)]
    fn validate_owner_id_rejects_non_positive(#[case] owner_id: i64) {
        assert_eq!(
            validate_owner_id(owner_id),
            Err(ValidationError::NonPositiveOwnerId(owner_id))
        );
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("\t\n")]
    fn validate_title_rejects_blank(#[case] title: &str) {
        assert_eq!(validate_title(title), Err(ValidationError::BlankTitle));
    }

    #[test]
    fn seeded_boundary_is_inclusive() {
        assert!(is_seeded_id(100));
        assert!(!is_seeded_id(101));
    }

    proptest! {
        #[test]
        fn next_local_id_exceeds_every_existing_id(ids in proptest::collection::vec(1u64..10_000, 1..40)) {
            let records: Vec<Album> = ids.iter().map(|id| Album::new(*id, 1, "t")).collect();
            let next = next_local_id(&records);
            let max = ids.iter().copied().max().unwrap_or(0);
            prop_assert_eq!(next, max.max(LOCAL_ID_FLOOR) + 1);
            prop_assert!(!is_seeded_id(next));
            prop_assert!(records.iter().all(|album| album.id < next));
        }
    }
}
