//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::types::{Character, Review};
use crate::util::translit::TranslitTable;
use crate::vocab::{SynonymTable, Vocabulary};
use chrono::{DateTime, TimeZone, Utc};

/// Create a character with just an id and a name.
pub fn make_character(id: &str, name: &str) -> Character {
    Character {
        id: id.to_string(),
        name: Some(name.to_string()),
        ..Default::default()
    }
}

/// Create a character with name, occupation and tags.
pub fn make_character_with(id: &str, name: &str, occupation: &str, tags: &[&str]) -> Character {
    Character {
        id: id.to_string(),
        name: Some(name.to_string()),
        occupation: Some(occupation.to_string()),
        tags: Some(tags.iter().map(|t| t.to_string()).collect::<Vec<_>>().into()),
        ..Default::default()
    }
}

/// Fixed base time for reviews: 2024-01-01T00:00:00Z.
pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

/// Create a review `minutes` after [`base_time`].
pub fn make_review(id: &str, minutes: i64, parent: Option<&str>) -> Review {
    Review {
        id: id.to_string(),
        created_at: base_time() + chrono::Duration::minutes(minutes),
        parent_review: parent.map(str::to_string),
        author: None,
        text: None,
        rating: None,
    }
}

/// A small, fixed vocabulary for tests, independent of the built-in tables.
pub fn fixture_vocabulary() -> Vocabulary {
    let entries: [(&str, &[&str]); 3] = [
        ("хирург", &["доктор", "медик", "врач", "surgeon"]),
        ("наёмник", &["mercenary", "солдат удачи"]),
        ("киллер", &["убийца", "assassin"]),
    ];

    let mut synonyms = SynonymTable::new();
    for (term, alternates) in entries {
        if let Err(err) = synonyms.add(term, alternates.iter()) {
            panic!("fixture vocabulary is invalid: {}", err);
        }
    }

    Vocabulary::new(synonyms, TranslitTable::default())
}
