// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Index construction: project raw characters into searchable records.
//!
//! There is no incremental update. Catalogs are a few thousand records at
//! most, so the whole index is rebuilt whenever the character list changes
//! (see [`crate::search::cache::IndexCache`] to skip rebuilds for unchanged lists).
//!
//! # Blob layout
//!
//! ```text
//! name ␠ occupation ␠ description ␠ tags ␠ category ␠ gender ␠ age_group
//! ```
//!
//! Absent fields contribute an empty string; normalization collapses the
//! resulting double spaces.

use crate::types::{Character, FieldValue, RecordFields, SearchIndex, SearchableRecord};
use crate::util::normalize::{normalize, normalize_opt};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Build a search index, one record per character, in input order.
pub fn build_index(characters: &[Character]) -> SearchIndex {
    #[cfg(feature = "parallel")]
    let records: Vec<SearchableRecord> = characters.par_iter().map(project).collect();

    #[cfg(not(feature = "parallel"))]
    let records: Vec<SearchableRecord> = characters.iter().map(project).collect();

    tracing::debug!(records = records.len(), "built search index");
    SearchIndex { records }
}

/// Project one character. Pure: same character, same record.
pub fn project(character: &Character) -> SearchableRecord {
    let tags = character.tags.as_ref().map(FieldValue::joined).unwrap_or_default();
    let category = character
        .category
        .as_ref()
        .map(FieldValue::joined)
        .unwrap_or_default();

    let raw_parts = [
        character.name.as_deref().unwrap_or(""),
        character.occupation.as_deref().unwrap_or(""),
        character.description.as_deref().unwrap_or(""),
        tags.as_str(),
        category.as_str(),
        character.gender.as_deref().unwrap_or(""),
        character.age_group.as_deref().unwrap_or(""),
    ];

    let fields = RecordFields {
        name: normalize_opt(character.name.as_deref()),
        occupation: normalize_opt(character.occupation.as_deref()),
        description: normalize_opt(character.description.as_deref()),
        tags: normalize(&tags),
        category: normalize(&category),
        gender: normalize_opt(character.gender.as_deref()),
        age_group: normalize_opt(character.age_group.as_deref()),
    };

    SearchableRecord {
        id: character.id.clone(),
        fields,
        search_blob: normalize(&raw_parts.join(" ")),
    }
}
