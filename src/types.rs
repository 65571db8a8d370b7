// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a character search index.
//!
//! Input records come straight from the catalog's record store export, so
//! every text field is optional and list-like fields may arrive either as a
//! JSON array or as a single string. Everything downstream of [`Character`]
//! is normalized and immutable.
//!
//! | Type               | Role                                              |
//! |--------------------|---------------------------------------------------|
//! | `Character`        | Raw catalog record (input)                        |
//! | `FieldValue`       | Tags/category: list or plain string               |
//! | `SearchableRecord` | Normalized projection with a precomputed blob     |
//! | `SearchIndex`      | One record per character, input order             |
//! | `MatchResult`      | `(id, score)`, lower score is better              |
//! | `Review`           | Flat comment record with an optional parent link  |
//! | `ThreadNode`       | Top-level review with its flattened replies       |
//!
//! # Invariants
//!
//! - **SearchableRecord**: `search_blob` is a pure function of the text fields.
//! - **SearchIndex**: `records[i]` is the projection of the i-th input character.
//! - **MatchResult**: `id` names a record present in the index that produced it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// INPUT RECORDS
// =============================================================================

/// A tag or category value as stored by the record store.
///
/// Older records keep a single comma-free string, newer ones a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    List(Vec<String>),
    Text(String),
}

impl FieldValue {
    /// Flatten to a single space-joined string.
    pub fn joined(&self) -> String {
        match self {
            FieldValue::List(items) => items.join(" "),
            FieldValue::Text(text) => text.clone(),
        }
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(items: Vec<String>) -> Self {
        FieldValue::List(items)
    }
}

impl From<&str> for FieldValue {
    fn from(text: &str) -> Self {
        FieldValue::Text(text.to_string())
    }
}

/// A catalog character, as fetched from the record store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub occupation: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Option<FieldValue>,
    #[serde(default)]
    pub category: Option<FieldValue>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub age_group: Option<String>,
}

// =============================================================================
// INDEX
// =============================================================================

/// Which text source a field came from.
///
/// Order matches the concatenation order of the search blob.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldKind {
    Name,
    Occupation,
    Description,
    Tags,
    Category,
    Gender,
    AgeGroup,
}

impl FieldKind {
    /// All fields in blob order.
    pub const ALL: [FieldKind; 7] = [
        FieldKind::Name,
        FieldKind::Occupation,
        FieldKind::Description,
        FieldKind::Tags,
        FieldKind::Category,
        FieldKind::Gender,
        FieldKind::AgeGroup,
    ];
}

/// Normalized text fields of one record, in blob order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordFields {
    pub name: String,
    pub occupation: String,
    pub description: String,
    pub tags: String,
    pub category: String,
    pub gender: String,
    pub age_group: String,
}

impl RecordFields {
    pub fn get(&self, kind: FieldKind) -> &str {
        match kind {
            FieldKind::Name => &self.name,
            FieldKind::Occupation => &self.occupation,
            FieldKind::Description => &self.description,
            FieldKind::Tags => &self.tags,
            FieldKind::Category => &self.category,
            FieldKind::Gender => &self.gender,
            FieldKind::AgeGroup => &self.age_group,
        }
    }
}

/// Immutable search projection of a [`Character`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchableRecord {
    pub id: String,
    pub fields: RecordFields,
    pub search_blob: String,
}

/// All records of one catalog snapshot, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchIndex {
    pub records: Vec<SearchableRecord>,
}

impl SearchIndex {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look up a record by id (linear; indexes are small).
    pub fn get(&self, id: &str) -> Option<&SearchableRecord> {
        self.records.iter().find(|r| r.id == id)
    }
}

/// One ranked hit. Lower score is better; `0.0` is the best possible.
///
/// Scores are only meaningful relative to other results from the same
/// engine instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub id: String,
    pub score: f64,
}

// =============================================================================
// REVIEWS
// =============================================================================

/// A review or comment. Replies point at their parent via `parent_review`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub parent_review: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub rating: Option<u8>,
}

/// A top-level review with every reply in its thread, flattened.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThreadNode {
    pub review: Review,
    pub replies: Vec<Review>,
}
