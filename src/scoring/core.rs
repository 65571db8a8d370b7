// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Score constants and field weights.
//!
//! # Key Invariant: Substring Supremacy
//!
//! ```text
//! EMPTY_QUERY_SCORE < SUBSTRING_TIER_SCORE < TOKEN_TIER_SCORE < NO_MATCH_SCORE
//!       0.0                  0.1                   0.4               1.0
//! ```
//!
//! A record whose blob literally contains a query variant always outranks a
//! record that only matched approximately.

use crate::types::FieldKind;
use serde::{Deserialize, Serialize};

// =============================================================================
// BUILT-IN TIERS
// =============================================================================

/// Score of every record when the query is empty (match-all).
pub const EMPTY_QUERY_SCORE: f64 = 0.0;

/// Blob contains a variant verbatim.
pub const SUBSTRING_TIER_SCORE: f64 = 0.1;

/// Some blob token approximately matches a variant.
pub const TOKEN_TIER_SCORE: f64 = 0.4;

/// Starting score; records still at this value are not returned.
pub const NO_MATCH_SCORE: f64 = 1.0;

// =============================================================================
// DELEGATED WEIGHTS
// =============================================================================

/// Default acceptance threshold for a delegated field score (`1 - similarity`).
pub const DEFAULT_FIELD_THRESHOLD: f64 = 0.4;

/// Floor for a perfect field score, so exact hits still multiply meaningfully.
pub const FIELD_SCORE_EPSILON: f64 = 0.001;

/// Relative importance of each text source in the delegated matcher.
///
/// Name > category ≈ occupation > tags > description > whole blob.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldWeights {
    pub name: f64,
    pub occupation: f64,
    pub category: f64,
    pub tags: f64,
    pub description: f64,
    pub blob: f64,
}

impl Default for FieldWeights {
    fn default() -> Self {
        Self {
            name: 3.0,
            occupation: 2.0,
            category: 2.0,
            tags: 1.5,
            description: 1.0,
            blob: 0.5,
        }
    }
}

impl FieldWeights {
    /// Weight of a record field. Gender and age-group are only searched
    /// through the blob.
    pub fn of(&self, kind: FieldKind) -> f64 {
        match kind {
            FieldKind::Name => self.name,
            FieldKind::Occupation => self.occupation,
            FieldKind::Category => self.category,
            FieldKind::Tags => self.tags,
            FieldKind::Description => self.description,
            FieldKind::Gender | FieldKind::AgeGroup => 0.0,
        }
    }

    /// Sum of all weights, including the blob.
    pub fn total(&self) -> f64 {
        self.name + self.occupation + self.category + self.tags + self.description + self.blob
    }
}
