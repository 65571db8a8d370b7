// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Delegated matcher: weighted multi-field fuzzy scoring on top of `strsim`.
//!
//! Each field is scored on its own as `1 - similarity`, where similarity is
//! `1.0` for a substring hit and otherwise the best normalized
//! Damerau-Levenshtein similarity between the variant and any run of field
//! tokens as long as the variant (or the whole field). Fields under the
//! threshold combine multiplicatively, each raised to its share of the total
//! weight:
//!
//! ```text
//! score = Π  max(field_score, ε) ^ (weight / Σ weights)     over matching fields
//! ```
//!
//! A name hit therefore pulls the score down much harder than a description
//! hit, and a record matching in several fields beats one matching in a single
//! field. Scores from different variants merge by keeping the best per record.

use super::builtin::match_all;
use super::expand::QueryVariants;
use super::utils::merge_best;
use crate::error::MatchError;
use crate::scoring::ranking::rank;
use crate::scoring::{FieldWeights, FIELD_SCORE_EPSILON};
use crate::types::{FieldKind, MatchResult, SearchIndex, SearchableRecord};
use std::collections::HashSet;
use strsim::normalized_damerau_levenshtein;

/// Fields the delegated matcher scores individually, besides the blob.
const SCORED_FIELDS: [FieldKind; 5] = [
    FieldKind::Name,
    FieldKind::Occupation,
    FieldKind::Category,
    FieldKind::Tags,
    FieldKind::Description,
];

#[derive(Debug, Clone, PartialEq)]
pub struct DelegatedMatcher {
    weights: FieldWeights,
    threshold: f64,
}

impl DelegatedMatcher {
    pub fn new(weights: FieldWeights, threshold: f64) -> Self {
        Self { weights, threshold }
    }

    pub fn weights(&self) -> &FieldWeights {
        &self.weights
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Score an index against a variant set.
    ///
    /// Fails on indexes with duplicate ids, which would make the per-record
    /// merge ambiguous.
    pub fn search(
        &self,
        index: &SearchIndex,
        variants: &QueryVariants,
    ) -> Result<Vec<MatchResult>, MatchError> {
        check_unique_ids(index)?;

        if variants.is_empty() {
            return Ok(match_all(index));
        }

        let score_sets: Vec<Vec<(usize, f64)>> = variants
            .iter()
            .map(|variant| {
                index
                    .records
                    .iter()
                    .enumerate()
                    .filter_map(|(position, record)| {
                        self.score_record(record, variant).map(|score| (position, score))
                    })
                    .collect()
            })
            .collect();

        let mut best: Vec<(usize, f64)> = merge_best(&score_sets).into_iter().collect();
        best.sort_by_key(|(position, _)| *position);

        let mut results: Vec<MatchResult> = best
            .into_iter()
            .map(|(position, score)| MatchResult {
                id: index.records[position].id.clone(),
                score,
            })
            .collect();

        rank(&mut results);
        Ok(results)
    }

    /// Weighted score of one record for one variant, `None` if no field matched.
    pub fn score_record(&self, record: &SearchableRecord, variant: &str) -> Option<f64> {
        let total = self.weights.total();
        if total <= 0.0 || variant.is_empty() {
            return None;
        }

        let sources = SCORED_FIELDS
            .iter()
            .map(|kind| (record.fields.get(*kind), self.weights.of(*kind)))
            .chain(std::iter::once((record.search_blob.as_str(), self.weights.blob)));

        let mut score = 1.0;
        let mut matched = false;
        for (text, weight) in sources {
            if weight <= 0.0 || text.is_empty() {
                continue;
            }
            let field_score = 1.0 - field_similarity(text, variant);
            if field_score <= self.threshold {
                matched = true;
                score *= field_score.max(FIELD_SCORE_EPSILON).powf(weight / total);
            }
        }

        matched.then_some(score)
    }
}

/// Similarity in `[0, 1]` between a normalized field and a normalized variant.
pub fn field_similarity(text: &str, variant: &str) -> f64 {
    if text.contains(variant) {
        return 1.0;
    }

    let mut best = normalized_damerau_levenshtein(text, variant);

    let width = variant.split(' ').count();
    let tokens: Vec<&str> = text.split(' ').collect();
    if tokens.len() > width {
        for window in tokens.windows(width) {
            let candidate = window.join(" ");
            best = best.max(normalized_damerau_levenshtein(&candidate, variant));
        }
    }

    best
}

fn check_unique_ids(index: &SearchIndex) -> Result<(), MatchError> {
    let mut seen = HashSet::with_capacity(index.len());
    for record in &index.records {
        if !seen.insert(record.id.as_str()) {
            return Err(MatchError::DuplicateId(record.id.clone()));
        }
    }
    Ok(())
}
