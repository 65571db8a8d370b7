// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Built-in two-tier matcher. No dependencies, always available.
//!
//! ```text
//! for each record:
//!     any variant ⊂ blob                      → 0.1  (substring tier)
//!     any blob token ≈ any variant            → 0.4  (token tier)
//!     otherwise                               → dropped
//! ```
//!
//! The substring tier is checked against every variant before any token
//! comparison runs, so a literal hit on the last variant still beats a fuzzy
//! hit on the first. Ties keep index order. A record id reported more than
//! once in the index is scored only at its first occurrence.

use std::collections::HashSet;

use super::expand::{expand_variants, QueryVariants};
use crate::fuzzy::approx_token_match;
use crate::scoring::ranking::rank;
use crate::scoring::{EMPTY_QUERY_SCORE, NO_MATCH_SCORE, SUBSTRING_TIER_SCORE, TOKEN_TIER_SCORE};
use crate::types::{MatchResult, SearchIndex, SearchableRecord};
use crate::vocab::Vocabulary;

/// Expand `query` and score the whole index with the built-in matcher.
pub fn search_builtin(index: &SearchIndex, query: &str, vocab: &Vocabulary) -> Vec<MatchResult> {
    score_variants(index, &expand_variants(query, vocab))
}

/// Score an index against an already expanded variant set.
///
/// Empty variant set ⇒ every record with score `0.0`.
pub fn score_variants(index: &SearchIndex, variants: &QueryVariants) -> Vec<MatchResult> {
    if variants.is_empty() {
        return match_all(index);
    }

    let mut results: Vec<MatchResult> = first_occurrences(index)
        .filter_map(|record| {
            let score = score_record(record, variants);
            (score < NO_MATCH_SCORE).then(|| MatchResult {
                id: record.id.clone(),
                score,
            })
        })
        .collect();

    rank(&mut results);
    results
}

/// Tier of a single record: 0.1, 0.4, or 1.0 for no match.
pub fn score_record(record: &SearchableRecord, variants: &QueryVariants) -> f64 {
    let blob = record.search_blob.as_str();

    if variants.iter().any(|variant| blob.contains(variant)) {
        return SUBSTRING_TIER_SCORE;
    }

    let token_hit = variants
        .iter()
        .any(|variant| blob.split_whitespace().any(|token| approx_token_match(token, variant)));
    if token_hit {
        return TOKEN_TIER_SCORE;
    }

    NO_MATCH_SCORE
}

pub(crate) fn match_all(index: &SearchIndex) -> Vec<MatchResult> {
    first_occurrences(index)
        .map(|record| MatchResult {
            id: record.id.clone(),
            score: EMPTY_QUERY_SCORE,
        })
        .collect()
}

/// Records in index order, skipping any whose id was already seen.
fn first_occurrences(index: &SearchIndex) -> impl Iterator<Item = &SearchableRecord> {
    let mut seen: HashSet<&str> = HashSet::new();
    index
        .records
        .iter()
        .filter(move |record| seen.insert(record.id.as_str()))
}
