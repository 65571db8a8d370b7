// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Shared utilities for search modules.
//!
//! Query tokenizing and per-variant score merging, used by both the expander
//! and the delegated matcher.

use crate::util::normalize::normalize;
use std::collections::HashMap;

/// Parse a query string into normalized, whitespace-separated terms.
///
/// # Example
///
/// ```ignore
/// let terms = parse_query("Доктор  ZЛО!");
/// assert_eq!(terms, vec!["доктор", "zло"]);
/// ```
pub fn parse_query(query: &str) -> Vec<String> {
    normalize(query)
        .split(' ')
        .filter(|p| !p.is_empty())
        .map(|s| s.to_string())
        .collect()
}

/// Merge per-variant score sets with OR semantics.
///
/// A record matching any variant is kept, with the best (lowest) score it got
/// from any of them.
///
/// # Arguments
///
/// * `score_sets` - One `Vec<(record_position, score)>` per query variant
pub fn merge_best(score_sets: &[Vec<(usize, f64)>]) -> HashMap<usize, f64> {
    let capacity = score_sets.iter().map(Vec::len).max().unwrap_or(0);
    let mut best: HashMap<usize, f64> = HashMap::with_capacity(capacity);

    for score_set in score_sets {
        for &(position, score) in score_set {
            best.entry(position)
                .and_modify(|s| *s = s.min(score))
                .or_insert(score);
        }
    }

    best
}
