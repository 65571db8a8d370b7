// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how search results get sorted.
//!
//! Ascending by score, and nothing else. Ties keep index order, which is the
//! order the catalog delivered the characters in; the sort must therefore be
//! stable.

use crate::types::MatchResult;
use std::cmp::Ordering;

/// Compare two results by score (lower first).
///
/// NaN never comes out of either matcher; if one did, it would compare equal
/// and keep its index position instead of poisoning the sort.
pub fn compare_results(a: &MatchResult, b: &MatchResult) -> Ordering {
    a.score.partial_cmp(&b.score).unwrap_or(Ordering::Equal)
}

/// Stable sort, best first.
pub fn rank(results: &mut [MatchResult]) {
    results.sort_by(compare_results);
}
