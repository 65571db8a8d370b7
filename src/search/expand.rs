// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query expansion: everything the user might have meant.
//!
//! ```text
//! "врач" ─┬─ "врач"                      literal (always first)
//!         ├─ "хирург", "доктор", ...     synonyms, per token, both directions
//!         ├─ "vrach"                     Ru → En
//!         └─ "врач"                      En → Ru (duplicate, dropped)
//! ```
//!
//! Multi-word table entries ("солдат удачи") are also looked up against the
//! whole query, not just its tokens.

use super::utils::parse_query;
use crate::util::normalize::normalize;
use crate::util::translit::{translit_en_to_ru, translit_ru_to_en};
use crate::vocab::Vocabulary;
use std::collections::HashSet;

/// Ordered, deduplicated, non-empty normalized query variants.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryVariants {
    variants: Vec<String>,
}

impl QueryVariants {
    /// Build from pre-normalized strings (empties and duplicates dropped).
    pub fn from_normalized<I, S>(variants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Self::default();
        let mut seen = HashSet::new();
        for variant in variants {
            set.push(variant.into(), &mut seen);
        }
        set
    }

    fn push(&mut self, variant: String, seen: &mut HashSet<String>) {
        if !variant.is_empty() && seen.insert(variant.clone()) {
            self.variants.push(variant);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    pub fn len(&self) -> usize {
        self.variants.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.variants.iter().map(String::as_str)
    }

    pub fn contains(&self, variant: &str) -> bool {
        self.iter().any(|v| v == variant)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.variants
    }
}

/// Expand a raw query into its variant set.
///
/// Empty after normalization (blank, punctuation, emoji) ⇒ empty set; callers
/// decide what an empty set means. Both matchers treat it as match-all.
pub fn expand_variants(query: &str, vocab: &Vocabulary) -> QueryVariants {
    let normalized = normalize(query);
    if normalized.is_empty() {
        return QueryVariants::default();
    }

    let mut variants = QueryVariants::default();
    let mut seen = HashSet::new();
    variants.push(normalized.clone(), &mut seen);

    let tokens = parse_query(&normalized);
    for token in &tokens {
        for synonym in vocab.synonyms.synonyms_of(token) {
            variants.push(normalize(synonym), &mut seen);
        }
    }
    if tokens.len() > 1 {
        for synonym in vocab.synonyms.synonyms_of(&normalized) {
            variants.push(normalize(synonym), &mut seen);
        }
    }

    variants.push(
        normalize(&translit_ru_to_en(&normalized, &vocab.translit)),
        &mut seen,
    );
    variants.push(
        normalize(&translit_en_to_ru(&normalized, &vocab.translit)),
        &mut seen,
    );

    variants
}
