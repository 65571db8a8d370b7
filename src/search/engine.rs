// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The search engine: vocabulary + one matcher strategy.
//!
//! The strategy is picked once, when the engine is built. If the crate was
//! compiled with the `delegated` feature (and the caller did not ask for the
//! built-in matcher), queries go to [`DelegatedMatcher`]; otherwise to the
//! built-in two-tier matcher. Nothing is re-probed per query.
//!
//! When the delegated matcher rejects a call, the engine logs a warning and
//! answers that one query with the built-in matcher.

use super::builtin::score_variants;
use super::expand::{expand_variants, QueryVariants};
use crate::scoring::{FieldWeights, DEFAULT_FIELD_THRESHOLD};
use crate::types::{MatchResult, SearchIndex, SearchableRecord};
use crate::vocab::Vocabulary;
use std::collections::HashMap;
use std::sync::Arc;

#[cfg(feature = "delegated")]
use super::delegated::DelegatedMatcher;

/// Construction-time knobs.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineOptions {
    /// Use the built-in matcher even when the delegated one is available.
    pub prefer_builtin: bool,
    /// Field weights for the delegated matcher.
    pub weights: FieldWeights,
    /// Maximum accepted delegated field score (`1 - similarity`).
    pub threshold: f64,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            prefer_builtin: false,
            weights: FieldWeights::default(),
            threshold: DEFAULT_FIELD_THRESHOLD,
        }
    }
}

impl EngineOptions {
    pub fn builtin() -> Self {
        Self {
            prefer_builtin: true,
            ..Self::default()
        }
    }
}

/// Which matcher an engine runs.
#[derive(Debug, Clone, PartialEq)]
pub enum Strategy {
    BuiltIn,
    #[cfg(feature = "delegated")]
    Delegated(DelegatedMatcher),
}

impl Strategy {
    /// Capability probe: the delegated matcher if it was compiled in and wanted.
    pub fn probe(options: &EngineOptions) -> Self {
        #[cfg(feature = "delegated")]
        {
            if !options.prefer_builtin {
                return Strategy::Delegated(DelegatedMatcher::new(
                    options.weights,
                    options.threshold,
                ));
            }
        }

        #[cfg(not(feature = "delegated"))]
        let _ = options;

        Strategy::BuiltIn
    }

    pub fn name(&self) -> &'static str {
        match self {
            Strategy::BuiltIn => "built-in",
            #[cfg(feature = "delegated")]
            Strategy::Delegated(_) => "delegated",
        }
    }
}

/// Stateless search over any [`SearchIndex`]. Cheap to clone, safe to share.
#[derive(Debug, Clone)]
pub struct SearchEngine {
    vocabulary: Arc<Vocabulary>,
    strategy: Strategy,
}

impl SearchEngine {
    pub fn new(vocabulary: impl Into<Arc<Vocabulary>>, options: EngineOptions) -> Self {
        let strategy = Strategy::probe(&options);
        tracing::debug!(strategy = strategy.name(), "search engine ready");
        Self {
            vocabulary: vocabulary.into(),
            strategy,
        }
    }

    /// Engine that always uses the built-in matcher.
    pub fn builtin(vocabulary: impl Into<Arc<Vocabulary>>) -> Self {
        Self::new(vocabulary, EngineOptions::builtin())
    }

    pub fn strategy(&self) -> &Strategy {
        &self.strategy
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// The variant set a query expands to under this engine's vocabulary.
    pub fn variants(&self, query: &str) -> QueryVariants {
        expand_variants(query, &self.vocabulary)
    }

    /// Rank the index against `query`, best first.
    ///
    /// Empty or symbol-only queries match every record with score `0.0`.
    /// An index with no matching record yields an empty list.
    pub fn search(&self, index: &SearchIndex, query: &str) -> Vec<MatchResult> {
        let variants = self.variants(query);

        match &self.strategy {
            Strategy::BuiltIn => score_variants(index, &variants),
            #[cfg(feature = "delegated")]
            Strategy::Delegated(matcher) => match matcher.search(index, &variants) {
                Ok(results) => results,
                Err(err) => {
                    tracing::warn!(error = %err, "delegated matcher failed, using built-in matcher");
                    score_variants(index, &variants)
                }
            },
        }
    }

    /// Map results back to their records, in result order.
    pub fn resolve<'a>(
        &self,
        index: &'a SearchIndex,
        results: &[MatchResult],
    ) -> Vec<&'a SearchableRecord> {
        let by_id: HashMap<&str, &SearchableRecord> = index
            .records
            .iter()
            .rev()
            .map(|record| (record.id.as_str(), record))
            .collect();

        results
            .iter()
            .filter_map(|result| by_id.get(result.id.as_str()).copied())
            .collect()
    }
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new(Vocabulary::default(), EngineOptions::default())
    }
}
