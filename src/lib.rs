//! Fuzzy, transliteration-aware search over AI character catalogs.
//!
//! This crate is the search core of a character catalog: it turns the
//! catalog's character records into a search index, expands free-text queries
//! with synonyms and cross-alphabet transliterations, and ranks characters by
//! how well they match. It also rebuilds review threads from a flat list.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────────────┐
//! │  types.rs   │────▶│  index/      │────▶│  search/engine.rs    │
//! │ (Character, │     │ (build_index)│     │  ┌────────────────┐  │
//! │  Review)    │     └──────────────┘     │  │ expand (vocab) │  │
//! └─────────────┘            ▲             │  └───────┬────────┘  │
//!        │            ┌──────┴───────┐     │   builtin│delegated  │
//!        │            │ util/        │────▶│          ▼           │
//!        │            │ (normalize,  │     │   Vec<MatchResult>   │
//!        │            │  translit)   │     └──────────────────────┘
//!        ▼            └──────────────┘
//! ┌─────────────┐
//! │ threads.rs  │  Vec<Review> → Vec<ThreadNode>
//! └─────────────┘
//! ```
//!
//! | Module    | Responsibility                                        |
//! |-----------|-------------------------------------------------------|
//! | `util`    | Normalization, transliteration                        |
//! | `vocab`   | Synonym and transliteration tables, JSON config       |
//! | `index`   | Character → searchable record projection              |
//! | `fuzzy`   | Bounded gap distance for token matching               |
//! | `scoring` | Tier constants, field weights, result ordering        |
//! | `search`  | Query expansion, both matchers, engine, index cache   |
//! | `threads` | Review thread reconstruction                          |
//!
//! # Usage
//!
//! ```
//! use cardex::{build_index, Character, SearchEngine};
//!
//! let characters = vec![Character {
//!     id: "c1".into(),
//!     name: Some("Доктор Zло".into()),
//!     occupation: Some("хирург".into()),
//!     ..Default::default()
//! }];
//! let index = build_index(&characters);
//! let engine = SearchEngine::default();
//!
//! let results = engine.search(&index, "врач");
//! assert_eq!(results[0].id, "c1");
//! ```

pub mod error;
pub mod fuzzy;
pub mod index;
pub mod scoring;
pub mod search;
pub mod testing;
pub mod threads;
pub mod types;
pub mod util;
pub mod vocab;

// Re-exports for public API
pub use error::{MatchError, VocabError};
pub use fuzzy::{approx_token_match, gap_distance_within, MAX_GAP_DISTANCE};
pub use index::build_index;
pub use scoring::{
    FieldWeights, EMPTY_QUERY_SCORE, NO_MATCH_SCORE, SUBSTRING_TIER_SCORE, TOKEN_TIER_SCORE,
};
pub use search::builtin::search_builtin;
pub use search::cache::IndexCache;
pub use search::engine::{EngineOptions, SearchEngine, Strategy};
pub use search::expand::{expand_variants, QueryVariants};
pub use threads::{build_thread_tree, MAX_THREAD_DEPTH};
pub use types::{
    Character, FieldKind, FieldValue, MatchResult, RecordFields, Review, SearchIndex,
    SearchableRecord, ThreadNode,
};
pub use util::normalize::normalize;
pub use util::translit::{translit_en_to_ru, translit_ru_to_en, TranslitTable};
pub use vocab::{SynonymTable, Vocabulary, VocabularyConfig};

#[cfg(feature = "delegated")]
pub use search::delegated::DelegatedMatcher;
