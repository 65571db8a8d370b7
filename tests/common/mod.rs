//! Shared test utilities and fixtures.

#![allow(dead_code)]

use cardex::{build_index, Character, MatchResult, SearchEngine, SearchIndex, Vocabulary};

// Re-export canonical test utilities from cardex::testing
pub use cardex::testing::{fixture_vocabulary, make_character, make_character_with, make_review};

// ============================================================================
// CATALOG FIXTURES
// ============================================================================

/// The "Доктор Zло" record used by the synonym scenario.
pub fn doctor_zlo() -> Character {
    make_character_with("c1", "Доктор Zло", "хирург", &["злой", "медик"])
}

/// A hired killer, reachable from the Latin typo "kiler".
pub fn hitman() -> Character {
    make_character_with("c2", "Виктор", "киллер", &["наёмник"])
}

/// A small mixed-alphabet catalog.
pub fn sample_catalog() -> Vec<Character> {
    vec![
        doctor_zlo(),
        hitman(),
        make_character_with("c3", "Captain Flint", "pirate", &["sea", "treasure"]),
        make_character_with("c4", "Агата", "ведьма", &["фэнтези", "добрый"]),
        make_character_with("c5", "Лея", "детектив", &["mystery"]),
    ]
}

pub fn sample_index() -> SearchIndex {
    build_index(&sample_catalog())
}

// ============================================================================
// ENGINES
// ============================================================================

/// Built-in matcher over the default vocabulary.
pub fn builtin_engine() -> SearchEngine {
    SearchEngine::builtin(Vocabulary::default())
}

/// Built-in matcher over the small fixture vocabulary.
pub fn fixture_engine() -> SearchEngine {
    SearchEngine::builtin(fixture_vocabulary())
}

// ============================================================================
// ASSERTION HELPERS
// ============================================================================

pub fn result_ids(results: &[MatchResult]) -> Vec<&str> {
    results.iter().map(|r| r.id.as_str()).collect()
}

pub fn score_of(results: &[MatchResult], id: &str) -> Option<f64> {
    results.iter().find(|r| r.id == id).map(|r| r.score)
}

/// Results must be sorted by score, best first.
pub fn assert_ranked(results: &[MatchResult]) {
    for pair in results.windows(2) {
        assert!(
            pair[0].score <= pair[1].score,
            "results out of order: {} ({}) before {} ({})",
            pair[0].id,
            pair[0].score,
            pair[1].id,
            pair[1].score
        );
    }
}
