//! Loading vocabularies from JSON files.

use crate::common::{make_character, result_ids};
use cardex::{build_index, SearchEngine, VocabError, Vocabulary, SUBSTRING_TIER_SCORE};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

#[test]
fn test_extends_defaults() {
    let file = write_config(r#"{"synonyms": {"некромант": ["necromancer", "маг смерти"]}}"#);
    let vocab = Vocabulary::from_path(file.path()).unwrap();

    assert_eq!(vocab.synonyms.len(), Vocabulary::default_synonyms().len() + 1);

    let index = build_index(&[make_character("n1", "Некромант Вольдар")]);
    let results = SearchEngine::builtin(vocab).search(&index, "necromancer");
    assert_eq!(result_ids(&results), vec!["n1"]);
    assert_eq!(results[0].score, SUBSTRING_TIER_SCORE);
}

#[test]
fn test_replaces_defaults() {
    let file = write_config(r#"{"synonyms": {"некромант": ["necromancer"]}, "extendDefaults": false}"#);
    let vocab = Vocabulary::from_path(file.path()).unwrap();

    assert_eq!(vocab.synonyms.len(), 1);
    assert!(vocab.synonyms.synonyms_of("врач").next().is_none());
}

#[test]
fn test_empty_object_is_defaults() {
    let file = write_config("{}");
    let vocab = Vocabulary::from_path(file.path()).unwrap();
    assert_eq!(vocab, Vocabulary::default());
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = Vocabulary::from_path(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, VocabError::Io { .. }));
    assert!(err.to_string().contains("absent.json"));
}

#[test]
fn test_malformed_json() {
    let file = write_config(r#"{"synonyms": ["not", "a", "map"]}"#);
    let err = Vocabulary::from_path(file.path()).unwrap_err();
    assert!(matches!(err, VocabError::Parse(_)));
}

#[test]
fn test_empty_term_rejected() {
    let file = write_config(r#"{"synonyms": {"!!!": ["x"]}}"#);
    let err = Vocabulary::from_path(file.path()).unwrap_err();
    assert!(matches!(err, VocabError::EmptyTerm(ref term) if term == "!!!"));
}
