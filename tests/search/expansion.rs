//! Query expansion through the public engine API.

use crate::common::{builtin_engine, fixture_engine};
use cardex::{expand_variants, SearchEngine, SynonymTable, TranslitTable, Vocabulary};

#[test]
fn test_literal_always_first() {
    let variants = builtin_engine().variants("  ХИРУРГ!  ");
    assert_eq!(variants.as_slice()[0], "хирург");
}

#[test]
fn test_reverse_synonym_lookup() {
    let engine = fixture_engine();
    assert!(engine.variants("assassin").contains("киллер"));
    assert!(engine.variants("assassin").contains("убийца"));
    assert!(engine.variants("киллер").contains("assassin"));
}

#[test]
fn test_per_token_synonyms() {
    let variants = fixture_engine().variants("злой хирург");
    assert!(variants.contains("злой хирург"));
    assert!(variants.contains("врач"));
}

#[test]
fn test_both_transliterations() {
    let engine = fixture_engine();
    assert!(engine.variants("щука").contains("schuka"));
    assert!(engine.variants("shchuka").contains("щука"));
}

#[test]
fn test_vocabularies_are_independent() {
    let mut custom = SynonymTable::new();
    custom.add("некромант", ["necromancer"]).unwrap();
    let custom = Vocabulary::new(custom, TranslitTable::default());

    let with_custom = expand_variants("necromancer", &custom);
    let with_fixture = expand_variants("necromancer", &cardex::testing::fixture_vocabulary());

    assert!(with_custom.contains("некромант"));
    assert!(!with_fixture.contains("некромант"));

    let engine = SearchEngine::builtin(custom);
    assert_eq!(engine.vocabulary().synonyms.len(), 1);
}

#[test]
fn test_symbols_only_expand_to_nothing() {
    assert!(builtin_engine().variants("💀🔥 !!").is_empty());
}
