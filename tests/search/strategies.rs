//! Strategy selection and the delegated matcher.

use crate::common::builtin_engine;
use cardex::{EngineOptions, SearchEngine, Strategy, Vocabulary};

#[test]
fn test_builtin_when_asked() {
    let engine = SearchEngine::new(Vocabulary::default(), EngineOptions::builtin());
    assert_eq!(engine.strategy(), &Strategy::BuiltIn);
    assert_eq!(engine.strategy().name(), builtin_engine().strategy().name());
}

#[cfg(feature = "delegated")]
mod delegated {
    use super::*;
    use crate::common::{doctor_zlo, hitman, make_character, result_ids, sample_index};
    use cardex::{build_index, DelegatedMatcher, MatchError, MatchResult, QueryVariants};

    fn delegated_engine() -> SearchEngine {
        SearchEngine::default()
    }

    #[test]
    fn test_default_prefers_delegated() {
        assert!(matches!(delegated_engine().strategy(), Strategy::Delegated(_)));
    }

    #[test]
    fn test_synonym_scenario() {
        let index = build_index(&[doctor_zlo()]);
        let results = delegated_engine().search(&index, "врач");
        assert_eq!(result_ids(&results), vec!["c1"]);
        assert!(results[0].score < 1.0);
    }

    #[test]
    fn test_typo_scenario() {
        let index = build_index(&[hitman()]);
        let results = delegated_engine().search(&index, "kiler");
        assert_eq!(result_ids(&results), vec!["c2"]);
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let index = sample_index();
        let results = delegated_engine().search(&index, "  ");
        assert_eq!(results.len(), index.len());
        assert!(results.iter().all(|r| r.score == 0.0));
    }

    #[test]
    fn test_more_fields_rank_higher() {
        // Both mention "ведьма"; only one carries it in name and occupation.
        let mut strong = make_character("strong", "Ведьма Агата");
        strong.occupation = Some("ведьма".into());
        let mut weak = make_character("weak", "Марта");
        weak.description = Some("дочь ведьма".into());
        let index = build_index(&[weak, strong]);

        let results = delegated_engine().search(&index, "ведьма");
        assert_eq!(result_ids(&results), vec!["strong", "weak"]);
    }

    #[test]
    fn test_duplicate_ids_fall_back_to_builtin() {
        let index = build_index(&[make_character("dup", "Лея"), make_character("dup", "Лея")]);
        let results: Vec<MatchResult> = delegated_engine().search(&index, "лея");
        let builtin = builtin_engine().search(&index, "лея");
        assert_eq!(results, builtin);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "dup");
    }

    #[test]
    fn test_matcher_reports_duplicate_ids() {
        let index = build_index(&[make_character("dup", "A"), make_character("dup", "B")]);
        let matcher = DelegatedMatcher::new(Default::default(), 0.4);
        let variants = QueryVariants::from_normalized(["a"]);
        assert_eq!(
            matcher.search(&index, &variants),
            Err(MatchError::DuplicateId("dup".into()))
        );
    }
}
