//! Same input, same output: across calls, engines and strategies.

use crate::common::{builtin_engine, sample_catalog, sample_index};
use cardex::{build_index, EngineOptions, SearchEngine, Vocabulary};

const QUERIES: &[&str] = &["врач", "kiler", "флинт", "добрый маг", "детектиф", "", "zz"];

#[test]
fn test_repeated_search_identical() {
    let engine = builtin_engine();
    let index = sample_index();
    for query in QUERIES {
        assert_eq!(engine.search(&index, query), engine.search(&index, query));
    }
}

#[test]
fn test_separate_engines_agree() {
    let index = sample_index();
    for options in [EngineOptions::builtin(), EngineOptions::default()] {
        let a = SearchEngine::new(Vocabulary::default(), options.clone());
        let b = SearchEngine::new(Vocabulary::default(), options);
        for query in QUERIES {
            assert_eq!(a.search(&index, query), b.search(&index, query), "query {:?}", query);
        }
    }
}

#[test]
fn test_rebuilt_index_identical() {
    assert_eq!(build_index(&sample_catalog()), build_index(&sample_catalog()));
}

#[test]
fn test_shared_engine_across_threads() {
    let engine = builtin_engine();
    let index = sample_index();
    let expected = engine.search(&index, "врач");

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| engine.search(&index, "врач")))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
