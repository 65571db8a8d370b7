//! Thread reconstruction properties over arbitrary parent links.

use crate::common::make_review;
use cardex::{build_thread_tree, Review};
use proptest::prelude::*;
use std::collections::HashSet;

/// Reviews `r0..rN` with random parents drawn from the same pool (or a
/// missing id), so cycles, self-links and dangling links all occur.
fn reviews_strategy() -> impl Strategy<Value = Vec<Review>> {
    prop::collection::vec((0i64..50, prop::option::of(0usize..14)), 0..12).prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(i, (minutes, parent))| {
                let parent = parent.map(|p| format!("r{}", p));
                make_review(&format!("r{}", i), minutes, parent.as_deref())
            })
            .collect()
    })
}

proptest! {
    /// Property: every review appears exactly once in the tree.
    #[test]
    fn prop_threads_conserve_reviews(reviews in reviews_strategy()) {
        let expected: HashSet<String> = reviews.iter().map(|r| r.id.clone()).collect();
        let tree = build_thread_tree(reviews);

        let mut seen = HashSet::new();
        for node in &tree {
            prop_assert!(seen.insert(node.review.id.clone()));
            for reply in &node.replies {
                prop_assert!(seen.insert(reply.id.clone()));
            }
        }
        prop_assert_eq!(seen, expected);
    }

    /// Property: roots newest first, replies oldest first.
    #[test]
    fn prop_threads_ordered(reviews in reviews_strategy()) {
        let tree = build_thread_tree(reviews);

        for pair in tree.windows(2) {
            prop_assert!(pair[0].review.created_at >= pair[1].review.created_at);
        }
        for node in &tree {
            for pair in node.replies.windows(2) {
                prop_assert!(pair[0].created_at <= pair[1].created_at);
            }
        }
    }
}
