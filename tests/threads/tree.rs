//! Flattening, ordering and malformed parent chains.

use crate::common::make_review;
use cardex::{build_thread_tree, Review, ThreadNode, MAX_THREAD_DEPTH};

fn root_ids(tree: &[ThreadNode]) -> Vec<&str> {
    tree.iter().map(|node| node.review.id.as_str()).collect()
}

fn reply_ids(node: &ThreadNode) -> Vec<&str> {
    node.replies.iter().map(|r| r.id.as_str()).collect()
}

fn total_reviews(tree: &[ThreadNode]) -> usize {
    tree.iter().map(|node| 1 + node.replies.len()).sum()
}

#[test]
fn test_ten_comments_one_thread() {
    // R ← A ← B, plus seven more replies hanging off various members.
    let reviews = vec![
        make_review("R", 1, None),
        make_review("A", 2, Some("R")),
        make_review("B", 3, Some("A")),
        make_review("C", 4, Some("B")),
        make_review("D", 5, Some("R")),
        make_review("E", 6, Some("D")),
        make_review("F", 7, Some("A")),
        make_review("G", 8, Some("C")),
        make_review("H", 9, Some("G")),
        make_review("I", 10, Some("H")),
    ];
    let tree = build_thread_tree(reviews);

    assert_eq!(root_ids(&tree), vec!["R"]);
    assert_eq!(
        reply_ids(&tree[0]),
        vec!["A", "B", "C", "D", "E", "F", "G", "H", "I"]
    );
}

#[test]
fn test_reply_of_reply_is_flattened() {
    let tree = build_thread_tree(vec![
        make_review("B", 3, Some("A")),
        make_review("A", 2, Some("R")),
        make_review("R", 1, None),
    ]);

    assert_eq!(root_ids(&tree), vec!["R"]);
    assert_eq!(reply_ids(&tree[0]), vec!["A", "B"]);
}

#[test]
fn test_several_threads_newest_root_first() {
    let tree = build_thread_tree(vec![
        make_review("old", 1, None),
        make_review("old-reply", 50, Some("old")),
        make_review("new", 20, None),
        make_review("new-reply", 21, Some("new")),
    ]);

    assert_eq!(root_ids(&tree), vec!["new", "old"]);
    assert_eq!(reply_ids(&tree[1]), vec!["old-reply"]);
}

#[test]
fn test_equal_timestamps_keep_input_order() {
    let tree = build_thread_tree(vec![
        make_review("root", 0, None),
        make_review("x", 5, Some("root")),
        make_review("y", 5, Some("root")),
        make_review("p", 1, None),
        make_review("q", 1, None),
    ]);

    assert_eq!(root_ids(&tree), vec!["p", "q", "root"]);
    assert_eq!(reply_ids(&tree[2]), vec!["x", "y"]);
}

#[test]
fn test_cycle_does_not_hang() {
    let tree = build_thread_tree(vec![
        make_review("A", 1, Some("C")),
        make_review("B", 2, Some("A")),
        make_review("C", 3, Some("B")),
    ]);

    assert_eq!(total_reviews(&tree), 3);
    assert_eq!(tree.len(), 3);
}

#[test]
fn test_chain_longer_than_bound() {
    let len = MAX_THREAD_DEPTH + 5;
    let mut reviews: Vec<Review> = vec![make_review("n0", 0, None)];
    for i in 1..len {
        let parent = format!("n{}", i - 1);
        reviews.push(make_review(&format!("n{}", i), i as i64, Some(parent.as_str())));
    }
    let tree = build_thread_tree(reviews);

    assert_eq!(total_reviews(&tree), len);
    let first = tree.iter().find(|node| node.review.id == "n0").unwrap();
    assert_eq!(first.replies.len(), MAX_THREAD_DEPTH);
}

#[test]
fn test_missing_parent_ends_walk() {
    let tree = build_thread_tree(vec![
        make_review("child", 2, Some("gone")),
        make_review("grandchild", 3, Some("child")),
    ]);

    assert_eq!(root_ids(&tree), vec!["child"]);
    assert_eq!(reply_ids(&tree[0]), vec!["grandchild"]);
}
