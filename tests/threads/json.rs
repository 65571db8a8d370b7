//! Threads built from review exports.

use cardex::{build_thread_tree, Review};
use serde_json::json;

#[test]
fn test_reviews_from_export() {
    let reviews: Vec<Review> = serde_json::from_value(json!([
        {"id": "r1", "createdAt": "2024-03-01T10:00:00Z", "author": "ира", "rating": 5, "text": "Отлично"},
        {"id": "r2", "createdAt": "2024-03-01T11:00:00Z", "parentReview": "r1", "text": "Согласна"},
        {"id": "r3", "createdAt": "2024-03-02T09:30:00+03:00", "parentReview": null}
    ]))
    .unwrap();

    assert_eq!(reviews[0].rating, Some(5));
    assert_eq!(reviews[2].parent_review, None);

    let tree = build_thread_tree(reviews);
    assert_eq!(tree.len(), 2);
    assert_eq!(tree[0].review.id, "r3");
    assert_eq!(tree[1].replies[0].id, "r2");
}

#[test]
fn test_tree_serializes_with_camel_case() {
    let reviews: Vec<Review> = serde_json::from_value(json!([
        {"id": "a", "createdAt": "2024-03-01T10:00:00Z"},
        {"id": "b", "createdAt": "2024-03-01T10:05:00Z", "parentReview": "a"}
    ]))
    .unwrap();
    let value = serde_json::to_value(build_thread_tree(reviews)).unwrap();

    assert_eq!(value[0]["review"]["id"], "a");
    assert_eq!(value[0]["replies"][0]["parentReview"], "a");
}
