// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Comment threads: flat review list → two-level display tree.
//!
//! Every review is attached to its thread root, the top-most ancestor reached
//! by following `parent_review` links. Deep reply chains are flattened into
//! the root's reply list; the display never nests more than one level.
//!
//! ```text
//! R ← A ← B          R
//!                    ├─ A
//!                    └─ B
//! ```
//!
//! Parent links are user data. The walk is a bounded loop over an id map, so
//! cycles (`A → B → A`) and runaway chains terminate: a review whose root is
//! not found within [`MAX_THREAD_DEPTH`] hops becomes its own root. A parent
//! id missing from the list ends the walk at the last review found.
//!
//! Ordering: roots newest first, replies oldest first. Equal timestamps keep
//! input order.

use crate::types::{Review, ThreadNode};
use std::collections::{HashMap, HashSet};

/// Maximum parent hops followed when resolving a thread root.
pub const MAX_THREAD_DEPTH: usize = 10;

/// Rebuild the display tree from a flat list of reviews.
///
/// Duplicate ids keep their first occurrence.
pub fn build_thread_tree(reviews: Vec<Review>) -> Vec<ThreadNode> {
    let mut seen = HashSet::with_capacity(reviews.len());
    let reviews: Vec<Review> = reviews
        .into_iter()
        .filter(|review| {
            let fresh = seen.insert(review.id.clone());
            if !fresh {
                tracing::debug!(id = %review.id, "dropping duplicate review");
            }
            fresh
        })
        .collect();

    let root_ids: Vec<String> = {
        let parents: HashMap<&str, Option<&str>> = reviews
            .iter()
            .map(|review| (review.id.as_str(), review.parent_review.as_deref()))
            .collect();
        reviews
            .iter()
            .map(|review| resolve_root(&review.id, &parents).to_string())
            .collect()
    };

    let mut roots: Vec<Review> = Vec::new();
    let mut replies: HashMap<String, Vec<Review>> = HashMap::new();
    for (review, root_id) in reviews.into_iter().zip(root_ids) {
        if review.id == root_id {
            roots.push(review);
        } else {
            replies.entry(root_id).or_default().push(review);
        }
    }

    roots.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    roots
        .into_iter()
        .map(|review| {
            let mut thread = replies.remove(&review.id).unwrap_or_default();
            thread.sort_by_key(|reply| reply.created_at);
            ThreadNode {
                review,
                replies: thread,
            }
        })
        .collect()
}

/// Thread root of `id`: follow parent links for at most [`MAX_THREAD_DEPTH`]
/// hops. Unresolvable chains make `id` its own root.
pub fn resolve_root<'a>(id: &'a str, parents: &HashMap<&'a str, Option<&'a str>>) -> &'a str {
    let mut current = id;
    let mut hops = 0;

    loop {
        let parent = parents
            .get(current)
            .copied()
            .flatten()
            .filter(|parent| parents.contains_key(parent));

        match parent {
            None => return current,
            Some(_) if hops == MAX_THREAD_DEPTH => return id,
            Some(parent) => {
                current = parent;
                hops += 1;
            }
        }
    }
}
