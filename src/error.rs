// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types.
//!
//! The search core itself is total: normalization, indexing, the built-in
//! matcher and thread reconstruction never fail. Errors only come from
//! loading vocabulary configuration and from misuse of the delegated matcher.

use std::path::PathBuf;
use thiserror::Error;

/// Failure to load or validate a vocabulary configuration.
#[derive(Debug, Error)]
pub enum VocabError {
    #[error("failed to read vocabulary file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid vocabulary JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("synonym term {0:?} is empty after normalization")]
    EmptyTerm(String),
}

/// Failure inside a matcher strategy. The engine recovers from these by
/// answering the query with the built-in matcher.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    #[error("index contains duplicate record id {0:?}")]
    DuplicateId(String),
}
