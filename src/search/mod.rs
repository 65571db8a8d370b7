// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search: query expansion, matching and ranking.
//!
//! A query is expanded into variants (literal, synonyms, transliterations),
//! every record is scored against them, and the hits come back best first.
//! Two matchers share that contract: the built-in two-tier matcher and the
//! weighted delegated matcher. [`engine::SearchEngine`] picks one at
//! construction.

pub mod builtin;
pub mod cache;
#[cfg(feature = "delegated")]
pub mod delegated;
pub mod engine;
pub mod expand;
pub mod utils;
