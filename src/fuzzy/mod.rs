// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy search: typo tolerance for single tokens.
//!
//! The built-in matcher does not rank by edit distance, it only asks "is this
//! token close enough?". A cheap bounded walk answers that without a DP table.

mod gap;

pub use gap::*;
