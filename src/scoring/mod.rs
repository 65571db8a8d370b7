// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how search results get their numbers.
//!
//! The built-in matcher is deliberately coarse: two tiers, substring (0.1) and
//! approximate token (0.4). The delegated matcher scores on a continuous
//! scale with per-field weights. Both are "lower is better", and neither
//! scale means anything outside the engine that produced it.

mod core;
pub mod ranking;

pub use core::*;
