// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text helpers shared by indexing and querying.
//!
//! Normalization makes "Ёлка", "ЕЛКА" and "елка" the same string; the
//! transliterator lets a query typed in the wrong alphabet or keyboard layout
//! still land on the right characters.

pub mod normalize;
pub mod translit;
