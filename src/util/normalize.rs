// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Canonical comparable form for free text.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Normalize a string for search: lowercase, fold diacritics, drop symbols,
/// and collapse whitespace.
///
/// - "CAFÉ  naïve!!!" → "cafe naive"
/// - "Ёлка" → "елка"
/// - "Доктор Zло 💀" → "доктор zло"
///
/// # Algorithm
///
/// 1. Lowercase
/// 2. Map "ё" to "е"
/// 3. NFD normalize and drop combining marks
/// 4. Keep only letters, digits, whitespace and `-`
/// 5. Collapse whitespace runs and trim
///
/// Idempotent: `normalize(&normalize(x)) == normalize(x)`.
///
/// Note that "й" decomposes to "и" plus a breve, so it normalizes to "и".
pub fn normalize(value: &str) -> String {
    let folded: String = value
        .to_lowercase()
        .chars()
        .map(|c| if c == 'ё' { 'е' } else { c })
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .filter(|c| c.is_alphanumeric() || c.is_whitespace() || *c == '-')
        .collect();

    folded.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// [`normalize`] for optional record fields; absent becomes `""`.
pub fn normalize_opt(value: Option<&str>) -> String {
    value.map(normalize).unwrap_or_default()
}
