// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Bounded gap distance.
//!
//! Two walks, and a pair matches when either stays within the bound:
//!
//! - **Lockstep**: compare position by position, count every mismatch, then
//!   add whatever is left of the longer string.
//! - **Realigning**: like lockstep, but when the longer string has an extra
//!   character that realigns the two ("киллер" vs "килер"), only the longer
//!   side advances. One inner insertion then costs 1 instead of a tail of
//!   mismatches.
//!
//! Neither walk dominates the other ("acaca"/"ccac" is 2 in lockstep and 3
//! realigned), so both run. Each is an upper bound on Levenshtein distance.
//!
//! Two early exits:
//! 1. Length difference above the bound: no walk at all
//! 2. Running distance above the bound: stop walking

/// Largest gap distance that still counts as a token match.
pub const MAX_GAP_DISTANCE: usize = 2;

/// Are these strings within `max` gaps of each other?
pub fn gap_distance_within(a: &str, b: &str, max: usize) -> bool {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (long, short) = if a.len() >= b.len() { (&a, &b) } else { (&b, &a) };

    if long.len() - short.len() > max {
        return false;
    }

    lockstep_within(long, short, max) || realigned_within(long, short, max)
}

fn lockstep_within(long: &[char], short: &[char], max: usize) -> bool {
    let mut distance = long.len() - short.len();
    for (x, y) in long.iter().zip(short) {
        if x != y {
            distance += 1;
            if distance > max {
                return false;
            }
        }
    }
    distance <= max
}

fn realigned_within(long: &[char], short: &[char], max: usize) -> bool {
    let (mut i, mut j, mut distance) = (0usize, 0usize, 0usize);
    while i < long.len() && j < short.len() {
        if long[i] == short[j] {
            i += 1;
            j += 1;
            continue;
        }

        distance += 1;
        if distance > max {
            return false;
        }

        let long_has_extra = long.len() - i > short.len() - j;
        if long_has_extra && long.get(i + 1) == Some(&short[j]) {
            i += 1;
        } else {
            i += 1;
            j += 1;
        }
    }

    distance += (long.len() - i) + (short.len() - j);
    distance <= max
}

/// Token-level approximate match used by the built-in matcher.
///
/// Either string contains the other, or their gap distance is at most
/// [`MAX_GAP_DISTANCE`].
pub fn approx_token_match(token: &str, variant: &str) -> bool {
    if token.is_empty() || variant.is_empty() {
        return false;
    }

    if variant.contains(token) || token.contains(variant) {
        return true;
    }

    gap_distance_within(token, variant, MAX_GAP_DISTANCE)
}
