//! Gap distance properties, checked against a reference Levenshtein.

use cardex::{approx_token_match, gap_distance_within, MAX_GAP_DISTANCE};
use proptest::prelude::*;

/// Reference Levenshtein distance over chars.
fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    for i in 1..=a.len() {
        let mut curr = vec![i; b.len() + 1];
        for j in 1..=b.len() {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        prev = curr;
    }
    prev[b.len()]
}

/// Positionwise mismatches plus the length difference.
fn lockstep_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let mismatches = a.iter().zip(&b).filter(|(x, y)| x != y).count();
    mismatches + a.len().abs_diff(b.len())
}

fn short_word() -> impl Strategy<Value = String> {
    prop::string::string_regex("[абвгклмор]{0,8}").unwrap()
}

proptest! {
    /// Property: a gap match is never closer than Levenshtein allows.
    #[test]
    fn prop_gap_bounds_levenshtein(a in short_word(), b in short_word(), max in 0usize..4) {
        if gap_distance_within(&a, &b, max) {
            prop_assert!(levenshtein(&a, &b) <= max);
        }
    }

    /// Property: a pair within bound position by position is always accepted.
    #[test]
    fn prop_gap_accepts_lockstep_matches(a in short_word(), b in short_word(), max in 0usize..4) {
        if lockstep_distance(&a, &b) <= max {
            prop_assert!(gap_distance_within(&a, &b, max));
        }
    }

    /// Property: same, over a two-letter alphabet where realignment misfires.
    #[test]
    fn prop_gap_accepts_lockstep_matches_binary(a in "[ac]{0,6}", b in "[ac]{0,6}") {
        if lockstep_distance(&a, &b) <= MAX_GAP_DISTANCE {
            prop_assert!(gap_distance_within(&a, &b, MAX_GAP_DISTANCE));
        }
    }

    /// Property: argument order does not matter.
    #[test]
    fn prop_gap_symmetric(a in short_word(), b in short_word()) {
        prop_assert_eq!(
            gap_distance_within(&a, &b, MAX_GAP_DISTANCE),
            gap_distance_within(&b, &a, MAX_GAP_DISTANCE)
        );
    }

    /// Property: every word is within zero gaps of itself.
    #[test]
    fn prop_gap_reflexive(a in short_word()) {
        prop_assert!(gap_distance_within(&a, &a, 0));
    }

    /// Property: a single dropped letter is always within one gap.
    #[test]
    fn prop_single_deletion(a in "[абвгклмор]{1,8}", pos in 0usize..8) {
        let chars: Vec<char> = a.chars().collect();
        let pos = pos % chars.len();
        let shorter: String = chars.iter().enumerate()
            .filter(|(i, _)| *i != pos)
            .map(|(_, c)| c)
            .collect();
        prop_assert!(gap_distance_within(&a, &shorter, 1));
    }

    /// Property: a word matches itself as a token.
    #[test]
    fn prop_token_matches_itself(a in "[абвгклмор]{1,8}") {
        prop_assert!(approx_token_match(&a, &a));
    }
}
