// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Edit distance with an early-exit optimization.
//!
//! Distances count Unicode scalar values, not bytes: `"cafe"` and `"café"`
//! are one substitution apart.
//!
//! The key insight for the bounded form: `|len(a) - len(b)|` is a lower bound
//! on edit distance. If two strings differ in length by more than the
//! threshold, skip the O(nm) DP entirely. Inside the DP, the row minimum never
//! decreases, so once it passes the threshold the answer is already known.
//!
//! **Verified by**:
//! - `diff_bounded_vs_oracle` (tests/property/oracle_differential.rs)
//! - `fuzz_targets/levenshtein_matching.rs`

use crate::utils::char_len;

/// Levenshtein distance between `a` and `b`.
///
/// Builds the full `(m+1) × (n+1)` table. Row 0 and column 0 hold the
/// identity costs `0, 1, 2, …`; cell `[i][j]` is the cost of turning the
/// first `i` chars of `a` into the first `j` chars of `b`. Matching trailing
/// chars carry the diagonal, anything else costs `1 + min(diagonal, left, up)`.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (m, n) = (a.len(), b.len());

    let mut table = vec![vec![0usize; n + 1]; m + 1];
    for i in 0..=m {
        table[i][0] = i;
    }
    for j in 0..=n {
        table[0][j] = j;
    }

    for i in 1..=m {
        for j in 1..=n {
            table[i][j] = if a[i - 1] == b[j - 1] {
                table[i - 1][j - 1]
            } else {
                1 + table[i - 1][j - 1].min(table[i][j - 1]).min(table[i - 1][j])
            };
        }
    }

    table[m][n]
}

/// Distance between `a` and `b` if it is at most `max`, otherwise `None`.
///
/// Single-row DP with two early-exit paths:
/// 1. If length difference exceeds `max`, return immediately
/// 2. If the minimum of a row exceeds `max`, abandon the DP
///
/// Both are sound: neither rejects a pair whose true distance is within `max`.
/// When it returns `Some(d)`, `d == levenshtein(a, b)`.
pub fn levenshtein_bounded(a: &str, b: &str, max: usize) -> Option<usize> {
    let a_len = char_len(a);
    let b_len = char_len(b);

    // Early-exit: length difference is a lower bound on edit distance
    if a_len.abs_diff(b_len) > max {
        return None;
    }

    let mut dp: Vec<usize> = (0..=b_len).collect();
    for (i, ac) in a.chars().enumerate() {
        let mut prev = dp[0];
        dp[0] = i + 1;
        let mut min_row = dp[0];

        for (j, bc) in b.chars().enumerate() {
            let temp = dp[j + 1];
            let cost = usize::from(ac != bc);
            dp[j + 1] = (dp[j + 1] + 1).min(dp[j] + 1).min(prev + cost);
            prev = temp;
            min_row = min_row.min(dp[j + 1]);
        }

        if min_row > max {
            return None;
        }
    }

    Some(dp[b_len]).filter(|&distance| distance <= max)
}

/// Are these strings within `max` edits of each other?
pub fn levenshtein_within(a: &str, b: &str, max: usize) -> bool {
    levenshtein_bounded(a, b, max).is_some()
}
