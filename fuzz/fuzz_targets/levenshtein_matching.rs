// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for edit distance.
//!
//! Verifies that the bounded distance agrees with the full table inside the
//! bound, and that both respect the metric's basic laws. If the bounded form
//! lies, the matcher silently drops good suggestions.

#![no_main]

use arbitrary::Arbitrary;
use cami::{char_len, levenshtein, levenshtein_bounded};
use libfuzzer_sys::fuzz_target;

/// Fuzz input for edit distance
#[derive(Debug, Arbitrary)]
struct MatchInput {
    query_bytes: Vec<u8>,
    target_bytes: Vec<u8>,
    max: u8,
}

/// Lossy UTF-8, capped to avoid timeouts.
fn text(bytes: &[u8], cap: usize) -> String {
    String::from_utf8_lossy(bytes).chars().take(cap).collect()
}

fuzz_target!(|input: MatchInput| {
    let query = text(&input.query_bytes, 50);
    let target = text(&input.target_bytes, 100);
    let max = usize::from(input.max % 8);

    let exact = levenshtein(&query, &target);
    let bounded = levenshtein_bounded(&query, &target, max);

    // INVARIANT 1: bounded is exact within the bound, None beyond it
    if exact <= max {
        assert_eq!(
            bounded,
            Some(exact),
            "bounded disagrees with full table for query='{}', target='{}', max={}",
            query, target, max
        );
    } else {
        assert_eq!(bounded, None, "bounded accepted distance {} > {}", exact, max);
    }

    // INVARIANT 2: symmetry
    assert_eq!(exact, levenshtein(&target, &query));

    // INVARIANT 3: length difference is a lower bound, longer length an upper one
    let (ql, tl) = (char_len(&query), char_len(&target));
    assert!(ql.abs_diff(tl) <= exact);
    assert!(exact <= ql.max(tl));

    // INVARIANT 4: identity
    assert_eq!(levenshtein(&query, &query), 0);
    assert_eq!(levenshtein_bounded(&query, &query, 0), Some(0));
});
