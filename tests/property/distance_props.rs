//! Metric properties of edit distance.

use cami::{char_len, levenshtein, levenshtein_within};
use proptest::prelude::*;

fn word() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z\u{e9}\u{f1}]{0,12}").unwrap()
}

proptest! {
    #[test]
    fn prop_symmetric(a in word(), b in word()) {
        prop_assert_eq!(levenshtein(&a, &b), levenshtein(&b, &a));
    }

    #[test]
    fn prop_identity(a in word()) {
        prop_assert_eq!(levenshtein(&a, &a), 0);
    }

    #[test]
    fn prop_empty_is_length(a in word()) {
        prop_assert_eq!(levenshtein("", &a), char_len(&a));
        prop_assert_eq!(levenshtein(&a, ""), char_len(&a));
    }

    #[test]
    fn prop_triangle_inequality(a in word(), b in word(), c in word()) {
        prop_assert!(levenshtein(&a, &c) <= levenshtein(&a, &b) + levenshtein(&b, &c));
    }

    #[test]
    fn prop_bounded_by_longer_length(a in word(), b in word()) {
        let d = levenshtein(&a, &b);
        prop_assert!(d <= char_len(&a).max(char_len(&b)));
        prop_assert!(d >= char_len(&a).abs_diff(char_len(&b)));
    }

    #[test]
    fn prop_within_is_monotonic(a in word(), b in word(), max in 0usize..8) {
        if levenshtein_within(&a, &b, max) {
            prop_assert!(levenshtein_within(&a, &b, max + 1));
        }
    }
}
