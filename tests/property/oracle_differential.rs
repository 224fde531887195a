//! Differential testing: compare the crate's implementations against oracles.
//!
//! If they disagree, the oracle is right.

use super::oracles::{oracle_levenshtein, oracle_suggestions};
use cami::testing::store_of;
use cami::{levenshtein, levenshtein_bounded, Matcher, MatcherConfig};
use proptest::prelude::*;

fn text() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-dé ]{0,10}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Full-table distance matches the two-row oracle.
    #[test]
    fn diff_levenshtein_vs_oracle(a in text(), b in text()) {
        prop_assert_eq!(levenshtein(&a, &b), oracle_levenshtein(&a, &b));
    }

    /// And an independent crate agrees too.
    #[test]
    fn diff_levenshtein_vs_strsim(a in text(), b in text()) {
        prop_assert_eq!(levenshtein(&a, &b), strsim::levenshtein(&a, &b));
    }

    /// Bounded distance is exact inside the bound and None outside it.
    #[test]
    fn diff_bounded_vs_oracle(a in text(), b in text(), max in 0usize..6) {
        let exact = oracle_levenshtein(&a, &b);
        let expected = if exact <= max { Some(exact) } else { None };
        prop_assert_eq!(levenshtein_bounded(&a, &b, max), expected);
    }

    /// Ranked suggestions match the brute-force oracle.
    #[test]
    fn diff_suggestions_vs_oracle(
        names in prop::collection::btree_set("[a-d]{1,5}", 1..15)
            .prop_map(|set| set.into_iter().collect::<Vec<String>>())
            .prop_shuffle(),
        input in "[a-e]{1,5}",
        max in 0usize..4,
        limit in 1usize..5,
    ) {
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let store = store_of(&refs);
        let config = MatcherConfig::default().with_max_distance(max).with_max_suggestions(limit);
        let matcher = Matcher::with_config(&store, config);

        let ranked: Vec<String> = matcher.suggest(&input).into_iter().map(|s| s.name).collect();
        prop_assert_eq!(ranked, oracle_suggestions(&input, &names, max, limit));
    }
}
