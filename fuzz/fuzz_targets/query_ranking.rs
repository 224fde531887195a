// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for query ranking.
//!
//! Builds a dictionary from arbitrary names and checks that whatever the
//! matcher returns is capped, unique, sorted by distance, and within the
//! threshold. Exact hits must come back as `Found`.

#![no_main]

use arbitrary::Arbitrary;
use cami::testing::make_record;
use cami::{canonicalize, levenshtein, DuplicatePolicy, Matcher, MatcherConfig, QueryResult, Store};
use libfuzzer_sys::fuzz_target;
use std::collections::HashSet;

#[derive(Debug, Arbitrary)]
struct RankingInput {
    names: Vec<String>,
    query: String,
    max_distance: u8,
    max_suggestions: u8,
}

fuzz_target!(|input: RankingInput| {
    if input.names.len() > 200 {
        return;
    }
    let names = input
        .names
        .iter()
        .map(|name| name.chars().take(30).collect::<String>())
        .filter(|name| !canonicalize(name).is_empty());
    let records = names.map(|name| make_record(&name, "fuzz"));
    let Ok(store) = Store::from_records(records, DuplicatePolicy::LastWins) else {
        return;
    };

    let config = MatcherConfig::default()
        .with_max_distance(usize::from(input.max_distance % 6))
        .with_max_suggestions(usize::from(input.max_suggestions % 6) + 1);
    let matcher = Matcher::with_config(&store, config);
    let query: String = input.query.chars().take(40).collect();
    let canonical = canonicalize(&query);

    match matcher.query(&query) {
        QueryResult::Found(_) => {
            assert!(store.contains(&canonical), "found '{}' but it is not a key", canonical);
        }
        QueryResult::NotFound(suggestions) => {
            assert!(canonical.is_empty() || !store.contains(&canonical));
            assert!(suggestions.len() <= config.max_suggestions);

            let unique: HashSet<&String> = suggestions.iter().collect();
            assert_eq!(unique.len(), suggestions.len(), "duplicate suggestion");

            let distances: Vec<usize> = suggestions
                .iter()
                .map(|name| levenshtein(&canonical, name))
                .collect();
            assert!(distances.iter().all(|&d| d <= config.max_distance));
            assert!(
                distances.windows(2).all(|w| w[0] <= w[1]),
                "suggestions out of order: {:?}",
                suggestions
            );
        }
    }
});
