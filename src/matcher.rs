// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Exact lookup with a fuzzy fallback.
//!
//! A query runs in two phases:
//!
//! 1. **Exact**: canonicalize the input and probe the store. A hit returns the
//!    record's display fields and nothing else runs.
//! 2. **Fuzzy**: score every record by edit distance, keep those within
//!    `max_distance`, stable-sort by distance, drop repeated names, and keep
//!    the first `max_suggestions`.
//!
//! Scoring runs on the calling thread and starts no background work. The
//! opt-in `parallel` feature spreads it over rayon's pool for very large
//! dictionaries.
//!
//! **Invariant**: ties keep dictionary load order. The sort is stable and the
//! scoring pass (parallel or not) yields candidates in load order, so two
//! names at the same distance come out in the order they were loaded.
//!
//! **Verified by**:
//! - `prop_suggestions_sorted_and_unique` (tests/property/matcher_props.rs)
//! - `fuzz_targets/query_ranking.rs`
//! - `test_query_starts_no_threads` (tests/concurrency.rs)

use crate::config::MatcherConfig;
use crate::fuzzy::levenshtein_bounded;
use crate::store::Store;
use crate::types::{IngredientRecord, QueryResult, Verdict};
use crate::utils::canonicalize;
use serde::Serialize;
use std::collections::HashSet;
use tracing::debug;

/// A dictionary name close enough to the input to be worth suggesting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub name: String,
    pub distance: usize,
}

/// Answers queries against one [`Store`].
///
/// Holds the store by reference; build one per store and share it freely,
/// `query` takes `&self` and touches no mutable state.
#[derive(Debug, Clone, Copy)]
pub struct Matcher<'s> {
    store: &'s Store,
    config: MatcherConfig,
}

impl<'s> Matcher<'s> {
    pub fn new(store: &'s Store) -> Self {
        Self::with_config(store, MatcherConfig::default())
    }

    pub fn with_config(store: &'s Store, config: MatcherConfig) -> Self {
        Self { store, config }
    }

    pub fn store(&self) -> &'s Store {
        self.store
    }

    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    /// Look up `raw`, falling back to suggestions on a miss.
    ///
    /// Callers are expected to reject blank input first (see
    /// [`crate::require_input`]). If one slips through it gets
    /// `NotFound` with no suggestions.
    pub fn query(&self, raw: &str) -> QueryResult {
        let canonical = canonicalize(raw);
        if canonical.is_empty() {
            debug!("blank query, skipping lookup");
            return QueryResult::NotFound(Vec::new());
        }

        if let Some(record) = self.store.get(&canonical) {
            debug!(name = %record.name, "exact match");
            return QueryResult::Found(Verdict::from(record));
        }

        let suggestions: Vec<String> = self
            .suggest(&canonical)
            .into_iter()
            .map(|suggestion| suggestion.name)
            .collect();
        debug!(query = %canonical, suggestions = suggestions.len(), "no exact match");
        QueryResult::NotFound(suggestions)
    }

    /// Ranked suggestions for an already-canonical input, with distances.
    ///
    /// Does not short-circuit on an exact hit: a dictionary name equal to
    /// `canonical` comes back first with distance 0.
    pub fn suggest(&self, canonical: &str) -> Vec<Suggestion> {
        rank(self.score(canonical), self.config.max_suggestions)
    }

    /// Every record within `max_distance`, in load order.
    #[cfg(feature = "parallel")]
    fn score(&self, canonical: &str) -> Vec<Suggestion> {
        use rayon::prelude::*;

        self.store
            .as_slice()
            .par_iter()
            .filter_map(|record| self.candidate(canonical, record))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    fn score(&self, canonical: &str) -> Vec<Suggestion> {
        self.store
            .all()
            .filter_map(|record| self.candidate(canonical, record))
            .collect()
    }

    fn candidate(&self, canonical: &str, record: &IngredientRecord) -> Option<Suggestion> {
        levenshtein_bounded(canonical, &record.name, self.config.max_distance).map(|distance| {
            Suggestion {
                name: record.name.clone(),
                distance,
            }
        })
    }
}

/// Stable sort by distance, drop repeated names, keep the first `limit`.
///
/// Names are unique in a [`Store`], but the dedup stays so the ranking holds
/// for any candidate list.
pub fn rank(mut candidates: Vec<Suggestion>, limit: usize) -> Vec<Suggestion> {
    candidates.sort_by_key(|candidate| candidate.distance);

    let mut seen = HashSet::with_capacity(candidates.len());
    candidates.retain(|candidate| seen.insert(candidate.name.clone()));
    candidates.truncate(limit);
    candidates
}
