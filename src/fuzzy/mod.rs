// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy matching: typo tolerance via edit distance.
//!
//! Two entry points: [`levenshtein`] computes the exact distance with the full
//! DP table, and [`levenshtein_bounded`] answers "how far, if at most `max`?"
//! with early exits. The matcher uses the bounded form since it discards
//! everything past the threshold anyway.

mod levenshtein;

pub use levenshtein::*;
