//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::config::DuplicatePolicy;
use crate::store::Store;
use crate::types::{Health, IngredientRecord, Sustainability};

/// Create a record with default ratings (good, low impact) and no emoji.
///
/// This is the canonical implementation used across all tests.
pub fn make_record(name: &str, comment: &str) -> IngredientRecord {
    IngredientRecord {
        name: name.to_string(),
        comment: comment.to_string(),
        health: Health::Good,
        sustainability: Sustainability::LowImpact,
        emoji: None,
    }
}

/// Create a record with explicit ratings.
pub fn make_rated_record(
    name: &str,
    health: Health,
    sustainability: Sustainability,
) -> IngredientRecord {
    IngredientRecord {
        name: name.to_string(),
        comment: format!("Comment for {}", name),
        health,
        sustainability,
        emoji: None,
    }
}

/// Build a store holding one default record per name, in the given order.
///
/// Panics on duplicate or blank names; synthetic dictionaries are expected
/// to be well formed.
pub fn store_of(names: &[&str]) -> Store {
    let records = names
        .iter()
        .map(|name| make_record(name, &format!("Comment for {}", name)));
    Store::from_records(records, DuplicatePolicy::Reject).expect("synthetic store is well formed")
}

/// Serialize records to the JSON shape `Store::load` reads.
pub fn to_json(records: &[IngredientRecord]) -> String {
    serde_json::to_string(records).expect("records serialize")
}
