// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The dictionary store: every known ingredient, loaded once.
//!
//! A `Store` is built from a JSON array of records, validated up front, and
//! never mutated afterwards. Lookups are a hash probe on the canonical name;
//! full scans walk the records in load order, which is the tie-break order
//! the matcher relies on.
//!
//! **Invariants** (checked at construction):
//! - every `name` is canonical and non-empty
//! - `emoji` is either absent or non-empty
//! - names are unique, resolved by [`DuplicatePolicy`]
//! - `by_name[name]` is the position of that record in `records`

use crate::config::DuplicatePolicy;
use crate::error::{MalformedDataError, ParseRatingError};
use crate::types::{Health, IngredientRecord, Sustainability};
use crate::utils::canonicalize;
use serde::Deserialize;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{debug, info, warn};

/// Dictionary shipped with the crate.
const EMBEDDED_DATA: &str = include_str!("../data/ingredients.json");

/// Iterator over records in load order. Call [`Store::all`] again to restart.
pub type Records<'a> = std::slice::Iter<'a, IngredientRecord>;

/// One entry as it appears in the source, before validation.
#[derive(Deserialize)]
struct RawRecord {
    name: Option<String>,
    comment: Option<String>,
    health: Option<String>,
    sustainability: Option<String>,
    #[serde(default)]
    emoji: Option<String>,
}

impl RawRecord {
    fn validate(self, index: usize) -> Result<IngredientRecord, MalformedDataError> {
        let missing = |field| MalformedDataError::MissingField { index, field };

        let name = self.name.ok_or_else(|| missing("name"))?;
        let comment = self.comment.ok_or_else(|| missing("comment"))?;
        let health: Health = self
            .health
            .ok_or_else(|| missing("health"))?
            .parse()
            .map_err(|e: ParseRatingError| e.at(index))?;
        let sustainability: Sustainability = self
            .sustainability
            .ok_or_else(|| missing("sustainability"))?
            .parse()
            .map_err(|e: ParseRatingError| e.at(index))?;

        Ok(IngredientRecord {
            name,
            comment,
            health,
            sustainability,
            emoji: self.emoji,
        })
    }
}

/// Immutable set of ingredient records keyed by canonical name.
#[derive(Debug, Clone, Default)]
pub struct Store {
    records: Vec<IngredientRecord>,
    by_name: HashMap<String, usize>,
}

impl Store {
    /// Parse a JSON array of records with the default duplicate policy.
    pub fn load(source: &str) -> Result<Self, MalformedDataError> {
        Self::load_with(source, DuplicatePolicy::default())
    }

    pub fn load_with(source: &str, policy: DuplicatePolicy) -> Result<Self, MalformedDataError> {
        let raw: Vec<RawRecord> = serde_json::from_str(source)?;
        Self::from_raw(raw, policy)
    }

    pub fn from_reader<R: Read>(
        reader: R,
        policy: DuplicatePolicy,
    ) -> Result<Self, MalformedDataError> {
        let raw: Vec<RawRecord> = serde_json::from_reader(reader)?;
        Self::from_raw(raw, policy)
    }

    pub fn from_path(
        path: impl AsRef<Path>,
        policy: DuplicatePolicy,
    ) -> Result<Self, MalformedDataError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading ingredient data");
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file), policy)
    }

    /// The bundled dictionary (`data/ingredients.json`).
    pub fn embedded() -> Result<Self, MalformedDataError> {
        Self::load(EMBEDDED_DATA)
    }

    /// Build from already-typed records, e.g. a synthetic test dictionary.
    ///
    /// Names are canonicalized here, same as for parsed sources.
    pub fn from_records(
        records: impl IntoIterator<Item = IngredientRecord>,
        policy: DuplicatePolicy,
    ) -> Result<Self, MalformedDataError> {
        let mut builder = StoreBuilder::new(policy);
        for (index, record) in records.into_iter().enumerate() {
            builder.push(index, record)?;
        }
        Ok(builder.finish())
    }

    fn from_raw(raw: Vec<RawRecord>, policy: DuplicatePolicy) -> Result<Self, MalformedDataError> {
        let mut builder = StoreBuilder::new(policy);
        builder.reserve(raw.len());
        for (index, entry) in raw.into_iter().enumerate() {
            builder.push(index, entry.validate(index)?)?;
        }
        Ok(builder.finish())
    }

    /// Exact lookup by canonical name. The caller canonicalizes.
    pub fn get(&self, name: &str) -> Option<&IngredientRecord> {
        self.by_name.get(name).map(|&slot| &self.records[slot])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Every record, in load order.
    pub fn all(&self) -> Records<'_> {
        self.records.iter()
    }

    pub fn as_slice(&self) -> &[IngredientRecord] {
        &self.records
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.records.iter().map(|record| record.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Accumulates validated records and applies the duplicate policy.
struct StoreBuilder {
    policy: DuplicatePolicy,
    records: Vec<IngredientRecord>,
    /// canonical name -> (slot in `records`, source index of first occurrence)
    seen: HashMap<String, (usize, usize)>,
    duplicates: usize,
}

impl StoreBuilder {
    fn new(policy: DuplicatePolicy) -> Self {
        Self {
            policy,
            records: Vec::new(),
            seen: HashMap::new(),
            duplicates: 0,
        }
    }

    fn reserve(&mut self, additional: usize) {
        self.records.reserve(additional);
        self.seen.reserve(additional);
    }

    fn push(&mut self, index: usize, mut record: IngredientRecord) -> Result<(), MalformedDataError> {
        record.name = canonicalize(&record.name);
        if record.name.is_empty() {
            return Err(MalformedDataError::EmptyName { index });
        }
        record.emoji = record.emoji.filter(|emoji| !emoji.is_empty());

        match self.seen.entry(record.name.clone()) {
            Entry::Vacant(slot) => {
                slot.insert((self.records.len(), index));
                self.records.push(record);
            }
            Entry::Occupied(existing) => {
                let (slot, first) = *existing.get();
                self.duplicates += 1;
                match self.policy {
                    DuplicatePolicy::LastWins => {
                        warn!(name = %record.name, first, second = index, "duplicate ingredient, keeping later record");
                        self.records[slot] = record;
                    }
                    DuplicatePolicy::FirstWins => {
                        warn!(name = %record.name, first, second = index, "duplicate ingredient, keeping earlier record");
                    }
                    DuplicatePolicy::Reject => {
                        return Err(MalformedDataError::DuplicateName {
                            name: record.name,
                            first,
                            second: index,
                        });
                    }
                }
            }
        }
        Ok(())
    }

    fn finish(self) -> Store {
        let by_name = self
            .seen
            .into_iter()
            .map(|(name, (slot, _))| (name, slot))
            .collect();
        info!(
            records = self.records.len(),
            duplicates = self.duplicates,
            "ingredient dictionary loaded"
        );
        Store {
            records: self.records,
            by_name,
        }
    }
}
