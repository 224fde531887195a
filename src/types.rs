// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Core data types: ingredient records, ratings, and query outcomes.
//!
//! Records are produced by the loader in `store.rs` and never change after
//! that. Ratings are closed enums so a typo in the data file fails the load
//! instead of leaking an unknown string into the presentation layer.

use crate::error::ParseRatingError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How healthy an ingredient is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Health {
    Good,
    Neutral,
    Caution,
}

impl Health {
    pub const ALL: [Health; 3] = [Health::Good, Health::Neutral, Health::Caution];

    pub fn as_str(self) -> &'static str {
        match self {
            Health::Good => "good",
            Health::Neutral => "neutral",
            Health::Caution => "caution",
        }
    }
}

impl fmt::Display for Health {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Health {
    type Err = ParseRatingError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "good" => Ok(Health::Good),
            "neutral" => Ok(Health::Neutral),
            "caution" => Ok(Health::Caution),
            _ => Err(ParseRatingError {
                field: "health",
                value: value.to_string(),
            }),
        }
    }
}

/// Environmental footprint of an ingredient.
///
/// Data files spell these with a space (`"low impact"`); the hyphenated
/// form is accepted too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sustainability {
    #[serde(rename = "low impact", alias = "low-impact")]
    LowImpact,
    #[serde(rename = "medium impact", alias = "medium-impact")]
    MediumImpact,
    #[serde(rename = "high impact", alias = "high-impact")]
    HighImpact,
}

impl Sustainability {
    pub const ALL: [Sustainability; 3] = [
        Sustainability::LowImpact,
        Sustainability::MediumImpact,
        Sustainability::HighImpact,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Sustainability::LowImpact => "low impact",
            Sustainability::MediumImpact => "medium impact",
            Sustainability::HighImpact => "high impact",
        }
    }
}

impl fmt::Display for Sustainability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sustainability {
    type Err = ParseRatingError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "low impact" | "low-impact" => Ok(Sustainability::LowImpact),
            "medium impact" | "medium-impact" => Ok(Sustainability::MediumImpact),
            "high impact" | "high-impact" => Ok(Sustainability::HighImpact),
            _ => Err(ParseRatingError {
                field: "sustainability",
                value: value.to_string(),
            }),
        }
    }
}

/// One known ingredient.
///
/// `name` is always canonical (see [`crate::canonicalize`]) once the record
/// sits in a [`crate::Store`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientRecord {
    pub name: String,
    pub comment: String,
    pub health: Health,
    pub sustainability: Sustainability,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,
}

/// Display fields of an exact match, copied verbatim from the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    pub comment: String,
    pub health: Health,
    pub sustainability: Sustainability,
    /// Empty when the record has no emoji.
    pub emoji: String,
}

impl From<&IngredientRecord> for Verdict {
    fn from(record: &IngredientRecord) -> Self {
        Verdict {
            comment: record.comment.clone(),
            health: record.health,
            sustainability: record.sustainability,
            emoji: record.emoji.clone().unwrap_or_default(),
        }
    }
}

/// Outcome of a single [`crate::Matcher::query`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryResult {
    /// The canonical input is a dictionary key.
    Found(Verdict),
    /// No exact match. Holds up to `max_suggestions` names, closest first.
    NotFound(Vec<String>),
}

impl QueryResult {
    pub fn is_found(&self) -> bool {
        matches!(self, QueryResult::Found(_))
    }

    pub fn verdict(&self) -> Option<&Verdict> {
        match self {
            QueryResult::Found(verdict) => Some(verdict),
            QueryResult::NotFound(_) => None,
        }
    }

    /// Suggested names; always empty for `Found`.
    pub fn suggestions(&self) -> &[String] {
        match self {
            QueryResult::Found(_) => &[],
            QueryResult::NotFound(names) => names,
        }
    }
}
