// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types.
//!
//! | Error                | When                         | Recoverable |
//! |----------------------|------------------------------|-------------|
//! | `MalformedDataError` | loading the dictionary       | no, fatal   |
//! | `ConfigError`        | loading matcher config       | no, fatal   |
//! | `EmptyQuery`         | caller passed blank input    | caller's job|
//!
//! Matching itself never fails: every input produces a result.

use thiserror::Error;

/// The dictionary source could not be turned into a [`crate::Store`].
///
/// Record indices are zero-based positions in the source array.
#[derive(Debug, Error)]
pub enum MalformedDataError {
    #[error("failed to read ingredient data: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid ingredient JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("record {index}: missing required field `{field}`")]
    MissingField { index: usize, field: &'static str },

    #[error("record {index}: name is empty after trimming")]
    EmptyName { index: usize },

    #[error("record {index}: unknown {field} rating '{value}'")]
    InvalidRating {
        index: usize,
        field: &'static str,
        value: String,
    },

    #[error("duplicate ingredient '{name}' at records {first} and {second}")]
    DuplicateName {
        name: String,
        first: usize,
        second: usize,
    },
}

/// A rating string that is not one of the known levels.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {field} rating '{value}'")]
pub struct ParseRatingError {
    pub field: &'static str,
    pub value: String,
}

impl ParseRatingError {
    pub(crate) fn at(self, index: usize) -> MalformedDataError {
        MalformedDataError::InvalidRating {
            index,
            field: self.field,
            value: self.value,
        }
    }
}

/// Matcher configuration could not be loaded or is out of range.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Input was empty after trimming. Presentation layers reject this before
/// calling [`crate::Matcher::query`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("ingredient name must not be empty")]
pub struct EmptyQuery;

/// Reject blank input at the caller boundary.
pub fn require_input(raw: &str) -> Result<&str, EmptyQuery> {
    if raw.trim().is_empty() {
        Err(EmptyQuery)
    } else {
        Ok(raw)
    }
}
