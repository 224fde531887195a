// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Tunable knobs for loading and matching.
//!
//! Everything has a default, so an empty config file (`{}`) is valid:
//!
//! ```json
//! {
//!   "maxDistance": 3,
//!   "maxSuggestions": 3,
//!   "duplicates": "last-wins"
//! }
//! ```

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Largest edit distance at which a dictionary name is still suggested.
pub const DEFAULT_MAX_DISTANCE: usize = 3;

/// Most suggestions returned for one miss.
pub const DEFAULT_MAX_SUGGESTIONS: usize = 3;

/// Settings for the fuzzy phase of [`crate::Matcher`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MatcherConfig {
    /// Candidates with a larger distance are dropped. Inclusive.
    pub max_distance: usize,
    /// Suggestion list is truncated to this many names.
    pub max_suggestions: usize,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            max_distance: DEFAULT_MAX_DISTANCE,
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
        }
    }
}

impl MatcherConfig {
    pub fn with_max_distance(mut self, max_distance: usize) -> Self {
        self.max_distance = max_distance;
        self
    }

    pub fn with_max_suggestions(mut self, max_suggestions: usize) -> Self {
        self.max_suggestions = max_suggestions;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_suggestions == 0 {
            return Err(ConfigError::Invalid(
                "maxSuggestions must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// What the loader does when two records canonicalize to the same name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DuplicatePolicy {
    /// Later record's fields replace the earlier one's. The entry keeps the
    /// load position of its first occurrence.
    #[default]
    LastWins,
    /// Later records with a known name are ignored.
    FirstWins,
    /// Fail the load with [`crate::MalformedDataError::DuplicateName`].
    Reject,
}

/// Full configuration file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    #[serde(flatten)]
    pub matcher: MatcherConfig,
    pub duplicates: DuplicatePolicy,
}

impl Config {
    pub fn from_json(source: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(source)?;
        config.matcher.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }
}
