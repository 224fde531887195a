// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Output-boundary text shared by every presentation layer.
//!
//! The matcher returns data; this module turns it into the messages a user
//! sees. Keeping the templates here means the CLI and `--json` output can't
//! drift apart.

use crate::types::{Health, QueryResult, Sustainability, Verdict};
use serde::Serialize;

/// Message shown when the input is not a known ingredient. `raw` appears
/// verbatim, untrimmed and with its original casing.
pub fn fallback_message(raw: &str) -> String {
    format!(
        "🤷‍♀️ Hmm, no info on \"{}\" yet. Check the label and trust your gut!",
        raw
    )
}

/// `Did you mean: a, b, c?`, or `None` when there is nothing to suggest.
pub fn suggestion_line(suggestions: &[String]) -> Option<String> {
    if suggestions.is_empty() {
        None
    } else {
        Some(format!("Did you mean: {}?", suggestions.join(", ")))
    }
}

/// Comment prefixed with the emoji, if there is one.
pub fn headline(verdict: &Verdict) -> String {
    if verdict.emoji.is_empty() {
        verdict.comment.clone()
    } else {
        format!("{} {}", verdict.emoji, verdict.comment)
    }
}

/// Flat, serializable view of one query for machine consumers.
///
/// A hit carries the record's display fields (`comment`, `emoji`, ratings)
/// as separate keys; `message` is the rendered line. `emoji` is `""` when the
/// record has none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub input: String,
    pub found: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health: Option<Health>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sustainability: Option<Sustainability>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<String>,
}

impl Report {
    pub fn new(raw: &str, result: &QueryResult) -> Self {
        match result {
            QueryResult::Found(verdict) => Report {
                input: raw.to_string(),
                found: true,
                message: headline(verdict),
                comment: Some(verdict.comment.clone()),
                emoji: Some(verdict.emoji.clone()),
                health: Some(verdict.health),
                sustainability: Some(verdict.sustainability),
                suggestions: Vec::new(),
            },
            QueryResult::NotFound(suggestions) => Report {
                input: raw.to_string(),
                found: false,
                message: fallback_message(raw),
                comment: None,
                emoji: None,
                health: None,
                sustainability: None,
                suggestions: suggestions.clone(),
            },
        }
    }
}
