//! Ingredient lookup with typo-tolerant suggestions.
//!
//! Given a free-text ingredient name, return its curated verdict (comment,
//! health, sustainability) if the name is known, or up to three close names
//! from the dictionary if it is not.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  store.rs   │────▶│  matcher.rs  │────▶│  report.rs   │
//! │ (load, get, │     │ (query,      │     │ (messages,   │
//! │  all)       │     │  suggest)    │     │  Report)     │
//! └─────────────┘     └──────────────┘     └──────────────┘
//!        │                   │
//!        ▼                   ▼
//! ┌──────────────────────────────────────┐
//! │  utils.rs (canonicalize)             │
//! │  fuzzy/ (levenshtein, bounded)       │
//! └──────────────────────────────────────┘
//! ```
//!
//! | Module     | Responsibility                                  |
//! |------------|-------------------------------------------------|
//! | `types`    | Records, ratings, `QueryResult`                 |
//! | `store`    | Immutable dictionary, duplicate policy          |
//! | `matcher`  | Exact phase, fuzzy phase, ranking               |
//! | `fuzzy`    | Edit distance                                   |
//! | `config`   | Threshold and suggestion cap                    |
//! | `report`   | Fallback message, "Did you mean" line           |
//!
//! # Usage
//!
//! ```
//! use cami::{Matcher, QueryResult, Store};
//!
//! let store = Store::load(r#"[
//!     {"name": "papaya", "comment": "Great!", "health": "good", "sustainability": "low impact"}
//! ]"#).unwrap();
//! let matcher = Matcher::new(&store);
//!
//! assert!(matcher.query(" Papaya ").is_found());
//! assert_eq!(
//!     matcher.query("papayya"),
//!     QueryResult::NotFound(vec!["papaya".to_string()])
//! );
//! ```

// Module declarations
pub mod config;
pub mod error;
pub mod fuzzy;
mod matcher;
pub mod report;
mod store;
pub mod testing;
mod types;
mod utils;

// Re-exports for public API
pub use config::{Config, DuplicatePolicy, MatcherConfig};
pub use error::{require_input, ConfigError, EmptyQuery, MalformedDataError, ParseRatingError};
pub use fuzzy::{levenshtein, levenshtein_bounded, levenshtein_within};
pub use matcher::{rank, Matcher, Suggestion};
pub use store::{Records, Store};
pub use types::{Health, IngredientRecord, QueryResult, Sustainability, Verdict};
pub use utils::{canonicalize, char_len, is_canonical};
