// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the cami command-line interface.
//!
//! Four subcommands: `check` to look up ingredients, `list` to print the
//! dictionary, `validate` to vet a data file before shipping it, and
//! `distance` to see how far apart two spellings are.

pub mod display;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "cami",
    about = "Is this ingredient approved? Lookup with typo suggestions",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Where the dictionary comes from.
#[derive(Args, Clone, Debug, Default)]
pub struct DataArgs {
    /// JSON file of ingredient records (defaults to the bundled dictionary)
    #[arg(short, long)]
    pub data: Option<String>,

    /// JSON config file (maxDistance, maxSuggestions, duplicates)
    #[arg(short, long)]
    pub config: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Look up one or more ingredients
    Check {
        /// Ingredient names, e.g. "Papaya"
        #[arg(required = true)]
        ingredients: Vec<String>,

        #[command(flatten)]
        data: DataArgs,

        /// Largest edit distance still suggested (overrides config)
        #[arg(long)]
        max_distance: Option<usize>,

        /// Most suggestions shown per miss (overrides config)
        #[arg(long)]
        max_suggestions: Option<usize>,

        /// Show edit distances next to suggestions
        #[arg(short, long)]
        verbose: bool,

        /// Print one JSON report per line instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// Print every dictionary entry in load order
    List {
        #[command(flatten)]
        data: DataArgs,
    },

    /// Load a data file and report problems
    Validate {
        /// Path to the JSON data file
        file: String,

        /// Treat duplicate names as an error instead of last-wins
        #[arg(long)]
        reject_duplicates: bool,
    },

    /// Print the edit distance between two spellings
    Distance {
        a: String,
        b: String,
    },
}
