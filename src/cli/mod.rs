// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the cardex command-line interface.
//!
//! Four subcommands: `search` to query a character export, `threads` to
//! rebuild review threads, and `variants` / `normalize` to see what the
//! expander and normalizer do with a piece of text.

pub mod display;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "cardex",
    about = "Fuzzy, transliteration-aware character catalog search",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search a JSON export of characters
    Search {
        /// Path to a JSON array of characters (or `{"items": [...]}`)
        file: PathBuf,

        /// Search query
        query: String,

        /// Maximum number of results to show
        #[arg(short, long, default_value = "10")]
        limit: usize,

        /// Vocabulary JSON file with extra synonyms
        #[arg(long)]
        vocab: Option<PathBuf>,

        /// Use the built-in two-tier matcher even if the delegated one is available
        #[arg(long)]
        builtin: bool,

        /// Print results as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Rebuild review threads from a JSON export of reviews
    Threads {
        /// Path to a JSON array of reviews (or `{"items": [...]}`)
        file: PathBuf,

        /// Print threads as JSON instead of a tree
        #[arg(long)]
        json: bool,
    },

    /// Show the variants a query expands to
    Variants {
        /// Query to expand
        query: String,

        /// Vocabulary JSON file with extra synonyms
        #[arg(long)]
        vocab: Option<PathBuf>,
    },

    /// Print the normalized form of a text
    Normalize {
        /// Text to normalize
        text: String,
    },
}
