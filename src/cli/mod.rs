// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the lexline command-line interface.
//!
//! Two subcommands: `search` to index a file and print its best-matching
//! lines, and `inspect` to index a file and print what the index looks like.
//! Both take `-` to read stdin.

pub mod display;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "lexline",
    about = "Line-level TF-IDF search over a text file",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank the lines of a file against a query
    Search {
        /// Path to a text file, or `-` for stdin
        file: String,

        /// Search query
        query: String,

        /// Maximum number of lines to return
        #[arg(short, long, default_value = "10", env = "LEXLINE_LIMIT")]
        limit: usize,

        /// Emit results as JSON
        #[arg(long)]
        json: bool,

        /// Show source line numbers and scores next to each line
        #[arg(long)]
        scores: bool,
    },

    /// Print index statistics and vocabulary for a file
    Inspect {
        /// Path to a text file, or `-` for stdin
        file: String,

        /// Number of vocabulary terms to list
        #[arg(short, long, default_value = "20")]
        terms: usize,

        /// Emit statistics as JSON
        #[arg(long)]
        json: bool,
    },
}
