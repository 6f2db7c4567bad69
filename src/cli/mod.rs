// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the docsift command-line interface.
//!
//! Three subcommands: `search` runs one query against a site's search index,
//! `replay` feeds a recorded event script through the debounced session to
//! show which keystrokes actually dispatch, and `inspect` summarizes a
//! document list.

pub mod display;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "docsift",
    about = "Search a documentation site's index the way its search modal does",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by commands that build a session.
#[derive(Args, Clone, Debug)]
pub struct SessionArgs {
    /// JSON config file (camelCase keys, e.g. {"debounceMs": 150})
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Base URL prepended to result locations (overrides config)
    #[arg(long)]
    pub base_url: Option<String>,

    /// HTML-escape document text in rendered results
    #[arg(long)]
    pub escape_html: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a query and print the rendered modal body
    Search {
        /// Path to search_index.js (or the equivalent JSON)
        file: PathBuf,

        /// Search query, exactly as typed
        query: String,

        /// Restrict to a category (repeatable)
        #[arg(short, long = "filter")]
        filters: Vec<String>,

        /// Print the result list as JSON instead of HTML
        #[arg(long, conflicts_with = "html")]
        json: bool,

        /// Print HTML even when stdout is a terminal
        #[arg(long)]
        html: bool,

        #[command(flatten)]
        session: SessionArgs,
    },

    /// Replay a JSON-lines event script through the debounced session
    ///
    /// Each line is {"at": <ms>, "input": "<value>"} or {"at": <ms>, "click": "<category>"}.
    Replay {
        /// Path to search_index.js (or the equivalent JSON)
        file: PathBuf,

        /// Event script (JSON lines)
        script: PathBuf,

        /// Also print each rendered fragment
        #[arg(long)]
        html: bool,

        #[command(flatten)]
        session: SessionArgs,
    },

    /// Summarize a document list
    Inspect {
        /// Path to search_index.js (or the equivalent JSON)
        file: PathBuf,
    },
}
