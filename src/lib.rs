// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search widget core for static documentation sites.
//!
//! A site generator emits a flat list of documents (pages, sections, and
//! docstrings). This crate indexes that list, turns a stream of UI events into
//! debounced queries, and renders the results as HTML fragments with
//! highlighted snippets.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │   text/     │────▶│   index/     │────▶│   session/   │────▶│   render/    │
//! │ (tokenize,  │     │ (Index trait,│     │ (debounce,   │     │ (chips,      │
//! │ process_term│     │  DocIndex)   │     │  filters,    │     │  snippets,   │
//! │  stopwords) │     │              │     │  dedup)      │     │  links)      │
//! └─────────────┘     └──────────────┘     └──────────────┘     └──────────────┘
//! ```
//!
//! The index is consumed only through the [`Index`] trait, so the session can
//! be driven by any engine (or a fake in tests).
//!
//! # Usage
//!
//! ```ignore
//! use docsift::{load, SearchSession, SessionConfig};
//! use std::time::Duration;
//!
//! let docs = load::parse_documents(&raw)?;
//! let mut session = SearchSession::from_documents(docs, SessionConfig::default())?;
//!
//! session.on_input("add!", Duration::from_millis(0));
//! if let Some(view) = session.poll(Duration::from_millis(300)) {
//!     println!("{}", view.html());
//! }
//! ```

pub mod config;
pub mod error;
pub mod fuzzy;
pub mod index;
pub mod load;
pub mod render;
pub mod session;
pub mod testing;
pub mod text;
mod types;

#[cfg(feature = "wasm")]
mod wasm;

pub use config::SessionConfig;
pub use error::{Error, Result};
pub use index::{DocIndex, FieldBoosts, Index, SearchOptions};
pub use session::{FilterSet, Phase, SearchSession, SearchView};
pub use types::{Document, Field, SearchResult, TermMatch};
