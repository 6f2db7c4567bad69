// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text analysis shared by indexing and querying.
//!
//! Both sides must agree exactly: a term indexed as `add!` is only reachable
//! if the query side produces `add!` too. So there is one tokenizer and one
//! term processor, and [`analyze`] composes them for everyone.

pub mod stopwords;
mod tokenizer;

pub use stopwords::is_stop_word;
pub use tokenizer::{process_term, tokenize};

/// Tokenize `text` and process every token, dropping the discarded ones.
///
/// ```ignore
/// assert_eq!(analyze("The Documenter.Anchors.add! macro"), ["documenter", "anchors", "add!", "macro"]);
/// ```
pub fn analyze(text: &str) -> Vec<String> {
    tokenize(text).filter_map(process_term).collect()
}
