// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! Always compiled but hidden from documentation.

#![doc(hidden)]

use std::cell::{Cell, RefCell};

use crate::index::{Index, SearchOptions};
use crate::types::{Document, SearchResult};

/// A document with a location derived from its id and no page.
pub fn make_doc(id: usize, title: &str, text: &str, category: &str) -> Document {
    Document {
        id,
        location: format!("doc/{}/", id),
        title: title.to_string(),
        text: text.to_string(),
        category: category.to_string(),
        page: String::new(),
    }
}

/// A scored result, as an index would return it.
pub fn make_result(id: usize, location: &str, category: &str, score: f64) -> SearchResult {
    SearchResult {
        id,
        score,
        terms: Vec::new(),
        matches: Vec::new(),
        location: location.to_string(),
        title: format!("Result {}", id),
        text: String::new(),
        category: category.to_string(),
        page: String::new(),
    }
}

/// An index that returns canned results.
///
/// The filter predicate from the options is still applied, so the session's
/// score threshold and category filtering are exercised. Every call is
/// recorded.
#[derive(Debug, Default)]
pub struct FakeIndex {
    results: Vec<SearchResult>,
    calls: Cell<usize>,
    queries: RefCell<Vec<String>>,
}

impl FakeIndex {
    pub fn new(results: Vec<SearchResult>) -> Self {
        Self {
            results,
            ..Self::default()
        }
    }

    /// How many times `search` ran.
    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    /// Every query string passed to `search`, oldest first.
    pub fn queries(&self) -> Vec<String> {
        self.queries.borrow().clone()
    }
}

impl Index for FakeIndex {
    fn search(&self, query: &str, options: &SearchOptions<'_>) -> Vec<SearchResult> {
        self.calls.set(self.calls.get() + 1);
        self.queries.borrow_mut().push(query.to_string());
        self.results
            .iter()
            .filter(|result| options.admits(result))
            .cloned()
            .collect()
    }
}
