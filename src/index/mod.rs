// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The search engine seam.
//!
//! The session only ever talks to an [`Index`]. [`DocIndex`] is the engine
//! this crate ships: an inverted index over the title and text fields with
//! prefix and fuzzy expansion. Tests drive the session through a fake
//! instead (see [`crate::testing::FakeIndex`]).

mod inverted;
pub mod scoring;

pub use inverted::DocIndex;

use crate::types::{Field, SearchResult};

/// Anything that can answer a query with results sorted by descending score.
pub trait Index {
    fn search(&self, query: &str, options: &SearchOptions<'_>) -> Vec<SearchResult>;
}

impl<I: Index + ?Sized> Index for &I {
    fn search(&self, query: &str, options: &SearchOptions<'_>) -> Vec<SearchResult> {
        (**self).search(query, options)
    }
}

impl<I: Index + ?Sized> Index for Box<I> {
    fn search(&self, query: &str, options: &SearchOptions<'_>) -> Vec<SearchResult> {
        (**self).search(query, options)
    }
}

/// Per-field score multipliers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldBoosts {
    pub title: f64,
    pub text: f64,
}

impl FieldBoosts {
    #[inline]
    pub fn get(&self, field: Field) -> f64 {
        match field {
            Field::Title => self.title,
            Field::Text => self.text,
        }
    }
}

impl Default for FieldBoosts {
    fn default() -> Self {
        Self {
            title: 100.0,
            text: 1.0,
        }
    }
}

/// Predicate run on scored results before they are returned.
pub type ResultFilter<'a> = &'a dyn Fn(&SearchResult) -> bool;

/// How a query is matched and which results survive.
#[derive(Clone, Copy)]
pub struct SearchOptions<'a> {
    /// Also match index terms that start with a query term.
    pub prefix: bool,
    /// Maximum edit distance for fuzzy matches. Zero disables fuzzy matching.
    pub fuzzy: usize,
    pub boost: FieldBoosts,
    pub filter: Option<ResultFilter<'a>>,
}

impl<'a> SearchOptions<'a> {
    pub fn with_filter(mut self, filter: ResultFilter<'a>) -> Self {
        self.filter = Some(filter);
        self
    }

    /// Does `result` pass the filter predicate (if any)?
    #[inline]
    pub fn admits(&self, result: &SearchResult) -> bool {
        self.filter.map_or(true, |filter| filter(result))
    }
}

impl Default for SearchOptions<'_> {
    fn default() -> Self {
        Self {
            prefix: true,
            fuzzy: 2,
            boost: FieldBoosts::default(),
            filter: None,
        }
    }
}

impl std::fmt::Debug for SearchOptions<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchOptions")
            .field("prefix", &self.prefix)
            .field("fuzzy", &self.fuzzy)
            .field("boost", &self.boost)
            .field("filter", &self.filter.is_some())
            .finish()
    }
}
