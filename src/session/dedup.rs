// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Location-based result deduplication.
//!
//! A page and its sections are separate documents, and a docstring can be
//! indexed more than once, so several results may point at the same URL.
//! Only the first one (the best-ranked, since the index sorts by score) is
//! shown.
//!
//! **Invariant**: no location is emitted twice, and emitted order is
//! first-seen order.

use std::collections::HashSet;

use crate::types::SearchResult;

/// Tracks which locations have been emitted during one result walk.
#[derive(Debug, Default)]
pub struct LocationDedup<'a> {
    seen: HashSet<&'a str>,
}

impl<'a> LocationDedup<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Should `result` be emitted?
    ///
    /// Results without a location are never emitted. Otherwise the first
    /// result per location is admitted and later ones are rejected.
    pub fn admit(&mut self, result: &'a SearchResult) -> bool {
        !result.location.is_empty() && self.seen.insert(result.location.as_str())
    }

    /// Distinct locations admitted so far.
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

/// The results that would be rendered, in order.
pub fn dedup_by_location(results: &[SearchResult]) -> Vec<&SearchResult> {
    let mut dedup = LocationDedup::new();
    results.iter().filter(|&result| dedup.admit(result)).collect()
}
