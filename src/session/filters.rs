// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Category filters selected in the UI.

use std::collections::BTreeSet;

use crate::types::SearchResult;

/// Categories currently toggled on. Empty means "no restriction".
///
/// Membership is exact string equality: `"Page"` does not select `"page"`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSet {
    selected: BTreeSet<String>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip `category` on or off. Returns whether it is now selected.
    pub fn toggle(&mut self, category: &str) -> bool {
        if self.selected.remove(category) {
            false
        } else {
            self.selected.insert(category.to_string());
            true
        }
    }

    pub fn contains(&self, category: &str) -> bool {
        self.selected.contains(category)
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.selected.iter().map(String::as_str)
    }

    /// Does `result` survive the session's result predicate?
    ///
    /// The score must reach `min_score`; when any category is selected the
    /// result's category must be one of them.
    pub fn admits(&self, result: &SearchResult, min_score: f64) -> bool {
        result.score >= min_score && (self.is_empty() || self.contains(&result.category))
    }
}

impl<S: Into<String>> FromIterator<S> for FilterSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            selected: iter.into_iter().map(Into::into).collect(),
        }
    }
}
