// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Documents in, results out.
//!
//! `Document` is what the site generator hands us. `SearchResult` is what the
//! index hands back: the stored fields of a document plus a score and the
//! terms that got it there. Both are serde types because they cross the WASM
//! boundary and the CLI's `--json` output.

use serde::{Deserialize, Serialize};

/// One entry of the site's search index.
///
/// The `id` is not part of the generator's output. It is assigned at load time
/// from the entry's position, so it is unique and stable for the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    #[serde(default)]
    pub id: usize,
    pub location: String,
    pub title: String,
    #[serde(default)]
    pub text: String,
    pub category: String,
    #[serde(default)]
    pub page: String,
}

/// The two indexed fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Title,
    Text,
}

impl Field {
    pub const ALL: [Field; 2] = [Field::Title, Field::Text];

    /// Position in per-field arrays.
    #[inline]
    pub fn slot(self) -> usize {
        match self {
            Field::Title => 0,
            Field::Text => 1,
        }
    }
}

/// An index term that contributed to a result, with the fields it was found in.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TermMatch {
    pub term: String,
    pub fields: Vec<Field>,
}

/// A scored document projection.
///
/// Ephemeral: produced per query and never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub id: usize,
    pub score: f64,
    /// Processed query terms that matched something.
    pub terms: Vec<String>,
    /// Index terms that matched, in the order they were first scored.
    pub matches: Vec<TermMatch>,
    pub location: String,
    pub title: String,
    pub text: String,
    pub category: String,
    pub page: String,
}

impl SearchResult {
    /// Project a document's stored fields into an unscored result.
    pub fn from_document(doc: &Document) -> Self {
        Self {
            id: doc.id,
            score: 0.0,
            terms: Vec::new(),
            matches: Vec::new(),
            location: doc.location.clone(),
            title: doc.title.clone(),
            text: doc.text.clone(),
            category: doc.category.clone(),
            page: doc.page.clone(),
        }
    }

    /// Record that `term` matched in `field`, keeping first-seen order.
    pub(crate) fn record_match(&mut self, term: &str, field: Field) {
        match self.matches.iter_mut().find(|m| m.term == term) {
            Some(existing) => {
                if !existing.fields.contains(&field) {
                    existing.fields.push(field);
                }
            }
            None => self.matches.push(TermMatch {
                term: term.to_string(),
                fields: vec![field],
            }),
        }
    }
}
