// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! In-memory inverted index over the title and text fields.
//!
//! # Invariants
//!
//! 1. **UNIQUE_IDS**: no two stored documents share an id (`add` rejects it)
//! 2. **NON_EMPTY**: every vocabulary term has at least one posting
//! 3. **SLOTS_ALIGNED**: `field_lengths.len() == docs.len()`; posting keys are
//!    slots into both
//!
//! The vocabulary is a `BTreeMap` so prefix expansion is a range scan, and
//! postings are `BTreeMap`s so result order never depends on hash seeds.

use std::collections::{BTreeMap, HashMap};

use tracing::debug;

use super::scoring::{bm25, fuzzy_weight, prefix_weight, EXACT_WEIGHT};
use super::{Index, SearchOptions};
use crate::error::{Error, Result};
use crate::fuzzy::levenshtein_bounded;
use crate::text::{analyze, process_term, tokenize};
use crate::types::{Document, Field, SearchResult};

/// slot → term frequency, one map per field.
type Postings = [BTreeMap<usize, u32>; 2];

/// An index term reached from a query term, and what reaching it is worth.
struct Expansion<'a> {
    term: &'a str,
    postings: &'a Postings,
    weight: f64,
}

#[derive(Debug, Default)]
pub struct DocIndex {
    docs: Vec<Document>,
    slot_by_id: HashMap<usize, usize>,
    terms: BTreeMap<String, Postings>,
    field_lengths: Vec<[u32; 2]>,
    total_lengths: [u64; 2],
}

impl DocIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index over `docs` in one go.
    pub fn from_documents(docs: impl IntoIterator<Item = Document>) -> Result<Self> {
        let mut index = Self::new();
        index.add_all(docs)?;
        Ok(index)
    }

    /// Index one document. Fails if its id is already taken.
    pub fn add(&mut self, doc: Document) -> Result<()> {
        if self.slot_by_id.contains_key(&doc.id) {
            return Err(Error::DuplicateId(doc.id));
        }

        let slot = self.docs.len();
        let mut lengths = [0u32; 2];

        for field in Field::ALL {
            let value = match field {
                Field::Title => doc.title.as_str(),
                Field::Text => doc.text.as_str(),
            };

            let mut len = 0u32;
            for token in tokenize(value) {
                len += 1;
                if let Some(term) = process_term(token) {
                    let postings = self.terms.entry(term).or_default();
                    *postings[field.slot()].entry(slot).or_insert(0) += 1;
                }
            }
            lengths[field.slot()] = len;
            self.total_lengths[field.slot()] += u64::from(len);
        }

        self.slot_by_id.insert(doc.id, slot);
        self.field_lengths.push(lengths);
        self.docs.push(doc);
        Ok(())
    }

    /// Index every document, stopping at the first duplicate id.
    pub fn add_all(&mut self, docs: impl IntoIterator<Item = Document>) -> Result<()> {
        for doc in docs {
            self.add(doc)?;
        }
        debug!(
            docs = self.docs.len(),
            terms = self.terms.len(),
            "index built"
        );
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    /// Number of distinct index terms.
    pub fn term_count(&self) -> usize {
        self.terms.len()
    }

    pub fn document(&self, id: usize) -> Option<&Document> {
        self.slot_by_id.get(&id).map(|&slot| &self.docs[slot])
    }

    pub fn documents(&self) -> &[Document] {
        &self.docs
    }

    fn average_length(&self, field: Field) -> f64 {
        if self.docs.is_empty() {
            0.0
        } else {
            self.total_lengths[field.slot()] as f64 / self.docs.len() as f64
        }
    }

    /// Every index term a query term reaches under `options`.
    ///
    /// A term reached by prefix is not reached again by fuzzy matching, so
    /// no index term is scored twice for the same query term.
    fn expand<'a>(&'a self, query_term: &str, options: &SearchOptions<'_>) -> Vec<Expansion<'a>> {
        let query_len = query_term.chars().count();
        let mut expansions = Vec::new();

        if let Some((term, postings)) = self.terms.get_key_value(query_term) {
            expansions.push(Expansion {
                term,
                postings,
                weight: EXACT_WEIGHT,
            });
        }

        if options.prefix {
            let completions = self
                .terms
                .range::<str, _>((std::ops::Bound::Excluded(query_term), std::ops::Bound::Unbounded))
                .take_while(|(term, _)| term.starts_with(query_term));
            for (term, postings) in completions {
                expansions.push(Expansion {
                    term,
                    postings,
                    weight: prefix_weight(query_len, term.chars().count()),
                });
            }
        }

        if options.fuzzy > 0 {
            for (term, postings) in &self.terms {
                if options.prefix && term.starts_with(query_term) {
                    continue;
                }
                match levenshtein_bounded(query_term, term, options.fuzzy) {
                    Some(distance) if distance > 0 => expansions.push(Expansion {
                        term,
                        postings,
                        weight: fuzzy_weight(query_len, distance),
                    }),
                    _ => {}
                }
            }
        }

        expansions
    }
}

impl Index for DocIndex {
    fn search(&self, query: &str, options: &SearchOptions<'_>) -> Vec<SearchResult> {
        let mut query_terms = analyze(query);
        let mut seen = std::collections::HashSet::new();
        query_terms.retain(|term| seen.insert(term.clone()));

        let doc_count = self.docs.len();
        let averages = [self.average_length(Field::Title), self.average_length(Field::Text)];
        let mut hits: BTreeMap<usize, SearchResult> = BTreeMap::new();

        for query_term in &query_terms {
            for expansion in self.expand(query_term, options) {
                for field in Field::ALL {
                    let field_postings = &expansion.postings[field.slot()];
                    let df = field_postings.len();
                    let boost = options.boost.get(field);

                    for (&slot, &tf) in field_postings {
                        let raw = bm25(
                            tf,
                            df,
                            doc_count,
                            self.field_lengths[slot][field.slot()],
                            averages[field.slot()],
                        );
                        let hit = hits
                            .entry(slot)
                            .or_insert_with(|| SearchResult::from_document(&self.docs[slot]));
                        hit.score += expansion.weight * boost * raw;
                        if !hit.terms.contains(query_term) {
                            hit.terms.push(query_term.clone());
                        }
                        hit.record_match(expansion.term, field);
                    }
                }
            }
        }

        let mut results: Vec<SearchResult> = hits
            .into_values()
            .map(|mut hit| {
                // Documents matching more of the query rank higher.
                hit.score *= hit.terms.len() as f64;
                hit
            })
            .filter(|hit| options.admits(hit))
            .collect();

        results.sort_by(|a, b| b.score.total_cmp(&a.score).then(a.id.cmp(&b.id)));
        debug!(query, terms = query_terms.len(), results = results.len(), "index search");
        results
    }
}
