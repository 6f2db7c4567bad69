// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Relevance math.
//!
//! Every (query term, index term, field, document) hit scores
//! `weight × field_boost × bm25`. The weight says how the index term was
//! reached (exact, prefix, fuzzy); the boost says which field it was in.
//!
//! # Constants
//!
//! | Name           | Value | Role                                              |
//! |----------------|-------|---------------------------------------------------|
//! | `BM25_K`       | 1.2   | Term frequency saturation                         |
//! | `BM25_B`       | 0.7   | Field length normalization                        |
//! | `BM25_D`       | 0.5   | BM25+ floor, so long fields still score           |
//! | `PREFIX_WEIGHT`| 0.375 | Prefix expansions rank below exact hits           |
//! | `FUZZY_WEIGHT` | 0.45  | Typo expansions rank below exact hits             |
//!
//! The session drops everything under a score of 1.0, so these constants
//! also decide what counts as a result at all. Change them together.

pub const BM25_K: f64 = 1.2;
pub const BM25_B: f64 = 0.7;
pub const BM25_D: f64 = 0.5;

/// Weight of an index term that equals the query term.
pub const EXACT_WEIGHT: f64 = 1.0;

/// Base weight of an index term that extends the query term.
pub const PREFIX_WEIGHT: f64 = 0.375;

/// Base weight of an index term within the fuzzy edit budget.
pub const FUZZY_WEIGHT: f64 = 0.45;

/// BM25+ score of one term in one field of one document.
///
/// * `tf` - occurrences of the term in this field of this document
/// * `df` - documents whose field contains the term
/// * `doc_count` - documents in the index
/// * `field_len` / `avg_field_len` - token counts
pub fn bm25(tf: u32, df: usize, doc_count: usize, field_len: u32, avg_field_len: f64) -> f64 {
    let tf = f64::from(tf);
    let df = df as f64;
    let idf = (1.0 + (doc_count as f64 - df + 0.5) / (df + 0.5)).ln();
    let norm = if avg_field_len > 0.0 {
        f64::from(field_len) / avg_field_len
    } else {
        1.0
    };
    idf * (BM25_D + tf * (BM25_K + 1.0) / (tf + BM25_K * (1.0 - BM25_B + BM25_B * norm)))
}

/// Weight of a prefix expansion: longer completions are worth less.
pub fn prefix_weight(query_len: usize, term_len: usize) -> f64 {
    let extra = term_len.saturating_sub(query_len) as f64;
    PREFIX_WEIGHT * query_len as f64 / (query_len as f64 + 0.3 * extra)
}

/// Weight of a fuzzy expansion at edit `distance`.
pub fn fuzzy_weight(query_len: usize, distance: usize) -> f64 {
    FUZZY_WEIGHT * query_len as f64 / (query_len as f64 + distance as f64)
}
