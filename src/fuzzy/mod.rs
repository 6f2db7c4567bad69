// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy matching: typo tolerance via bounded edit distance.
//!
//! The vocabulary of a documentation site is small enough (a few thousand
//! terms) that a linear scan with an early-exit Levenshtein beats building an
//! automaton.

mod levenshtein;

pub use levenshtein::*;
