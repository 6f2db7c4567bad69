// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Edit distance with early exits.
//!
//! `|len(a) - len(b)|` is a lower bound on edit distance, so strings whose
//! lengths differ by more than the budget are rejected before the DP runs.
//! Inside the DP, once every cell of a row exceeds the budget the rest of the
//! table can only grow, so we stop there too.

/// Edit distance between `a` and `b` if it is at most `max`.
///
/// Counts characters, not bytes. Returns `None` as soon as the distance is
/// known to exceed `max`.
pub fn levenshtein_bounded(a: &str, b: &str, max: usize) -> Option<usize> {
    let a_len = a.chars().count();
    let b_len = b.chars().count();

    if a_len.abs_diff(b_len) > max {
        return None;
    }
    if a_len == 0 || b_len == 0 {
        return Some(a_len.max(b_len));
    }

    let b_chars: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b_len).collect();

    for (i, ac) in a.chars().enumerate() {
        let mut diag = row[0];
        row[0] = i + 1;
        let mut row_min = row[0];

        for (j, &bc) in b_chars.iter().enumerate() {
            let above = row[j + 1];
            let cost = usize::from(ac != bc);
            row[j + 1] = (above + 1).min(row[j] + 1).min(diag + cost);
            diag = above;
            row_min = row_min.min(row[j + 1]);
        }

        if row_min > max {
            return None;
        }
    }

    let distance = row[b_len];
    (distance <= max).then_some(distance)
}

/// Are these strings within `max` edits of each other?
#[inline]
pub fn levenshtein_within(a: &str, b: &str, max: usize) -> bool {
    levenshtein_bounded(a, b, max).is_some()
}
