// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Tokenizing and term processing.
//!
//! `.` is a separator so that a qualified name like `Documenter.Anchors.add!`
//! is findable by `add!` alone, not only by the full qualification.

use super::stopwords::is_stop_word;

#[inline]
fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == '-' || c == '.'
}

/// Characters that survive edge trimming. `@` and `!` carry meaning in macro
/// and mutating-function names.
#[inline]
fn is_term_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '@' || c == '!'
}

/// Split on runs of whitespace, `-` and `.`. Empty pieces are skipped.
pub fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    text.split(is_separator).filter(|piece| !piece.is_empty())
}

/// Map a raw token to its index term, or `None` to discard it.
///
/// Stop words are checked on the raw token (case-insensitively), then the
/// token is trimmed of leading/trailing characters outside `[A-Za-z0-9@!]`
/// and lowercased. A token that trims down to nothing is discarded.
pub fn process_term(token: &str) -> Option<String> {
    if is_stop_word(token) {
        return None;
    }

    let trimmed = token.trim_matches(|c: char| !is_term_char(c));
    if trimmed.is_empty() {
        return None;
    }

    Some(trimmed.to_lowercase())
}
