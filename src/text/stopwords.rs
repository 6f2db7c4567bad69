// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! English stop words.
//!
//! This is lunr's 2.1.3 list with the words that are also Julia identifiers
//! removed (`all any get in is only which` and the keywords `do else for let
//! where while with`). Those have to stay searchable in API docs.

use std::collections::HashSet;
use std::sync::LazyLock;

const WORDS: &[&str] = &[
    "a", "able", "about", "across", "after", "almost", "also", "am", "among", "an", "and", "are",
    "as", "at", "be", "because", "been", "but", "by", "can", "cannot", "could", "dear", "did",
    "does", "either", "ever", "every", "from", "got", "had", "has", "have", "he", "her", "hers",
    "him", "his", "how", "however", "i", "if", "into", "it", "its", "just", "least", "like",
    "likely", "may", "me", "might", "most", "must", "my", "neither", "no", "nor", "not", "of",
    "off", "often", "on", "or", "other", "our", "own", "rather", "said", "say", "says", "she",
    "should", "since", "so", "some", "than", "that", "the", "their", "them", "then", "there",
    "these", "they", "this", "tis", "to", "too", "twas", "us", "wants", "was", "we", "were",
    "what", "when", "who", "whom", "why", "will", "would", "yet", "you", "your",
];

static STOP_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| WORDS.iter().copied().collect());

/// Every stop word, lowercase.
pub fn stop_words() -> &'static [&'static str] {
    WORDS
}

/// Case-insensitive stop word check.
#[inline]
pub fn is_stop_word(token: &str) -> bool {
    if token.bytes().any(|b| b.is_ascii_uppercase()) {
        STOP_WORDS.contains(token.to_ascii_lowercase().as_str())
    } else {
        STOP_WORDS.contains(token)
    }
}
