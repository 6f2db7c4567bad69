// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! String slicing for result previews.
//!
//! All lengths here are in characters, never bytes, so multi-byte text is
//! never split inside a code point.

use std::ops::Range;

use super::encode::escape_html;

/// Characters of the location shown in the link line.
pub const LINK_DISPLAY_CHARS: usize = 50;

/// Locations longer than this get an ellipsis. Deliberately not the same as
/// `LINK_DISPLAY_CHARS`: a 40-character location is shown whole, with `...`.
pub const LINK_ELLIPSIS_THRESHOLD: usize = 30;

/// Characters of context kept on each side of a match.
pub const SNIPPET_CONTEXT_CHARS: usize = 100;

const HIGHLIGHT_OPEN: &str = r#"<span class="search-result-highlight py-1">"#;
const HIGHLIGHT_CLOSE: &str = "</span>";

/// The link line under a result: truncated location, then `(page)` if any.
pub fn display_link(location: &str, page: &str) -> String {
    let mut link: String = location.chars().take(LINK_DISPLAY_CHARS).collect();
    if location.chars().count() > LINK_ELLIPSIS_THRESHOLD {
        link.push_str("...");
    }
    if !page.is_empty() {
        link.push_str(" (");
        link.push_str(page);
        link.push(')');
    }
    link
}

#[inline]
fn same_ignoring_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

/// Byte range of the first case-insensitive occurrence of `needle`.
///
/// The needle is taken literally. An empty needle matches at 0.
pub fn find_ignore_case(haystack: &str, needle: &str) -> Option<Range<usize>> {
    if needle.is_empty() {
        return Some(0..0);
    }

    'candidates: for (start, _) in haystack.char_indices() {
        let mut rest = haystack[start..].char_indices();
        let mut end = start;
        for n in needle.chars() {
            match rest.next() {
                Some((offset, h)) if same_ignoring_case(h, n) => end = start + offset + h.len_utf8(),
                _ => continue 'candidates,
            }
        }
        return Some(start..end);
    }

    None
}

/// The slice of `text` around the first match of `query`, or `None` when the
/// query does not occur in the text.
///
/// Keeps up to [`SNIPPET_CONTEXT_CHARS`] before the match start and up to
/// `query_len + SNIPPET_CONTEXT_CHARS` after it, clamped to the text.
pub fn snippet_window<'t>(text: &'t str, query: &str) -> Option<&'t str> {
    let found = find_ignore_case(text, query)?;
    let match_start = text[..found.start].chars().count();
    let query_len = query.chars().count();

    let first = match_start.saturating_sub(SNIPPET_CONTEXT_CHARS);
    let last = match_start + query_len + SNIPPET_CONTEXT_CHARS;

    let byte_at = |char_index: usize| {
        text.char_indices()
            .nth(char_index)
            .map_or(text.len(), |(byte, _)| byte)
    };
    Some(&text[byte_at(first)..byte_at(last)])
}

/// Snippet markup for a result: `...before<span …>match</span>after...`,
/// or an empty string when the query is not in the text.
pub fn highlighted_snippet(text: &str, query: &str, escape: bool) -> String {
    let Some(window) = snippet_window(text, query) else {
        return String::new();
    };
    if window.is_empty() {
        return String::new();
    }

    let piece = |s: &str| if escape { escape_html(s) } else { s.to_string() };
    let mut out = String::from("...");
    match find_ignore_case(window, query) {
        Some(hit) => {
            out.push_str(&piece(&window[..hit.start]));
            out.push_str(HIGHLIGHT_OPEN);
            out.push_str(&piece(&window[hit.clone()]));
            out.push_str(HIGHLIGHT_CLOSE);
            out.push_str(&piece(&window[hit.end..]));
        }
        None => out.push_str(&piece(window)),
    }
    out.push_str("...");
    out
}
