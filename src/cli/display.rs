// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display for docsift CLI.
//!
//! When stdout is a terminal, `search` prints a readable listing instead of
//! the modal's HTML: bold titles, dim links, the snippet with the match in
//! yellow. Respects `NO_COLOR`, and pipes always get plain HTML.

use std::sync::OnceLock;

use docsift::render::is_code_category;
use docsift::render::snippet::{display_link, find_ignore_case, snippet_window};
use docsift::SearchResult;

pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const MAGENTA: &str = "\x1b[35m";
}

use colors::*;

static COLOR: OnceLock<bool> = OnceLock::new();

/// Is stdout an interactive terminal?
pub fn stdout_is_tty() -> bool {
    atty::is(atty::Stream::Stdout)
}

/// Should output be colored? (cached)
pub fn use_color() -> bool {
    *COLOR.get_or_init(|| stdout_is_tty() && std::env::var_os("NO_COLOR").is_none())
}

fn paint(style: &str, text: &str) -> String {
    if use_color() {
        format!("{}{}{}", style, text, RESET)
    } else {
        text.to_string()
    }
}

/// Snippet as plain text with the first match painted.
fn terminal_snippet(text: &str, query: &str) -> Option<String> {
    let window = snippet_window(text, query)?;
    let hit = find_ignore_case(window, query)?;
    Some(format!(
        "...{}{}{}...",
        &window[..hit.start],
        paint(&format!("{}{}", BOLD, YELLOW), &window[hit.clone()]),
        &window[hit.end..]
    ))
}

/// Human-readable listing of rendered results.
pub fn format_results(results: &[SearchResult], query: &str) -> String {
    let mut out = format!("{}\n", paint(BOLD, &format!("{} result(s)", results.len())));
    if results.is_empty() {
        out.push_str(&paint(DIM, "No result found!"));
        out.push('\n');
        return out;
    }

    for result in results {
        let title_style = if is_code_category(&result.category) { CYAN } else { BOLD };
        out.push('\n');
        out.push_str(&format!(
            "{}  {}  {}\n",
            paint(title_style, &result.title),
            paint(MAGENTA, &format!("[{}]", result.category)),
            paint(DIM, &format!("{:.2}", result.score)),
        ));
        if let Some(snippet) = terminal_snippet(&result.text, query) {
            out.push_str(&format!("  {}\n", snippet.replace('\n', " ")));
        }
        out.push_str(&format!(
            "  {}\n",
            paint(DIM, &display_link(&result.location, &result.page))
        ));
    }
    out
}
