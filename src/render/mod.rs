// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! HTML fragments for the search modal.
//!
//! The markup and class names match the theme's stylesheet (Bulma utility
//! classes plus a few `search-*` classes), so a fragment can be dropped into
//! the modal body as-is.
//!
//! Document text is interpolated verbatim unless `escape_html` is set. Link
//! targets are always percent-encoded.

pub mod encode;
pub mod snippet;

use std::fmt::Write;

use crate::config::SessionConfig;
use crate::session::FilterSet;
use crate::types::SearchResult;

use encode::{escape_html, result_href};
use snippet::{display_link, highlighted_snippet};

pub const PLACEHOLDER: &str = r#"<div class="has-text-centered my-5 py-5">Type something to get started!</div>"#;
pub const NO_RESULTS: &str = r#"<div class="has-text-centered my-5 py-5">No result found!</div>"#;
pub const DIVIDER: &str = r#"<div class="search-divider w-100"></div>"#;

/// Categories rendered in plain (non-code) title style.
const PROSE_CATEGORIES: [&str; 2] = ["page", "section"];

/// Is this result a code entity (function, macro, type, ...)?
pub fn is_code_category(category: &str) -> bool {
    let lowered = category.to_lowercase();
    !PROSE_CATEGORIES.contains(&lowered.as_str())
}

/// Builds fragments for one site.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    base_url: String,
    escape: bool,
}

impl Renderer {
    pub fn new(base_url: impl Into<String>, escape: bool) -> Self {
        Self {
            base_url: base_url.into(),
            escape,
        }
    }

    pub fn from_config(config: &SessionConfig) -> Self {
        Self::new(config.base_url.clone(), config.escape_html)
    }

    fn text(&self, s: &str) -> String {
        if self.escape {
            escape_html(s)
        } else {
            s.to_string()
        }
    }

    /// The filter bar: one chip per known category, selected ones marked.
    pub fn chips(&self, categories: &[String], filters: &FilterSet) -> String {
        let mut chips = String::new();
        for category in categories {
            let class = if filters.contains(category) {
                "search-filter search-filter-selected"
            } else {
                "search-filter"
            };
            let _ = write!(
                chips,
                r#"<a href="javascript:;" class="{}"><span>{}</span></a>"#,
                class,
                self.text(category)
            );
        }

        format!(
            "<div class=\"is-flex gap-2 is-flex-wrap-wrap is-justify-content-flex-start is-align-items-center search-filters\">\n\
             <span class=\"is-size-6\">Filters:</span>\n{}\n</div>",
            chips
        )
    }

    /// One result card, followed by a divider.
    pub fn result(&self, result: &SearchResult, query: &str) -> String {
        let title_class = if is_code_category(&result.category) {
            "search-result-title has-text-weight-bold search-result-code-title"
        } else {
            "search-result-title has-text-weight-bold"
        };

        format!(
            "<a href=\"{href}\" class=\"search-result-link w-100 is-flex is-flex-direction-column gap-2 px-4 py-2\">\n\
             <div class=\"w-100 is-flex is-flex-wrap-wrap is-justify-content-space-between is-align-items-flex-start\">\n\
             <div class=\"{title_class}\">{title}</div>\n\
             <div class=\"property-search-result-badge\">{category}</div>\n\
             </div>\n\
             <p>{snippet}</p>\n\
             <div class=\"has-text-left\" style=\"font-size: smaller;\" title=\"{location}\"><i class=\"fas fa-link\"></i> {link}</div>\n\
             </a>\n{divider}",
            href = result_href(&self.base_url, &result.location),
            title_class = title_class,
            title = self.text(&result.title),
            category = self.text(&result.category),
            snippet = highlighted_snippet(&result.text, query, self.escape),
            location = self.text(&result.location),
            link = self.text(&display_link(&result.location, &result.page)),
            divider = DIVIDER,
        )
    }

    /// Filter bar, result count, and the rendered cards.
    pub fn results(&self, chips: &str, count: usize, cards: &str) -> String {
        format!(
            "<div class=\"is-flex is-flex-direction-column gap-2 is-align-items-flex-start\">\n\
             {chips}\n{divider}\n\
             <div class=\"is-size-6\">{count} result(s)</div>\n\
             <div class=\"is-clipped w-100 is-flex is-flex-direction-column gap-2 is-align-items-flex-start has-text-justified mt-1\">\n\
             {cards}</div>\n\
             </div>",
            chips = chips,
            divider = DIVIDER,
            count = count,
            cards = cards,
        )
    }

    /// Filter bar, a zero count, and the "no result" notice.
    pub fn no_results(&self, chips: &str) -> String {
        format!(
            "<div class=\"is-flex is-flex-direction-column gap-2 is-align-items-flex-start\">\n\
             {chips}\n{divider}\n\
             <div class=\"is-size-6\">0 result(s)</div>\n\
             </div>\n{notice}",
            chips = chips,
            divider = DIVIDER,
            notice = NO_RESULTS,
        )
    }
}
