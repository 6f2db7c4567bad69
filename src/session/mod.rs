// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The search session: one per page load.
//!
//! Owns everything the widget mutates (query text, selected filters, the
//! debounce timer, the cached filter bar) and turns UI events into rendered
//! fragments.
//!
//! # State machine
//!
//! ```text
//!            keystroke / filter click (re-arm)
//!              ┌──────────────┐
//!              ▼              │
//!   Idle ──▶ Debouncing ──────┘
//!    ▲          │ poll(now ≥ deadline)
//!    │          ▼
//!    └────── Executed   (update routine runs, view replaced)
//! ```
//!
//! Everything happens on the caller's thread. Events only arm the timer;
//! searching happens in [`SearchSession::poll`] once the timer is due, so a
//! burst of keystrokes costs one search with the last value typed.

pub mod debounce;
pub mod dedup;
pub mod filters;

use std::time::Duration;

use tracing::debug;

pub use debounce::Debouncer;
pub use dedup::{dedup_by_location, LocationDedup};
pub use filters::FilterSet;

use crate::config::SessionConfig;
use crate::error::Result;
use crate::index::{DocIndex, Index};
use crate::load::categories;
use crate::render::{Renderer, PLACEHOLDER};
use crate::types::{Document, SearchResult};

/// Where the dispatcher is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nothing pending.
    Idle,
    /// A search is scheduled.
    Debouncing,
    /// The update routine is running (observable only from inside it).
    Executed,
}

/// What the modal body should show.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchView {
    /// Empty query: the "type something" prompt, centered.
    Placeholder { html: String },
    /// A query ran. `count` is the number of distinct locations rendered.
    Results { html: String, count: usize },
}

impl SearchView {
    pub fn html(&self) -> &str {
        match self {
            SearchView::Placeholder { html } | SearchView::Results { html, .. } => html,
        }
    }

    /// Whether the container should be centered (`is-justify-content-center`).
    pub fn is_centered(&self) -> bool {
        matches!(self, SearchView::Placeholder { .. })
    }

    pub fn count(&self) -> usize {
        match self {
            SearchView::Placeholder { .. } => 0,
            SearchView::Results { count, .. } => *count,
        }
    }
}

pub struct SearchSession<I> {
    index: I,
    config: SessionConfig,
    renderer: Renderer,
    categories: Vec<String>,
    filters: FilterSet,
    query: String,
    timer: Debouncer<String>,
    phase: Phase,
    chips: String,
    view: SearchView,
    searches: usize,
}

impl SearchSession<DocIndex> {
    /// Index `docs` and start a session over them.
    pub fn from_documents(docs: Vec<Document>, config: SessionConfig) -> Result<Self> {
        config.validate()?;
        let known = categories(&docs);
        let index = DocIndex::from_documents(docs)?;
        Ok(Self::new(index, known, config))
    }
}

impl<I: Index> SearchSession<I> {
    /// Start a session over an existing index.
    ///
    /// `categories` are the filter chips, in display order.
    pub fn new(index: I, categories: Vec<String>, config: SessionConfig) -> Self {
        let renderer = Renderer::from_config(&config);
        let filters = FilterSet::new();
        let chips = renderer.chips(&categories, &filters);

        Self {
            index,
            timer: Debouncer::new(config.debounce()),
            config,
            renderer,
            categories,
            filters,
            query: String::new(),
            phase: Phase::Idle,
            chips,
            view: SearchView::Placeholder {
                html: PLACEHOLDER.to_string(),
            },
            searches: 0,
        }
    }

    pub fn index(&self) -> &I {
        &self.index
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn filters(&self) -> &FilterSet {
        &self.filters
    }

    /// The value of the search input as of the last event.
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The last rendered view.
    pub fn view(&self) -> &SearchView {
        &self.view
    }

    /// Current filter bar markup.
    pub fn chips(&self) -> &str {
        &self.chips
    }

    /// How many times the index has been queried.
    pub fn searches(&self) -> usize {
        self.searches
    }

    /// When the caller should next [`poll`](Self::poll), if anything is pending.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.timer.deadline()
    }

    /// The search input changed (keyup).
    pub fn on_input(&mut self, value: &str, now: Duration) {
        self.query = value.to_string();
        self.schedule(now);
    }

    /// A filter chip was clicked. The chip flips immediately; the search
    /// follows on the debounce path.
    pub fn on_filter_click(&mut self, category: &str, now: Duration) {
        let selected = self.filters.toggle(category);
        debug!(category, selected, "filter toggled");
        self.chips = self.renderer.chips(&self.categories, &self.filters);
        self.schedule(now);
    }

    fn schedule(&mut self, now: Duration) {
        self.timer.arm(now, self.query.clone());
        self.phase = Phase::Debouncing;
    }

    /// Run the pending search if its timer is due.
    ///
    /// Returns the new view when the update routine ran, `None` otherwise.
    pub fn poll(&mut self, now: Duration) -> Option<&SearchView> {
        let query = self.timer.fire(now)?;
        self.update(&query);
        Some(&self.view)
    }

    /// Cancel any pending search and run it now.
    pub fn flush(&mut self) -> Option<&SearchView> {
        let query = self.timer.cancel()?;
        self.update(&query);
        Some(&self.view)
    }

    /// The update routine: search with the current filters and render.
    pub fn update(&mut self, query: &str) -> &SearchView {
        self.phase = Phase::Executed;

        self.view = if query.trim().is_empty() {
            self.filters.clear();
            self.chips = self.renderer.chips(&self.categories, &self.filters);
            SearchView::Placeholder {
                html: PLACEHOLDER.to_string(),
            }
        } else {
            let results = self.run_search(query);
            self.searches += 1;
            self.render_results(&results, query)
        };

        self.phase = Phase::Idle;
        &self.view
    }

    /// The results the update routine would render for `query` under the
    /// current filters: thresholded, filtered, deduplicated by location.
    ///
    /// Queries the index directly, bypassing the debounce timer.
    pub fn rendered_results(&self, query: &str) -> Vec<SearchResult> {
        let results = self.run_search(query);
        dedup_by_location(&results).into_iter().cloned().collect()
    }

    fn run_search(&self, query: &str) -> Vec<SearchResult> {
        let filters = &self.filters;
        let min_score = self.config.min_score;
        let admit = move |result: &SearchResult| filters.admits(result, min_score);
        let options = self.config.search_options().with_filter(&admit);

        let results = self.index.search(query, &options);
        debug!(
            query,
            filters = self.filters.len(),
            results = results.len(),
            "search dispatched"
        );
        results
    }

    fn render_results(&self, results: &[SearchResult], query: &str) -> SearchView {
        let mut dedup = LocationDedup::new();
        let mut cards = String::new();
        for result in results {
            if dedup.admit(result) {
                cards.push_str(&self.renderer.result(result, query));
            }
        }

        let count = dedup.len();
        let html = if count == 0 {
            self.renderer.no_results(&self.chips)
        } else {
            self.renderer.results(&self.chips, count, &cards)
        };
        SearchView::Results { html, count }
    }
}

impl<I> std::fmt::Debug for SearchSession<I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchSession")
            .field("query", &self.query)
            .field("filters", &self.filters)
            .field("phase", &self.phase)
            .field("pending", &self.timer.deadline())
            .field("searches", &self.searches)
            .finish_non_exhaustive()
    }
}
