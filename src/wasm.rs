// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! WebAssembly bindings for the search modal.
//!
//! The widget owns one [`SearchSession`]. The page forwards events and a
//! clock reading (`performance.now()`), and arms a single `setTimeout` for
//! whatever `nextDeadline()` reports:
//!
//! ```js
//! const widget = new DocsiftWidget(searchIndexSource, { baseUrl: documenterBaseURL });
//! let timer;
//! function schedule() {
//!     clearTimeout(timer);
//!     const due = widget.nextDeadline();
//!     if (due === undefined) return;
//!     timer = setTimeout(() => {
//!         const html = widget.poll(performance.now());
//!         if (html !== undefined) {
//!             body.classList.toggle("is-justify-content-center", widget.isCentered());
//!             body.innerHTML = html;
//!         }
//!     }, Math.max(0, due - performance.now()));
//! }
//! input.addEventListener("keyup", () => { widget.input(input.value, performance.now()); schedule(); });
//! ```

use std::time::Duration;

use js_sys::Array;
use serde_wasm_bindgen::from_value;
use wasm_bindgen::prelude::*;

use crate::config::SessionConfig;
use crate::index::DocIndex;
use crate::load::parse_documents;
use crate::session::SearchSession;

fn to_duration(ms: f64) -> Duration {
    Duration::from_secs_f64(ms.max(0.0) / 1000.0)
}

fn js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[wasm_bindgen]
pub struct DocsiftWidget {
    session: SearchSession<DocIndex>,
}

#[wasm_bindgen]
impl DocsiftWidget {
    /// Build the widget from the site's `search_index.js` (or its JSON) and
    /// an optional config object.
    #[wasm_bindgen(constructor)]
    pub fn new(index_source: &str, config: JsValue) -> Result<DocsiftWidget, JsValue> {
        let config: SessionConfig = if config.is_undefined() || config.is_null() {
            SessionConfig::default()
        } else {
            from_value(config)?
        };
        let docs = parse_documents(index_source).map_err(js_error)?;
        let session = SearchSession::from_documents(docs, config).map_err(js_error)?;
        Ok(DocsiftWidget { session })
    }

    /// Number of indexed documents.
    #[wasm_bindgen(js_name = docCount)]
    pub fn doc_count(&self) -> usize {
        self.session.index().len()
    }

    /// Filter chip categories, in display order.
    #[wasm_bindgen]
    pub fn categories(&self) -> Array {
        self.session
            .categories()
            .iter()
            .map(|category| JsValue::from_str(category))
            .collect()
    }

    /// Keyup on the search input.
    #[wasm_bindgen]
    pub fn input(&mut self, value: &str, now_ms: f64) {
        self.session.on_input(value, to_duration(now_ms));
    }

    /// Click on a filter chip. Returns the re-rendered filter bar.
    #[wasm_bindgen(js_name = toggleFilter)]
    pub fn toggle_filter(&mut self, category: &str, now_ms: f64) -> String {
        self.session.on_filter_click(category, to_duration(now_ms));
        self.session.chips().to_string()
    }

    /// Run the pending search if due. Returns the new modal body.
    #[wasm_bindgen]
    pub fn poll(&mut self, now_ms: f64) -> Option<String> {
        self.session
            .poll(to_duration(now_ms))
            .map(|view| view.html().to_string())
    }

    /// When `poll` should next be called, in the caller's clock (ms).
    #[wasm_bindgen(js_name = nextDeadline)]
    pub fn next_deadline(&self) -> Option<f64> {
        self.session
            .next_deadline()
            .map(|deadline| deadline.as_secs_f64() * 1000.0)
    }

    /// Whether the current view wants a centered container.
    #[wasm_bindgen(js_name = isCentered)]
    pub fn is_centered(&self) -> bool {
        self.session.view().is_centered()
    }

    /// Result count of the current view.
    #[wasm_bindgen(js_name = resultCount)]
    pub fn result_count(&self) -> usize {
        self.session.view().count()
    }
}
