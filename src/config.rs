// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Session settings.
//!
//! Defaults reproduce the stock widget: 300 ms debounce, results under a
//! score of 1 hidden, prefix matching on, two typos tolerated, titles
//! boosted 100×. A site can override any of them from a JSON file:
//!
//! ```json
//! { "baseUrl": "https://docs.example.org/dev", "debounceMs": 150 }
//! ```

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::index::{FieldBoosts, SearchOptions};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct SessionConfig {
    /// Prefix for result links: `<base_url>/<location>`.
    pub base_url: String,
    pub debounce_ms: u64,
    /// Results scoring below this are dropped.
    pub min_score: f64,
    pub prefix: bool,
    /// Maximum edit distance for fuzzy matching (0 disables it).
    pub fuzzy: usize,
    pub title_boost: f64,
    pub text_boost: f64,
    /// HTML-escape document text before interpolating it into results.
    pub escape_html: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            debounce_ms: 300,
            min_score: 1.0,
            prefix: true,
            fuzzy: 2,
            title_boost: 100.0,
            text_boost: 1.0,
            escape_html: false,
        }
    }
}

impl SessionConfig {
    /// Parse and validate a JSON config.
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: SessionConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_json(&raw)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.min_score.is_finite() || self.min_score < 0.0 {
            return Err(Error::Config(format!(
                "minScore must be a nonnegative number, got {}",
                self.min_score
            )));
        }
        for (name, boost) in [("titleBoost", self.title_boost), ("textBoost", self.text_boost)] {
            if !boost.is_finite() || boost <= 0.0 {
                return Err(Error::Config(format!("{} must be positive, got {}", name, boost)));
            }
        }
        Ok(())
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// Index options for a session query, without a filter.
    pub fn search_options<'a>(&self) -> SearchOptions<'a> {
        SearchOptions {
            prefix: self.prefix,
            fuzzy: self.fuzzy,
            boost: FieldBoosts {
                title: self.title_boost,
                text: self.text_boost,
            },
            filter: None,
        }
    }
}
