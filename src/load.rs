// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Reading the site generator's document list.
//!
//! The generator writes `search_index.js`, a script that assigns the list to
//! a global:
//!
//! ```text
//! var documenterSearchIndex = {"docs": [{"location": ..., "page": ..., ...}]}
//! ```
//!
//! We accept that, the bare JSON object, or just the array. Ids are not in
//! the file; every document gets its position in the list.

use std::collections::HashSet;
use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::error::{Error, Result};
use crate::types::Document;

/// Strip a `var name = ...;` wrapper, if there is one.
fn strip_script_wrapper(raw: &str) -> &str {
    let raw = raw.trim();
    let Some(start) = raw.find(['{', '[']) else {
        return raw;
    };

    let head = raw[..start].trim_end();
    if head.is_empty() || !head.ends_with('=') {
        return raw;
    }

    raw[start..].trim_end().trim_end_matches(';').trim_end()
}

/// Parse a document list and assign sequential ids.
pub fn parse_documents(raw: &str) -> Result<Vec<Document>> {
    let value: Value = serde_json::from_str(strip_script_wrapper(raw))?;

    let list = match value {
        Value::Array(_) => value,
        Value::Object(mut object) => object.remove("docs").ok_or(Error::MissingDocs)?,
        _ => return Err(Error::MissingDocs),
    };

    let mut docs: Vec<Document> = serde_json::from_value(list)?;
    for (position, doc) in docs.iter_mut().enumerate() {
        doc.id = position;
    }

    debug!(docs = docs.len(), "parsed document list");
    Ok(docs)
}

/// Read and parse a document list from disk.
pub fn load_documents(path: impl AsRef<Path>) -> Result<Vec<Document>> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    parse_documents(&raw)
}

/// Distinct categories in order of first appearance.
pub fn categories(docs: &[Document]) -> Vec<String> {
    let mut seen = HashSet::new();
    docs.iter()
        .filter(|doc| seen.insert(doc.category.as_str()))
        .map(|doc| doc.category.clone())
        .collect()
}
