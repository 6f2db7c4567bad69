//! Shared test utilities and fixtures.

#![allow(dead_code)]

use std::time::Duration;

use docsift::load::parse_documents;
use docsift::{DocIndex, Document, SearchSession, SessionConfig};

// Re-export canonical test utilities from docsift::testing
pub use docsift::testing::{make_doc, make_result, FakeIndex};

// ============================================================================
// FIXTURES
// ============================================================================

/// A small site, in the generator's `search_index.js` form.
pub const SITE_INDEX: &str = r#"var documenterSearchIndex = {"docs":
[
{"location":"index.html#Home","page":"Home","title":"Home","text":"Documenter is a documentation generator for Julia packages.","category":"page"},
{"location":"man/guide/#Package-Guide","page":"Guide","title":"Package Guide","text":"Documenter is designed to do one thing: combine markdown files and inline docstrings into a single inter-linked document.","category":"page"},
{"location":"man/guide/#Adding-Some-Docstrings","page":"Guide","title":"Adding Some Docstrings","text":"Use the @docs block to splice docstrings into the manual.","category":"section"},
{"location":"lib/internals/anchors/#Documenter.Anchors.add!","page":"Anchors","title":"Documenter.Anchors.add!","text":"add!(m, object, id, filename) adds a new anchor to the AnchorMap for a given id and file.","category":"function"},
{"location":"lib/internals/anchors/#Documenter.Anchors.add!","page":"Anchors","title":"Documenter.Anchors.add!","text":"add!(m, object, filename) adds an anchor with an automatically generated id.","category":"function"},
{"location":"lib/public/#Documenter.makedocs","page":"Public","title":"Documenter.makedocs","text":"Combines markdown files and inline docstrings into an interlinked document.","category":"function"},
{"location":"lib/public/#Documenter.@docs","page":"Public","title":"@docs","text":"Splices docstrings of the listed objects into the page.","category":"macro"},
{"location":"","page":"Orphan","title":"Orphaned anchor","text":"This entry has no location and is never shown.","category":"section"}
]};
"#;

/// Parsed [`SITE_INDEX`].
pub fn site_docs() -> Vec<Document> {
    parse_documents(SITE_INDEX).expect("fixture parses")
}

/// An index over [`SITE_INDEX`].
pub fn site_index() -> DocIndex {
    DocIndex::from_documents(site_docs()).expect("fixture indexes")
}

/// A session over [`SITE_INDEX`] with default settings.
pub fn site_session() -> SearchSession<DocIndex> {
    site_session_with(SessionConfig::default())
}

pub fn site_session_with(config: SessionConfig) -> SearchSession<DocIndex> {
    SearchSession::from_documents(site_docs(), config).expect("fixture session")
}

/// A session over canned results, with the usual three categories.
pub fn fake_session(results: Vec<docsift::SearchResult>) -> SearchSession<FakeIndex> {
    let categories = vec!["page".to_string(), "section".to_string(), "function".to_string()];
    SearchSession::new(FakeIndex::new(results), categories, SessionConfig::default())
}

/// Milliseconds on the session clock.
pub fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

// ============================================================================
// ASSERTIONS
// ============================================================================

/// Results are sorted by descending score, ties broken by ascending id.
pub fn assert_ranked(results: &[docsift::SearchResult]) {
    for pair in results.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        assert!(
            a.score > b.score || (a.score == b.score && a.id < b.id),
            "results out of order: {} ({}) before {} ({})",
            a.id,
            a.score,
            b.id,
            b.score
        );
    }
}
