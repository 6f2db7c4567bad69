//! Which documents a query reaches: exact, prefix, fuzzy, stop words.

use crate::common::site_index;
use docsift::{Index, SearchOptions};

fn ids(query: &str, options: &SearchOptions<'_>) -> Vec<usize> {
    site_index().search(query, options).iter().map(|r| r.id).collect()
}

#[test]
fn test_qualified_name_reachable_by_last_part() {
    let results = site_index().search("add!", &SearchOptions::default());
    let top: Vec<usize> = results.iter().take(2).map(|r| r.id).collect();
    assert!(top.contains(&3) && top.contains(&4), "got {:?}", top);
}

#[test]
fn test_macro_sigil_is_kept() {
    let results = site_index().search("@docs", &SearchOptions::default());
    assert_eq!(results.first().map(|r| r.id), Some(6));
    assert!(results[0].terms.contains(&"@docs".to_string()));
}

#[test]
fn test_query_is_case_insensitive() {
    let options = SearchOptions::default();
    assert_eq!(ids("DOCUMENTER", &options), ids("documenter", &options));
}

#[test]
fn test_prefix_completes_partial_word() {
    let options = SearchOptions {
        fuzzy: 0,
        ..SearchOptions::default()
    };
    let results = site_index().search("make", &options);
    assert_eq!(results.first().map(|r| r.id), Some(5));
    assert!(results[0].matches.iter().any(|m| m.term == "makedocs"));

    let exact = SearchOptions {
        prefix: false,
        fuzzy: 0,
        ..SearchOptions::default()
    };
    assert!(site_index().search("make", &exact).is_empty());
}

#[test]
fn test_fuzzy_tolerates_typos() {
    assert_eq!(ids("makedcs", &SearchOptions::default()).first(), Some(&5));
    assert!(!ids("anchros", &SearchOptions::default()).is_empty());

    let strict = SearchOptions {
        fuzzy: 0,
        ..SearchOptions::default()
    };
    assert!(ids("makedcs", &strict).is_empty());
}

#[test]
fn test_fuzzy_budget_is_respected() {
    let one = SearchOptions {
        fuzzy: 1,
        ..SearchOptions::default()
    };
    // Two edits away from "makedocs".
    assert!(!ids("makdcs", &one).contains(&5));
    assert!(ids("makdcs", &SearchOptions::default()).contains(&5));
}

#[test]
fn test_stop_words_only_query_matches_nothing() {
    let options = SearchOptions::default();
    assert!(ids("the of and", &options).is_empty());
    assert!(ids("The", &options).is_empty());
}

#[test]
fn test_julia_identifiers_are_searchable() {
    let index = docsift::DocIndex::from_documents(vec![crate::common::make_doc(
        0,
        "Base.all",
        "Test whether all elements are true; do blocks work too.",
        "function",
    )])
    .expect("index");
    let hits = index.search("all", &SearchOptions::default());
    assert_eq!(hits.len(), 1);
    assert!(!index.search("do", &SearchOptions::default()).is_empty());
}

#[test]
fn test_filter_applies_inside_index() {
    let only_macros = |r: &docsift::SearchResult| r.category == "macro";
    let options = SearchOptions::default().with_filter(&only_macros);
    let results = site_index().search("docs", &options);
    assert!(!results.is_empty());
    assert!(results.iter().all(|r| r.category == "macro"));
}

#[test]
fn test_partial_word_finds_title() {
    let found = ids("anch", &SearchOptions::default());
    assert!(found.contains(&3) && found.contains(&4), "got {:?}", found);
}
