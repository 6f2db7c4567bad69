//! Ordering of index results.

use crate::common::{assert_ranked, make_doc, site_index};
use docsift::{DocIndex, FieldBoosts, Index, SearchOptions};

#[test]
fn test_results_are_ranked() {
    let index = site_index();
    for query in ["documenter", "docs", "add! anchors", "markdown docstrings", "home"] {
        assert_ranked(&index.search(query, &SearchOptions::default()));
    }
}

#[test]
fn test_title_match_outranks_text_match() {
    let index = DocIndex::from_documents(vec![
        make_doc(0, "Overview", "Hosting is covered in its own chapter.", "page"),
        make_doc(1, "Hosting", "Deploying to GitHub Pages.", "page"),
    ])
    .expect("index");
    let results = index.search("hosting", &SearchOptions::default());
    assert_eq!(results.iter().map(|r| r.id).collect::<Vec<_>>(), vec![1, 0]);
}

#[test]
fn test_boosts_are_configurable() {
    let index = DocIndex::from_documents(vec![
        make_doc(0, "Overview", "Hosting hosting hosting.", "page"),
        make_doc(1, "Hosting", "Deploying to GitHub Pages.", "page"),
    ])
    .expect("index");
    let text_heavy = SearchOptions {
        boost: FieldBoosts {
            title: 0.01,
            text: 10.0,
        },
        ..SearchOptions::default()
    };
    assert_eq!(index.search("hosting", &text_heavy).first().map(|r| r.id), Some(0));
}

#[test]
fn test_matching_more_terms_ranks_higher() {
    let index = DocIndex::from_documents(vec![
        make_doc(0, "Anchors", "Anchor maps.", "section"),
        make_doc(1, "Anchors Documenter", "Anchor maps.", "section"),
    ])
    .expect("index");
    let results = index.search("anchors documenter", &SearchOptions::default());
    assert_eq!(results[0].id, 1);
    assert_eq!(results[0].terms.len(), 2);
    assert_eq!(results[1].terms.len(), 1);
}

#[test]
fn test_exact_match_ranks_first() {
    let index = DocIndex::from_documents(vec![
        make_doc(0, "deployment", "", "page"),
        make_doc(1, "deploy", "", "page"),
        make_doc(2, "deplay", "", "page"),
    ])
    .expect("index");
    let results = index.search("deploy", &SearchOptions::default());
    assert_eq!(results.len(), 3);
    assert_eq!(results[0].id, 1);
    assert!(results[0].score > 2.0 * results[1].score);
}

#[test]
fn test_equal_scores_break_ties_by_id() {
    let index = DocIndex::from_documents(vec![
        make_doc(7, "Twin", "same", "page"),
        make_doc(3, "Twin", "same", "page"),
    ])
    .expect("index");
    let results = index.search("twin", &SearchOptions::default());
    assert_eq!(results.iter().map(|r| r.id).collect::<Vec<_>>(), vec![3, 7]);
}

#[test]
fn test_search_is_deterministic() {
    let index = site_index();
    let first = index.search("docstrings", &SearchOptions::default());
    for _ in 0..5 {
        assert_eq!(index.search("docstrings", &SearchOptions::default()), first);
    }
}
