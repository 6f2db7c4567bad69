//! Category filters and the score threshold.

use crate::common::{fake_session, make_result, ms, site_session};

#[test]
fn test_single_category_restricts_results() {
    let mut session = site_session();
    session.on_filter_click("function", ms(0));

    let results = session.rendered_results("documenter");
    assert!(!results.is_empty());
    assert!(results.iter().all(|r| r.category == "function"));
}

#[test]
fn test_switching_category() {
    let mut session = site_session();
    session.on_filter_click("macro", ms(0));
    let macros = session.rendered_results("docs");
    assert_eq!(macros.len(), 1);
    assert_eq!(macros[0].title, "@docs");

    session.on_filter_click("macro", ms(10));
    session.on_filter_click("section", ms(20));
    let sections = session.rendered_results("docs");
    assert!(sections.iter().all(|r| r.category == "section"));
    assert!(sections.iter().any(|r| r.title == "Adding Some Docstrings"));
}

#[test]
fn test_selected_categories_are_or_combined() {
    let mut session = fake_session(vec![
        make_result(0, "p/", "page", 5.0),
        make_result(1, "s/", "section", 4.0),
        make_result(2, "f/", "function", 3.0),
    ]);
    session.on_filter_click("page", ms(0));
    session.on_filter_click("function", ms(0));

    let view = session.update("x").clone();
    assert_eq!(view.count(), 2);
    assert!(view.html().contains("Result 0"));
    assert!(view.html().contains("Result 2"));
    assert!(!view.html().contains("Result 1"));
}

#[test]
fn test_category_match_is_exact_case() {
    let mut session = fake_session(vec![make_result(0, "p/", "page", 5.0)]);
    session.on_filter_click("Page", ms(0));
    assert_eq!(session.update("x").count(), 0);
}

#[test]
fn test_score_threshold_is_inclusive() {
    let mut session = fake_session(vec![
        make_result(0, "a/", "page", 1.0),
        make_result(1, "b/", "page", 0.999),
    ]);
    let view = session.update("x").clone();
    assert_eq!(view.count(), 1);
    assert!(view.html().contains("Result 0"));
}

#[test]
fn test_blank_query_clears_selection() {
    let mut session = site_session();
    session.on_filter_click("page", ms(0));
    session.on_filter_click("function", ms(0));
    assert_eq!(session.filters().len(), 2);

    session.on_input("\t \n", ms(10));
    let view = session.poll(ms(310)).cloned().expect("timer due");

    assert!(view.is_centered());
    assert!(session.filters().is_empty());
    assert_eq!(session.searches(), 0);
}

#[test]
fn test_chip_reflects_click_before_search() {
    let mut session = site_session();
    session.on_filter_click("section", ms(0));
    assert!(session
        .chips()
        .contains(r#"class="search-filter search-filter-selected"><span>section</span>"#));
    assert_eq!(session.searches(), 0);

    session.on_filter_click("section", ms(5));
    assert!(!session.chips().contains("search-filter-selected"));
}

#[test]
fn test_unknown_category_yields_no_results() {
    let mut session = site_session();
    session.on_filter_click("constant", ms(0));
    session.on_input("documenter", ms(0));
    let view = session.poll(ms(300)).cloned().expect("timer due");
    assert_eq!(view.count(), 0);
    assert!(view.html().contains("No result found!"));
}
