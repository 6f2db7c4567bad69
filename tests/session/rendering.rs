//! Markup of the three views and of individual result cards.

use crate::common::{fake_session, make_result, site_session, site_session_with};
use docsift::render::PLACEHOLDER;
use docsift::{SearchView, SessionConfig};

#[test]
fn test_initial_view_is_placeholder() {
    let session = site_session();
    assert_eq!(
        session.view(),
        &SearchView::Placeholder {
            html: PLACEHOLDER.to_string()
        }
    );
    assert!(session.view().is_centered());
}

#[test]
fn test_chips_follow_first_appearance_order() {
    let session = site_session();
    assert_eq!(session.categories(), &["page", "section", "function", "macro"]);

    let chips = session.chips();
    let positions: Vec<usize> = ["page", "section", "function", "macro"]
        .iter()
        .map(|c| chips.find(&format!("<span>{}</span>", c)).expect("chip rendered"))
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
    assert!(chips.contains(r#"<span class="is-size-6">Filters:</span>"#));
}

#[test]
fn test_result_card_markup() {
    let config = SessionConfig {
        base_url: "https://docs.example.org/dev".to_string(),
        ..SessionConfig::default()
    };
    let mut session = site_session_with(config);
    let html = session.update("add!").html().to_string();

    assert!(html.contains(
        r#"href="https://docs.example.org/dev/lib/internals/anchors/#Documenter.Anchors.add!""#
    ));
    assert!(html.contains("search-result-code-title"));
    assert!(html.contains(r#"<div class="property-search-result-badge">function</div>"#));
    assert!(html.contains(r#"<span class="search-result-highlight py-1">add!</span>"#));
    assert!(html.contains(r#"<div class="search-divider w-100"></div>"#));
    assert!(!session.view().is_centered());
}

#[test]
fn test_prose_title_style_and_link_line() {
    let mut session = site_session();
    let html = session.update("home").html().to_string();

    assert!(html.contains(r#"<div class="search-result-title has-text-weight-bold">Home</div>"#));
    assert!(html.contains(r#"title="index.html#Home""#));
    assert!(html.contains("</i> index.html#Home (Home)</div>"));
}

#[test]
fn test_long_location_is_truncated() {
    let mut session = site_session();
    let html = session.update("add!").html().to_string();
    // "lib/internals/anchors/#Documenter.Anchors.add!" is 46 characters.
    assert!(html.contains("</i> lib/internals/anchors/#Documenter.Anchors.add!... (Anchors)</div>"));
}

#[test]
fn test_link_targets_are_percent_encoded() {
    let mut result = make_result(0, "api/#Base.:+ (x, y)", "function", 5.0);
    result.title = "plus".to_string();
    let mut session = fake_session(vec![result]);
    let html = session.update("plus").html().to_string();
    assert!(html.contains(r#"href="/api/#Base.:+%20(x,%20y)""#));
}

#[test]
fn test_text_is_verbatim_by_default() {
    let mut result = make_result(0, "t/", "page", 5.0);
    result.title = "Vector{<:Real}".to_string();
    let mut session = fake_session(vec![result]);
    let html = session.update("vector").html().to_string();
    assert!(html.contains("Vector{<:Real}"));
}

#[test]
fn test_escape_html_option() {
    let mut result = make_result(0, "t/", "page", 5.0);
    result.title = "Vector{<:Real}".to_string();
    result.text = "Accepts <b>any</b> Vector{<:Real} value".to_string();

    let config = SessionConfig {
        escape_html: true,
        ..SessionConfig::default()
    };
    let categories = vec!["page".to_string()];
    let mut session =
        docsift::SearchSession::new(docsift::testing::FakeIndex::new(vec![result]), categories, config);
    let html = session.update("<b>any").html().to_string();

    assert!(html.contains("Vector{&lt;:Real}"));
    assert!(!html.contains("<b>"));
    assert!(html.contains(r#"<span class="search-result-highlight py-1">&lt;b&gt;any</span>"#));
}

#[test]
fn test_snippet_absent_when_query_not_in_text() {
    let mut result = make_result(0, "t/", "page", 5.0);
    result.text = "nothing relevant".to_string();
    let mut session = fake_session(vec![result]);
    let html = session.update("zzz").html().to_string();
    assert!(html.contains("<p></p>"));
}
