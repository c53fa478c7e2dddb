//! Integration tests for the chrome install lifecycle
//!
//! Drives a simulated page load from `loading` through `interactive`
//! and verifies deferred mounting, placement, and idempotency of both
//! components on one document.

use toolsite_chrome::prelude::*;

/// Helper to create a page with some existing content
fn page_with_content(path: &str) -> Document {
    let mut doc = Document::interactive(path);
    doc.append_body_child(
        Element::new("main")
            .class("tool-page")
            .child(Element::new("h1").text("Excel to JSON")),
    );
    doc
}

#[test]
fn deferred_install_waits_for_content_parsed() {
    let mut doc = Document::loading("/tools/excel2json.html");
    Navigation::default().install(&mut doc);
    Footer::new().install(&mut doc);

    assert!(doc.body_children().is_empty());
    assert!(doc.styles().is_empty());

    doc.finish_parsing();

    assert!(doc.body_has_class(Navigation::MARKER_CLASS));
    assert!(doc.body_has_class(Footer::MARKER_CLASS));
    assert_eq!(doc.styles().len(), 2);
}

#[test]
fn immediate_install_when_already_parsed() {
    for mut doc in [
        Document::interactive("/tools/excel2json.html"),
        Document::complete("/tools/excel2json.html"),
    ] {
        Navigation::default().install(&mut doc);
        assert!(doc.body_has_class(Navigation::MARKER_CLASS));
    }
}

#[test]
fn navigation_leads_and_footer_trails_page_content() {
    let mut doc = page_with_content("/tools/excel2json.html");
    Navigation::default().install(&mut doc);
    Footer::new().install(&mut doc);

    let children = doc.body_children();
    assert_eq!(children.len(), 3);
    assert_eq!(children[0].classes, [Navigation::MARKER_CLASS]);
    assert_eq!(children[1].classes, ["tool-page"]);
    assert_eq!(children[2].classes, [Footer::MARKER_CLASS]);
}

#[test]
fn reinstalling_both_components_changes_nothing() {
    let mut doc = page_with_content("/tools/excel2json.html");
    for _ in 0..3 {
        Navigation::default().install(&mut doc);
        Footer::new().install(&mut doc);
    }

    assert_eq!(doc.body_children().len(), 3);
    assert_eq!(doc.styles().len(), 2);
}

#[test]
fn mounted_navigation_marks_current_tool_active() {
    let mut doc = page_with_content("/tools/excel2json.html");
    Navigation::default().install(&mut doc);

    let html = doc.to_html();
    assert!(html.contains(r#"<a class="nav-item active" href="excel2json.html""#));
    assert!(html.contains(r#"<a class="nav-item" href="json-compressor.html""#));
}

#[test]
fn serialized_document_orders_styles_before_body() {
    let mut doc = page_with_content("/tools/excel2json.html");
    Navigation::default().install(&mut doc);
    Footer::new().install(&mut doc);

    let html = doc.to_html();
    let head_end = html.find("</head>").expect("head closes");
    let nav_at = html.find(r#"<nav class="tool-navigation">"#).expect("nav mounted");
    let style_at = html.find(".tool-navigation {").expect("nav styles in head");
    assert!(style_at < head_end);
    assert!(head_end < nav_at);
}

#[test]
fn module_level_installs_use_the_shared_configuration() {
    let mut doc = page_with_content("/tools/json-compressor.html");
    toolsite_chrome::nav::install(&mut doc);
    toolsite_chrome::footer::install(&mut doc);

    let html = doc.to_html();
    assert!(html.contains(r#"<a class="nav-item active" href="json-compressor.html""#));
    assert!(html.contains(r#"<footer class="common-footer">"#));
}

#[test]
fn custom_configuration_drives_the_rendered_links() {
    let config = NavigationConfig {
        destinations: vec![Destination::new(
            "CSV Viewer",
            "csv-viewer.html",
            "📄",
            "Inspect CSV files",
        )],
        home_path: "home.html".to_string(),
    };

    let mut doc = Document::interactive("/csv-viewer.html");
    Navigation::new(config).install(&mut doc);

    let html = doc.to_html();
    assert!(html.contains(r#"<a class="nav-home" href="home.html""#));
    assert!(html.contains(r#"<a class="nav-item active" href="csv-viewer.html""#));
    assert!(!html.contains("excel2json.html"));
}
