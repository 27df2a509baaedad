//! Integration tests for the reference extractor.

use weld_refs::{ReferenceKind, extract};

fn kinds(source: &str) -> Vec<ReferenceKind> {
    extract(source)
        .into_iter()
        .map(|reference| reference.kind)
        .collect()
}

/// Helper to extract and return just the matched tag texts
fn raw_tags(source: &str) -> Vec<String> {
    extract(source)
        .into_iter()
        .map(|reference| reference.raw_tag)
        .collect()
}

#[test]
fn test_empty_source_yields_no_references() {
    assert!(extract("").is_empty());
}

#[test]
fn test_plain_markup_yields_no_references() {
    assert!(extract("<html><body><p>hello</p></body></html>").is_empty());
}

#[test]
fn test_link_tag_is_extracted_verbatim() {
    let tags = raw_tags(r#"<head><link rel="stylesheet" href="style.css"></head>"#);
    assert_eq!(tags, vec![r#"<link rel="stylesheet" href="style.css">"#]);
}

#[test]
fn test_script_pair_is_extracted_with_closing_tag() {
    let tags = raw_tags(r#"<body><script src="app.js"></script></body>"#);
    assert_eq!(tags, vec![r#"<script src="app.js"></script>"#]);
}

#[test]
fn test_styles_precede_scripts_regardless_of_document_order() {
    let source = r#"<script src="a.js"></script><link href="b.css">"#;
    assert_eq!(
        kinds(source),
        vec![ReferenceKind::Style, ReferenceKind::Script]
    );
    let tags = raw_tags(source);
    assert_eq!(tags[0], r#"<link href="b.css">"#);
    assert_eq!(tags[1], r#"<script src="a.js"></script>"#);
}

#[test]
fn test_tag_names_match_case_insensitively() {
    let tags = raw_tags(r#"<LINK HREF="x.css"><SCRIPT SRC="y.js"></SCRIPT>"#);
    assert_eq!(tags.len(), 2);
    assert_eq!(tags[0], r#"<LINK HREF="x.css">"#);
    assert_eq!(tags[1], r#"<SCRIPT SRC="y.js"></SCRIPT>"#);
}

#[test]
fn test_script_body_with_angle_bracket_stops_at_opening_tag() {
    let tags = raw_tags("<script>if (a < b) { run(); }</script>");
    assert_eq!(tags, vec!["<script>"]);
}

#[test]
fn test_embedded_script_swallows_simple_body() {
    let tags = raw_tags("<script>var x = 1;</script>");
    assert_eq!(tags, vec!["<script>var x = 1;</script>"]);
}

#[test]
fn test_self_closing_link_keeps_its_slash() {
    let tags = raw_tags(r#"<link href="a.css" />"#);
    assert_eq!(tags, vec![r#"<link href="a.css" />"#]);
}

#[test]
fn test_duplicate_tags_extract_once_per_occurrence() {
    let source = r#"<link href="a.css"><link href="a.css">"#;
    assert_eq!(extract(source).len(), 2);
}

#[test]
fn test_adjacent_scripts_do_not_overlap() {
    let source = r#"<script src="a.js"></script><script src="b.js"></script>"#;
    let tags = raw_tags(source);
    assert_eq!(
        tags,
        vec![
            r#"<script src="a.js"></script>"#,
            r#"<script src="b.js"></script>"#,
        ]
    );
}

#[test]
fn test_raw_tags_are_exact_substrings_of_the_source() {
    let source = r#"<head><link href="a.css"><script src="b.js"></script></head>"#;
    for reference in extract(source) {
        assert!(source.contains(&reference.raw_tag));
    }
}
