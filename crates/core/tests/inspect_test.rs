//! Tests for physical inspection of token documents.

use std::io::Write;

use ticketview_core::inspect::{DocumentRef, RepeatedLine, inspect};
use ticketview_core::{PageTokens, Token, TokenDocument};

fn word(text: &str, x0: f64, x1: f64, top: f64, page: u32) -> Token {
    Token::new(text, x0, x1, top, top + 10.0, page)
}

fn two_page_doc() -> TokenDocument {
    TokenDocument::from_pages(vec![
        PageTokens::new(
            1,
            vec![
                word("Helpdesk", 20.0, 70.0, 10.0, 1),
                word("Export", 74.0, 110.0, 10.0, 1),
                word("Status", 20.0, 60.0, 40.0, 1),
                word("Open", 120.0, 150.0, 40.0, 1),
            ],
        ),
        PageTokens::new(
            2,
            vec![
                word("Helpdesk", 20.0, 70.0, 10.0, 2),
                word("Export", 74.0, 110.0, 10.0, 2),
                word("Owner", 15.0, 50.0, 40.0, 2),
                word("jdoe", 120.0, 300.0, 60.0, 2),
            ],
        ),
        PageTokens::new(3, Vec::new()),
    ])
}

#[test]
fn test_sha256_of_bytes() {
    let doc = DocumentRef::from_bytes("abc.json", b"abc");
    assert_eq!(
        doc.sha256,
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
    assert_eq!(doc.size_bytes, 3);
    assert_eq!(doc.path, "abc.json");
}

#[test]
fn test_sha256_of_file_matches_bytes() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    let body = "x".repeat(20_000);
    file.write_all(body.as_bytes()).unwrap();

    let from_file = DocumentRef::from_path(file.path()).unwrap();
    let from_bytes = DocumentRef::from_bytes("ignored", body.as_bytes());

    assert_eq!(from_file.sha256, from_bytes.sha256);
    assert_eq!(from_file.size_bytes, 20_000);
}

#[test]
fn test_page_geometry_and_extents() {
    let report = inspect(DocumentRef::from_bytes("t", b""), &two_page_doc(), 3.0);

    assert_eq!(report.page_count, 3);
    assert!(report.text_based);
    assert_eq!(report.pages[0].token_count, 4);
    assert_eq!(report.pages[0].x_min, 20.0);
    assert_eq!(report.pages[0].x_max, 150.0);
    assert_eq!(report.pages[1].y_max, 70.0);
    assert_eq!(report.pages[2].token_count, 0);
    assert_eq!(report.pages[2].x_max, 0.0);

    // the empty page does not drag the extents to zero
    assert_eq!(report.x_min, 15.0);
    assert_eq!(report.x_max, 300.0);
    assert_eq!(report.y_min, 10.0);
    assert_eq!(report.y_max, 70.0);
}

#[test]
fn test_repeated_lines_are_found_across_pages() {
    let report = inspect(DocumentRef::from_bytes("t", b""), &two_page_doc(), 3.0);

    assert_eq!(
        report.repeated_lines,
        vec![RepeatedLine {
            text: "Helpdesk Export".to_string(),
            pages: vec![1, 2],
        }]
    );
}

#[test]
fn test_empty_document_is_not_text_based() {
    let doc = TokenDocument::from_pages(vec![PageTokens::new(1, Vec::new())]);
    let report = inspect(DocumentRef::from_bytes("empty.json", b""), &doc, 3.0);

    assert!(!report.text_based);
    assert_eq!(report.x_min, 0.0);
    assert!(report.repeated_lines.is_empty());

    insta::assert_snapshot!(report.to_text(), @r"
Inspect summary
---------------
Path:         empty.json
SHA-256:      e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855
Size (bytes): 0
Pages:        1
Text-based:   false
X range:      0 - 0
Y range:      0 - 0
Repeated lines: none
");
}

#[test]
fn test_report_text_lists_repeated_lines() {
    let report = inspect(DocumentRef::from_bytes("t", b""), &two_page_doc(), 3.0);
    let text = report.to_text();

    assert!(text.contains("Pages:        3"));
    assert!(text.contains("X range:      15 - 300"));
    assert!(text.ends_with("Repeated lines:\n  - \"Helpdesk Export\" (pages 1,2)"));
}

#[test]
fn test_report_json_shape() {
    let report = inspect(DocumentRef::from_bytes("t", b""), &two_page_doc(), 3.0);
    let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();

    assert_eq!(json["page_count"], 3);
    assert_eq!(json["document"]["path"], "t");
    assert_eq!(json["pages"][1]["token_count"], 4);
    assert_eq!(json["repeated_lines"][0]["pages"], serde_json::json!([1, 2]));
}
