//! Tests for the ticketview CLI: the inspect, examine, and display verbs
//! run end to end against word dumps written to a temp file.

use std::io::Write;
use std::process::Command;

use tempfile::NamedTempFile;

const TICKET: &str = r#"{
  "pages": [
    {"page_number": 1, "words": [
      {"text": "Helpdesk", "x0": 20, "x1": 70, "top": 2, "bottom": 10},
      {"text": "TicketType", "x0": 20, "x1": 80, "top": 20, "bottom": 30},
      {"text": "Incident", "x0": 140, "x1": 190, "top": 20, "bottom": 30},
      {"text": "TicketNumber", "x0": 20, "x1": 90, "top": 35, "bottom": 45},
      {"text": "4711", "x0": 140, "x1": 165, "top": 35, "bottom": 45},
      {"text": "Status", "x0": 20, "x1": 55, "top": 50, "bottom": 60},
      {"text": "Open", "x0": 140, "x1": 165, "top": 50, "bottom": 60},
      {"text": "(manually", "x0": 140, "x1": 190, "top": 65, "bottom": 75},
      {"text": "set)", "x0": 194, "x1": 215, "top": 65, "bottom": 75}
    ]},
    {"page_number": 2, "words": [
      {"text": "Helpdesk", "x0": 20, "x1": 70, "top": 2, "bottom": 10},
      {"text": "Owner", "x0": 20, "x1": 55, "top": 20, "bottom": 30},
      {"text": "jdoe", "x0": 140, "x1": 165, "top": 20, "bottom": 30}
    ]}
  ]
}"#;

fn fixture(body: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(body.as_bytes()).unwrap();
    file
}

/// Run ticketview with given arguments and return (exit_code, stdout, stderr).
fn run_ticketview(args: &[&str]) -> (i32, String, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_ticketview"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute ticketview");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (code, stdout, stderr)
}

fn run_on(body: &str, args: &[&str]) -> (i32, String, String) {
    let file = fixture(body);
    let path = file.path().to_string_lossy().to_string();
    let mut argv = vec!["--src", path.as_str()];
    argv.extend_from_slice(args);
    run_ticketview(&argv)
}

#[test]
fn test_inspect_text() {
    let (code, stdout, _) = run_on(TICKET, &["inspect"]);
    assert_eq!(code, 0);
    assert!(stdout.starts_with("Inspect summary\n"));
    assert!(stdout.contains("Pages:        2"));
    assert!(stdout.contains("  - \"Helpdesk\" (pages 1,2)"));
}

#[test]
fn test_inspect_json() {
    let (code, stdout, _) = run_on(TICKET, &["--json", "inspect"]);
    assert_eq!(code, 0);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["page_count"], 2);
    assert_eq!(json["text_based"], true);
    assert_eq!(json["document"]["sha256"].as_str().unwrap().len(), 64);
}

#[test]
fn test_examine_summary() {
    let (code, stdout, _) = run_on(TICKET, &["--verbose", "examine"]);
    assert_eq!(code, 0);
    // "Helpdesk" has no value and is a record of its own
    assert!(stdout.contains("Examined 2 page(s): 4 record(s), 3 unique key(s)"));
    assert!(stdout.contains("Ticket: Incident 4711"));
    assert!(stdout.contains("=== KEYS ===\nHelpdesk\nStatus\nOwner\n"));
}

#[test]
fn test_examine_json() {
    let (code, stdout, _) = run_on(TICKET, &["--json", "examine"]);
    assert_eq!(code, 0);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["envelope"]["identity"]["ticket_number"], "4711");
    assert_eq!(
        json["records"][1],
        serde_json::json!({"page": 1, "key": "Status", "value": "Open (manually set)"})
    );
}

#[test]
fn test_display_records_with_regex() {
    let (code, stdout, _) = run_on(TICKET, &["display", "records", "/manually/"]);
    assert_eq!(code, 0);
    assert_eq!(
        stdout,
        "=== RECORDS ===\n\n--- page 1 | Status ---\nOpen (manually set)\n"
    );
}

#[test]
fn test_display_document_with_fixed_split() {
    let (code, stdout, _) = run_on(TICKET, &["--split-x", "100", "--json", "display", "document"]);
    assert_eq!(code, 0);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["document"]["ticket"]["type"], "Incident");
    assert_eq!(json["document"]["record_count"], 4);
}

#[test]
fn test_bad_document_mode_fails() {
    let (code, _, stderr) = run_on(TICKET, &["display", "document", "everything"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("unknown document selector"));
}

#[test]
fn test_malformed_geometry_fails() {
    let body = r#"{"pages": [{"words": [{"text": "x", "x0": 10, "x1": 5, "top": 0, "bottom": 8}]}]}"#;
    let (code, _, stderr) = run_on(body, &["examine"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("malformed geometry on page 1, token 0"));
}

#[test]
fn test_missing_source_fails() {
    let (code, _, stderr) = run_ticketview(&["--src", "/no/such/dump.json", "inspect"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("failed to load word dump"));
}
