use std::fmt;

use serde::Serialize;

/// A non-fatal condition noticed while examining a document.
///
/// Diagnostics are reported beside the records and never alter them.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// Value text with no key and no open record to extend. The text was dropped.
    OrphanContinuation { page: u32, text: String },
    /// No split boundary could be inferred and none was inherited from an
    /// earlier page, so every token on the page was read as key text.
    NoSplitBoundary { page: u32 },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::OrphanContinuation { page, text } => {
                write!(f, "page {page}: orphan continuation dropped: {text:?}")
            }
            Diagnostic::NoSplitBoundary { page } => {
                write!(f, "page {page}: no key/value boundary found")
            }
        }
    }
}
