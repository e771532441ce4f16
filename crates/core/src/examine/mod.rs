//! The examine phase: tokens in, records and document identity out.
//!
//! The phase is a pipeline of four stages, each a plain function of the
//! previous stage's output:
//!
//! 1. [`group_lines`]: tokens of a page become visual lines
//! 2. [`classify_line`]: each line splits into key text and value text
//! 3. [`ContinuationMerger`]: key-less lines extend the open record
//! 4. [`promote_identity`]: the ticket type and number leave the record list
//!
//! Input geometry is validated up front; a malformed document is rejected
//! before any record is produced.

pub mod diagnostics;
pub mod identity;
pub mod merge;
pub mod records;

use serde::Serialize;
use serde::ser::{SerializeStruct, Serializer};

pub use diagnostics::Diagnostic;
pub use identity::promote_identity;
pub use merge::ContinuationMerger;
pub use records::{DocumentEnvelope, RecordSet};

use crate::error::{ExamineError, Result};
use crate::layout::{SplitStrategy, classify_line, group_lines};
use crate::model::{DocumentIdentity, Record, TokenDocument};
use crate::params::ExamineParams;

/// Result of examining one document.
#[derive(Debug, Clone, PartialEq)]
pub struct Examination {
    records: RecordSet,
    identity: Option<DocumentIdentity>,
    pages: u32,
    diagnostics: Vec<Diagnostic>,
}

impl Examination {
    pub fn records(&self) -> &RecordSet {
        &self.records
    }

    pub fn identity(&self) -> Option<&DocumentIdentity> {
        self.identity.as_ref()
    }

    pub fn page_count(&self) -> u32 {
        self.pages
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Document summary, recomputed from the record list on every call.
    pub fn envelope(&self) -> DocumentEnvelope {
        DocumentEnvelope::derive(self.identity.clone(), self.pages, &self.records)
    }
}

impl Serialize for Examination {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Examination", 3)?;
        state.serialize_field("envelope", &self.envelope())?;
        state.serialize_field("records", &self.records)?;
        state.serialize_field("diagnostics", &self.diagnostics)?;
        state.end()
    }
}

/// Runs the examine pipeline with one fixed set of parameters.
#[derive(Debug)]
pub struct Examiner {
    params: ExamineParams,
    strategy: Box<dyn SplitStrategy>,
}

impl Examiner {
    pub fn new(params: ExamineParams) -> Result<Self> {
        params.validate()?;
        let strategy = params.split.strategy();
        Ok(Self { params, strategy })
    }

    pub fn params(&self) -> &ExamineParams {
        &self.params
    }

    pub fn examine(&self, document: &TokenDocument) -> Result<Examination> {
        validate_document(document)?;

        let mut diagnostics = Vec::new();
        let mut merger = ContinuationMerger::new();
        let mut last_boundary: Option<f64> = None;

        for page in &document.pages {
            let lines = group_lines(&page.tokens, self.params.y_tolerance);
            if lines.is_empty() {
                tracing::debug!(page = page.number, "page has no tokens");
                continue;
            }

            let boundary = match self.strategy.boundary(&lines).or(last_boundary) {
                Some(x) => {
                    last_boundary = Some(x);
                    x
                }
                None => {
                    tracing::warn!(page = page.number, "no key/value boundary found");
                    diagnostics.push(Diagnostic::NoSplitBoundary { page: page.number });
                    f64::INFINITY
                }
            };
            tracing::debug!(
                page = page.number,
                lines = lines.len(),
                boundary,
                "classifying page"
            );

            for line in &lines {
                merger.push(classify_line(line, boundary), &mut diagnostics);
            }
        }

        let records: Vec<Record> = merger.finish();
        let (identity, records) = promote_identity(records, &self.params.identity);
        let records = RecordSet::new(records);
        tracing::debug!(
            records = records.len(),
            has_identity = identity.is_some(),
            diagnostics = diagnostics.len(),
            "examine finished"
        );

        Ok(Examination {
            records,
            identity,
            pages: document.page_count_u32()?,
            diagnostics,
        })
    }
}

/// Examine a document with the given parameters.
pub fn examine(document: &TokenDocument, params: &ExamineParams) -> Result<Examination> {
    Examiner::new(params.clone())?.examine(document)
}

/// Reject documents whose structure the pipeline cannot trust.
fn validate_document(document: &TokenDocument) -> Result<()> {
    let mut previous = 0u32;
    for page in &document.pages {
        if page.number <= previous {
            return Err(ExamineError::PageOrder {
                previous,
                got: page.number,
            });
        }
        previous = page.number;

        for (index, token) in page.tokens.iter().enumerate() {
            let fault = if token.page != page.number {
                Some(format!(
                    "token belongs to page {} but was listed under page {}",
                    token.page, page.number
                ))
            } else {
                token.geometry_fault()
            };
            if let Some(reason) = fault {
                return Err(ExamineError::MalformedGeometry {
                    page: page.number,
                    index,
                    reason,
                });
            }
        }
    }
    Ok(())
}
