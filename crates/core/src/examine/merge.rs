//! Continuation merging.
//!
//! Turns classified lines into records. The only state is the record that
//! is still open for value extension; it survives page breaks.

use super::diagnostics::Diagnostic;
use crate::layout::ClassifiedLine;
use crate::model::Record;

#[derive(Debug, Default)]
pub struct ContinuationMerger {
    open: Option<Record>,
    finished: Vec<Record>,
}

impl ContinuationMerger {
    pub fn new() -> Self {
        Self::default()
    }

    /// The record currently accepting continuation lines.
    pub fn open_record(&self) -> Option<&Record> {
        self.open.as_ref()
    }

    /// Records already closed, in order.
    pub fn finished(&self) -> &[Record] {
        &self.finished
    }

    /// Feed the next line.
    ///
    /// - key text: close the open record and open a new one
    /// - value text only: append to the open record, or drop it as an orphan
    /// - nothing: ignored
    pub fn push(&mut self, line: ClassifiedLine, diagnostics: &mut Vec<Diagnostic>) {
        if line.is_blank() {
            return;
        }

        if !line.key.is_empty() {
            self.close();
            self.open = Some(Record::new(line.page, line.key, line.value));
            return;
        }

        match self.open.as_mut() {
            Some(record) => {
                if !record.value.is_empty() {
                    record.value.push(' ');
                }
                record.value.push_str(&line.value);
            }
            None => {
                tracing::warn!(page = line.page, text = %line.value, "orphan continuation");
                diagnostics.push(Diagnostic::OrphanContinuation {
                    page: line.page,
                    text: line.value,
                });
            }
        }
    }

    fn close(&mut self) {
        if let Some(record) = self.open.take() {
            self.finished.push(record);
        }
    }

    /// Close any open record and return everything in order.
    pub fn finish(mut self) -> Vec<Record> {
        self.close();
        self.finished
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(page: u32, key: &str, value: &str) -> ClassifiedLine {
        ClassifiedLine {
            page,
            key: key.into(),
            value: value.into(),
        }
    }

    #[test]
    fn continuation_extends_open_record() {
        let mut diags = Vec::new();
        let mut merger = ContinuationMerger::new();
        merger.push(line(1, "Status", "Open"), &mut diags);
        merger.push(line(1, "", "(manually set)"), &mut diags);
        assert_eq!(merger.open_record().unwrap().value, "Open (manually set)");
        assert!(merger.finished().is_empty());

        merger.push(line(1, "Priority", "High"), &mut diags);
        assert_eq!(merger.finished().len(), 1);

        let records = merger.finish();
        assert_eq!(
            records,
            vec![
                Record::new(1, "Status", "Open (manually set)"),
                Record::new(1, "Priority", "High"),
            ]
        );
        assert!(diags.is_empty());
    }

    #[test]
    fn continuation_of_empty_value_has_no_leading_space() {
        let mut diags = Vec::new();
        let mut merger = ContinuationMerger::new();
        merger.push(line(1, "Description", ""), &mut diags);
        merger.push(line(2, "", "printer on fire"), &mut diags);
        assert_eq!(
            merger.finish(),
            vec![Record::new(1, "Description", "printer on fire")]
        );
    }

    #[test]
    fn orphan_is_reported_and_dropped() {
        let mut diags = Vec::new();
        let mut merger = ContinuationMerger::new();
        merger.push(line(1, "", "stray"), &mut diags);
        merger.push(line(1, "", ""), &mut diags);
        assert!(merger.open_record().is_none());
        assert!(merger.finish().is_empty());
        assert_eq!(
            diags,
            vec![Diagnostic::OrphanContinuation {
                page: 1,
                text: "stray".into()
            }]
        );
    }
}
