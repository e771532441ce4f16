//! Human-readable rendering of views.

use std::io::{self, Write};

use super::{DocumentView, View};
use crate::model::Record;

impl View<'_> {
    /// Write the text rendering of this view.
    pub fn write_text<W: Write>(&self, out: &mut W) -> io::Result<()> {
        match self {
            View::Document { document } => write_document(out, document),
            View::Keys { keys } | View::MatchedKeys { keys, .. } => {
                writeln!(out, "=== KEYS ===")?;
                for key in keys {
                    writeln!(out, "{key}")?;
                }
                Ok(())
            }
            View::KeyRecords { records, .. }
            | View::Records { records }
            | View::MatchedRecords { records, .. } => write_records(out, records),
        }
    }

    pub fn to_text(&self) -> String {
        let mut buf = Vec::new();
        // writing into a Vec cannot fail
        let _ = self.write_text(&mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    }
}

fn write_document<W: Write>(out: &mut W, doc: &DocumentView) -> io::Result<()> {
    let or_none = |v: &Option<String>| v.clone().unwrap_or_else(|| "(none)".to_string());

    writeln!(out, "=== DOCUMENT ===")?;
    writeln!(out, "Ticket Type   : {}", or_none(&doc.ticket.ticket_type))?;
    writeln!(out, "Ticket Number : {}", or_none(&doc.ticket.number))?;
    writeln!(out, "Pages         : {}", doc.pages)?;
    writeln!(out, "Records       : {}", doc.record_count)?;
    writeln!(out, "Unique Keys   : {}", doc.unique_key_count)?;
    writeln!(out)?;

    match &doc.key_counts {
        Some(counts) => {
            for kc in counts {
                writeln!(out, "- {} ({})", kc.key, kc.count)?;
            }
        }
        None => {
            for key in &doc.keys {
                writeln!(out, "- {key}")?;
            }
        }
    }
    Ok(())
}

fn write_records<W: Write>(out: &mut W, records: &[&Record]) -> io::Result<()> {
    writeln!(out, "=== RECORDS ===")?;
    for r in records {
        writeln!(out)?;
        writeln!(out, "--- page {} | {} ---", r.page, r.key)?;
        writeln!(out, "{}", r.value)?;
    }
    Ok(())
}
