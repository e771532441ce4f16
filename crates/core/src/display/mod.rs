//! Read-only views over an [`Examination`].
//!
//! Three objects can be displayed: the `document` summary, its `keys`, and
//! its `records`. Each view is a serializable payload with a plain-text
//! rendering; building a view never touches the examination itself.

mod selector;
mod text;

use std::str::FromStr;

use serde::Serialize;

pub use selector::Selector;

use crate::error::{ExamineError, Result};
use crate::examine::Examination;
use crate::model::Record;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewObject {
    Document,
    Keys,
    Records,
}

impl FromStr for ViewObject {
    type Err = ExamineError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "document" => Ok(ViewObject::Document),
            "keys" => Ok(ViewObject::Keys),
            "records" => Ok(ViewObject::Records),
            other => Err(ExamineError::UnknownMode(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentMode {
    Summary,
    Details,
}

impl DocumentMode {
    pub fn parse(selector: Option<&str>) -> Result<Self> {
        match selector {
            None | Some("summary") => Ok(DocumentMode::Summary),
            Some("details") => Ok(DocumentMode::Details),
            Some(other) => Err(ExamineError::UnknownMode(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TicketView {
    #[serde(rename = "type")]
    pub ticket_type: Option<String>,
    pub number: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyCount {
    pub key: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentView {
    pub mode: DocumentMode,
    pub ticket: TicketView,
    pub pages: u32,
    pub record_count: usize,
    pub unique_key_count: usize,
    pub keys: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_counts: Option<Vec<KeyCount>>,
}

/// A rendered-ready payload. Serializes to the same JSON shapes the text
/// renderer reads from.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum View<'a> {
    Document {
        document: DocumentView,
    },
    Keys {
        keys: Vec<&'a str>,
    },
    MatchedKeys {
        selector: String,
        keys: Vec<&'a str>,
    },
    KeyRecords {
        key: String,
        records: Vec<&'a Record>,
    },
    Records {
        records: Vec<&'a Record>,
    },
    MatchedRecords {
        selector: String,
        records: Vec<&'a Record>,
    },
}

/// Build the view of `object`, narrowed by `selector`.
pub fn display_view<'a>(
    exam: &'a Examination,
    object: ViewObject,
    selector: Option<&str>,
) -> Result<View<'a>> {
    match object {
        ViewObject::Document => document_view(exam, DocumentMode::parse(selector)?),
        ViewObject::Keys => keys_view(exam, selector),
        ViewObject::Records => records_view(exam, selector),
    }
}

fn document_view(exam: &Examination, mode: DocumentMode) -> Result<View<'static>> {
    let envelope = exam.envelope();
    let ticket = TicketView {
        ticket_type: envelope
            .identity
            .as_ref()
            .and_then(|i| i.ticket_type())
            .map(str::to_owned),
        number: envelope
            .identity
            .as_ref()
            .and_then(|i| i.ticket_number())
            .map(str::to_owned),
    };
    let key_counts = match mode {
        DocumentMode::Summary => None,
        DocumentMode::Details => Some(
            exam.records()
                .key_counts()
                .into_iter()
                .map(|(key, count)| KeyCount {
                    key: key.to_string(),
                    count,
                })
                .collect(),
        ),
    };
    Ok(View::Document {
        document: DocumentView {
            mode,
            ticket,
            pages: envelope.pages,
            record_count: envelope.record_count,
            unique_key_count: envelope.unique_key_count,
            keys: envelope.keys.into_iter().collect(),
            key_counts,
        },
    })
}

fn keys_view<'a>(exam: &'a Examination, selector: Option<&str>) -> Result<View<'a>> {
    let keys = exam.records().keys();
    let Some(raw) = selector else {
        return Ok(View::Keys {
            keys: keys.into_iter().collect(),
        });
    };
    match Selector::parse(raw)? {
        Selector::Exact(key) => {
            let records = exam.records().with_key(&key).collect();
            Ok(View::KeyRecords { key, records })
        }
        sel @ Selector::Pattern { .. } => Ok(View::MatchedKeys {
            keys: keys.into_iter().filter(|k| sel.matches(k)).collect(),
            selector: sel.as_str().to_string(),
        }),
    }
}

fn records_view<'a>(exam: &'a Examination, selector: Option<&str>) -> Result<View<'a>> {
    let Some(raw) = selector else {
        return Ok(View::Records {
            records: exam.records().iter().collect(),
        });
    };
    match Selector::parse(raw)? {
        Selector::Exact(key) => {
            let records = exam.records().with_key(&key).collect();
            Ok(View::KeyRecords { key, records })
        }
        sel @ Selector::Pattern { .. } => Ok(View::MatchedRecords {
            records: exam
                .records()
                .iter()
                .filter(|r| sel.matches(&r.key) || sel.matches(&r.value))
                .collect(),
            selector: sel.as_str().to_string(),
        }),
    }
}
