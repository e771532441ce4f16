use serde::{Deserialize, Serialize};

/// One finalized key/value pair.
///
/// `page` is the page on which the key appeared; a value that continues
/// onto later pages stays filed under that first page.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    pub page: u32,
    pub key: String,
    pub value: String,
}

impl Record {
    pub fn new(page: u32, key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            page,
            key: key.into(),
            value: value.into(),
        }
    }
}

/// The type/number pair a document is filed under.
///
/// Either field may be empty when only half of the pair was found.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentIdentity {
    pub ticket_type: String,
    pub ticket_number: String,
}

impl DocumentIdentity {
    pub fn ticket_type(&self) -> Option<&str> {
        Some(self.ticket_type.as_str()).filter(|s| !s.is_empty())
    }

    pub fn ticket_number(&self) -> Option<&str> {
        Some(self.ticket_number.as_str()).filter(|s| !s.is_empty())
    }
}
