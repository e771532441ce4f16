//! Key/value zone classification of a single line.

use serde::Serialize;

use super::lines::{Line, join_text};
use crate::model::Token;

/// Which side of the split boundary a token starts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Zone {
    Key,
    Value,
}

impl Zone {
    pub fn of(token: &Token, boundary: f64) -> Zone {
        if token.x0 < boundary {
            Zone::Key
        } else {
            Zone::Value
        }
    }
}

/// A line reduced to its key text and value text.
///
/// Both strings are trimmed; either may be empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedLine {
    pub page: u32,
    pub key: String,
    pub value: String,
}

impl ClassifiedLine {
    /// Nothing on either side of the boundary.
    pub fn is_blank(&self) -> bool {
        self.key.is_empty() && self.value.is_empty()
    }

    /// Value text with no key: extends the open record.
    pub fn is_continuation(&self) -> bool {
        self.key.is_empty() && !self.value.is_empty()
    }
}

/// Split a line into its key-run and value-run at `boundary`.
///
/// Line tokens are already in x0 order, so each zone is one contiguous run.
pub fn classify_line(line: &Line<'_>, boundary: f64) -> ClassifiedLine {
    let split_at = line
        .tokens()
        .iter()
        .position(|t| Zone::of(t, boundary) == Zone::Value)
        .unwrap_or(line.len());
    let (key_run, value_run) = line.tokens().split_at(split_at);

    ClassifiedLine {
        page: line.page(),
        key: join_text(key_run.iter().copied()),
        value: join_text(value_run.iter().copied()),
    }
}
