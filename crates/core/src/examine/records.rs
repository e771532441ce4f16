//! The final record list and everything derived from it.

use indexmap::{IndexMap, IndexSet};
use serde::Serialize;

use crate::model::{DocumentIdentity, Record};

/// Ordered, read-only list of finalized records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RecordSet {
    records: Vec<Record>,
}

impl RecordSet {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct keys, case preserved, in first-seen order.
    pub fn keys(&self) -> IndexSet<&str> {
        self.records.iter().map(|r| r.key.as_str()).collect()
    }

    pub fn unique_key_count(&self) -> usize {
        self.keys().len()
    }

    /// How many records carry each key, in first-seen key order.
    pub fn key_counts(&self) -> IndexMap<&str, usize> {
        let mut counts: IndexMap<&str, usize> = IndexMap::new();
        for record in &self.records {
            *counts.entry(record.key.as_str()).or_default() += 1;
        }
        counts
    }

    /// Records whose key is exactly `key`.
    pub fn with_key<'s, 'k>(&'s self, key: &'k str) -> impl Iterator<Item = &'s Record> {
        self.records.iter().filter(move |r| r.key == key)
    }
}

impl<'a> IntoIterator for &'a RecordSet {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Document-level summary, derived from a [`RecordSet`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentEnvelope {
    pub identity: Option<DocumentIdentity>,
    pub pages: u32,
    pub record_count: usize,
    pub unique_key_count: usize,
    pub keys: IndexSet<String>,
}

impl DocumentEnvelope {
    pub fn derive(identity: Option<DocumentIdentity>, pages: u32, records: &RecordSet) -> Self {
        let keys: IndexSet<String> = records.keys().into_iter().map(str::to_owned).collect();
        Self {
            identity,
            pages,
            record_count: records.len(),
            unique_key_count: keys.len(),
            keys,
        }
    }
}
