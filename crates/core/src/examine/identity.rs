//! Promotion of the document identity out of the record list.

use crate::model::{DocumentIdentity, Record};
use crate::params::IdentityKeys;

/// Remove the first type record and the first number record from
/// `records` and combine them into the document identity.
///
/// Later records with the same keys stay in the list. Finding only one
/// half still yields an identity, with the other field empty.
pub fn promote_identity(
    records: Vec<Record>,
    keys: &IdentityKeys,
) -> (Option<DocumentIdentity>, Vec<Record>) {
    let mut ticket_type: Option<String> = None;
    let mut ticket_number: Option<String> = None;
    let mut remaining = Vec::with_capacity(records.len());

    for record in records {
        if ticket_type.is_none() && keys.is_type_key(&record.key) {
            tracing::debug!(page = record.page, value = %record.value, "promoted ticket type");
            ticket_type = Some(record.value);
        } else if ticket_number.is_none() && keys.is_number_key(&record.key) {
            tracing::debug!(page = record.page, value = %record.value, "promoted ticket number");
            ticket_number = Some(record.value);
        } else {
            remaining.push(record);
        }
    }

    let identity = match (ticket_type, ticket_number) {
        (None, None) => None,
        (ticket_type, ticket_number) => Some(DocumentIdentity {
            ticket_type: ticket_type.unwrap_or_default(),
            ticket_number: ticket_number.unwrap_or_default(),
        }),
    };
    (identity, remaining)
}
