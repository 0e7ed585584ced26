//! Access to the remote bills store.
//!
//! The store itself is an external collaborator; this module only defines the
//! shape the rest of the crate consumes plus two adapters: a JSON file store
//! and an in-memory mock used by tests and demos.

pub mod json_store;
pub mod mock;

use billed_domain::Bill;
use thiserror::Error;

use crate::errors::BillsError;

pub use json_store::JsonBillStore;
pub use mock::MockStore;

/// Failure reported by the store. The message is shown to the user verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct NetworkError {
    message: String,
}

impl NetworkError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Abstraction over backends able to list the current user's bills.
pub trait BillStore: Send + Sync {
    fn list(&self) -> Result<Vec<Bill>, NetworkError>;
}

impl<T: BillStore + ?Sized> BillStore for Box<T> {
    fn list(&self) -> Result<Vec<Bill>, NetworkError> {
        (**self).list()
    }
}

/// Decodes a JSON array of bill documents, rejecting the whole batch on the
/// first malformed record.
pub fn decode_batch(json: &str) -> Result<Vec<Bill>, BillsError> {
    let documents: Vec<serde_json::Value> = serde_json::from_str(json)?;
    let mut bills = Vec::with_capacity(documents.len());
    for (index, document) in documents.into_iter().enumerate() {
        let bill: Bill = serde_json::from_value(document).map_err(|err| {
            tracing::warn!(index, error = %err, "rejecting bill batch");
            BillsError::MalformedRecord {
                index,
                reason: err.to_string(),
            }
        })?;
        validate(&bill).map_err(|reason| {
            tracing::warn!(index, %reason, "rejecting bill batch");
            BillsError::MalformedRecord { index, reason }
        })?;
        bills.push(bill);
    }
    tracing::debug!(count = bills.len(), "decoded bill batch");
    Ok(bills)
}

/// Checks the invariants serde cannot express.
pub fn validate(bill: &Bill) -> Result<(), String> {
    let required = [
        ("id", bill.id.as_str()),
        ("type", bill.kind.as_str()),
        ("name", bill.name.as_str()),
        ("date", bill.date.as_str()),
    ];
    if let Some((field, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
        return Err(format!("field `{field}` is empty"));
    }
    if !bill.amount.is_finite() || bill.amount < 0.0 {
        return Err(format!("amount `{}` must be a non-negative number", bill.amount));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_valid_batch() {
        let json = r#"[
            {"id":"a","type":"Transports","name":"taxi","date":"2001-01-01","amount":100,"status":"refused"},
            {"id":"b","type":"Restaurants et bars","name":"diner","date":"4 Avr. 23","amount":20.5,"status":"accepted","fileUrl":"https://files.tld/b.jpg"}
        ]"#;
        let bills = decode_batch(json).expect("decode batch");
        assert_eq!(bills.len(), 2);
        assert_eq!(bills[1].receipt_url(), Some("https://files.tld/b.jpg"));
    }

    #[test]
    fn missing_field_rejects_batch_with_index() {
        let json = r#"[
            {"id":"a","type":"Transports","name":"taxi","date":"2001-01-01","amount":100,"status":"refused"},
            {"id":"b","type":"Transports","date":"2001-01-01","amount":100,"status":"refused"}
        ]"#;
        match decode_batch(json) {
            Err(BillsError::MalformedRecord { index, reason }) => {
                assert_eq!(index, 1);
                assert!(reason.contains("name"), "unexpected reason: {reason}");
            }
            other => panic!("expected malformed record, got {other:?}"),
        }
    }

    #[test]
    fn blank_fields_and_negative_amounts_are_rejected() {
        let blank = r#"[{"id":"a","type":" ","name":"taxi","date":"2001-01-01","amount":1,"status":"pending"}]"#;
        assert!(matches!(
            decode_batch(blank),
            Err(BillsError::MalformedRecord { index: 0, .. })
        ));

        let negative = r#"[{"id":"a","type":"t","name":"taxi","date":"2001-01-01","amount":-3,"status":"pending"}]"#;
        assert!(matches!(
            decode_batch(negative),
            Err(BillsError::MalformedRecord { index: 0, .. })
        ));
    }

    #[test]
    fn non_array_document_is_a_serde_error() {
        assert!(matches!(decode_batch("{}"), Err(BillsError::Serde(_))));
    }

    #[test]
    fn unparsable_dates_are_not_malformed() {
        let json = r#"[{"id":"a","type":"t","name":"n","date":"someday","amount":1,"status":"pending"}]"#;
        assert_eq!(decode_batch(json).expect("decode").len(), 1);
    }
}
