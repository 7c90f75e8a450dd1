//! Envelope Decoding Module
//!
//! Turns submitted JSON text into a `TransactionEnvelope`. Only the outer
//! shape is checked here: the payload must be a JSON object. Field-level
//! checks belong to `validation`.

use crate::{TransactionEnvelope, validation::guards};
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EnvelopeError {
    #[error("malformed JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("transaction must be a JSON object, found {found}")]
    NotARecord { found: &'static str },
}

/// Decode a transaction envelope from JSON text
pub fn parse_envelope(input: &str) -> Result<TransactionEnvelope, EnvelopeError> {
    match serde_json::from_str::<Value>(input)? {
        Value::Object(envelope) => Ok(envelope),
        other => Err(EnvelopeError::NotARecord {
            found: guards::type_name(&other),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_object() {
        let input = r#"{"Account": "rAlice", "TransactionType": "Payment"}"#;
        let envelope = parse_envelope(input).unwrap();
        assert_eq!(envelope["Account"], "rAlice");
        assert_eq!(envelope.len(), 2);
    }

    #[test]
    fn test_rejects_non_object() {
        let err = parse_envelope("[1, 2]").unwrap_err();
        assert!(matches!(err, EnvelopeError::NotARecord { found: "array" }));
        assert_eq!(err.to_string(), "transaction must be a JSON object, found array");
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(parse_envelope("{\"Account\": "), Err(EnvelopeError::Parse(_))));
    }
}
