//! `Signers` validation.
//!
//! Each element is `{ "Signer": { Account, TxnSignature, SigningPubKey } }`
//! with all three fields required. A present but empty list is rejected.

use serde::Serialize;
use serde_json::Value;

use super::shape::{self, ShapeError};

const WRAPPER: &str = "Signer";

/// One endorsement in a multi-signed transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Signer {
    pub account: String,
    pub txn_signature: String,
    pub signing_pub_key: String,
}

/// Decodes a `Signers` value, failing on the first malformed element.
pub fn parse_signers(value: &Value) -> Result<Vec<Signer>, ShapeError> {
    let elements = shape::elements(value)?;
    if elements.is_empty() {
        return Err(ShapeError::Empty);
    }

    elements
        .iter()
        .enumerate()
        .map(|(index, element)| parse_signer(index, element))
        .collect()
}

pub fn validate_signers(value: &Value) -> Result<(), ShapeError> {
    parse_signers(value).map(|_| ())
}

fn parse_signer(index: usize, element: &Value) -> Result<Signer, ShapeError> {
    let body = shape::unwrap_body(index, element, WRAPPER)?;

    Ok(Signer {
        account: shape::required_string(index, body, "Account")?,
        txn_signature: shape::required_string(index, body, "TxnSignature")?,
        signing_pub_key: shape::required_string(index, body, "SigningPubKey")?,
    })
}
