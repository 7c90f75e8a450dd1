//! Common optional fields and the type each must have when present.

use serde_json::Value;

use super::{
    guards,
    memos::validate_memos,
    shape::ShapeError,
    signers::validate_signers,
};
use crate::{TransactionEnvelope, ValidationError};

/// Shape a field must have when present
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Integer,
    Memos,
    Signers,
}

/// Why a present field was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldFault {
    WrongType,
    Nested(ShapeError),
}

/// Decoded state of one field in an envelope
#[derive(Debug, Clone, PartialEq)]
pub enum FieldState<'a> {
    Absent,
    Valid(&'a Value),
    Invalid(FieldFault),
}

#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub name: &'static str,
    pub kind: FieldKind,
}

/// Checked in this order; the first failure wins.
pub const OPTIONAL_FIELDS: [FieldRule; 12] = [
    FieldRule::new("Fee", FieldKind::String),
    FieldRule::new("Sequence", FieldKind::Integer),
    FieldRule::new("AccountTxnID", FieldKind::String),
    FieldRule::new("Flags", FieldKind::Integer),
    FieldRule::new("LastLedgerSequence", FieldKind::Integer),
    FieldRule::new("Memos", FieldKind::Memos),
    FieldRule::new("Signers", FieldKind::Signers),
    FieldRule::new("SourceTag", FieldKind::Integer),
    FieldRule::new("SigningPubKey", FieldKind::String),
    FieldRule::new("TicketSequence", FieldKind::Integer),
    FieldRule::new("TxnSignature", FieldKind::String),
    FieldRule::new("NetworkID", FieldKind::Integer),
];

impl FieldRule {
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self { name, kind }
    }

    /// Looks the field up in `envelope` and decodes it against this rule.
    ///
    /// A present `null` is invalid, not absent.
    pub fn inspect<'a>(&self, envelope: &'a TransactionEnvelope) -> FieldState<'a> {
        let Some(value) = envelope.get(self.name) else {
            return FieldState::Absent;
        };

        let verdict = match self.kind {
            FieldKind::String => type_fault(guards::is_string(value)),
            FieldKind::Integer => type_fault(guards::is_integer(value)),
            FieldKind::Memos => validate_memos(value).map_err(FieldFault::Nested),
            FieldKind::Signers => validate_signers(value).map_err(FieldFault::Nested),
        };

        match verdict {
            Ok(()) => FieldState::Valid(value),
            Err(fault) => FieldState::Invalid(fault),
        }
    }
}

fn type_fault(ok: bool) -> Result<(), FieldFault> {
    if ok { Ok(()) } else { Err(FieldFault::WrongType) }
}

impl FieldFault {
    /// Maps the fault onto the error surfaced to callers, naming only the field.
    pub fn into_error(self, component: &str, field: &str) -> ValidationError {
        match self {
            FieldFault::WrongType | FieldFault::Nested(ShapeError::NotAnArray { .. }) => {
                ValidationError::invalid_type(component, field)
            }
            FieldFault::Nested(ShapeError::Empty) => {
                ValidationError::invalid_shape(component, field)
            }
            FieldFault::Nested(_) => ValidationError::invalid_structure(component, field),
        }
    }
}
