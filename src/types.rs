use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

/// Candidate transaction as decoded from a submission payload.
///
/// Field values are untyped until validation has run; unknown fields are
/// carried through untouched.
pub type TransactionEnvelope = Map<String, Value>;

/// Component name reported by the common-field check
pub const BASE_TRANSACTION: &str = "BaseTransaction";

/// Validation errors
///
/// Display renders the canonical `"<component>: <missing|invalid> <field>"`
/// message that downstream tooling matches on.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind")]
pub enum ValidationError {
    /// A required field is absent.
    #[error("{component}: missing {field}")]
    MissingRequiredField { component: String, field: String },

    /// A recognized field is present with the wrong primitive type.
    #[error("{component}: invalid {field}")]
    InvalidFieldType { component: String, field: String },

    /// A memo or signer wrapper has a bad key set or is missing an inner field.
    #[error("{component}: invalid {field}")]
    InvalidNestedStructure { component: String, field: String },

    /// A collection is present but has a shape its field forbids (empty `Signers`).
    #[error("{component}: invalid {field}")]
    InvalidCollectionShape { component: String, field: String },
}

impl ValidationError {
    pub fn missing(component: &str, field: &str) -> Self {
        Self::MissingRequiredField {
            component: component.to_string(),
            field: field.to_string(),
        }
    }

    pub fn invalid_type(component: &str, field: &str) -> Self {
        Self::InvalidFieldType {
            component: component.to_string(),
            field: field.to_string(),
        }
    }

    pub fn invalid_structure(component: &str, field: &str) -> Self {
        Self::InvalidNestedStructure {
            component: component.to_string(),
            field: field.to_string(),
        }
    }

    pub fn invalid_shape(component: &str, field: &str) -> Self {
        Self::InvalidCollectionShape {
            component: component.to_string(),
            field: field.to_string(),
        }
    }

    /// Name of the validator that raised the error.
    pub fn component(&self) -> &str {
        match self {
            Self::MissingRequiredField { component, .. }
            | Self::InvalidFieldType { component, .. }
            | Self::InvalidNestedStructure { component, .. }
            | Self::InvalidCollectionShape { component, .. } => component,
        }
    }

    /// Name of the offending field.
    pub fn field(&self) -> &str {
        match self {
            Self::MissingRequiredField { field, .. }
            | Self::InvalidFieldType { field, .. }
            | Self::InvalidNestedStructure { field, .. }
            | Self::InvalidCollectionShape { field, .. } => field,
        }
    }
}

/// Outcome reported back to whoever submitted the envelope
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status")]
pub enum Verdict {
    Accepted,
    Rejected { reason: String },
}

impl Verdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted)
    }
}

impl From<Result<(), ValidationError>> for Verdict {
    fn from(result: Result<(), ValidationError>) -> Self {
        match result {
            Ok(()) => Verdict::Accepted,
            Err(e) => Verdict::Rejected {
                reason: e.to_string(),
            },
        }
    }
}
