use tracing::{debug, trace};

use super::{
    guards,
    rules::{FieldFault, FieldState, OPTIONAL_FIELDS},
};
use crate::{BASE_TRANSACTION, TransactionEnvelope, ValidationError};

const REQUIRED_FIELDS: [&str; 2] = ["Account", "TransactionType"];

/// Validate the fields shared by every transaction type.
///
/// Checks `Account` and `TransactionType`, then each optional common field in
/// the order of `OPTIONAL_FIELDS`. Returns the first violation found; unknown
/// fields are left alone. Type-specific validators run this first.
pub fn validate_base_transaction(envelope: &TransactionEnvelope) -> Result<(), ValidationError> {
    for field in REQUIRED_FIELDS {
        match envelope.get(field) {
            None => return Err(ValidationError::missing(BASE_TRANSACTION, field)),
            Some(value) if !guards::is_string(value) => {
                return Err(ValidationError::invalid_type(BASE_TRANSACTION, field));
            }
            Some(_) => {}
        }
    }

    for rule in &OPTIONAL_FIELDS {
        match rule.inspect(envelope) {
            FieldState::Absent => {}
            FieldState::Valid(value) => {
                trace!("{} accepted ({})", rule.name, guards::type_name(value));
            }
            FieldState::Invalid(fault) => {
                if let FieldFault::Nested(cause) = &fault {
                    debug!("{} rejected: {}", rule.name, cause);
                }
                return Err(fault.into_error(BASE_TRANSACTION, rule.name));
            }
        }
    }

    Ok(())
}
