use crate::{TransactionEnvelope, ValidationError, Verdict};
use tracing::{debug, warn};

use super::validate_base_transaction;

/// A validation stage that runs after the common-field check has passed
///
/// Type-specific validators (payment, trust-set, ...) implement this. Picking
/// the right one for a given `TransactionType` is the caller's job.
pub trait TransactionCheck: Send + Sync {
    /// Name used in logs
    fn name(&self) -> &str;

    fn check(&self, envelope: &TransactionEnvelope) -> Result<(), ValidationError>;
}

#[derive(Default)]
pub struct Validator {
    checks: Vec<Box<dyn TransactionCheck>>,
}

impl Validator {
    /// Creates a validator that runs only the common-field check
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a check that runs after the common-field check and any
    /// previously added checks.
    pub fn with_check(mut self, check: Box<dyn TransactionCheck>) -> Self {
        self.checks.push(check);
        self
    }

    /// Validate an envelope
    /// Returns Ok(()) if valid, the first ValidationError otherwise
    pub fn validate(&self, envelope: &TransactionEnvelope) -> Result<(), ValidationError> {
        debug!(
            "Validating {} transaction",
            envelope
                .get("TransactionType")
                .and_then(|v| v.as_str())
                .unwrap_or("<untyped>")
        );

        // 1. Common fields
        if let Err(e) = validate_base_transaction(envelope) {
            warn!("Transaction rejected: {}", e);
            return Err(e);
        }

        // 2. Registered checks, in order
        for check in &self.checks {
            if let Err(e) = check.check(envelope) {
                warn!("Transaction rejected by {}: {}", check.name(), e);
                return Err(e);
            }
        }

        debug!("Transaction validation successful");
        Ok(())
    }

    pub fn verdict(&self, envelope: &TransactionEnvelope) -> Verdict {
        self.validate(envelope).into()
    }
}
