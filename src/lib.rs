//! This crate checks the fields common to every ledger transaction before
//! type-specific validation, signing, or submission takes place.
//! It includes modules for data types, envelope decoding, validation, and configuration.

pub mod types; // Envelope alias, validation errors, and verdicts.
pub mod envelope; // Decodes JSON text into a transaction envelope.
pub mod validation; // Common-field, memo, and signer validation.
pub mod config; // Defines and loads tool configuration.

// Re-export commonly used types and configurations for easier access.
pub use types::*;
pub use config::Config;
pub use envelope::{EnvelopeError, parse_envelope};
pub use validation::{Validator, validate_base_transaction};
