//! Transaction Validation Module
//!
//! This module checks the fields common to every transaction before any
//! type-specific validation runs: required `Account` and `TransactionType`,
//! the typed optional fields, and the nested `Memos` and `Signers` lists.
//! Validation is fail-fast and never mutates the envelope.

pub mod guards;
mod shape;
mod rules;
mod memos;
mod signers;
mod base;
mod validator;


pub use shape::ShapeError;
pub use rules::{FieldFault, FieldKind, FieldRule, FieldState, OPTIONAL_FIELDS};
pub use memos::{Memo, parse_memos, validate_memos};
pub use signers::{Signer, parse_signers, validate_signers};
pub use base::validate_base_transaction;
pub use validator::{TransactionCheck, Validator};
