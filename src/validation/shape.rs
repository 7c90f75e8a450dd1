use serde_json::{Map, Value};
use thiserror::Error;

use super::guards;

/// Why a nested collection (`Memos`, `Signers`) was rejected.
///
/// Only ever logged; the surfaced `ValidationError` names the collection field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("expected an array, found {found}")]
    NotAnArray { found: &'static str },

    #[error("collection must not be empty")]
    Empty,

    #[error("element {index}: expected an object, found {found}")]
    NotARecord { index: usize, found: &'static str },

    #[error("element {index}: missing `{wrapper}` wrapper")]
    MissingWrapper { index: usize, wrapper: &'static str },

    #[error("element {index}: unexpected wrapper key `{key}`")]
    UnexpectedWrapperKey { index: usize, key: String },

    #[error("element {index}: unexpected key `{key}`")]
    UnexpectedKey { index: usize, key: String },

    #[error("element {index}: missing `{key}`")]
    MissingKey { index: usize, key: &'static str },

    #[error("element {index}: `{key}` must be a string")]
    NotAString { index: usize, key: String },

    #[error("element {index}: body is empty")]
    EmptyBody { index: usize },
}

/// Checks `value` is an array and hands back its elements.
pub(crate) fn elements(value: &Value) -> Result<&[Value], ShapeError> {
    match value {
        Value::Array(items) if guards::is_array(value) => Ok(items),
        _ => Err(ShapeError::NotAnArray {
            found: guards::type_name(value),
        }),
    }
}

/// Opens a single-key `{ <wrapper>: { ... } }` record and returns the body.
pub(crate) fn unwrap_body<'a>(
    index: usize,
    element: &'a Value,
    wrapper: &'static str,
) -> Result<&'a Map<String, Value>, ShapeError> {
    let record = as_record(index, element)?;

    if let Some(key) = record.keys().find(|k| k.as_str() != wrapper) {
        return Err(ShapeError::UnexpectedWrapperKey {
            index,
            key: key.clone(),
        });
    }

    let body = record
        .get(wrapper)
        .ok_or(ShapeError::MissingWrapper { index, wrapper })?;

    as_record(index, body)
}

fn as_record(index: usize, value: &Value) -> Result<&Map<String, Value>, ShapeError> {
    match value {
        Value::Object(record) if guards::is_record(value) => Ok(record),
        _ => Err(ShapeError::NotARecord {
            index,
            found: guards::type_name(value),
        }),
    }
}

/// Reads an optional string key; present values of any other type are an error.
pub(crate) fn optional_string(
    index: usize,
    body: &Map<String, Value>,
    key: &'static str,
) -> Result<Option<String>, ShapeError> {
    match body.get(key) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(ShapeError::NotAString {
            index,
            key: key.to_string(),
        }),
    }
}

pub(crate) fn required_string(
    index: usize,
    body: &Map<String, Value>,
    key: &'static str,
) -> Result<String, ShapeError> {
    optional_string(index, body, key)?.ok_or(ShapeError::MissingKey { index, key })
}
