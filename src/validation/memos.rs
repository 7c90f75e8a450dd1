//! `Memos` validation.
//!
//! Each element is `{ "Memo": { MemoType?, MemoFormat?, MemoData? } }`. The
//! body is a closed key set and must carry at least one of the three keys.
//! Values are expected to be hex but only their stringness is checked.

use serde::Serialize;
use serde_json::Value;

use super::shape::{self, ShapeError};

const WRAPPER: &str = "Memo";
const MEMO_KEYS: [&str; 3] = ["MemoType", "MemoFormat", "MemoData"];

/// A decoded annotation attached to a transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Memo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memo_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memo_format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memo_data: Option<String>,
}

/// Decodes a `Memos` value, failing on the first malformed element.
pub fn parse_memos(value: &Value) -> Result<Vec<Memo>, ShapeError> {
    shape::elements(value)?
        .iter()
        .enumerate()
        .map(|(index, element)| parse_memo(index, element))
        .collect()
}

pub fn validate_memos(value: &Value) -> Result<(), ShapeError> {
    parse_memos(value).map(|_| ())
}

fn parse_memo(index: usize, element: &Value) -> Result<Memo, ShapeError> {
    let body = shape::unwrap_body(index, element, WRAPPER)?;

    if let Some(key) = body.keys().find(|k| !MEMO_KEYS.contains(&k.as_str())) {
        return Err(ShapeError::UnexpectedKey {
            index,
            key: key.clone(),
        });
    }

    if body.is_empty() {
        return Err(ShapeError::EmptyBody { index });
    }

    Ok(Memo {
        memo_type: shape::optional_string(index, body, "MemoType")?,
        memo_format: shape::optional_string(index, body, "MemoFormat")?,
        memo_data: shape::optional_string(index, body, "MemoData")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parses_partial_memos() {
        let memos = parse_memos(&json!([
            { "Memo": { "MemoType": "72656e74", "MemoData": "72656e74" } },
            { "Memo": { "MemoFormat": "746578742f706c61696e" } },
        ]))
        .unwrap();

        assert_eq!(memos.len(), 2);
        assert_eq!(memos[0].memo_type.as_deref(), Some("72656e74"));
        assert_eq!(memos[0].memo_format, None);
        assert_eq!(memos[1].memo_format.as_deref(), Some("746578742f706c61696e"));
    }

    #[test]
    fn test_rejects_unknown_body_key() {
        let err = parse_memos(&json!([
            { "Memo": { "MemoData": "HI", "Address": "WRONG" } }
        ]))
        .unwrap_err();

        assert_eq!(
            err,
            ShapeError::UnexpectedKey {
                index: 0,
                key: "Address".to_string()
            }
        );
    }

    #[test]
    fn test_rejects_empty_body() {
        let err = parse_memos(&json!([{ "Memo": {} }])).unwrap_err();
        assert_eq!(err, ShapeError::EmptyBody { index: 0 });
    }

    #[test]
    fn test_rejects_non_string_value() {
        let err = parse_memos(&json!([
            { "Memo": { "MemoType": "6869" } },
            { "Memo": { "MemoData": 42 } },
        ]))
        .unwrap_err();

        assert!(matches!(err, ShapeError::NotAString { index: 1, .. }));
    }

    #[test]
    fn test_rejects_null_value() {
        let err = parse_memos(&json!([{ "Memo": { "MemoData": null } }])).unwrap_err();
        assert!(matches!(err, ShapeError::NotAString { index: 0, .. }));
    }

    #[test]
    fn test_rejects_bad_wrappers() {
        assert!(matches!(
            parse_memos(&json!([{ "Note": { "MemoData": "6869" } }])),
            Err(ShapeError::UnexpectedWrapperKey { index: 0, .. })
        ));
        assert!(matches!(
            parse_memos(&json!([{ "Memo": { "MemoData": "6869" }, "Extra": 1 }])),
            Err(ShapeError::UnexpectedWrapperKey { index: 0, .. })
        ));
        assert!(matches!(
            parse_memos(&json!([{}])),
            Err(ShapeError::MissingWrapper { index: 0, .. })
        ));
        assert!(matches!(
            parse_memos(&json!([{ "Memo": "6869" }])),
            Err(ShapeError::NotARecord { index: 0, .. })
        ));
        assert!(matches!(
            parse_memos(&json!(["6869"])),
            Err(ShapeError::NotARecord { index: 0, .. })
        ));
    }

    #[test]
    fn test_requires_array() {
        assert!(matches!(
            parse_memos(&json!({ "Memo": { "MemoData": "6869" } })),
            Err(ShapeError::NotAnArray { found: "object" })
        ));
    }

    #[test]
    fn test_empty_list_is_accepted() {
        assert_eq!(parse_memos(&json!([])).unwrap(), Vec::new());
    }

    #[test]
    fn test_serializes_with_ledger_names() {
        let memo = Memo {
            memo_type: Some("6869".to_string()),
            memo_format: None,
            memo_data: None,
        };
        assert_eq!(serde_json::to_value(&memo).unwrap(), json!({ "MemoType": "6869" }));
    }
}
