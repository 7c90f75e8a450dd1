//! Type-guard primitives over decoded JSON values.
//!
//! None of these coerce: `"145"` is a string, never an integer, and `12` is
//! an integer, never a string.

use serde_json::Value;

pub fn is_string(value: &Value) -> bool {
    value.is_string()
}

/// True for whole numbers, including floats with no fractional part (`1000.0`).
pub fn is_integer(value: &Value) -> bool {
    match value {
        Value::Number(n) if n.is_i64() || n.is_u64() => true,
        Value::Number(n) => n
            .as_f64()
            .is_some_and(|f| f.is_finite() && f.fract() == 0.0),
        _ => false,
    }
}

/// True for key-value objects only; arrays and null are not records.
pub fn is_record(value: &Value) -> bool {
    value.is_object()
}

pub fn is_array(value: &Value) -> bool {
    value.is_array()
}

/// JSON type name used in log and decode diagnostics
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
