//! Emptiness and coercion rules for part values.
//!
//! The parts store is an untyped mapping, so "empty" and "integer" are
//! policy decisions rather than types. Both rules live here, enumerated
//! and testable, instead of being scattered across call sites.

use serde_json::Value;

/// Check whether a part value counts as empty.
///
/// Empty cases: `Null`, `false`, numeric zero (integer or float), the empty
/// string, the empty array, the empty object. Everything else is non-empty;
/// in particular the string `"0"` is a non-empty string.
///
/// `push` drops empty contributions and `push_init_with` refuses an empty
/// seed; the canonical-URL commit step uses the same rule to decide whether
/// a slot is still unset.
pub fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => {
            n.as_i64() == Some(0) || n.as_u64() == Some(0) || n.as_f64() == Some(0.0)
        }
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

/// Best-effort integer conversion for rule-set fields.
///
/// Malformed fields are coerced, never rejected: integers pass through,
/// floats truncate toward zero, strings contribute their leading integer
/// prefix (or 0), booleans map to 0/1, and anything else is 0.
pub fn coerce_int(value: &Value) -> i64 {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i
            } else {
                n.as_f64().map(|f| f.trunc() as i64).unwrap_or(0)
            }
        }
        Value::String(s) => leading_int(s),
        Value::Bool(b) => i64::from(*b),
        _ => 0,
    }
}

/// Parse the leading integer prefix of a string (`"3abc"` -> 3, `"abc"` -> 0).
fn leading_int(s: &str) -> i64 {
    let trimmed = s.trim_start();
    let mut end = 0;
    for (i, c) in trimmed.char_indices() {
        if c.is_ascii_digit() || (i == 0 && (c == '-' || c == '+')) {
            end = i + c.len_utf8();
        } else {
            break;
        }
    }
    trimmed[..end].parse().unwrap_or(0)
}

/// Human-readable kind of a value, for error messages.
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_is_empty_cases() {
        assert!(is_empty(&Value::Null));
        assert!(is_empty(&json!(false)));
        assert!(is_empty(&json!(0)));
        assert!(is_empty(&json!(0.0)));
        assert!(is_empty(&json!("")));
        assert!(is_empty(&json!([])));
        assert!(is_empty(&json!({})));
    }

    #[test]
    fn test_is_empty_non_empty_cases() {
        assert!(!is_empty(&json!(true)));
        assert!(!is_empty(&json!(1)));
        assert!(!is_empty(&json!(-0.5)));
        assert!(!is_empty(&json!("0")));
        assert!(!is_empty(&json!(" ")));
        assert!(!is_empty(&json!([0])));
        assert!(!is_empty(&json!({"a": null})));
    }

    #[test]
    fn test_coerce_int_numbers() {
        assert_eq!(coerce_int(&json!(2)), 2);
        assert_eq!(coerce_int(&json!(-7)), -7);
        assert_eq!(coerce_int(&json!(2.9)), 2);
        assert_eq!(coerce_int(&json!(-2.9)), -2);
    }

    #[test]
    fn test_coerce_int_strings() {
        assert_eq!(coerce_int(&json!("2")), 2);
        assert_eq!(coerce_int(&json!("3abc")), 3);
        assert_eq!(coerce_int(&json!("  4")), 4);
        assert_eq!(coerce_int(&json!("-5x")), -5);
        assert_eq!(coerce_int(&json!("abc")), 0);
        assert_eq!(coerce_int(&json!("")), 0);
    }

    #[test]
    fn test_coerce_int_other() {
        assert_eq!(coerce_int(&json!(true)), 1);
        assert_eq!(coerce_int(&json!(false)), 0);
        assert_eq!(coerce_int(&Value::Null), 0);
        assert_eq!(coerce_int(&json!([1, 2])), 0);
    }

    #[test]
    fn test_value_kind() {
        assert_eq!(value_kind(&Value::Null), "null");
        assert_eq!(value_kind(&json!(42)), "number");
        assert_eq!(value_kind(&json!("x")), "string");
        assert_eq!(value_kind(&json!([])), "array");
    }
}
