//! Best-effort scalar type inference for raw values.

use crate::{Number, Value};

/// Converts a raw value into the most specific scalar it spells.
///
/// Checked in order: a value still wrapped in literal double quotes is
/// unwrapped and kept as a string; `null`; `true` / `false`; a base-10
/// `i64`; an `f64`. Anything else is returned verbatim as a string.
///
/// # Examples
///
/// ```rust
/// use serde_logfmt::infer::infer;
/// use serde_logfmt::{Number, Value};
///
/// assert_eq!(infer("null"), Value::Null);
/// assert_eq!(infer("true"), Value::Bool(true));
/// assert_eq!(infer("-12"), Value::Number(Number::Integer(-12)));
/// assert_eq!(infer("0.25"), Value::Number(Number::Float(0.25)));
/// assert_eq!(infer("12ms"), Value::from("12ms"));
/// ```
pub fn infer(raw: &str) -> Value {
    if raw.len() >= 2 && raw.starts_with('"') && raw.ends_with('"') {
        return Value::String(raw[1..raw.len() - 1].to_string());
    }

    match raw {
        "null" => return Value::Null,
        "true" => return Value::Bool(true),
        "false" => return Value::Bool(false),
        _ => {}
    }

    if let Ok(i) = raw.parse::<i64>() {
        return Value::Number(Number::Integer(i));
    }
    if let Ok(f) = raw.parse::<f64>() {
        return Value::Number(Number::Float(f));
    }
    Value::String(raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords() {
        assert_eq!(infer("null"), Value::Null);
        assert_eq!(infer("true"), Value::Bool(true));
        assert_eq!(infer("false"), Value::Bool(false));
        // keywords are case-sensitive
        assert_eq!(infer("True"), Value::from("True"));
        assert_eq!(infer("NULL"), Value::from("NULL"));
    }

    #[test]
    fn test_integers() {
        assert_eq!(infer("0"), Value::Number(Number::Integer(0)));
        assert_eq!(infer("+5"), Value::Number(Number::Integer(5)));
        assert_eq!(
            infer("9223372036854775807"),
            Value::Number(Number::Integer(i64::MAX))
        );
    }

    #[test]
    fn test_integer_overflow_falls_back_to_float() {
        assert_eq!(
            infer("9223372036854775808"),
            Value::Number(Number::Float(9223372036854775808.0))
        );
    }

    #[test]
    fn test_floats() {
        assert_eq!(infer("1.5"), Value::Number(Number::Float(1.5)));
        assert_eq!(infer("3.0"), Value::Number(Number::Float(3.0)));
        assert_eq!(infer("1e3"), Value::Number(Number::Float(1000.0)));
        match infer("NaN") {
            Value::Number(Number::Float(f)) => assert!(f.is_nan()),
            other => panic!("expected NaN, got {:?}", other),
        }
    }

    #[test]
    fn test_strings() {
        assert_eq!(infer(""), Value::from(""));
        assert_eq!(infer("info"), Value::from("info"));
        assert_eq!(infer("1.2.3"), Value::from("1.2.3"));
    }

    #[test]
    fn test_literal_quotes_are_stripped() {
        assert_eq!(infer("\"42\""), Value::from("42"));
        assert_eq!(infer("\"\""), Value::from(""));
        assert_eq!(infer("\""), Value::from("\""));
    }
}
