//! Flattening a value tree into logfmt text.
//!
//! Every leaf becomes one `path=value` token, where the path joins object
//! keys with `.` and writes list positions as `[i]`. Tokens are separated by
//! a single space.

use crate::{EncodeOptions, Number, Value};
use tracing::debug;

/// Encodes `value` with default options.
///
/// # Examples
///
/// ```rust
/// use serde_logfmt::{encode, logfmt};
///
/// let value = logfmt!({
///     "msg": "Hello World!",
///     "Lang": { "Go": true, "Rust": false }
/// });
/// assert_eq!(encode(&value), r#"msg="Hello World!" Lang.Go=true Lang.Rust=false"#);
/// ```
#[must_use]
pub fn encode(value: &Value) -> String {
    encode_with_options(value, &EncodeOptions::default())
}

/// Encodes `value` as a single logfmt line.
///
/// A bare scalar has no key to attach to and encodes to an empty string, as
/// do empty objects and lists.
#[must_use]
pub fn encode_with_options(value: &Value, options: &EncodeOptions) -> String {
    let mut tokens = Vec::new();
    let mut prefix = String::new();
    flatten(value, &mut prefix, options, &mut tokens);
    debug!(tokens = tokens.len(), "encoded logfmt");
    tokens.join(" ")
}

fn flatten(value: &Value, prefix: &mut String, options: &EncodeOptions, tokens: &mut Vec<String>) {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<_> = map.iter().collect();
            if options.sort_keys {
                entries.sort_by(|a, b| a.0.cmp(b.0));
            }
            for (key, child) in entries {
                let mark = push_segment(prefix, key);
                flatten(child, prefix, options, tokens);
                prefix.truncate(mark);
            }
        }
        Value::Array(items) => {
            for (i, child) in items.iter().enumerate() {
                let mark = push_segment(prefix, &format!("[{}]", i));
                flatten(child, prefix, options, tokens);
                prefix.truncate(mark);
            }
        }
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => {
            if !prefix.is_empty() {
                let mut token = String::with_capacity(prefix.len() + 8);
                token.push_str(prefix);
                token.push('=');
                write_scalar(&mut token, value);
                tokens.push(token);
            }
        }
    }
}

/// Appends `segment` to the key prefix and returns the length to restore.
fn push_segment(prefix: &mut String, segment: &str) -> usize {
    let mark = prefix.len();
    if !prefix.is_empty() {
        prefix.push('.');
    }
    prefix.push_str(segment);
    mark
}

/// Returns the logfmt text of a scalar. Containers have no scalar form and
/// yield an empty string.
///
/// # Examples
///
/// ```rust
/// use serde_logfmt::encode::encode_scalar;
/// use serde_logfmt::Value;
///
/// assert_eq!(encode_scalar(&Value::Null), "null");
/// assert_eq!(encode_scalar(&Value::from(2.0)), "2.0");
/// assert_eq!(encode_scalar(&Value::from("a b")), r#""a b""#);
/// ```
#[must_use]
pub fn encode_scalar(value: &Value) -> String {
    let mut out = String::new();
    write_scalar(&mut out, value);
    out
}

fn write_scalar(out: &mut String, value: &Value) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Number(Number::Integer(i)) => out.push_str(&i.to_string()),
        Value::Number(n @ Number::Float(_)) => out.push_str(&n.to_string()),
        Value::String(s) => write_string(out, s),
        Value::Array(_) | Value::Object(_) => {}
    }
}

#[inline]
fn needs_quotes(s: &str) -> bool {
    s.chars().any(|c| c.is_whitespace() || c == '"' || c == '\\')
}

fn write_string(out: &mut String, s: &str) {
    if !needs_quotes(s) {
        out.push_str(s);
        return;
    }
    out.push('"');
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(ch),
        }
    }
    out.push('"');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logfmt;
    use std::collections::BTreeSet;

    fn token_set(s: &str) -> BTreeSet<&str> {
        s.split(' ').collect()
    }

    #[test]
    fn test_flat_object() {
        assert_eq!(encode(&logfmt!({ "a": 1, "b": "x" })), "a=1 b=x");
    }

    #[test]
    fn test_nested_object() {
        let value = logfmt!({
            "msg": "Hello World!",
            "Lang": { "Go": true, "Rust": false }
        });
        assert_eq!(
            token_set(&encode(&value)),
            token_set(r#"msg="Hello World!" Lang.Go=true Lang.Rust=false"#)
        );
    }

    #[test]
    fn test_lists() {
        let value = logfmt!({ "list": ["a", "b"], "m": [[1], [2, 3]] });
        assert_eq!(
            encode(&value),
            "list.[0]=a list.[1]=b m.[0].[0]=1 m.[1].[0]=2 m.[1].[1]=3"
        );
    }

    #[test]
    fn test_root_list() {
        assert_eq!(encode(&logfmt!(["a", { "k": null }])), "[0]=a [1].k=null");
    }

    #[test]
    fn test_root_scalar_is_empty() {
        assert_eq!(encode(&Value::from("alone")), "");
        assert_eq!(encode(&Value::Null), "");
    }

    #[test]
    fn test_empty_field_names() {
        assert_eq!(encode(&logfmt!({ "": 1 })), "");
        assert_eq!(encode(&logfmt!({ "a": { "": 1 } })), "a.=1");
        assert_eq!(crate::decode("a.=1"), logfmt!({ "a": "1" }));
    }

    #[test]
    fn test_empty_containers_emit_nothing() {
        assert_eq!(encode(&logfmt!({ "a": {}, "b": [], "c": 1 })), "c=1");
    }

    #[test]
    fn test_scalars() {
        assert_eq!(encode_scalar(&Value::Bool(false)), "false");
        assert_eq!(encode_scalar(&Value::from(-3)), "-3");
        assert_eq!(encode_scalar(&Value::from(0.5)), "0.5");
        assert_eq!(encode_scalar(&Value::from(10.0)), "10.0");
        assert_eq!(encode_scalar(&Value::from("")), "");
        assert_eq!(encode_scalar(&logfmt!([1])), "");
    }

    #[test]
    fn test_string_quoting() {
        assert_eq!(encode_scalar(&Value::from("plain")), "plain");
        assert_eq!(encode_scalar(&Value::from("a=b")), "a=b");
        assert_eq!(encode_scalar(&Value::from("two words")), r#""two words""#);
        assert_eq!(encode_scalar(&Value::from("say \"hi\"")), r#""say \"hi\"""#);
        assert_eq!(encode_scalar(&Value::from(r"C:\tmp")), r#""C:\\tmp""#);
        assert_eq!(encode_scalar(&Value::from("a\nb\tc\r")), r#""a\nb\tc\r""#);
    }

    #[test]
    fn test_sorted_keys() {
        let value = logfmt!({ "z": 1, "a": { "y": 2, "b": 3 } });
        assert_eq!(encode(&value), "z=1 a.y=2 a.b=3");
        assert_eq!(
            encode_with_options(&value, &EncodeOptions::sorted()),
            "a.b=3 a.y=2 z=1"
        );
    }
}
