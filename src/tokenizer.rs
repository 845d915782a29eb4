//! Character-level scanner that splits logfmt text into key/value pairs.
//!
//! The scanner is a small state machine over three flags (in key, in a
//! quoted value, after a backslash). It never fails: an unterminated quote
//! runs to the end of the input, stray quotes inside a bare value are kept
//! literally, and backslashes outside quotes are plain characters.

use tracing::trace;

/// One `key=value` pair as it appeared on the line.
///
/// `key` is trimmed of surrounding whitespace. `value` has quotes stripped
/// and escapes resolved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawPair {
    pub key: String,
    pub value: String,
}

impl RawPair {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        RawPair {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Splits `input` into raw pairs.
///
/// # Examples
///
/// ```rust
/// use serde_logfmt::tokenizer::{tokenize, RawPair};
///
/// let pairs = tokenize(r#"level=info msg="disk full" path=C:\tmp"#);
/// assert_eq!(
///     pairs,
///     vec![
///         RawPair::new("level", "info"),
///         RawPair::new("msg", "disk full"),
///         RawPair::new("path", r"C:\tmp"),
///     ]
/// );
/// ```
pub fn tokenize(input: &str) -> Vec<RawPair> {
    let mut scanner = Scanner::default();
    for ch in input.trim().chars() {
        scanner.push(ch);
    }
    scanner.finish()
}

struct Scanner {
    pairs: Vec<RawPair>,
    key: String,
    value: String,
    in_key: bool,
    in_quoted_value: bool,
    escaped: bool,
}

impl Default for Scanner {
    fn default() -> Self {
        Scanner {
            pairs: Vec::new(),
            key: String::new(),
            value: String::new(),
            in_key: true,
            in_quoted_value: false,
            escaped: false,
        }
    }
}

impl Scanner {
    fn push(&mut self, ch: char) {
        if self.escaped {
            self.value.push(match ch {
                'n' => '\n',
                'r' => '\r',
                't' => '\t',
                other => other,
            });
            self.escaped = false;
            return;
        }

        match ch {
            '\\' => {
                if self.in_quoted_value {
                    self.escaped = true;
                } else if !self.in_key {
                    self.value.push(ch);
                }
            }
            '"' => {
                if self.in_quoted_value {
                    self.in_quoted_value = false;
                } else if self.in_key || self.value.is_empty() {
                    self.in_quoted_value = true;
                } else {
                    self.value.push(ch);
                }
            }
            '=' if !self.in_quoted_value && self.in_key => self.in_key = false,
            c if c.is_whitespace() && !self.in_quoted_value && !self.in_key => self.flush(),
            c => {
                if self.in_key {
                    self.key.push(c);
                } else {
                    self.value.push(c);
                }
            }
        }
    }

    fn flush(&mut self) {
        let key = self.key.trim().to_string();
        let value = std::mem::take(&mut self.value);
        self.key.clear();
        self.in_key = true;
        trace!(key = %key, value_len = value.len(), "pair");
        self.pairs.push(RawPair { key, value });
    }

    fn finish(mut self) -> Vec<RawPair> {
        if !self.key.is_empty() {
            self.flush();
        }
        self.pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(input: &str) -> Vec<(String, String)> {
        tokenize(input)
            .into_iter()
            .map(|p| (p.key, p.value))
            .collect()
    }

    fn kv(k: &str, v: &str) -> (String, String) {
        (k.to_string(), v.to_string())
    }

    #[test]
    fn test_bare_pairs() {
        assert_eq!(pairs("a=1 b=2"), vec![kv("a", "1"), kv("b", "2")]);
    }

    #[test]
    fn test_surrounding_and_repeated_whitespace() {
        assert_eq!(
            pairs("  a=1 \t\n b=2  "),
            vec![kv("a", "1"), kv("b", "2")]
        );
    }

    #[test]
    fn test_quoted_value_with_escapes() {
        assert_eq!(
            pairs(r#"esc="» Say \"Hello\"" nl="a\nb\tc\r""#),
            vec![kv("esc", "» Say \"Hello\""), kv("nl", "a\nb\tc\r")]
        );
    }

    #[test]
    fn test_unknown_escape_passes_through() {
        assert_eq!(pairs(r#"a="\q\\""#), vec![kv("a", "q\\")]);
    }

    #[test]
    fn test_backslash_outside_quotes_is_literal() {
        assert_eq!(pairs(r"path=C:\Users\x"), vec![kv("path", r"C:\Users\x")]);
    }

    #[test]
    fn test_mid_value_quote_is_literal() {
        assert_eq!(pairs(r#"a=b"c d=1"#), vec![kv("a", "b\"c"), kv("d", "1")]);
    }

    #[test]
    fn test_second_equals_belongs_to_value() {
        assert_eq!(pairs("a=b=c"), vec![kv("a", "b=c")]);
    }

    #[test]
    fn test_empty_value() {
        assert_eq!(pairs("a= b=2"), vec![kv("a", ""), kv("b", "2")]);
        assert_eq!(pairs("a="), vec![kv("a", "")]);
        assert_eq!(pairs(r#"a="""#), vec![kv("a", "")]);
    }

    #[test]
    fn test_unterminated_quote_runs_to_end() {
        assert_eq!(pairs(r#"a="x y=2"#), vec![kv("a", "x y=2")]);
    }

    #[test]
    fn test_key_without_value_joins_next_key() {
        // whitespace in key mode does not end a pair
        assert_eq!(pairs("flag x=1"), vec![kv("flag x", "1")]);
        assert_eq!(pairs("flag"), vec![kv("flag", "")]);
    }

    #[test]
    fn test_empty_key_is_still_flushed() {
        assert_eq!(pairs("=x y=1"), vec![kv("", "x"), kv("y", "1")]);
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   ").is_empty());
    }

    #[test]
    fn test_unicode_whitespace_separates_pairs() {
        assert_eq!(
            pairs("a=1\u{00a0}b=2"),
            vec![kv("a", "1"), kv("b", "2")]
        );
    }
}
