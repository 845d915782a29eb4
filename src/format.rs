//! logfmt format reference
//!
//! This module documents the logfmt dialect read and written by this crate.
//! It contains no code.
//!
//! # Overview
//!
//! A logfmt document is one line of whitespace-separated `key=value` pairs:
//!
//! ```text
//! level=info msg="request done" http.status=200 http.path=/login
//! ```
//!
//! Keys are paths into a tree. Values are text; with
//! [`DecodeOptions::infer_types`](crate::DecodeOptions) they are read as
//! typed scalars.
//!
//! # Grammar
//!
//! ```text
//! document   := pair (WS+ pair)*
//! pair       := key "=" value
//! key        := (char - WS - '=')+           // trimmed
//! value      := quoted | bare
//! quoted     := '"' (escape | char-'"'-'\\')* '"'
//! escape     := '\\' ('n'|'r'|'t'|'"'|'\\'|any-char)
//! bare       := (char - WS)*
//! ```
//!
//! Reading is lenient and never fails:
//!
//! | Input | Reads as |
//! |-------|----------|
//! | `a=b=c` | `a` = `"b=c"` (only the first `=` splits) |
//! | `a=x"y` | `a` = `x"y` (a quote after the value starts is literal) |
//! | `p=C:\tmp` | `p` = `C:\tmp` (backslash escapes only inside quotes) |
//! | `a="open y=1` | `a` = `open y=1` (unterminated quote runs to the end) |
//! | `flag x=1` | key `flag x` (whitespace only ends a pair after `=`) |
//! | `=v` | dropped (empty key) |
//!
//! Inside quotes, `\n`, `\r` and `\t` are control characters and any other
//! escaped character stands for itself.
//!
//! # Key paths
//!
//! A key is split into segments at `.`; empty segments are skipped. A
//! bracketed run `[...]` is a segment of its own, with or without a leading
//! dot, so `list[0]` and `list.[0]` are the same path.
//!
//! ```text
//! user.name=ann user.roles.[0]=admin user.roles.[1]=dev
//! ```
//!
//! decodes to
//!
//! ```text
//! { user: { name: "ann", roles: ["admin", "dev"] } }
//! ```
//!
//! An object level becomes a list when every key is `[` digits `]`. The list
//! is as long as the largest index plus one and gaps are `null`:
//! `list.[2]=x` is `{ list: [null, null, "x"] }`. The whole line can be a
//! list: `[0]=a [1]=b` is `["a", "b"]`.
//!
//! When a later pair descends through a key that already holds a scalar,
//! the scalar is replaced: `a=1 a.b=2` is `{ a: { b: "2" } }`.
//!
//! # Type inference
//!
//! | Text | Value |
//! |------|-------|
//! | `null` | null |
//! | `true`, `false` | bool |
//! | `42`, `-7`, `+3` | integer (`i64`) |
//! | `0.5`, `1e3`, `NaN`, `inf` | float (`f64`) |
//! | anything else | string |
//!
//! # Writing
//!
//! Every leaf is written as `path=value` and tokens are joined by one space.
//! List positions are written `.[i]` (or `[i]` at the start of a key).
//! Strings are quoted when they contain whitespace, `"` or `\`; inside quotes
//! `"`, `\`, newline, carriage return and tab are escaped. Whole floats keep
//! a `.0` so they read back as floats. A bare scalar, an empty object and an
//! empty list produce no tokens.
//!
//! Because empty collections vanish, a struct with an empty `Vec` field
//! writes no key for it. Reading the line back into the struct needs
//! `#[serde(default)]` on that field:
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use serde_logfmt::{from_str, to_string};
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct Job {
//!     id: u32,
//!     #[serde(default)]
//!     tags: Vec<String>,
//! }
//!
//! let job = Job { id: 1, tags: vec![] };
//! let line = to_string(&job).unwrap();
//! assert_eq!(line, "id=1");
//! assert_eq!(from_str::<Job>(&line).unwrap(), job);
//! ```
//!
//! Keys are written as they are. Field names containing `.`, `[`, `]`, `=`
//! or whitespace do not survive a round trip. Neither does the empty field
//! name: `{"": 1}` adds nothing to the prefix and writes no token at the
//! root, and `{a: {"": 1}}` writes `a.=1`, which reads back as `{a: "1"}`.
