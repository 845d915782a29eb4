//! Key-path parsing.
//!
//! A logfmt key such as `user.roles.[1]` or `matrix[0][2]` names a position
//! in a tree. [`parse_path`] splits it into [`Segment`]s. Bracketed segments
//! keep their brackets: whether `[1]` is a real list index is decided later,
//! once every pair has been inserted (see [`crate::reconcile`]).

use std::fmt;

/// One component of a key path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Segment {
    /// A plain field name.
    Field(String),
    /// Bracketed text, brackets included, e.g. `"[3]"`.
    Index(String),
}

impl Segment {
    /// The map key this segment occupies in the working tree.
    #[must_use]
    pub fn as_key(&self) -> &str {
        match self {
            Segment::Field(name) => name,
            Segment::Index(literal) => literal,
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_key())
    }
}

/// An ordered sequence of segments.
pub type KeyPath = Vec<Segment>;

/// Splits a raw key into path segments.
///
/// Dots separate fields and empty fields are dropped. A `[` ends the
/// pending field and everything up to the next `]` becomes one index
/// segment; an unmatched `[` runs to the end of the key and is closed
/// implicitly.
///
/// # Examples
///
/// ```rust
/// use serde_logfmt::path::{parse_path, Segment};
///
/// assert_eq!(
///     parse_path("list.[0].name"),
///     vec![
///         Segment::Field("list".into()),
///         Segment::Index("[0]".into()),
///         Segment::Field("name".into()),
///     ]
/// );
/// assert_eq!(parse_path("list[0]"), parse_path("list.[0]"));
/// ```
pub fn parse_path(raw_key: &str) -> KeyPath {
    let mut segments = Vec::new();
    let mut current = String::new();
    let mut chars = raw_key.chars();

    while let Some(ch) = chars.next() {
        match ch {
            '.' => {
                if !current.is_empty() {
                    segments.push(Segment::Field(std::mem::take(&mut current)));
                }
            }
            '[' => {
                if !current.is_empty() {
                    segments.push(Segment::Field(std::mem::take(&mut current)));
                }
                let mut literal = String::from('[');
                for inner in chars.by_ref() {
                    if inner == ']' {
                        break;
                    }
                    literal.push(inner);
                }
                literal.push(']');
                segments.push(Segment::Index(literal));
            }
            c => current.push(c),
        }
    }

    if !current.is_empty() {
        segments.push(Segment::Field(current));
    }

    segments
}
