//! Tree building: inserting scalars at key paths.
//!
//! The working tree is made only of objects. Index segments are stored under
//! their bracket text (`"[0]"`), so `a.[0]=x` produces `{a: {"[0]": x}}`
//! until [`crate::reconcile`] turns such levels into lists.

use crate::path::{KeyPath, Segment};
use crate::{LogfmtMap, Value};
use tracing::trace;

/// Inserts `value` at `path` below `root`.
///
/// Intermediate objects are created on demand. When an intermediate slot
/// already holds a non-object value, that value is discarded and replaced by
/// an empty object, so `a=1 a.b=2` ends up as `{a: {b: 2}}`. The final
/// segment always overwrites. An empty path is ignored.
///
/// # Examples
///
/// ```rust
/// use serde_logfmt::builder::insert;
/// use serde_logfmt::path::parse_path;
/// use serde_logfmt::{LogfmtMap, Value};
///
/// let mut root = LogfmtMap::new();
/// insert(&mut root, &parse_path("http.status"), Value::from("200"));
/// insert(&mut root, &parse_path("http.method"), Value::from("GET"));
///
/// let http = root.get("http").and_then(Value::as_object).unwrap();
/// assert_eq!(http.len(), 2);
/// ```
pub fn insert(root: &mut LogfmtMap, path: &KeyPath, value: Value) {
    let Some((last, parents)) = path.split_last() else {
        trace!("skipping pair with empty key");
        return;
    };

    let mut current = root;
    for segment in parents {
        current = match descend(current, segment) {
            Some(child) => child,
            None => return,
        };
    }
    current.insert(last.as_key().to_string(), value);
}

/// Returns the object under `segment`, creating it or replacing a scalar.
fn descend<'a>(map: &'a mut LogfmtMap, segment: &Segment) -> Option<&'a mut LogfmtMap> {
    let slot = map
        .entry(segment.as_key().to_string())
        .or_insert_with(|| Value::Object(LogfmtMap::new()));

    if !slot.is_object() {
        trace!(segment = %segment, replaced = slot.kind(), "replacing scalar with object");
        *slot = Value::Object(LogfmtMap::new());
    }
    slot.as_object_mut()
}
