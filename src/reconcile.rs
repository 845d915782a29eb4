//! Array reconciliation.
//!
//! After every pair is inserted, objects whose keys are all bracket indices
//! (`"[0]"`, `"[7]"`, ...) are rewritten as lists. The pass is bottom-up, so
//! lists of lists and lists of objects come out right, and the root itself
//! is eligible: `[0]=a [1]=b` decodes to a list.

use crate::options::DEFAULT_MAX_LIST_LEN;
use crate::{LogfmtMap, Value};
use tracing::trace;

/// Parses a bracket-index key, returning the index.
///
/// Only `[` followed by one or more ASCII digits and `]` qualifies.
///
/// # Examples
///
/// ```rust
/// use serde_logfmt::reconcile::is_array_index;
///
/// assert_eq!(is_array_index("[3]"), Some(3));
/// assert_eq!(is_array_index("[-1]"), None);
/// assert_eq!(is_array_index("3"), None);
/// ```
#[must_use]
pub fn is_array_index(key: &str) -> Option<usize> {
    let digits = key.strip_prefix('[')?.strip_suffix(']')?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Reconciles `value` with the default list slot budget.
///
/// # Examples
///
/// ```rust
/// use serde_logfmt::reconcile::reconcile;
/// use serde_logfmt::{logfmt, Value};
///
/// let working = logfmt!({ "[1]": "b", "[0]": "a" });
/// assert_eq!(reconcile(working), logfmt!(["a", "b"]));
/// ```
pub fn reconcile(value: Value) -> Value {
    reconcile_with_limit(value, DEFAULT_MAX_LIST_LEN)
}

/// Reconciles `value`, building at most `max_list_len` list slots in total.
///
/// The budget is shared by every list in the tree, padding included. Levels
/// are visited bottom-up in key order; an index object whose list no longer
/// fits in what is left of the budget stays an object.
///
/// # Examples
///
/// ```rust
/// use serde_logfmt::reconcile::reconcile_with_limit;
/// use serde_logfmt::logfmt;
///
/// let working = logfmt!({ "a": { "[2]": "x" }, "b": { "[2]": "y" } });
/// let value = reconcile_with_limit(working, 4);
/// assert!(value.get("a").unwrap().is_array());
/// assert!(value.get("b").unwrap().is_object());
/// ```
pub fn reconcile_with_limit(value: Value, max_list_len: usize) -> Value {
    let mut budget = max_list_len;
    reconcile_within(value, &mut budget)
}

fn reconcile_within(value: Value, budget: &mut usize) -> Value {
    match value {
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => value,
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(|item| reconcile_within(item, budget))
                .collect(),
        ),
        Value::Object(map) => reconcile_object(map, budget),
    }
}

fn reconcile_object(map: LogfmtMap, budget: &mut usize) -> Value {
    let map: LogfmtMap = map
        .into_iter()
        .map(|(k, v)| (k, reconcile_within(v, budget)))
        .collect();

    match list_len(&map) {
        Some(len) if len <= *budget => {
            *budget -= len;
            let mut items = vec![Value::Null; len];
            for (key, value) in map {
                if let Some(index) = is_array_index(&key) {
                    items[index] = value;
                }
            }
            Value::Array(items)
        }
        Some(len) => {
            trace!(len, remaining = *budget, "index object exceeds list budget");
            Value::Object(map)
        }
        None => Value::Object(map),
    }
}

/// Length of the list `map` would become, if every key is an index.
fn list_len(map: &LogfmtMap) -> Option<usize> {
    if map.is_empty() {
        return None;
    }
    let mut max = 0;
    for key in map.keys() {
        max = max.max(is_array_index(key)?);
    }
    max.checked_add(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logfmt;

    #[test]
    fn test_index_key_syntax() {
        assert_eq!(is_array_index("[0]"), Some(0));
        assert_eq!(is_array_index("[007]"), Some(7));
        assert_eq!(is_array_index("[]"), None);
        assert_eq!(is_array_index("[+1]"), None);
        assert_eq!(is_array_index("[1"), None);
        assert_eq!(is_array_index("[a]"), None);
        assert_eq!(is_array_index("[99999999999999999999999]"), None);
    }

    #[test]
    fn test_scalars_unchanged() {
        assert_eq!(reconcile(Value::from("x")), Value::from("x"));
        assert_eq!(reconcile(Value::Null), Value::Null);
    }

    #[test]
    fn test_dense_list() {
        let working = logfmt!({ "list": { "[0]": "a", "[1]": "b" } });
        assert_eq!(reconcile(working), logfmt!({ "list": ["a", "b"] }));
    }

    #[test]
    fn test_sparse_list_is_null_padded() {
        let working = logfmt!({ "list": { "[2]": "x" } });
        assert_eq!(reconcile(working), logfmt!({ "list": [null, null, "x"] }));
    }

    #[test]
    fn test_mixed_keys_stay_object() {
        let working = logfmt!({ "[0]": "a", "name": "b" });
        assert_eq!(reconcile(working.clone()), working);
    }

    #[test]
    fn test_empty_object_stays_object() {
        assert_eq!(reconcile(logfmt!({})), logfmt!({}));
    }

    #[test]
    fn test_nested_lists_bottom_up() {
        let working = logfmt!({
            "m": {
                "[0]": { "[0]": "a", "[1]": "b" },
                "[1]": { "[0]": "c" }
            }
        });
        assert_eq!(reconcile(working), logfmt!({ "m": [["a", "b"], ["c"]] }));
    }

    #[test]
    fn test_list_of_objects() {
        let working = logfmt!({
            "users": {
                "[0]": { "name": "ann" },
                "[1]": { "name": "bob" }
            }
        });
        assert_eq!(
            reconcile(working),
            logfmt!({ "users": [{ "name": "ann" }, { "name": "bob" }] })
        );
    }

    #[test]
    fn test_root_promoted_to_list() {
        let working = logfmt!({ "[0]": "a", "[1]": "b" });
        assert_eq!(reconcile(working), logfmt!(["a", "b"]));
    }

    #[test]
    fn test_list_limit() {
        let working = logfmt!({ "[9]": "x" });
        assert_eq!(reconcile_with_limit(working.clone(), 9), working);
        assert_eq!(reconcile_with_limit(working, 10).as_array().map(Vec::len), Some(10));
    }

    fn list_slots(value: &Value) -> usize {
        match value {
            Value::Array(items) => items.len() + items.iter().map(list_slots).sum::<usize>(),
            Value::Object(map) => map.values().map(list_slots).sum(),
            _ => 0,
        }
    }

    #[test]
    fn test_budget_is_shared_between_lists() {
        let mut root = LogfmtMap::new();
        for i in 0..50 {
            root.insert(format!("k{}", i), logfmt!({ "[99]": "x" }));
        }
        let value = reconcile_with_limit(Value::Object(root), 250);

        assert_eq!(list_slots(&value), 200);
        let lists = value
            .as_object()
            .unwrap()
            .values()
            .filter(|v| v.is_array())
            .count();
        assert_eq!(lists, 2);
        assert!(value.get("k0").unwrap().is_array());
        assert!(value.get("k49").unwrap().is_object());
    }

    #[test]
    fn test_nested_lists_draw_on_one_budget() {
        let working = logfmt!({
            "[0]": { "[2]": "a" },
            "[1]": { "[2]": "b" }
        });
        // inner lists take 3 + 3, leaving too little for the outer one
        let value = reconcile_with_limit(working, 7);
        assert!(value.is_object());
        assert!(value.get("[0]").unwrap().is_array());
        assert!(value.get("[1]").unwrap().is_array());

        let value = reconcile_with_limit(
            logfmt!({ "[0]": { "[2]": "a" }, "[1]": { "[2]": "b" } }),
            8,
        );
        assert_eq!(list_slots(&value), 8);
    }
}
