/// Builds a [`Value`](crate::Value) from a JSON-like literal.
///
/// Object keys are string literals and are stored as given; they are not
/// parsed as key paths. Array elements and object values may be nested
/// literals, `null`/`true`/`false`, or any expression whose type implements
/// `Serialize`, negative numbers included.
///
/// ```rust
/// use serde_logfmt::{encode, logfmt};
///
/// let free = 0.5;
/// let value = logfmt!({
///     "level": "warn",
///     "disk": { "free": free, "delta": -3, "mounts": ["/", "/var"] }
/// });
/// assert_eq!(
///     encode(&value),
///     "level=warn disk.free=0.5 disk.delta=-3 disk.mounts.[0]=/ disk.mounts.[1]=/var"
/// );
/// ```
///
/// # Panics
///
/// Panics when an embedded expression fails to serialize, for example a
/// map whose keys are lists. Use [`to_value`](crate::to_value) to handle
/// that error instead.
#[macro_export]
macro_rules! logfmt {
    // Array elements, accumulated into `[$($elems,)*]`.
    (@array [$($elems:expr,)*]) => {
        vec![$($elems,)*]
    };
    (@array [$($elems:expr),*]) => {
        vec![$($elems),*]
    };
    (@array [$($elems:expr,)*] null $($rest:tt)*) => {
        $crate::logfmt!(@array [$($elems,)* $crate::logfmt!(null)] $($rest)*)
    };
    (@array [$($elems:expr,)*] true $($rest:tt)*) => {
        $crate::logfmt!(@array [$($elems,)* $crate::logfmt!(true)] $($rest)*)
    };
    (@array [$($elems:expr,)*] false $($rest:tt)*) => {
        $crate::logfmt!(@array [$($elems,)* $crate::logfmt!(false)] $($rest)*)
    };
    (@array [$($elems:expr,)*] [$($inner:tt)*] $($rest:tt)*) => {
        $crate::logfmt!(@array [$($elems,)* $crate::logfmt!([$($inner)*])] $($rest)*)
    };
    (@array [$($elems:expr,)*] {$($inner:tt)*} $($rest:tt)*) => {
        $crate::logfmt!(@array [$($elems,)* $crate::logfmt!({$($inner)*})] $($rest)*)
    };
    (@array [$($elems:expr,)*] $next:expr, $($rest:tt)*) => {
        $crate::logfmt!(@array [$($elems,)* $crate::logfmt!(@expr $next),] $($rest)*)
    };
    (@array [$($elems:expr,)*] $last:expr) => {
        $crate::logfmt!(@array [$($elems,)* $crate::logfmt!(@expr $last)])
    };
    (@array [$($elems:expr),*] , $($rest:tt)*) => {
        $crate::logfmt!(@array [$($elems,)*] $($rest)*)
    };

    // Object entries, inserted into `$object` one at a time.
    (@object $object:ident ()) => {};
    (@object $object:ident ($key:literal : null $(, $($rest:tt)*)?)) => {
        $object.insert($key.to_string(), $crate::Value::Null);
        $crate::logfmt!(@object $object ($($($rest)*)?));
    };
    (@object $object:ident ($key:literal : true $(, $($rest:tt)*)?)) => {
        $object.insert($key.to_string(), $crate::Value::Bool(true));
        $crate::logfmt!(@object $object ($($($rest)*)?));
    };
    (@object $object:ident ($key:literal : false $(, $($rest:tt)*)?)) => {
        $object.insert($key.to_string(), $crate::Value::Bool(false));
        $crate::logfmt!(@object $object ($($($rest)*)?));
    };
    (@object $object:ident ($key:literal : [$($inner:tt)*] $(, $($rest:tt)*)?)) => {
        $object.insert($key.to_string(), $crate::logfmt!([$($inner)*]));
        $crate::logfmt!(@object $object ($($($rest)*)?));
    };
    (@object $object:ident ($key:literal : {$($inner:tt)*} $(, $($rest:tt)*)?)) => {
        $object.insert($key.to_string(), $crate::logfmt!({$($inner)*}));
        $crate::logfmt!(@object $object ($($($rest)*)?));
    };
    (@object $object:ident ($key:literal : $value:expr $(, $($rest:tt)*)?)) => {
        $object.insert($key.to_string(), $crate::logfmt!(@expr $value));
        $crate::logfmt!(@object $object ($($($rest)*)?));
    };

    (@expr $value:expr) => {
        match $crate::to_value(&$value) {
            Ok(value) => value,
            Err(err) => panic!("logfmt!: cannot serialize `{}`: {}", stringify!($value), err),
        }
    };

    (null) => {
        $crate::Value::Null
    };
    (true) => {
        $crate::Value::Bool(true)
    };
    (false) => {
        $crate::Value::Bool(false)
    };
    ([ $($tt:tt)* ]) => {
        $crate::Value::Array($crate::logfmt!(@array [] $($tt)*))
    };
    ({ $($tt:tt)* }) => {{
        #[allow(unused_mut)]
        let mut object = $crate::LogfmtMap::new();
        $crate::logfmt!(@object object ($($tt)*));
        $crate::Value::Object(object)
    }};
    ($other:expr) => {
        $crate::logfmt!(@expr $other)
    };
}

#[cfg(test)]
mod tests {
    use crate::{encode, Number, Value};
    use std::collections::BTreeMap;

    #[test]
    fn test_keywords_and_literals() {
        assert_eq!(logfmt!(null), Value::Null);
        assert_eq!(
            logfmt!([true, false]),
            Value::Array(vec![Value::Bool(true), Value::Bool(false)])
        );
        assert_eq!(logfmt!(-7), Value::Number(Number::Integer(-7)));
        assert_eq!(logfmt!(2.5), Value::Number(Number::Float(2.5)));
    }

    #[test]
    fn test_negative_values_inside_literals() {
        let value = logfmt!({ "delta": -3, "offsets": [-1, 0, -2.5] });
        assert_eq!(
            encode(&value),
            "delta=-3 offsets.[0]=-1 offsets.[1]=0 offsets.[2]=-2.5"
        );
    }

    #[test]
    fn test_keys_are_not_paths() {
        let value = logfmt!({ "a.b": 1 });
        assert_eq!(value.as_object().map(|m| m.len()), Some(1));
        assert_eq!(value.get("a.b"), Some(&Value::from(1)));
    }

    #[test]
    #[should_panic(expected = "logfmt!: cannot serialize")]
    fn test_unserializable_expression_panics() {
        let mut bad = BTreeMap::new();
        bad.insert(vec![1u8], "x");
        let _ = logfmt!(bad);
    }
}
