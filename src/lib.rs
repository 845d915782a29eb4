//! # serde_logfmt
//!
//! A Serde-compatible codec for logfmt, the `key=value key2="value two"`
//! line format used by structured loggers.
//!
//! ## Key Features
//!
//! - **Nested keys**: dotted keys build objects (`http.status=200`)
//! - **Arrays**: bracket indices build lists (`tags.[0]=a tags.[1]=b`), at any
//!   depth and at the root
//! - **Optional type inference**: `null`, booleans, integers and floats
//! - **Lenient reading**: decoding never fails, malformed input degrades to a
//!   best-effort parse
//! - **Serde Compatible**: works with `#[derive(Serialize, Deserialize)]`
//!
//! ## Quick Start
//!
//! ```rust
//! use serde_logfmt::{decode, decode_with_options, encode, DecodeOptions, Value};
//!
//! let value = decode(r#"level=info msg="Test message" tags.[0]=a tags.[1]=b"#);
//! assert_eq!(value.get("msg").and_then(Value::as_str), Some("Test message"));
//! assert_eq!(value.get("tags").and_then(Value::as_array).map(Vec::len), Some(2));
//!
//! assert_eq!(
//!     encode(&value),
//!     r#"level=info msg="Test message" tags.[0]=a tags.[1]=b"#
//! );
//!
//! let typed = decode_with_options("a=1 b=2.5 c=true", &DecodeOptions::typed());
//! assert_eq!(typed.get("a").and_then(Value::as_i64), Some(1));
//! ```
//!
//! ### With Serde
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use serde_logfmt::{from_str, to_string};
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct Request {
//!     method: String,
//!     status: u16,
//!     client: Client,
//! }
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct Client {
//!     ip: String,
//!     agent: String,
//! }
//!
//! let request = Request {
//!     method: "GET".to_string(),
//!     status: 200,
//!     client: Client { ip: "10.0.0.1".to_string(), agent: "curl/8.0".to_string() },
//! };
//!
//! let line = to_string(&request).unwrap();
//! assert_eq!(line, "method=GET status=200 client.ip=10.0.0.1 client.agent=curl/8.0");
//!
//! let back: Request = from_str(&line).unwrap();
//! assert_eq!(request, back);
//! ```
//!
//! ## Key order
//!
//! Objects keep insertion order, so decoding then encoding reproduces the
//! key order of the input. [`EncodeOptions::sorted`] writes keys in byte
//! order instead. Equality between values ignores key order.
//!
//! ## Format Reference
//!
//! See [`format`] for the grammar and the exact reading and writing rules.

pub mod builder;
pub mod de;
pub mod encode;
pub mod error;
pub mod format;
pub mod infer;
pub mod macros;
pub mod map;
pub mod options;
pub mod path;
pub mod reconcile;
pub mod ser;
pub mod tokenizer;
pub mod value;

pub use de::{from_value, ValueDeserializer};
pub use encode::{encode, encode_with_options};
pub use error::{Error, Result};
pub use map::LogfmtMap;
pub use options::{DecodeOptions, EncodeOptions};
pub use ser::{to_value, ValueSerializer};
pub use value::{Number, Value};

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io;
use tracing::debug;

/// Decodes a logfmt line with default options (no type inference).
///
/// # Examples
///
/// ```rust
/// use serde_logfmt::{decode, logfmt};
///
/// assert_eq!(decode("list.[0]=a list.[1]=b"), logfmt!({ "list": ["a", "b"] }));
/// assert_eq!(decode("[0]=a [1]=b"), logfmt!(["a", "b"]));
/// ```
#[must_use]
pub fn decode(text: &str) -> Value {
    decode_with_options(text, &DecodeOptions::default())
}

/// Decodes a logfmt line into a [`Value`].
///
/// The line is split into pairs, each key is parsed into a path, each value
/// is optionally typed, the pairs are inserted into an object tree and
/// finally index-keyed objects are turned into lists. The result is an
/// object, or a list when every top-level key is an index.
///
/// # Examples
///
/// ```rust
/// use serde_logfmt::{decode_with_options, logfmt, DecodeOptions};
///
/// let value = decode_with_options("a=1 b=2", &DecodeOptions::typed());
/// assert_eq!(value, logfmt!({ "a": 1, "b": 2 }));
///
/// let value = decode_with_options("a=1 b=2", &DecodeOptions::new());
/// assert_eq!(value, logfmt!({ "a": "1", "b": "2" }));
/// ```
#[must_use]
pub fn decode_with_options(text: &str, options: &DecodeOptions) -> Value {
    let pairs = tokenizer::tokenize(text);
    debug!(
        input_len = text.len(),
        pairs = pairs.len(),
        infer_types = options.infer_types,
        "decoding logfmt"
    );

    let mut root = LogfmtMap::with_capacity(pairs.len());
    for pair in pairs {
        let path = path::parse_path(&pair.key);
        let value = if options.infer_types {
            infer::infer(&pair.value)
        } else {
            Value::String(pair.value)
        };
        builder::insert(&mut root, &path, value);
    }

    reconcile::reconcile_with_limit(Value::Object(root), options.max_list_len)
}

/// Serialize any `T: Serialize` to a logfmt line.
///
/// # Examples
///
/// ```rust
/// use serde_logfmt::to_string;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// assert_eq!(to_string(&Point { x: 1, y: 2 }).unwrap(), "x=1 y=2");
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be represented (e.g. a map with
/// non-scalar keys).
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_options(value, &EncodeOptions::default())
}

/// Serialize any `T: Serialize` to a logfmt line with custom options.
///
/// # Errors
///
/// Returns an error if the value cannot be represented.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options<T>(value: &T, options: &EncodeOptions) -> Result<String>
where
    T: ?Sized + Serialize,
{
    let value = to_value(value)?;
    Ok(encode_with_options(&value, options))
}

/// Serialize any `T: Serialize` to a writer as a logfmt line.
///
/// No trailing newline is written.
///
/// # Examples
///
/// ```rust
/// use serde_logfmt::to_writer;
/// use std::collections::BTreeMap;
///
/// let mut fields = BTreeMap::new();
/// fields.insert("msg", "hello there");
///
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &fields).unwrap();
/// assert_eq!(buffer, br#"msg="hello there""#);
/// ```
///
/// # Errors
///
/// Returns an error if serialization fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, T>(writer: W, value: &T) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    to_writer_with_options(writer, value, &EncodeOptions::default())
}

/// Serialize any `T: Serialize` to a writer with custom options.
///
/// # Errors
///
/// Returns an error if serialization fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_options<W, T>(mut writer: W, value: &T, options: &EncodeOptions) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    let line = to_string_with_options(value, options)?;
    writer.write_all(line.as_bytes())?;
    Ok(())
}

/// Deserialize an instance of type `T` from a logfmt line.
///
/// Values are decoded as strings and converted to the field types `T`
/// asks for.
///
/// # Examples
///
/// ```rust
/// use serde_logfmt::from_str;
/// use serde::Deserialize;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let point: Point = from_str("x=1 y=2").unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
///
/// # Errors
///
/// Returns an error if the decoded tree cannot be converted to `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str<T>(s: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    from_str_with_options(s, &DecodeOptions::default())
}

/// Deserialize an instance of type `T` from a logfmt line with custom options.
///
/// # Errors
///
/// Returns an error if the decoded tree cannot be converted to `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str_with_options<T>(s: &str, options: &DecodeOptions) -> Result<T>
where
    T: DeserializeOwned,
{
    from_value(decode_with_options(s, options))
}

/// Deserialize an instance of type `T` from an I/O stream of logfmt.
///
/// The whole stream is read before decoding starts.
///
/// # Examples
///
/// ```rust
/// use serde_logfmt::from_reader;
/// use serde::Deserialize;
/// use std::io::Cursor;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let point: Point = from_reader(Cursor::new(b"x=1 y=2")).unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
///
/// # Errors
///
/// Returns an error if reading fails, the input is not UTF-8, or the data
/// cannot be converted to `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R, T>(mut reader: R) -> Result<T>
where
    R: io::Read,
    T: DeserializeOwned,
{
    let mut string = String::new();
    reader.read_to_string(&mut string)?;
    from_str(&string)
}

/// Deserialize an instance of type `T` from bytes of logfmt text.
///
/// # Errors
///
/// Returns an error if the bytes are not valid UTF-8 or cannot be converted
/// to `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice<T>(v: &[u8]) -> Result<T>
where
    T: DeserializeOwned,
{
    let s = std::str::from_utf8(v).map_err(|e| Error::io(&e.to_string()))?;
    from_str(s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Point {
        x: i32,
        y: i32,
    }

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct User {
        id: u32,
        name: String,
        active: bool,
        tags: Vec<String>,
    }

    #[test]
    fn test_serialize_deserialize_point() {
        let point = Point { x: 1, y: 2 };
        let line = to_string(&point).unwrap();
        let point_back: Point = from_str(&line).unwrap();
        assert_eq!(point, point_back);
    }

    #[test]
    fn test_serialize_deserialize_user() {
        let user = User {
            id: 123,
            name: "Alice Smith".to_string(),
            active: true,
            tags: vec!["admin".to_string(), "user".to_string()],
        };

        let line = to_string(&user).unwrap();
        assert_eq!(
            line,
            r#"id=123 name="Alice Smith" active=true tags.[0]=admin tags.[1]=user"#
        );
        let user_back: User = from_str(&line).unwrap();
        assert_eq!(user, user_back);
    }

    #[test]
    fn test_sorted_output() {
        let point = Point { x: 1, y: 2 };
        let line = to_string_with_options(&point, &EncodeOptions::sorted()).unwrap();
        assert_eq!(line, "x=1 y=2");
    }

    #[test]
    fn test_typed_decode_into_struct() {
        let point: Point = from_str_with_options("y=2 x=1", &DecodeOptions::typed()).unwrap();
        assert_eq!(point, Point { x: 1, y: 2 });
    }

    #[test]
    fn test_from_slice_rejects_invalid_utf8() {
        let err = from_slice::<Point>(&[0xff, 0xfe]).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_to_writer() {
        let mut buffer = Vec::new();
        to_writer(&mut buffer, &Point { x: 3, y: 4 }).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "x=3 y=4");
    }

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Batch {
        id: u32,
        items: Vec<u32>,
    }

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct DefaultedBatch {
        id: u32,
        #[serde(default)]
        items: Vec<u32>,
    }

    #[test]
    fn test_empty_vec_field_needs_default() {
        let line = to_string(&Batch { id: 1, items: vec![] }).unwrap();
        assert_eq!(line, "id=1");

        let err = from_str::<Batch>(&line).unwrap_err();
        assert!(err.to_string().contains("missing field `items`"));

        let batch: DefaultedBatch = from_str(&line).unwrap();
        assert_eq!(batch, DefaultedBatch { id: 1, items: vec![] });
    }

    #[test]
    fn test_empty_root_vec_roundtrip() {
        let items: Vec<u32> = Vec::new();
        let line = to_string(&items).unwrap();
        assert_eq!(line, "");
        assert_eq!(from_str::<Vec<u32>>(&line).unwrap(), items);
    }
}
