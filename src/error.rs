//! Error types for logfmt serialization and deserialization.
//!
//! Decoding text into a [`Value`](crate::Value) and encoding a value back to
//! text never fail: the scanner degrades malformed input to some parse, and
//! every scalar has a textual form. Errors come from the serde layer, when a
//! Rust type asks for something the tree cannot give it, and from I/O.
//!
//! ## Error Categories
//!
//! - **I/O Errors**: reader/writer failures and non-UTF-8 input
//! - **Type Mismatches**: a decoded value does not fit the requested Rust type
//! - **Unsupported Types**: values with no logfmt form (e.g. non-string map keys)
//!
//! ## Examples
//!
//! ```rust
//! use serde_logfmt::{from_str, Error};
//!
//! #[derive(serde::Deserialize, Debug)]
//! struct Line { port: u16 }
//!
//! let result: Result<Line, Error> = from_str("port=http");
//! assert!(matches!(result, Err(Error::TypeMismatch { .. })));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors raised by the serde layer.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// IO error during reading or writing
    #[error("IO error: {0}")]
    Io(String),

    /// A decoded value cannot become the requested type
    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: String, found: String },

    /// Unsupported type for serialization
    #[error("Unsupported type: {0}")]
    UnsupportedType(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates a type mismatch error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_logfmt::Error;
    ///
    /// let err = Error::type_mismatch("integer", "string");
    /// assert!(err.to_string().contains("expected integer"));
    /// ```
    pub fn type_mismatch(expected: &str, found: &str) -> Self {
        Error::TypeMismatch {
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }

    /// Creates an unsupported type error for values that cannot be written as logfmt.
    pub fn unsupported_type(msg: &str) -> Self {
        Error::UnsupportedType(msg.to_string())
    }

    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_logfmt::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for reading/writing failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::io(&err.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
