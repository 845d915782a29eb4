//! Configuration options for logfmt decoding and encoding.
//!
//! - [`DecodeOptions`]: type inference and the list length limit
//! - [`EncodeOptions`]: key ordering
//!
//! ## Examples
//!
//! ```rust
//! use serde_logfmt::{decode_with_options, DecodeOptions, Number, Value};
//!
//! let options = DecodeOptions::new().with_infer_types(true);
//! let value = decode_with_options("retries=3 ok=true", &options);
//!
//! assert_eq!(value.get("retries"), Some(&Value::Number(Number::Integer(3))));
//! assert_eq!(value.get("ok"), Some(&Value::Bool(true)));
//! ```

/// Default number of list slots one decode may build from bracket indices.
pub const DEFAULT_MAX_LIST_LEN: usize = 1 << 20;

/// Options for turning logfmt text into a [`Value`](crate::Value).
///
/// # Examples
///
/// ```rust
/// use serde_logfmt::DecodeOptions;
///
/// // Every value stays a string
/// let options = DecodeOptions::new();
/// assert!(!options.infer_types);
///
/// // null / bool / integer / float detection
/// let options = DecodeOptions::typed();
/// assert!(options.infer_types);
/// ```
#[derive(Clone, Debug)]
pub struct DecodeOptions {
    /// Convert raw values into null, bool, integer or float where they parse as one.
    pub infer_types: bool,
    /// Total list slots (padding included) one decode may build. Index
    /// containers that do not fit in what remains stay objects.
    pub max_list_len: usize,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        DecodeOptions {
            infer_types: false,
            max_list_len: DEFAULT_MAX_LIST_LEN,
        }
    }
}

impl DecodeOptions {
    /// Creates default options (no type inference).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options with type inference enabled.
    #[must_use]
    pub fn typed() -> Self {
        DecodeOptions {
            infer_types: true,
            ..Default::default()
        }
    }

    /// Enables or disables scalar type inference.
    #[must_use]
    pub fn with_infer_types(mut self, infer_types: bool) -> Self {
        self.infer_types = infer_types;
        self
    }

    /// Sets how many list slots bracket indices may produce in one decode.
    ///
    /// `a.[5]=x` needs a list of length 6; with a budget below that, `a`
    /// decodes as an object keyed by `"[5]"` instead. Every list on the line
    /// draws on the same budget.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_logfmt::{decode_with_options, DecodeOptions};
    ///
    /// let options = DecodeOptions::new().with_max_list_len(4);
    /// let value = decode_with_options("a.[5]=x", &options);
    /// assert!(value.get("a").unwrap().is_object());
    /// ```
    #[must_use]
    pub fn with_max_list_len(mut self, max_list_len: usize) -> Self {
        self.max_list_len = max_list_len;
        self
    }
}

/// Options for turning a [`Value`](crate::Value) into logfmt text.
///
/// # Examples
///
/// ```rust
/// use serde_logfmt::{encode_with_options, logfmt, EncodeOptions};
///
/// let value = logfmt!({ "b": 1, "a": 2 });
/// assert_eq!(encode_with_options(&value, &EncodeOptions::sorted()), "a=2 b=1");
/// ```
#[derive(Clone, Debug, Default)]
pub struct EncodeOptions {
    /// Emit object keys in ascending byte order instead of insertion order.
    pub sort_keys: bool,
}

impl EncodeOptions {
    /// Creates default options (insertion order).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options that sort object keys.
    #[must_use]
    pub fn sorted() -> Self {
        EncodeOptions { sort_keys: true }
    }

    /// Enables or disables key sorting.
    #[must_use]
    pub fn with_sort_keys(mut self, sort_keys: bool) -> Self {
        self.sort_keys = sort_keys;
        self
    }
}
