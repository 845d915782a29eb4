//! Serde deserialization out of [`Value`] trees.
//!
//! [`crate::from_str`] decodes a logfmt line into a [`Value`] and then hands
//! it to a [`ValueDeserializer`]. Without type inference every leaf is a
//! string, so the deserializer converts on demand: a field typed `u16`
//! parses `"8080"`, a `bool` accepts `"true"`, and an `Option` reads
//! `null` as `None`. With inference on, the opposite also holds: a `String`
//! field accepts a number or a bool and takes its text.
//!
//! Empty collections write no tokens, so a struct field holding an empty
//! `Vec` or map is absent from the decoded tree. Mark such fields
//! `#[serde(default)]` to read them back; otherwise deserialization fails
//! with a missing field error. An empty line reads as an empty sequence.
//!
//! ```rust
//! use serde::Deserialize;
//! use serde_logfmt::from_str;
//!
//! #[derive(Deserialize, Debug, PartialEq)]
//! struct Conn { host: String, port: u16, tls: bool, proxy: Option<String> }
//!
//! let conn: Conn = from_str("host=db.local port=5432 tls=true proxy=null").unwrap();
//! assert_eq!(conn, Conn { host: "db.local".into(), port: 5432, tls: true, proxy: None });
//! ```

use crate::{encode, Error, LogfmtMap, Number, Result, Value};
use serde::de::{self, IntoDeserializer};
use serde::forward_to_deserialize_any;

/// Deserializer that reads from an owned [`Value`].
pub struct ValueDeserializer {
    value: Value,
}

impl ValueDeserializer {
    pub fn new(value: Value) -> Self {
        ValueDeserializer { value }
    }
}

/// Deserializes any `T: Deserialize` from a [`Value`].
///
/// # Examples
///
/// ```rust
/// use serde_logfmt::{from_value, logfmt};
///
/// let ids: Vec<u32> = from_value(logfmt!(["1", "2", "3"])).unwrap();
/// assert_eq!(ids, vec![1, 2, 3]);
/// ```
pub fn from_value<T>(value: Value) -> Result<T>
where
    T: de::DeserializeOwned,
{
    T::deserialize(ValueDeserializer::new(value))
}

macro_rules! deserialize_number {
    ($method:ident, $visit:ident, $ty:ty, $expected:literal) => {
        fn $method<V>(self, visitor: V) -> Result<V::Value>
        where
            V: de::Visitor<'de>,
        {
            match self.value {
                Value::String(s) => match s.parse::<$ty>() {
                    Ok(n) => visitor.$visit(n),
                    Err(_) => Err(Error::type_mismatch($expected, "string")),
                },
                other => ValueDeserializer::new(other).deserialize_any(visitor),
            }
        }
    };
}

impl<'de> de::Deserializer<'de> for ValueDeserializer {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::Null => visitor.visit_unit(),
            Value::Bool(b) => visitor.visit_bool(b),
            Value::Number(Number::Integer(i)) => visitor.visit_i64(i),
            Value::Number(Number::Float(f)) => visitor.visit_f64(f),
            Value::String(s) => visitor.visit_string(s),
            Value::Array(arr) => visitor.visit_seq(SeqDeserializer::new(arr)),
            Value::Object(obj) => visitor.visit_map(MapDeserializer::new(obj)),
        }
    }

    fn deserialize_bool<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::Bool(b) => visitor.visit_bool(b),
            Value::String(s) => match s.as_str() {
                "true" => visitor.visit_bool(true),
                "false" => visitor.visit_bool(false),
                _ => Err(Error::type_mismatch("bool", "string")),
            },
            other => Err(Error::type_mismatch("bool", other.kind())),
        }
    }

    deserialize_number!(deserialize_i8, visit_i8, i8, "i8");
    deserialize_number!(deserialize_i16, visit_i16, i16, "i16");
    deserialize_number!(deserialize_i32, visit_i32, i32, "i32");
    deserialize_number!(deserialize_i64, visit_i64, i64, "i64");
    deserialize_number!(deserialize_u8, visit_u8, u8, "u8");
    deserialize_number!(deserialize_u16, visit_u16, u16, "u16");
    deserialize_number!(deserialize_u32, visit_u32, u32, "u32");
    deserialize_number!(deserialize_u64, visit_u64, u64, "u64");
    deserialize_number!(deserialize_f32, visit_f32, f32, "f32");
    deserialize_number!(deserialize_f64, visit_f64, f64, "f64");

    fn deserialize_str<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_string(visitor)
    }

    fn deserialize_string<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::String(s) => visitor.visit_string(s),
            scalar @ (Value::Bool(_) | Value::Number(_)) => {
                visitor.visit_string(encode::encode_scalar(&scalar))
            }
            other => Err(Error::type_mismatch("string", other.kind())),
        }
    }

    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::Null => visitor.visit_none(),
            Value::String(ref s) if s == "null" => visitor.visit_none(),
            other => visitor.visit_some(ValueDeserializer::new(other)),
        }
    }

    fn deserialize_unit<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::Null => visitor.visit_unit(),
            Value::String(ref s) if s == "null" => visitor.visit_unit(),
            other => Err(Error::type_mismatch("null", other.kind())),
        }
    }

    fn deserialize_unit_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_unit(visitor)
    }

    fn deserialize_newtype_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_seq<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::Array(arr) => visitor.visit_seq(SeqDeserializer::new(arr)),
            // an empty line is also the empty list
            Value::Object(obj) if obj.is_empty() => {
                visitor.visit_seq(SeqDeserializer::new(Vec::new()))
            }
            other => Err(Error::type_mismatch("array", other.kind())),
        }
    }

    fn deserialize_tuple<V>(self, _len: usize, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_seq(visitor)
    }

    fn deserialize_tuple_struct<V>(
        self,
        _name: &'static str,
        _len: usize,
        visitor: V,
    ) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_seq(visitor)
    }

    fn deserialize_enum<V>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::String(variant) => visitor.visit_enum(variant.into_deserializer()),
            Value::Object(obj) if obj.len() == 1 => {
                let mut iter = obj.into_iter();
                match iter.next() {
                    Some((variant, value)) => {
                        visitor.visit_enum(EnumDeserializer::new(variant, value))
                    }
                    None => Err(Error::custom("empty enum object")),
                }
            }
            other => Err(Error::type_mismatch("enum", other.kind())),
        }
    }

    forward_to_deserialize_any! {
        i128 u128 char bytes byte_buf map struct identifier ignored_any
    }
}

struct SeqDeserializer {
    iter: std::vec::IntoIter<Value>,
}

impl SeqDeserializer {
    fn new(vec: Vec<Value>) -> Self {
        SeqDeserializer {
            iter: vec.into_iter(),
        }
    }
}

impl<'de> de::SeqAccess<'de> for SeqDeserializer {
    type Error = Error;

    fn next_element_seed<T>(&mut self, seed: T) -> Result<Option<T::Value>>
    where
        T: de::DeserializeSeed<'de>,
    {
        match self.iter.next() {
            Some(value) => seed.deserialize(ValueDeserializer::new(value)).map(Some),
            None => Ok(None),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        match self.iter.size_hint() {
            (lower, Some(upper)) if lower == upper => Some(upper),
            _ => None,
        }
    }
}

struct MapDeserializer {
    iter: indexmap::map::IntoIter<String, Value>,
    value: Option<Value>,
}

impl MapDeserializer {
    fn new(map: LogfmtMap) -> Self {
        MapDeserializer {
            iter: map.into_iter(),
            value: None,
        }
    }
}

impl<'de> de::MapAccess<'de> for MapDeserializer {
    type Error = Error;

    fn next_key_seed<K>(&mut self, seed: K) -> Result<Option<K::Value>>
    where
        K: de::DeserializeSeed<'de>,
    {
        match self.iter.next() {
            Some((key, value)) => {
                self.value = Some(value);
                seed.deserialize(ValueDeserializer::new(Value::String(key)))
                    .map(Some)
            }
            None => Ok(None),
        }
    }

    fn next_value_seed<V>(&mut self, seed: V) -> Result<V::Value>
    where
        V: de::DeserializeSeed<'de>,
    {
        match self.value.take() {
            Some(value) => seed.deserialize(ValueDeserializer::new(value)),
            None => Err(Error::custom("next_value_seed called before next_key_seed")),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        match self.iter.size_hint() {
            (lower, Some(upper)) if lower == upper => Some(upper),
            _ => None,
        }
    }
}

struct EnumDeserializer {
    variant: String,
    value: Value,
}

impl EnumDeserializer {
    fn new(variant: String, value: Value) -> Self {
        EnumDeserializer { variant, value }
    }
}

impl<'de> de::EnumAccess<'de> for EnumDeserializer {
    type Error = Error;
    type Variant = VariantDeserializer;

    fn variant_seed<V>(self, seed: V) -> Result<(V::Value, Self::Variant)>
    where
        V: de::DeserializeSeed<'de>,
    {
        let variant = seed.deserialize(ValueDeserializer::new(Value::String(self.variant)))?;
        Ok((variant, VariantDeserializer { value: self.value }))
    }
}

struct VariantDeserializer {
    value: Value,
}

impl<'de> de::VariantAccess<'de> for VariantDeserializer {
    type Error = Error;

    fn unit_variant(self) -> Result<()> {
        match self.value {
            Value::Null => Ok(()),
            Value::String(ref s) if s == "null" => Ok(()),
            _ => Err(Error::custom("Expected unit variant")),
        }
    }

    fn newtype_variant_seed<T>(self, seed: T) -> Result<T::Value>
    where
        T: de::DeserializeSeed<'de>,
    {
        seed.deserialize(ValueDeserializer::new(self.value))
    }

    fn tuple_variant<V>(self, _len: usize, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::Array(arr) => visitor.visit_seq(SeqDeserializer::new(arr)),
            _ => Err(Error::custom("Expected tuple variant")),
        }
    }

    fn struct_variant<V>(self, _fields: &'static [&'static str], visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::Object(obj) => visitor.visit_map(MapDeserializer::new(obj)),
            _ => Err(Error::custom("Expected struct variant")),
        }
    }
}
