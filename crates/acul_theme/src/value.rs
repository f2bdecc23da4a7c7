//! Primitive branding values
//!
//! Branding JSON is loosely typed: the same field may arrive as a number in
//! one tenant's payload and as a string in another's. [`BrandingValue`] is the
//! closed set of shapes a field can take, so every formatter can match on it
//! exhaustively instead of relying on implicit coercion.

use serde::de::{self, Deserialize, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::{Serialize, Serializer};
use std::fmt;

/// A single branding field value
#[derive(Clone, Debug, PartialEq)]
pub enum BrandingValue {
    Bool(bool),
    Number(f64),
    String(String),
    /// An explicit `null` in the source document
    Null,
    /// Objects and arrays. Never rendered.
    Unsupported,
}

/// How to decide that a field is "not set" before formatting it
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OmissionPolicy {
    /// Omit falsy values (`""`, `0`, `false`, `null`), matching hosted login pages
    #[default]
    Falsy,
    /// Omit only missing or `null` values, so `0` and `""` are emitted
    Absent,
}

impl BrandingValue {
    /// Truthiness as the login page runtime sees it
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Bool(b) => *b,
            Self::Number(n) => *n != 0.0 && !n.is_nan(),
            Self::String(s) => !s.is_empty(),
            Self::Null => false,
            Self::Unsupported => true,
        }
    }

    /// Whether the value counts as set under `policy`
    pub fn is_present(&self, policy: OmissionPolicy) -> bool {
        match policy {
            OmissionPolicy::Falsy => self.is_truthy(),
            OmissionPolicy::Absent => !matches!(self, Self::Null),
        }
    }

    /// Stringify a primitive. `None` for `null` and structured values.
    pub fn to_css_string(&self) -> Option<String> {
        match self {
            Self::Bool(b) => Some(b.to_string()),
            Self::Number(n) => Some(format_number(*n)),
            Self::String(s) => Some(s.clone()),
            Self::Null | Self::Unsupported => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }
}

/// Render a number the way a browser stringifies it in a template literal.
///
/// Integral values drop the fractional part and `-0` prints as `0`.
pub(crate) fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        let s = if n > 0.0 { "Infinity" } else { "-Infinity" };
        s.to_string()
    } else if n == 0.0 {
        "0".to_string()
    } else {
        n.to_string()
    }
}

impl From<&str> for BrandingValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for BrandingValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<bool> for BrandingValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for BrandingValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for BrandingValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl<'de> Deserialize<'de> for BrandingValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(BrandingValueVisitor)
    }
}

struct BrandingValueVisitor;

impl<'de> Visitor<'de> for BrandingValueVisitor {
    type Value = BrandingValue;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a branding value")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
        Ok(BrandingValue::Bool(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(BrandingValue::Number(v as f64))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(BrandingValue::Number(v as f64))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(BrandingValue::Number(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(BrandingValue::String(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(BrandingValue::String(v))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(BrandingValue::Null)
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(BrandingValue::Null)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        BrandingValue::deserialize(deserializer)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(BrandingValue::Unsupported)
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
        Ok(BrandingValue::Unsupported)
    }
}

impl Serialize for BrandingValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Number(n) => serializer.serialize_f64(*n),
            Self::String(s) => serializer.serialize_str(s),
            Self::Null | Self::Unsupported => serializer.serialize_unit(),
        }
    }
}
