//! Call argument and result values.
//!
//! Every argument crossing a [`Component`](crate::Component) boundary is a
//! [`Value`]. The [`Arg`] trait maps concrete Rust types onto values and names
//! their [`ArgKind`], which is what signatures match on.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Discriminant of a [`Value`], used to describe method parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArgKind {
    /// The unit value.
    Null,
    /// A boolean.
    Bool,
    /// A 64-bit signed integer.
    Int,
    /// A 64-bit float.
    Float,
    /// A UTF-8 string.
    #[serde(rename = "string")]
    Str,
    /// Raw bytes.
    Bytes,
    /// An ordered list of values.
    List,
    /// A string-keyed map of values.
    Map,
    /// Any value at all.
    Any,
}

impl ArgKind {
    /// Lowercase name of the kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Float => "float",
            Self::Str => "string",
            Self::Bytes => "bytes",
            Self::List => "list",
            Self::Map => "map",
            Self::Any => "any",
        }
    }

    /// Whether a value of kind `other` is acceptable where `self` is declared.
    #[must_use]
    pub fn accepts(self, other: Self) -> bool {
        self == Self::Any || self == other
    }
}

impl fmt::Display for ArgKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A dynamically typed call argument or result.
///
/// Serializes untagged, for logs and diagnostics only. `Bytes` and `List`
/// share a JSON shape, so values are never read back from JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// The unit value.
    #[default]
    Null,
    /// A boolean.
    Bool(bool),
    /// A 64-bit signed integer.
    Int(i64),
    /// A 64-bit float.
    Float(f64),
    /// A UTF-8 string.
    Str(String),
    /// Raw bytes.
    Bytes(Vec<u8>),
    /// An ordered list of values.
    List(Vec<Value>),
    /// A string-keyed map of values.
    Map(BTreeMap<String, Value>),
}

impl Value {
    /// The kind of this value.
    #[must_use]
    pub fn kind(&self) -> ArgKind {
        match self {
            Self::Null => ArgKind::Null,
            Self::Bool(_) => ArgKind::Bool,
            Self::Int(_) => ArgKind::Int,
            Self::Float(_) => ArgKind::Float,
            Self::Str(_) => ArgKind::Str,
            Self::Bytes(_) => ArgKind::Bytes,
            Self::List(_) => ArgKind::List,
            Self::Map(_) => ArgKind::Map,
        }
    }

    /// Borrow the string payload, if this is a string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// The integer payload, if this is an integer.
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Render the value as JSON, for logs and diagnostics.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_json())
    }
}

/// A Rust type that can travel as a [`Value`].
pub trait Arg: Sized {
    /// The kind this type is declared as in method signatures.
    const KIND: ArgKind;

    /// Convert into a value.
    fn into_value(self) -> Value;

    /// Convert back from a value, or `None` on a kind mismatch.
    fn from_value(value: &Value) -> Option<Self>;
}

impl Arg for () {
    const KIND: ArgKind = ArgKind::Null;

    fn into_value(self) -> Value {
        Value::Null
    }

    fn from_value(value: &Value) -> Option<Self> {
        matches!(value, Value::Null).then_some(())
    }
}

impl Arg for bool {
    const KIND: ArgKind = ArgKind::Bool;

    fn into_value(self) -> Value {
        Value::Bool(self)
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl Arg for i64 {
    const KIND: ArgKind = ArgKind::Int;

    fn into_value(self) -> Value {
        Value::Int(self)
    }

    fn from_value(value: &Value) -> Option<Self> {
        value.as_int()
    }
}

impl Arg for f64 {
    const KIND: ArgKind = ArgKind::Float;

    fn into_value(self) -> Value {
        Value::Float(self)
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Float(x) => Some(*x),
            _ => None,
        }
    }
}

impl Arg for String {
    const KIND: ArgKind = ArgKind::Str;

    fn into_value(self) -> Value {
        Value::Str(self)
    }

    fn from_value(value: &Value) -> Option<Self> {
        value.as_str().map(str::to_owned)
    }
}

impl Arg for Vec<u8> {
    const KIND: ArgKind = ArgKind::Bytes;

    fn into_value(self) -> Value {
        Value::Bytes(self)
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Bytes(b) => Some(b.clone()),
            _ => None,
        }
    }
}

impl Arg for Vec<Value> {
    const KIND: ArgKind = ArgKind::List;

    fn into_value(self) -> Value {
        Value::List(self)
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::List(items) => Some(items.clone()),
            _ => None,
        }
    }
}

impl Arg for BTreeMap<String, Value> {
    const KIND: ArgKind = ArgKind::Map;

    fn into_value(self) -> Value {
        Value::Map(self)
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Map(map) => Some(map.clone()),
            _ => None,
        }
    }
}

impl Arg for Value {
    const KIND: ArgKind = ArgKind::Any;

    fn into_value(self) -> Value {
        self
    }

    fn from_value(value: &Value) -> Option<Self> {
        Some(value.clone())
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Str(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}
