//! JSON value types.
//!
//! This module defines the [`Value`] enum, which represents one node of a
//! parsed JSON tree, and the [`Member`] key/value pair used by objects.

use alloc::{string::String, vec::Vec};

use bstr::{BStr, BString, ByteSlice};

pub type Array = Vec<Value>;
pub type Object = Vec<Member>;

/// A JSON value as defined by [RFC 8259].
///
/// The `Value` enum can represent any JSON data type:
///
/// - Null
/// - Boolean
/// - Number
/// - String
/// - Array
/// - Object
///
/// String payloads are owned byte strings with an explicit length, so a
/// decoded `\u0000` escape is representable without truncation. Each value
/// exclusively owns its payload; dropping a value recursively releases all
/// of its children.
///
/// # Examples
///
/// ```
/// use jsontree::{Member, Value};
///
/// let v = Value::Object(vec![Member::new("key", Value::String("value".into()))]);
/// assert!(v.is_object());
/// ```
///
/// [RFC 8259]: https://datatracker.ietf.org/doc/html/rfc8259
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Null,
    Boolean(bool),
    Number(f64),
    String(BString),
    Array(Array),
    Object(Object),
}

/// One key/value pair inside a JSON object.
///
/// Keys are owned byte strings with an explicit length; members keep the
/// order in which they were parsed, and duplicate keys are preserved.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct Member {
    key: BString,
    value: Value,
}

impl Member {
    pub fn new(key: impl Into<BString>, value: Value) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }

    /// The member's key bytes.
    #[must_use]
    pub fn key(&self) -> &BStr {
        self.key.as_bstr()
    }

    /// The member's value, owned by the enclosing object.
    #[must_use]
    pub fn value(&self) -> &Value {
        &self.value
    }
}

/// The discriminant of a [`Value`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
}

impl Default for Value {
    fn default() -> Self {
        Self::Null
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.into())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v.into())
    }
}

impl From<BString> for Value {
    fn from(v: BString) -> Self {
        Self::String(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Self::Array(v)
    }
}

impl From<Vec<Member>> for Value {
    fn from(v: Vec<Member>) -> Self {
        Self::Object(v)
    }
}

impl Value {
    /// Returns the discriminant of this value.
    ///
    /// # Examples
    ///
    /// ```
    /// use jsontree::{Value, ValueKind};
    ///
    /// assert_eq!(Value::Number(1.0).kind(), ValueKind::Number);
    /// assert_eq!(Value::Null.kind(), ValueKind::Null);
    /// ```
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Null => ValueKind::Null,
            Self::Boolean(..) => ValueKind::Boolean,
            Self::Number(..) => ValueKind::Number,
            Self::String(..) => ValueKind::String,
            Self::Array(..) => ValueKind::Array,
            Self::Object(..) => ValueKind::Object,
        }
    }

    /// Returns `true` if the value is [`Null`].
    ///
    /// [`Null`]: Value::Null
    ///
    /// # Examples
    ///
    /// ```
    /// use jsontree::Value;
    ///
    /// assert!(Value::Null.is_null());
    /// assert!(!Value::Boolean(false).is_null());
    /// ```
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` if the value is [`Boolean`].
    ///
    /// [`Boolean`]: Value::Boolean
    #[must_use]
    pub fn is_bool(&self) -> bool {
        matches!(self, Self::Boolean(..))
    }

    /// Returns `true` if the value is [`Number`].
    ///
    /// [`Number`]: Value::Number
    #[must_use]
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Number(..))
    }

    /// Returns `true` if the value is [`String`].
    ///
    /// [`String`]: Value::String
    #[must_use]
    pub fn is_string(&self) -> bool {
        matches!(self, Self::String(..))
    }

    /// Returns `true` if the value is [`Array`].
    ///
    /// [`Array`]: Value::Array
    #[must_use]
    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(..))
    }

    /// Returns `true` if the value is [`Object`].
    ///
    /// [`Object`]: Value::Object
    #[must_use]
    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object(..))
    }

    /// The boolean payload, if this value is a boolean.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// The numeric payload, if this value is a number.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The string payload, if this value is a string.
    ///
    /// The returned byte string carries its own length; embedded NUL
    /// bytes are not terminators.
    ///
    /// # Examples
    ///
    /// ```
    /// use jsontree::Value;
    ///
    /// let v = Value::from("caf\u{e9}");
    /// assert_eq!(v.as_string().unwrap(), "caf\u{e9}");
    /// assert!(Value::Null.as_string().is_none());
    /// ```
    #[must_use]
    pub fn as_string(&self) -> Option<&BStr> {
        match self {
            Self::String(s) => Some(s.as_bstr()),
            _ => None,
        }
    }

    /// The elements of this value, if it is an array.
    ///
    /// Elements are owned by the array; indexing the returned slice is
    /// the element accessor.
    #[must_use]
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Self::Array(a) => Some(a),
            _ => None,
        }
    }

    /// The members of this value, if it is an object, in insertion order.
    #[must_use]
    pub fn as_object(&self) -> Option<&[Member]> {
        match self {
            Self::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Takes the value out, leaving `Null` in its place.
    ///
    /// This is the explicit release operation: the returned tree drops at
    /// the end of its scope, and the slot is reusable. Taking an
    /// already-`Null` value is a no-op that returns `Null`.
    ///
    /// # Examples
    ///
    /// ```
    /// use jsontree::Value;
    ///
    /// let mut v = Value::from("transient");
    /// assert!(v.take().is_string());
    /// assert!(v.is_null());
    /// assert!(v.take().is_null());
    /// ```
    pub fn take(&mut self) -> Value {
        core::mem::take(self)
    }
}
