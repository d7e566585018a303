//! Typed scalar values.
//!
//! This module provides the [`Value`] enum produced by the coercers for every
//! variable declaration and every table cell, and [`Variable`], the result of
//! one variable declaration line.
//!
//! ## Usage Patterns
//!
//! ```rust
//! use serde_fable::{load_str, Value};
//!
//! let doc = load_str("integer? retries null\nfloat ratio 0.5\n").unwrap();
//!
//! assert!(doc.value("retries").unwrap().is_null());
//! assert_eq!(doc.value("ratio").and_then(Value::as_f64), Some(0.5));
//! ```
//!
//! ### Extracting Values
//!
//! ```rust
//! use serde_fable::Value;
//! use std::convert::TryFrom;
//!
//! let value = Value::from(42);
//! let num: i64 = i64::try_from(value).unwrap();
//! assert_eq!(num, 42);
//! ```

use serde::{Serialize, Serializer};
use std::fmt;

/// A single typed value of a Fable document.
///
/// `Null` only ever appears where the declared type was nullable.
///
/// Floats compare by bit pattern, so a NaN equals itself and `0.0` differs
/// from `-0.0`. Loading the same text twice always gives equal values.
#[derive(Clone, Debug, Default)]
pub enum Value {
    #[default]
    Null,
    Integer(i64),
    Float(f64),
    String(String),
    Boolean(bool),
}

impl Value {
    /// Returns `true` if the value is null.
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Value::Integer(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Value::Float(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_boolean(&self) -> bool {
        matches!(self, Value::Boolean(_))
    }

    /// If the value is an integer, returns it. Otherwise returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_fable::Value;
    ///
    /// assert_eq!(Value::Integer(7).as_i64(), Some(7));
    /// assert_eq!(Value::Float(7.0).as_i64(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// If the value is numeric, returns it as an `f64`. Otherwise returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_fable::Value;
    ///
    /// assert_eq!(Value::Float(2.5).as_f64(), Some(2.5));
    /// assert_eq!(Value::Integer(2).as_f64(), Some(2.0));
    /// assert_eq!(Value::Boolean(true).as_f64(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Integer(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a.to_bits() == b.to_bits(),
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Integer(i) => write!(f, "{}", i),
            Value::Float(fl) if fl.is_nan() => write!(f, "nan"),
            Value::Float(fl) if fl.is_infinite() => {
                write!(f, "{}inf", if *fl < 0.0 { "-" } else { "+" })
            }
            Value::Float(fl) => write!(f, "{}", fl),
            Value::String(s) => write!(f, "\"{}\"", s),
            Value::Boolean(b) => write!(f, "{}", b),
        }
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Integer(i) => serializer.serialize_i64(*i),
            Value::Float(f) => serializer.serialize_f64(*f),
            Value::String(s) => serializer.serialize_str(s),
            Value::Boolean(b) => serializer.serialize_bool(*b),
        }
    }
}

/// The result of one variable declaration line.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Variable {
    pub name: String,
    pub value: Value,
}

impl Variable {
    pub fn new(name: impl Into<String>, value: Value) -> Self {
        Variable {
            name: name.into(),
            value,
        }
    }
}

// TryFrom implementations for extracting values from Value
impl TryFrom<Value> for i64 {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::Integer(i) => Ok(i),
            _ => Err(crate::Error::custom(format!(
                "expected integer, found {:?}",
                value
            ))),
        }
    }
}

impl TryFrom<Value> for f64 {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::Integer(i) => Ok(i as f64),
            Value::Float(f) => Ok(f),
            _ => Err(crate::Error::custom(format!(
                "expected float, found {:?}",
                value
            ))),
        }
    }
}

impl TryFrom<Value> for bool {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::Boolean(b) => Ok(b),
            _ => Err(crate::Error::custom(format!(
                "expected boolean, found {:?}",
                value
            ))),
        }
    }
}

impl TryFrom<Value> for String {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::String(s) => Ok(s),
            _ => Err(crate::Error::custom(format!(
                "expected string, found {:?}",
                value
            ))),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Integer(value as i64)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}
