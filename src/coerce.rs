//! Scalar coercion.
//!
//! Each coercer turns the raw text that follows a declaration (or one table
//! cell) into a [`Value`] of the declared [`Kind`]. The raw text may still
//! carry leading whitespace and a trailing comment: leading whitespace is
//! skipped, anything after the matched literal is ignored, and anything else
//! before the literal is an error.
//!
//! ```rust
//! use serde_fable::{coerce, Kind, TypeTag, Value};
//!
//! let tag = TypeTag::new(Kind::Integer);
//! assert_eq!(coerce(tag, "10.987  # truncated").unwrap(), Value::Integer(10));
//!
//! let tag = TypeTag::new(Kind::Float);
//! assert_eq!(coerce(tag, "281_979.441_512").unwrap(), Value::Float(281979.441512));
//! ```

use crate::types::{Kind, TypeTag};
use crate::{Error, Result, Value};
use once_cell::sync::Lazy;
use regex::Regex;

static NULL_LITERAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^null\b").unwrap());

static INTEGER_LITERAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[+-]?[0-9]+").unwrap());

/// Signed decimal with optional fraction and exponent. Underscores may sit
/// anywhere among the digits; at least one digit is required.
static FLOAT_LITERAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:[0-9_]*[0-9][0-9_]*(?:\.[0-9_]*)?|\.[0-9_]*[0-9][0-9_]*)(?:[eE][+-]?[0-9]+)?")
        .unwrap()
});

static BOOLEAN_LITERAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(?:true|false)\b").unwrap());

/// Coerces `raw` according to `tag`.
///
/// # Errors
///
/// - [`ErrorKind::NullableTypeViolation`](crate::ErrorKind) if `raw` is
///   `null` and the tag is not nullable
/// - [`ErrorKind::Parsing`](crate::ErrorKind) if `raw` does not start with a
///   literal of the declared kind
pub fn coerce(tag: TypeTag, raw: &str) -> Result<Value> {
    let raw = raw.trim_start();

    if NULL_LITERAL.is_match(raw) {
        return if tag.nullable {
            Ok(Value::Null)
        } else {
            Err(Error::nullable(tag.kind))
        };
    }

    match tag.kind {
        Kind::Integer => coerce_integer(raw),
        Kind::Float => coerce_float(raw),
        Kind::String => coerce_string(raw),
        Kind::Boolean => coerce_boolean(raw),
    }
}

/// Leading digits only: a fractional part is dropped, not rounded.
fn coerce_integer(raw: &str) -> Result<Value> {
    let literal = INTEGER_LITERAL
        .find(raw)
        .ok_or_else(|| unknown_token(raw))?
        .as_str();

    literal
        .trim_start_matches('+')
        .parse::<i64>()
        .map(Value::Integer)
        .map_err(|_| Error::parsing(format!("integer out of range: {}", literal)))
}

fn coerce_float(raw: &str) -> Result<Value> {
    let token = raw.split_whitespace().next().unwrap_or("");
    let lowered = token.to_ascii_lowercase();

    // NaN/Infinity spellings vary wildly (NaNQ, sNaN, 1.#SNAN, +inf, ...),
    // so any occurrence wins over a numeric prefix.
    if lowered.contains("nan") {
        return Ok(Value::Float(f64::NAN));
    }
    if lowered.contains("inf") {
        let value = if token.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
        return Ok(Value::Float(value));
    }

    let literal = FLOAT_LITERAL
        .find(raw)
        .ok_or_else(|| unknown_token(raw))?
        .as_str();
    let digits: String = literal.chars().filter(|&c| c != '_').collect();

    digits
        .parse::<f64>()
        .map(Value::Float)
        .map_err(|_| unknown_token(raw))
}

/// Content between the opening quote and the next quote, kept verbatim.
fn coerce_string(raw: &str) -> Result<Value> {
    let rest = raw
        .strip_prefix('"')
        .ok_or_else(|| Error::parsing(format!("expected quoted string, found: {}", raw)))?;

    match rest.find('"') {
        Some(end) => Ok(Value::String(rest[..end].to_string())),
        None => Err(Error::parsing(format!("unterminated string: {}", raw))),
    }
}

fn coerce_boolean(raw: &str) -> Result<Value> {
    match BOOLEAN_LITERAL.find(raw).map(|m| m.as_str()) {
        Some("true") => Ok(Value::Boolean(true)),
        Some(_) => Ok(Value::Boolean(false)),
        None => Err(unknown_token(raw)),
    }
}

fn unknown_token(raw: &str) -> Error {
    Error::parsing(format!("unknown token: {}", raw.trim_end()))
}
