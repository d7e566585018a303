//! # serde_fable
//!
//! A typed reader for the Fable format, with Serde integration.
//!
//! ## What is Fable?
//!
//! Fable is a small, human-readable, line-oriented configuration and data
//! format. A document is an optional version directive followed by typed
//! scalar declarations and typed tables:
//!
//! ```text
//! %% 0.2.0
//! integer  retries  3          # comments run to the end of the line
//! float?   ratio    null
//! string   motto    "  . (451)-hi "
//!
//! table+ users
//! integer,string,boolean
//! "id","name","admin"
//! 1,"ann",true
//! 2,"bob",false
//! ```
//!
//! ## Key Features
//!
//! - **Typed**: every value is coerced according to its declared type tag
//! - **Nullable types**: a `?` suffix allows `null`
//! - **Forgiving numbers**: `NaN`/`inf` spellings, digit-group underscores,
//!   integer truncation of fractional literals
//! - **All errors at once**: a failed load reports every bad declaration,
//!   each with its line number
//! - **Serde Compatible**: deserialize documents straight into your own types
//!
//! ## Quick Start
//!
//! ### Loading a document
//!
//! ```rust
//! use serde_fable::{load_str, Value, Version};
//!
//! let doc = load_str("%% 0.2.0\ninteger n 10.987\nfloat x +inf\n").unwrap();
//!
//! assert_eq!(doc.version(), Some(Version::new(0, 2, 0)));
//! assert_eq!(doc.value("n"), Some(&Value::Integer(10)));
//! assert_eq!(doc.value("x"), Some(&Value::Float(f64::INFINITY)));
//! ```
//!
//! ### Deserializing into your own types
//!
//! ```rust
//! use serde::Deserialize;
//! use serde_fable::from_str;
//!
//! #[derive(Deserialize, Debug, PartialEq)]
//! struct Config {
//!     retries: u32,
//!     motto: Option<String>,
//! }
//!
//! let config: Config = from_str("integer retries 3\nstring? motto null\n").unwrap();
//! assert_eq!(config, Config { retries: 3, motto: None });
//! ```
//!
//! ### Error reporting
//!
//! ```rust
//! use serde_fable::load_str;
//!
//! let err = load_str("integer a \"1995\"\nboolean b maybe\n").unwrap_err();
//! assert_eq!(err.len(), 2);
//! println!("{}", err);
//! ```
//!
//! ## Safety Guarantees
//!
//! - No `unsafe` code blocks
//! - Proper error propagation with `Result` types
//! - A load never returns a partially filled document
//!
//! See the [`grammar`] module for the complete format reference.

pub mod coerce;
pub mod cursor;
pub mod de;
pub mod document;
pub mod error;
pub mod grammar;
pub mod line;
pub mod loader;
pub mod options;
pub mod table;
pub mod types;
pub mod value;
pub mod version;

pub use coerce::coerce;
pub use de::Deserializer;
pub use document::{Document, Entry};
pub use error::{Error, ErrorKind, LoadError, Result};
pub use options::{ColumnPolicy, LoadOptions};
pub use table::Table;
pub use types::{Kind, TypeTag};
pub use value::{Value, Variable};
pub use version::Version;

use serde::de::DeserializeOwned;
use std::io;

/// Loads a document from a sequence of lines.
///
/// # Examples
///
/// ```rust
/// use serde_fable::{load, Value};
///
/// let lines = vec!["boolean on true", "integer? n null"];
/// let doc = load(lines).unwrap();
/// assert_eq!(doc.value("on"), Some(&Value::Boolean(true)));
/// assert_eq!(doc.value("n"), Some(&Value::Null));
/// ```
///
/// # Errors
///
/// Returns every error found in the document. A document that fails to load
/// is never partially returned.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn load<I>(lines: I) -> std::result::Result<Document, LoadError>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    load_with_options(lines, LoadOptions::default())
}

/// Loads a document from a sequence of lines with custom options.
///
/// # Errors
///
/// Returns every error found in the document.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn load_with_options<I>(lines: I, options: LoadOptions) -> std::result::Result<Document, LoadError>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let owned: Vec<I::Item> = lines.into_iter().collect();
    let lines: Vec<&str> = owned.iter().map(|line| line.as_ref()).collect();
    loader::Loader::new(&lines, &options).run()
}

/// Loads a document from a string.
///
/// `\n` and `\r\n` line endings are both accepted.
///
/// # Errors
///
/// Returns every error found in the document.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn load_str(s: &str) -> std::result::Result<Document, LoadError> {
    load(s.lines())
}

/// Loads a document from UTF-8 bytes.
///
/// # Errors
///
/// Returns an error if the bytes are not valid UTF-8, or every error found
/// in the document.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn load_slice(v: &[u8]) -> std::result::Result<Document, LoadError> {
    let s = std::str::from_utf8(v).map_err(|e| Error::io(&e.to_string()))?;
    load_str(s)
}

/// Loads a document from an I/O stream.
///
/// # Examples
///
/// ```rust
/// use serde_fable::load_reader;
/// use std::io::Cursor;
///
/// let doc = load_reader(Cursor::new(b"string s \"hi\"\n")).unwrap();
/// assert_eq!(doc.value("s").and_then(|v| v.as_str()), Some("hi"));
/// ```
///
/// # Errors
///
/// Returns an error if reading fails, or every error found in the document.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn load_reader<R>(mut reader: R) -> std::result::Result<Document, LoadError>
where
    R: io::Read,
{
    let mut string = String::new();
    reader
        .read_to_string(&mut string)
        .map_err(|e| Error::io(&e.to_string()))?;
    load_str(&string)
}

/// Deserialize an instance of type `T` from a string of Fable text.
///
/// # Examples
///
/// ```rust
/// use serde_fable::from_str;
/// use serde::Deserialize;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let point: Point = from_str("integer x 1\ninteger y 2").unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
///
/// # Errors
///
/// Returns every load error, or a single error if the document cannot be
/// deserialized to type `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str<T>(s: &str) -> std::result::Result<T, LoadError>
where
    T: DeserializeOwned,
{
    from_document(load_str(s)?)
}

/// Deserialize an instance of type `T` from bytes of Fable text.
///
/// # Errors
///
/// Returns an error if the bytes are not valid UTF-8, the document fails to
/// load, or it cannot be deserialized to type `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice<T>(v: &[u8]) -> std::result::Result<T, LoadError>
where
    T: DeserializeOwned,
{
    from_document(load_slice(v)?)
}

/// Deserialize an instance of type `T` from an I/O stream of Fable text.
///
/// # Errors
///
/// Returns an error if reading fails, the document fails to load, or it
/// cannot be deserialized to type `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R, T>(reader: R) -> std::result::Result<T, LoadError>
where
    R: io::Read,
    T: DeserializeOwned,
{
    from_document(load_reader(reader)?)
}

/// Deserialize an instance of type `T` from an already loaded document.
///
/// # Errors
///
/// Returns an error if the document cannot be deserialized to type `T`.
pub fn from_document<T>(document: Document) -> std::result::Result<T, LoadError>
where
    T: DeserializeOwned,
{
    T::deserialize(Deserializer::new(document)).map_err(LoadError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize, Debug, PartialEq)]
    struct Point {
        x: i32,
        y: i32,
    }

    #[test]
    fn test_load_accepts_owned_and_borrowed_lines() {
        let owned = vec!["integer a 1".to_string()];
        let borrowed = ["integer a 1"];
        assert_eq!(load(owned).unwrap(), load(borrowed).unwrap());
    }

    #[test]
    fn test_crlf_input() {
        let doc = load_str("integer a 1\r\nstring s \"x\"\r\n").unwrap();
        assert_eq!(doc.value("s"), Some(&Value::from("x")));
    }

    #[test]
    fn test_invalid_utf8() {
        let err = load_slice(&[0xff, 0xfe]).unwrap_err();
        assert_eq!(err.errors()[0].kind(), ErrorKind::Io);
    }

    #[test]
    fn test_from_slice_and_reader() {
        let input = b"integer x 1\ninteger y 2\n";
        let point: Point = from_slice(input).unwrap();
        assert_eq!(point, Point { x: 1, y: 2 });

        let point: Point = from_reader(std::io::Cursor::new(input)).unwrap();
        assert_eq!(point, Point { x: 1, y: 2 });
    }

    #[test]
    fn test_missing_field() {
        let err = from_str::<Point>("integer x 1").unwrap_err();
        assert_eq!(err.errors()[0].kind(), ErrorKind::Custom);
        assert!(err.to_string().contains("missing field"));
    }
}
