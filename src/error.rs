//! Error types for loading Fable documents.
//!
//! Loading never stops at the first problem. Every recoverable failure is
//! recorded as an [`Error`] and the full list is returned together as a
//! [`LoadError`] once the input is exhausted.
//!
//! ## Error Categories
//!
//! - **Parsing**: a literal does not match the grammar of its declared type
//! - **Nullable type violations**: `null` used against a non-nullable type
//! - **Unknown types**: a type tag outside `integer`, `float`, `string`, `boolean`
//! - **Unexpected end of input**: the input ended while a table still expected
//!   its type or header row. This is the only fatal category.
//!
//! ## Examples
//!
//! ```rust
//! use serde_fable::{load_str, ErrorKind};
//!
//! let err = load_str("integer a null\nboolean b yes\n").unwrap_err();
//! assert_eq!(err.len(), 2);
//! assert_eq!(err.errors()[0].kind(), ErrorKind::NullableTypeViolation);
//! assert_eq!(err.errors()[1].line(), Some(2));
//! ```

use crate::types::Kind;
use std::fmt;
use thiserror::Error;

/// The category of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Parsing,
    NullableTypeViolation,
    UnknownType,
    UnexpectedEof,
    Io,
    Custom,
}

/// A single problem found while loading a document.
///
/// Errors raised by the coercers carry no line; the loader attaches one with
/// [`Error::at_line`] before recording them.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A literal did not match the grammar of its declared type.
    #[error("{}parsing error: {msg}", location(.line))]
    Parsing { line: Option<usize>, msg: String },

    /// `null` was used against a type declared without the `?` suffix.
    #[error("{}null value not allowed for non-nullable type: {kind}; use {kind}?", location(.line))]
    NullableType { line: Option<usize>, kind: Kind },

    /// One or more type tags outside the known vocabulary.
    #[error("{}unknown type(s): {}", location(.line), joined(.tokens))]
    UnknownType {
        line: Option<usize>,
        tokens: Vec<String>,
    },

    /// The input ended where a table still required a line.
    #[error("{}unexpected end of input, expected {expected}", location(.line))]
    UnexpectedEof { line: Option<usize>, expected: String },

    /// IO error while reading the input.
    #[error("IO error: {0}")]
    Io(String),

    /// Error raised while deserializing a loaded document into a Rust type.
    #[error("Error: {0}")]
    Custom(String),
}

fn location(line: &Option<usize>) -> String {
    match line {
        Some(line) => format!("line {}: ", line),
        None => String::new(),
    }
}

/// Quoted so empty or blank tokens stay visible.
fn joined(tokens: &[String]) -> String {
    tokens
        .iter()
        .map(|token| format!("{:?}", token))
        .collect::<Vec<_>>()
        .join(", ")
}

impl Error {
    /// Creates a parsing error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_fable::{Error, ErrorKind};
    ///
    /// let err = Error::parsing("unknown token: abc");
    /// assert_eq!(err.kind(), ErrorKind::Parsing);
    /// assert_eq!(err.to_string(), "parsing error: unknown token: abc");
    /// ```
    pub fn parsing<T: fmt::Display>(msg: T) -> Self {
        Error::Parsing {
            line: None,
            msg: msg.to_string(),
        }
    }

    /// Creates a nullable type violation for the given kind.
    pub fn nullable(kind: Kind) -> Self {
        Error::NullableType { line: None, kind }
    }

    /// Creates an unknown type error naming every offending token.
    pub fn unknown_type(tokens: Vec<String>) -> Self {
        Error::UnknownType { line: None, tokens }
    }

    /// Creates an unexpected end-of-input error.
    pub fn unexpected_eof(expected: &str) -> Self {
        Error::UnexpectedEof {
            line: None,
            expected: expected.to_string(),
        }
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for reading failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Attaches a 1-based source line, unless the error already carries one.
    #[must_use]
    pub fn at_line(mut self, n: usize) -> Self {
        match &mut self {
            Error::Parsing { line, .. }
            | Error::NullableType { line, .. }
            | Error::UnknownType { line, .. }
            | Error::UnexpectedEof { line, .. } => {
                line.get_or_insert(n);
            }
            Error::Io(_) | Error::Custom(_) => {}
        }
        self
    }

    /// The 1-based line the error was found on, if known.
    #[must_use]
    pub fn line(&self) -> Option<usize> {
        match self {
            Error::Parsing { line, .. }
            | Error::NullableType { line, .. }
            | Error::UnknownType { line, .. }
            | Error::UnexpectedEof { line, .. } => *line,
            Error::Io(_) | Error::Custom(_) => None,
        }
    }

    /// The message without the `line N:` prefix or the category label.
    pub(crate) fn detail(&self) -> String {
        match self {
            Error::Parsing { msg, .. } => msg.clone(),
            other => other.clone().without_line().to_string(),
        }
    }

    fn without_line(mut self) -> Self {
        match &mut self {
            Error::Parsing { line, .. }
            | Error::NullableType { line, .. }
            | Error::UnknownType { line, .. }
            | Error::UnexpectedEof { line, .. } => *line = None,
            Error::Io(_) | Error::Custom(_) => {}
        }
        self
    }

    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Parsing { .. } => ErrorKind::Parsing,
            Error::NullableType { .. } => ErrorKind::NullableTypeViolation,
            Error::UnknownType { .. } => ErrorKind::UnknownType,
            Error::UnexpectedEof { .. } => ErrorKind::UnexpectedEof,
            Error::Io(_) => ErrorKind::Io,
            Error::Custom(_) => ErrorKind::Custom,
        }
    }

    /// Returns `true` if the error leaves the line cursor in an unrecoverable
    /// position and must abort the load.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::UnexpectedEof { .. } | Error::Io(_))
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// The aggregate failure of one load: every error collected in a single pass.
///
/// Always holds at least one error.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadError {
    errors: Vec<Error>,
}

impl LoadError {
    pub(crate) fn new(errors: Vec<Error>) -> Self {
        debug_assert!(!errors.is_empty());
        LoadError { errors }
    }

    /// All collected errors, in source order.
    #[must_use]
    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns `true` if the load was aborted by a fatal error.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        self.errors.iter().any(Error::is_fatal)
    }

    pub fn into_errors(self) -> Vec<Error> {
        self.errors
    }
}

impl From<Error> for LoadError {
    fn from(error: Error) -> Self {
        LoadError::new(vec![error])
    }
}

impl IntoIterator for LoadError {
    type Item = Error;
    type IntoIter = std::vec::IntoIter<Error>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.errors.as_slice() {
            [single] => write!(f, "{}", single),
            errors => {
                write!(f, "{} errors while loading document", errors.len())?;
                for error in errors {
                    write!(f, "\n  {}", error)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for LoadError {}
