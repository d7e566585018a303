//! Line classification.
//!
//! [`classify`] looks at one line in isolation and decides which parser owns
//! it. Shapes are tried in a fixed order:
//!
//! 1. version directive: `%% 0.2.0`
//! 2. variable declaration: `integer? retries 3`
//! 3. table declaration: `table+ users`
//! 4. a declaration keyword whose line does not fit its shape
//! 5. anything else, which is ignored
//!
//! Classification never touches the cursor, and never coerces values. Only
//! the loader enforces placement (the version directive must come first).

use crate::types::{Kind, TypeTag};
use crate::Version;
use once_cell::sync::Lazy;
use regex::Regex;

static VARIABLE_DECLARATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(integer|float|string|boolean)(\?)?\s+([A-Za-z0-9_]+)\s+(\S.*)").unwrap()
});

static TABLE_DECLARATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*table(\+)?\s+([A-Za-z0-9_]+)(?:\s|$)").unwrap());

/// A line that opens with a declaration keyword, well-formed or not.
static DECLARATION_KEYWORD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(?:(?:integer|float|string|boolean)\??|table\+?)(?:\s|$)").unwrap()
});

/// `<word>[?] <name> <value>` with any leading word.
static DECLARATION_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*([A-Za-z]+)\??\s+[A-Za-z0-9_]+\s+\S").unwrap());

/// The shape of one line.
#[derive(Debug, Clone, PartialEq)]
pub enum Line<'a> {
    Version(Version),
    Variable(VariableDecl<'a>),
    Table(TableDecl<'a>),
    /// Starts like a declaration but is missing its name or value.
    Malformed(&'a str),
    Ignorable,
}

/// `<type>[?] <name> <value...>`, with the value not yet coerced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VariableDecl<'a> {
    pub tag: TypeTag,
    pub name: &'a str,
    /// Remainder of the line, leading whitespace removed, comment included.
    pub raw: &'a str,
}

/// `table[+] <name>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableDecl<'a> {
    pub name: &'a str,
    pub has_header: bool,
}

/// Classifies a single line.
///
/// # Examples
///
/// ```rust
/// use serde_fable::line::{classify, Line};
///
/// assert!(matches!(classify("%% 0.2.0"), Line::Version(_)));
/// assert!(matches!(classify("  string? motto \"hi\""), Line::Variable(_)));
/// assert!(matches!(classify("table+ users"), Line::Table(_)));
/// assert!(matches!(classify("integer missing_value"), Line::Malformed(_)));
/// assert_eq!(classify("# just a comment"), Line::Ignorable);
/// ```
#[must_use]
pub fn classify(line: &str) -> Line<'_> {
    if let Some(version) = Version::parse_directive(line) {
        return Line::Version(version);
    }

    if let Some(captures) = VARIABLE_DECLARATION.captures(line) {
        if let (Some(keyword), Some(name), Some(raw)) =
            (captures.get(1), captures.get(3), captures.get(4))
        {
            if let Some(kind) = Kind::from_keyword(keyword.as_str()) {
                return Line::Variable(VariableDecl {
                    tag: TypeTag {
                        kind,
                        nullable: captures.get(2).is_some(),
                    },
                    name: name.as_str(),
                    raw: raw.as_str(),
                });
            }
        }
    }

    if let Some(captures) = TABLE_DECLARATION.captures(line) {
        if let Some(name) = captures.get(2) {
            return Line::Table(TableDecl {
                name: name.as_str(),
                has_header: captures.get(1).is_some(),
            });
        }
    }

    if DECLARATION_KEYWORD.is_match(line) {
        return Line::Malformed(line.trim());
    }

    Line::Ignorable
}

/// Returns the leading word of a line that has the shape of a variable
/// declaration but is not one, such as a misspelled type keyword.
///
/// Only meaningful for lines [`classify`] reports as [`Line::Ignorable`].
///
/// ```rust
/// use serde_fable::line::unrecognized_keyword;
///
/// assert_eq!(unrecognized_keyword("integr count 5"), Some("integr"));
/// assert_eq!(unrecognized_keyword("# integer count 5"), None);
/// ```
#[must_use]
pub fn unrecognized_keyword(line: &str) -> Option<&str> {
    DECLARATION_SHAPE
        .captures(line)
        .and_then(|captures| captures.get(1))
        .map(|keyword| keyword.as_str())
}

/// Returns `true` for lines that are empty once trimmed.
#[inline]
#[must_use]
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}
