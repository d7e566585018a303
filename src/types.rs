//! Declared type tags.
//!
//! Every variable declaration and every table column names one of four
//! scalar kinds, optionally suffixed with `?` to allow `null`:
//!
//! | Tag        | Nullable    | Rust value                      |
//! |------------|-------------|---------------------------------|
//! | `integer`  | `integer?`  | [`Value::Integer`](crate::Value) |
//! | `float`    | `float?`    | [`Value::Float`](crate::Value)   |
//! | `string`   | `string?`   | [`Value::String`](crate::Value)  |
//! | `boolean`  | `boolean?`  | [`Value::Boolean`](crate::Value) |
//!
//! ```rust
//! use serde_fable::{Kind, TypeTag};
//!
//! let tag: TypeTag = "float?".parse().unwrap();
//! assert_eq!(tag, TypeTag::nullable(Kind::Float));
//! assert_eq!(tag.to_string(), "float?");
//! ```

use crate::Error;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// The closed set of scalar kinds a declaration can name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Integer,
    Float,
    String,
    Boolean,
}

impl Kind {
    /// Returns the keyword used for this kind in documents.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Kind::Integer => "integer",
            Kind::Float => "float",
            Kind::String => "string",
            Kind::Boolean => "boolean",
        }
    }

    /// Looks up a kind by its keyword. Matching is case-sensitive.
    #[must_use]
    pub fn from_keyword(keyword: &str) -> Option<Kind> {
        match keyword {
            "integer" => Some(Kind::Integer),
            "float" => Some(Kind::Float),
            "string" => Some(Kind::String),
            "boolean" => Some(Kind::Boolean),
            _ => None,
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A declared type: a [`Kind`] plus whether `null` is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeTag {
    pub kind: Kind,
    pub nullable: bool,
}

impl TypeTag {
    #[must_use]
    pub const fn new(kind: Kind) -> Self {
        TypeTag {
            kind,
            nullable: false,
        }
    }

    #[must_use]
    pub const fn nullable(kind: Kind) -> Self {
        TypeTag {
            kind,
            nullable: true,
        }
    }
}

impl FromStr for TypeTag {
    type Err = Error;

    /// Parses `integer`, `float?`, ... The input must already be trimmed.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (keyword, nullable) = match s.strip_suffix('?') {
            Some(keyword) => (keyword, true),
            None => (s, false),
        };
        Kind::from_keyword(keyword)
            .map(|kind| TypeTag { kind, nullable })
            .ok_or_else(|| Error::unknown_type(vec![s.to_string()]))
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.nullable {
            write!(f, "{}?", self.kind)
        } else {
            write!(f, "{}", self.kind)
        }
    }
}

impl Serialize for TypeTag {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn test_parse_all_tags() {
        for kind in [Kind::Integer, Kind::Float, Kind::String, Kind::Boolean] {
            assert_eq!(kind.as_str().parse::<TypeTag>().unwrap(), TypeTag::new(kind));
            let nullable = format!("{}?", kind);
            assert_eq!(
                nullable.parse::<TypeTag>().unwrap(),
                TypeTag::nullable(kind)
            );
        }
    }

    #[test]
    fn test_unknown_tag() {
        let err = "int".parse::<TypeTag>().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownType);
        assert!(err.to_string().contains("int"));

        assert!("Integer".parse::<TypeTag>().is_err());
        assert!("integer??".parse::<TypeTag>().is_err());
        assert!("".parse::<TypeTag>().is_err());
    }

    #[test]
    fn test_display_roundtrip() {
        let tag = TypeTag::nullable(Kind::Boolean);
        assert_eq!(tag.to_string(), "boolean?");
        assert_eq!(TypeTag::new(Kind::Integer).to_string(), "integer");
    }
}
