//! The loaded document.
//!
//! This module provides [`Document`], an ordered mapping from declaration
//! names to [`Entry`] values, built on [`IndexMap`].
//!
//! ## Why IndexMap?
//!
//! - **Deterministic output**: entries iterate and serialize in source order
//! - **Last write wins**: a redeclared name replaces the earlier value but
//!   keeps its original position
//!
//! ## Examples
//!
//! ```rust
//! use serde_fable::{load_str, Value};
//!
//! let doc = load_str("integer a 1\nstring b \"x\"\ninteger a 2\n").unwrap();
//!
//! let keys: Vec<_> = doc.keys().cloned().collect();
//! assert_eq!(keys, vec!["a", "b"]);
//! assert_eq!(doc.value("a"), Some(&Value::Integer(2)));
//! ```

use crate::{Table, Value, Version};
use indexmap::IndexMap;
use serde::{Serialize, Serializer};

/// What a declaration name is bound to.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Entry {
    Value(Value),
    Table(Table),
}

impl Entry {
    #[inline]
    #[must_use]
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Entry::Value(value) => Some(value),
            Entry::Table(_) => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_table(&self) -> Option<&Table> {
        match self {
            Entry::Table(table) => Some(table),
            Entry::Value(_) => None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_table(&self) -> bool {
        matches!(self, Entry::Table(_))
    }
}

impl From<Value> for Entry {
    fn from(value: Value) -> Self {
        Entry::Value(value)
    }
}

impl From<Table> for Entry {
    fn from(table: Table) -> Self {
        Entry::Table(table)
    }
}

/// A fully typed Fable document.
///
/// Serializes as a map of its entries; the version is exposed separately
/// through [`Document::version`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    version: Option<Version>,
    entries: IndexMap<String, Entry>,
}

impl Document {
    /// Creates an empty document with no version.
    #[must_use]
    pub fn new() -> Self {
        Document::default()
    }

    /// The version declared by the `%%` directive, if any.
    #[must_use]
    pub fn version(&self) -> Option<Version> {
        self.version
    }

    pub(crate) fn set_version(&mut self, version: Version) {
        self.version = Some(version);
    }

    /// Binds `name` to `entry`, returning the entry it replaced.
    pub fn insert(&mut self, name: impl Into<String>, entry: impl Into<Entry>) -> Option<Entry> {
        self.entries.insert(name.into(), entry.into())
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Entry> {
        self.entries.get(name)
    }

    /// Returns the scalar bound to `name`, or `None` if it is missing or a table.
    #[must_use]
    pub fn value(&self, name: &str) -> Option<&Value> {
        self.get(name).and_then(Entry::as_value)
    }

    /// Returns the table bound to `name`, or `None` if it is missing or a scalar.
    #[must_use]
    pub fn table(&self, name: &str) -> Option<&Table> {
        self.get(name).and_then(Entry::as_table)
    }

    #[must_use]
    pub fn contains_key(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns an iterator over the names, in source order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, Entry> {
        self.entries.keys()
    }

    /// Returns an iterator over the entries, in source order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Entry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = (&'a String, &'a Entry);
    type IntoIter = indexmap::map::Iter<'a, String, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl IntoIterator for Document {
    type Item = (String, Entry);
    type IntoIter = indexmap::map::IntoIter<String, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl Serialize for Document {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.entries.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Kind, TypeTag};

    #[test]
    fn test_insert_overwrites_in_place() {
        let mut doc = Document::new();
        assert!(doc.insert("a", Value::Integer(1)).is_none());
        doc.insert("b", Value::Boolean(true));
        let old = doc.insert("a", Value::Integer(2));

        assert_eq!(old, Some(Entry::Value(Value::Integer(1))));
        assert_eq!(doc.len(), 2);
        assert_eq!(doc.keys().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(doc.value("a"), Some(&Value::Integer(2)));
    }

    #[test]
    fn test_value_and_table_lookups() {
        let mut doc = Document::new();
        doc.insert("n", Value::Integer(1));
        doc.insert(
            "t",
            Table::new("t", vec![TypeTag::new(Kind::Integer)], None, vec![]),
        );

        assert!(doc.value("t").is_none());
        assert!(doc.table("n").is_none());
        assert!(doc.table("t").is_some());
        assert!(doc.get("t").unwrap().is_table());
        assert!(!doc.contains_key("missing"));
    }

    #[test]
    fn test_serialize_to_json() {
        let mut doc = Document::new();
        doc.set_version(Version::new(0, 2, 0));
        doc.insert("x", Value::Null);
        doc.insert(
            "t",
            Table::new(
                "t",
                vec![TypeTag::new(Kind::Integer), TypeTag::new(Kind::String)],
                Some(vec!["id".into(), "name".into()]),
                vec![vec![Value::Integer(1), Value::from("a")]],
            ),
        );

        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "x": null,
                "t": { "header": ["id", "name"], "rows": [[1, "a"]] }
            })
        );
    }
}
