//! Deserializing loaded documents into Rust types.
//!
//! This module provides the [`Deserializer`] that walks an already loaded
//! [`Document`] and feeds it to any type implementing `Deserialize`.
//!
//! ## Mapping
//!
//! - the document is a map from declaration names to entries
//! - `integer`, `float`, `string`, `boolean` map to the matching primitives;
//!   `null` maps to `None` / unit
//! - a table declared with `table+` is a sequence of maps keyed by its header
//!   labels; a table without a header is a sequence of sequences
//!
//! ## Usage
//!
//! Most users should use the high-level functions in the crate root:
//!
//! ```rust
//! use serde::Deserialize;
//! use serde_fable::from_str;
//!
//! #[derive(Deserialize, Debug, PartialEq)]
//! struct User { id: i64, name: Option<String> }
//!
//! #[derive(Deserialize, Debug, PartialEq)]
//! struct Config { retries: u8, users: Vec<User> }
//!
//! let input = "integer retries 3\n\ntable+ users\ninteger,string?\n\"id\",\"name\"\n1,\"ann\"\n2,null\n";
//! let config: Config = from_str(input).unwrap();
//! assert_eq!(config.retries, 3);
//! assert_eq!(config.users[1], User { id: 2, name: None });
//! ```

use crate::document::Entry;
use crate::{Document, Error, Result, Table, Value};
use serde::de::IntoDeserializer;
use serde::{de, forward_to_deserialize_any};

/// Deserializer over a loaded [`Document`].
pub struct Deserializer {
    document: Document,
}

impl Deserializer {
    pub fn new(document: Document) -> Self {
        Deserializer { document }
    }
}

impl<'de> de::Deserializer<'de> for Deserializer {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_map(MapDeserializer::new(
            self.document.into_iter().map(|(name, entry)| (name, EntryDeserializer(entry))),
        ))
    }

    forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf option unit unit_struct newtype_struct seq tuple
        tuple_struct map struct enum identifier ignored_any
    }
}

/// Anything the map and sequence accessors below can hand to a seed.
trait IntoValueDeserializer {
    type Deserializer: for<'de> de::Deserializer<'de, Error = Error>;

    fn into_value_deserializer(self) -> Self::Deserializer;
}

struct EntryDeserializer(Entry);

impl IntoValueDeserializer for EntryDeserializer {
    type Deserializer = Self;

    fn into_value_deserializer(self) -> Self {
        self
    }
}

impl<'de> de::Deserializer<'de> for EntryDeserializer {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.0 {
            Entry::Value(value) => {
                de::Deserializer::deserialize_any(ValueDeserializer(value), visitor)
            }
            Entry::Table(table) => visit_table(table, visitor),
        }
    }

    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.0 {
            Entry::Value(value) => {
                de::Deserializer::deserialize_option(ValueDeserializer(value), visitor)
            }
            entry => visitor.visit_some(EntryDeserializer(entry)),
        }
    }

    forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf unit unit_struct newtype_struct seq tuple
        tuple_struct map struct enum identifier ignored_any
    }
}

fn visit_table<'de, V>(table: Table, visitor: V) -> Result<V::Value>
where
    V: de::Visitor<'de>,
{
    let (header, rows) = table.into_parts();
    let rows = rows.into_iter().map(|cells| RowDeserializer {
        header: header.clone(),
        cells,
    });
    visitor.visit_seq(SeqDeserializer::new(rows))
}

struct RowDeserializer {
    header: Option<Vec<String>>,
    cells: Vec<Value>,
}

impl IntoValueDeserializer for RowDeserializer {
    type Deserializer = Self;

    fn into_value_deserializer(self) -> Self {
        self
    }
}

impl<'de> de::Deserializer<'de> for RowDeserializer {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        let cells = self.cells.into_iter().map(ValueDeserializer);
        match self.header {
            Some(header) => visitor.visit_map(MapDeserializer::new(header.into_iter().zip(cells))),
            None => visitor.visit_seq(SeqDeserializer::new(cells)),
        }
    }

    forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf option unit unit_struct newtype_struct seq tuple
        tuple_struct map struct enum identifier ignored_any
    }
}

struct ValueDeserializer(Value);

impl IntoValueDeserializer for ValueDeserializer {
    type Deserializer = Self;

    fn into_value_deserializer(self) -> Self {
        self
    }
}

impl<'de> de::Deserializer<'de> for ValueDeserializer {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.0 {
            Value::Null => visitor.visit_unit(),
            Value::Integer(i) => visitor.visit_i64(i),
            Value::Float(f) => visitor.visit_f64(f),
            Value::String(s) => visitor.visit_string(s),
            Value::Boolean(b) => visitor.visit_bool(b),
        }
    }

    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.0 {
            Value::Null => visitor.visit_none(),
            value => visitor.visit_some(ValueDeserializer(value)),
        }
    }

    fn deserialize_enum<V>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.0 {
            Value::String(variant) => {
                let variant: de::value::StringDeserializer<Error> = variant.into_deserializer();
                visitor.visit_enum(variant)
            }
            other => Err(Error::custom(format!(
                "expected string for unit variant, found {}",
                other
            ))),
        }
    }

    forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf unit unit_struct newtype_struct seq tuple
        tuple_struct map struct identifier ignored_any
    }
}

struct SeqDeserializer<I> {
    iter: I,
}

impl<I> SeqDeserializer<I> {
    fn new(iter: I) -> Self {
        SeqDeserializer { iter }
    }
}

impl<'de, I, T> de::SeqAccess<'de> for SeqDeserializer<I>
where
    I: ExactSizeIterator<Item = T>,
    T: IntoValueDeserializer,
{
    type Error = Error;

    fn next_element_seed<S>(&mut self, seed: S) -> Result<Option<S::Value>>
    where
        S: de::DeserializeSeed<'de>,
    {
        match self.iter.next() {
            Some(element) => seed.deserialize(element.into_value_deserializer()).map(Some),
            None => Ok(None),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.iter.len())
    }
}

struct MapDeserializer<I, T> {
    iter: I,
    value: Option<T>,
}

impl<I, T> MapDeserializer<I, T>
where
    I: Iterator<Item = (String, T)>,
{
    fn new(iter: I) -> Self {
        MapDeserializer { iter, value: None }
    }
}

impl<'de, I, T> de::MapAccess<'de> for MapDeserializer<I, T>
where
    I: Iterator<Item = (String, T)>,
    T: IntoValueDeserializer,
{
    type Error = Error;

    fn next_key_seed<K>(&mut self, seed: K) -> Result<Option<K::Value>>
    where
        K: de::DeserializeSeed<'de>,
    {
        match self.iter.next() {
            Some((key, value)) => {
                self.value = Some(value);
                seed.deserialize(ValueDeserializer(Value::String(key)))
                    .map(Some)
            }
            None => Ok(None),
        }
    }

    fn next_value_seed<V>(&mut self, seed: V) -> Result<V::Value>
    where
        V: de::DeserializeSeed<'de>,
    {
        match self.value.take() {
            Some(value) => seed.deserialize(value.into_value_deserializer()),
            None => Err(Error::custom("next_value_seed called before next_key_seed")),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        match self.iter.size_hint() {
            (lower, Some(upper)) if lower == upper => Some(upper),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{from_str, ErrorKind};
    use serde::Deserialize;
    use std::collections::BTreeMap;

    #[derive(Deserialize, Debug, PartialEq)]
    struct Settings {
        name: String,
        ratio: f64,
        enabled: bool,
        limit: Option<i64>,
    }

    #[test]
    fn test_struct_from_variables() {
        let input = "string name \"demo\"\nfloat ratio 1_000.5\nboolean enabled true\ninteger? limit null\n";
        let settings: Settings = from_str(input).unwrap();
        assert_eq!(
            settings,
            Settings {
                name: "demo".to_string(),
                ratio: 1000.5,
                enabled: true,
                limit: None,
            }
        );
    }

    #[test]
    fn test_table_without_header_is_seq_of_seqs() {
        #[derive(Deserialize)]
        struct Grid {
            points: Vec<(i64, i64)>,
        }

        let grid: Grid = from_str("table points\ninteger,integer\n1,2\n3,4\n").unwrap();
        assert_eq!(grid.points, vec![(1, 2), (3, 4)]);
    }

    #[test]
    fn test_unit_enum_from_string() {
        #[derive(Deserialize, Debug, PartialEq)]
        #[serde(rename_all = "lowercase")]
        enum Mode {
            Fast,
            Safe,
        }

        #[derive(Deserialize)]
        struct Run {
            mode: Mode,
        }

        let run: Run = from_str("string mode \"safe\"").unwrap();
        assert_eq!(run.mode, Mode::Safe);
    }

    #[test]
    fn test_dynamic_map() {
        let map: BTreeMap<String, i64> = from_str("integer a 1\ninteger b 2\n").unwrap();
        assert_eq!(map.get("b"), Some(&2));
    }

    #[test]
    fn test_type_mismatch_is_custom_error() {
        let err = from_str::<Settings>("string name 5").unwrap_err();
        assert_eq!(err.errors()[0].kind(), ErrorKind::Parsing);

        let err = from_str::<Settings>("integer name 5").unwrap_err();
        assert_eq!(err.errors()[0].kind(), ErrorKind::Custom);
    }
}
