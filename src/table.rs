//! Typed tables.
//!
//! A table block spans several lines:
//!
//! ```text
//! table+ users          <- declaration, `+` announces a header row
//! integer,string?       <- type row, one tag per column
//! "id","name"           <- header row (only with `+`)
//! 1,"alice"             <- body rows ...
//! 2,null
//!                       <- blank line (or end of input) closes the table
//! ```
//!
//! [`read_table`] is handed the cursor right after the declaration and
//! consumes exactly the lines of the block.

use crate::coerce::coerce;
use crate::cursor::LineCursor;
use crate::line::{is_blank, TableDecl};
use crate::options::{ColumnPolicy, LoadOptions};
use crate::types::TypeTag;
use crate::{Error, Result, Value};
use serde::Serialize;

/// A fully typed table.
///
/// Every row holds exactly one cell per column type.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Table {
    #[serde(skip)]
    name: String,
    #[serde(skip)]
    types: Vec<TypeTag>,
    header: Option<Vec<String>>,
    rows: Vec<Vec<Value>>,
}

impl Table {
    pub fn new(
        name: impl Into<String>,
        types: Vec<TypeTag>,
        header: Option<Vec<String>>,
        rows: Vec<Vec<Value>>,
    ) -> Self {
        Table {
            name: name.into(),
            types,
            header,
            rows,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Column types, in declaration order.
    #[must_use]
    pub fn types(&self) -> &[TypeTag] {
        &self.types
    }

    /// Header labels, if the table was declared with `table+`.
    #[must_use]
    pub fn header(&self) -> Option<&[String]> {
        self.header.as_deref()
    }

    #[must_use]
    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the values of the column with the given header label.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_fable::{load_str, Value};
    ///
    /// let doc = load_str("table+ t\ninteger,string\n\"id\",\"name\"\n1,\"a\"\n2,\"b\"\n").unwrap();
    /// let ids: Vec<&Value> = doc.table("t").unwrap().column("id").unwrap().collect();
    /// assert_eq!(ids, [&Value::Integer(1), &Value::Integer(2)]);
    /// ```
    pub fn column(&self, label: &str) -> Option<impl Iterator<Item = &Value> + '_> {
        let index = self.header.as_ref()?.iter().position(|h| h == label)?;
        Some(self.rows.iter().filter_map(move |row| row.get(index)))
    }

    pub(crate) fn into_parts(self) -> (Option<Vec<String>>, Vec<Vec<Value>>) {
        (self.header, self.rows)
    }
}

/// Reads one table block whose declaration has just been consumed.
///
/// On a recoverable failure (unknown type, header mismatch, bad row) the rest
/// of the block is still consumed, so the caller resumes after it.
///
/// # Errors
///
/// - `UnknownType` if the type row names an unknown tag
/// - `Parsing` for a header/type count mismatch under
///   [`ColumnPolicy::Strict`], or a body row that does not coerce
/// - `UnexpectedEof` (fatal) if the input ends before the type row or the
///   header row
pub fn read_table(
    decl: TableDecl<'_>,
    cursor: &mut LineCursor<'_>,
    options: &LoadOptions,
) -> Result<Table> {
    let (type_line_no, type_line) = cursor
        .next_line()
        .ok_or_else(|| Error::unexpected_eof(&format!("type row for table `{}`", decl.name)))?;

    if is_blank(type_line) {
        return Err(Error::parsing(format!("table `{}` has an empty type row", decl.name))
            .at_line(type_line_no));
    }

    let types = match parse_type_row(type_line) {
        Ok(types) => types,
        Err(err) => {
            if decl.has_header {
                cursor.next_line();
            }
            skip_body(cursor);
            return Err(err.at_line(type_line_no));
        }
    };

    let header = if decl.has_header {
        let (line_no, line) = cursor.next_line().ok_or_else(|| {
            Error::unexpected_eof(&format!("header row for table `{}`", decl.name))
        })?;
        if options.column_policy == ColumnPolicy::Strict && is_blank(line) {
            skip_body(cursor);
            return Err(
                Error::parsing(format!("table `{}` has an empty header row", decl.name))
                    .at_line(line_no),
            );
        }
        let labels: Vec<String> = split_cells(line)
            .into_iter()
            .map(|label| unquote(label).to_string())
            .collect();

        if options.column_policy == ColumnPolicy::Strict && labels.len() != types.len() {
            skip_body(cursor);
            return Err(Error::parsing(format!(
                "table `{}` header has {} label(s) but {} column type(s)",
                decl.name,
                labels.len(),
                types.len()
            ))
            .at_line(line_no));
        }
        Some(labels)
    } else {
        None
    };

    let mut rows = Vec::new();
    let mut failure = None;
    while let Some((line_no, line)) = cursor.next_line() {
        if is_blank(line) {
            break;
        }
        if failure.is_some() {
            continue;
        }
        match parse_row(&types, line) {
            Ok(row) => rows.push(row),
            Err(err) => failure = Some(err.at_line(line_no)),
        }
    }

    if let Some(err) = failure {
        return Err(err);
    }

    tracing::debug!(
        table = decl.name,
        columns = types.len(),
        rows = rows.len(),
        "table loaded"
    );

    Ok(Table::new(decl.name, types, header, rows))
}

/// Parses a type row, reporting every unknown tag at once.
fn parse_type_row(line: &str) -> Result<Vec<TypeTag>> {
    let mut types = Vec::new();
    let mut unknown = Vec::new();

    for token in line.split(',').map(str::trim) {
        match token.parse::<TypeTag>() {
            Ok(tag) => types.push(tag),
            Err(_) => unknown.push(token.to_string()),
        }
    }

    if unknown.is_empty() {
        Ok(types)
    } else {
        Err(Error::unknown_type(unknown))
    }
}

fn parse_row(types: &[TypeTag], line: &str) -> Result<Vec<Value>> {
    let cells = split_cells(line);
    if cells.len() != types.len() {
        return Err(Error::parsing(format!(
            "row `{}` has {} cell(s) but the table declares {} column(s)",
            line.trim(),
            cells.len(),
            types.len()
        )));
    }

    types
        .iter()
        .zip(cells)
        .enumerate()
        .map(|(column, (tag, cell))| {
            coerce(*tag, cell).map_err(|err| {
                Error::parsing(format!(
                    "row `{}`, column {} ({}): {}",
                    line.trim(),
                    column + 1,
                    tag,
                    err.detail()
                ))
            })
        })
        .collect()
}

/// Consumes body rows up to and including the terminating blank line.
fn skip_body(cursor: &mut LineCursor<'_>) {
    while let Some((_, line)) = cursor.next_line() {
        if is_blank(line) {
            break;
        }
    }
}

/// Splits on commas that are not inside double quotes, trimming each cell.
fn split_cells(line: &str) -> Vec<&str> {
    let mut cells = Vec::new();
    let mut start = 0;
    let mut quoted = false;

    for (i, byte) in line.bytes().enumerate() {
        match byte {
            b'"' => quoted = !quoted,
            b',' if !quoted => {
                cells.push(line[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }
    cells.push(line[start..].trim());
    cells
}

fn unquote(label: &str) -> &str {
    label
        .strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
        .unwrap_or(label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Kind;
    use crate::ErrorKind;

    fn read(has_header: bool, lines: &[&str]) -> (Result<Table>, usize) {
        read_with(has_header, lines, &LoadOptions::new())
    }

    fn read_with(has_header: bool, lines: &[&str], options: &LoadOptions) -> (Result<Table>, usize) {
        let mut cursor = LineCursor::new(lines);
        let decl = TableDecl {
            name: "t",
            has_header,
        };
        let result = read_table(decl, &mut cursor, options);
        (result, cursor.line_number())
    }

    #[test]
    fn test_table_with_header() {
        let lines = ["integer,string", "\"id\",\"name\"", "1,\"a\"", "2,\"b\"", "", "rest"];
        let (result, consumed) = read(true, &lines);
        let table = result.unwrap();

        assert_eq!(table.name(), "t");
        assert_eq!(
            table.types(),
            &[TypeTag::new(Kind::Integer), TypeTag::new(Kind::String)]
        );
        assert_eq!(
            table.header(),
            Some(&["id".to_string(), "name".to_string()][..])
        );
        assert_eq!(
            table.rows(),
            &[
                vec![Value::Integer(1), Value::from("a")],
                vec![Value::Integer(2), Value::from("b")],
            ]
        );
        // the blank terminator is consumed, the next line is not
        assert_eq!(consumed, 5);
    }

    #[test]
    fn test_table_without_header_ends_at_eof() {
        let lines = ["float?,boolean", "1.5,true", "null , false"];
        let (result, consumed) = read(false, &lines);
        let table = result.unwrap();

        assert_eq!(table.header(), None);
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows()[1], vec![Value::Null, Value::Boolean(false)]);
        assert_eq!(consumed, 3);
    }

    #[test]
    fn test_empty_body() {
        let lines = ["integer", ""];
        let (result, _) = read(false, &lines);
        assert!(result.unwrap().is_empty());
    }

    #[test]
    fn test_unknown_types_are_all_reported() {
        let lines = ["integer,int,text", "\"a\",\"b\",\"c\"", "1,2,3", "", "after"];
        let (result, consumed) = read(true, &lines);
        let err = result.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::UnknownType);
        assert_eq!(err.line(), Some(1));
        assert!(err.to_string().contains(r#""int", "text""#));
        assert_eq!(consumed, 4);
    }

    #[test]
    fn test_bad_row_discards_table_and_skips_block() {
        let lines = ["integer,string", "1,\"a\"", "x,\"b\"", "3,\"c\"", "", "after"];
        let (result, consumed) = read(false, &lines);
        let err = result.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Parsing);
        assert_eq!(err.line(), Some(3));
        assert!(err.to_string().contains("x,\"b\""));
        assert_eq!(consumed, 5);
    }

    #[test]
    fn test_null_in_non_nullable_column_is_row_error() {
        let lines = ["integer", "null"];
        let (result, _) = read(false, &lines);
        let err = result.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parsing);
        assert!(err.to_string().contains("use integer?"));
    }

    #[test]
    fn test_cell_count_mismatch() {
        let lines = ["integer,integer", "1,2,3"];
        let (result, _) = read(false, &lines);
        let err = result.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parsing);
        assert!(err.to_string().contains("3 cell(s)"));
    }

    #[test]
    fn test_header_mismatch_policy() {
        let lines = ["integer,integer", "\"a\"", "1,2"];

        let (strict, _) = read(true, &lines);
        assert_eq!(strict.unwrap_err().kind(), ErrorKind::Parsing);

        let (lenient, _) = read_with(true, &lines, &LoadOptions::lenient());
        let table = lenient.unwrap();
        assert_eq!(table.header(), Some(&["a".to_string()][..]));
        assert_eq!(table.rows(), &[vec![Value::Integer(1), Value::Integer(2)]]);
    }

    #[test]
    fn test_empty_type_token_is_named() {
        let lines = ["integer,,string", "1,2,\"a\""];
        let (result, _) = read(false, &lines);
        let err = result.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownType);
        assert!(err.to_string().ends_with(r#"unknown type(s): """#));
    }

    #[test]
    fn test_blank_header_row() {
        let lines = ["integer", "", "1", "", "after"];

        let (strict, consumed) = read(true, &lines);
        let err = strict.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parsing);
        assert_eq!(err.line(), Some(2));
        assert!(err.to_string().contains("empty header row"));
        assert_eq!(consumed, 4);

        let (lenient, _) = read_with(true, &lines, &LoadOptions::lenient());
        assert_eq!(lenient.unwrap().header(), Some(&[String::new()][..]));
    }

    #[test]
    fn test_eof_before_metadata_is_fatal() {
        let (result, _) = read(false, &[]);
        let err = result.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnexpectedEof);
        assert!(err.is_fatal());

        let (result, _) = read(true, &["integer"]);
        assert!(result.unwrap_err().is_fatal());
    }

    #[test]
    fn test_split_cells_respects_quotes() {
        assert_eq!(split_cells("1, \"a, b\" ,x"), vec!["1", "\"a, b\"", "x"]);
        assert_eq!(split_cells(""), vec![""]);
        assert_eq!(split_cells("a,"), vec!["a", ""]);
    }

    #[test]
    fn test_unquote() {
        assert_eq!(unquote("\"id\""), "id");
        assert_eq!(unquote("id"), "id");
        assert_eq!(unquote("\"id"), "\"id");
    }
}
