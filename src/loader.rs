//! Document loading.
//!
//! The [`Loader`] makes one forward pass over the lines of a document:
//!
//! ```text
//! Start -> (optional version directive) -> { classify line -> dispatch }* -> End
//! ```
//!
//! Variable and table failures are recorded and the pass continues, so a
//! single load reports every problem in the document. Only running out of
//! input while a table still expects its type or header row aborts early.

use crate::coerce::coerce;
use crate::cursor::LineCursor;
use crate::line::{classify, unrecognized_keyword, Line, VariableDecl};
use crate::table::read_table;
use crate::{Document, Error, LoadError, LoadOptions, Result, Variable};

/// Drives one load over a cursor. Owns the in-progress document and the
/// error list until [`Loader::finish`].
pub struct Loader<'a> {
    cursor: LineCursor<'a>,
    options: &'a LoadOptions,
    document: Document,
    errors: Vec<Error>,
}

impl<'a> Loader<'a> {
    pub fn new(lines: &'a [&'a str], options: &'a LoadOptions) -> Self {
        Loader {
            cursor: LineCursor::new(lines),
            options,
            document: Document::new(),
            errors: Vec::new(),
        }
    }

    /// Runs the whole pass.
    ///
    /// # Errors
    ///
    /// Returns every collected error if at least one declaration failed, or
    /// the errors collected so far plus the fatal one if the load aborted.
    pub fn run(mut self) -> std::result::Result<Document, LoadError> {
        self.read_version();

        while let Some((line_no, line)) = self.cursor.next_line() {
            if let Err(err) = self.dispatch(line) {
                let err = err.at_line(line_no);
                tracing::warn!(line = line_no, error = %err, "declaration failed");
                let fatal = err.is_fatal();
                self.errors.push(err);
                if fatal {
                    return Err(LoadError::new(self.errors));
                }
            }
        }

        self.finish()
    }

    fn read_version(&mut self) {
        let Some(first) = self.cursor.peek() else {
            return;
        };
        if let Line::Version(version) = classify(first) {
            self.cursor.next_line();
            tracing::debug!(%version, "version directive");
            self.document.set_version(version);
        }
    }

    fn dispatch(&mut self, line: &'a str) -> Result<()> {
        let shape = classify(line);
        tracing::trace!(line = self.cursor.line_number(), ?shape, "classified");

        match shape {
            Line::Variable(decl) => {
                let variable = parse_variable(decl)?;
                self.document.insert(variable.name, variable.value);
            }
            Line::Table(decl) => {
                let table = read_table(decl, &mut self.cursor, self.options)?;
                self.document.insert(decl.name, table);
            }
            Line::Version(_) => {
                return Err(Error::parsing(
                    "version directive is only allowed on the first line",
                ));
            }
            Line::Malformed(text) => {
                return Err(Error::parsing(format!("malformed declaration: {}", text)));
            }
            Line::Ignorable => {
                if let Some(keyword) = unrecognized_keyword(line) {
                    tracing::debug!(
                        line = self.cursor.line_number(),
                        keyword,
                        "ignored line with an unknown declaration keyword"
                    );
                }
            }
        }
        Ok(())
    }

    fn finish(self) -> std::result::Result<Document, LoadError> {
        if self.errors.is_empty() {
            tracing::debug!(
                entries = self.document.len(),
                version = ?self.document.version(),
                "document loaded"
            );
            Ok(self.document)
        } else {
            Err(LoadError::new(self.errors))
        }
    }
}

/// Coerces the value of one variable declaration.
///
/// # Examples
///
/// ```rust
/// use serde_fable::line::{classify, Line};
/// use serde_fable::loader::parse_variable;
/// use serde_fable::Value;
///
/// let Line::Variable(decl) = classify("integer my_int 10.19814") else { unreachable!() };
/// let variable = parse_variable(decl).unwrap();
/// assert_eq!(variable.name, "my_int");
/// assert_eq!(variable.value, Value::Integer(10));
/// ```
pub fn parse_variable(decl: VariableDecl<'_>) -> Result<Variable> {
    coerce(decl.tag, decl.raw).map(|value| Variable::new(decl.name, value))
}
