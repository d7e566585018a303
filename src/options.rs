//! Configuration options for loading.
//!
//! - [`LoadOptions`]: Main configuration struct
//! - [`ColumnPolicy`]: How a table's header row is checked against its type row
//!
//! ## Examples
//!
//! ```rust
//! use serde_fable::{load_with_options, ColumnPolicy, LoadOptions};
//!
//! let input = "table+ t\ninteger,string\n\"id\"\n1,\"a\"\n";
//!
//! // Strict (the default) rejects a header that names fewer columns than the type row
//! assert!(load_with_options(input.lines(), LoadOptions::new()).is_err());
//!
//! // Lenient keeps the header as written
//! let options = LoadOptions::new().with_column_policy(ColumnPolicy::Lenient);
//! let doc = load_with_options(input.lines(), options).unwrap();
//! assert_eq!(doc.table("t").unwrap().header(), Some(&["id".to_string()][..]));
//! ```

/// How the header row of a table is validated against its type row.
///
/// Body rows are always required to have exactly one cell per declared type;
/// this policy only governs the header.
///
/// - **Strict**: a header with a different number of labels fails the table
/// - **Lenient**: the header is stored as written
///
/// # Examples
///
/// ```rust
/// use serde_fable::ColumnPolicy;
///
/// assert_eq!(ColumnPolicy::default(), ColumnPolicy::Strict);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ColumnPolicy {
    #[default]
    Strict,
    Lenient,
}

/// Configuration options for loading a Fable document.
#[derive(Clone, Debug, Default)]
pub struct LoadOptions {
    pub column_policy: ColumnPolicy,
}

impl LoadOptions {
    /// Creates default options (strict column checking).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_fable::{ColumnPolicy, LoadOptions};
    ///
    /// let options = LoadOptions::new();
    /// assert_eq!(options.column_policy, ColumnPolicy::Strict);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Options that reject a header row whose label count differs from the
    /// type row.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_fable::{load_with_options, LoadOptions};
    ///
    /// let input = ["table+ t", "integer,integer", "\"a\",\"b\",\"c\"", "1,2"];
    /// let err = load_with_options(input, LoadOptions::strict()).unwrap_err();
    /// assert!(err.to_string().contains("3 label(s) but 2 column type(s)"));
    /// ```
    #[must_use]
    pub fn strict() -> Self {
        LoadOptions {
            column_policy: ColumnPolicy::Strict,
        }
    }

    #[must_use]
    pub fn lenient() -> Self {
        LoadOptions {
            column_policy: ColumnPolicy::Lenient,
        }
    }

    /// Sets how table headers are checked against type rows.
    #[must_use]
    pub fn with_column_policy(mut self, policy: ColumnPolicy) -> Self {
        self.column_policy = policy;
        self
    }
}
