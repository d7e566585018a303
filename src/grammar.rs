//! Fable Format Reference
//!
//! This module documents the Fable format as read by this library. It holds
//! no code.
//!
//! # Overview
//!
//! Fable is a line-oriented format for typed configuration values and small
//! typed tables. Every value carries its type in the source, so a document
//! loads into the same typed values regardless of the reader.
//!
//! A document is read top to bottom in a single pass. Lines are classified one
//! at a time; only tables span several lines.
//!
//! # Version Directive
//!
//! ```text
//! %% 0.2.0
//! ```
//!
//! **Rules**:
//! - Optional. When present it must be the first line of the document
//! - `%%`, whitespace, then three dot-separated non-negative integers
//! - A well-formed directive on any later line is a parsing error
//! - A `%%` line that is not a well-formed directive is ignored
//!
//! # Variable Declarations
//!
//! ```text
//! <type>[?] <name> <value> [anything]
//! ```
//!
//! ```text
//! integer   retries   3          # trailing text is ignored
//! float?    ratio     null
//! string    motto     "  keep  my  spaces  "
//! boolean   verbose   true
//! ```
//!
//! **Rules**:
//! - Leading whitespace is allowed; tokens are separated by any run of whitespace
//! - Names are made of ASCII letters, digits and `_`
//! - Text after the value literal is ignored, which is how comments work
//! - A line that starts with a type keyword but lacks a name or a value is a
//!   parsing error
//! - Redeclaring a name replaces its value (last write wins) while keeping
//!   its original position
//!
//! ## Types
//!
//! | Type | Literal | Examples |
//! |------|---------|----------|
//! | `integer` | Optional sign, decimal digits | `42`, `-7`, `10.987` (reads as `10`) |
//! | `float` | Decimal with optional fraction and exponent, `_` digit groups | `3.25`, `1e3`, `281_979.441_512` |
//! | `string` | Double-quoted, no escapes | `"hello world"` |
//! | `boolean` | `true` or `false` | `true` |
//!
//! ### Integers
//!
//! Only the leading digits are read. A fractional part is truncated, never
//! rounded: `10.987` is `10`. Only ASCII digits `0-9` are read, here and in
//! floats. Values outside the signed 64-bit range are parsing errors. Quoted
//! numbers such as `"1995"` are parsing errors.
//!
//! ### Floats
//!
//! Underscores between digits are cosmetic and removed before conversion.
//! NaN and infinity are recognised by substring, case-insensitively, in the
//! first whitespace-separated token, before any numeric reading:
//!
//! | Token contains | Value |
//! |----------------|-------|
//! | `nan` | NaN (`NaNQ`, `sNaN`, `1.#SNAN`, ...) |
//! | `inf` | infinity, negative when the token starts with `-` |
//!
//! ### Strings
//!
//! The value is everything between the opening quote and the next quote,
//! byte for byte. Whitespace inside the quotes is preserved. There is no escape
//! syntax, so a string cannot contain `"`.
//!
//! ## Nullable Types
//!
//! A `?` suffix on the type allows the literal `null`:
//!
//! ```text
//! integer? limit null      # ok
//! integer  limit null      # error: use integer?
//! ```
//!
//! `null` is checked before the type's own literal, for every type.
//!
//! # Tables
//!
//! ```text
//! table+ users
//! integer,string?,boolean
//! "id","name","admin"
//! 1,"ann",true
//! 2,null,false
//!
//! ```
//!
//! **Rules**:
//! - `table <name>` declares a table without a header row; `table+ <name>`
//!   declares one with a header row
//! - The next line is the type row: comma-separated type tags, one per column
//! - With `+`, the line after the type row is the header row: comma-separated
//!   labels, optionally quoted
//! - Body rows follow, one row per line, cells separated by commas outside
//!   double quotes
//! - A blank line or the end of input closes the table
//! - Every body row must have exactly one cell per column type, and every
//!   cell is read with its column's type
//!
//! ## Table Errors
//!
//! | Problem | Category | Load continues? |
//! |---------|----------|-----------------|
//! | Unknown tag in the type row | unknown type | yes, after the block |
//! | Empty type row | parsing | yes |
//! | Header and type row lengths differ (strict) | parsing | yes, after the block |
//! | Blank header row (strict) | parsing | yes, after the block |
//! | Bad cell or wrong cell count | parsing | yes, after the block |
//! | Input ends before the type row or header row | unexpected end of input | no |
//!
//! A table with any error is not added to the document.
//!
//! # Everything Else
//!
//! Lines that match none of the shapes above are ignored: blank lines,
//! `#` comment lines, and words that are not declaration keywords (`int x 5`).
//!
//! # Error Reporting
//!
//! Errors are collected during the pass and returned together, each tagged
//! with its 1-based line number. A load that reports any error returns no
//! document. Only an unexpected end of input inside a table stops the pass
//! early.
