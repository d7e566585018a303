//! Forward-only line cursor.
//!
//! The loader owns one [`LineCursor`] for the whole document and lends it by
//! `&mut` to the table reader while a table block is being consumed, so at
//! any moment exactly one component decides which line comes next.

/// A position index over a materialized list of lines.
#[derive(Debug, Clone)]
pub struct LineCursor<'a> {
    lines: &'a [&'a str],
    position: usize,
}

impl<'a> LineCursor<'a> {
    pub fn new(lines: &'a [&'a str]) -> Self {
        LineCursor { lines, position: 0 }
    }

    /// Returns the next line and its 1-based line number, advancing the cursor.
    pub fn next_line(&mut self) -> Option<(usize, &'a str)> {
        let line = *self.lines.get(self.position)?;
        self.position += 1;
        Some((self.position, line))
    }

    /// Returns the next line without consuming it.
    #[must_use]
    pub fn peek(&self) -> Option<&'a str> {
        self.lines.get(self.position).copied()
    }

    /// The 1-based number of the last line handed out, or 0 before the first.
    #[must_use]
    pub fn line_number(&self) -> usize {
        self.position
    }

    /// Returns `true` once every line has been handed out.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_fable::cursor::LineCursor;
    ///
    /// let lines = ["integer a 1"];
    /// let mut cursor = LineCursor::new(&lines);
    /// assert!(!cursor.is_exhausted());
    /// cursor.next_line();
    /// assert!(cursor.is_exhausted());
    /// ```
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.position >= self.lines.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_walks_forward() {
        let lines = ["a", "", "c"];
        let mut cursor = LineCursor::new(&lines);

        assert_eq!(cursor.line_number(), 0);
        assert_eq!(cursor.peek(), Some("a"));
        assert_eq!(cursor.next_line(), Some((1, "a")));
        assert_eq!(cursor.next_line(), Some((2, "")));
        assert!(!cursor.is_exhausted());
        assert_eq!(cursor.next_line(), Some((3, "c")));
        assert!(cursor.is_exhausted());
        assert_eq!(cursor.next_line(), None);
        assert_eq!(cursor.line_number(), 3);
    }

    #[test]
    fn test_empty_input() {
        let lines: [&str; 0] = [];
        let mut cursor = LineCursor::new(&lines);
        assert!(cursor.is_exhausted());
        assert_eq!(cursor.peek(), None);
        assert_eq!(cursor.next_line(), None);
    }
}
