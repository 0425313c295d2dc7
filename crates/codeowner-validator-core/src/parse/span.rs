//! Source location tracking for declaration lines.
//!
//! A `Span` records where a token sits in the ownership file so that
//! diagnostics can cite the exact line (and column) of a declaration.

use serde::Serialize;

/// Represents a location span in the source file.
///
/// Line and column are 1-based for human-readable messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span {
    /// Byte offset from the start of the input (0-based).
    pub offset: usize,
    /// Line number (1-based).
    pub line: usize,
    /// Column number (1-based).
    pub column: usize,
    /// Length of the span in bytes.
    pub length: usize,
}

impl Span {
    /// Creates a new span with the given position and length.
    pub fn new(offset: usize, line: usize, column: usize, length: usize) -> Self {
        Self {
            offset,
            line,
            column,
            length,
        }
    }
}

impl Default for Span {
    fn default() -> Self {
        Self::new(0, 1, 1, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_new_and_accessors() {
        let span = Span::new(10, 2, 5, 15);
        assert_eq!(span.offset, 10);
        assert_eq!(span.line, 2);
        assert_eq!(span.column, 5);
        assert_eq!(span.length, 15);
    }

    #[test]
    fn default_span_starts_at_first_line() {
        let span = Span::default();
        assert_eq!(span.line, 1);
        assert_eq!(span.column, 1);
    }
}
