//! Byte-range source positions.

use std::fmt;

/// A half-open byte range `[start, end)` into the source text, plus the
/// 1-indexed line and column where the range begins.
///
/// The byte offsets are what diagnostics hand to `ariadne` and what
/// lets token text be sliced back out of the source; the line/column
/// pair is for plain-text positions ([`Span`] renders as
/// `line:column`). Offsets always fall on UTF-8 character boundaries
/// because the lexer moves one `char` at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub line: usize,
    pub column: usize,
}

impl Span {
    /// Creates a span covering `start..end`, beginning at the given
    /// line and column.
    pub fn new(start: usize, end: usize, line: usize, column: usize) -> Self {
        Span {
            start,
            end,
            line,
            column,
        }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
