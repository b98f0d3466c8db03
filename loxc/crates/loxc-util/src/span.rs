//! Source locations.
//!
//! A [`Span`] records where a lexeme or diagnostic lives in the source text,
//! both as a byte range (for slicing) and as a 1-based line/column pair (for
//! humans).

use crate::error::{SourceError, SourceResult};

/// A region of source code.
///
/// # Examples
///
/// ```
/// use loxc_util::Span;
///
/// let span = Span::new(4, 9, 2, 1);
/// assert_eq!(span.len(), 5);
/// assert!(!span.is_empty());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start byte offset in source
    pub start: usize,
    /// End byte offset in source (exclusive)
    pub end: usize,
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based, in characters)
    pub column: u32,
}

impl Span {
    /// Dummy span for diagnostics that have no location.
    pub const DUMMY: Span = Span {
        start: 0,
        end: 0,
        line: 0,
        column: 0,
    };

    /// Create a new span.
    #[inline]
    pub fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Returns true if this span is empty (start == end)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the length of the span in bytes
    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span carries a real location.
    #[inline]
    pub fn is_dummy(&self) -> bool {
        self.line == 0
    }
}

/// Returns the text of a 1-based line, without its line terminator.
///
/// ```
/// use loxc_util::span::line_text;
///
/// assert_eq!(line_text("var a;\nprint a;\n", 2).unwrap(), "print a;");
/// assert!(line_text("one line", 3).is_err());
/// ```
pub fn line_text(source: &str, line: u32) -> SourceResult<&str> {
    let max_lines = source.lines().count();
    if line == 0 {
        return Err(SourceError::InvalidLineNumber {
            line: 0,
            max_lines,
        });
    }

    source
        .lines()
        .nth(line as usize - 1)
        .map(|text| text.strip_suffix('\r').unwrap_or(text))
        .ok_or(SourceError::InvalidLineNumber {
            line: line as usize,
            max_lines,
        })
}
