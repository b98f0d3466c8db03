//! Diagnostic builder for fluent diagnostic construction.
//!
//! This module provides the [`DiagnosticBuilder`] type for constructing
//! diagnostics with a fluent API, and [`SourceSnippet`] for showing the
//! offending source line under a diagnostic.

use super::{Diagnostic, DiagnosticCode, Level, Reporter};
use crate::Span;

/// A source line with a highlighted column range.
///
/// # Examples
///
/// ```
/// use loxc_util::diagnostic::SourceSnippet;
///
/// let snippet = SourceSnippet::new("var a = @;", 1, 9, 10).with_label("here");
/// assert_eq!(
///     snippet.format(),
///     "  1 | var a = @;\n    |         ^ here"
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceSnippet {
    /// The source line content
    pub line: String,
    /// Line number (1-based)
    pub line_number: usize,
    /// Column where the issue starts (1-based)
    pub start_column: usize,
    /// Column where the issue ends (1-based, exclusive)
    pub end_column: usize,
    /// Optional label to display under the highlighted range
    pub label: Option<String>,
}

impl SourceSnippet {
    /// Create a new source snippet
    pub fn new(
        line: impl Into<String>,
        line_number: usize,
        start_column: usize,
        end_column: usize,
    ) -> Self {
        Self {
            line: line.into(),
            line_number,
            start_column,
            end_column,
            label: None,
        }
    }

    /// Set the label for this snippet
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Format the snippet for display
    ///
    /// Returns the source line prefixed by its number, and a caret line
    /// underlining the highlighted range. Tabs and carriage returns before
    /// the range are repeated in the caret line so the caret stays under
    /// its column however the terminal expands them.
    pub fn format(&self) -> String {
        let line_num_width = self.line_number.to_string().len().max(3);
        let mut result = String::new();

        result.push_str(&format!(
            "{:>width$} | {}\n",
            self.line_number,
            self.line,
            width = line_num_width
        ));

        result.push_str(&format!("{:>width$} | ", "", width = line_num_width));

        let underline_start = self.start_column.saturating_sub(1);
        let underline_len = self.end_column.saturating_sub(self.start_column).max(1);

        let mut padding = 0;
        for c in self.line.chars().take(underline_start) {
            result.push(match c {
                '\t' | '\r' => c,
                _ => ' ',
            });
            padding += 1;
        }
        result.push_str(&" ".repeat(underline_start - padding));
        result.push_str(&"^".repeat(underline_len));

        if let Some(ref label) = self.label {
            result.push_str(&format!(" {}", label));
        }

        result
    }
}

/// Builder for constructing diagnostics with a fluent API
///
/// # Examples
///
/// ```
/// use loxc_util::{DiagnosticBuilder, DiagnosticCode, Handler, Span};
///
/// let mut handler = Handler::new();
/// DiagnosticBuilder::error("Unterminated string.")
///     .code(DiagnosticCode::E_LEXER_UNTERMINATED_STRING)
///     .span(Span::new(0, 6, 1, 1))
///     .help("add a closing `\"`")
///     .emit(&mut handler);
///
/// assert_eq!(handler.error_count(), 1);
/// ```
pub struct DiagnosticBuilder {
    level: Level,
    message: String,
    span: Span,
    code: Option<DiagnosticCode>,
    notes: Vec<String>,
    helps: Vec<String>,
}

impl DiagnosticBuilder {
    /// Create a new diagnostic builder
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            span: Span::DUMMY,
            code: None,
            notes: Vec::new(),
            helps: Vec::new(),
        }
    }

    /// Create an error builder
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Level::Error, message)
    }

    /// Set the diagnostic code
    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Set the source span
    pub fn span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Add a note to the diagnostic
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Add a help suggestion to the diagnostic
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }

    /// Finish building and return the diagnostic
    pub fn build(self) -> Diagnostic {
        Diagnostic {
            level: self.level,
            message: self.message,
            span: self.span,
            code: self.code,
            notes: self.notes,
            helps: self.helps,
        }
    }

    /// Build the diagnostic and hand it to a reporter
    pub fn emit<R: Reporter + ?Sized>(self, reporter: &mut R) {
        reporter.report(self.build());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Handler;

    #[test]
    fn test_builder_defaults() {
        let diag = DiagnosticBuilder::error("boom").build();
        assert_eq!(diag.level, Level::Error);
        assert_eq!(diag.message, "boom");
        assert_eq!(diag.span, Span::DUMMY);
        assert!(diag.code.is_none());
        assert!(diag.notes.is_empty());
        assert!(diag.helps.is_empty());
    }

    #[test]
    fn test_builder_all_fields() {
        let span = Span::new(3, 4, 1, 4);
        let diag = DiagnosticBuilder::error("odd")
            .code(DiagnosticCode::E_LEXER_INVALID_NUMBER)
            .span(span)
            .note("first note")
            .help("first help")
            .help("second help")
            .build();

        assert_eq!(diag.level, Level::Error);
        assert_eq!(diag.span, span);
        assert_eq!(diag.code, Some(DiagnosticCode::E_LEXER_INVALID_NUMBER));
        assert_eq!(diag.notes, vec!["first note"]);
        assert_eq!(diag.helps, vec!["first help", "second help"]);
    }

    #[test]
    fn test_builder_emit() {
        let mut handler = Handler::new();
        DiagnosticBuilder::error("one").emit(&mut handler);
        DiagnosticBuilder::error("two").emit(&mut handler);
        assert_eq!(handler.error_count(), 2);
        assert_eq!(handler.diagnostics()[1].message, "two");
    }

    #[test]
    fn test_snippet_format_multi_column() {
        let snippet = SourceSnippet::new("print \"oops", 12, 7, 12);
        assert_eq!(snippet.format(), " 12 | print \"oops\n    |       ^^^^^");
    }

    #[test]
    fn test_snippet_caret_follows_tabs() {
        let snippet = SourceSnippet::new("\t@", 1, 2, 3);
        assert_eq!(snippet.format(), "  1 | \t@\n    | \t^");
    }

    #[test]
    fn test_snippet_caret_follows_mixed_indent() {
        let snippet = SourceSnippet::new(" \t x = @;", 7, 8, 9);
        assert_eq!(snippet.format(), "  7 |  \t x = @;\n    |  \t     ^");
    }

    #[test]
    fn test_snippet_caret_after_carriage_return() {
        let snippet = SourceSnippet::new("\r#", 2, 2, 3);
        assert!(snippet.format().ends_with("| \r^"));
    }

    #[test]
    fn test_snippet_zero_width_still_has_caret() {
        let snippet = SourceSnippet::new("abc", 1, 4, 4);
        assert!(snippet.format().ends_with("   ^"));
    }
}
