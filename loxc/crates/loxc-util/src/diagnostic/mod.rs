//! Diagnostic module - Error reporting infrastructure.
//!
//! A phase never prints or aborts on bad input. It describes the problem as a
//! [`Diagnostic`] and hands it to a [`Reporter`]; what happens next
//! (collecting, printing, deciding the exit code) is the caller's business.
//! [`Handler`] is the reporter most callers want: it collects everything and
//! answers "did anything go wrong?".
//!
//! # Examples
//!
//! ```
//! use loxc_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Handler};
//! use loxc_util::Span;
//!
//! let mut handler = Handler::new();
//! DiagnosticBuilder::error("Unexpected character: '@'.")
//!     .code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR)
//!     .span(Span::new(0, 1, 1, 1))
//!     .emit(&mut handler);
//!
//! let diag = &handler.diagnostics()[0];
//! assert_eq!(diag.header(), "[line 1] Error[E0001]: Unexpected character: '@'.");
//! ```

mod builder;
mod codes;
mod level;

pub use builder::{DiagnosticBuilder, SourceSnippet};
pub use codes::DiagnosticCode;
pub use level::Level;

use crate::error::{SourceError, SourceResult};
use crate::span::{line_text, Span};

/// A diagnostic message with severity and location
#[derive(Clone, Debug, PartialEq)]
pub struct Diagnostic {
    /// Diagnostic severity level
    pub level: Level,
    /// Main diagnostic message
    pub message: String,
    /// Source location
    pub span: Span,
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
    /// Additional notes for context
    pub notes: Vec<String>,
    /// Help suggestions for fixing the issue
    pub helps: Vec<String>,
}

impl Diagnostic {
    /// Create a new diagnostic
    pub fn new(level: Level, message: impl Into<String>, span: Span) -> Self {
        Self {
            level,
            message: message.into(),
            span,
            code: None,
            notes: Vec::new(),
            helps: Vec::new(),
        }
    }

    /// Create an error diagnostic
    pub fn error(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Error, message, span)
    }

    /// The 1-based line this diagnostic points at.
    #[inline]
    pub fn line(&self) -> u32 {
        self.span.line
    }

    /// One-line summary: `[line N] Error[E0001]: message`.
    pub fn header(&self) -> String {
        let code = self
            .code
            .map(|code| format!("[{}]", code))
            .unwrap_or_default();
        format!(
            "[line {}] {}{}: {}",
            self.span.line,
            self.level.title(),
            code,
            self.message
        )
    }

    /// Extracts the source line this diagnostic points at, with the span
    /// underlined. Spans that run past the end of their first line are
    /// underlined to the end of that line.
    pub fn snippet(&self, source: &str) -> SourceResult<SourceSnippet> {
        let text = line_text(source, self.span.line)?;
        let covered = source
            .get(self.span.start..self.span.end)
            .ok_or(SourceError::SpanOutOfBounds {
                source_len: source.len(),
                span_start: self.span.start,
                span_end: self.span.end,
            })?;

        let start_column = self.span.column.max(1) as usize;
        let width = covered
            .split('\n')
            .next()
            .map(|first| first.trim_end_matches('\r').chars().count())
            .unwrap_or(0);

        Ok(SourceSnippet::new(
            text,
            self.span.line as usize,
            start_column,
            start_column + width,
        ))
    }

    /// Full human-readable rendering: header, source snippet (when the span
    /// can be located in `source`), then notes and helps.
    pub fn render(&self, source: &str, color: bool) -> String {
        let header = self.header();
        let mut out = if color {
            format!("\x1b[1;{}m{}\x1b[0m", self.level.color_code(), header)
        } else {
            header
        };

        if !self.span.is_dummy() {
            if let Ok(snippet) = self.snippet(source) {
                out.push('\n');
                out.push_str(&snippet.format());
            }
        }
        for note in &self.notes {
            out.push_str(&format!("\n    = note: {}", note));
        }
        for help in &self.helps {
            out.push_str(&format!("\n    = help: {}", help));
        }
        out
    }
}

/// Receives diagnostics from a phase.
///
/// The phase reports and keeps going; the reporter decides what a diagnostic
/// means for the rest of the run.
pub trait Reporter {
    /// Accept one diagnostic.
    fn report(&mut self, diagnostic: Diagnostic);
}

impl<R: Reporter + ?Sized> Reporter for &mut R {
    fn report(&mut self, diagnostic: Diagnostic) {
        (**self).report(diagnostic);
    }
}

/// Handler for collecting and reporting diagnostics
///
/// # Examples
///
/// ```
/// use loxc_util::{Diagnostic, Handler, Reporter, Span};
///
/// let mut handler = Handler::new();
/// handler.report(Diagnostic::error("unexpected token", Span::DUMMY));
///
/// if handler.has_errors() {
///     eprintln!("Scan failed with {} errors", handler.error_count());
/// }
/// ```
#[derive(Debug, Default)]
pub struct Handler {
    diagnostics: Vec<Diagnostic>,
}

impl Handler {
    /// Create a new handler
    pub fn new() -> Self {
        Self {
            diagnostics: Vec::new(),
        }
    }

    /// Check if any errors have been reported
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.level.is_error())
    }

    /// Get the number of errors
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.level.is_error())
            .count()
    }

    /// All diagnostics reported so far, in report order
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Remove and return every collected diagnostic
    pub fn take(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }

    /// Clear all diagnostics
    pub fn clear(&mut self) {
        self.diagnostics.clear();
    }
}

impl Reporter for Handler {
    fn report(&mut self, diagnostic: Diagnostic) {
        tracing::debug!(
            line = diagnostic.line(),
            level = %diagnostic.level,
            code = ?diagnostic.code,
            "{}",
            diagnostic.message
        );
        self.diagnostics.push(diagnostic);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_new() {
        let diag = Diagnostic::new(Level::Error, "test", Span::DUMMY);
        assert_eq!(diag.level, Level::Error);
        assert_eq!(diag.message, "test");
    }

    #[test]
    fn test_diagnostic_error_has_no_extras() {
        let diag = Diagnostic::error("bad", Span::DUMMY);
        assert_eq!(diag.level, Level::Error);
        assert!(diag.code.is_none());
        assert!(diag.notes.is_empty());
        assert!(diag.helps.is_empty());
    }

    #[test]
    fn test_header_without_code() {
        let diag = Diagnostic::error("Unterminated string.", Span::new(0, 3, 4, 1));
        assert_eq!(diag.header(), "[line 4] Error: Unterminated string.");
        assert_eq!(diag.line(), 4);
    }

    #[test]
    fn test_snippet_points_at_span() {
        let source = "var a = 1;\nvar b = @;\n";
        let diag = Diagnostic::error("Unexpected character: '@'.", Span::new(19, 20, 2, 9));
        let snippet = diag.snippet(source).unwrap();
        assert_eq!(snippet.line, "var b = @;");
        assert_eq!(snippet.line_number, 2);
        assert_eq!(snippet.start_column, 9);
        assert_eq!(snippet.end_column, 10);
    }

    #[test]
    fn test_snippet_multiline_span_stops_at_line_end() {
        let source = "print \"abc\ndef";
        let diag = Diagnostic::error("Unterminated string.", Span::new(6, source.len(), 1, 7));
        let snippet = diag.snippet(source).unwrap();
        assert_eq!(snippet.start_column, 7);
        assert_eq!(snippet.end_column, 11);
    }

    #[test]
    fn test_snippet_out_of_bounds() {
        let diag = Diagnostic::error("x", Span::new(2, 50, 1, 3));
        assert!(matches!(
            diag.snippet("abc"),
            Err(SourceError::SpanOutOfBounds { .. })
        ));
    }

    #[test]
    fn test_render_plain() {
        let source = "@";
        let diag = DiagnosticBuilder::error("Unexpected character: '@'.")
            .code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR)
            .span(Span::new(0, 1, 1, 1))
            .help("remove it")
            .build();
        let rendered = diag.render(source, false);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "[line 1] Error[E0001]: Unexpected character: '@'.");
        assert_eq!(lines[1], "  1 | @");
        assert_eq!(lines[2], "    | ^");
        assert_eq!(lines[3], "    = help: remove it");
    }

    #[test]
    fn test_render_colored_wraps_header() {
        let diag = Diagnostic::error("boom", Span::DUMMY);
        let rendered = diag.render("", true);
        assert!(rendered.starts_with("\x1b[1;31m[line 0] Error: boom"));
        assert!(rendered.ends_with("\x1b[0m"));
    }

    #[test]
    fn test_handler_new() {
        let handler = Handler::new();
        assert!(!handler.has_errors());
        assert_eq!(handler.error_count(), 0);
    }

    #[test]
    fn test_handler_counts() {
        let mut handler = Handler::new();
        handler.report(Diagnostic::error("e1", Span::DUMMY));
        handler.report(Diagnostic::error("e2", Span::DUMMY));
        assert!(handler.has_errors());
        assert_eq!(handler.error_count(), 2);
        assert_eq!(handler.diagnostics()[1].message, "e2");
    }

    #[test]
    fn test_handler_take_and_clear() {
        let mut handler = Handler::new();
        handler.report(Diagnostic::error("e", Span::DUMMY));
        let taken = handler.take();
        assert_eq!(taken.len(), 1);
        assert!(!handler.has_errors());

        handler.report(Diagnostic::error("e", Span::DUMMY));
        handler.clear();
        assert!(handler.diagnostics().is_empty());
    }

    #[test]
    fn test_reporter_through_mut_ref() {
        fn emit_into(mut reporter: impl Reporter) {
            reporter.report(Diagnostic::error("via ref", Span::DUMMY));
        }
        let mut handler = Handler::new();
        emit_into(&mut handler);
        assert_eq!(handler.error_count(), 1);
    }
}
