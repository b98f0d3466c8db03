//! Edge case tests for loxc-util

#[cfg(test)]
mod tests {
    use crate::diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Reporter};
    use crate::span::{line_text, Span};

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_line_text_empty_source() {
        assert!(line_text("", 1).is_err());
    }

    #[test]
    fn test_edge_line_text_trailing_newline() {
        // A trailing newline does not open a new line of text.
        assert_eq!(line_text("a\n", 1).unwrap(), "a");
        assert!(line_text("a\n", 2).is_err());
    }

    #[test]
    fn test_edge_snippet_non_ascii_width_counts_chars() {
        let source = "é@";
        let diag = Diagnostic::error("x", Span::new(0, 2, 1, 1));
        let snippet = diag.snippet(source).unwrap();
        assert_eq!(snippet.end_column - snippet.start_column, 1);
    }

    #[test]
    fn test_edge_render_tab_indented_line() {
        let source = "var a;\n\t@";
        let diag = Diagnostic::error("Unexpected character: '@'.", Span::new(8, 9, 2, 2));
        let rendered = diag.render(source, false);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[1], "  2 | \t@");
        assert_eq!(lines[2], "    | \t^");
    }

    #[test]
    fn test_edge_snippet_bad_char_boundary() {
        // Byte 1 is inside the two-byte 'é'.
        let diag = Diagnostic::error("x", Span::new(1, 2, 1, 1));
        assert!(diag.snippet("é").is_err());
    }

    #[test]
    fn test_edge_render_falls_back_to_header() {
        let diag = Diagnostic::error("gone", Span::new(0, 1, 40, 1));
        assert_eq!(diag.render("short", false), "[line 40] Error: gone");
    }

    #[test]
    fn test_edge_many_diagnostics_keep_order() {
        let mut handler = Handler::new();
        for line in 1..=500u32 {
            DiagnosticBuilder::error(format!("error {}", line))
                .code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR)
                .span(Span::new(0, 0, line, 1))
                .emit(&mut handler);
        }
        assert_eq!(handler.error_count(), 500);
        for (i, diag) in handler.diagnostics().iter().enumerate() {
            assert_eq!(diag.line(), i as u32 + 1);
        }
    }

    #[test]
    fn test_edge_dyn_reporter() {
        let mut handler = Handler::new();
        let reporter: &mut dyn Reporter = &mut handler;
        DiagnosticBuilder::error("dyn").emit(reporter);
        assert!(handler.has_errors());
    }
}
