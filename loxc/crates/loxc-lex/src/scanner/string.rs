//! String literal lexing.
//!
//! Lox strings have no escape sequences and may span lines. The literal is
//! the text strictly between the quotes, borrowed from the source.

use loxc_util::DiagnosticCode;

use crate::token::{Literal, Token, TokenKind};
use crate::Scanner;

impl<'src> Scanner<'src, '_> {
    /// Lexes a string literal starting at the opening quote.
    ///
    /// # Returns
    ///
    /// `Some(STRING)` with the token on the line of the opening quote, or
    /// `None` when input ends before the closing quote. The error is reported
    /// at the opening line and the cursor is left at end of input.
    pub(crate) fn lex_string(&mut self) -> Option<Token<'src>> {
        self.cursor.advance();
        let content_start = self.cursor.position();

        while !self.cursor.is_at_end() && self.cursor.current_char() != '"' {
            self.cursor.advance();
        }

        if self.cursor.is_at_end() {
            self.report_error(
                DiagnosticCode::E_LEXER_UNTERMINATED_STRING,
                "Unterminated string.".to_string(),
            );
            return None;
        }

        let content = self.cursor.slice(content_start, self.cursor.position());
        self.cursor.advance();

        Some(self.make_token(TokenKind::String, Some(Literal::Str(content))))
    }
}
