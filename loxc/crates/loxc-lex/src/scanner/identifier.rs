//! Identifier and keyword lexing.

use crate::chars::is_ident_continue;
use crate::token::{keyword_from_ident, Token, TokenKind};
use crate::Scanner;

impl<'src> Scanner<'src, '_> {
    /// Lexes an identifier or keyword.
    ///
    /// Reads a maximal run of letters, digits and underscores, then looks the
    /// text up in the keyword table.
    ///
    /// # Returns
    ///
    /// Either a keyword token (e.g. `CLASS`) or `IDENTIFIER`
    pub(crate) fn lex_identifier(&mut self) -> Token<'src> {
        while is_ident_continue(self.cursor.current_char()) {
            self.cursor.advance();
        }

        let text = self.cursor.slice_from(self.token_start);
        let kind = keyword_from_ident(text).unwrap_or(TokenKind::Identifier);
        self.make_token(kind, None)
    }
}
