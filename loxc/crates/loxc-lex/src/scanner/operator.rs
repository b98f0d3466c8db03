//! Operator lexing.
//!
//! Handles the operators that may be followed by `=` and the bare slash.

use crate::token::{Token, TokenKind};
use crate::Scanner;

impl<'src> Scanner<'src, '_> {
    /// Consumes one character and emits `kind`.
    pub(crate) fn single(&mut self, kind: TokenKind) -> Token<'src> {
        self.cursor.advance();
        self.make_token(kind, None)
    }

    /// Consumes the current character, then `=` if it follows.
    ///
    /// # Arguments
    /// * `with_equal` - Kind emitted when `=` follows
    /// * `alone` - Kind emitted otherwise
    fn one_or_two(&mut self, with_equal: TokenKind, alone: TokenKind) -> Token<'src> {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            self.make_token(with_equal, None)
        } else {
            self.make_token(alone, None)
        }
    }

    /// Lexes `!` or `!=`.
    pub(crate) fn lex_bang(&mut self) -> Token<'src> {
        self.one_or_two(TokenKind::BangEqual, TokenKind::Bang)
    }

    /// Lexes `=` or `==`.
    pub(crate) fn lex_equals(&mut self) -> Token<'src> {
        self.one_or_two(TokenKind::EqualEqual, TokenKind::Equal)
    }

    /// Lexes `<` or `<=`.
    pub(crate) fn lex_less(&mut self) -> Token<'src> {
        self.one_or_two(TokenKind::LessOrEqual, TokenKind::Less)
    }

    /// Lexes `>` or `>=`.
    pub(crate) fn lex_greater(&mut self) -> Token<'src> {
        self.one_or_two(TokenKind::GreaterOrEqual, TokenKind::Greater)
    }

    /// Lexes a bare `/`. Comments never reach here.
    pub(crate) fn lex_slash(&mut self) -> Token<'src> {
        self.single(TokenKind::Slash)
    }
}
