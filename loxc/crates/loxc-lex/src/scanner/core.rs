//! Core scanner implementation.
//!
//! This module contains the `Scanner` struct, its dispatch loop and the
//! iterator and batch entry points built on top of it.

use loxc_util::{DiagnosticBuilder, DiagnosticCode, Reporter, Span};

use crate::chars::{is_digit, is_ident_start};
use crate::cursor::Cursor;
use crate::token::{Literal, Token, TokenKind};

/// Scanner for Lox source text.
///
/// Walks the source once, left to right, and produces [`Token`]s that borrow
/// their lexemes from the source. Lexical errors go to the borrowed
/// [`Reporter`] and never stop the scan.
///
/// # Example
///
/// ```
/// use loxc_util::Handler;
/// use loxc_lex::{Scanner, TokenKind};
///
/// let mut handler = Handler::new();
/// let tokens = Scanner::new("var x = 1;", &mut handler).scan_tokens();
///
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
/// assert_eq!(
///     kinds,
///     [
///         TokenKind::Var,
///         TokenKind::Identifier,
///         TokenKind::Equal,
///         TokenKind::Number,
///         TokenKind::Semicolon,
///         TokenKind::Eof,
///     ]
/// );
/// assert!(!handler.has_errors());
/// ```
pub struct Scanner<'src, 'r> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'src>,

    /// Receiver for lexical errors.
    reporter: &'r mut dyn Reporter,

    /// Byte offset where the current lexeme starts.
    pub(crate) token_start: usize,

    /// Line where the current lexeme starts (1-based).
    token_start_line: u32,

    /// Column where the current lexeme starts (1-based).
    token_start_column: u32,

    /// Set once the iterator has yielded EOF.
    finished: bool,
}

impl<'src, 'r> Scanner<'src, 'r> {
    /// Creates a new scanner over `source`, reporting errors to `reporter`.
    pub fn new(source: &'src str, reporter: &'r mut dyn Reporter) -> Self {
        Self {
            cursor: Cursor::new(source),
            reporter,
            token_start: 0,
            token_start_line: 1,
            token_start_column: 1,
            finished: false,
        }
    }

    /// Scans the whole source and returns every token, EOF last.
    ///
    /// Consumes the scanner. Tokens already pulled through the iterator are
    /// not repeated.
    pub fn scan_tokens(mut self) -> Vec<Token<'src>> {
        let mut tokens = Vec::with_capacity(self.cursor.source().len() / 4 + 1);
        tokens.extend(&mut self);

        tracing::debug!(
            tokens = tokens.len(),
            lines = self.cursor.line(),
            bytes = self.cursor.source().len(),
            "scan complete"
        );
        tokens
    }

    /// Returns the next token from the source.
    ///
    /// Skips whitespace and comments, then dispatches on the first character
    /// of the lexeme. Input that produces no token (an unexpected character,
    /// an unterminated string) is reported and scanning moves on.
    ///
    /// # Returns
    ///
    /// The next token, or an EOF token at end of input. Calling again after
    /// EOF keeps returning EOF.
    ///
    /// # Example
    ///
    /// ```
    /// use loxc_util::Handler;
    /// use loxc_lex::{Scanner, TokenKind};
    ///
    /// let mut handler = Handler::new();
    /// let mut scanner = Scanner::new("!=", &mut handler);
    ///
    /// assert_eq!(scanner.next_token().kind, TokenKind::BangEqual);
    /// assert_eq!(scanner.next_token().kind, TokenKind::Eof);
    /// ```
    pub fn next_token(&mut self) -> Token<'src> {
        loop {
            self.skip_whitespace_and_comments();

            self.token_start = self.cursor.position();
            self.token_start_line = self.cursor.line();
            self.token_start_column = self.cursor.column();

            if self.cursor.is_at_end() {
                return Token::eof(self.cursor.line());
            }

            let token = match self.cursor.current_char() {
                '(' => self.single(TokenKind::LeftParen),
                ')' => self.single(TokenKind::RightParen),
                '{' => self.single(TokenKind::LeftBrace),
                '}' => self.single(TokenKind::RightBrace),
                ',' => self.single(TokenKind::Comma),
                '.' => self.single(TokenKind::Dot),
                '-' => self.single(TokenKind::Minus),
                '+' => self.single(TokenKind::Plus),
                ';' => self.single(TokenKind::Semicolon),
                '*' => self.single(TokenKind::Star),
                '!' => self.lex_bang(),
                '=' => self.lex_equals(),
                '<' => self.lex_less(),
                '>' => self.lex_greater(),
                '/' => self.lex_slash(),
                '"' => match self.lex_string() {
                    Some(token) => token,
                    None => continue,
                },
                c if is_digit(c) => self.lex_number(),
                c if is_ident_start(c) => self.lex_identifier(),
                c => {
                    self.cursor.advance();
                    self.report_error(
                        DiagnosticCode::E_LEXER_UNEXPECTED_CHAR,
                        format!("Unexpected character: '{}'.", c),
                    );
                    continue;
                },
            };
            return token;
        }
    }

    /// Builds a token spanning the current lexeme.
    pub(crate) fn make_token(
        &self,
        kind: TokenKind,
        literal: Option<Literal<'src>>,
    ) -> Token<'src> {
        Token::new(
            kind,
            self.cursor.slice_from(self.token_start),
            literal,
            self.token_start_line,
        )
    }

    /// Reports a lexical error located at the current lexeme.
    ///
    /// # Arguments
    /// * `code` - Diagnostic code of the error
    /// * `message` - The error message to display
    pub fn report_error(&mut self, code: DiagnosticCode, message: String) {
        let span = Span::new(
            self.token_start,
            self.cursor.position(),
            self.token_start_line,
            self.token_start_column,
        );
        DiagnosticBuilder::error(message)
            .code(code)
            .span(span)
            .emit(&mut *self.reporter);
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.cursor.column()
    }

    /// Returns the byte offset of the next unread character.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }
}

impl<'src> Iterator for Scanner<'src, '_> {
    type Item = Token<'src>;

    /// Yields every token in order, EOF included exactly once.
    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        if token.is_eof() {
            self.finished = true;
        }
        Some(token)
    }
}

impl std::iter::FusedIterator for Scanner<'_, '_> {}

/// Scans `source` into tokens, reporting lexical errors to `reporter`.
///
/// ```
/// use loxc_util::Handler;
/// use loxc_lex::{scan, TokenKind};
///
/// let mut handler = Handler::new();
/// let tokens = scan("@", &mut handler);
///
/// assert_eq!(tokens.len(), 1);
/// assert_eq!(tokens[0].kind, TokenKind::Eof);
/// assert_eq!(handler.error_count(), 1);
/// ```
pub fn scan<'src>(source: &'src str, reporter: &mut dyn Reporter) -> Vec<Token<'src>> {
    Scanner::new(source, reporter).scan_tokens()
}
