//! Token definitions for the Lox language.
//!
//! A [`Token`] borrows its lexeme (and string literal contents) straight out
//! of the source text, so scanning allocates nothing per token.

use std::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::keywords::Keywords;

/// Lexical category of a token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum TokenKind {
    // ==================== SINGLE-CHARACTER PUNCTUATION ====================
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
    /// `,`
    Comma,
    /// `.`
    Dot,
    /// `-`
    Minus,
    /// `+`
    Plus,
    /// `;`
    Semicolon,
    /// `*`
    Star,

    // ==================== ONE OR TWO CHARACTER OPERATORS ====================
    /// `!`
    Bang,
    /// `!=`
    BangEqual,
    /// `=`
    Equal,
    /// `==`
    EqualEqual,
    /// `>`
    Greater,
    /// `>=`
    GreaterOrEqual,
    /// `<`
    Less,
    /// `<=`
    LessOrEqual,
    /// `/`
    Slash,

    // ==================== LITERALS ====================
    /// A name that is not a reserved word
    Identifier,
    /// `"..."`
    String,
    /// `123`, `4.5`
    Number,

    // ==================== KEYWORDS ====================
    /// `and`
    And,
    /// `class`
    Class,
    /// `else`
    Else,
    /// `false`
    False,
    /// `fun`
    Fun,
    /// `for`
    For,
    /// `if`
    If,
    /// `nil`
    Nil,
    /// `or`
    Or,
    /// `print`
    Print,
    /// `return`
    Return,
    /// `super`
    Super,
    /// `this`
    This,
    /// `true`
    True,
    /// `var`
    Var,
    /// `while`
    While,

    /// End of input
    Eof,
}

impl TokenKind {
    /// Returns the SCREAMING_SNAKE_CASE name of this kind.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::LeftParen => "LEFT_PAREN",
            TokenKind::RightParen => "RIGHT_PAREN",
            TokenKind::LeftBrace => "LEFT_BRACE",
            TokenKind::RightBrace => "RIGHT_BRACE",
            TokenKind::Comma => "COMMA",
            TokenKind::Dot => "DOT",
            TokenKind::Minus => "MINUS",
            TokenKind::Plus => "PLUS",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Star => "STAR",
            TokenKind::Bang => "BANG",
            TokenKind::BangEqual => "BANG_EQUAL",
            TokenKind::Equal => "EQUAL",
            TokenKind::EqualEqual => "EQUAL_EQUAL",
            TokenKind::Greater => "GREATER",
            TokenKind::GreaterOrEqual => "GREATER_OR_EQUAL",
            TokenKind::Less => "LESS",
            TokenKind::LessOrEqual => "LESS_OR_EQUAL",
            TokenKind::Slash => "SLASH",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::String => "STRING",
            TokenKind::Number => "NUMBER",
            TokenKind::And => "AND",
            TokenKind::Class => "CLASS",
            TokenKind::Else => "ELSE",
            TokenKind::False => "FALSE",
            TokenKind::Fun => "FUN",
            TokenKind::For => "FOR",
            TokenKind::If => "IF",
            TokenKind::Nil => "NIL",
            TokenKind::Or => "OR",
            TokenKind::Print => "PRINT",
            TokenKind::Return => "RETURN",
            TokenKind::Super => "SUPER",
            TokenKind::This => "THIS",
            TokenKind::True => "TRUE",
            TokenKind::Var => "VAR",
            TokenKind::While => "WHILE",
            TokenKind::Eof => "EOF",
        }
    }

    /// Returns true for reserved words.
    pub const fn is_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::And
                | TokenKind::Class
                | TokenKind::Else
                | TokenKind::False
                | TokenKind::Fun
                | TokenKind::For
                | TokenKind::If
                | TokenKind::Nil
                | TokenKind::Or
                | TokenKind::Print
                | TokenKind::Return
                | TokenKind::Super
                | TokenKind::This
                | TokenKind::True
                | TokenKind::Var
                | TokenKind::While
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The value carried by a literal token.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Literal<'src> {
    /// Value of a NUMBER token
    Number(f64),
    /// Text strictly between the quotes of a STRING token, unescaped
    Str(&'src str),
}

impl fmt::Display for Literal<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Integral values keep one fractional digit: `10` prints as `10.0`.
            Literal::Number(n) if n.is_finite() && n.fract() == 0.0 => write!(f, "{:.1}", n),
            Literal::Number(n) => write!(f, "{}", n),
            Literal::Str(s) => f.write_str(s),
        }
    }
}

/// One scanned unit of source text.
///
/// # Example
///
/// ```
/// use loxc_lex::{Literal, Token, TokenKind};
///
/// let token = Token::new(TokenKind::Number, "10", Some(Literal::Number(10.0)), 1);
/// assert_eq!(token.to_string(), "NUMBER 10 10.0");
/// assert_eq!(Token::eof(3).to_string(), "EOF  null");
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Token<'src> {
    /// Lexical category
    pub kind: TokenKind,
    /// Exact source text of the token
    pub lexeme: &'src str,
    /// Literal value for NUMBER and STRING tokens
    pub literal: Option<Literal<'src>>,
    /// 1-based line of the token's first character
    pub line: u32,
}

impl<'src> Token<'src> {
    /// Create a new token.
    pub fn new(
        kind: TokenKind,
        lexeme: &'src str,
        literal: Option<Literal<'src>>,
        line: u32,
    ) -> Self {
        Self {
            kind,
            lexeme,
            literal,
            line,
        }
    }

    /// The end-of-stream sentinel at `line`.
    pub fn eof(line: u32) -> Self {
        Self::new(TokenKind::Eof, "", None, line)
    }

    /// Returns true for the end-of-stream sentinel.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.literal {
            Some(literal) => write!(f, "{} {} {}", self.kind, self.lexeme, literal),
            None => write!(f, "{} {} null", self.kind, self.lexeme),
        }
    }
}

/// Maps a reserved word to its keyword kind.
///
/// Lookup is exact and case-sensitive. Returns `None` for anything that is not
/// a keyword, including identifiers that merely start with one.
///
/// ```
/// use loxc_lex::{keyword_from_ident, TokenKind};
///
/// assert_eq!(keyword_from_ident("class"), Some(TokenKind::Class));
/// assert_eq!(keyword_from_ident("classic"), None);
/// assert_eq!(keyword_from_ident("Class"), None);
/// ```
pub fn keyword_from_ident(ident: &str) -> Option<TokenKind> {
    Keywords::global().get(ident)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names() {
        assert_eq!(TokenKind::LeftParen.to_string(), "LEFT_PAREN");
        assert_eq!(TokenKind::GreaterOrEqual.to_string(), "GREATER_OR_EQUAL");
        assert_eq!(TokenKind::LessOrEqual.to_string(), "LESS_OR_EQUAL");
        assert_eq!(TokenKind::BangEqual.to_string(), "BANG_EQUAL");
        assert_eq!(TokenKind::Eof.to_string(), "EOF");
    }

    #[test]
    fn test_is_keyword() {
        assert!(TokenKind::While.is_keyword());
        assert!(TokenKind::And.is_keyword());
        assert!(!TokenKind::Identifier.is_keyword());
        assert!(!TokenKind::Eof.is_keyword());
        assert!(!TokenKind::Slash.is_keyword());
    }

    #[test]
    fn test_literal_display() {
        assert_eq!(Literal::Number(10.0).to_string(), "10.0");
        assert_eq!(Literal::Number(123.45).to_string(), "123.45");
        assert_eq!(Literal::Number(0.5).to_string(), "0.5");
        assert_eq!(Literal::Str("ok").to_string(), "ok");
        assert_eq!(Literal::Str("").to_string(), "");
    }

    #[test]
    fn test_token_display() {
        let ident = Token::new(TokenKind::Identifier, "x", None, 1);
        assert_eq!(ident.to_string(), "IDENTIFIER x null");

        let string = Token::new(TokenKind::String, "\"ok\"", Some(Literal::Str("ok")), 1);
        assert_eq!(string.to_string(), "STRING \"ok\" ok");
    }

    #[test]
    fn test_eof_token() {
        let eof = Token::eof(7);
        assert!(eof.is_eof());
        assert_eq!(eof.lexeme, "");
        assert_eq!(eof.literal, None);
        assert_eq!(eof.line, 7);
    }

    #[test]
    fn test_token_equality() {
        let a = Token::new(TokenKind::Plus, "+", None, 1);
        let b = Token::new(TokenKind::Plus, "+", None, 1);
        let c = Token::new(TokenKind::Plus, "+", None, 2);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
