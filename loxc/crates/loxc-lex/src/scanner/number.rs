//! Number literal lexing.
//!
//! Lox numbers are a digit run with an optional fraction: `42`, `3.14`.
//! There is no sign, exponent or radix prefix.

use loxc_util::DiagnosticCode;

use crate::chars::is_digit;
use crate::token::{Literal, Token, TokenKind};
use crate::Scanner;

impl<'src> Scanner<'src, '_> {
    /// Lexes a number literal starting at its first digit.
    ///
    /// A `.` is part of the number only when a digit follows it, so `1.`
    /// scans as NUMBER then DOT.
    pub(crate) fn lex_number(&mut self) -> Token<'src> {
        self.eat_digits();

        if self.cursor.current_char() == '.' && is_digit(self.cursor.peek_char(1)) {
            self.cursor.advance();
            self.eat_digits();
        }

        let text = self.cursor.slice_from(self.token_start);
        let value = match text.parse::<f64>() {
            Ok(value) => value,
            Err(err) => {
                self.report_error(
                    DiagnosticCode::E_LEXER_INVALID_NUMBER,
                    format!("invalid number literal '{}': {}", text, err),
                );
                0.0
            },
        };

        self.make_token(TokenKind::Number, Some(Literal::Number(value)))
    }

    fn eat_digits(&mut self) {
        while is_digit(self.cursor.current_char()) {
            self.cursor.advance();
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{scan, Literal, Token, TokenKind};
    use loxc_util::Handler;

    fn lex_all(source: &str) -> Vec<Token<'_>> {
        let mut handler = Handler::new();
        let tokens = scan(source, &mut handler);
        assert!(!handler.has_errors(), "unexpected errors for {:?}", source);
        tokens
    }

    #[test]
    fn test_integer() {
        let tokens = lex_all("42");
        assert_eq!(
            tokens[0],
            Token::new(TokenKind::Number, "42", Some(Literal::Number(42.0)), 1)
        );
    }

    #[test]
    fn test_decimal() {
        let tokens = lex_all("123.45");
        assert_eq!(tokens[0].lexeme, "123.45");
        assert_eq!(tokens[0].literal, Some(Literal::Number(123.45)));
        assert_eq!(tokens.len(), 2);
    }

    #[test]
    fn test_trailing_dot_is_separate() {
        let kinds: Vec<_> = lex_all("1.").iter().map(|t| (t.kind, t.lexeme)).collect();
        assert_eq!(
            kinds,
            vec![(TokenKind::Number, "1"), (TokenKind::Dot, "."), (TokenKind::Eof, "")]
        );
    }

    #[test]
    fn test_leading_dot_is_separate() {
        let kinds: Vec<_> = lex_all(".5").iter().map(|t| t.kind).collect();
        assert_eq!(kinds, vec![TokenKind::Dot, TokenKind::Number, TokenKind::Eof]);
    }

    #[test]
    fn test_method_call_on_number() {
        let kinds: Vec<_> = lex_all("1.abs").iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![TokenKind::Number, TokenKind::Dot, TokenKind::Identifier, TokenKind::Eof]
        );
    }

    #[test]
    fn test_two_dots() {
        let lexemes: Vec<_> = lex_all("1.2.3").iter().map(|t| t.lexeme).collect();
        assert_eq!(lexemes, vec!["1.2", ".", "3", ""]);
    }

    #[test]
    fn test_leading_zeros() {
        let tokens = lex_all("007");
        assert_eq!(tokens[0].literal, Some(Literal::Number(7.0)));
        assert_eq!(tokens[0].lexeme, "007");
    }

    #[test]
    fn test_no_sign() {
        let kinds: Vec<_> = lex_all("-1").iter().map(|t| t.kind).collect();
        assert_eq!(kinds, vec![TokenKind::Minus, TokenKind::Number, TokenKind::Eof]);
    }

    #[test]
    fn test_huge_number_is_infinite() {
        let source = "9".repeat(400);
        let tokens = lex_all(&source);
        assert_eq!(tokens[0].literal, Some(Literal::Number(f64::INFINITY)));
    }

    #[test]
    fn test_number_followed_by_identifier() {
        let lexemes: Vec<_> = lex_all("12abc").iter().map(|t| t.lexeme).collect();
        assert_eq!(lexemes, vec!["12", "abc", ""]);
    }
}
