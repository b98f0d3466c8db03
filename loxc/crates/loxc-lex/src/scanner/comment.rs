//! Whitespace and comment skipping.

use crate::chars::is_whitespace;
use crate::Scanner;

impl<'src> Scanner<'src, '_> {
    /// Skips whitespace and `//` comments ahead of the next lexeme.
    ///
    /// Newlines are consumed here and counted by the cursor.
    pub(crate) fn skip_whitespace_and_comments(&mut self) {
        loop {
            if self.cursor.is_at_end() {
                return;
            }

            match self.cursor.current_char() {
                c if is_whitespace(c) => {
                    self.cursor.advance();
                },
                '/' if self.cursor.peek_char(1) == '/' => {
                    self.skip_line_comment();
                },
                _ => return,
            }
        }
    }

    /// Skips a line comment up to, but not including, the next newline.
    fn skip_line_comment(&mut self) {
        while !self.cursor.is_at_end() && self.cursor.current_char() != '\n' {
            self.cursor.advance();
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{scan, TokenKind};
    use loxc_util::Handler;

    fn lex_all(source: &str) -> Vec<(TokenKind, u32)> {
        let mut handler = Handler::new();
        scan(source, &mut handler)
            .iter()
            .map(|t| (t.kind, t.line))
            .collect()
    }

    #[test]
    fn test_comment_then_number() {
        assert_eq!(
            lex_all("// comment\n1"),
            vec![(TokenKind::Number, 2), (TokenKind::Eof, 2)]
        );
    }

    #[test]
    fn test_comment_at_end_of_input() {
        assert_eq!(lex_all("x // trailing"), vec![(TokenKind::Identifier, 1), (TokenKind::Eof, 1)]);
    }

    #[test]
    fn test_comment_swallows_operators() {
        assert_eq!(lex_all("// a + b; \"x\" @"), vec![(TokenKind::Eof, 1)]);
    }

    #[test]
    fn test_consecutive_comments() {
        assert_eq!(
            lex_all("// one\n// two\n\n;"),
            vec![(TokenKind::Semicolon, 4), (TokenKind::Eof, 4)]
        );
    }

    #[test]
    fn test_whitespace_only() {
        assert_eq!(lex_all(" \t\r\n \n"), vec![(TokenKind::Eof, 3)]);
    }

    #[test]
    fn test_crlf_line_endings() {
        assert_eq!(
            lex_all("a\r\nb"),
            vec![(TokenKind::Identifier, 1), (TokenKind::Identifier, 2), (TokenKind::Eof, 2)]
        );
    }

    #[test]
    fn test_no_block_comments() {
        let kinds: Vec<_> = lex_all("/* */").into_iter().map(|(k, _)| k).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Slash,
                TokenKind::Star,
                TokenKind::Star,
                TokenKind::Slash,
                TokenKind::Eof
            ]
        );
    }
}
