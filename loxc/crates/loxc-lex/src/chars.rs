//! Character classes recognized by the scanner.
//!
//! Lox source is significant only in ASCII. Anything else falls through to
//! the unexpected-character path.

/// Checks if a character may start an identifier: `[A-Za-z_]`.
///
/// ```
/// use loxc_lex::chars::is_ident_start;
///
/// assert!(is_ident_start('a'));
/// assert!(is_ident_start('_'));
/// assert!(!is_ident_start('1'));
/// assert!(!is_ident_start('α'));
/// ```
#[inline]
pub fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Checks if a character may continue an identifier: `[A-Za-z0-9_]`.
#[inline]
pub fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Checks if a character is a decimal digit.
#[inline]
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Whitespace that separates lexemes without producing tokens. Newline is
/// handled by the cursor's line tracking but is also skipped here.
#[inline]
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\r' | '\t' | '\n')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ident_start() {
        for c in ['a', 'z', 'A', 'Z', '_'] {
            assert!(is_ident_start(c), "{:?}", c);
        }
        for c in ['0', '9', '-', ' ', 'é', '\0'] {
            assert!(!is_ident_start(c), "{:?}", c);
        }
    }

    #[test]
    fn test_ident_continue() {
        for c in ['a', 'Z', '_', '0', '9'] {
            assert!(is_ident_continue(c), "{:?}", c);
        }
        for c in ['.', '"', 'ß', '\0'] {
            assert!(!is_ident_continue(c), "{:?}", c);
        }
    }

    #[test]
    fn test_digit() {
        assert!(is_digit('0'));
        assert!(is_digit('9'));
        assert!(!is_digit('a'));
        assert!(!is_digit('٣'));
    }

    #[test]
    fn test_whitespace() {
        assert!(is_whitespace(' '));
        assert!(is_whitespace('\t'));
        assert!(is_whitespace('\r'));
        assert!(is_whitespace('\n'));
        assert!(!is_whitespace('\u{a0}'));
        assert!(!is_whitespace('\x0b'));
    }
}
