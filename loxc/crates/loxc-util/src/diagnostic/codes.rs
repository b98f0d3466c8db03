//! Diagnostic codes for categorizing errors and warnings.
//!
//! # Examples
//!
//! ```
//! use loxc_util::diagnostic::DiagnosticCode;
//!
//! let code = DiagnosticCode::E_LEXER_UNEXPECTED_CHAR;
//! assert_eq!(code.prefix(), "E");
//! assert_eq!(code.number(), 1);
//! assert_eq!(code.to_string(), "E0001");
//! ```

use std::fmt;

/// A unique code identifying a diagnostic message
///
/// Codes follow the format `{prefix}{number}`, the number padded to four
/// digits. `E` marks errors, `W` warnings.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    /// The prefix (e.g., "E" for error, "W" for warning)
    pub prefix: &'static str,
    /// The numeric identifier
    pub number: u32,
}

impl DiagnosticCode {
    /// A character that starts no lexeme.
    pub const E_LEXER_UNEXPECTED_CHAR: DiagnosticCode = DiagnosticCode::new("E", 1);
    /// A string literal still open at end of input.
    pub const E_LEXER_UNTERMINATED_STRING: DiagnosticCode = DiagnosticCode::new("E", 2);
    /// A number literal whose text does not parse.
    pub const E_LEXER_INVALID_NUMBER: DiagnosticCode = DiagnosticCode::new("E", 3);

    /// Create a new diagnostic code
    #[inline]
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    /// Get the prefix
    #[inline]
    pub const fn prefix(&self) -> &'static str {
        self.prefix
    }

    /// Get the numeric identifier
    #[inline]
    pub const fn number(&self) -> u32 {
        self.number
    }

    /// Returns true if this is an error code
    #[inline]
    pub fn is_error(&self) -> bool {
        self.prefix == "E"
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:04}", self.prefix, self.number)
    }
}

impl fmt::Debug for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DiagnosticCode({})", self)
    }
}
