//! loxc-lex - Lexical Scanner for the Lox Scripting Language
//!
//! This crate turns Lox source text into a sequence of classified tokens
//! for a downstream parser. Scanning is a single left-to-right pass with at
//! most two characters of lookahead. Malformed input never stops the scan:
//! every lexical error goes to a [`Reporter`](loxc_util::Reporter) and
//! scanning resumes, so a caller sees all errors at once.
//!
//! # Example Usage
//!
//! ```
//! use loxc_util::Handler;
//! use loxc_lex::{scan, Scanner, TokenKind};
//!
//! let source = "print 1 + 2;";
//! let mut handler = Handler::new();
//!
//! // Scan everything at once
//! let tokens = scan(source, &mut handler);
//! assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
//!
//! // Or pull tokens lazily
//! for token in Scanner::new(source, &mut handler) {
//!     println!("{}", token);
//! }
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token kinds, literals and the token record
//! - [`keywords`] - The shared reserved word table
//! - [`scanner`] - The scanner itself
//! - [`cursor`] - Character cursor for source traversal
//! - [`chars`] - Character classes
//!
//! # Lexical Grammar
//!
//! - **Punctuation**: `( ) { } , . - + ; *`
//! - **Operators**: `! != = == < <= > >= /`
//! - **Comments**: `//` to end of line
//! - **Strings**: `"..."`, may span lines, no escapes
//! - **Numbers**: `123`, `123.45`
//! - **Identifiers**: `[A-Za-z_][A-Za-z0-9_]*`
//! - **Keywords**: `and class else false for fun if nil or print return
//!   super this true var while`

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod chars;
pub mod cursor;
pub mod keywords;
pub mod scanner;
pub mod token;

mod edge_cases;

pub use cursor::Cursor;
pub use keywords::Keywords;
pub use scanner::{scan, Scanner};
pub use token::{keyword_from_ident, Literal, Token, TokenKind};
