//! Scanner module.
//!
//! The scanner is split into small components, one per lexeme family:
//! - `core` - Scanner struct, dispatch loop and entry points
//! - `comment` - Whitespace and line comment skipping
//! - `operator` - One and two character operators
//! - `string` - String literals
//! - `number` - Number literals
//! - `identifier` - Identifiers and keywords

mod comment;
mod core;
mod identifier;
mod number;
mod operator;
mod string;

pub use self::core::{scan, Scanner};
