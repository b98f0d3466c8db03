//! Diagnostic severity levels.
//!
//! ```
//! use loxc_util::diagnostic::Level;
//!
//! assert!(Level::Error.is_error());
//! assert_eq!(Level::Error.to_string(), "error");
//! assert_eq!(Level::Error.title(), "Error");
//! ```

use std::fmt;

/// Diagnostic severity level
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Level {
    /// Input the phase could not make sense of. The phase still recovers and
    /// continues, but the driver refuses to go further.
    Error,
}

impl Level {
    /// Returns true if this level represents an error
    #[inline]
    pub const fn is_error(&self) -> bool {
        matches!(self, Level::Error)
    }

    /// Returns the canonical lower-case name for this level
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Level::Error => "error",
        }
    }

    /// Returns the capitalized name used in rendered headers
    #[inline]
    pub const fn title(&self) -> &'static str {
        match self {
            Level::Error => "Error",
        }
    }

    /// Returns the ANSI color code for this level
    #[inline]
    pub const fn color_code(&self) -> &'static str {
        match self {
            Level::Error => "31",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
