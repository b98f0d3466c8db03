//! Error handling module for the loxc driver.
//!
//! Lexical errors are not represented here: they are diagnostics collected
//! by a `Handler`. This enum covers everything around the scan that can
//! actually fail.

use std::path::PathBuf;

use thiserror::Error;

/// Command line usage error.
pub const EXIT_USAGE: u8 = 64;
/// Input data was malformed (lexical errors were reported).
pub const EXIT_DATA_ERR: u8 = 65;
/// Internal software error.
pub const EXIT_SOFTWARE: u8 = 70;
/// Input/output error.
pub const EXIT_IO_ERR: u8 = 74;
/// Configuration error.
pub const EXIT_CONFIG: u8 = 78;

/// Main error type for the loxc driver.
#[derive(Error, Debug)]
pub enum DriverError {
    /// The command line was malformed.
    #[error("{0}")]
    Usage(String),

    /// A script could not be read.
    #[error("Could not read '{}': {source}", path.display())]
    ReadFile {
        /// Path of the script
        path: PathBuf,
        /// Underlying cause
        #[source]
        source: std::io::Error,
    },

    /// Error when a configuration file is missing or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error from the line editor.
    #[error("Prompt error: {0}")]
    Repl(#[from] rustyline::error::ReadlineError),
}

impl DriverError {
    /// Process exit code for this error, in the sysexits convention.
    pub fn exit_code(&self) -> u8 {
        match self {
            DriverError::Usage(_) => EXIT_USAGE,
            DriverError::Config(_) => EXIT_CONFIG,
            DriverError::ReadFile { .. } | DriverError::Io(_) | DriverError::Repl(_) => {
                EXIT_IO_ERR
            },
            DriverError::Json(_) => EXIT_SOFTWARE,
        }
    }
}

/// Result type alias using DriverError.
pub type Result<T> = std::result::Result<T, DriverError>;
