//! loxc-drv - Driver for the loxc scanner
//!
//! Reads Lox source from a script file or an interactive prompt, scans it,
//! prints every token on stdout and every lexical error on stderr. The
//! binary maps the outcome to a process exit code.
//!
//! # Example
//!
//! ```
//! use loxc_drv::{run_source, Options};
//!
//! let mut out = Vec::new();
//! let mut err = Vec::new();
//! let report = run_source("print 1;", &Options::default(), &mut out, &mut err).unwrap();
//!
//! assert!(!report.had_error());
//! assert_eq!(
//!     String::from_utf8(out).unwrap(),
//!     "PRINT print null\nNUMBER 1 1.0\nSEMICOLON ; null\nEOF  null\n"
//! );
//! ```

pub mod config;
pub mod error;
pub mod repl;

use std::io::Write;
use std::path::Path;

use loxc_lex::{scan, Token};
use loxc_util::Handler;

pub use config::{Config, OutputFormat, ReplConfig};
pub use error::{DriverError, Result};

/// Output settings shared by file and prompt runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Token output format
    pub format: OutputFormat,
    /// Colorize diagnostics
    pub color: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            color: false,
        }
    }
}

impl Options {
    /// Options derived from a loaded configuration.
    pub fn from_config(config: &Config) -> Self {
        Self {
            format: config.format,
            color: config.color,
        }
    }
}

/// Summary of one scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanReport {
    /// Tokens produced, EOF included
    pub tokens: usize,
    /// Lexical errors reported
    pub errors: usize,
}

impl ScanReport {
    /// Returns true if any lexical error was reported.
    pub fn had_error(&self) -> bool {
        self.errors > 0
    }
}

/// Scans `source`, writing tokens to `out` and rendered diagnostics to `err`.
///
/// Lexical errors do not make this fail; they are counted in the report.
/// Only write failures are errors.
pub fn run_source<O, E>(
    source: &str,
    options: &Options,
    out: &mut O,
    err: &mut E,
) -> Result<ScanReport>
where
    O: Write + ?Sized,
    E: Write + ?Sized,
{
    let mut handler = Handler::new();
    let tokens = scan(source, &mut handler);

    write_tokens(out, &tokens, options.format)?;
    for diagnostic in handler.diagnostics() {
        writeln!(err, "{}", diagnostic.render(source, options.color))?;
    }

    Ok(ScanReport {
        tokens: tokens.len(),
        errors: handler.error_count(),
    })
}

/// Reads and scans a script file, printing to stdout and stderr.
pub fn run_file(path: &Path, options: &Options) -> Result<ScanReport> {
    let source = std::fs::read_to_string(path).map_err(|source| DriverError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = source.len(), "scanning file");

    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    let report = run_source(&source, options, &mut stdout.lock(), &mut stderr.lock())?;

    tracing::debug!(tokens = report.tokens, errors = report.errors, "file scanned");
    Ok(report)
}

/// Writes one line per token in the requested format.
pub fn write_tokens<W: Write + ?Sized>(
    out: &mut W,
    tokens: &[Token<'_>],
    format: OutputFormat,
) -> Result<()> {
    for token in tokens {
        match format {
            OutputFormat::Text => writeln!(out, "{}", token)?,
            OutputFormat::Json => {
                serde_json::to_writer(&mut *out, token)?;
                writeln!(out)?;
            },
        }
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(source: &str, format: OutputFormat) -> (String, String, ScanReport) {
        let options = Options {
            format,
            color: false,
        };
        let mut out = Vec::new();
        let mut err = Vec::new();
        let report = run_source(source, &options, &mut out, &mut err).unwrap();
        (
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
            report,
        )
    }

    #[test]
    fn test_text_output() {
        let (out, err, report) = run("var s = \"hi\";", OutputFormat::Text);
        assert_eq!(
            out,
            "VAR var null\nIDENTIFIER s null\nEQUAL = null\nSTRING \"hi\" hi\nSEMICOLON ; null\nEOF  null\n"
        );
        assert!(err.is_empty());
        assert_eq!(report, ScanReport { tokens: 6, errors: 0 });
    }

    #[test]
    fn test_json_output() {
        let (out, _, _) = run("x 1.5 \"s\"", OutputFormat::Json);
        let lines: Vec<serde_json::Value> = out
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0]["kind"], "IDENTIFIER");
        assert_eq!(lines[0]["literal"], serde_json::Value::Null);
        assert_eq!(lines[1]["literal"], 1.5);
        assert_eq!(lines[2]["literal"], "s");
        assert_eq!(lines[2]["lexeme"], "\"s\"");
        assert_eq!(lines[3]["kind"], "EOF");
        assert_eq!(lines[3]["line"], 1);
    }

    #[test]
    fn test_errors_go_to_err_stream() {
        let (out, err, report) = run("a\n@", OutputFormat::Text);
        assert_eq!(out, "IDENTIFIER a null\nEOF  null\n");
        assert!(err.starts_with("[line 2] Error[E0001]: Unexpected character: '@'."));
        assert!(report.had_error());
        assert_eq!(report.errors, 1);
    }

    #[test]
    fn test_options_from_config() {
        let config = Config {
            format: OutputFormat::Json,
            color: false,
            ..Config::default()
        };
        assert_eq!(
            Options::from_config(&config),
            Options {
                format: OutputFormat::Json,
                color: false
            }
        );
    }

    #[test]
    fn test_run_file_missing() {
        let result = run_file(Path::new("/nonexistent/script.lox"), &Options::default());
        assert!(matches!(result, Err(DriverError::ReadFile { .. })));
    }
}
