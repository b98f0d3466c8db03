//! loxc - scan Lox scripts and print their tokens.
//!
//! With a script argument the file is scanned once; without one an
//! interactive prompt starts.

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::error::ErrorKind;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use loxc_drv::error::{EXIT_DATA_ERR, EXIT_SOFTWARE, EXIT_USAGE};
use loxc_drv::repl::Repl;
use loxc_drv::{run_file, Config, DriverError, Options, OutputFormat};

/// Lox lexical scanner
///
/// Prints one token per line. Lexical errors go to stderr and make the
/// process exit with status 65.
#[derive(Parser, Debug)]
#[command(name = "loxc")]
#[command(author = "Lox Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Scan Lox source and print its tokens", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Script to scan (starts an interactive prompt when omitted)
    #[arg(value_name = "SCRIPT")]
    scripts: Vec<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, env = "LOXC_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, env = "LOXC_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, env = "LOXC_NO_COLOR")]
    no_color: bool,

    /// Token output format
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => EXIT_USAGE,
            };
            // Nothing useful to do if the terminal is gone.
            let _ = err.print();
            return ExitCode::from(code);
        },
    };

    match run(cli) {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            let driver_err = err.downcast_ref::<DriverError>();
            match driver_err {
                Some(usage @ DriverError::Usage(_)) => eprintln!("{}", usage),
                _ => eprintln!("error: {:#}", err),
            }
            ExitCode::from(driver_err.map_or(EXIT_SOFTWARE, DriverError::exit_code))
        },
    }
}

/// Resolve settings, start logging, then scan a file or run the prompt.
///
/// # Returns
/// The process exit code on success.
fn run(cli: Cli) -> anyhow::Result<u8> {
    if cli.scripts.len() > 1 {
        return Err(DriverError::Usage("Usage: loxc [script]".to_string()).into());
    }

    let mut config = load_config(cli.config.as_deref())?;
    config.verbose |= cli.verbose;
    config.color &= !cli.no_color && std::io::stderr().is_terminal();
    if let Some(format) = cli.format {
        config.format = format;
    }

    init_logging(config.verbose, !config.color).context("failed to initialize logging")?;
    tracing::debug!(?config, "configuration resolved");

    let options = Options::from_config(&config);
    match cli.scripts.first() {
        Some(script) => {
            let report = run_file(script, &options)?;
            Ok(if report.had_error() { EXIT_DATA_ERR } else { 0 })
        },
        None => {
            Repl::new(&config.repl, options)?.run()?;
            Ok(0)
        },
    }
}

/// Initialize the logging system.
///
/// Logs go to stderr so stdout carries only tokens.
///
/// # Arguments
/// * `verbose` - Whether to enable verbose logging
/// * `no_color` - Whether to disable colored output
fn init_logging(verbose: bool, no_color: bool) -> anyhow::Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> loxc_drv::Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}
