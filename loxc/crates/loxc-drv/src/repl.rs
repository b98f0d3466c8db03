//! Interactive prompt.
//!
//! Each line is scanned on its own: tokens are echoed, errors printed, and
//! an error on one line never affects the next. Lines starting with `.` are
//! prompt commands.

use std::io::Write;
use std::path::{Path, PathBuf};

use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::{Config as EditorConfig, Editor};

use crate::config::ReplConfig;
use crate::error::{DriverError, Result};
use crate::{run_source, Options};

/// Prompt commands that can be executed with a dot prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplCommand {
    /// Show the command list
    Help,
    /// Leave the prompt
    Exit,
    /// Clear the screen
    Clear,
    /// Show version information
    Version,
    /// Scan a script file
    Load,
}

impl ReplCommand {
    /// Parse a prompt command, returning it with its argument if any.
    pub fn parse(input: &str) -> Option<(Self, Option<&str>)> {
        let rest = input.trim().strip_prefix('.')?;

        let mut parts = rest.splitn(2, char::is_whitespace);
        let cmd = parts.next()?;
        let arg = parts.next().map(str::trim).filter(|arg| !arg.is_empty());

        // Exact names only; anything else after a dot is Lox source.
        match cmd {
            "help" => Some((ReplCommand::Help, arg)),
            "exit" => Some((ReplCommand::Exit, arg)),
            "clear" => Some((ReplCommand::Clear, arg)),
            "version" => Some((ReplCommand::Version, arg)),
            "load" => Some((ReplCommand::Load, arg)),
            _ => None,
        }
    }

    /// All commands with a one-line description, for `.help`.
    pub fn all_commands() -> &'static [(&'static str, &'static str)] {
        &[
            (".help", "Show this help message"),
            (".exit", "Exit the prompt (or press Ctrl-D)"),
            (".clear", "Clear the screen"),
            (".version", "Show version information"),
            (".load <file>", "Scan a script file"),
        ]
    }
}

/// What the prompt should do after a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOutcome {
    /// Read another line
    Continue,
    /// Leave the prompt
    Exit,
}

/// Handles one line of prompt input.
///
/// Source lines are scanned with a fresh error state. Only write failures
/// are returned as errors; a missing `.load` file is printed and the prompt
/// carries on.
pub fn eval_line<O, E>(
    line: &str,
    options: &Options,
    out: &mut O,
    err: &mut E,
) -> Result<LineOutcome>
where
    O: Write + ?Sized,
    E: Write + ?Sized,
{
    if line.trim().is_empty() {
        return Ok(LineOutcome::Continue);
    }

    let Some((cmd, arg)) = ReplCommand::parse(line) else {
        run_source(line, options, out, err)?;
        return Ok(LineOutcome::Continue);
    };

    match cmd {
        ReplCommand::Help => {
            writeln!(out, "Prompt commands:")?;
            for (name, description) in ReplCommand::all_commands() {
                writeln!(out, "  {:16} {}", name, description)?;
            }
            writeln!(out, "Anything else is scanned and its tokens printed.")?;
        },
        ReplCommand::Exit => return Ok(LineOutcome::Exit),
        ReplCommand::Clear => {
            write!(out, "\x1B[2J\x1B[H")?;
            out.flush()?;
        },
        ReplCommand::Version => {
            writeln!(out, "loxc {}", env!("CARGO_PKG_VERSION"))?;
        },
        ReplCommand::Load => match arg {
            Some(path) => load_file(Path::new(path), options, out, err)?,
            None => writeln!(err, "Error: .load requires a file path")?,
        },
    }
    Ok(LineOutcome::Continue)
}

fn load_file<O, E>(path: &Path, options: &Options, out: &mut O, err: &mut E) -> Result<()>
where
    O: Write + ?Sized,
    E: Write + ?Sized,
{
    match std::fs::read_to_string(path) {
        Ok(source) => {
            run_source(&source, options, out, err)?;
        },
        Err(source) => {
            let error = DriverError::ReadFile {
                path: path.to_path_buf(),
                source,
            };
            writeln!(err, "Error: {}", error)?;
        },
    }
    Ok(())
}

/// The interactive prompt.
pub struct Repl {
    editor: Editor<(), DefaultHistory>,
    history_path: PathBuf,
    prompt: String,
    options: Options,
}

impl Repl {
    /// Create a prompt and load its history.
    pub fn new(config: &ReplConfig, options: Options) -> Result<Self> {
        let editor_config = EditorConfig::builder()
            .history_ignore_dups(true)?
            .history_ignore_space(true)
            .max_history_size(config.max_history)?
            .auto_add_history(true)
            .build();

        let mut editor = Editor::with_config(editor_config)?;

        let history_path = config.history_path();
        if let Some(parent) = history_path.parent() {
            if let Err(err) = std::fs::create_dir_all(parent) {
                tracing::warn!(
                    path = %parent.display(),
                    error = %err,
                    "cannot create history directory"
                );
            }
        }
        if let Err(err) = editor.load_history(&history_path) {
            tracing::debug!(path = %history_path.display(), error = %err, "no history loaded");
        }

        Ok(Self {
            editor,
            history_path,
            prompt: config.prompt.clone(),
            options,
        })
    }

    /// Run the prompt until `.exit` or end of input.
    pub fn run(&mut self) -> Result<()> {
        let result = self.read_loop();

        if let Err(err) = self.editor.save_history(&self.history_path) {
            tracing::warn!(
                path = %self.history_path.display(),
                error = %err,
                "cannot save history"
            );
        }
        result
    }

    fn read_loop(&mut self) -> Result<()> {
        let stdout = std::io::stdout();
        let stderr = std::io::stderr();

        loop {
            match self.editor.readline(&self.prompt) {
                Ok(line) => {
                    let outcome =
                        eval_line(&line, &self.options, &mut stdout.lock(), &mut stderr.lock())?;
                    if outcome == LineOutcome::Exit {
                        return Ok(());
                    }
                },
                Err(ReadlineError::Interrupted) => continue,
                Err(ReadlineError::Eof) => return Ok(()),
                Err(err) => return Err(err.into()),
            }
        }
    }
}
