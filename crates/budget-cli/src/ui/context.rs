//! What the session is attached to and how it should print.
//!
//! A session reads commands from stdin and writes results to stdout, and
//! the two ends are judged separately: a script piped into a terminal
//! still gets tables, and a prompt whose output is redirected still
//! prompts.

use std::io::IsTerminal;

use crate::cli::Cli;
use crate::helpers::{parse_output_format, OutputFormat};

/// How results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// One JSON document per command
    Json,
    /// `key=value` lines and tab-separated rows, stable for scripts
    #[default]
    Plain,
    /// Tables, badges and currency formatting
    Pretty,
}

impl OutputMode {
    /// `--json` wins, then an explicit `--format`, then the terminal.
    ///
    /// `--format table` asks for tables even when stdout is piped.
    pub fn resolve(json: bool, format: Option<OutputFormat>, terminal: &Terminal) -> Self {
        match (json, format) {
            (true, _) => Self::Json,
            (false, Some(OutputFormat::Plain)) => Self::Plain,
            (false, Some(OutputFormat::Table)) => Self::Pretty,
            (false, None) if terminal.stdout_tty && !terminal.dumb => Self::Pretty,
            (false, None) => Self::Plain,
        }
    }

    pub fn is_json(&self) -> bool {
        matches!(self, Self::Json)
    }

    pub fn is_pretty(&self) -> bool {
        matches!(self, Self::Pretty)
    }
}

/// Facts about the process's streams and environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Terminal {
    pub stdin_tty: bool,
    pub stdout_tty: bool,
    /// `TERM=dumb`
    pub dumb: bool,
    /// `NO_COLOR` is set
    pub no_color: bool,
    pub columns: Option<usize>,
}

impl Terminal {
    pub fn detect() -> Self {
        let stdout_tty = std::io::stdout().is_terminal();
        Self {
            stdin_tty: std::io::stdin().is_terminal(),
            stdout_tty,
            dumb: std::env::var("TERM").is_ok_and(|term| term == "dumb"),
            no_color: std::env::var_os("NO_COLOR").is_some(),
            columns: columns(stdout_tty),
        }
    }
}

/// Resolved presentation settings for one session.
#[derive(Debug, Clone)]
pub struct UiContext {
    pub color: bool,
    pub unicode: bool,
    /// Table width in columns
    pub width: usize,
    pub mode: OutputMode,
    /// Printed before formatted amounts in pretty mode
    pub currency_symbol: String,
    /// Commands come from a prompt and missing `add` fields may be asked for
    pub interactive: bool,
}

impl UiContext {
    /// Resolve settings from the global flags and the detected terminal.
    ///
    /// An invalid `--format` is reported by `main`; here it counts as absent.
    pub fn resolve(cli: &Cli, terminal: &Terminal) -> Self {
        let format = parse_output_format(cli.format.as_deref()).ok().flatten();
        Self {
            color: terminal.stdout_tty && !terminal.dumb && !terminal.no_color && !cli.no_color,
            unicode: !cli.ascii,
            width: terminal.columns.unwrap_or(80),
            mode: OutputMode::resolve(cli.json, format, terminal),
            currency_symbol: "$".to_string(),
            interactive: terminal.stdin_tty && !cli.no_input,
        }
    }

    pub fn detect(cli: &Cli) -> Self {
        Self::resolve(cli, &Terminal::detect())
    }

    pub fn with_currency_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.currency_symbol = symbol.into();
        self
    }
}

/// `COLUMNS`, else the window size of a terminal stdout.
fn columns(stdout_tty: bool) -> Option<usize> {
    let from_env = std::env::var("COLUMNS")
        .ok()
        .and_then(|value| value.parse::<usize>().ok())
        .filter(|width| *width > 0);
    if from_env.is_some() || !stdout_tty {
        return from_env;
    }

    #[cfg(unix)]
    {
        let mut size = std::mem::MaybeUninit::<libc::winsize>::uninit();
        // SAFETY: TIOCGWINSZ only writes a winsize into the pointer
        let rc = unsafe { libc::ioctl(libc::STDOUT_FILENO, libc::TIOCGWINSZ, size.as_mut_ptr()) };
        if rc == 0 {
            // SAFETY: ioctl returned success, so size is initialised
            let size = unsafe { size.assume_init() };
            if size.ws_col > 0 {
                return Some(usize::from(size.ws_col));
            }
        }
    }

    None
}
