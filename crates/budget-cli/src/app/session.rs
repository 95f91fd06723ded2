//! The ledger session: reads command lines and dispatches them.

use std::io::BufRead;

use clap::error::ErrorKind;
use clap::Parser;

use budget_core::{InMemoryLedger, LedgerStore};

use crate::cli::{SessionCommand, SessionLine};
use crate::commands::{entries, summary};
use crate::constants::exit_codes;
use crate::errors::CliError;
use crate::helpers::{is_blank_or_comment, split_line, SessionPrompt};
use crate::ui::{badge, header, print, print_error, Badge};

use super::context::{AppContext, ZonedClock};

/// What the session does after a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// A ledger that lives for one session.
pub struct Session<'a, 'c> {
    ctx: &'a AppContext<'c>,
    ledger: InMemoryLedger<ZonedClock>,
}

impl<'a, 'c> Session<'a, 'c> {
    pub fn new(ctx: &'a AppContext<'c>, clock: ZonedClock) -> Self {
        Self {
            ctx,
            ledger: InMemoryLedger::with_clock(clock),
        }
    }

    pub fn ledger(&self) -> &InMemoryLedger<ZonedClock> {
        &self.ledger
    }

    /// Run until the user quits or input ends. Returns the process exit code.
    pub fn run(&mut self) -> i32 {
        if self.ctx.interactive() {
            self.run_interactive();
            exit_codes::SUCCESS
        } else {
            let stdin = std::io::stdin();
            self.run_script(stdin.lock())
        }
    }

    fn run_interactive(&mut self) {
        let ui = self.ctx.ui();
        if !self.ctx.quiet() && ui.mode.is_pretty() {
            print(ui, &header(ui, "session", None));
            print(
                ui,
                &badge(
                    ui,
                    Badge::Info,
                    "Entries are kept until the session ends. Type `help` for commands.",
                ),
            );
        }

        let mut prompt = SessionPrompt::new();
        while let Some(line) = prompt.read_line() {
            match self.execute_line(&line) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => break,
                Err(err) => {
                    self.report(&err, None);
                }
            }
        }
        tracing::debug!(entries = self.ledger().len(), "session ended");
    }

    /// Execute lines from a reader, one command per line.
    ///
    /// With `--fail-fast` the first failing line ends the session with that
    /// error's exit code.
    pub fn run_script<R: BufRead>(&mut self, reader: R) -> i32 {
        for (index, line) in reader.lines().enumerate() {
            let line_no = index + 1;
            let line = match line {
                Ok(line) => line,
                Err(err) => {
                    let ui = self.ctx.ui();
                    print_error(ui, &format!("Failed to read input: {}", err), None);
                    return exit_codes::FAILURE;
                }
            };
            match self.execute_line(&line) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => break,
                Err(err) => {
                    let code = self.report(&err, Some(line_no));
                    if self.ctx.cli().fail_fast {
                        return code;
                    }
                }
            }
        }
        tracing::debug!(entries = self.ledger().len(), "session ended");
        exit_codes::SUCCESS
    }

    /// Parse and run a single command line.
    pub fn execute_line(&mut self, line: &str) -> anyhow::Result<Flow> {
        if is_blank_or_comment(line) {
            return Ok(Flow::Continue);
        }

        let words = split_line(line).map_err(|e| CliError::invalid_input(e.to_string()))?;
        let parsed = match SessionLine::try_parse_from(&words) {
            Ok(parsed) => parsed,
            Err(err) => return self.handle_parse_error(err),
        };
        self.dispatch(parsed.command)
    }

    fn dispatch(&mut self, command: SessionCommand) -> anyhow::Result<Flow> {
        let ctx = self.ctx;
        match command {
            SessionCommand::Add(args) => entries::handle_add(ctx, &mut self.ledger, &args)?,
            SessionCommand::Remove(args) => entries::handle_remove(ctx, &mut self.ledger, &args)?,
            SessionCommand::Show(args) => entries::handle_show(ctx, &self.ledger, &args)?,
            SessionCommand::List(args) => entries::handle_list(ctx, &self.ledger, &args)?,
            SessionCommand::Search(args) => entries::handle_search(ctx, &self.ledger, &args)?,
            SessionCommand::Summary => summary::handle_summary(ctx, &self.ledger)?,
            SessionCommand::Export(args) => entries::handle_export(&self.ledger, &args)?,
            SessionCommand::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn handle_parse_error(&self, err: clap::Error) -> anyhow::Result<Flow> {
        match err.kind() {
            ErrorKind::DisplayHelp
            | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
            | ErrorKind::DisplayVersion => {
                if !self.ctx.ui().mode.is_json() {
                    print!("{}", err);
                }
                Ok(Flow::Continue)
            }
            _ => {
                let rendered = err.to_string();
                let message = rendered
                    .lines()
                    .next()
                    .unwrap_or_default()
                    .trim_start_matches("error: ")
                    .to_string();
                Err(CliError::invalid_input_with_hint(
                    message,
                    "Type `help` for commands or `<command> --help` for usage.",
                )
                .into())
            }
        }
    }

    /// Print an error and return its exit code.
    fn report(&self, err: &anyhow::Error, line_no: Option<usize>) -> i32 {
        let classified = CliError::classify(err);
        let message = match line_no {
            Some(n) => format!("line {}: {}", n, classified),
            None => classified.to_string(),
        };
        tracing::debug!(error = %err, line = ?line_no, "session command failed");
        print_error(self.ctx.ui(), &message, classified.hint());
        classified.exit_code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use crate::config::BudgetConfig;
    use std::io::Cursor;

    fn cli(args: &[&str]) -> Cli {
        let mut argv = vec!["budget", "--format", "plain", "--no-input", "-q"];
        argv.extend_from_slice(args);
        Cli::parse_from(argv)
    }

    #[test]
    fn test_script_builds_ledger() {
        let cli = cli(&[]);
        let ctx = AppContext::new(&cli, BudgetConfig::default());
        let mut session = Session::new(&ctx, ZonedClock::default());
        let script = "add -k income Salary 1000.00 Work\n\
                      # comment\n\
                      \n\
                      add Rent 250.50 Housing\n\
                      add 'Weekly groceries' 49.99 Food\n";
        assert_eq!(session.run_script(Cursor::new(script)), exit_codes::SUCCESS);

        let entries = session.ledger().list();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].description(), "Weekly groceries");
        assert!(entries[2].is_income());
    }

    #[test]
    fn test_errors_continue_without_fail_fast() {
        let cli = cli(&[]);
        let ctx = AppContext::new(&cli, BudgetConfig::default());
        let mut session = Session::new(&ctx, ZonedClock::default());
        let script = "add Coffee -3 Food\nbogus\nadd Coffee 3 Food\n";
        assert_eq!(session.run_script(Cursor::new(script)), exit_codes::SUCCESS);
        assert_eq!(session.ledger().len(), 1);
    }

    #[test]
    fn test_fail_fast_stops_at_invalid_input() {
        let cli = cli(&["--fail-fast"]);
        let ctx = AppContext::new(&cli, BudgetConfig::default());
        let mut session = Session::new(&ctx, ZonedClock::default());
        let script = "add Coffee 0 Food\nadd Tea 2 Food\n";
        assert_eq!(
            session.run_script(Cursor::new(script)),
            exit_codes::INVALID_INPUT
        );
        assert!(session.ledger().is_empty());
    }

    #[test]
    fn test_fail_fast_show_missing_is_not_found() {
        let cli = cli(&["--fail-fast"]);
        let ctx = AppContext::new(&cli, BudgetConfig::default());
        let mut session = Session::new(&ctx, ZonedClock::default());
        assert_eq!(
            session.run_script(Cursor::new("show 42\n")),
            exit_codes::NOT_FOUND
        );
    }

    #[test]
    fn test_quit_stops_reading() {
        let cli = cli(&[]);
        let ctx = AppContext::new(&cli, BudgetConfig::default());
        let mut session = Session::new(&ctx, ZonedClock::default());
        let script = "add Rent 10 Housing\nquit\nadd Rent 20 Housing\n";
        session.run_script(Cursor::new(script));
        assert_eq!(session.ledger().len(), 1);
    }

    #[test]
    fn test_remove_missing_is_not_an_error() {
        let cli = cli(&[]);
        let ctx = AppContext::new(&cli, BudgetConfig::default());
        let mut session = Session::new(&ctx, ZonedClock::default());
        assert_eq!(session.execute_line("remove 7").unwrap(), Flow::Continue);
        assert_eq!(session.execute_line("rm #7").unwrap(), Flow::Continue);
    }

    #[test]
    fn test_unterminated_quote_is_invalid_input() {
        let cli = cli(&[]);
        let ctx = AppContext::new(&cli, BudgetConfig::default());
        let mut session = Session::new(&ctx, ZonedClock::default());
        let err = session.execute_line("add 'Rent 10 Housing").unwrap_err();
        assert_eq!(CliError::classify(&err).exit_code(), exit_codes::INVALID_INPUT);
    }

    #[test]
    fn test_help_is_not_an_error() {
        let cli = cli(&[]);
        let ctx = AppContext::new(&cli, BudgetConfig::default());
        let mut session = Session::new(&ctx, ZonedClock::default());
        assert_eq!(session.execute_line("help").unwrap(), Flow::Continue);
        assert_eq!(session.execute_line("add --help").unwrap(), Flow::Continue);
    }
}
