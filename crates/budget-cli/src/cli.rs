use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use budget_core::{EntryId, Kind, VERSION};

/// Budget - track income and expenses for the length of a session
#[derive(Parser)]
#[command(name = "budget")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the config file
    #[arg(long, global = true, env = "BUDGET_CONFIG")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON (one document per command)
    #[arg(long, global = true)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, global = true, value_name = "FORMAT")]
    pub format: Option<String>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Use ASCII symbols only
    #[arg(long, global = true)]
    pub ascii: bool,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable interactive prompts
    #[arg(long, global = true)]
    pub no_input: bool,

    /// Stop a scripted session at the first failing command
    #[arg(long, global = true)]
    pub fail_fast: bool,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start a ledger session (default)
    Session,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// One line typed into a session.
#[derive(Parser, Debug)]
#[command(name = "budget", no_binary_name = true, disable_version_flag = true)]
#[command(about = "Commands available inside a budget session")]
pub struct SessionLine {
    #[command(subcommand)]
    pub command: SessionCommand,
}

/// Arguments for the `add` command
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Entry kind (income or expense); defaults to the configured kind
    #[arg(short, long, value_parser = parse_kind)]
    pub kind: Option<Kind>,

    /// What the money was for
    #[arg(value_name = "DESCRIPTION")]
    pub description: Option<String>,

    /// Positive amount, e.g. 49.99
    #[arg(value_name = "AMOUNT", allow_hyphen_values = true)]
    pub amount: Option<String>,

    /// Free-text category
    #[arg(value_name = "CATEGORY")]
    pub category: Option<String>,
}

/// Arguments for the `remove` command
#[derive(Args, Debug)]
pub struct RemoveArgs {
    /// Entry ID
    #[arg(value_name = "ID", value_parser = parse_entry_id)]
    pub id: EntryId,
}

/// Arguments for the `show` command
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Entry ID
    #[arg(value_name = "ID", value_parser = parse_entry_id)]
    pub id: EntryId,
}

/// Arguments for the `list` command
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only entries of this kind
    #[arg(short, long, value_parser = parse_kind)]
    pub kind: Option<Kind>,

    /// Limit number of results
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Show every entry regardless of the configured limit
    #[arg(long, conflicts_with = "limit")]
    pub all: bool,
}

/// Arguments for the `search` command
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Text matched against description and category (case-insensitive)
    #[arg(value_name = "QUERY", default_value = "")]
    pub query: String,

    /// Only entries of this kind
    #[arg(short, long, value_parser = parse_kind)]
    pub kind: Option<Kind>,

    /// Limit number of results
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Show every match regardless of the configured limit
    #[arg(long, conflicts_with = "limit")]
    pub all: bool,
}

/// Arguments for the `export` command
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Pretty-print the JSON document
    #[arg(long)]
    pub pretty: bool,
}

#[derive(Subcommand, Debug)]
pub enum SessionCommand {
    /// Add an income or expense entry
    Add(AddArgs),

    /// Remove an entry by ID
    #[command(visible_aliases = ["rm", "delete"])]
    Remove(RemoveArgs),

    /// Show a single entry
    Show(ShowArgs),

    /// List entries, most recent first
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// Search entries by description or category
    #[command(visible_alias = "find")]
    Search(SearchArgs),

    /// Show income, expense and balance totals
    #[command(visible_alias = "totals")]
    Summary,

    /// Print all entries and totals as JSON
    Export(ExportArgs),

    /// End the session
    #[command(visible_alias = "exit")]
    Quit,
}

/// Names offered by tab completion inside a session.
pub const SESSION_COMMANDS: &[&str] = &[
    "add", "remove", "rm", "delete", "show", "list", "ls", "search", "find", "summary", "totals",
    "export", "help", "quit", "exit",
];

fn parse_kind(value: &str) -> Result<Kind, String> {
    value.parse::<Kind>().map_err(|e| e.to_string())
}

fn parse_entry_id(value: &str) -> Result<EntryId, String> {
    value.parse::<EntryId>().map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(line: &[&str]) -> Result<SessionCommand, clap::Error> {
        SessionLine::try_parse_from(line).map(|parsed| parsed.command)
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
        SessionLine::command().debug_assert();
    }

    #[test]
    fn test_add_positional_fields() {
        let cmd = parse(&["add", "-k", "income", "Salary", "1000.00", "Work"]).unwrap();
        match cmd {
            SessionCommand::Add(args) => {
                assert_eq!(args.kind, Some(Kind::Income));
                assert_eq!(args.description.as_deref(), Some("Salary"));
                assert_eq!(args.amount.as_deref(), Some("1000.00"));
                assert_eq!(args.category.as_deref(), Some("Work"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_add_negative_amount_reaches_validation() {
        let cmd = parse(&["add", "Refund", "-5", "Misc"]).unwrap();
        match cmd {
            SessionCommand::Add(args) => assert_eq!(args.amount.as_deref(), Some("-5")),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_remove_aliases() {
        for name in ["remove", "rm", "delete"] {
            let cmd = parse(&[name, "3"]).unwrap();
            assert!(matches!(cmd, SessionCommand::Remove(RemoveArgs { id }) if id == EntryId::new(3)));
        }
    }

    #[test]
    fn test_bad_kind_is_rejected() {
        assert!(parse(&["list", "--kind", "transfer"]).is_err());
    }

    #[test]
    fn test_search_defaults_to_empty_query() {
        let cmd = parse(&["search"]).unwrap();
        assert!(matches!(cmd, SessionCommand::Search(SearchArgs { ref query, .. }) if query.is_empty()));
    }

    #[test]
    fn test_list_and_search_accept_all() {
        for name in ["list", "search"] {
            assert!(parse(&[name, "--all"]).is_ok(), "{} --all", name);
            assert!(parse(&[name, "--all", "-n", "2"]).is_err());
        }
        let cmd = parse(&["find", "rent", "--all"]).unwrap();
        assert!(matches!(cmd, SessionCommand::Search(SearchArgs { all: true, .. })));
    }
}
