//! Interactive input: the session prompt and the add-entry form.

use dialoguer::theme::ColorfulTheme;
use dialoguer::{BasicHistory, Completion, Input, Select};

use budget_core::{Amount, Kind, NewEntry};

use crate::cli::{AddArgs, SESSION_COMMANDS};
use crate::errors::CliError;

/// Completes the first word of a session line to a command name.
pub struct CommandCompletion {
    names: &'static [&'static str],
}

impl CommandCompletion {
    pub fn new() -> Self {
        Self {
            names: SESSION_COMMANDS,
        }
    }
}

impl Completion for CommandCompletion {
    fn get(&self, input: &str) -> Option<String> {
        if input.is_empty() || input.contains(char::is_whitespace) {
            return None;
        }
        self.names
            .iter()
            .find(|name| name.starts_with(input) && **name != input)
            .map(|name| format!("{} ", name))
    }
}

/// Line reader for interactive sessions, with history and completion.
pub struct SessionPrompt {
    theme: ColorfulTheme,
    history: BasicHistory,
    completion: CommandCompletion,
}

impl SessionPrompt {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
            history: BasicHistory::new().max_entries(200).no_duplicates(true),
            completion: CommandCompletion::new(),
        }
    }

    /// Read the next line. `None` means the user closed the prompt.
    pub fn read_line(&mut self) -> Option<String> {
        let result: Result<String, dialoguer::Error> = Input::with_theme(&self.theme)
            .with_prompt("budget")
            .allow_empty(true)
            .history_with(&mut self.history)
            .completion_with(&self.completion)
            .interact_text();
        match result {
            Ok(line) => Some(line),
            Err(err) => {
                tracing::debug!(error = %err, "session prompt closed");
                None
            }
        }
    }
}

/// Build a new entry from `add` arguments.
///
/// Fields missing from the command line are asked for when `interactive`,
/// mirroring a form; otherwise they are reported as missing.
pub fn resolve_new_entry(
    args: &AddArgs,
    default_kind: Kind,
    interactive: bool,
) -> anyhow::Result<NewEntry> {
    let complete = args.description.is_some() && args.amount.is_some() && args.category.is_some();
    if !complete && !interactive {
        let mut missing = Vec::new();
        if args.description.is_none() {
            missing.push("DESCRIPTION");
        }
        if args.amount.is_none() {
            missing.push("AMOUNT");
        }
        if args.category.is_none() {
            missing.push("CATEGORY");
        }
        return Err(CliError::invalid_input_with_hint(
            format!("Missing {}", missing.join(", ")),
            "Usage: add [-k KIND] DESCRIPTION AMOUNT CATEGORY",
        )
        .into());
    }

    let theme = ColorfulTheme::default();
    let kind = match args.kind {
        Some(kind) => kind,
        None if !complete => prompt_kind(&theme, default_kind)?,
        None => default_kind,
    };
    let description = match &args.description {
        Some(value) => value.clone(),
        None => prompt_label(&theme, "Description", "description")?,
    };
    let amount = match &args.amount {
        Some(value) => value.clone(),
        None => prompt_amount(&theme)?,
    };
    let category = match &args.category {
        Some(value) => value.clone(),
        None => prompt_label(&theme, "Category", "category")?,
    };

    Ok(NewEntry::new(description, amount, kind, category))
}

fn prompt_kind(theme: &ColorfulTheme, default_kind: Kind) -> anyhow::Result<Kind> {
    let options = [Kind::Expense, Kind::Income];
    let default_idx = options.iter().position(|k| *k == default_kind).unwrap_or(0);
    let selection = Select::with_theme(theme)
        .with_prompt("Type")
        .items(&options)
        .default(default_idx)
        .interact()?;
    Ok(options[selection])
}

fn prompt_label(theme: &ColorfulTheme, prompt: &str, field: &str) -> anyhow::Result<String> {
    let field = field.to_string();
    let value: String = Input::with_theme(theme)
        .with_prompt(prompt)
        .validate_with(move |input: &String| -> Result<(), String> {
            if input.trim().is_empty() {
                Err(format!("{} must not be empty", field))
            } else {
                Ok(())
            }
        })
        .interact_text()?;
    Ok(value)
}

fn prompt_amount(theme: &ColorfulTheme) -> anyhow::Result<String> {
    let value: String = Input::with_theme(theme)
        .with_prompt("Amount")
        .validate_with(|input: &String| -> Result<(), String> {
            Amount::parse(input).map(|_| ()).map_err(|e| e.to_string())
        })
        .interact_text()?;
    Ok(value)
}
