//! Input and parsing helper functions for the CLI.
//!
//! This module provides utilities for:
//! - The interactive session prompt and add-entry form (`input`)
//! - Session line splitting and format parsing (`parsing`)

mod input;
mod parsing;

pub use input::{resolve_new_entry, SessionPrompt};
pub use parsing::{is_blank_or_comment, parse_output_format, split_line, OutputFormat};
