//! Output formatting helpers for the CLI.
//!
//! This module provides formatting utilities for displaying entries
//! and totals in various formats (JSON, table, plain text).

mod json;
mod text;

pub use json::{entries_json, entry_json, print_json, summary_json};
pub use text::{print_entry_list, render_entry, render_entry_list, render_summary};
