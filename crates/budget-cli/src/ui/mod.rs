//! UI primitives for the Budget CLI.
//!
//! This module provides:
//! - **Context**: Terminal detection and output mode routing (json, plain, pretty)
//! - **Theme**: Badge tokens, color palette, symbols
//! - **Render**: Tables, headers, receipts, hints
//! - **Format**: String and money utilities (truncate, currency, dates)

mod context;
pub mod format;
pub mod render;
pub mod theme;

pub use context::{OutputMode, UiContext};
pub use theme::Badge;

pub use render::{badge, header, hint, kv, print, print_error, receipt, table, Column};

pub use format::{format_amount, format_currency, format_date, single_line, truncate};
