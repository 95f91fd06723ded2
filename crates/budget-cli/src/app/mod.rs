//! Application-level plumbing for the Budget CLI.
//!
//! This module provides:
//! - The application context (CLI args, config, UI context)
//! - The session loop that reads and dispatches command lines

mod context;
mod session;

pub use context::{AppContext, ZonedClock};
pub use session::{Flow, Session};
