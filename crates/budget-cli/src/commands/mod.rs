//! Handlers for session commands and top-level subcommands.

pub mod entries;
pub mod misc;
pub mod summary;
