//! # Budget Core
//!
//! Core library for Budget - a single-user income and expense ledger.
//!
//! This crate provides the ledger model and its derived state independent
//! of any presentation layer. Nothing is persisted; a ledger lives for the
//! duration of the process that owns it.
//!
//! ## Architecture
//!
//! - **entry**: Entry model and input validation
//! - **store**: Ledger store trait, in-memory and lock-guarded implementations
//! - **derive**: Totals, balance and text filtering over entry snapshots
//! - **clock**: Source of the calendar day stamped on new entries

pub mod clock;
pub mod derive;
pub mod entry;
pub mod error;
pub mod store;

pub use clock::{Clock, FixedClock, SystemClock};
pub use derive::{
    balance, filter, summarize, total_expense, total_income, EntryQuery, Standing, Summary,
};
pub use entry::{Amount, Entry, EntryId, Kind, NewEntry, RawAmount};
pub use error::{LedgerError, Result, ValidationError};
pub use store::{InMemoryLedger, LedgerStore, SharedLedger};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
