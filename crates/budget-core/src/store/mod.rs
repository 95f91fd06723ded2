//! Ledger store: ownership, identity and ordering of entries.

mod memory;
mod shared;
mod traits;

pub use memory::InMemoryLedger;
pub use shared::SharedLedger;
pub use traits::LedgerStore;
