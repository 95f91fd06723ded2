//! Ledger store trait definition.
//!
//! The `LedgerStore` trait is the seam between the session that drives the
//! ledger and the collection that holds it.

use crate::entry::{Entry, EntryId, NewEntry};
use crate::error::Result;

/// Owner of the ordered entry collection.
///
/// All implementations must ensure:
/// - Every stored entry passed validation
/// - Identifiers are unique and never reused
/// - New entries come first (most-recent-first order)
pub trait LedgerStore {
    /// Validate and insert a new entry at the front of the collection.
    ///
    /// # Returns
    ///
    /// Returns a copy of the stored entry, with its id and date assigned.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::Validation` if:
    /// - Description or category is empty after trimming
    /// - Amount is non-numeric, non-finite, zero or negative
    ///
    /// The store is unchanged when an error is returned.
    fn add(&mut self, entry: NewEntry) -> Result<Entry>;

    /// Remove the entry with the given id.
    ///
    /// Returns `true` if an entry was removed, `false` if none matched.
    fn remove(&mut self, id: EntryId) -> bool;

    /// Get an entry by ID.
    fn get(&self, id: EntryId) -> Option<Entry>;

    /// Snapshot of all entries, most recent first.
    fn list(&self) -> Vec<Entry>;

    /// Number of stored entries.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
