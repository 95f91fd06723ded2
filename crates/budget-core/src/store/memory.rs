//! In-memory ledger store.

use std::collections::VecDeque;

use tracing::{debug, warn};

use crate::clock::{Clock, SystemClock};
use crate::entry::{Entry, EntryId, NewEntry};
use crate::error::Result;

use super::traits::LedgerStore;

/// Session-lifetime ledger held in process memory.
///
/// Identifiers come from a counter that only advances on a successful add,
/// so they are unique regardless of how quickly entries are inserted.
#[derive(Debug)]
pub struct InMemoryLedger<C: Clock = SystemClock> {
    entries: VecDeque<Entry>,
    next_id: u64,
    clock: C,
}

impl InMemoryLedger<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for InMemoryLedger<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> InMemoryLedger<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            entries: VecDeque::new(),
            next_id: 1,
            clock,
        }
    }

    /// Borrow the entries in order without copying them.
    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    fn allocate_id(&mut self) -> EntryId {
        let id = EntryId::new(self.next_id);
        self.next_id += 1;
        id
    }
}

impl<C: Clock> LedgerStore for InMemoryLedger<C> {
    fn add(&mut self, entry: NewEntry) -> Result<Entry> {
        let checked = entry.check().map_err(|err| {
            warn!(field = err.field(), error = %err, "rejected new entry");
            err
        })?;

        let id = self.allocate_id();
        let entry = checked.into_entry(id, self.clock.today());
        debug!(
            id = %entry.id(),
            kind = %entry.kind(),
            amount = %entry.amount(),
            "entry added"
        );
        self.entries.push_front(entry.clone());
        Ok(entry)
    }

    fn remove(&mut self, id: EntryId) -> bool {
        match self.entries.iter().position(|entry| entry.id() == id) {
            Some(index) => {
                self.entries.remove(index);
                debug!(id = %id, "entry removed");
                true
            }
            None => {
                debug!(id = %id, "remove skipped, entry not found");
                false
            }
        }
    }

    fn get(&self, id: EntryId) -> Option<Entry> {
        self.entries.iter().find(|entry| entry.id() == id).cloned()
    }

    fn list(&self) -> Vec<Entry> {
        self.entries.iter().cloned().collect()
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}
