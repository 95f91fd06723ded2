//! Thread-safe handle around an in-memory ledger.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::clock::{Clock, SystemClock};
use crate::entry::{Entry, EntryId, NewEntry};
use crate::error::{LedgerError, Result};

use super::memory::InMemoryLedger;
use super::traits::LedgerStore;

/// Cloneable handle that serialises every mutation behind one lock.
///
/// Writers hold the write lock for the whole validate-assign-insert step;
/// readers take their snapshot under the read lock.
#[derive(Debug)]
pub struct SharedLedger<C: Clock = SystemClock> {
    inner: Arc<RwLock<InMemoryLedger<C>>>,
}

impl<C: Clock> Clone for SharedLedger<C> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl SharedLedger<SystemClock> {
    pub fn new() -> Self {
        Self::from_ledger(InMemoryLedger::new())
    }
}

impl Default for SharedLedger<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> SharedLedger<C> {
    pub fn from_ledger(ledger: InMemoryLedger<C>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(ledger)),
        }
    }

    pub fn add(&self, entry: NewEntry) -> Result<Entry> {
        self.write()?.add(entry)
    }

    pub fn remove(&self, id: EntryId) -> Result<bool> {
        Ok(self.write()?.remove(id))
    }

    pub fn get(&self, id: EntryId) -> Result<Option<Entry>> {
        Ok(self.read()?.get(id))
    }

    pub fn list(&self) -> Result<Vec<Entry>> {
        Ok(self.read()?.list())
    }

    pub fn len(&self) -> Result<usize> {
        Ok(self.read()?.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.read()?.is_empty())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, InMemoryLedger<C>>> {
        self.inner
            .read()
            .map_err(|_| LedgerError::Storage("ledger read lock poisoned".into()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, InMemoryLedger<C>>> {
        self.inner
            .write()
            .map_err(|_| LedgerError::Storage("ledger write lock poisoned".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::NaiveDate;
    use std::collections::HashSet;
    use std::thread;

    fn shared() -> SharedLedger<FixedClock> {
        let day = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        SharedLedger::from_ledger(InMemoryLedger::with_clock(FixedClock(day)))
    }

    #[test]
    fn test_concurrent_adds_get_unique_ids() {
        let ledger = shared();
        let handles: Vec<_> = (0..8)
            .map(|worker| {
                let ledger = ledger.clone();
                thread::spawn(move || {
                    (0..50)
                        .map(|i| {
                            ledger
                                .add(NewEntry::expense(
                                    format!("w{} #{}", worker, i),
                                    "1.00",
                                    "Load",
                                ))
                                .unwrap()
                                .id()
                        })
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let mut ids = HashSet::new();
        for handle in handles {
            for id in handle.join().unwrap() {
                assert!(ids.insert(id), "duplicate id {}", id);
            }
        }

        assert_eq!(ids.len(), 400);
        assert_eq!(ledger.len().unwrap(), 400);
    }

    #[test]
    fn test_clones_share_state() {
        let a = shared();
        let b = a.clone();
        let entry = a.add(NewEntry::income("Gift", "20", "Other")).unwrap();

        assert_eq!(b.get(entry.id()).unwrap(), Some(entry.clone()));
        assert!(b.remove(entry.id()).unwrap());
        assert!(a.is_empty().unwrap());
        assert!(!a.remove(entry.id()).unwrap());
    }

    #[test]
    fn test_poisoned_lock_reports_storage_error() {
        let ledger = shared();
        let poisoner = ledger.clone();
        let _ = thread::spawn(move || {
            let _guard = poisoner.inner.write().unwrap();
            panic!("poison the lock");
        })
        .join();

        assert!(matches!(ledger.list(), Err(LedgerError::Storage(_))));
    }
}
