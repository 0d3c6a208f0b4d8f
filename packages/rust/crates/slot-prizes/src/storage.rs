//! Storage backends for the current prize set.

use std::ops::Deref;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::Serialize;

use crate::prize::Prize;

/// Read-only view of the prize set at one point in time.
///
/// Cloning is cheap; the records are shared, never copied.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrizeSnapshot {
    /// Incremented by every accepted replace. The initial set is revision 0.
    pub revision: u64,
    /// Records in their stored order.
    pub prizes: Arc<[Prize]>,
}

impl PrizeSnapshot {
    /// Wrap `prizes` as a snapshot at `revision`.
    #[must_use]
    pub fn new(revision: u64, prizes: Vec<Prize>) -> Self {
        Self {
            revision,
            prizes: prizes.into(),
        }
    }

    /// Owned copy of the records.
    #[must_use]
    pub fn to_vec(&self) -> Vec<Prize> {
        self.prizes.to_vec()
    }
}

impl Deref for PrizeSnapshot {
    type Target = [Prize];

    fn deref(&self) -> &Self::Target {
        &self.prizes
    }
}

/// Backend holding the one current snapshot.
///
/// Implementations must make `swap` atomic with respect to `load`: a reader sees
/// either the complete previous set or the complete new one.
pub trait PrizeStorage: Send + Sync {
    /// Backend identifier for logs and health output.
    fn backend_name(&self) -> &'static str;

    /// Current snapshot.
    fn load(&self) -> PrizeSnapshot;

    /// Install `prizes` as the current set and return the new snapshot.
    ///
    /// Callers validate before swapping; backends store what they are given.
    fn swap(&self, prizes: Vec<Prize>) -> PrizeSnapshot;
}

/// Process-local backend. State lives for the lifetime of the process only.
#[derive(Debug)]
pub struct InMemoryPrizeStorage {
    current: RwLock<PrizeSnapshot>,
}

impl InMemoryPrizeStorage {
    /// Create a backend seeded with `initial` at revision 0.
    #[must_use]
    pub fn new(initial: Vec<Prize>) -> Self {
        Self {
            current: RwLock::new(PrizeSnapshot::new(0, initial)),
        }
    }

    fn read_current(&self) -> RwLockReadGuard<'_, PrizeSnapshot> {
        self.current.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_current(&self) -> RwLockWriteGuard<'_, PrizeSnapshot> {
        self.current.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl PrizeStorage for InMemoryPrizeStorage {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    fn load(&self) -> PrizeSnapshot {
        self.read_current().clone()
    }

    fn swap(&self, prizes: Vec<Prize>) -> PrizeSnapshot {
        let mut current = self.write_current();
        let next = PrizeSnapshot::new(current.revision.wrapping_add(1), prizes);
        *current = next.clone();
        next
    }
}
