//! # Identifier Generator
//!
//! Monotonic identifier allocation for items and transactions.
//!
//! Identifiers are unique for the lifetime of one running store instance.
//! The counter is atomic so concurrent mutation requests never collide, and
//! it is seeded at store initialization past every identifier already present
//! in the loaded dataset. Uniqueness never depends on clock resolution.

use crate::{ItemId, TxnId};
use std::sync::atomic::{AtomicU64, Ordering};

/// Atomically incremented identifier counter.
///
/// Items and transactions draw from the same sequence; the generator does not
/// distinguish what an identifier will be used for.
#[derive(Debug)]
pub struct IdGenerator {
    next: AtomicU64,
}

impl IdGenerator {
    /// Create a generator starting at 1.
    #[must_use]
    pub fn new() -> Self {
        Self::seeded(1)
    }

    /// Create a generator whose first identifier is `next`.
    #[must_use]
    pub fn seeded(next: u64) -> Self {
        Self {
            next: AtomicU64::new(next.max(1)),
        }
    }

    /// Create a generator seeded past every identifier in the given sets.
    pub fn seeded_after(item_ids: impl Iterator<Item = u64>, txn_ids: impl Iterator<Item = u64>) -> Self {
        let max_seen = item_ids.chain(txn_ids).max().unwrap_or(0);
        Self::seeded(max_seen.saturating_add(1))
    }

    /// Allocate a fresh item identifier.
    #[must_use]
    pub fn next_item_id(&self) -> ItemId {
        ItemId(self.next_raw())
    }

    /// Allocate a fresh transaction identifier.
    #[must_use]
    pub fn next_txn_id(&self) -> TxnId {
        TxnId(self.next_raw())
    }

    fn next_raw(&self) -> u64 {
        self.next.fetch_add(1, Ordering::Relaxed)
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;
    use std::sync::Arc;

    #[test]
    fn identifiers_are_sequential() {
        let ids = IdGenerator::new();
        assert_eq!(ids.next_item_id(), ItemId(1));
        assert_eq!(ids.next_txn_id(), TxnId(2));
        assert_eq!(ids.next_item_id(), ItemId(3));
    }

    #[test]
    fn seeded_after_skips_existing_ids() {
        let ids = IdGenerator::seeded_after([1, 10, 3].into_iter(), [8, 2].into_iter());
        assert_eq!(ids.next_item_id(), ItemId(11));
    }

    #[test]
    fn seeded_after_empty_starts_at_one() {
        let ids = IdGenerator::seeded_after(std::iter::empty(), std::iter::empty());
        assert_eq!(ids.next_item_id(), ItemId(1));
    }

    #[test]
    fn concurrent_allocation_never_collides() {
        let ids = Arc::new(IdGenerator::new());
        let mut handles = Vec::new();

        for _ in 0..8 {
            let ids = Arc::clone(&ids);
            handles.push(std::thread::spawn(move || {
                (0..100).map(|_| ids.next_item_id().0).collect::<Vec<_>>()
            }));
        }

        let mut seen = BTreeSet::new();
        for handle in handles {
            for id in handle.join().expect("thread") {
                assert!(seen.insert(id), "duplicate identifier {id}");
            }
        }
        assert_eq!(seen.len(), 800);
    }
}
