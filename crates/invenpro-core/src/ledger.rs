//! # Transaction Ledger
//!
//! Append-only, reverse-chronological list of movement records.
//!
//! Appending at the head is the ONLY allowed mutation: entries are never
//! edited, reordered, or removed once recorded. Deleting the originating
//! item does not touch its historical entries.

use crate::Transaction;
use std::collections::VecDeque;

/// The movement ledger, newest entry first.
#[derive(Debug, Clone, Default)]
pub struct TransactionLedger {
    entries: VecDeque<Transaction>,
}

impl TransactionLedger {
    /// Create an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a ledger from a loaded record, preserving its newest-first order.
    #[must_use]
    pub fn from_entries(entries: Vec<Transaction>) -> Self {
        Self {
            entries: entries.into(),
        }
    }

    /// Append a record at the head of the ledger.
    pub fn append(&mut self, txn: Transaction) {
        self.entries.push_front(txn);
    }

    /// The most recent entry, if any.
    #[must_use]
    pub fn head(&self) -> Option<&Transaction> {
        self.entries.front()
    }

    /// Iterate entries newest first.
    pub fn iter(&self) -> impl Iterator<Item = &Transaction> {
        self.entries.iter()
    }

    /// All transaction identifiers.
    pub fn ids(&self) -> impl Iterator<Item = u64> + '_ {
        self.entries.iter().map(|txn| txn.id.0)
    }

    /// Clone the ledger into a vector, newest first.
    #[must_use]
    pub fn to_vec(&self) -> Vec<Transaction> {
        self.entries.iter().cloned().collect()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the ledger is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// =============================================================================
// TESTS
// =============================================================================
