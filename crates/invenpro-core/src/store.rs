//! # Ledger Store Facade
//!
//! Coordinates the item repository and the transaction ledger, exposes the
//! atomic mutation operations, and owns persistence.
//!
//! ## Concurrency
//!
//! Single-writer discipline: every mutating operation holds the write guard
//! across validation, the stock check, the in-memory mutation, the ledger
//! append, and the persistence write, as one indivisible unit. This closes
//! the check-then-act race: two concurrent sales against the same item with
//! insufficient combined stock resolve in arrival order, and exactly as many
//! succeed as the available stock allows.
//!
//! Readers clone a consistent snapshot under the read guard and can never
//! observe a decremented stock without its ledger entry, or vice versa.
//!
//! ## Persistence
//!
//! Snapshot-on-write: after every successful mutation both records are
//! overwritten in one storage transaction. A write failure is logged and does
//! not roll back the already-applied in-memory mutation; durability is
//! best-effort by contract.

use crate::idgen::IdGenerator;
use crate::ledger::TransactionLedger;
use crate::primitives::{ITEMS_KEY, MAX_NAME_LENGTH, MAX_TEXT_LENGTH, TRANSACTIONS_KEY};
use crate::repository::ItemRepository;
use crate::storage::SnapshotDb;
use crate::{
    InventoryError, InventoryItem, ItemDraft, ItemId, ItemPatch, Transaction, defaults, formats,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

// =============================================================================
// ERROR LOGGING HELPERS
// =============================================================================

/// Log an absorbed storage error to stderr.
///
/// The core avoids a tracing dependency to stay minimal; the app layer
/// redirects stderr into its subscriber if needed. The line is structured so
/// it stays machine-parseable either way.
fn log_storage_warning(context: &str, e: &InventoryError) {
    eprintln!(
        "{{\"level\":\"warn\",\"target\":\"invenpro_core::store\",\"message\":\"Storage error in {}: {}\"}}",
        context, e
    );
}

// =============================================================================
// STORAGE BACKEND
// =============================================================================

/// Storage backend for the store.
#[derive(Debug)]
pub enum StorageBackend {
    /// No durable storage; state lives for the process only.
    Ephemeral,
    /// Disk-backed snapshot records via redb.
    Persistent(SnapshotDb),
}

// NOTE: StorageBackend does NOT implement Clone.
// SnapshotDb (database handle) cannot be safely cloned.

// =============================================================================
// SNAPSHOT
// =============================================================================

/// A consistent point-in-time copy of store state.
///
/// Items are in id order; transactions are newest first. All dashboard and
/// report aggregates are computed from a snapshot on every read; the store
/// holds no materialized aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreSnapshot {
    pub items: Vec<InventoryItem>,
    pub transactions: Vec<Transaction>,
}

// =============================================================================
// STORE
// =============================================================================

/// The repository and ledger guarded as one unit.
#[derive(Debug, Default)]
struct StoreInner {
    items: ItemRepository,
    ledger: TransactionLedger,
}

/// The inventory ledger store.
///
/// Constructed once at startup ([`InventoryStore::open`] for persistent use,
/// [`InventoryStore::ephemeral`] otherwise) and shared by reference with all
/// consumers. Lifecycle is init-on-start, flush-on-mutation; there is no
/// explicit teardown.
#[derive(Debug)]
pub struct InventoryStore {
    inner: RwLock<StoreInner>,
    ids: IdGenerator,
    backend: StorageBackend,
}

impl InventoryStore {
    /// Create an empty store with no durable storage.
    #[must_use]
    pub fn ephemeral() -> Self {
        Self {
            inner: RwLock::new(StoreInner::default()),
            ids: IdGenerator::new(),
            backend: StorageBackend::Ephemeral,
        }
    }

    /// Create a store over an existing dataset, without durable storage.
    ///
    /// The identifier generator is seeded past every identifier present in
    /// the dataset.
    #[must_use]
    pub fn with_dataset(items: Vec<InventoryItem>, transactions: Vec<Transaction>) -> Self {
        let inner = StoreInner {
            items: ItemRepository::from_items(items),
            ledger: TransactionLedger::from_entries(transactions),
        };
        let ids = IdGenerator::seeded_after(inner.items.ids().map(|id| id.0), inner.ledger.ids());
        Self {
            inner: RwLock::new(inner),
            ids,
            backend: StorageBackend::Ephemeral,
        }
    }

    /// Open a persistent store, loading state from the snapshot database.
    ///
    /// Each record is loaded independently; a missing or unreadable record
    /// falls back to the bundled default dataset. Both are normal startup
    /// paths, logged but never fatal. Only a database that cannot be opened
    /// at all is an error.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, InventoryError> {
        let db = SnapshotDb::open(path)?;

        let items = match db.load(ITEMS_KEY) {
            Ok(Some(bytes)) => match formats::items_from_bytes(&bytes) {
                Ok(items) => items,
                Err(e) => {
                    log_storage_warning("load items", &e);
                    defaults::default_items()
                }
            },
            Ok(None) => defaults::default_items(),
            Err(e) => {
                log_storage_warning("load items", &e);
                defaults::default_items()
            }
        };

        let transactions = match db.load(TRANSACTIONS_KEY) {
            Ok(Some(bytes)) => match formats::transactions_from_bytes(&bytes) {
                Ok(txns) => txns,
                Err(e) => {
                    log_storage_warning("load transactions", &e);
                    defaults::default_transactions()
                }
            },
            Ok(None) => defaults::default_transactions(),
            Err(e) => {
                log_storage_warning("load transactions", &e);
                defaults::default_transactions()
            }
        };

        let inner = StoreInner {
            items: ItemRepository::from_items(items),
            ledger: TransactionLedger::from_entries(transactions),
        };
        let ids = IdGenerator::seeded_after(inner.items.ids().map(|id| id.0), inner.ledger.ids());

        Ok(Self {
            inner: RwLock::new(inner),
            ids,
            backend: StorageBackend::Persistent(db),
        })
    }

    /// Check if the store writes to durable storage.
    #[must_use]
    pub fn is_persistent(&self) -> bool {
        matches!(self.backend, StorageBackend::Persistent(_))
    }

    // =========================================================================
    // READS
    // =========================================================================

    /// Take a consistent point-in-time snapshot of items and transactions.
    #[must_use]
    pub fn snapshot(&self) -> StoreSnapshot {
        let inner = self.read_lock();
        StoreSnapshot {
            items: inner.items.to_vec(),
            transactions: inner.ledger.to_vec(),
        }
    }

    /// Lookup a single item by id.
    #[must_use]
    pub fn get_item(&self, id: ItemId) -> Option<InventoryItem> {
        self.read_lock().items.get(id).cloned()
    }

    /// Number of items currently tracked.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.read_lock().items.len()
    }

    /// Number of ledger entries.
    #[must_use]
    pub fn transaction_count(&self) -> usize {
        self.read_lock().ledger.len()
    }

    // =========================================================================
    // MUTATIONS
    // =========================================================================

    /// Create a new item from a draft.
    ///
    /// Validates name and category, clamps numeric fields to >= 0, assigns a
    /// fresh identifier and derives the initial status. No ledger entry is
    /// created; initial stock is an opening balance, not a movement.
    pub fn create_item(&self, draft: ItemDraft) -> Result<InventoryItem, InventoryError> {
        let mut inner = self.write_lock();
        draft.validate()?;

        let item = InventoryItem::from_draft(self.ids.next_item_id(), draft);
        inner.items.insert(item.clone());

        self.persist(&inner);
        Ok(item)
    }

    /// Merge a partial update into an existing item and recompute its status.
    ///
    /// An administrative correction, not a stock movement: no ledger entry.
    pub fn update_item(&self, id: ItemId, patch: ItemPatch) -> Result<InventoryItem, InventoryError> {
        let mut inner = self.write_lock();
        patch.validate()?;

        let updated = {
            let item = inner
                .items
                .get_mut(id)
                .ok_or(InventoryError::ItemNotFound(id))?;
            item.apply_patch(patch);
            item.clone()
        };

        self.persist(&inner);
        Ok(updated)
    }

    /// Remove an item. Idempotent: an absent id is a no-op returning `false`,
    /// not a fault. Historical transactions are untouched.
    pub fn delete_item(&self, id: ItemId) -> bool {
        let mut inner = self.write_lock();
        let removed = inner.items.remove(id).is_some();
        if removed {
            self.persist(&inner);
        }
        removed
    }

    /// Record stock received from a supplier.
    ///
    /// Atomically increases stock, recomputes status, and appends an Incoming
    /// entry (name snapshot, today's date) at the head of the ledger.
    pub fn record_incoming(
        &self,
        item_id: ItemId,
        quantity: i64,
        supplier: impl Into<String>,
        total_cost: i64,
        notes: Option<String>,
    ) -> Result<Transaction, InventoryError> {
        let supplier = supplier.into();
        let mut inner = self.write_lock();

        validate_len("supplier", &supplier, MAX_NAME_LENGTH)?;
        validate_notes(notes.as_deref())?;
        if total_cost < 0 {
            return Err(InventoryError::Validation(
                "total cost must not be negative".to_string(),
            ));
        }

        let item_name = {
            let item = inner
                .items
                .get_mut(item_id)
                .ok_or(InventoryError::ItemNotFound(item_id))?;
            if quantity <= 0 {
                return Err(InventoryError::InvalidQuantity(quantity));
            }
            item.stock = item.stock.saturating_add(quantity);
            item.refresh_status();
            item.name.clone()
        };

        let txn = Transaction::incoming(
            self.ids.next_txn_id(),
            item_name,
            quantity,
            today(),
            supplier,
            total_cost,
            notes,
        );
        inner.ledger.append(txn.clone());

        self.persist(&inner);
        Ok(txn)
    }

    /// Record stock sent out to a destination.
    ///
    /// Atomic check-then-act: when the item is absent or stock is
    /// insufficient, the operation fails and NO state changes - no stock
    /// mutation, no ledger entry. Quantities are never partially fulfilled.
    pub fn record_outgoing(
        &self,
        item_id: ItemId,
        quantity: i64,
        destination: impl Into<String>,
        notes: Option<String>,
    ) -> Result<Transaction, InventoryError> {
        let destination = destination.into();
        let mut inner = self.write_lock();

        validate_len("destination", &destination, MAX_NAME_LENGTH)?;
        validate_notes(notes.as_deref())?;

        let item_name = {
            let item = inner
                .items
                .get_mut(item_id)
                .ok_or(InventoryError::ItemNotFound(item_id))?;
            if quantity <= 0 {
                return Err(InventoryError::InvalidQuantity(quantity));
            }
            if item.stock < quantity {
                return Err(InventoryError::InsufficientStock {
                    item: item_id,
                    requested: quantity,
                    available: item.stock,
                });
            }
            item.stock -= quantity;
            item.refresh_status();
            item.name.clone()
        };

        let txn = Transaction::outgoing(
            self.ids.next_txn_id(),
            item_name,
            quantity,
            today(),
            destination,
            notes,
        );
        inner.ledger.append(txn.clone());

        self.persist(&inner);
        Ok(txn)
    }

    /// Record a sale.
    ///
    /// Same check-then-act discipline as [`Self::record_outgoing`]. The sell
    /// price is captured from the item at this instant and frozen into the
    /// entry together with `total_amount`; later price changes on the item
    /// never retroactively alter recorded history.
    pub fn record_sale(&self, item_id: ItemId, quantity: i64) -> Result<Transaction, InventoryError> {
        let mut inner = self.write_lock();

        let (item_name, sell_price) = {
            let item = inner
                .items
                .get_mut(item_id)
                .ok_or(InventoryError::ItemNotFound(item_id))?;
            if quantity <= 0 {
                return Err(InventoryError::InvalidQuantity(quantity));
            }
            if item.stock < quantity {
                return Err(InventoryError::InsufficientStock {
                    item: item_id,
                    requested: quantity,
                    available: item.stock,
                });
            }
            let sell_price = item.sell_price;
            item.stock -= quantity;
            item.refresh_status();
            (item.name.clone(), sell_price)
        };

        let txn = Transaction::sale(
            self.ids.next_txn_id(),
            item_name,
            quantity,
            today(),
            sell_price,
            sell_price.saturating_mul(quantity),
        );
        inner.ledger.append(txn.clone());

        self.persist(&inner);
        Ok(txn)
    }

    /// Force a snapshot write of the current state.
    ///
    /// Mutating operations persist on their own; this exists for callers that
    /// want the loaded (or default) dataset materialized without a mutation,
    /// and it surfaces the write error instead of absorbing it.
    pub fn flush(&self) -> Result<(), InventoryError> {
        let inner = self.read_lock();
        match &self.backend {
            StorageBackend::Persistent(db) => write_snapshot(db, &inner),
            StorageBackend::Ephemeral => Ok(()),
        }
    }

    // =========================================================================
    // INTERNALS
    // =========================================================================

    /// Write the complete snapshot to durable storage, if any.
    ///
    /// Called with the write guard held so readers never race a half-written
    /// snapshot. Failures are logged and absorbed; the in-memory mutation has
    /// already been committed and is not rolled back.
    fn persist(&self, inner: &StoreInner) {
        let StorageBackend::Persistent(db) = &self.backend else {
            return;
        };
        if let Err(e) = write_snapshot(db, inner) {
            log_storage_warning("persist", &e);
        }
    }

    // The store never panics while holding a guard, so a poisoned lock can
    // only come from a caller-side panic during a read; recover the value
    // instead of propagating the poison.
    fn read_lock(&self) -> RwLockReadGuard<'_, StoreInner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_lock(&self) -> RwLockWriteGuard<'_, StoreInner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

fn write_snapshot(db: &SnapshotDb, inner: &StoreInner) -> Result<(), InventoryError> {
    let items = formats::items_to_bytes(&inner.items.to_vec())?;
    let transactions = formats::transactions_to_bytes(&inner.ledger.to_vec())?;
    db.save_snapshot(&items, &transactions)
}

fn validate_len(field: &str, value: &str, max: usize) -> Result<(), InventoryError> {
    if value.len() > max {
        return Err(InventoryError::Validation(format!(
            "{} length {} exceeds maximum {} bytes",
            field,
            value.len(),
            max
        )));
    }
    Ok(())
}

fn validate_notes(notes: Option<&str>) -> Result<(), InventoryError> {
    match notes {
        Some(text) => validate_len("notes", text, MAX_TEXT_LENGTH),
        None => Ok(()),
    }
}

/// Calendar date of recording.
fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

// =============================================================================
// TESTS
// =============================================================================
