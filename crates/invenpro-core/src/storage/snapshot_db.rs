//! # redb-backed Snapshot Storage
//!
//! A disk-backed key-value store for the persisted snapshot records, using
//! the redb embedded database. It plays the role the browser's localStorage
//! played for the original dashboard, with real guarantees on top:
//! - ACID transactions (both records overwritten atomically)
//! - Crash safety (copy-on-write B-trees)
//! - Zero configuration
//!
//! The database holds exactly two records, keyed `"items"` and
//! `"transactions"`, each a JSON document produced by [`crate::formats`].
//! Persistence is snapshot-on-write: every save overwrites the complete
//! record, and the last successful full write wins.

use crate::InventoryError;
use crate::primitives::{ITEMS_KEY, SNAPSHOT_VERSION, TRANSACTIONS_KEY};
use redb::{Database, ReadableDatabase, ReadableTable, TableDefinition};
use std::path::Path;

/// Table for snapshot records: record key -> JSON document bytes.
const SNAPSHOTS: TableDefinition<&str, &[u8]> = TableDefinition::new("snapshots");

/// Table for metadata: key string -> value u64.
const METADATA: TableDefinition<&str, u64> = TableDefinition::new("metadata");

/// A disk-backed snapshot store.
pub struct SnapshotDb {
    /// The redb database handle.
    db: Database,
}

impl std::fmt::Debug for SnapshotDb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SnapshotDb").finish_non_exhaustive()
    }
}

impl SnapshotDb {
    /// Open or create a snapshot database at the given path.
    ///
    /// Tables are initialized and the format version is stamped on first
    /// creation.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, InventoryError> {
        let db = Database::create(path.as_ref()).map_err(storage_err)?;

        {
            let write_txn = db.begin_write().map_err(storage_err)?;
            {
                let _ = write_txn.open_table(SNAPSHOTS).map_err(storage_err)?;
                let mut meta = write_txn.open_table(METADATA).map_err(storage_err)?;
                let stamped = meta.get("version").map_err(storage_err)?.map(|v| v.value());
                if stamped.is_none() {
                    meta.insert("version", SNAPSHOT_VERSION).map_err(storage_err)?;
                }
            }
            write_txn.commit().map_err(storage_err)?;
        }

        Ok(Self { db })
    }

    /// The format version stamped into the database.
    pub fn version(&self) -> Result<u64, InventoryError> {
        let read_txn = self.db.begin_read().map_err(storage_err)?;
        let meta = read_txn.open_table(METADATA).map_err(storage_err)?;
        Ok(meta
            .get("version")
            .map_err(storage_err)?
            .map(|v| v.value())
            .unwrap_or(SNAPSHOT_VERSION))
    }

    /// Load a snapshot record. `Ok(None)` means the record was never written.
    ///
    /// A version mismatch is reported as a storage error so the caller can
    /// fall back to the bundled defaults (there is no schema migration).
    pub fn load(&self, key: &str) -> Result<Option<Vec<u8>>, InventoryError> {
        let version = self.version()?;
        if version != SNAPSHOT_VERSION {
            return Err(InventoryError::Storage(format!(
                "Unsupported snapshot version: {} (expected {})",
                version, SNAPSHOT_VERSION
            )));
        }

        let read_txn = self.db.begin_read().map_err(storage_err)?;
        let table = read_txn.open_table(SNAPSHOTS).map_err(storage_err)?;
        Ok(table
            .get(key)
            .map_err(storage_err)?
            .map(|guard| guard.value().to_vec()))
    }

    /// Overwrite both snapshot records in a single write transaction.
    ///
    /// Either both records land or neither does; a torn write cannot leave
    /// items and transactions from different snapshots on disk.
    pub fn save_snapshot(&self, items: &[u8], transactions: &[u8]) -> Result<(), InventoryError> {
        let write_txn = self.db.begin_write().map_err(storage_err)?;
        {
            let mut table = write_txn.open_table(SNAPSHOTS).map_err(storage_err)?;
            table.insert(ITEMS_KEY, items).map_err(storage_err)?;
            table
                .insert(TRANSACTIONS_KEY, transactions)
                .map_err(storage_err)?;

            let mut meta = write_txn.open_table(METADATA).map_err(storage_err)?;
            meta.insert("version", SNAPSHOT_VERSION).map_err(storage_err)?;
        }
        write_txn.commit().map_err(storage_err)?;
        Ok(())
    }
}

fn storage_err(e: impl std::fmt::Display) -> InventoryError {
    InventoryError::Storage(e.to_string())
}

// =============================================================================
// TESTS
// =============================================================================
