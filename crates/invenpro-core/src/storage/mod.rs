//! # Storage Backends
//!
//! Durable storage for the ledger store's snapshot records.

mod snapshot_db;

pub use snapshot_db::SnapshotDb;
