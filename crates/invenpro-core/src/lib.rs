//! # invenpro-core
//!
//! The inventory ledger store for InvenPro - THE LOGIC.
//!
//! This crate owns the collection of stock items and the append-only log of
//! stock-affecting events, derives item health status, and enforces that
//! stock never goes negative under concurrent mutation.
//!
//! ## Architectural Constraints
//!
//! - The store facade is the ONLY place where state is mutated
//! - The ledger is append-only: entries are never edited, reordered, or
//!   removed once recorded
//! - Status is derived, never authored: every stock or threshold change ends
//!   with a recomputation
//! - Pure synchronous Rust: no async, no network dependencies

// =============================================================================
// MODULES
// =============================================================================

pub mod defaults;
pub mod formats;
pub mod idgen;
pub mod ledger;
pub mod primitives;
pub mod reports;
pub mod repository;
pub mod storage;
pub mod store;
pub mod types;

// =============================================================================
// RE-EXPORTS: Core Types (from types module)
// =============================================================================

pub use types::{
    InventoryError, InventoryItem, ItemDraft, ItemId, ItemPatch, StockStatus, Transaction, TxnId,
    TxnKind,
};

// =============================================================================
// RE-EXPORTS: Store
// =============================================================================

pub use idgen::IdGenerator;
pub use ledger::TransactionLedger;
pub use repository::ItemRepository;
pub use storage::SnapshotDb;
pub use store::{InventoryStore, StorageBackend, StoreSnapshot};

// =============================================================================
// RE-EXPORTS: Formats (snapshot codec)
// =============================================================================

pub use formats::{
    items_from_bytes, items_to_bytes, transactions_from_bytes, transactions_to_bytes,
};
