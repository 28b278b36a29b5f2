//! # Snapshot Format
//!
//! JSON serialization for the persisted snapshot records.
//!
//! These are pure transformations - no file I/O. The storage layer feeds the
//! produced bytes to the snapshot database and hands loaded bytes back here.
//!
//! The on-disk layout is a human-readable, field-named JSON array per record,
//! so a snapshot can be inspected and repaired with ordinary tools.
//! Round-trip fidelity is required: decoding a previously encoded snapshot
//! must reproduce structurally identical items and transactions, including
//! ledger order.
//!
//! ## Decode validation
//!
//! Payload size is validated BEFORE parsing (`MAX_SNAPSHOT_PAYLOAD_SIZE`) to
//! prevent memory exhaustion from a corrupted or malicious database file.

use crate::primitives::MAX_SNAPSHOT_PAYLOAD_SIZE;
use crate::{InventoryError, InventoryItem, Transaction};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Serialize the item collection to a pretty-printed JSON document.
pub fn items_to_bytes(items: &[InventoryItem]) -> Result<Vec<u8>, InventoryError> {
    encode(items)
}

/// Deserialize an item collection from a snapshot record.
pub fn items_from_bytes(bytes: &[u8]) -> Result<Vec<InventoryItem>, InventoryError> {
    decode(bytes, "items")
}

/// Serialize the transaction ledger (newest first) to a JSON document.
pub fn transactions_to_bytes(transactions: &[Transaction]) -> Result<Vec<u8>, InventoryError> {
    encode(transactions)
}

/// Deserialize a transaction ledger from a snapshot record, preserving order.
pub fn transactions_from_bytes(bytes: &[u8]) -> Result<Vec<Transaction>, InventoryError> {
    decode(bytes, "transactions")
}

fn encode<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, InventoryError> {
    serde_json::to_vec_pretty(value).map_err(|e| InventoryError::Serialization(e.to_string()))
}

fn decode<T: DeserializeOwned>(bytes: &[u8], record: &str) -> Result<T, InventoryError> {
    // Validate size BEFORE any parsing
    if bytes.len() > MAX_SNAPSHOT_PAYLOAD_SIZE {
        return Err(InventoryError::Serialization(format!(
            "Record '{}' size {} bytes exceeds maximum allowed {} bytes",
            record,
            bytes.len(),
            MAX_SNAPSHOT_PAYLOAD_SIZE
        )));
    }

    serde_json::from_slice(bytes).map_err(|e| {
        InventoryError::Serialization(format!("Failed to decode record '{}': {}", record, e))
    })
}

// =============================================================================
// TESTS
// =============================================================================
