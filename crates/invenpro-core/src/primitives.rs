//! # Store Constants
//!
//! Hardcoded runtime constants for the InvenPro ledger store.
//!
//! These are compiled into the binary and immutable at runtime.

/// Storage key for the persisted item collection.
///
/// The snapshot database holds two independent records; this one carries the
/// complete item collection as a JSON document.
pub const ITEMS_KEY: &str = "items";

/// Storage key for the persisted transaction ledger.
pub const TRANSACTIONS_KEY: &str = "transactions";

/// Current snapshot format version, stored alongside the records.
///
/// Increment this when making breaking changes to the snapshot layout.
pub const SNAPSHOT_VERSION: u64 = 1;

// =============================================================================
// INPUT VALIDATION LIMITS
// =============================================================================

/// Maximum length for item names, categories and suppliers.
///
/// Longer values are rejected at the write boundary.
pub const MAX_NAME_LENGTH: usize = 256;

/// Maximum length for free-text fields (descriptions, notes).
///
/// This prevents memory exhaustion from malicious or malformed input.
pub const MAX_TEXT_LENGTH: usize = 65536;

/// Maximum allowed payload size for a persisted snapshot record.
///
/// Validated BEFORE deserialization to prevent allocation-based memory
/// exhaustion from a corrupted or malicious database file.
pub const MAX_SNAPSHOT_PAYLOAD_SIZE: usize = 100 * 1024 * 1024; // 100 MB

// =============================================================================
// PROJECTION LIMITS
// =============================================================================

/// Number of entries in the top-sellers projection.
pub const TOP_SELLERS_LIMIT: usize = 5;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_keys_are_distinct() {
        assert_ne!(ITEMS_KEY, TRANSACTIONS_KEY);
    }

    #[test]
    fn snapshot_version_is_one() {
        assert_eq!(SNAPSHOT_VERSION, 1);
    }
}
