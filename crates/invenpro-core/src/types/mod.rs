//! # Core Type Definitions
//!
//! This module contains all core types for the InvenPro ledger store:
//! - Entity identifiers (`ItemId`, `TxnId`)
//! - Stock items and their health classification (`InventoryItem`, `StockStatus`)
//! - Write-side inputs (`ItemDraft`, `ItemPatch`)
//! - Movement records (`Transaction`, `TxnKind`)
//! - Error types (`InventoryError`)
//!
//! ## Determinism Guarantees
//!
//! All types in this module:
//! - Use integer arithmetic only (currency is integer minor units)
//! - Implement `Ord` where used as `BTreeMap` keys
//! - Use saturating arithmetic for counters and money to prevent overflow

use crate::primitives::{MAX_NAME_LENGTH, MAX_TEXT_LENGTH};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// ENTITY IDENTIFIERS
// =============================================================================

/// Unique identifier for a stock item.
///
/// Opaque, unique for the lifetime of one running store, immutable after
/// creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ItemId(pub u64);

/// Unique identifier for a ledger transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TxnId(pub u64);

// =============================================================================
// STOCK STATUS
// =============================================================================

/// Derived stock-health classification.
///
/// Status is never authored independently: every operation that changes
/// `stock` or `min_stock` recomputes it via [`StockStatus::derive`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockStatus {
    /// Stock is comfortably above the reorder threshold.
    Safe,
    /// Stock is positive but at or below the reorder threshold.
    Low,
    /// Stock is exhausted.
    Out,
}

impl StockStatus {
    /// Classify a (stock, reorder threshold) pair.
    ///
    /// Invariant: `Out` iff `stock <= 0`; `Low` iff `0 < stock <= min_stock`;
    /// `Safe` otherwise. Pure and deterministic.
    #[must_use]
    pub const fn derive(stock: i64, min_stock: i64) -> Self {
        if stock <= 0 {
            Self::Out
        } else if stock <= min_stock {
            Self::Low
        } else {
            Self::Safe
        }
    }
}

// =============================================================================
// INVENTORY ITEM
// =============================================================================

/// A tracked stock-keeping unit.
///
/// Prices are integer minor units (rupiah). `status` is serialized so
/// snapshots round-trip structurally, but it is always the result of a
/// recomputation step, never caller input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub id: ItemId,
    pub name: String,
    pub category: String,
    pub buy_price: i64,
    pub sell_price: i64,
    pub stock: i64,
    pub min_stock: i64,
    pub supplier: String,
    pub description: String,
    pub status: StockStatus,
}

impl InventoryItem {
    /// Build an item from a validated draft, clamping numeric fields to >= 0
    /// and deriving the initial status.
    #[must_use]
    pub fn from_draft(id: ItemId, draft: ItemDraft) -> Self {
        let stock = draft.stock.max(0);
        let min_stock = draft.min_stock.max(0);
        Self {
            id,
            name: draft.name,
            category: draft.category,
            buy_price: draft.buy_price.max(0),
            sell_price: draft.sell_price.max(0),
            stock,
            min_stock,
            supplier: draft.supplier,
            description: draft.description,
            status: StockStatus::derive(stock, min_stock),
        }
    }

    /// Merge the provided fields of a patch into this item.
    ///
    /// Numeric fields are clamped to >= 0 so the `stock >= 0` invariant holds
    /// after every operation. Ends with a status recomputation.
    pub fn apply_patch(&mut self, patch: ItemPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(buy_price) = patch.buy_price {
            self.buy_price = buy_price.max(0);
        }
        if let Some(sell_price) = patch.sell_price {
            self.sell_price = sell_price.max(0);
        }
        if let Some(stock) = patch.stock {
            self.stock = stock.max(0);
        }
        if let Some(min_stock) = patch.min_stock {
            self.min_stock = min_stock.max(0);
        }
        if let Some(supplier) = patch.supplier {
            self.supplier = supplier;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        self.refresh_status();
    }

    /// Recompute `status` from the current stock and reorder threshold.
    pub fn refresh_status(&mut self) {
        self.status = StockStatus::derive(self.stock, self.min_stock);
    }
}

// =============================================================================
// WRITE-SIDE INPUTS
// =============================================================================

/// Input for creating a new item. Identifier and status are assigned by the
/// store, never by the caller.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDraft {
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub buy_price: i64,
    #[serde(default)]
    pub sell_price: i64,
    #[serde(default)]
    pub stock: i64,
    #[serde(default)]
    pub min_stock: i64,
    #[serde(default)]
    pub supplier: String,
    #[serde(default)]
    pub description: String,
}

impl ItemDraft {
    /// Validate required fields and text lengths.
    ///
    /// `name` and `category` must be non-empty after trimming; all text
    /// fields are bounded to prevent memory exhaustion at the write boundary.
    pub fn validate(&self) -> Result<(), InventoryError> {
        validate_required("name", &self.name)?;
        validate_required("category", &self.category)?;
        validate_text("supplier", &self.supplier)?;
        validate_text("description", &self.description)?;
        Ok(())
    }
}

/// Partial update for an existing item. `None` fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ItemPatch {
    pub name: Option<String>,
    pub category: Option<String>,
    pub buy_price: Option<i64>,
    pub sell_price: Option<i64>,
    pub stock: Option<i64>,
    pub min_stock: Option<i64>,
    pub supplier: Option<String>,
    pub description: Option<String>,
}

impl ItemPatch {
    /// Validate the provided fields.
    ///
    /// A patch may omit anything, but a provided `name` or `category` must
    /// still be non-empty.
    pub fn validate(&self) -> Result<(), InventoryError> {
        if let Some(name) = &self.name {
            validate_required("name", name)?;
        }
        if let Some(category) = &self.category {
            validate_required("category", category)?;
        }
        if let Some(supplier) = &self.supplier {
            validate_text("supplier", supplier)?;
        }
        if let Some(description) = &self.description {
            validate_text("description", description)?;
        }
        Ok(())
    }
}

fn validate_required(field: &str, value: &str) -> Result<(), InventoryError> {
    if value.trim().is_empty() {
        return Err(InventoryError::Validation(format!(
            "{} must not be empty",
            field
        )));
    }
    if value.len() > MAX_NAME_LENGTH {
        return Err(InventoryError::Validation(format!(
            "{} length {} exceeds maximum {} bytes",
            field,
            value.len(),
            MAX_NAME_LENGTH
        )));
    }
    Ok(())
}

fn validate_text(field: &str, value: &str) -> Result<(), InventoryError> {
    if value.len() > MAX_TEXT_LENGTH {
        return Err(InventoryError::Validation(format!(
            "{} length {} exceeds maximum {} bytes",
            field,
            value.len(),
            MAX_TEXT_LENGTH
        )));
    }
    Ok(())
}

// =============================================================================
// TRANSACTION
// =============================================================================

/// Kind-specific payload of a movement record.
///
/// Serialized internally tagged as `type` so records keep the historical
/// wire layout: `{"type":"in"|"out"|"sale", ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum TxnKind {
    /// Stock received from a supplier.
    #[serde(rename = "in", rename_all = "camelCase")]
    Incoming { supplier: String, total_cost: i64 },
    /// Stock sent out to a destination (transfer, giveaway, ...).
    #[serde(rename = "out")]
    Outgoing { destination: String },
    /// Stock sold. Price and amount are captured at transaction time and
    /// never change when the item's price later does.
    #[serde(rename = "sale", rename_all = "camelCase")]
    Sale { sell_price: i64, total_amount: i64 },
}

/// An immutable record of one stock-affecting event.
///
/// `item_name` is a name snapshot, not a live reference: it is preserved
/// even if the item is later renamed or deleted, keeping history accurate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: TxnId,
    #[serde(flatten)]
    pub kind: TxnKind,
    pub item_name: String,
    pub quantity: i64,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Transaction {
    /// Record of stock received from a supplier.
    #[must_use]
    pub fn incoming(
        id: TxnId,
        item_name: String,
        quantity: i64,
        date: NaiveDate,
        supplier: String,
        total_cost: i64,
        notes: Option<String>,
    ) -> Self {
        Self {
            id,
            kind: TxnKind::Incoming {
                supplier,
                total_cost,
            },
            item_name,
            quantity,
            date,
            notes,
        }
    }

    /// Record of stock sent out to a destination.
    #[must_use]
    pub fn outgoing(
        id: TxnId,
        item_name: String,
        quantity: i64,
        date: NaiveDate,
        destination: String,
        notes: Option<String>,
    ) -> Self {
        Self {
            id,
            kind: TxnKind::Outgoing { destination },
            item_name,
            quantity,
            date,
            notes,
        }
    }

    /// Record of a sale at the price captured from the item.
    #[must_use]
    pub fn sale(
        id: TxnId,
        item_name: String,
        quantity: i64,
        date: NaiveDate,
        sell_price: i64,
        total_amount: i64,
    ) -> Self {
        Self {
            id,
            kind: TxnKind::Sale {
                sell_price,
                total_amount,
            },
            item_name,
            quantity,
            date,
            notes: None,
        }
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur in the InvenPro store.
///
/// `ItemNotFound` and `InsufficientStock` are routine business outcomes
/// returned to callers, not faults; the store guarantees in-memory state is
/// unchanged when they occur. The store never panics.
#[derive(Debug, Error)]
pub enum InventoryError {
    /// A required field is missing or a text field is malformed.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// A movement was requested with a non-positive quantity.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// The operation references an unknown item identifier.
    #[error("Item not found: {0:?}")]
    ItemNotFound(ItemId),

    /// An outgoing/sale quantity exceeds the current stock.
    #[error("Insufficient stock for item {item:?}: requested {requested}, available {available}")]
    InsufficientStock {
        item: ItemId,
        requested: i64,
        available: i64,
    },

    /// A storage read/write failed.
    #[error("Storage error: {0}")]
    Storage(String),

    /// A serialization or deserialization error occurred.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

// =============================================================================
// TESTS
// =============================================================================
