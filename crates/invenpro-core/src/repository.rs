//! # Item Repository
//!
//! In-memory collection of stock items keyed by identifier.
//!
//! Uses `BTreeMap` for deterministic iteration order. The repository performs
//! no validation and derives no status; those responsibilities belong to the
//! store facade and the item type itself.

use crate::{InventoryItem, ItemId};
use std::collections::BTreeMap;

/// The item collection. Identifiers are unique; iteration order is by id.
#[derive(Debug, Clone, Default)]
pub struct ItemRepository {
    items: BTreeMap<ItemId, InventoryItem>,
}

impl ItemRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a repository from a loaded item collection.
    ///
    /// Later duplicates of an identifier win, matching last-write semantics
    /// of the snapshot records.
    #[must_use]
    pub fn from_items(items: Vec<InventoryItem>) -> Self {
        Self {
            items: items.into_iter().map(|item| (item.id, item)).collect(),
        }
    }

    /// Insert a new item. Returns the previous item if the id was taken.
    pub fn insert(&mut self, item: InventoryItem) -> Option<InventoryItem> {
        self.items.insert(item.id, item)
    }

    /// Lookup an item by id.
    #[must_use]
    pub fn get(&self, id: ItemId) -> Option<&InventoryItem> {
        self.items.get(&id)
    }

    /// Mutable lookup, used by the facade inside its mutual-exclusion section.
    pub fn get_mut(&mut self, id: ItemId) -> Option<&mut InventoryItem> {
        self.items.get_mut(&id)
    }

    /// Remove an item. Returns the removed item, `None` if absent.
    pub fn remove(&mut self, id: ItemId) -> Option<InventoryItem> {
        self.items.remove(&id)
    }

    /// Check whether an id is present.
    #[must_use]
    pub fn contains(&self, id: ItemId) -> bool {
        self.items.contains_key(&id)
    }

    /// Iterate items in id order.
    pub fn iter(&self) -> impl Iterator<Item = &InventoryItem> {
        self.items.values()
    }

    /// All item identifiers, in order.
    pub fn ids(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.items.keys().copied()
    }

    /// Clone the collection into a vector, in id order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<InventoryItem> {
        self.items.values().cloned().collect()
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the repository is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// =============================================================================
// TESTS
// =============================================================================
