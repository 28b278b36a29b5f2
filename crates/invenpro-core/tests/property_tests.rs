//! # Property-Based Tests
//!
//! Verification of the store's core invariants with proptest:
//! - status classification always matches the stock/threshold predicate
//! - stock never goes negative, whatever the operation sequence
//! - snapshot records round-trip structurally

use invenpro_core::{
    InventoryStore, ItemDraft, ItemPatch, StockStatus, items_from_bytes, items_to_bytes,
    transactions_from_bytes, transactions_to_bytes,
};
use proptest::collection::vec;
use proptest::prelude::*;

// =============================================================================
// STRATEGIES
// =============================================================================

// Leading alphanumeric so required fields never trim to empty
fn text() -> impl Strategy<Value = String> {
    "[A-Za-z0-9][A-Za-z0-9 ]{0,23}"
}

fn draft() -> impl Strategy<Value = ItemDraft> {
    (
        text(),
        text(),
        -1000i64..1_000_000,
        -1000i64..1_000_000,
        -100i64..1000,
        -100i64..1000,
    )
        .prop_map(
            |(name, category, buy_price, sell_price, stock, min_stock)| ItemDraft {
                name,
                category,
                buy_price,
                sell_price,
                stock,
                min_stock,
                ..ItemDraft::default()
            },
        )
}

/// One step applied to the store's single test item.
#[derive(Debug, Clone)]
enum Op {
    Incoming(i64),
    Outgoing(i64),
    Sale(i64),
    SetStock(i64),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (-5i64..100).prop_map(Op::Incoming),
        (-5i64..100).prop_map(Op::Outgoing),
        (-5i64..100).prop_map(Op::Sale),
        (-100i64..200).prop_map(Op::SetStock),
    ]
}

// =============================================================================
// PROPERTY TESTS
// =============================================================================

proptest! {
    /// The derived status always matches its defining predicate.
    #[test]
    fn status_matches_predicate(stock in -1000i64..1000, min_stock in -1000i64..1000) {
        let status = StockStatus::derive(stock, min_stock);
        let expected = if stock <= 0 {
            StockStatus::Out
        } else if stock <= min_stock {
            StockStatus::Low
        } else {
            StockStatus::Safe
        };
        prop_assert_eq!(status, expected);
    }

    /// Creation clamps numeric fields and derives a consistent status.
    #[test]
    fn creation_clamps_and_classifies(draft in draft()) {
        let store = InventoryStore::ephemeral();
        let item = store.create_item(draft).expect("create");

        prop_assert!(item.stock >= 0);
        prop_assert!(item.min_stock >= 0);
        prop_assert!(item.buy_price >= 0);
        prop_assert!(item.sell_price >= 0);
        prop_assert_eq!(item.status, StockStatus::derive(item.stock, item.min_stock));
    }

    /// Whatever the operation sequence, stock stays >= 0 and status stays
    /// consistent; the ledger grows by exactly one entry per successful
    /// movement.
    #[test]
    fn stock_never_negative_under_any_sequence(ops in vec(op(), 1..40)) {
        let store = InventoryStore::ephemeral();
        let item = store
            .create_item(ItemDraft {
                name: "Probe".to_string(),
                category: "Test".to_string(),
                stock: 10,
                min_stock: 5,
                sell_price: 100,
                ..ItemDraft::default()
            })
            .expect("create");

        let mut expected_entries = 0usize;
        for op in ops {
            let recorded = match op {
                Op::Incoming(qty) => store.record_incoming(item.id, qty, "S", 0, None).is_ok(),
                Op::Outgoing(qty) => store.record_outgoing(item.id, qty, "D", None).is_ok(),
                Op::Sale(qty) => store.record_sale(item.id, qty).is_ok(),
                Op::SetStock(stock) => {
                    let _ = store.update_item(item.id, ItemPatch {
                        stock: Some(stock),
                        ..ItemPatch::default()
                    });
                    false
                }
            };
            if recorded {
                expected_entries += 1;
            }

            let current = store.get_item(item.id).expect("item");
            prop_assert!(current.stock >= 0);
            prop_assert_eq!(
                current.status,
                StockStatus::derive(current.stock, current.min_stock)
            );
        }

        prop_assert_eq!(store.transaction_count(), expected_entries);
    }

    /// An item snapshot decodes back to a structurally identical collection.
    #[test]
    fn item_records_roundtrip(drafts in vec(draft(), 0..10)) {
        let store = InventoryStore::ephemeral();
        for d in drafts {
            store.create_item(d).expect("create");
        }
        let items = store.snapshot().items;

        let bytes = items_to_bytes(&items).expect("encode");
        let restored = items_from_bytes(&bytes).expect("decode");
        prop_assert_eq!(restored, items);
    }

    /// A ledger snapshot decodes back with order and payloads intact.
    #[test]
    fn transaction_records_roundtrip(
        quantities in vec(1i64..50, 1..10),
        supplier in text(),
    ) {
        let store = InventoryStore::ephemeral();
        let item = store
            .create_item(ItemDraft {
                name: "Probe".to_string(),
                category: "Test".to_string(),
                stock: 10_000,
                sell_price: 250,
                ..ItemDraft::default()
            })
            .expect("create");

        for (i, qty) in quantities.iter().enumerate() {
            if i % 2 == 0 {
                store
                    .record_incoming(item.id, *qty, supplier.clone(), qty * 10, None)
                    .expect("incoming");
            } else {
                store.record_sale(item.id, *qty).expect("sale");
            }
        }
        let transactions = store.snapshot().transactions;

        let bytes = transactions_to_bytes(&transactions).expect("encode");
        let restored = transactions_from_bytes(&bytes).expect("decode");
        prop_assert_eq!(restored, transactions);
    }
}
