//! # Bundled Default Dataset
//!
//! The dataset the store falls back to when a persisted snapshot record is
//! missing or unreadable. Falling back is a normal startup path, not a fault.
//!
//! Identifiers overlap between the two collections (items 1-10, transactions
//! 1-8); the identifier generator is seeded past the maximum of both, so the
//! overlap never produces a collision at runtime.

use crate::{InventoryItem, ItemDraft, ItemId, Transaction, TxnId};
use chrono::NaiveDate;

fn item(
    id: u64,
    name: &str,
    category: &str,
    buy_price: i64,
    sell_price: i64,
    stock: i64,
    min_stock: i64,
    supplier: &str,
    description: &str,
) -> InventoryItem {
    InventoryItem::from_draft(
        ItemId(id),
        ItemDraft {
            name: name.to_string(),
            category: category.to_string(),
            buy_price,
            sell_price,
            stock,
            min_stock,
            supplier: supplier.to_string(),
            description: description.to_string(),
        },
    )
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// The bundled item collection.
#[must_use]
pub fn default_items() -> Vec<InventoryItem> {
    vec![
        item(1, "Laptop ASUS VivoBook", "Elektronik", 7_500_000, 8_500_000, 15, 5, "PT Asus Indonesia", "Laptop 14 inch, RAM 8GB"),
        item(2, "Mouse Wireless Logitech", "Elektronik", 150_000, 250_000, 45, 10, "PT Logitech", "Mouse wireless 2.4GHz"),
        item(3, "Kopi Arabica 250gr", "Makanan & Minuman", 45_000, 75_000, 3, 10, "CV Kopi Nusantara", "Kopi arabica premium"),
        item(4, "Kaos Polos Cotton", "Pakaian", 35_000, 65_000, 0, 20, "PT Textile Indo", "Kaos cotton combed 30s"),
        item(5, "Pulpen Pilot G2", "Alat Tulis", 12_000, 18_000, 120, 30, "PT Pilot Pen", "Pulpen gel 0.5mm"),
        item(6, "Keyboard Mechanical", "Elektronik", 450_000, 650_000, 8, 5, "PT Keyboard Indo", "Keyboard TKL blue switch"),
        item(7, "Teh Celup 25pcs", "Makanan & Minuman", 8_000, 15_000, 5, 15, "PT Teh Nusantara", "Teh hitam celup"),
        item(8, "Sapu Ijuk Premium", "Peralatan Rumah", 25_000, 45_000, 22, 10, "CV Bersih Jaya", "Sapu ijuk kualitas A"),
        item(9, "Headset Gaming", "Elektronik", 200_000, 350_000, 2, 5, "PT Audio Tech", "Headset 7.1 surround"),
        item(10, "Buku Tulis A5", "Alat Tulis", 5_000, 8_000, 200, 50, "PT Sinar Dunia", "Buku tulis 80 halaman"),
    ]
}

/// The bundled transaction ledger, newest first.
#[must_use]
pub fn default_transactions() -> Vec<Transaction> {
    vec![
        Transaction::incoming(
            TxnId(1),
            "Laptop ASUS VivoBook".to_string(),
            10,
            date(2026, 2, 14),
            "PT Asus Indonesia".to_string(),
            75_000_000,
            Some("Restock bulanan".to_string()),
        ),
        Transaction::outgoing(
            TxnId(2),
            "Mouse Wireless Logitech".to_string(),
            5,
            date(2026, 2, 13),
            "Toko Cabang A".to_string(),
            Some("Transfer stok".to_string()),
        ),
        Transaction::sale(
            TxnId(3),
            "Pulpen Pilot G2".to_string(),
            20,
            date(2026, 2, 13),
            18_000,
            360_000,
        ),
        Transaction::incoming(
            TxnId(4),
            "Kopi Arabica 250gr".to_string(),
            50,
            date(2026, 2, 12),
            "CV Kopi Nusantara".to_string(),
            2_250_000,
            Some("Order besar".to_string()),
        ),
        Transaction::sale(
            TxnId(5),
            "Keyboard Mechanical".to_string(),
            3,
            date(2026, 2, 12),
            650_000,
            1_950_000,
        ),
        Transaction::outgoing(
            TxnId(6),
            "Kaos Polos Cotton".to_string(),
            10,
            date(2026, 2, 11),
            "Event Promo".to_string(),
            Some("Giveaway".to_string()),
        ),
        Transaction::sale(
            TxnId(7),
            "Laptop ASUS VivoBook".to_string(),
            2,
            date(2026, 2, 10),
            8_500_000,
            17_000_000,
        ),
        Transaction::incoming(
            TxnId(8),
            "Buku Tulis A5".to_string(),
            100,
            date(2026, 2, 10),
            "PT Sinar Dunia".to_string(),
            500_000,
            Some("Restock".to_string()),
        ),
    ]
}

// =============================================================================
// TESTS
// =============================================================================
