//! # CLI Command Implementations
//!
//! Each command opens the store, performs one facade operation or read
//! projection, and renders the result. Insufficient stock and unknown items
//! are routine business outcomes: they print an inline message and exit
//! cleanly, unlike validation or storage errors.

use crate::format::{format_number, format_rupiah};
use invenpro_core::primitives::TOP_SELLERS_LIMIT;
use invenpro_core::reports::{self, DashboardStats};
use invenpro_core::{
    InventoryError, InventoryStore, ItemDraft, ItemId, ItemPatch, StockStatus, Transaction,
    TxnKind,
};
use std::path::Path;

// =============================================================================
// RENDER HELPERS
// =============================================================================

/// Short wire-style label for a transaction kind.
#[must_use]
pub fn kind_label(kind: &TxnKind) -> &'static str {
    match kind {
        TxnKind::Incoming { .. } => "in",
        TxnKind::Outgoing { .. } => "out",
        TxnKind::Sale { .. } => "sale",
    }
}

/// Human label for a stock status.
#[must_use]
pub fn status_label(status: StockStatus) -> &'static str {
    match status {
        StockStatus::Safe => "safe",
        StockStatus::Low => "LOW",
        StockStatus::Out => "OUT",
    }
}

/// The money column of a ledger row: sale amount or incoming cost.
#[must_use]
pub fn txn_amount(txn: &Transaction) -> Option<i64> {
    match &txn.kind {
        TxnKind::Sale { total_amount, .. } => Some(*total_amount),
        TxnKind::Incoming { total_cost, .. } => Some(*total_cost),
        TxnKind::Outgoing { .. } => None,
    }
}

fn today() -> chrono::NaiveDate {
    chrono::Local::now().date_naive()
}

fn print_transaction(txn: &Transaction) {
    let amount = txn_amount(txn)
        .map(format_rupiah)
        .unwrap_or_else(|| "-".to_string());
    let notes = txn.notes.as_deref().unwrap_or("");
    println!(
        "{:>5}  {}  {:<5} {:<28} {:>6}  {:>16}  {}",
        txn.id.0,
        txn.date,
        kind_label(&txn.kind),
        txn.item_name,
        format_number(txn.quantity),
        amount,
        notes
    );
}

/// Render a movement result. Unknown items and insufficient stock are
/// expected business outcomes, not faults: inline message, clean exit.
fn report_movement(
    result: Result<Transaction, InventoryError>,
    json_mode: bool,
) -> Result<(), InventoryError> {
    match result {
        Ok(txn) => {
            if json_mode {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&txn).unwrap_or_default()
                );
            } else {
                println!("Recorded:");
                print_transaction(&txn);
            }
            Ok(())
        }
        Err(
            e @ (InventoryError::ItemNotFound(_) | InventoryError::InsufficientStock { .. }),
        ) => {
            println!("{}", e);
            Ok(())
        }
        Err(e) => Err(e),
    }
}

// =============================================================================
// DASHBOARD COMMAND
// =============================================================================

/// Show the dashboard summary.
pub fn cmd_dashboard(database: &Path, json_mode: bool) -> Result<(), InventoryError> {
    let store = InventoryStore::open(database)?;
    let snapshot = store.snapshot();

    let stats = DashboardStats::compute(&snapshot, today());
    let top_sellers = reports::top_selling_items(&snapshot.transactions, TOP_SELLERS_LIMIT);
    let categories = reports::category_distribution(&snapshot.items);

    if json_mode {
        let output = serde_json::json!({
            "stats": stats,
            "topSellers": top_sellers,
            "categories": categories,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&output).unwrap_or_default()
        );
        return Ok(());
    }

    println!("InvenPro Dashboard");
    println!("==================");
    println!("Total items:      {}", format_number(stats.total_items as i64));
    println!("Total stock:      {}", format_number(stats.total_stock));
    println!("Low stock items:  {}", format_number(stats.low_stock_items as i64));
    println!("Sales (month):    {}", format_rupiah(stats.monthly_sales));
    println!("Incoming (month): {}", format_rupiah(stats.monthly_incoming));
    println!(
        "Outgoing (month): {} units",
        format_number(stats.monthly_outgoing)
    );

    if !top_sellers.is_empty() {
        println!();
        println!("Top sellers:");
        for seller in &top_sellers {
            println!(
                "  {:<28} {:>6} units",
                seller.name,
                format_number(seller.quantity)
            );
        }
    }

    if !categories.is_empty() {
        println!();
        println!("Categories:");
        for share in &categories {
            println!(
                "  {:<28} {:>3} items  ({} per mille)",
                share.category, share.items, share.per_mille
            );
        }
    }

    Ok(())
}

// =============================================================================
// ITEM COMMANDS
// =============================================================================

/// List stock items.
pub fn cmd_items(
    database: &Path,
    json_mode: bool,
    low_only: bool,
    category: Option<&str>,
) -> Result<(), InventoryError> {
    let store = InventoryStore::open(database)?;
    let snapshot = store.snapshot();

    let items: Vec<_> = snapshot
        .items
        .into_iter()
        .filter(|item| !low_only || item.status != StockStatus::Safe)
        .filter(|item| category.is_none_or(|c| item.category == c))
        .collect();

    if json_mode {
        println!(
            "{}",
            serde_json::to_string_pretty(&items).unwrap_or_default()
        );
        return Ok(());
    }

    println!(
        "{:>5}  {:<28} {:<20} {:>7} {:>7}  {:<5} {:>16}",
        "ID", "NAME", "CATEGORY", "STOCK", "MIN", "STAT", "SELL PRICE"
    );
    for item in &items {
        println!(
            "{:>5}  {:<28} {:<20} {:>7} {:>7}  {:<5} {:>16}",
            item.id.0,
            item.name,
            item.category,
            format_number(item.stock),
            format_number(item.min_stock),
            status_label(item.status),
            format_rupiah(item.sell_price),
        );
    }
    println!("{} item(s)", items.len());

    Ok(())
}

/// Create a new item.
pub fn cmd_add(database: &Path, json_mode: bool, draft: ItemDraft) -> Result<(), InventoryError> {
    let store = InventoryStore::open(database)?;
    let item = store.create_item(draft)?;

    if json_mode {
        println!("{}", serde_json::to_string_pretty(&item).unwrap_or_default());
    } else {
        println!(
            "Created item {} '{}' (status {})",
            item.id.0,
            item.name,
            status_label(item.status)
        );
    }
    Ok(())
}

/// Update an existing item.
pub fn cmd_update(
    database: &Path,
    json_mode: bool,
    id: u64,
    patch: ItemPatch,
) -> Result<(), InventoryError> {
    let store = InventoryStore::open(database)?;

    match store.update_item(ItemId(id), patch) {
        Ok(item) => {
            if json_mode {
                println!("{}", serde_json::to_string_pretty(&item).unwrap_or_default());
            } else {
                println!(
                    "Updated item {} '{}' (stock {}, status {})",
                    item.id.0,
                    item.name,
                    format_number(item.stock),
                    status_label(item.status)
                );
            }
            Ok(())
        }
        Err(e @ InventoryError::ItemNotFound(_)) => {
            println!("{}", e);
            Ok(())
        }
        Err(e) => Err(e),
    }
}

/// Delete an item. Absent ids are a no-op, not a fault.
pub fn cmd_delete(database: &Path, id: u64) -> Result<(), InventoryError> {
    let store = InventoryStore::open(database)?;

    if store.delete_item(ItemId(id)) {
        println!("Deleted item {} (history kept)", id);
    } else {
        println!("Item {} not found, nothing to delete", id);
    }
    Ok(())
}

// =============================================================================
// MOVEMENT COMMANDS
// =============================================================================

/// Record incoming stock.
pub fn cmd_incoming(
    database: &Path,
    json_mode: bool,
    item: u64,
    quantity: i64,
    supplier: &str,
    total_cost: i64,
    notes: Option<String>,
) -> Result<(), InventoryError> {
    let store = InventoryStore::open(database)?;
    let result = store.record_incoming(ItemId(item), quantity, supplier, total_cost, notes);
    report_movement(result, json_mode)
}

/// Record outgoing stock.
pub fn cmd_outgoing(
    database: &Path,
    json_mode: bool,
    item: u64,
    quantity: i64,
    destination: &str,
    notes: Option<String>,
) -> Result<(), InventoryError> {
    let store = InventoryStore::open(database)?;
    let result = store.record_outgoing(ItemId(item), quantity, destination, notes);
    report_movement(result, json_mode)
}

/// Record a sale at the item's current price.
pub fn cmd_sale(
    database: &Path,
    json_mode: bool,
    item: u64,
    quantity: i64,
) -> Result<(), InventoryError> {
    let store = InventoryStore::open(database)?;
    let result = store.record_sale(ItemId(item), quantity);
    report_movement(result, json_mode)
}

// =============================================================================
// LEDGER COMMANDS
// =============================================================================

/// List ledger transactions, newest first.
pub fn cmd_transactions(
    database: &Path,
    json_mode: bool,
    kind: Option<&str>,
    limit: usize,
) -> Result<(), InventoryError> {
    let store = InventoryStore::open(database)?;
    let snapshot = store.snapshot();

    let entries: Vec<_> = snapshot
        .transactions
        .into_iter()
        .filter(|txn| kind.is_none_or(|k| kind_label(&txn.kind) == k))
        .take(limit)
        .collect();

    if json_mode {
        println!(
            "{}",
            serde_json::to_string_pretty(&entries).unwrap_or_default()
        );
        return Ok(());
    }

    for txn in &entries {
        print_transaction(txn);
    }
    println!("{} entry(ies)", entries.len());

    Ok(())
}

/// Show the financial report.
pub fn cmd_report(database: &Path, json_mode: bool) -> Result<(), InventoryError> {
    let store = InventoryStore::open(database)?;
    let snapshot = store.snapshot();

    let summary = reports::financial_summary(&snapshot.transactions);
    let sales = reports::sales_by_date(&snapshot.transactions);
    let stock_in = reports::stock_in_by_month(&snapshot.transactions);

    if json_mode {
        let output = serde_json::json!({
            "summary": summary,
            "salesByDate": sales,
            "stockInByMonth": stock_in,
            "transactions": snapshot.transactions,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&output).unwrap_or_default()
        );
        return Ok(());
    }

    println!("Financial Report");
    println!("================");
    println!("Total incoming cost: {}", format_rupiah(summary.total_cost));
    println!("Total sales:         {}", format_rupiah(summary.total_sales));
    println!("Profit:              {}", format_rupiah(summary.profit));

    if !sales.is_empty() {
        println!();
        println!("Sales by date:");
        for point in &sales {
            println!("  {}  {}", point.date, format_rupiah(point.amount));
        }
    }

    if !stock_in.is_empty() {
        println!();
        println!("Incoming units by month:");
        for point in &stock_in {
            println!(
                "  {:04}-{:02}  {} units",
                point.year,
                point.month,
                format_number(point.quantity)
            );
        }
    }

    println!();
    println!("All transactions:");
    for txn in &snapshot.transactions {
        print_transaction(txn);
    }

    Ok(())
}

// =============================================================================
// INIT COMMAND
// =============================================================================

/// Initialize a database with the bundled dataset.
pub fn cmd_init(database: &Path, force: bool) -> Result<(), InventoryError> {
    if database.exists() {
        if !force {
            println!(
                "Database '{}' already exists (use --force to overwrite)",
                database.display()
            );
            return Ok(());
        }
        std::fs::remove_file(database).map_err(|e| {
            InventoryError::Storage(format!(
                "Cannot remove '{}': {}",
                database.display(),
                e
            ))
        })?;
    }

    let store = InventoryStore::open(database)?;
    store.flush()?;

    println!(
        "Initialized '{}' with {} items and {} transactions",
        database.display(),
        store.item_count(),
        store.transaction_count()
    );
    Ok(())
}
