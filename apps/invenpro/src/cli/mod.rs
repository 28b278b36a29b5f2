//! # InvenPro CLI Module
//!
//! ## Available Commands
//!
//! - `dashboard` - Summary stats, top sellers, category distribution (default)
//! - `items` - List stock items
//! - `add` / `update` / `delete` - Manage items
//! - `incoming` / `outgoing` / `sale` - Record stock movements
//! - `transactions` - List the movement ledger, newest first
//! - `report` - Financial summary and full transaction detail
//! - `init` - Materialize a database with the bundled dataset

mod commands;

use crate::config::AppConfig;
use clap::{Parser, Subcommand};
use invenpro_core::InventoryError;
use std::path::PathBuf;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// InvenPro - Inventory Dashboard
///
/// Tracks stock items, incoming/outgoing movements and sales over an
/// append-only ledger with snapshot persistence.
#[derive(Parser, Debug)]
#[command(name = "invenpro")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress banner output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to the snapshot database
    #[arg(short = 'D', long, global = true)]
    pub database: Option<PathBuf>,

    /// Path to a TOML config file
    #[arg(short = 'c', long, global = true)]
    pub config: Option<PathBuf>,

    /// Output in JSON format (for programmatic access)
    #[arg(long, global = true)]
    pub json_mode: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the dashboard summary
    Dashboard,

    /// List stock items
    Items {
        /// Only items at or below their reorder threshold
        #[arg(short, long)]
        low: bool,

        /// Filter by category
        #[arg(long)]
        category: Option<String>,
    },

    /// Create a new stock item
    Add {
        /// Item name
        #[arg(short, long)]
        name: String,

        /// Item category
        #[arg(short = 'C', long)]
        category: String,

        /// Purchase price (rupiah)
        #[arg(long, default_value = "0")]
        buy_price: i64,

        /// Selling price (rupiah)
        #[arg(long, default_value = "0")]
        sell_price: i64,

        /// Opening stock
        #[arg(long, default_value = "0")]
        stock: i64,

        /// Reorder threshold
        #[arg(long, default_value = "0")]
        min_stock: i64,

        /// Supplier name
        #[arg(long, default_value = "")]
        supplier: String,

        /// Free-text description
        #[arg(long, default_value = "")]
        description: String,
    },

    /// Update fields of an existing item (status is always recomputed)
    Update {
        /// Item identifier
        id: u64,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        category: Option<String>,

        #[arg(long)]
        buy_price: Option<i64>,

        #[arg(long)]
        sell_price: Option<i64>,

        #[arg(long)]
        stock: Option<i64>,

        #[arg(long)]
        min_stock: Option<i64>,

        #[arg(long)]
        supplier: Option<String>,

        #[arg(long)]
        description: Option<String>,
    },

    /// Delete an item (historical transactions are kept)
    Delete {
        /// Item identifier
        id: u64,
    },

    /// Record incoming stock from a supplier
    Incoming {
        /// Item identifier
        item: u64,

        /// Units received
        quantity: i64,

        /// Supplier name
        #[arg(short, long)]
        supplier: String,

        /// Total purchase cost (rupiah)
        #[arg(long, default_value = "0")]
        total_cost: i64,

        /// Free-text notes
        #[arg(long)]
        notes: Option<String>,
    },

    /// Record outgoing stock to a destination
    Outgoing {
        /// Item identifier
        item: u64,

        /// Units sent out
        quantity: i64,

        /// Destination
        #[arg(short, long)]
        destination: String,

        /// Free-text notes
        #[arg(long)]
        notes: Option<String>,
    },

    /// Record a sale at the item's current selling price
    Sale {
        /// Item identifier
        item: u64,

        /// Units sold
        quantity: i64,
    },

    /// List ledger transactions, newest first
    Transactions {
        /// Filter by kind: in, out, sale
        #[arg(short, long)]
        kind: Option<String>,

        /// Maximum entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Show the financial report
    Report,

    /// Initialize a database with the bundled dataset
    Init {
        /// Overwrite an existing database
        #[arg(short, long)]
        force: bool,
    },
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments.
pub fn execute(cli: Cli, config: &AppConfig) -> Result<(), InventoryError> {
    let database = config.resolve_database(cli.database);
    let json_mode = cli.json_mode;

    match cli.command {
        Some(Commands::Dashboard) | None => cmd_dashboard(&database, json_mode),
        Some(Commands::Items { low, category }) => {
            cmd_items(&database, json_mode, low, category.as_deref())
        }
        Some(Commands::Add {
            name,
            category,
            buy_price,
            sell_price,
            stock,
            min_stock,
            supplier,
            description,
        }) => cmd_add(
            &database,
            json_mode,
            invenpro_core::ItemDraft {
                name,
                category,
                buy_price,
                sell_price,
                stock,
                min_stock,
                supplier,
                description,
            },
        ),
        Some(Commands::Update {
            id,
            name,
            category,
            buy_price,
            sell_price,
            stock,
            min_stock,
            supplier,
            description,
        }) => cmd_update(
            &database,
            json_mode,
            id,
            invenpro_core::ItemPatch {
                name,
                category,
                buy_price,
                sell_price,
                stock,
                min_stock,
                supplier,
                description,
            },
        ),
        Some(Commands::Delete { id }) => cmd_delete(&database, id),
        Some(Commands::Incoming {
            item,
            quantity,
            supplier,
            total_cost,
            notes,
        }) => cmd_incoming(&database, json_mode, item, quantity, &supplier, total_cost, notes),
        Some(Commands::Outgoing {
            item,
            quantity,
            destination,
            notes,
        }) => cmd_outgoing(&database, json_mode, item, quantity, &destination, notes),
        Some(Commands::Sale { item, quantity }) => {
            cmd_sale(&database, json_mode, item, quantity)
        }
        Some(Commands::Transactions { kind, limit }) => {
            cmd_transactions(&database, json_mode, kind.as_deref(), limit)
        }
        Some(Commands::Report) => cmd_report(&database, json_mode),
        Some(Commands::Init { force }) => cmd_init(&database, force),
    }
}
