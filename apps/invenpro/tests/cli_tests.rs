//! # CLI Integration Tests
//!
//! Argument parsing, config precedence and end-to-end command execution
//! against a temporary database.

use clap::Parser;
use invenpro::cli::{Cli, Commands, execute, kind_label, status_label, txn_amount};
use invenpro::config::AppConfig;
use invenpro_core::{StockStatus, Transaction, TxnId, TxnKind};
use std::path::PathBuf;

// =============================================================================
// ARGUMENT PARSING
// =============================================================================

mod parsing {
    use super::*;

    #[test]
    fn no_subcommand_defaults_to_dashboard() {
        let cli = Cli::try_parse_from(["invenpro"]).expect("parse");
        assert!(cli.command.is_none());
        assert!(!cli.json_mode);
    }

    #[test]
    fn sale_takes_item_and_quantity() {
        let cli = Cli::try_parse_from(["invenpro", "sale", "3", "2"]).expect("parse");
        assert!(matches!(
            cli.command,
            Some(Commands::Sale { item: 3, quantity: 2 })
        ));
    }

    #[test]
    fn incoming_requires_supplier() {
        assert!(Cli::try_parse_from(["invenpro", "incoming", "3", "50"]).is_err());

        let cli = Cli::try_parse_from([
            "invenpro",
            "incoming",
            "3",
            "50",
            "--supplier",
            "CV Kopi Nusantara",
            "--total-cost",
            "2250000",
        ])
        .expect("parse");

        assert!(matches!(
            cli.command,
            Some(Commands::Incoming {
                item: 3,
                quantity: 50,
                total_cost: 2_250_000,
                ..
            })
        ));
    }

    #[test]
    fn global_flags_apply_to_subcommands() {
        let cli = Cli::try_parse_from([
            "invenpro",
            "items",
            "--low",
            "--json-mode",
            "-D",
            "shop.db",
        ])
        .expect("parse");

        assert!(cli.json_mode);
        assert_eq!(cli.database, Some(PathBuf::from("shop.db")));
        assert!(matches!(
            cli.command,
            Some(Commands::Items { low: true, .. })
        ));
    }

    #[test]
    fn update_fields_are_optional() {
        let cli = Cli::try_parse_from(["invenpro", "update", "7", "--stock", "12"])
            .expect("parse");

        assert!(matches!(
            cli.command,
            Some(Commands::Update {
                id: 7,
                stock: Some(12),
                name: None,
                ..
            })
        ));
    }
}

// =============================================================================
// RENDER HELPERS
// =============================================================================

mod labels {
    use super::*;

    #[test]
    fn kind_labels_match_wire_names() {
        let sale = TxnKind::Sale {
            sell_price: 100,
            total_amount: 200,
        };
        let incoming = TxnKind::Incoming {
            supplier: "PT X".to_string(),
            total_cost: 500,
        };
        let outgoing = TxnKind::Outgoing {
            destination: "Toko".to_string(),
        };

        assert_eq!(kind_label(&sale), "sale");
        assert_eq!(kind_label(&incoming), "in");
        assert_eq!(kind_label(&outgoing), "out");
    }

    #[test]
    fn status_labels_highlight_attention_states() {
        assert_eq!(status_label(StockStatus::Safe), "safe");
        assert_eq!(status_label(StockStatus::Low), "LOW");
        assert_eq!(status_label(StockStatus::Out), "OUT");
    }

    #[test]
    fn amount_column_per_kind() {
        let date = chrono::NaiveDate::from_ymd_opt(2026, 2, 13).unwrap_or_default();
        let sale = Transaction::sale(TxnId(1), "X".to_string(), 2, date, 100, 200);
        let out = Transaction::outgoing(TxnId(2), "X".to_string(), 2, date, "Y".to_string(), None);

        assert_eq!(txn_amount(&sale), Some(200));
        assert_eq!(txn_amount(&out), None);
    }
}

// =============================================================================
// END-TO-END EXECUTION
// =============================================================================

mod execution {
    use super::*;

    fn run(args: &[&str], database: &std::path::Path) -> Result<(), invenpro_core::InventoryError> {
        let db = database.to_string_lossy().into_owned();
        let mut full = vec!["invenpro", "--quiet", "-D", db.as_str()];
        full.extend_from_slice(args);
        let cli = Cli::try_parse_from(full).expect("parse");
        execute(cli, &AppConfig::default())
    }

    #[test]
    fn init_then_movements_roundtrip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let db = dir.path().join("invenpro.db");

        run(&["init"], &db).expect("init");
        // Bundled dataset: item 1 is the laptop with stock 15
        run(&["sale", "1", "2"], &db).expect("sale");
        run(
            &[
                "incoming",
                "3",
                "50",
                "--supplier",
                "CV Kopi Nusantara",
                "--total-cost",
                "2250000",
            ],
            &db,
        )
        .expect("incoming");

        let store = invenpro_core::InventoryStore::open(&db).expect("open");
        assert_eq!(
            store.get_item(invenpro_core::ItemId(1)).map(|i| i.stock),
            Some(13)
        );
        assert_eq!(
            store.get_item(invenpro_core::ItemId(3)).map(|i| i.stock),
            Some(53)
        );
        assert_eq!(store.transaction_count(), 10);
    }

    #[test]
    fn insufficient_stock_is_a_clean_exit() {
        let dir = tempfile::tempdir().expect("tempdir");
        let db = dir.path().join("invenpro.db");
        run(&["init"], &db).expect("init");

        // Item 4 (Kaos Polos Cotton) is out of stock; the command reports the
        // business outcome and does not error
        run(&["sale", "4", "1"], &db).expect("clean exit");

        let store = invenpro_core::InventoryStore::open(&db).expect("open");
        assert_eq!(
            store.get_item(invenpro_core::ItemId(4)).map(|i| i.stock),
            Some(0)
        );
        // No ledger entry was appended beyond the bundled eight
        assert_eq!(store.transaction_count(), 8);
    }

    #[test]
    fn add_and_delete_via_cli() {
        let dir = tempfile::tempdir().expect("tempdir");
        let db = dir.path().join("invenpro.db");
        run(&["init"], &db).expect("init");

        run(
            &[
                "add",
                "--name",
                "Monitor 24in",
                "--category",
                "Elektronik",
                "--stock",
                "6",
                "--min-stock",
                "2",
                "--sell-price",
                "1500000",
            ],
            &db,
        )
        .expect("add");

        {
            let store = invenpro_core::InventoryStore::open(&db).expect("open");
            assert_eq!(store.item_count(), 11);
        }

        // Deleting twice is idempotent at the CLI level too
        run(&["delete", "11"], &db).expect("delete");
        run(&["delete", "11"], &db).expect("delete again");

        let store = invenpro_core::InventoryStore::open(&db).expect("open");
        assert_eq!(store.item_count(), 10);
    }

    #[test]
    fn validation_errors_propagate() {
        let dir = tempfile::tempdir().expect("tempdir");
        let db = dir.path().join("invenpro.db");
        run(&["init"], &db).expect("init");

        let result = run(&["add", "--name", "", "--category", "X"], &db);
        assert!(matches!(
            result,
            Err(invenpro_core::InventoryError::Validation(_))
        ));
    }
}
