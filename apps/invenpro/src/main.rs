//! # InvenPro - Inventory Dashboard
//!
//! The main binary for the InvenPro inventory ledger store.
//!
//! This application provides:
//! - A CLI for every store operation (items, movements, sales)
//! - Dashboard and report views computed from store snapshots
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                apps/invenpro (THE BINARY)            │
//! │                                                      │
//! │   ┌─────────────┐        ┌────────────────────┐      │
//! │   │   CLI       │        │  Dashboard/Report  │      │
//! │   │  (clap)     │        │  rendering         │      │
//! │   └──────┬──────┘        └─────────┬──────────┘      │
//! │          │                         │                 │
//! │          └────────────┬────────────┘                 │
//! │                       ▼                              │
//! │              ┌─────────────────┐                     │
//! │              │  invenpro-core  │                     │
//! │              │   (THE LOGIC)   │                     │
//! │              └─────────────────┘                     │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```bash
//! # Dashboard summary (default command)
//! invenpro
//!
//! # Record movements
//! invenpro incoming 3 50 --supplier "CV Kopi Nusantara" --total-cost 2250000
//! invenpro sale 1 2
//!
//! # Reports
//! invenpro report
//! ```

use clap::Parser;
use invenpro::cli;
use invenpro::config::AppConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

fn main() {
    let cli = cli::Cli::parse();

    // Optional TOML config; flags still win over anything it sets
    let config = match cli.config.as_deref().map(AppConfig::load).transpose() {
        Ok(config) => config.unwrap_or_default(),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    init_tracing(&config);

    if !cli.quiet {
        print_banner();
    }

    if let Err(e) = cli::execute(cli, &config) {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing — INVENPRO_LOG_FORMAT=json enables machine-parseable
/// output and takes precedence over the config file.
fn init_tracing(config: &AppConfig) {
    let log_format = std::env::var("INVENPRO_LOG_FORMAT")
        .ok()
        .or_else(|| config.log_format.clone())
        .unwrap_or_else(|| "text".to_string());

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "invenpro=info".into());

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer())
                .init();
        }
    }
}

/// Print the InvenPro startup banner.
fn print_banner() {
    println!(
        r#"
  ___                     ____
 |_ _|_ ____   _____ _ __ |  _ \ _ __ ___
  | || '_ \ \ / / _ \ '_ \| |_) | '__/ _ \
  | || | | \ V /  __/ | | |  __/| | | (_) |
 |___|_| |_|\_/ \___|_| |_|_|   |_|  \___/

  Inventory Dashboard v{}
"#,
        env!("CARGO_PKG_VERSION")
    );
}
