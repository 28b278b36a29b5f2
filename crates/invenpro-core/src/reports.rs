//! # Read Projections
//!
//! Dashboard and report aggregates, computed on demand from a store snapshot.
//!
//! Projections own no state and enforce no invariants: every value here is
//! recomputed from the current items and transaction ledger on each read.
//! The store holds no materialized aggregate.
//!
//! Ratios are integer per-mille values; the core does no floating-point
//! arithmetic.

use crate::{InventoryItem, StockStatus, StoreSnapshot, Transaction, TxnKind};
use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::collections::BTreeMap;

// =============================================================================
// DASHBOARD STATS
// =============================================================================

/// The headline figures of the dashboard.
///
/// Monthly figures cover the calendar month of the supplied reference date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    /// Number of tracked items.
    pub total_items: usize,
    /// Sum of stock across all items.
    pub total_stock: i64,
    /// Items currently at or below their reorder threshold (status Low).
    pub low_stock_items: usize,
    /// Sale revenue recorded this month.
    pub monthly_sales: i64,
    /// Incoming stock cost recorded this month.
    pub monthly_incoming: i64,
    /// Units sent out this month.
    pub monthly_outgoing: i64,
}

impl DashboardStats {
    /// Compute the stats for the month of `today`.
    #[must_use]
    pub fn compute(snapshot: &StoreSnapshot, today: NaiveDate) -> Self {
        let total_stock = snapshot.items.iter().map(|item| item.stock).sum();
        let low_stock_items = snapshot
            .items
            .iter()
            .filter(|item| item.status == StockStatus::Low)
            .count();

        let mut monthly_sales = 0i64;
        let mut monthly_incoming = 0i64;
        let mut monthly_outgoing = 0i64;
        for txn in snapshot
            .transactions
            .iter()
            .filter(|txn| same_month(txn.date, today))
        {
            match &txn.kind {
                TxnKind::Sale { total_amount, .. } => {
                    monthly_sales = monthly_sales.saturating_add(*total_amount);
                }
                TxnKind::Incoming { total_cost, .. } => {
                    monthly_incoming = monthly_incoming.saturating_add(*total_cost);
                }
                TxnKind::Outgoing { .. } => {
                    monthly_outgoing = monthly_outgoing.saturating_add(txn.quantity);
                }
            }
        }

        Self {
            total_items: snapshot.items.len(),
            total_stock,
            low_stock_items,
            monthly_sales,
            monthly_incoming,
            monthly_outgoing,
        }
    }
}

fn same_month(a: NaiveDate, b: NaiveDate) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

// =============================================================================
// FINANCIAL SUMMARY
// =============================================================================

/// All-time revenue, cost and profit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialSummary {
    pub total_sales: i64,
    pub total_cost: i64,
    /// May be negative.
    pub profit: i64,
}

/// Sum sale revenue and incoming cost over the whole ledger.
#[must_use]
pub fn financial_summary(transactions: &[Transaction]) -> FinancialSummary {
    let mut total_sales = 0i64;
    let mut total_cost = 0i64;
    for txn in transactions {
        match &txn.kind {
            TxnKind::Sale { total_amount, .. } => {
                total_sales = total_sales.saturating_add(*total_amount);
            }
            TxnKind::Incoming { total_cost: cost, .. } => {
                total_cost = total_cost.saturating_add(*cost);
            }
            TxnKind::Outgoing { .. } => {}
        }
    }
    FinancialSummary {
        total_sales,
        total_cost,
        profit: total_sales.saturating_sub(total_cost),
    }
}

// =============================================================================
// TIME SERIES
// =============================================================================

/// One point of the sales-by-date series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SalesPoint {
    pub date: NaiveDate,
    pub amount: i64,
}

/// Sale revenue grouped by calendar date, ascending.
#[must_use]
pub fn sales_by_date(transactions: &[Transaction]) -> Vec<SalesPoint> {
    let mut by_date: BTreeMap<NaiveDate, i64> = BTreeMap::new();
    for txn in transactions {
        if let TxnKind::Sale { total_amount, .. } = &txn.kind {
            let amount = by_date.entry(txn.date).or_insert(0);
            *amount = amount.saturating_add(*total_amount);
        }
    }
    by_date
        .into_iter()
        .map(|(date, amount)| SalesPoint { date, amount })
        .collect()
}

/// One point of the incoming-stock series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StockInPoint {
    pub year: i32,
    pub month: u32,
    pub quantity: i64,
}

/// Incoming units grouped by calendar month, ascending.
#[must_use]
pub fn stock_in_by_month(transactions: &[Transaction]) -> Vec<StockInPoint> {
    let mut by_month: BTreeMap<(i32, u32), i64> = BTreeMap::new();
    for txn in transactions {
        if matches!(txn.kind, TxnKind::Incoming { .. }) {
            let quantity = by_month.entry((txn.date.year(), txn.date.month())).or_insert(0);
            *quantity = quantity.saturating_add(txn.quantity);
        }
    }
    by_month
        .into_iter()
        .map(|((year, month), quantity)| StockInPoint {
            year,
            month,
            quantity,
        })
        .collect()
}

// =============================================================================
// RANKINGS & GROUPINGS
// =============================================================================

/// One row of the top-sellers ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopSeller {
    pub name: String,
    pub quantity: i64,
}

/// Items ranked by units sold, descending (name-ascending tiebreak).
///
/// Grouping is by the ledger's name snapshots, so sales of since-deleted
/// items still count.
#[must_use]
pub fn top_selling_items(transactions: &[Transaction], limit: usize) -> Vec<TopSeller> {
    let mut by_name: BTreeMap<&str, i64> = BTreeMap::new();
    for txn in transactions {
        if matches!(txn.kind, TxnKind::Sale { .. }) {
            let quantity = by_name.entry(txn.item_name.as_str()).or_insert(0);
            *quantity = quantity.saturating_add(txn.quantity);
        }
    }

    let mut ranking: Vec<TopSeller> = by_name
        .into_iter()
        .map(|(name, quantity)| TopSeller {
            name: name.to_string(),
            quantity,
        })
        .collect();
    // Stable sort keeps the name-ascending order for equal quantities
    ranking.sort_by(|a, b| b.quantity.cmp(&a.quantity));
    ranking.truncate(limit);
    ranking
}

/// One slice of the category distribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryShare {
    pub category: String,
    pub items: usize,
    /// Integer share of all items, in parts per thousand.
    pub per_mille: u64,
}

/// Item count and per-mille share per category, category-ascending.
#[must_use]
pub fn category_distribution(items: &[InventoryItem]) -> Vec<CategoryShare> {
    if items.is_empty() {
        return Vec::new();
    }

    let mut by_category: BTreeMap<&str, usize> = BTreeMap::new();
    for item in items {
        *by_category.entry(item.category.as_str()).or_insert(0) += 1;
    }

    let total = items.len() as u64;
    by_category
        .into_iter()
        .map(|(category, count)| CategoryShare {
            category: category.to_string(),
            items: count,
            per_mille: (count as u64).saturating_mul(1000) / total,
        })
        .collect()
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults;

    fn feb_snapshot() -> StoreSnapshot {
        StoreSnapshot {
            items: defaults::default_items(),
            transactions: defaults::default_transactions(),
        }
    }

    fn feb_today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, 15).unwrap_or_default()
    }

    #[test]
    fn dashboard_stats_match_bundled_dataset() {
        let stats = DashboardStats::compute(&feb_snapshot(), feb_today());

        assert_eq!(stats.total_items, 10);
        assert_eq!(stats.total_stock, 420);
        assert_eq!(stats.low_stock_items, 3);
        assert_eq!(stats.monthly_sales, 19_310_000);
        assert_eq!(stats.monthly_incoming, 77_750_000);
        assert_eq!(stats.monthly_outgoing, 15);
    }

    #[test]
    fn monthly_figures_are_scoped_to_the_month() {
        let march = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap_or_default();
        let stats = DashboardStats::compute(&feb_snapshot(), march);

        assert_eq!(stats.monthly_sales, 0);
        assert_eq!(stats.monthly_incoming, 0);
        assert_eq!(stats.monthly_outgoing, 0);
        // Item-level figures are month-independent
        assert_eq!(stats.total_stock, 420);
    }

    #[test]
    fn financial_summary_allows_negative_profit() {
        let summary = financial_summary(&defaults::default_transactions());

        assert_eq!(summary.total_sales, 19_310_000);
        assert_eq!(summary.total_cost, 77_750_000);
        assert_eq!(summary.profit, -58_440_000);
    }

    #[test]
    fn sales_series_is_date_ascending() {
        let series = sales_by_date(&defaults::default_transactions());

        let dates: Vec<_> = series.iter().map(|p| p.date.day()).collect();
        assert_eq!(dates, vec![10, 12, 13]);
        assert_eq!(series[0].amount, 17_000_000);
        assert_eq!(series[2].amount, 360_000);
    }

    #[test]
    fn stock_in_groups_by_month() {
        let series = stock_in_by_month(&defaults::default_transactions());

        assert_eq!(series.len(), 1);
        assert_eq!(series[0].year, 2026);
        assert_eq!(series[0].month, 2);
        assert_eq!(series[0].quantity, 160);
    }

    #[test]
    fn top_sellers_ranked_and_truncated() {
        let ranking = top_selling_items(&defaults::default_transactions(), 2);

        assert_eq!(ranking.len(), 2);
        assert_eq!(ranking[0].name, "Pulpen Pilot G2");
        assert_eq!(ranking[0].quantity, 20);
        assert_eq!(ranking[1].name, "Keyboard Mechanical");
        assert_eq!(ranking[1].quantity, 3);
    }

    #[test]
    fn category_distribution_sums_to_whole() {
        let shares = category_distribution(&defaults::default_items());

        assert_eq!(shares.len(), 5);
        assert_eq!(shares.iter().map(|s| s.items).sum::<usize>(), 10);

        let electronics = shares
            .iter()
            .find(|s| s.category == "Elektronik")
            .expect("category");
        assert_eq!(electronics.items, 4);
        assert_eq!(electronics.per_mille, 400);
    }

    #[test]
    fn empty_inputs_produce_empty_projections() {
        assert!(category_distribution(&[]).is_empty());
        assert!(sales_by_date(&[]).is_empty());
        assert!(top_selling_items(&[], 5).is_empty());

        let summary = financial_summary(&[]);
        assert_eq!(summary.profit, 0);
    }
}
