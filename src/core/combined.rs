//! Combined dashboard view: listing, statistics and both charts in one response.

use crate::{
    core::{
        charts::{self, BarChartEntry, PieChartEntry, Statistics},
        listing::{self, Pagination},
    },
    entities::transaction,
    errors::Result,
};
use sea_orm::DatabaseConnection;
use serde::Serialize;
use tracing::instrument;

/// Everything the dashboard shows for one month.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CombinedData {
    /// One page of the transaction listing
    pub transactions: Vec<transaction::Model>,
    /// Sale totals for the month
    pub statistics: Statistics,
    /// Price-range counts for the month
    pub bar_chart: Vec<BarChartEntry>,
    /// Category counts for the month
    pub pie_chart: Vec<PieChartEntry>,
}

/// Runs the listing and the three monthly aggregates concurrently.
///
/// The first failing sub-query fails the whole call; no partial result is returned.
#[instrument(skip(db))]
pub async fn get_combined_data(
    db: &DatabaseConnection,
    month: Option<i64>,
    search: &str,
    pagination: Pagination,
) -> Result<CombinedData> {
    let (transactions, statistics, bar_chart, pie_chart) = tokio::try_join!(
        listing::list_transactions(db, search, pagination),
        charts::get_statistics(db, month),
        charts::get_bar_chart(db, month),
        charts::get_pie_chart(db, month),
    )?;

    Ok(CombinedData {
        transactions,
        statistics,
        bar_chart,
        pie_chart,
    })
}
