//! Monthly aggregates: sale statistics, price-range bar chart and category pie chart.
//!
//! Every aggregate here is restricted to records sold in one calendar month, in any
//! year. A missing or non-numeric month matches no records, so the aggregates come
//! back zeroed rather than failing.

use crate::{
    core::{filter, store},
    errors::Result,
};
use sea_orm::{Condition, DatabaseConnection};
use serde::Serialize;
use tracing::{debug, instrument};

/// Sale totals for one month.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    /// Sum of prices of sold items
    pub total_sale_amount: f64,
    /// Number of sold items
    pub total_sold_items: u64,
    /// Number of unsold items
    pub total_not_sold_items: u64,
}

/// One bar of the price-range chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BarChartEntry {
    /// Bucket label, e.g. `"101-200"`
    pub range: String,
    /// Records priced inside the bucket
    pub count: u64,
}

/// One slice of the category chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PieChartEntry {
    /// Product category
    pub category: String,
    /// Records in the category
    pub count: u64,
}

/// A price bucket: label, inclusive lower bound, exclusive upper bound.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceBucket {
    /// Label reported in the chart
    pub label: &'static str,
    /// Inclusive lower bound
    pub min: f64,
    /// Exclusive upper bound, `None` for the open-ended last bucket
    pub max: Option<f64>,
}

impl PriceBucket {
    const fn new(label: &'static str, min: f64, max: Option<f64>) -> Self {
        Self { label, min, max }
    }
}

/// Bar chart buckets in display order.
///
/// Bounds are `[min, max)`, so prices in `[100, 101)`, `[200, 201)` and so on fall
/// between buckets and are not counted anywhere.
pub const PRICE_BUCKETS: [PriceBucket; 10] = [
    PriceBucket::new("0-100", 0.0, Some(100.0)),
    PriceBucket::new("101-200", 101.0, Some(200.0)),
    PriceBucket::new("201-300", 201.0, Some(300.0)),
    PriceBucket::new("301-400", 301.0, Some(400.0)),
    PriceBucket::new("401-500", 401.0, Some(500.0)),
    PriceBucket::new("501-600", 501.0, Some(600.0)),
    PriceBucket::new("601-700", 601.0, Some(700.0)),
    PriceBucket::new("701-800", 701.0, Some(800.0)),
    PriceBucket::new("801-900", 801.0, Some(900.0)),
    PriceBucket::new("901-above", 901.0, None),
];

fn month_filter(month: Option<i64>) -> Condition {
    Condition::all().add(filter::sold_in_month(month))
}

/// Total sale amount and sold/unsold counts for `month`.
#[instrument(skip(db))]
pub async fn get_statistics(db: &DatabaseConnection, month: Option<i64>) -> Result<Statistics> {
    let sold = month_filter(month).add(filter::sold(true));
    let not_sold = month_filter(month).add(filter::sold(false));

    let statistics = Statistics {
        total_sale_amount: store::sum_price(db, sold.clone()).await?,
        total_sold_items: store::count(db, sold).await?,
        total_not_sold_items: store::count(db, not_sold).await?,
    };
    debug!(?statistics, "Computed statistics");
    Ok(statistics)
}

/// Record counts per [`PRICE_BUCKETS`] entry for `month`, in bucket order.
#[instrument(skip(db))]
pub async fn get_bar_chart(
    db: &DatabaseConnection,
    month: Option<i64>,
) -> Result<Vec<BarChartEntry>> {
    let mut entries = Vec::with_capacity(PRICE_BUCKETS.len());
    for bucket in &PRICE_BUCKETS {
        let condition = month_filter(month).add(filter::price_in_range(bucket.min, bucket.max));
        entries.push(BarChartEntry {
            range: bucket.label.to_string(),
            count: store::count(db, condition).await?,
        });
    }
    Ok(entries)
}

/// Record counts per category for `month`, ordered by category name.
#[instrument(skip(db))]
pub async fn get_pie_chart(
    db: &DatabaseConnection,
    month: Option<i64>,
) -> Result<Vec<PieChartEntry>> {
    let groups = store::count_by_category(db, month_filter(month)).await?;
    Ok(groups
        .into_iter()
        .map(|(category, count)| PieChartEntry {
            category,
            count: u64::try_from(count).unwrap_or_default(),
        })
        .collect())
}
