//! Shared test utilities.
//!
//! Helpers for setting up in-memory test databases and building seed records with
//! sensible defaults.

use crate::{config::database::create_tables, core::store, errors::Result, loader::SeedRecord};
use chrono::{Datelike, TimeZone, Utc};
use sea_orm::DatabaseConnection;

/// Creates an in-memory `SQLite` database with all tables initialized.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    create_tables(&db).await?;
    Ok(db)
}

/// Builds a seed record sold on the 5th of `month` 2021 at noon UTC.
///
/// # Defaults
/// * `description`: `"Test transaction"`
/// * `image`: None
///
/// An out-of-range `month` falls back to the Unix epoch.
#[must_use]
pub fn record(title: &str, price: f64, sold: bool, category: &str, month: u32) -> SeedRecord {
    SeedRecord {
        title: title.to_string(),
        description: "Test transaction".to_string(),
        price,
        category: category.to_string(),
        image: None,
        sold,
        date_of_sale: Utc
            .with_ymd_and_hms(2021, month, 5, 12, 0, 0)
            .single()
            .unwrap_or_default(),
    }
}

/// Replaces the description of a test record.
#[must_use]
pub fn with_text(mut record: SeedRecord, description: &str) -> SeedRecord {
    record.description = description.to_string();
    record
}

/// Moves a test record's sale date into `year`, keeping month and day.
#[must_use]
pub fn in_year(mut record: SeedRecord, year: i32) -> SeedRecord {
    record.date_of_sale = record
        .date_of_sale
        .with_year(year)
        .unwrap_or(record.date_of_sale);
    record
}

/// Sets up a test database holding `records`, in order.
pub async fn setup_with_records(records: Vec<SeedRecord>) -> Result<DatabaseConnection> {
    let db = setup_test_db().await?;
    store::replace_all(
        &db,
        records
            .into_iter()
            .map(SeedRecord::into_active_model)
            .collect(),
    )
    .await?;
    Ok(db)
}

/// Two March records: a sold item at 50 in category "A" on the 5th and an
/// unsold item at 150 in category "B" on the 10th.
pub async fn march_scenario() -> Result<DatabaseConnection> {
    let mut unsold = record("Item B", 150.0, false, "B", 3);
    unsold.date_of_sale = unsold
        .date_of_sale
        .with_day(10)
        .unwrap_or(unsold.date_of_sale);

    setup_with_records(vec![record("Item A", 50.0, true, "A", 3), unsold]).await
}
