//! Record store operations over the `transactions` table.
//!
//! These are the only functions that talk to the database. Callers build a
//! [`Condition`] with [`crate::core::filter`] and hand it in; nothing here knows
//! about query parameters.

use crate::{
    entities::{Transaction, transaction},
    errors::Result,
};
use sea_orm::{Condition, PaginatorTrait, QueryOrder, QuerySelect, prelude::*};
use tracing::{debug, instrument};

/// Rows per INSERT statement, keeps bound parameters well under `SQLite`'s limit.
const INSERT_CHUNK_SIZE: usize = 500;

/// Largest value `SQLite` accepts for LIMIT/OFFSET.
const MAX_SQL_INT: u64 = i64::MAX.unsigned_abs();

/// Deletes every record, then inserts `records`.
///
/// The two steps are separate statements: a reader can see an empty table in between,
/// and a failed insert leaves the table empty. Returns the number of rows inserted.
#[instrument(skip(db, records), fields(count = records.len()))]
pub async fn replace_all(
    db: &DatabaseConnection,
    records: Vec<transaction::ActiveModel>,
) -> Result<u64> {
    let deleted = Transaction::delete_many().exec(db).await?;
    debug!(rows = deleted.rows_affected, "Cleared transactions");

    let mut inserted = 0;
    let mut pending = records.into_iter().peekable();
    while pending.peek().is_some() {
        let chunk: Vec<_> = pending.by_ref().take(INSERT_CHUNK_SIZE).collect();
        let len = chunk.len() as u64;
        Transaction::insert_many(chunk).exec(db).await?;
        inserted += len;
    }

    Ok(inserted)
}

/// Records matching `filter` in insertion order, skipping `skip` and returning at most `limit`.
pub async fn find(
    db: &DatabaseConnection,
    filter: Condition,
    skip: u64,
    limit: u64,
) -> Result<Vec<transaction::Model>> {
    Transaction::find()
        .filter(filter)
        .order_by_asc(transaction::Column::Id)
        .offset(skip.min(MAX_SQL_INT))
        .limit(limit.min(MAX_SQL_INT))
        .all(db)
        .await
        .map_err(Into::into)
}

/// Number of records matching `filter`.
pub async fn count(db: &DatabaseConnection, filter: Condition) -> Result<u64> {
    Transaction::find()
        .filter(filter)
        .count(db)
        .await
        .map_err(Into::into)
}

/// Sum of `price` over records matching `filter`; 0 when nothing matches.
pub async fn sum_price(db: &DatabaseConnection, filter: Condition) -> Result<f64> {
    let total: Option<Option<f64>> = Transaction::find()
        .filter(filter)
        .select_only()
        .column_as(transaction::Column::Price.sum(), "total")
        .into_tuple()
        .one(db)
        .await?;

    Ok(total.flatten().unwrap_or(0.0))
}

/// Per-category record counts for records matching `filter`, ordered by category.
pub async fn count_by_category(
    db: &DatabaseConnection,
    filter: Condition,
) -> Result<Vec<(String, i64)>> {
    Transaction::find()
        .filter(filter)
        .select_only()
        .column(transaction::Column::Category)
        .column_as(transaction::Column::Id.count(), "count")
        .group_by(transaction::Column::Category)
        .order_by_asc(transaction::Column::Category)
        .into_tuple()
        .all(db)
        .await
        .map_err(Into::into)
}
