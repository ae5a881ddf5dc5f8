//! Re-seeding the store from the remote dataset.

use crate::{core::store, errors::Result, loader::SeedLoader};
use sea_orm::DatabaseConnection;
use tracing::{info, instrument};

/// Message returned to clients after a successful re-seed.
pub const SEED_SUCCESS_MESSAGE: &str = "Database initialized with seed data.";

/// Downloads the dataset from `source_url` and replaces every stored record with it.
///
/// Nothing is deleted if the download or parse fails. If the insert fails after the
/// delete, the store is left empty. Returns the number of records now stored.
#[instrument(skip(db, loader))]
pub async fn reseed(db: &DatabaseConnection, loader: &SeedLoader, source_url: &str) -> Result<u64> {
    let records = loader.load(source_url).await?;
    let inserted = store::replace_all(
        db,
        records
            .into_iter()
            .map(crate::loader::SeedRecord::into_active_model)
            .collect(),
    )
    .await?;
    info!(inserted, "Store re-seeded");
    Ok(inserted)
}
