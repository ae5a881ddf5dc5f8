//! Paginated transaction listing with free-text search.

use crate::{
    core::{filter, store},
    entities::transaction,
    errors::Result,
};
use sea_orm::DatabaseConnection;
use tracing::{debug, instrument};

/// Page used when the request gives none (or an unusable one).
pub const DEFAULT_PAGE: u64 = 1;
/// Page size used when the request gives none (or an unusable one).
pub const DEFAULT_PER_PAGE: u64 = 10;

/// A 1-based page number and page size, both at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: u64,
    per_page: u64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl Pagination {
    /// Builds a pagination, replacing zero values with the defaults.
    #[must_use]
    pub const fn new(page: u64, per_page: u64) -> Self {
        Self {
            page: if page == 0 { DEFAULT_PAGE } else { page },
            per_page: if per_page == 0 {
                DEFAULT_PER_PAGE
            } else {
                per_page
            },
        }
    }

    /// Builds a pagination from raw query parameters.
    ///
    /// Each value is read as its leading integer; anything missing, unparseable or
    /// below 1 falls back to the default. There is no upper bound on `per_page`.
    #[must_use]
    pub fn from_params(page: Option<&str>, per_page: Option<&str>) -> Self {
        let positive = |raw: Option<&str>| {
            raw.and_then(filter::parse_leading_int)
                .and_then(|value| u64::try_from(value).ok())
                .unwrap_or(0)
        };
        Self::new(positive(page), positive(per_page))
    }

    /// 1-based page number.
    #[must_use]
    pub const fn page(&self) -> u64 {
        self.page
    }

    /// Maximum number of records per page.
    #[must_use]
    pub const fn per_page(&self) -> u64 {
        self.per_page
    }

    /// Number of records before this page.
    #[must_use]
    pub const fn offset(&self) -> u64 {
        (self.page - 1).saturating_mul(self.per_page)
    }
}

/// Lists transactions matching `search`, one page at a time, in insertion order.
///
/// See [`filter::search`] for the matching rules. A page past the end is empty.
#[instrument(skip(db))]
pub async fn list_transactions(
    db: &DatabaseConnection,
    search: &str,
    pagination: Pagination,
) -> Result<Vec<transaction::Model>> {
    let records = store::find(
        db,
        filter::search(search),
        pagination.offset(),
        pagination.per_page(),
    )
    .await?;
    debug!(returned = records.len(), "Listed transactions");
    Ok(records)
}
