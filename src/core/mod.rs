//! Core query service - framework-agnostic reads, aggregates and re-seeding.
//!
//! Everything takes the database connection explicitly; the HTTP layer only parses
//! parameters and renders results.

/// Dashboard view combining the listing and all monthly aggregates
pub mod combined;
/// Monthly statistics, bar chart and pie chart
pub mod charts;
/// Condition builders and lenient parameter parsing
pub mod filter;
/// Paginated, searchable transaction listing
pub mod listing;
/// Replacing the store contents from the seed source
pub mod reseed;
/// Store primitives: replace, find, count, sum and group
pub mod store;

pub use charts::{
    BarChartEntry, PieChartEntry, Statistics, get_bar_chart, get_pie_chart, get_statistics,
};
pub use combined::{CombinedData, get_combined_data};
pub use listing::{Pagination, list_transactions};
pub use reseed::{SEED_SUCCESS_MESSAGE, reseed};
