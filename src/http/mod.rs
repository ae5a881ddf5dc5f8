//! HTTP layer - axum router, request parameters and error rendering.

/// Error responses
pub mod error;
/// Endpoint handlers
pub mod handlers;
/// Query-string parameter parsing
pub mod params;

use crate::loader::SeedLoader;
use axum::{Router, routing::get};
use sea_orm::DatabaseConnection;
use std::sync::Arc;

/// Shared state handed to every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Record store connection, shared by every clone of the state
    pub db: Arc<DatabaseConnection>,
    /// Client for the seed source
    pub loader: SeedLoader,
    /// Where `/initdb` downloads records from
    pub seed_url: Arc<str>,
}

impl AppState {
    /// Creates the handler state.
    #[must_use]
    pub fn new(db: DatabaseConnection, loader: SeedLoader, seed_url: &str) -> Self {
        Self {
            db: Arc::new(db),
            loader,
            seed_url: Arc::from(seed_url),
        }
    }
}

/// Joins `base` and `suffix` into a route path. An empty `suffix` is the base itself.
fn route_path(base: &str, suffix: &str) -> String {
    let base = base.trim_matches('/');
    match (base.is_empty(), suffix.is_empty()) {
        (true, _) => format!("/{suffix}"),
        (false, true) => format!("/{base}"),
        (false, false) => format!("/{base}/{suffix}"),
    }
}

/// Builds the router with every endpoint mounted under `base_path`.
///
/// The listing answers on both `base_path` and `base_path/`.
pub fn create_router(state: AppState, base_path: &str) -> Router {
    let root = route_path(base_path, "");
    let mut router = Router::new()
        .route(&root, get(handlers::list_transactions))
        .route(&route_path(base_path, "initdb"), get(handlers::init_db))
        .route(&route_path(base_path, "statistics"), get(handlers::statistics))
        .route(&route_path(base_path, "bar_chart"), get(handlers::bar_chart))
        .route(&route_path(base_path, "pie_chart"), get(handlers::pie_chart))
        .route(
            &route_path(base_path, "combined_data"),
            get(handlers::combined_data),
        );
    if root != "/" {
        router = router.route(&format!("{root}/"), get(handlers::list_transactions));
    }
    router.with_state(state)
}
