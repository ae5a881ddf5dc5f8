//! Endpoint handlers. Each one parses its parameters and delegates to [`crate::core`].

use super::{AppState, error::ApiError, params::QueryParams};
use crate::{
    core::{self, BarChartEntry, CombinedData, PieChartEntry, Statistics},
    entities::transaction,
};
use axum::{
    Json,
    extract::{Query, State},
};
use serde::Serialize;
use std::collections::HashMap;
use tracing::info;

type ApiResult<T> = Result<Json<T>, ApiError>;

/// Body of the re-seed response.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    /// Outcome description
    pub message: &'static str,
}

/// `GET /initdb` - replaces the stored records with the seed dataset.
pub async fn init_db(State(state): State<AppState>) -> ApiResult<MessageResponse> {
    info!(source = %state.seed_url, "Re-seeding store");
    core::reseed(&state.db, &state.loader, &state.seed_url).await?;
    Ok(Json(MessageResponse {
        message: core::SEED_SUCCESS_MESSAGE,
    }))
}

/// `GET /` - one page of transactions matching `search`.
pub async fn list_transactions(
    State(state): State<AppState>,
    Query(raw): Query<HashMap<String, String>>,
) -> ApiResult<Vec<transaction::Model>> {
    let params = QueryParams::from(raw);
    let records =
        core::list_transactions(&state.db, params.search(), params.pagination()).await?;
    Ok(Json(records))
}

/// `GET /statistics` - sale totals for `month`.
pub async fn statistics(
    State(state): State<AppState>,
    Query(raw): Query<HashMap<String, String>>,
) -> ApiResult<Statistics> {
    let params = QueryParams::from(raw);
    Ok(Json(core::get_statistics(&state.db, params.month()).await?))
}

/// `GET /bar_chart` - price-range counts for `month`.
pub async fn bar_chart(
    State(state): State<AppState>,
    Query(raw): Query<HashMap<String, String>>,
) -> ApiResult<Vec<BarChartEntry>> {
    let params = QueryParams::from(raw);
    Ok(Json(core::get_bar_chart(&state.db, params.month()).await?))
}

/// `GET /pie_chart` - category counts for `month`.
pub async fn pie_chart(
    State(state): State<AppState>,
    Query(raw): Query<HashMap<String, String>>,
) -> ApiResult<Vec<PieChartEntry>> {
    let params = QueryParams::from(raw);
    Ok(Json(core::get_pie_chart(&state.db, params.month()).await?))
}

/// `GET /combined_data` - listing plus all aggregates for `month`.
pub async fn combined_data(
    State(state): State<AppState>,
    Query(raw): Query<HashMap<String, String>>,
) -> ApiResult<CombinedData> {
    let params = QueryParams::from(raw);
    let combined = core::get_combined_data(
        &state.db,
        params.month(),
        params.search(),
        params.pagination(),
    )
    .await?;
    Ok(Json(combined))
}
