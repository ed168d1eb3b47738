use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::{error::ApiResult, main_lib::AppState};
use quotedock_core::quotes::{BarSeries, QuoteSet};
use quotedock_market_data::models::{Quote, Snapshot};

/// Latest quotes for the configured symbol list.
async fn get_all_quotes(State(state): State<Arc<AppState>>) -> ApiResult<Json<QuoteSet>> {
    let quote_set = state.quote_service.fetch_all_quotes().await?;
    Ok(Json(quote_set))
}

/// Latest quote for one symbol.
async fn get_quote(
    State(state): State<Arc<AppState>>,
    Path(symbol): Path<String>,
) -> ApiResult<Json<Quote>> {
    let quote = state.quote_service.fetch_quote_by_symbol(&symbol).await?;
    Ok(Json(quote))
}

/// Composite snapshot for one symbol.
async fn get_snapshot(
    State(state): State<Arc<AppState>>,
    Path(symbol): Path<String>,
) -> ApiResult<Json<Snapshot>> {
    let snapshot = state.quote_service.fetch_snapshot(&symbol).await?;
    Ok(Json(snapshot))
}

/// Query parameters for the historical-bars endpoint. Fields default to
/// empty so an omitted parameter flows into the service's validation
/// taxonomy instead of a framework rejection.
#[derive(Deserialize)]
struct BarsQuery {
    #[serde(default)]
    timeframe: String,
    #[serde(default)]
    start: String,
    #[serde(default)]
    end: String,
}

/// Historical bars for one symbol over a timeframe and date range.
async fn get_historical_bars(
    State(state): State<Arc<AppState>>,
    Path(symbol): Path<String>,
    Query(query): Query<BarsQuery>,
) -> ApiResult<Json<BarSeries>> {
    let series = state
        .quote_service
        .fetch_historical_bars(&symbol, &query.timeframe, &query.start, &query.end)
        .await?;
    Ok(Json(series))
}

#[derive(Serialize)]
struct SaveResponse {
    saved: usize,
}

/// Trigger an immediate fetch-and-persist cycle.
async fn save_quotes(State(state): State<Arc<AppState>>) -> ApiResult<Json<SaveResponse>> {
    let saved = state.quote_service.save_all_quotes().await?;
    Ok(Json(SaveResponse { saved }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/quotes/all", get(get_all_quotes))
        .route("/quotes/save", post(save_quotes))
        .route("/quotes/{symbol}", get(get_quote))
        .route("/quotes/{symbol}/snapshot", get(get_snapshot))
        .route("/quotes/{symbol}/bars", get(get_historical_bars))
}
