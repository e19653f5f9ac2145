use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use std::sync::Arc;

use crate::api::errors::WatchlistError;
use crate::api::responses::UpdateStockRequest;
use crate::database::models::Stock;
use crate::database::repositories::StockRepository;
use crate::jobs::PriceRefresher;

/// Shared state for the watchlist handlers
#[derive(Clone)]
pub struct WatchlistState {
    pub repository: Arc<dyn StockRepository>,
    pub refresher: Arc<PriceRefresher>,
}

/// Get the full watchlist
#[utoipa::path(
    get,
    path = "/stocks",
    tag = "watchlist",
    responses(
        (status = 200, description = "All stocks on the watchlist", body = Vec<Stock>),
        (status = 500, description = "Storage error", body = String)
    )
)]
pub async fn get_watchlist(
    State(state): State<WatchlistState>,
) -> Result<Json<Vec<Stock>>, WatchlistError> {
    let stocks = state.repository.list_all()?;
    Ok(Json(stocks))
}

/// Add a stock to the watchlist
///
/// On success a detached background task is spawned to refresh the price;
/// the response does not wait for it.
#[utoipa::path(
    post,
    path = "/stocks",
    tag = "watchlist",
    request_body = Stock,
    responses(
        (status = 201, description = "Stock added", body = String),
        (status = 400, description = "Malformed request body", body = String),
        (status = 409, description = "Ticker already exists", body = String),
        (status = 500, description = "Storage error", body = String)
    )
)]
pub async fn add_stock(
    State(state): State<WatchlistState>,
    body: Result<Json<Stock>, JsonRejection>,
) -> Result<(StatusCode, String), WatchlistError> {
    let Json(stock) = body.map_err(|e| WatchlistError::InvalidInput(e.body_text()))?;

    let ticker = stock.ticker.clone();
    state.repository.insert(stock)?;

    // Fire-and-forget: the request does not await the refresh
    state.refresher.spawn(ticker.clone());

    Ok((
        StatusCode::CREATED,
        format!("Stock {} added successfully", ticker),
    ))
}

/// Update a stock's name and price
#[utoipa::path(
    put,
    path = "/stocks/{ticker}",
    tag = "watchlist",
    params(
        ("ticker" = String, Path, description = "Ticker of the stock to update")
    ),
    request_body = UpdateStockRequest,
    responses(
        (status = 200, description = "Stock updated", body = String),
        (status = 400, description = "Malformed request body", body = String),
        (status = 500, description = "Storage error", body = String)
    )
)]
pub async fn update_stock(
    State(state): State<WatchlistState>,
    Path(ticker): Path<String>,
    body: Result<Json<UpdateStockRequest>, JsonRejection>,
) -> Result<String, WatchlistError> {
    let Json(update) = body.map_err(|e| WatchlistError::InvalidInput(e.body_text()))?;

    let matched = state
        .repository
        .update(&ticker, &update.name, update.price)?;
    if matched == 0 {
        // Inherited behavior: a missing ticker is a silent no-op success
        tracing::debug!("Update for {} matched no rows", ticker);
    }

    Ok(format!("Stock {} updated successfully", ticker))
}

/// Remove a stock from the watchlist
#[utoipa::path(
    delete,
    path = "/stocks/{ticker}",
    tag = "watchlist",
    params(
        ("ticker" = String, Path, description = "Ticker of the stock to delete")
    ),
    responses(
        (status = 200, description = "Stock deleted", body = String),
        (status = 500, description = "Storage error", body = String)
    )
)]
pub async fn delete_stock(
    State(state): State<WatchlistState>,
    Path(ticker): Path<String>,
) -> Result<String, WatchlistError> {
    let deleted = state.repository.delete(&ticker)?;
    if deleted == 0 {
        tracing::debug!("Delete for {} matched no rows", ticker);
    }

    Ok(format!("Stock {} deleted successfully", ticker))
}
