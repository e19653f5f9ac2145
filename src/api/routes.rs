use axum::{
    routing::{get, put},
    Router,
};
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::database::repositories::StockRepository;
use crate::jobs::PriceRefresher;

use super::handlers::*;
use super::openapi::ApiDoc;

/// Create the API router with Swagger UI
///
/// The repository is injected so tests can run the full router against an
/// in-memory store.
pub fn create_router(
    repository: Arc<dyn StockRepository>,
    refresher: Arc<PriceRefresher>,
) -> Router {
    let state = WatchlistState {
        repository,
        refresher,
    };

    Router::new()
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Watchlist endpoints
        .route("/stocks", get(get_watchlist).post(add_stock))
        .route("/stocks/:ticker", put(update_stock).delete(delete_stock))
        .with_state(state)
}
