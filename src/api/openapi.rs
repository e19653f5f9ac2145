use utoipa::OpenApi;

use crate::api::responses::UpdateStockRequest;
use crate::database::models::Stock;

/// OpenAPI documentation for the watchlist API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Stock Watchlist API",
        description = "Minimal CRUD service for a stock watchlist",
        version = "0.1.0"
    ),
    paths(
        crate::api::handlers::get_watchlist,
        crate::api::handlers::add_stock,
        crate::api::handlers::update_stock,
        crate::api::handlers::delete_stock,
    ),
    components(schemas(Stock, UpdateStockRequest)),
    tags(
        (name = "watchlist", description = "Stock watchlist CRUD operations")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_document_covers_all_routes() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;

        assert!(paths.contains_key("/stocks"));
        assert!(paths.contains_key("/stocks/{ticker}"));
    }
}
