use std::sync::Arc;

use stock_watchlist_api::database::repositories::{StockRepository, StockRepositoryImpl};
use stock_watchlist_api::database::{ensure_stocks_table, establish_connection_pool};
use stock_watchlist_api::jobs::REFRESH_DELAY;
use stock_watchlist_api::{create_router, PriceRefresher, RefreshEvent};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Load environment variables from .env file (if present)
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "stock_watchlist_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Connection string is the one required piece of configuration
    let database_url = match std::env::var("DATABASE_URL") {
        Ok(url) => url,
        Err(_) => {
            tracing::error!("DATABASE_URL must be set");
            std::process::exit(1);
        }
    };

    let pool_size = std::env::var("DB_POOL_MAX_SIZE")
        .ok()
        .and_then(|s| s.parse::<u32>().ok())
        .unwrap_or(20);

    // Startup failures are fatal by design: no database, no service
    let pool = match establish_connection_pool(&database_url, pool_size) {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Failed to establish database connection: {}", e);
            std::process::exit(1);
        }
    };

    let table_result = pool
        .get_conn()
        .and_then(|mut conn| ensure_stocks_table(&mut conn));
    if let Err(e) = table_result {
        tracing::error!("Failed to ensure stocks table: {}", e);
        std::process::exit(1);
    }

    // Repository over the shared pool, injected into the handlers
    let pool_clone = pool.clone();
    let repository =
        Arc::new(StockRepositoryImpl::new(move || pool_clone.get_conn())) as Arc<dyn StockRepository>;

    // Background price refresher; its completion channel drains into the log
    let (refresher, mut refresh_events) = PriceRefresher::new(REFRESH_DELAY);
    tokio::spawn(async move {
        while let Some(event) = refresh_events.recv().await {
            match event {
                RefreshEvent::Completed { ticker } => {
                    tracing::debug!("Price refresh completed for {}", ticker);
                }
                RefreshEvent::Failed { ticker, error } => {
                    tracing::error!("Price refresh failed for {}: {}", ticker, error);
                }
            }
        }
    });

    let app = create_router(repository, Arc::new(refresher));

    // Fixed listening port
    let addr = "0.0.0.0:8080";
    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();

    tracing::info!("🚀 Stock watchlist API running on http://{}", addr);
    tracing::info!("📚 Swagger UI: http://{}/swagger-ui", addr);
    tracing::info!("📈 Watchlist: http://{}/stocks", addr);

    axum::serve(listener, app).await.unwrap();
}
