use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{self, ConnectionManager, Pool, PooledConnection};
use diesel::result::DatabaseErrorKind;
use std::sync::Arc;
use thiserror::Error;

/// Type alias for PostgreSQL connection pool
pub type PgPool = Pool<ConnectionManager<PgConnection>>;

/// Type alias for pooled connection
pub type PgPooledConnection = PooledConnection<ConnectionManager<PgConnection>>;

/// SQL used to create the stocks table if it does not exist yet.
///
/// The only schema management this service does; there are no migrations.
const CREATE_STOCKS_TABLE: &str = "CREATE TABLE IF NOT EXISTS stocks (
    ticker TEXT PRIMARY KEY,
    name TEXT,
    price NUMERIC(10, 2)
)";

/// Database pool container for the watchlist database
#[derive(Clone)]
pub struct DatabasePool {
    pool: Arc<PgPool>,
}

impl DatabasePool {
    /// Create a new database pool from an existing pool instance
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool: Arc::new(pool),
        }
    }

    /// Get a connection from the pool
    pub fn get_conn(&self) -> Result<PgPooledConnection, DatabaseError> {
        self.pool
            .get()
            .map_err(|e| DatabaseError::ConnectionPoolError(e.to_string()))
    }
}

/// Database-related errors
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Connection pool error: {0}")]
    ConnectionPoolError(String),

    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Unique constraint violation: {0}")]
    UniqueViolation(String),

    #[error("Diesel error: {0}")]
    DieselError(diesel::result::Error),
}

impl From<diesel::result::Error> for DatabaseError {
    fn from(error: diesel::result::Error) -> Self {
        match error {
            diesel::result::Error::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
                DatabaseError::UniqueViolation(info.message().to_string())
            }
            other => DatabaseError::DieselError(other),
        }
    }
}

/// Establish the connection pool for the watchlist database
///
/// Builds the r2d2 pool, then checks out a connection and pings it with
/// `SELECT 1` to verify the database is actually reachable. Startup-time
/// failures here are non-recoverable; the caller exits the process.
///
/// # Arguments
/// * `database_url` - PostgreSQL connection URL
/// * `pool_size` - Maximum number of connections in the pool
pub fn establish_connection_pool(
    database_url: &str,
    pool_size: u32,
) -> Result<DatabasePool, DatabaseError> {
    tracing::info!("Establishing database connection pool...");

    let manager = ConnectionManager::<PgConnection>::new(database_url);
    let pool = r2d2::Pool::builder()
        .max_size(pool_size)
        .build(manager)
        .map_err(|e| DatabaseError::ConnectionPoolError(e.to_string()))?;

    tracing::info!("Database pool created with max size: {}", pool_size);

    // Ping to verify liveness
    let mut conn = pool
        .get()
        .map_err(|e| DatabaseError::ConnectionFailed(e.to_string()))?;
    diesel::sql_query("SELECT 1")
        .execute(&mut conn)
        .map_err(|e| DatabaseError::ConnectionFailed(e.to_string()))?;

    tracing::info!("Database connection successful");

    Ok(DatabasePool::new(pool))
}

/// Ensure the stocks table exists
pub fn ensure_stocks_table(conn: &mut PgConnection) -> Result<(), DatabaseError> {
    diesel::sql_query(CREATE_STOCKS_TABLE).execute(conn)?;
    tracing::info!("Stocks table ensured");
    Ok(())
}
