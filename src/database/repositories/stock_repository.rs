use crate::database::connection::{DatabaseError, PgPooledConnection};
use crate::database::models::Stock;
use crate::database::schema::stocks;
use diesel::prelude::*;
use rust_decimal::Decimal;
use std::sync::Arc;

/// Stock repository trait - defines interface for watchlist operations
///
/// Handlers depend on this trait rather than on a concrete database type,
/// so tests can substitute an in-memory store.
#[async_trait::async_trait]
pub trait StockRepository: Send + Sync {
    /// Get all stocks, in storage-defined order (no ORDER BY)
    fn list_all(&self) -> Result<Vec<Stock>, DatabaseError>;

    /// Insert a new stock; fails with `UniqueViolation` on a duplicate ticker
    fn insert(&self, stock: Stock) -> Result<(), DatabaseError>;

    /// Update name and price of the row matching ticker.
    /// Returns the number of rows matched; zero matches is not an error.
    fn update(&self, ticker: &str, name: &str, price: Decimal) -> Result<usize, DatabaseError>;

    /// Delete the row matching ticker.
    /// Returns the number of rows deleted; zero matches is not an error.
    fn delete(&self, ticker: &str) -> Result<usize, DatabaseError>;
}

/// Concrete implementation of StockRepository backed by PostgreSQL
///
/// Stores a function that provides pooled connections, so the pool itself
/// stays owned by the caller.
pub struct StockRepositoryImpl {
    get_conn: Arc<dyn Fn() -> Result<PgPooledConnection, DatabaseError> + Send + Sync>,
}

impl StockRepositoryImpl {
    /// Create new stock repository with connection provider
    pub fn new<F>(get_conn: F) -> Self
    where
        F: Fn() -> Result<PgPooledConnection, DatabaseError> + Send + Sync + 'static,
    {
        Self {
            get_conn: Arc::new(get_conn),
        }
    }
}

#[async_trait::async_trait]
impl StockRepository for StockRepositoryImpl {
    fn list_all(&self) -> Result<Vec<Stock>, DatabaseError> {
        let mut conn = (self.get_conn)()?;

        stocks::table
            .load::<Stock>(&mut conn)
            .map_err(DatabaseError::from)
    }

    fn insert(&self, stock: Stock) -> Result<(), DatabaseError> {
        let mut conn = (self.get_conn)()?;

        diesel::insert_into(stocks::table)
            .values(&stock)
            .execute(&mut conn)
            .map_err(DatabaseError::from)?;

        Ok(())
    }

    fn update(&self, ticker: &str, name: &str, price: Decimal) -> Result<usize, DatabaseError> {
        let mut conn = (self.get_conn)()?;

        diesel::update(stocks::table.filter(stocks::ticker.eq(ticker)))
            .set((stocks::name.eq(name), stocks::price.eq(price)))
            .execute(&mut conn)
            .map_err(DatabaseError::from)
    }

    fn delete(&self, ticker: &str) -> Result<usize, DatabaseError> {
        let mut conn = (self.get_conn)()?;

        diesel::delete(stocks::table.filter(stocks::ticker.eq(ticker)))
            .execute(&mut conn)
            .map_err(DatabaseError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::connection::{ensure_stocks_table, establish_connection_pool};
    use rust_decimal_macros::dec;

    // Requires a running PostgreSQL with DATABASE_URL set - skipped in CI
    #[test]
    #[ignore]
    fn test_stock_repository_crud_against_database() {
        let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
        let pool = establish_connection_pool(&database_url, 2).expect("pool");
        ensure_stocks_table(&mut pool.get_conn().expect("conn")).expect("table");

        let pool_clone = pool.clone();
        let repository = StockRepositoryImpl::new(move || pool_clone.get_conn());

        let stock = Stock {
            ticker: "TESTREPO".to_string(),
            name: "Repository Test".to_string(),
            price: dec!(12.34),
        };

        // Clean slate in case a previous run left the row behind
        repository.delete("TESTREPO").expect("cleanup");

        repository.insert(stock.clone()).expect("insert");
        let listed = repository.list_all().expect("list");
        assert!(listed.contains(&stock));

        // Duplicate ticker must hit the primary key constraint
        let duplicate = repository.insert(stock.clone());
        assert!(matches!(duplicate, Err(DatabaseError::UniqueViolation(_))));

        let matched = repository
            .update("TESTREPO", "Renamed", dec!(56.78))
            .expect("update");
        assert_eq!(matched, 1);

        let deleted = repository.delete("TESTREPO").expect("delete");
        assert_eq!(deleted, 1);

        // Zero-row update/delete succeed silently
        assert_eq!(repository.update("TESTREPO", "x", dec!(1.00)).expect("noop"), 0);
        assert_eq!(repository.delete("TESTREPO").expect("noop"), 0);
    }
}
