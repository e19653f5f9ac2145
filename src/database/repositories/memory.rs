use crate::database::connection::DatabaseError;
use crate::database::models::Stock;
use crate::database::repositories::StockRepository;
use rust_decimal::Decimal;
use std::sync::Mutex;

/// In-memory implementation of StockRepository
///
/// Mirrors the PostgreSQL semantics the handlers rely on: duplicate tickers
/// fail with a unique violation, and update/delete report how many rows
/// matched without treating zero as an error. Used to exercise the HTTP
/// layer without a database.
#[derive(Default)]
pub struct InMemoryStockRepository {
    stocks: Mutex<Vec<Stock>>,
}

impl InMemoryStockRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records
    pub fn len(&self) -> usize {
        self.stocks.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait::async_trait]
impl StockRepository for InMemoryStockRepository {
    fn list_all(&self) -> Result<Vec<Stock>, DatabaseError> {
        Ok(self.stocks.lock().unwrap().clone())
    }

    fn insert(&self, stock: Stock) -> Result<(), DatabaseError> {
        let mut stocks = self.stocks.lock().unwrap();

        if stocks.iter().any(|s| s.ticker == stock.ticker) {
            return Err(DatabaseError::UniqueViolation(format!(
                "duplicate key value violates unique constraint \"stocks_pkey\": {}",
                stock.ticker
            )));
        }

        stocks.push(stock);
        Ok(())
    }

    fn update(&self, ticker: &str, name: &str, price: Decimal) -> Result<usize, DatabaseError> {
        let mut stocks = self.stocks.lock().unwrap();
        let mut matched = 0;

        for stock in stocks.iter_mut().filter(|s| s.ticker == ticker) {
            stock.name = name.to_string();
            stock.price = price;
            matched += 1;
        }

        Ok(matched)
    }

    fn delete(&self, ticker: &str) -> Result<usize, DatabaseError> {
        let mut stocks = self.stocks.lock().unwrap();
        let before = stocks.len();
        stocks.retain(|s| s.ticker != ticker);

        Ok(before - stocks.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample(ticker: &str) -> Stock {
        Stock {
            ticker: ticker.to_string(),
            name: format!("{} Inc.", ticker),
            price: dec!(100.00),
        }
    }

    #[test]
    fn test_insert_and_list() {
        let repo = InMemoryStockRepository::new();
        repo.insert(sample("AAPL")).unwrap();

        let listed = repo.list_all().unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].ticker, "AAPL");
    }

    #[test]
    fn test_duplicate_ticker_is_unique_violation() {
        let repo = InMemoryStockRepository::new();
        repo.insert(sample("AAPL")).unwrap();

        let result = repo.insert(sample("AAPL"));
        assert!(matches!(result, Err(DatabaseError::UniqueViolation(_))));
        assert_eq!(repo.len(), 1, "duplicate insert must not create a row");
    }

    #[test]
    fn test_update_reports_matched_rows() {
        let repo = InMemoryStockRepository::new();
        repo.insert(sample("AAPL")).unwrap();

        assert_eq!(repo.update("AAPL", "Apple", dec!(160.00)).unwrap(), 1);
        assert_eq!(repo.list_all().unwrap()[0].name, "Apple");
        assert_eq!(repo.list_all().unwrap()[0].price, dec!(160.00));
    }

    #[test]
    fn test_update_missing_ticker_is_silent_noop() {
        let repo = InMemoryStockRepository::new();

        assert_eq!(repo.update("GHOST", "Ghost", dec!(1.00)).unwrap(), 0);
        assert!(repo.is_empty(), "no-op update must not create a row");
    }

    #[test]
    fn test_delete_missing_ticker_is_silent_noop() {
        let repo = InMemoryStockRepository::new();
        repo.insert(sample("AAPL")).unwrap();

        assert_eq!(repo.delete("GHOST").unwrap(), 0);
        assert_eq!(repo.len(), 1);
        assert_eq!(repo.delete("AAPL").unwrap(), 1);
        assert!(repo.is_empty());
    }
}
