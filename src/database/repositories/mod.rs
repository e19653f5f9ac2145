pub mod memory;
pub mod stock_repository;

pub use memory::InMemoryStockRepository;
pub use stock_repository::{StockRepository, StockRepositoryImpl};
