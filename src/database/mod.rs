/// Database module for PostgreSQL integration
///
/// This module provides:
/// - Connection pooling for PostgreSQL
/// - Repository pattern implementation for the stocks table
/// - Database models and schema
/// - Diesel ORM integration

pub mod connection;
pub mod models;
pub mod repositories;
pub mod schema;

pub use connection::{establish_connection_pool, ensure_stocks_table, DatabaseError, DatabasePool};
