// Library Crate Root
// lib.rs

pub mod api;
pub mod database;
pub mod jobs;

// pub use = re-export at crate root
pub use api::{create_router, WatchlistError, WatchlistState};
pub use database::models::Stock;
pub use jobs::{PriceRefresher, RefreshEvent};
