pub mod errors;
pub mod handlers;
pub mod openapi;
pub mod responses;
pub mod routes;

pub use errors::WatchlistError;
pub use handlers::WatchlistState;
pub use responses::*;
pub use routes::create_router;
