pub mod price_refresh;

pub use price_refresh::{PriceRefresher, RefreshError, RefreshEvent, REFRESH_DELAY};
