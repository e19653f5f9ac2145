// Schema for the watchlist database.
// The table is created at startup with CREATE TABLE IF NOT EXISTS
// (see connection::ensure_stocks_table); no diesel migrations are used.

diesel::table! {
    stocks (ticker) {
        ticker -> Text,
        name -> Text,
        price -> Numeric,
    }
}
