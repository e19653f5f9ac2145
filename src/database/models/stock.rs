use diesel::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Stock entity - one record on the watchlist
///
/// The ticker is the primary key; there are no relationships to other tables.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Queryable,
    Selectable,
    Identifiable,
    Insertable,
    Serialize,
    Deserialize,
    ToSchema,
)]
#[diesel(table_name = crate::database::schema::stocks)]
#[diesel(primary_key(ticker))]
pub struct Stock {
    /// Short alphanumeric identifier (e.g., "AAPL")
    pub ticker: String,

    /// Human-readable display name (e.g., "Apple Inc.")
    pub name: String,

    /// Last known price, two-digit fractional precision
    #[schema(value_type = f64, example = 150.25)]
    pub price: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_stock_deserializes_from_json_body() {
        let stock: Stock =
            serde_json::from_str(r#"{"ticker":"AAPL","name":"Apple Inc.","price":150.25}"#)
                .unwrap();

        assert_eq!(stock.ticker, "AAPL");
        assert_eq!(stock.name, "Apple Inc.");
        assert_eq!(stock.price, dec!(150.25));
    }

    #[test]
    fn test_price_precision_survives_round_trip() {
        let stock = Stock {
            ticker: "MSFT".to_string(),
            name: "Microsoft".to_string(),
            price: dec!(12.34),
        };

        let json = serde_json::to_string(&stock).unwrap();
        assert!(json.contains("12.34"), "price drifted: {}", json);

        let decoded: Stock = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded.price, dec!(12.34));
    }

    #[test]
    fn test_malformed_body_is_rejected() {
        let result = serde_json::from_str::<Stock>(r#"{"ticker":"AAPL","price":"not a number"#);
        assert!(result.is_err());
    }
}
