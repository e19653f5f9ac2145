use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::ToSchema;

/// Request to update an existing stock
///
/// The ticker comes from the request path, not the body.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateStockRequest {
    /// New display name
    pub name: String,

    /// New price
    #[schema(value_type = f64, example = 160.00)]
    pub price: Decimal,
}
