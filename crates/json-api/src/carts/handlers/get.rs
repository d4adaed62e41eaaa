//! Current Cart Handler

use rust_decimal::Decimal;
use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use pantry_app::domain::carts::records::CartLineRecord;

use crate::extensions::*;

/// One cart entry paired with one shop's price for its product.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartLineResponse {
    /// Cart entry id; repeated once per shop price.
    pub id: i64,
    pub product_id: i64,
    pub product_name: String,
    pub brand_name: String,
    pub quantity: u32,
    pub volume: String,
    pub volume_unit_name: String,
    pub shop_id: i64,

    /// Shop name.
    pub name: String,

    #[serde(with = "rust_decimal::serde::float")]
    #[salvo(schema(value_type = f64))]
    pub price: Decimal,
}

impl From<CartLineRecord> for CartLineResponse {
    fn from(line: CartLineRecord) -> Self {
        Self {
            id: line.id.into_i64(),
            product_id: line.product_id.into_i64(),
            product_name: line.product_name,
            brand_name: line.brand_name,
            quantity: line.quantity,
            volume: line.volume.to_string(),
            volume_unit_name: line.volume_unit_name,
            shop_id: line.shop_id.into_i64(),
            name: line.shop_name,
            price: line.price,
        }
    }
}

/// Current Cart Handler
///
/// Returns one row per cart entry and shop price.
#[endpoint(tags("carts"), summary = "Get Current Cart")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<CartLineResponse>>, StatusError> {
    let lines = depot
        .state_or_500()?
        .app
        .carts
        .get_current_cart()
        .await
        .or_500("failed to fetch current cart")?;

    Ok(Json(lines.into_iter().map(Into::into).collect()))
}
