//! Add To Cart Handler

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use pantry_app::domain::carts::data::NewCartAddition;

use crate::{
    carts::{errors::into_status_error, handlers::MessageResponse},
    extensions::*,
};

/// Add To Cart Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct AddToCartRequest {
    /// Product name; the oldest product wins when brands share a name.
    pub name: String,
    pub amount: u32,
}

impl From<AddToCartRequest> for NewCartAddition {
    fn from(request: AddToCartRequest) -> Self {
        Self {
            product_name: request.name,
            amount: request.amount,
        }
    }
}

/// Add To Cart Handler
///
/// Puts `amount` units of the named product in the cart, adding to any existing entry.
#[endpoint(
    tags("carts"),
    summary = "Add Product To Cart",
    responses(
        (status_code = StatusCode::OK, description = "Product added to cart"),
        (status_code = StatusCode::BAD_REQUEST, description = "Unknown product or amount below 1"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<AddToCartRequest>,
    depot: &mut Depot,
) -> Result<Json<MessageResponse>, StatusError> {
    depot
        .state_or_500()?
        .app
        .carts
        .add_to_cart(json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(MessageResponse::new("Product added to current cart")))
}
