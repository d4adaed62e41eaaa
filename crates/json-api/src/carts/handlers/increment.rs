//! Increment Cart Entry Handler

use salvo::{oapi::extract::JsonBody, prelude::*};

use pantry_app::domain::products::records::ProductId;

use crate::{
    carts::{
        errors::into_status_error,
        handlers::{CartEntryRequest, MessageResponse},
    },
    extensions::*,
};

/// Increment Cart Entry Handler
///
/// Adds one unit to a product already in the cart.
#[endpoint(
    tags("carts"),
    summary = "Increment Cart Entry",
    responses(
        (status_code = StatusCode::OK, description = "Quantity increased"),
        (status_code = StatusCode::BAD_REQUEST, description = "Product not in the cart"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CartEntryRequest>,
    depot: &mut Depot,
) -> Result<Json<MessageResponse>, StatusError> {
    let product = ProductId::from_i64(json.into_inner().product_id);

    depot
        .state_or_500()?
        .app
        .carts
        .increment_entry(product)
        .await
        .map_err(into_status_error)?;

    Ok(Json(MessageResponse::new(
        "Quantity added to the product in the cart",
    )))
}
