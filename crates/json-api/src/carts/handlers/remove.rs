//! Remove From Cart Handler

use salvo::{oapi::extract::JsonBody, prelude::*};

use pantry_app::domain::products::records::ProductId;

use crate::{
    carts::{
        errors::into_status_error,
        handlers::{CartEntryRequest, MessageResponse},
    },
    extensions::*,
};

/// Remove From Cart Handler
#[endpoint(
    tags("carts"),
    summary = "Remove Product From Cart",
    responses(
        (status_code = StatusCode::OK, description = "Entry removed"),
        (status_code = StatusCode::BAD_REQUEST, description = "Product not in the cart"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CartEntryRequest>,
    depot: &mut Depot,
) -> Result<Json<MessageResponse>, StatusError> {
    depot
        .state_or_500()?
        .app
        .carts
        .remove_entry(ProductId::from_i64(json.into_inner().product_id))
        .await
        .map_err(into_status_error)?;

    Ok(Json(MessageResponse::new("Removed the item from the cart")))
}
