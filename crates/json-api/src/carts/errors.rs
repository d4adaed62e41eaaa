//! Cart Errors

use salvo::http::StatusError;
use tracing::error;

use pantry_app::domain::carts::CartServiceError;

pub(crate) fn into_status_error(error: CartServiceError) -> StatusError {
    match error {
        CartServiceError::ProductNotFound => StatusError::bad_request().brief("Product not found"),
        CartServiceError::EntryNotFound => {
            StatusError::bad_request().brief("Product not found in the cart")
        }
        CartServiceError::InvalidQuantity => {
            StatusError::bad_request().brief("Amount must be a positive whole number")
        }
        CartServiceError::InvalidData => StatusError::bad_request().brief("Invalid cart payload"),
        CartServiceError::Sql(source) => {
            error!("cart store failure: {source}");

            StatusError::internal_server_error()
        }
    }
}
