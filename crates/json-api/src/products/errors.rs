//! Product Errors

use salvo::http::StatusError;
use tracing::error;

use pantry_app::domain::products::ProductsServiceError;

pub(crate) fn into_status_error(error: ProductsServiceError) -> StatusError {
    match error {
        ProductsServiceError::AlreadyExists => {
            StatusError::bad_request().brief("Product already exists")
        }
        ProductsServiceError::UnknownVolumeUnit => {
            StatusError::bad_request().brief("Unknown measurement unit")
        }
        ProductsServiceError::InvalidReference => StatusError::bad_request().brief("Unknown shop"),
        ProductsServiceError::MissingRequiredData
        | ProductsServiceError::InvalidData
        | ProductsServiceError::OutOfRange(_) => {
            StatusError::bad_request().brief("Invalid product payload")
        }
        ProductsServiceError::Sql(source) => {
            error!("products store failure: {source}");

            StatusError::internal_server_error()
        }
    }
}
