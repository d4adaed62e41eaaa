//! Cart service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

use crate::database::is_numeric_overflow;

#[derive(Debug, Error)]
pub enum CartServiceError {
    #[error("product not found")]
    ProductNotFound,

    #[error("product not found in the cart")]
    EntryNotFound,

    #[error("quantity must be a positive integer")]
    InvalidQuantity,

    #[error("invalid data")]
    InvalidData,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for CartServiceError {
    fn from(error: Error) -> Self {
        if is_numeric_overflow(&error) {
            return Self::InvalidQuantity;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::ForeignKeyViolation) => Self::ProductNotFound,
            Some(ErrorKind::CheckViolation) => Self::InvalidQuantity,
            Some(ErrorKind::NotNullViolation) => Self::InvalidData,
            Some(ErrorKind::Other | _) | None => Self::Sql(error),
        }
    }
}
