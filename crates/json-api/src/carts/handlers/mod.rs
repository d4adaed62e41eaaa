//! Cart Handlers

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

pub(crate) mod add;
pub(crate) mod decrement;
pub(crate) mod get;
pub(crate) mod increment;
pub(crate) mod remove;

/// Body naming the product whose cart entry is changed.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CartEntryRequest {
    pub product_id: i64,
}

/// Confirmation returned by cart mutations.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub(crate) fn new(message: &str) -> Self {
        Self {
            message: message.to_owned(),
        }
    }
}
