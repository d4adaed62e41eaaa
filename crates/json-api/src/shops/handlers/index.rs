//! Shop Index Handler

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use pantry_app::domain::shops::records::ShopRecord;

use crate::extensions::*;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ShopResponse {
    pub id: i64,
    pub name: String,
}

impl From<ShopRecord> for ShopResponse {
    fn from(shop: ShopRecord) -> Self {
        Self {
            id: shop.id.into_i64(),
            name: shop.name,
        }
    }
}

/// Shop Index Handler
#[endpoint(tags("shops"), summary = "List Shops")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<ShopResponse>>, StatusError> {
    let shops = depot
        .state_or_500()?
        .app
        .shops
        .list_shops()
        .await
        .or_500("failed to fetch shops")?;

    Ok(Json(shops.into_iter().map(Into::into).collect()))
}
