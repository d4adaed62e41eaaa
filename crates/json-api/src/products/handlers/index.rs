//! Product Index Handler

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use pantry_app::domain::products::records::ProductRecord;

use crate::extensions::*;

/// Catalog product with its brand and volume unit names.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductResponse {
    pub id: i64,
    pub name: String,
    pub brand: String,

    /// Decimal rendered as a string, e.g. `"1.5"`.
    pub volume: String,
    pub volume_unit: String,
    pub amount: u32,
}

impl From<ProductRecord> for ProductResponse {
    fn from(product: ProductRecord) -> Self {
        Self {
            id: product.id.into_i64(),
            name: product.name,
            brand: product.brand,
            volume: product.volume.to_string(),
            volume_unit: product.volume_unit,
            amount: product.amount,
        }
    }
}

/// Product Index Handler
///
/// Returns every product in the catalog.
#[endpoint(tags("products"), summary = "List Products")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<ProductResponse>>, StatusError> {
    let products = depot
        .state_or_500()?
        .app
        .products
        .list_products()
        .await
        .or_500("failed to fetch products")?;

    Ok(Json(products.into_iter().map(Into::into).collect()))
}
