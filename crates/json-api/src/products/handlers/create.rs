//! Add Product Handler

use std::str::FromStr;

use rust_decimal::Decimal;
use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use pantry_app::domain::{
    products::{
        data::{NewProduct, NewProductPrice},
        records::CreatedProduct,
    },
    shops::records::ShopId,
};

use crate::{extensions::*, products::errors::into_status_error};

/// Add Product Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AddProductRequest {
    pub name: String,
    pub brand: String,
    pub amount: u32,

    /// Decimal as a JSON number or numeric string.
    #[salvo(schema(value_type = Object))]
    pub volume: Value,

    /// Volume unit name, e.g. `"L"`.
    pub measurement_unit: String,

    /// Shop id to price. Rows are inserted in the order given here.
    #[salvo(schema(value_type = Object))]
    pub prices: Map<String, Value>,
}

impl TryFrom<AddProductRequest> for NewProduct {
    type Error = StatusError;

    fn try_from(request: AddProductRequest) -> Result<Self, Self::Error> {
        let invalid = || StatusError::bad_request().brief("Invalid product payload");

        let prices = request
            .prices
            .iter()
            .map(|(shop, price)| {
                Some(NewProductPrice {
                    shop: ShopId::from_i64(shop.trim().parse().ok()?),
                    price: parse_decimal(price)?,
                })
            })
            .collect::<Option<Vec<_>>>()
            .ok_or_else(invalid)?;

        Ok(NewProduct {
            name: request.name,
            brand: request.brand,
            amount: request.amount,
            volume: parse_decimal(&request.volume).ok_or_else(invalid)?,
            volume_unit: request.measurement_unit,
            prices,
        })
    }
}

fn parse_decimal(value: &Value) -> Option<Decimal> {
    let text = match value {
        Value::Number(number) => number.to_string(),
        Value::String(text) => text.trim().to_owned(),
        _ => return None,
    };

    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .ok()
}

/// Product Added Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProductAddedResponse {
    pub message: String,
    pub product_id: i64,
    pub brand_id: i64,

    /// `false` when the product joined an existing brand.
    pub brand_created: bool,
    pub price_ids: Vec<i64>,
}

impl From<CreatedProduct> for ProductAddedResponse {
    fn from(created: CreatedProduct) -> Self {
        Self {
            message: "Product added to the products table with prices".to_owned(),
            product_id: created.product_id.into_i64(),
            brand_id: created.brand_id.into_i64(),
            brand_created: created.brand_created,
            price_ids: created.price_ids.into_iter().map(Into::into).collect(),
        }
    }
}

/// Add Product Handler
///
/// Adds a product, its brand when new, and one price per shop.
#[endpoint(
    tags("products"),
    summary = "Add Product To Catalog",
    responses(
        (status_code = StatusCode::OK, description = "Product added"),
        (status_code = StatusCode::BAD_REQUEST, description = "Product exists or payload invalid"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<AddProductRequest>,
    depot: &mut Depot,
) -> Result<Json<ProductAddedResponse>, StatusError> {
    let product = NewProduct::try_from(json.into_inner())?;

    let created = depot
        .state_or_500()?
        .app
        .products
        .add_product(product)
        .await
        .map_err(into_status_error)?;

    Ok(Json(created.into()))
}
