//! Test Helpers

use rust_decimal::Decimal;
use sqlx::query_scalar;

use crate::{
    domain::{
        carts::{CartService, CartServiceError, data::NewCartAddition, records::CartEntryRecord},
        products::{
            ProductsService, ProductsServiceError,
            data::{NewProduct, NewProductPrice, NewVolumeUnit},
            records::{ProductId, VolumeUnitRecord},
        },
        shops::{ShopsService, data::NewShop, records::ShopId},
    },
    test::TestContext,
};

pub(crate) async fn seed_shop(ctx: &TestContext, name: &str) -> ShopId {
    ctx.shops
        .create_shop(NewShop {
            name: name.to_string(),
        })
        .await
        .expect("Failed to seed shop")
        .id
}

pub(crate) async fn seed_volume_unit(ctx: &TestContext, name: &str) -> VolumeUnitRecord {
    ctx.products
        .create_volume_unit(NewVolumeUnit {
            name: name.to_string(),
        })
        .await
        .expect("Failed to seed volume unit")
}

/// Adds a one-litre product priced at each of the given shops.
pub(crate) async fn seed_product(
    ctx: &TestContext,
    name: &str,
    brand: &str,
    prices: &[(ShopId, Decimal)],
) -> Result<ProductId, ProductsServiceError> {
    let created = ctx
        .products
        .add_product(NewProduct {
            name: name.to_string(),
            brand: brand.to_string(),
            amount: 1,
            volume: Decimal::ONE,
            volume_unit: "L".to_string(),
            prices: prices
                .iter()
                .map(|(shop, price)| NewProductPrice {
                    shop: *shop,
                    price: *price,
                })
                .collect(),
        })
        .await?;

    Ok(created.product_id)
}

pub(crate) async fn add_to_cart(
    ctx: &TestContext,
    product_name: &str,
    amount: u32,
) -> Result<CartEntryRecord, CartServiceError> {
    ctx.carts
        .add_to_cart(NewCartAddition {
            product_name: product_name.to_string(),
            amount,
        })
        .await
}

/// Counts rows in one of the schema's tables.
pub(crate) async fn count_rows(ctx: &TestContext, table: &str) -> i64 {
    assert!(
        [
            "brand",
            "products",
            "product_shop_prices",
            "shops",
            "volume_unit",
            "current_cart",
        ]
        .contains(&table),
        "unexpected table name: {table}"
    );

    query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(ctx.db.pool())
        .await
        .expect("Failed to count rows")
}
