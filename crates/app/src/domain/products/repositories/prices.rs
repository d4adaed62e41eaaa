//! Product Shop Prices Repository

use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};

use crate::domain::{
    products::{
        data::NewProductPrice,
        records::{ProductId, ProductPriceId, ProductPriceRecord},
    },
    shops::records::ShopId,
};

const CREATE_PRICE_SQL: &str = include_str!("../sql/create_price.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgProductPricesRepository;

impl PgProductPricesRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn create_price(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductId,
        price: NewProductPrice,
    ) -> Result<ProductPriceRecord, sqlx::Error> {
        query_as::<Postgres, ProductPriceRecord>(CREATE_PRICE_SQL)
            .bind(product.into_i64())
            .bind(price.shop.into_i64())
            .bind(price.price)
            .fetch_one(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for ProductPriceRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: ProductPriceId::from_i64(row.try_get("id")?),
            product_id: ProductId::from_i64(row.try_get("product_id")?),
            shop_id: ShopId::from_i64(row.try_get("shop_id")?),
            price: row.try_get("price")?,
        })
    }
}
