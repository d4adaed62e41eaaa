//! Products Repository

use rust_decimal::Decimal;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as, query_scalar};

use crate::domain::products::records::{BrandId, ProductId, ProductRecord, VolumeUnitId};

const LIST_PRODUCTS_SQL: &str = include_str!("../sql/list_products.sql");
const PRODUCT_EXISTS_SQL: &str = include_str!("../sql/product_exists.sql");
const CREATE_PRODUCT_SQL: &str = include_str!("../sql/create_product.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgProductsRepository;

impl PgProductsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_products(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<ProductRecord>, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(LIST_PRODUCTS_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn product_exists(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        name: &str,
        brand: &str,
    ) -> Result<bool, sqlx::Error> {
        query_scalar::<Postgres, bool>(PRODUCT_EXISTS_SQL)
            .bind(name)
            .bind(brand)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn create_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: NewProductRow<'_>,
    ) -> Result<ProductId, sqlx::Error> {
        let id: i64 = query_scalar(CREATE_PRODUCT_SQL)
            .bind(product.name)
            .bind(product.brand.into_i64())
            .bind(product.amount)
            .bind(product.volume)
            .bind(product.volume_unit.into_i64())
            .fetch_one(&mut **tx)
            .await?;

        Ok(ProductId::from_i64(id))
    }
}

/// Product columns with references already resolved to ids.
#[derive(Debug, Clone, Copy)]
pub(crate) struct NewProductRow<'a> {
    pub(crate) name: &'a str,
    pub(crate) brand: BrandId,
    pub(crate) amount: i32,
    pub(crate) volume: Decimal,
    pub(crate) volume_unit: VolumeUnitId,
}

impl<'r> FromRow<'r, PgRow> for ProductRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: ProductId::from_i64(row.try_get("id")?),
            name: row.try_get("name")?,
            brand: row.try_get("brand")?,
            volume: row.try_get("volume")?,
            volume_unit: row.try_get("volume_unit")?,
            amount: try_get_count(row, "amount")?,
        })
    }
}

/// Read a non-negative `INTEGER` column.
fn try_get_count(row: &PgRow, col: &str) -> Result<u32, sqlx::Error> {
    let count_i32: i32 = row.try_get(col)?;

    u32::try_from(count_i32).map_err(|e| sqlx::Error::ColumnDecode {
        index: col.to_string(),
        source: Box::new(e),
    })
}
