//! Cart Lines Repository

use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};

use crate::domain::{
    carts::records::{CartEntryId, CartLineRecord},
    products::records::ProductId,
    shops::records::ShopId,
};

const GET_CART_LINES_SQL: &str = include_str!("../sql/get_cart_lines.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgCartLinesRepository;

impl PgCartLinesRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn get_cart_lines(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<CartLineRecord>, sqlx::Error> {
        query_as::<Postgres, CartLineRecord>(GET_CART_LINES_SQL)
            .fetch_all(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for CartLineRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: CartEntryId::from_i64(row.try_get("id")?),
            product_id: ProductId::from_i64(row.try_get("product_id")?),
            product_name: row.try_get("product_name")?,
            brand_name: row.try_get("brand_name")?,
            quantity: try_get_quantity(row, "quantity")?,
            volume: row.try_get("volume")?,
            volume_unit_name: row.try_get("volume_unit_name")?,
            shop_id: ShopId::from_i64(row.try_get("shop_id")?),
            shop_name: row.try_get("shop_name")?,
            price: row.try_get("price")?,
        })
    }
}

pub(super) fn try_get_quantity(row: &PgRow, col: &str) -> Result<u32, sqlx::Error> {
    let quantity_i32: i32 = row.try_get(col)?;

    u32::try_from(quantity_i32).map_err(|e| sqlx::Error::ColumnDecode {
        index: col.to_string(),
        source: Box::new(e),
    })
}
