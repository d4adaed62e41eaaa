//! Shops Repository

use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};

use crate::domain::shops::records::{ShopId, ShopRecord};

const LIST_SHOPS_SQL: &str = include_str!("sql/list_shops.sql");
const CREATE_SHOP_SQL: &str = include_str!("sql/create_shop.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgShopsRepository;

impl PgShopsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_shops(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<ShopRecord>, sqlx::Error> {
        query_as::<Postgres, ShopRecord>(LIST_SHOPS_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn create_shop(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        name: &str,
    ) -> Result<ShopRecord, sqlx::Error> {
        query_as::<Postgres, ShopRecord>(CREATE_SHOP_SQL)
            .bind(name)
            .fetch_one(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for ShopRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: ShopId::from_i64(row.try_get("id")?),
            name: row.try_get("name")?,
        })
    }
}
