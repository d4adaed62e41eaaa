//! Cart Entries Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as, query_scalar};

use crate::domain::{
    carts::records::{CartEntryId, CartEntryRecord},
    products::records::ProductId,
};

use super::lines::try_get_quantity;

const FIND_PRODUCT_BY_NAME_SQL: &str = include_str!("../sql/find_product_by_name.sql");
const UPSERT_ENTRY_SQL: &str = include_str!("../sql/upsert_entry.sql");
const INCREMENT_ENTRY_SQL: &str = include_str!("../sql/increment_entry.sql");
const LOCK_ENTRY_SQL: &str = include_str!("../sql/lock_entry.sql");
const DECREMENT_ENTRY_SQL: &str = include_str!("../sql/decrement_entry.sql");
const DELETE_ENTRY_SQL: &str = include_str!("../sql/delete_entry.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgCartEntriesRepository;

impl PgCartEntriesRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn find_product_by_name(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        name: &str,
    ) -> Result<Option<ProductId>, sqlx::Error> {
        let id: Option<i64> = query_scalar(FIND_PRODUCT_BY_NAME_SQL)
            .bind(name)
            .fetch_optional(&mut **tx)
            .await?;

        Ok(id.map(ProductId::from_i64))
    }

    /// Inserts an entry or adds `amount` to the existing one in a single statement.
    pub(crate) async fn upsert_entry(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductId,
        amount: i32,
    ) -> Result<CartEntryRecord, sqlx::Error> {
        query_as::<Postgres, CartEntryRecord>(UPSERT_ENTRY_SQL)
            .bind(product.into_i64())
            .bind(amount)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn increment_entry(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductId,
    ) -> Result<Option<CartEntryRecord>, sqlx::Error> {
        query_as::<Postgres, CartEntryRecord>(INCREMENT_ENTRY_SQL)
            .bind(product.into_i64())
            .fetch_optional(&mut **tx)
            .await
    }

    /// Reads the entry and holds its row lock until the transaction ends.
    pub(crate) async fn lock_entry(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductId,
    ) -> Result<Option<CartEntryRecord>, sqlx::Error> {
        query_as::<Postgres, CartEntryRecord>(LOCK_ENTRY_SQL)
            .bind(product.into_i64())
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn decrement_entry(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductId,
    ) -> Result<CartEntryRecord, sqlx::Error> {
        query_as::<Postgres, CartEntryRecord>(DECREMENT_ENTRY_SQL)
            .bind(product.into_i64())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn delete_entry(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductId,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_ENTRY_SQL)
            .bind(product.into_i64())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for CartEntryRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: CartEntryId::from_i64(row.try_get("id")?),
            product_id: ProductId::from_i64(row.try_get("product_id")?),
            quantity: try_get_quantity(row, "quantity")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
