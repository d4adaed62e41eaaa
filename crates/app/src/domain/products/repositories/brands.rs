//! Brands Repository

use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};

use crate::domain::products::records::{BrandId, BrandRecord};

const FIND_BRAND_SQL: &str = include_str!("../sql/find_brand.sql");
const CREATE_BRAND_SQL: &str = include_str!("../sql/create_brand.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgBrandsRepository;

impl PgBrandsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn find_brand(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        name: &str,
    ) -> Result<Option<BrandRecord>, sqlx::Error> {
        query_as::<Postgres, BrandRecord>(FIND_BRAND_SQL)
            .bind(name)
            .fetch_optional(&mut **tx)
            .await
    }

    /// Inserts the brand, returning the existing row if another writer got there first.
    ///
    /// The flag is `true` when this call inserted the row.
    pub(crate) async fn create_brand(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        name: &str,
    ) -> Result<(BrandRecord, bool), sqlx::Error> {
        let row = query(CREATE_BRAND_SQL)
            .bind(name)
            .fetch_one(&mut **tx)
            .await?;

        let created: bool = row.try_get("created")?;

        Ok((BrandRecord::from_row(&row)?, created))
    }
}

impl<'r> FromRow<'r, PgRow> for BrandRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: BrandId::from_i64(row.try_get("id")?),
            name: row.try_get("name")?,
        })
    }
}
