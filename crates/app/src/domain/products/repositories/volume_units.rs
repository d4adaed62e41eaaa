//! Volume Units Repository

use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};

use crate::domain::products::records::{VolumeUnitId, VolumeUnitRecord};

const FIND_VOLUME_UNIT_SQL: &str = include_str!("../sql/find_volume_unit.sql");
const CREATE_VOLUME_UNIT_SQL: &str = include_str!("../sql/create_volume_unit.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgVolumeUnitsRepository;

impl PgVolumeUnitsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn find_volume_unit(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        name: &str,
    ) -> Result<Option<VolumeUnitRecord>, sqlx::Error> {
        query_as::<Postgres, VolumeUnitRecord>(FIND_VOLUME_UNIT_SQL)
            .bind(name)
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn create_volume_unit(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        name: &str,
    ) -> Result<VolumeUnitRecord, sqlx::Error> {
        query_as::<Postgres, VolumeUnitRecord>(CREATE_VOLUME_UNIT_SQL)
            .bind(name)
            .fetch_one(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for VolumeUnitRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: VolumeUnitId::from_i64(row.try_get("id")?),
            name: row.try_get("name")?,
        })
    }
}
