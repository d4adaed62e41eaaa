//! Shops service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::shops::{
        data::NewShop, errors::ShopsServiceError, records::ShopRecord,
        repository::PgShopsRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgShopsService {
    db: Db,
    repository: PgShopsRepository,
}

impl PgShopsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgShopsRepository::new(),
        }
    }
}

#[async_trait]
impl ShopsService for PgShopsService {
    async fn list_shops(&self) -> Result<Vec<ShopRecord>, ShopsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let shops = self.repository.list_shops(&mut tx).await?;

        tx.commit().await?;

        Ok(shops)
    }

    async fn create_shop(&self, shop: NewShop) -> Result<ShopRecord, ShopsServiceError> {
        if shop.name.trim().is_empty() {
            return Err(ShopsServiceError::MissingRequiredData);
        }

        let mut tx = self.db.begin_transaction().await?;

        let created = self.repository.create_shop(&mut tx, &shop.name).await?;

        tx.commit().await?;

        Ok(created)
    }
}

/// Shop lookup table operations.
#[automock]
#[async_trait]
pub trait ShopsService: Send + Sync {
    /// Retrieves all shops.
    async fn list_shops(&self) -> Result<Vec<ShopRecord>, ShopsServiceError>;

    /// Creates a new shop.
    async fn create_shop(&self, shop: NewShop) -> Result<ShopRecord, ShopsServiceError>;
}
