//! Cart service.

use async_trait::async_trait;
use mockall::automock;
use tracing::debug;

use crate::{
    database::Db,
    domain::{
        carts::{
            data::NewCartAddition,
            errors::CartServiceError,
            records::{CartEntryRecord, CartLineRecord, DecrementOutcome},
            repositories::{PgCartEntriesRepository, PgCartLinesRepository},
        },
        products::records::ProductId,
    },
};

#[derive(Debug, Clone)]
pub struct PgCartService {
    db: Db,
    entries_repository: PgCartEntriesRepository,
    lines_repository: PgCartLinesRepository,
}

impl PgCartService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            entries_repository: PgCartEntriesRepository::new(),
            lines_repository: PgCartLinesRepository::new(),
        }
    }
}

#[async_trait]
impl CartService for PgCartService {
    async fn get_current_cart(&self) -> Result<Vec<CartLineRecord>, CartServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let lines = self.lines_repository.get_cart_lines(&mut tx).await?;

        tx.commit().await?;

        Ok(lines)
    }

    async fn add_to_cart(
        &self,
        addition: NewCartAddition,
    ) -> Result<CartEntryRecord, CartServiceError> {
        if addition.amount == 0 {
            return Err(CartServiceError::InvalidQuantity);
        }

        let amount =
            i32::try_from(addition.amount).map_err(|_overflow| CartServiceError::InvalidQuantity)?;

        let mut tx = self.db.begin_transaction().await?;

        let product = self
            .entries_repository
            .find_product_by_name(&mut tx, &addition.product_name)
            .await?
            .ok_or(CartServiceError::ProductNotFound)?;

        let entry = self
            .entries_repository
            .upsert_entry(&mut tx, product, amount)
            .await?;

        tx.commit().await?;

        Ok(entry)
    }

    async fn increment_entry(
        &self,
        product: ProductId,
    ) -> Result<CartEntryRecord, CartServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let entry = self
            .entries_repository
            .increment_entry(&mut tx, product)
            .await?
            .ok_or(CartServiceError::EntryNotFound)?;

        tx.commit().await?;

        Ok(entry)
    }

    async fn decrement_entry(
        &self,
        product: ProductId,
    ) -> Result<DecrementOutcome, CartServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let entry = self
            .entries_repository
            .lock_entry(&mut tx, product)
            .await?
            .ok_or(CartServiceError::EntryNotFound)?;

        // Entries never hold zero units.
        let outcome = if entry.quantity <= 1 {
            self.entries_repository
                .delete_entry(&mut tx, product)
                .await?;

            DecrementOutcome::Removed
        } else {
            DecrementOutcome::Decremented(
                self.entries_repository
                    .decrement_entry(&mut tx, product)
                    .await?,
            )
        };

        tx.commit().await?;

        debug!(product_id = %product, ?outcome, "cart entry decremented");

        Ok(outcome)
    }

    async fn remove_entry(&self, product: ProductId) -> Result<(), CartServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let rows_affected = self
            .entries_repository
            .delete_entry(&mut tx, product)
            .await?;

        if rows_affected == 0 {
            return Err(CartServiceError::EntryNotFound);
        }

        tx.commit().await?;

        debug!(product_id = %product, "cart entry removed");

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait CartService: Send + Sync {
    /// Retrieves the cart as one line per (entry, shop price) pair.
    async fn get_current_cart(&self) -> Result<Vec<CartLineRecord>, CartServiceError>;

    /// Adds `amount` units of the named product, creating the entry when absent.
    async fn add_to_cart(
        &self,
        addition: NewCartAddition,
    ) -> Result<CartEntryRecord, CartServiceError>;

    /// Adds one unit to an existing entry.
    async fn increment_entry(
        &self,
        product: ProductId,
    ) -> Result<CartEntryRecord, CartServiceError>;

    /// Takes one unit off an existing entry, deleting it when the last unit goes.
    async fn decrement_entry(
        &self,
        product: ProductId,
    ) -> Result<DecrementOutcome, CartServiceError>;

    /// Deletes an entry regardless of its quantity.
    async fn remove_entry(&self, product: ProductId) -> Result<(), CartServiceError>;
}
