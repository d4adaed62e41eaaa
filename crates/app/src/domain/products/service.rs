//! Products service.

use std::collections::HashSet;

use async_trait::async_trait;
use mockall::automock;
use tracing::debug;

use crate::{
    database::Db,
    domain::products::{
        data::{NewProduct, NewVolumeUnit},
        errors::ProductsServiceError,
        records::{CreatedProduct, ProductRecord, VolumeUnitRecord},
        repositories::{
            NewProductRow, PgBrandsRepository, PgProductPricesRepository, PgProductsRepository,
            PgVolumeUnitsRepository,
        },
    },
};

#[derive(Debug, Clone)]
pub struct PgProductsService {
    db: Db,
    products_repository: PgProductsRepository,
    brands_repository: PgBrandsRepository,
    volume_units_repository: PgVolumeUnitsRepository,
    prices_repository: PgProductPricesRepository,
}

impl PgProductsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            products_repository: PgProductsRepository::new(),
            brands_repository: PgBrandsRepository::new(),
            volume_units_repository: PgVolumeUnitsRepository::new(),
            prices_repository: PgProductPricesRepository::new(),
        }
    }
}

#[async_trait]
impl ProductsService for PgProductsService {
    async fn list_products(&self) -> Result<Vec<ProductRecord>, ProductsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let products = self.products_repository.list_products(&mut tx).await?;

        tx.commit().await?;

        Ok(products)
    }

    async fn add_product(
        &self,
        product: NewProduct,
    ) -> Result<CreatedProduct, ProductsServiceError> {
        validate_new_product(&product)?;

        let amount = i32::try_from(product.amount)?;

        let mut tx = self.db.begin_transaction().await?;

        if self
            .products_repository
            .product_exists(&mut tx, &product.name, &product.brand)
            .await?
        {
            return Err(ProductsServiceError::AlreadyExists);
        }

        let (brand, brand_created) = match self
            .brands_repository
            .find_brand(&mut tx, &product.brand)
            .await?
        {
            Some(brand) => (brand, false),
            None => {
                self.brands_repository
                    .create_brand(&mut tx, &product.brand)
                    .await?
            }
        };

        let volume_unit = self
            .volume_units_repository
            .find_volume_unit(&mut tx, &product.volume_unit)
            .await?
            .ok_or(ProductsServiceError::UnknownVolumeUnit)?;

        let product_id = self
            .products_repository
            .create_product(
                &mut tx,
                NewProductRow {
                    name: &product.name,
                    brand: brand.id,
                    amount,
                    volume: product.volume,
                    volume_unit: volume_unit.id,
                },
            )
            .await?;

        let mut price_ids = Vec::with_capacity(product.prices.len());

        for price in product.prices {
            let created = self
                .prices_repository
                .create_price(&mut tx, product_id, price)
                .await?;

            price_ids.push(created.id);
        }

        tx.commit().await?;

        debug!(
            product_id = %product_id,
            brand_id = %brand.id,
            brand_created,
            prices = price_ids.len(),
            "product added to catalog"
        );

        Ok(CreatedProduct {
            product_id,
            brand_id: brand.id,
            brand_created,
            price_ids,
        })
    }

    async fn create_volume_unit(
        &self,
        unit: NewVolumeUnit,
    ) -> Result<VolumeUnitRecord, ProductsServiceError> {
        if unit.name.trim().is_empty() {
            return Err(ProductsServiceError::MissingRequiredData);
        }

        let mut tx = self.db.begin_transaction().await?;

        let created = self
            .volume_units_repository
            .create_volume_unit(&mut tx, &unit.name)
            .await?;

        tx.commit().await?;

        Ok(created)
    }
}

/// Reject payloads the schema would refuse, before opening a transaction.
fn validate_new_product(product: &NewProduct) -> Result<(), ProductsServiceError> {
    if [&product.name, &product.brand, &product.volume_unit]
        .iter()
        .any(|value| value.trim().is_empty())
    {
        return Err(ProductsServiceError::MissingRequiredData);
    }

    if product.volume.is_sign_negative() {
        return Err(ProductsServiceError::InvalidData);
    }

    let mut shops = HashSet::with_capacity(product.prices.len());

    for price in &product.prices {
        // Prices are stored in whole cents.
        if price.price.is_sign_negative()
            || price.price.normalize().scale() > 2
            || !shops.insert(price.shop)
        {
            return Err(ProductsServiceError::InvalidData);
        }
    }

    Ok(())
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Retrieves all products with brand and volume unit names.
    async fn list_products(&self) -> Result<Vec<ProductRecord>, ProductsServiceError>;

    /// Adds a product, its brand (when new) and its per-shop prices in one transaction.
    async fn add_product(
        &self,
        product: NewProduct,
    ) -> Result<CreatedProduct, ProductsServiceError>;

    /// Creates a volume unit lookup row.
    async fn create_volume_unit(
        &self,
        unit: NewVolumeUnit,
    ) -> Result<VolumeUnitRecord, ProductsServiceError>;
}
