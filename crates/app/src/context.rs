//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    database::{self, Db},
    domain::{
        carts::{CartService, PgCartService},
        products::{PgProductsService, ProductsService},
        shops::{PgShopsService, ShopsService},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),
}

#[derive(Clone)]
pub struct AppContext {
    pub products: Arc<dyn ProductsService>,
    pub shops: Arc<dyn ShopsService>,
    pub carts: Arc<dyn CartService>,
}

impl AppContext {
    /// Build application context from a database URL.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection fails.
    pub async fn from_database_url(url: &str, max_connections: u32) -> Result<Self, AppInitError> {
        let pool = database::connect_with_max_connections(url, max_connections)
            .await
            .map_err(AppInitError::Database)?;

        Ok(Self::from_db(&Db::new(pool)))
    }

    /// Build application context backed by `PostgreSQL` services.
    #[must_use]
    pub fn from_db(db: &Db) -> Self {
        Self {
            products: Arc::new(PgProductsService::new(db.clone())),
            shops: Arc::new(PgShopsService::new(db.clone())),
            carts: Arc::new(PgCartService::new(db.clone())),
        }
    }
}
