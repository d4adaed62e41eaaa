//! Product Repositories

mod brands;
mod prices;
mod products;
mod volume_units;

pub(crate) use brands::PgBrandsRepository;
pub(crate) use prices::PgProductPricesRepository;
pub(crate) use products::{NewProductRow, PgProductsRepository};
pub(crate) use volume_units::PgVolumeUnitsRepository;
