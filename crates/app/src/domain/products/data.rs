//! Products Data

use rust_decimal::Decimal;

use crate::domain::shops::records::ShopId;

/// New Product Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub brand: String,
    pub amount: u32,
    pub volume: Decimal,
    pub volume_unit: String,

    /// Per-shop prices, inserted in this order.
    pub prices: Vec<NewProductPrice>,
}

/// New Product Price Data
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewProductPrice {
    pub shop: ShopId,
    pub price: Decimal,
}

/// New Volume Unit Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewVolumeUnit {
    pub name: String,
}
