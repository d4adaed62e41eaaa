//! Product Records

use rust_decimal::Decimal;

use crate::{domain::shops::records::ShopId, ids::TypedId};

/// Product Id
pub type ProductId = TypedId<ProductRecord>;

/// Product Record
///
/// Brand and volume unit are denormalized to their names.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRecord {
    pub id: ProductId,
    pub name: String,
    pub brand: String,
    pub volume: Decimal,
    pub volume_unit: String,
    pub amount: u32,
}

/// Brand Id
pub type BrandId = TypedId<BrandRecord>;

/// Brand Record
#[derive(Debug, Clone, PartialEq)]
pub struct BrandRecord {
    pub id: BrandId,
    pub name: String,
}

/// Volume Unit Id
pub type VolumeUnitId = TypedId<VolumeUnitRecord>;

/// Volume Unit Record
#[derive(Debug, Clone, PartialEq)]
pub struct VolumeUnitRecord {
    pub id: VolumeUnitId,
    pub name: String,
}

/// Product Price Id
pub type ProductPriceId = TypedId<ProductPriceRecord>;

/// Product Shop Price Record
#[derive(Debug, Clone, PartialEq)]
pub struct ProductPriceRecord {
    pub id: ProductPriceId,
    pub product_id: ProductId,
    pub shop_id: ShopId,
    pub price: Decimal,
}

/// Ids generated while adding a product to the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct CreatedProduct {
    pub product_id: ProductId,
    pub brand_id: BrandId,

    /// `false` when an existing brand was reused.
    pub brand_created: bool,

    /// Price row ids, in the order the prices were supplied.
    pub price_ids: Vec<ProductPriceId>,
}
