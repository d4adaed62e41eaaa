//! Cart Records

use jiff::Timestamp;
use rust_decimal::Decimal;

use crate::{
    domain::{products::records::ProductId, shops::records::ShopId},
    ids::TypedId,
};

/// Cart Entry Id
pub type CartEntryId = TypedId<CartEntryRecord>;

/// Cart Entry Record
#[derive(Debug, Clone, PartialEq)]
pub struct CartEntryRecord {
    pub id: CartEntryId,
    pub product_id: ProductId,
    pub quantity: u32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// One row of the current cart: a cart entry paired with one shop price for its product.
///
/// An entry for a product stocked at three shops produces three lines.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLineRecord {
    pub id: CartEntryId,
    pub product_id: ProductId,
    pub product_name: String,
    pub brand_name: String,
    pub quantity: u32,
    pub volume: Decimal,
    pub volume_unit_name: String,
    pub shop_id: ShopId,
    pub shop_name: String,
    pub price: Decimal,
}

/// Result of taking one unit off a cart entry.
#[derive(Debug, Clone, PartialEq)]
pub enum DecrementOutcome {
    /// The entry still holds at least one unit.
    Decremented(CartEntryRecord),

    /// The last unit was taken and the entry deleted.
    Removed,
}
