//! Shop Records

use crate::ids::TypedId;

/// Shop Id
pub type ShopId = TypedId<ShopRecord>;

/// Shop Record
#[derive(Debug, Clone, PartialEq)]
pub struct ShopRecord {
    /// Store-generated shop identifier.
    pub id: ShopId,

    /// Shop display name.
    pub name: String,
}
