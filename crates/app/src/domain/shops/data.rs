//! Shop Data

/// New Shop Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewShop {
    /// Shop name to persist.
    pub name: String,
}
