//! Cart Data

/// Request to put a product, looked up by name, into the cart.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCartAddition {
    pub product_name: String,
    pub amount: u32,
}
