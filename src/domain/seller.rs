use super::product::ProductId;
use serde::Deserialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub struct SellerId(pub u32);

impl fmt::Display for SellerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A seller and the products they list.
///
/// Holds handles only; the products themselves live in the marketplace.
#[derive(Debug, Clone, PartialEq)]
pub struct Seller {
    pub id: SellerId,
    pub name: String,
    products: Vec<ProductId>,
}

impl Seller {
    pub fn new(name: impl Into<String>, id: SellerId) -> Self {
        Self {
            id,
            name: name.into(),
            products: Vec::new(),
        }
    }

    pub fn add_product(&mut self, product: ProductId) {
        self.products.push(product);
    }

    pub fn products(&self) -> &[ProductId] {
        &self.products
    }
}
