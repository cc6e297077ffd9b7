use super::money::Price;
use super::seller::SellerId;

/// Handle to a product stored in the marketplace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProductId(pub(crate) usize);

/// An item offered for sale.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub name: String,
    pub price: Price,
    pub quantity: u32,
    pub seller_id: SellerId,
}

impl Product {
    pub fn new(name: impl Into<String>, price: Price, quantity: u32, seller_id: SellerId) -> Self {
        Self {
            name: name.into(),
            price,
            quantity,
            seller_id,
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.quantity == 0
    }

    /// Removes `amount` units from stock. Callers check availability first.
    pub(crate) fn reduce_quantity(&mut self, amount: u32) {
        debug_assert!(self.quantity >= amount);
        self.quantity -= amount;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_reduce_quantity() {
        let mut product = Product::new("Phone", Price::new(dec!(500.0)).unwrap(), 10, SellerId(1));
        product.reduce_quantity(4);
        assert_eq!(product.quantity, 6);
        assert!(!product.is_exhausted());

        product.reduce_quantity(6);
        assert!(product.is_exhausted());
    }
}
