use super::customer::{Customer, CustomerId, Receipt};
use super::product::{Product, ProductId};
use super::seller::{Seller, SellerId};
use crate::error::{MarketError, Result};

/// Directory of sellers, products and customers.
///
/// The marketplace owns every `Product`; sellers refer to them by `ProductId`.
/// Lookups are by insertion order and the first match wins. Nothing is
/// deduplicated and products are never removed, even when sold out.
#[derive(Debug, Default, Clone)]
pub struct Marketplace {
    sellers: Vec<Seller>,
    products: Vec<Product>,
    customers: Vec<Customer>,
}

impl Marketplace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_seller(&mut self, seller: Seller) {
        self.sellers.push(seller);
    }

    pub fn add_customer(&mut self, customer: Customer) {
        self.customers.push(customer);
    }

    /// Lists a product and links it to its seller when that seller is registered.
    pub fn add_product(&mut self, product: Product) -> ProductId {
        let id = ProductId(self.products.len());
        if let Some(seller) = self.sellers.iter_mut().find(|s| s.id == product.seller_id) {
            seller.add_product(id);
        }
        self.products.push(product);
        id
    }

    pub fn find_product(&self, name: &str) -> Option<ProductId> {
        self.products
            .iter()
            .position(|p| p.name == name)
            .map(ProductId)
    }

    pub fn find_customer(&self, name: &str) -> Option<&Customer> {
        self.customers.iter().find(|c| c.name == name)
    }

    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.get(id.0)
    }

    pub fn seller(&self, id: SellerId) -> Option<&Seller> {
        self.sellers.iter().find(|s| s.id == id)
    }

    pub fn customer(&self, id: CustomerId) -> Option<&Customer> {
        self.customers.iter().find(|c| c.id == id)
    }

    pub fn customer_mut(&mut self, id: CustomerId) -> Option<&mut Customer> {
        self.customers.iter_mut().find(|c| c.id == id)
    }

    /// Read-only view of the catalog. Call again to start over.
    pub fn list_products(&self) -> impl Iterator<Item = &Product> + Clone {
        self.products.iter()
    }

    pub fn products_by_seller(&self, id: SellerId) -> impl Iterator<Item = &Product> {
        self.seller(id)
            .into_iter()
            .flat_map(|seller| seller.products())
            .filter_map(|pid| self.product(*pid))
    }

    /// Runs a purchase for a registered customer against a listed product.
    pub fn purchase(
        &mut self,
        customer_id: CustomerId,
        product_id: ProductId,
        quantity: u32,
    ) -> Result<Receipt> {
        let customer = self
            .customers
            .iter_mut()
            .find(|c| c.id == customer_id)
            .ok_or(MarketError::CustomerNotFound(customer_id))?;
        let product = self
            .products
            .get_mut(product_id.0)
            .ok_or_else(|| MarketError::ProductNotFound(format!("#{}", product_id.0)))?;

        Ok(customer.purchase(product, quantity)?)
    }
}
