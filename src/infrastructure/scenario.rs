use crate::domain::customer::{Customer, CustomerId};
use crate::domain::marketplace::Marketplace;
use crate::domain::money::{Balance, Price};
use crate::domain::order::Order;
use crate::domain::payment::PaymentMethod;
use crate::domain::product::Product;
use crate::domain::seller::{Seller, SellerId};
use crate::error::Result;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;
use std::io::Read;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SellerEntry {
    pub id: SellerId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProductEntry {
    pub name: String,
    pub price: Price,
    pub quantity: u32,
    pub seller: SellerId,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CustomerEntry {
    pub id: CustomerId,
    pub name: String,
    pub balance: Decimal,
    #[serde(default)]
    pub payment_method: Option<PaymentMethod>,
}

/// Initial marketplace contents plus the orders to run against them.
///
/// Loaded from JSON, e.g.
///
/// ```json
/// {
///   "sellers": [{ "id": 1, "name": "John's Store" }],
///   "products": [{ "name": "Laptop", "price": "1000", "quantity": 5, "seller": 1 }],
///   "customers": [{ "id": 1, "name": "Alice", "balance": "1500", "payment_method": "cash" }],
///   "orders": [{ "customer": 1, "product": "Laptop", "quantity": 1 }]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub sellers: Vec<SellerEntry>,
    #[serde(default)]
    pub products: Vec<ProductEntry>,
    #[serde(default)]
    pub customers: Vec<CustomerEntry>,
    #[serde(default)]
    pub orders: Vec<Order>,
}

impl Scenario {
    /// The fixed demonstration: one store, two products, Alice buys a laptop in cash.
    pub fn demo() -> Result<Self> {
        Ok(Self {
            sellers: vec![SellerEntry {
                id: SellerId(1),
                name: "John's Store".to_string(),
            }],
            products: vec![
                ProductEntry {
                    name: "Laptop".to_string(),
                    price: Price::new(dec!(1000.0))?,
                    quantity: 5,
                    seller: SellerId(1),
                },
                ProductEntry {
                    name: "Phone".to_string(),
                    price: Price::new(dec!(500.0))?,
                    quantity: 10,
                    seller: SellerId(1),
                },
            ],
            customers: vec![CustomerEntry {
                id: CustomerId(1),
                name: "Alice".to_string(),
                balance: dec!(1500.0),
                payment_method: Some(PaymentMethod::Cash),
            }],
            orders: vec![Order {
                customer: CustomerId(1),
                product: "Laptop".to_string(),
                quantity: 1,
            }],
        })
    }

    pub fn from_reader<R: Read>(source: R) -> Result<Self> {
        Ok(serde_json::from_reader(source)?)
    }

    /// Builds a marketplace from the scenario. Customers with a negative balance
    /// are rejected; negative prices never get past deserialization.
    pub fn build(&self) -> Result<Marketplace> {
        let mut market = Marketplace::new();

        for entry in &self.sellers {
            market.add_seller(Seller::new(entry.name.clone(), entry.id));
        }

        for entry in &self.products {
            market.add_product(Product::new(
                entry.name.clone(),
                entry.price,
                entry.quantity,
                entry.seller,
            ));
        }

        for entry in &self.customers {
            let mut customer =
                Customer::new(entry.name.clone(), entry.id, Balance::new(entry.balance))?;
            if let Some(method) = entry.payment_method {
                customer.set_payment_method(method);
            }
            market.add_customer(customer);
        }

        Ok(market)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MarketError;

    #[test]
    fn test_demo_builds() {
        let market = Scenario::demo().unwrap().build().unwrap();

        let names: Vec<&str> = market.list_products().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Laptop", "Phone"]);
        assert_eq!(market.products_by_seller(SellerId(1)).count(), 2);

        let alice = market.customer(CustomerId(1)).unwrap();
        assert_eq!(alice.balance(), Balance::new(dec!(1500.0)));
        assert_eq!(alice.payment_method(), Some(PaymentMethod::Cash));
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "sellers": [{ "id": 7, "name": "Gadgets" }],
            "products": [{ "name": "Drone", "price": 250.5, "quantity": 3, "seller": 7 }],
            "customers": [
                { "id": 1, "name": "Bob", "balance": "300", "payment_method": "crypto" },
                { "id": 2, "name": "Carol", "balance": "10" }
            ]
        }"#;
        let scenario = Scenario::from_reader(json.as_bytes()).unwrap();
        assert!(scenario.orders.is_empty());

        let market = scenario.build().unwrap();
        let drone = market.find_product("Drone").unwrap();
        assert_eq!(market.product(drone).unwrap().price.value(), dec!(250.5));
        assert_eq!(
            market.customer(CustomerId(1)).unwrap().payment_method(),
            Some(PaymentMethod::Crypto)
        );
        assert_eq!(market.customer(CustomerId(2)).unwrap().payment_method(), None);
    }

    #[test]
    fn test_negative_price_rejected_on_load() {
        let json = r#"{
            "products": [{ "name": "Bad", "price": "-1", "quantity": 1, "seller": 1 }]
        }"#;
        let err = Scenario::from_reader(json.as_bytes()).unwrap_err();
        assert!(matches!(err, MarketError::JsonError(_)));
        assert!(err.to_string().contains("Price must not be negative"));
    }

    #[test]
    fn test_negative_balance_rejected_on_build() {
        let mut scenario = Scenario::demo().unwrap();
        scenario.customers[0].balance = dec!(-0.01);
        assert!(matches!(
            scenario.build(),
            Err(MarketError::ValidationError(_))
        ));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            Scenario::from_reader("{ \"products\": 5 }".as_bytes()),
            Err(MarketError::JsonError(_))
        ));
    }
}
