use super::customer::CustomerId;
use serde::Deserialize;

/// A request for a customer to buy some units of a product, by product name.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct Order {
    pub customer: CustomerId,
    pub product: String,
    pub quantity: u32,
}
