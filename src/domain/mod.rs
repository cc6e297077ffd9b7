//! Marketplace entities and the purchase transaction.

pub mod customer;
pub mod marketplace;
pub mod money;
pub mod order;
pub mod payment;
pub mod product;
pub mod seller;
