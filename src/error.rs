use crate::domain::customer::CustomerId;
use crate::domain::money::Balance;
use thiserror::Error;

/// Why a purchase was turned down. No state is touched in any of these cases.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum PurchaseError {
    #[error("payment method not set")]
    NoPaymentMethod,
    #[error("insufficient stock: requested {requested}, available {available}")]
    InsufficientStock { requested: u32, available: u32 },
    #[error("insufficient funds: cost {cost}, balance {balance}")]
    InsufficientFunds { cost: Balance, balance: Balance },
}

#[derive(Error, Debug)]
pub enum MarketError {
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Scenario error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("Customer not found: {0}")]
    CustomerNotFound(CustomerId),
    #[error("Product not found: {0}")]
    ProductNotFound(String),
    #[error(transparent)]
    Purchase(#[from] PurchaseError),
}

pub type Result<T> = std::result::Result<T, MarketError>;
