use super::money::Balance;
use super::payment::PaymentMethod;
use super::product::Product;
use crate::error::{MarketError, PurchaseError};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub struct CustomerId(pub u32);

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A buyer with funds and, optionally, a chosen way to pay.
///
/// The balance starts non-negative and purchases never debit past zero.
#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    balance: Balance,
    payment_method: Option<PaymentMethod>,
}

/// Proof of a completed purchase.
#[derive(Debug, Clone, PartialEq)]
pub struct Receipt {
    pub product: String,
    pub quantity: u32,
    pub cost: Balance,
    pub payment_method: PaymentMethod,
    pub remaining_balance: Balance,
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Success: Bought {} x{} for {} using {}",
            self.product, self.quantity, self.cost, self.payment_method
        )?;
        write!(f, "Remaining balance: {}", self.remaining_balance)
    }
}

impl Customer {
    pub fn new(
        name: impl Into<String>,
        id: CustomerId,
        balance: Balance,
    ) -> Result<Self, MarketError> {
        let name = name.into();
        if balance.is_negative() {
            return Err(MarketError::ValidationError(format!(
                "customer {name:?} has a negative balance"
            )));
        }
        Ok(Self {
            id,
            name,
            balance,
            payment_method: None,
        })
    }

    pub fn with_payment_method(mut self, method: PaymentMethod) -> Self {
        self.payment_method = Some(method);
        self
    }

    pub fn balance(&self) -> Balance {
        self.balance
    }

    pub fn payment_method(&self) -> Option<PaymentMethod> {
        self.payment_method
    }

    pub fn set_payment_method(&mut self, method: PaymentMethod) {
        self.payment_method = Some(method);
    }

    /// Buys `quantity` units of `product`.
    ///
    /// Checks run in order: payment method, stock, funds. Both the stock and the
    /// balance are written only after every check has passed, so a rejected
    /// purchase leaves `self` and `product` exactly as they were.
    pub fn purchase(
        &mut self,
        product: &mut Product,
        quantity: u32,
    ) -> Result<Receipt, PurchaseError> {
        let method = self.payment_method.ok_or(PurchaseError::NoPaymentMethod)?;

        if product.quantity < quantity {
            return Err(PurchaseError::InsufficientStock {
                requested: quantity,
                available: product.quantity,
            });
        }

        // A cost too large to represent cannot be covered by any balance.
        let cost = product.price.total(quantity).ok_or(PurchaseError::InsufficientFunds {
            cost: Balance(Decimal::MAX),
            balance: self.balance,
        })?;

        let auth = method.attempt(cost, self.balance);
        if !auth.approved {
            return Err(PurchaseError::InsufficientFunds {
                cost,
                balance: self.balance,
            });
        }

        product.reduce_quantity(quantity);
        self.balance = auth.balance;

        Ok(Receipt {
            product: product.name.clone(),
            quantity,
            cost,
            payment_method: method,
            remaining_balance: self.balance,
        })
    }
}
