use super::money::Balance;
use serde::Deserialize;
use std::fmt;

/// How a customer pays.
///
/// Every variant currently runs the same affordability check. The enum is the
/// seam where fees or other per-method rules would go.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Cash,
    Card,
    Crypto,
}

/// Result of asking a payment method to cover an amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Authorization {
    pub approved: bool,
    /// Balance after the debit when approved, the untouched balance otherwise.
    pub balance: Balance,
}

impl PaymentMethod {
    pub fn name(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "CashPayment",
            PaymentMethod::Card => "CardPayment",
            PaymentMethod::Crypto => "CryptoPayment",
        }
    }

    /// Checks whether `balance` covers `amount` and computes the debited balance.
    ///
    /// A debit whose result cannot be represented is declined.
    pub fn attempt(&self, amount: Balance, balance: Balance) -> Authorization {
        match balance.checked_sub(amount) {
            Some(remaining) if balance >= amount => Authorization {
                approved: true,
                balance: remaining,
            },
            _ => Authorization {
                approved: false,
                balance,
            },
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
