use crate::error::MarketError;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::fmt;

/// Funds held by a customer, or the total cost of a purchase.
///
/// A thin wrapper around `rust_decimal::Decimal` so that money never mixes with
/// plain numbers by accident.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Balance(pub Decimal);

/// Unit price of a product. Never negative, including when deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Deserialize)]
#[serde(try_from = "Decimal")]
pub struct Price(Decimal);

impl Price {
    pub fn new(value: Decimal) -> Result<Self, MarketError> {
        if value >= Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(MarketError::ValidationError(
                "Price must not be negative".to_string(),
            ))
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Cost of `quantity` units, or `None` when it does not fit in a `Decimal`.
    pub fn total(&self, quantity: u32) -> Option<Balance> {
        self.0.checked_mul(Decimal::from(quantity)).map(Balance)
    }
}

impl TryFrom<Decimal> for Price {
    type Error = MarketError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl Balance {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// `self - rhs`, or `None` when the result does not fit in a `Decimal`.
    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        self.0.checked_sub(rhs.0).map(Self)
    }
}

impl fmt::Display for Balance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_price_validation() {
        assert!(Price::new(dec!(1.0)).is_ok());
        assert!(Price::new(dec!(0.0)).is_ok());
        assert!(matches!(
            Price::new(dec!(-1.0)),
            Err(MarketError::ValidationError(_))
        ));
    }

    #[test]
    fn test_balance_checked_sub() {
        let b1 = Balance::new(dec!(10.0));
        let b2 = Balance::new(dec!(2.5));
        assert_eq!(b1.checked_sub(b2), Some(Balance::new(dec!(7.5))));

        let max = Balance::new(Decimal::MAX);
        assert_eq!(max.checked_sub(Balance::new(dec!(-1))), None);
    }

    #[test]
    fn test_price_total() {
        let price = Price::new(dec!(1000.0)).unwrap();
        assert_eq!(price.total(3), Some(Balance::new(dec!(3000.0))));
        assert_eq!(price.total(0), Some(Balance::ZERO));

        let huge = Price::new(Decimal::MAX).unwrap();
        assert_eq!(huge.total(2), None);
    }

    #[test]
    fn test_display_is_normalized() {
        assert_eq!(Balance::new(dec!(500.00)).to_string(), "500");
        assert_eq!(Price::new(dec!(0.50)).unwrap().to_string(), "0.5");
    }

    #[test]
    fn test_negative_zero_is_not_negative() {
        assert!(!Balance::new(dec!(-0.0)).is_negative());
        assert!(Balance::new(dec!(-0.01)).is_negative());
    }

    #[test]
    fn test_price_deserialization_rejects_negative() {
        let ok: Price = serde_json::from_str("\"2.5\"").unwrap();
        assert_eq!(ok.value(), dec!(2.5));
        assert!(serde_json::from_str::<Price>("\"-2.5\"").is_err());
    }
}
