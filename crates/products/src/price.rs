//! Price value object.

use serde::{Deserialize, Serialize};

use catalog_core::{DomainError, DomainResult, ValueObject};

/// Non-negative, finite product price.
///
/// Serialized as a bare JSON number; deserialization runs the same validation
/// as [`Price::new`].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Price(f64);

impl Price {
    pub const ZERO: Price = Price(0.0);

    pub fn new(amount: f64) -> DomainResult<Self> {
        if !amount.is_finite() {
            return Err(DomainError::validation("price must be a finite number"));
        }
        if amount < 0.0 {
            return Err(DomainError::validation("price cannot be negative"));
        }
        // Fold -0.0 into 0.0 so equality and serialization stay canonical.
        Ok(Self(if amount == 0.0 { 0.0 } else { amount }))
    }

    pub fn amount(self) -> f64 {
        self.0
    }
}

impl ValueObject for Price {}

impl TryFrom<f64> for Price {
    type Error = DomainError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Price::new(value)
    }
}

impl From<Price> for f64 {
    fn from(value: Price) -> Self {
        value.0
    }
}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn accepts_zero_and_positive_amounts() {
        assert_eq!(Price::new(0.0).unwrap(), Price::ZERO);
        assert_eq!(Price::new(9.99).unwrap().amount(), 9.99);
    }

    #[test]
    fn rejects_negative_amounts() {
        let err = Price::new(-1.0).unwrap_err();
        assert_eq!(err, DomainError::validation("price cannot be negative"));
    }

    #[test]
    fn rejects_non_finite_amounts() {
        for amount in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(matches!(Price::new(amount), Err(DomainError::Validation(_))));
        }
    }

    #[test]
    fn negative_zero_is_normalized() {
        let price = Price::new(-0.0).unwrap();
        assert!(price.amount().is_sign_positive());
    }

    #[test]
    fn deserialization_validates() {
        let ok: Price = serde_json::from_str("12.5").unwrap();
        assert_eq!(ok.amount(), 12.5);
        assert!(serde_json::from_str::<Price>("-3").is_err());
    }

    #[test]
    fn displays_two_decimals() {
        assert_eq!(Price::new(12.5).unwrap().to_string(), "12.50");
    }

    proptest! {
        #[test]
        fn every_non_negative_finite_amount_is_accepted(amount in 0.0f64..1.0e12) {
            prop_assert_eq!(Price::new(amount).unwrap().amount(), amount);
        }

        #[test]
        fn every_negative_amount_is_rejected(amount in -1.0e12f64..-f64::MIN_POSITIVE) {
            prop_assert!(Price::new(amount).is_err());
        }
    }
}
