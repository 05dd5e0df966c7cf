//! Money value object.
//!
//! Prices are held in the smallest currency unit (cents) so sums and products
//! are exact. The currency itself is implied; only the 2-decimal display
//! convention is modelled.

use core::str::FromStr;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

/// Non-negative price in minor units (cents).
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price {
    cents: u64,
}

impl ValueObject for Price {}

impl Price {
    pub const ZERO: Price = Price { cents: 0 };

    pub const fn from_cents(cents: u64) -> Self {
        Self { cents }
    }

    pub const fn cents(self) -> u64 {
        self.cents
    }

    /// Build a price from an amount in major units, rounded to the nearest cent.
    pub fn from_major(amount: f64) -> DomainResult<Self> {
        if !amount.is_finite() {
            return Err(DomainError::validation(format!(
                "price must be a finite number (got {amount})"
            )));
        }
        if amount < 0.0 {
            return Err(DomainError::validation(format!(
                "price cannot be negative (got {amount})"
            )));
        }
        let cents = (amount * 100.0).round();
        // u64::MAX is not exactly representable; anything at or above 2^64 overflows.
        if cents >= u64::MAX as f64 {
            return Err(DomainError::validation(format!(
                "price is out of range (got {amount})"
            )));
        }
        Ok(Self {
            cents: cents as u64,
        })
    }

    pub fn as_major(self) -> f64 {
        self.cents as f64 / 100.0
    }

    pub fn checked_add(self, other: Price) -> Option<Price> {
        self.cents.checked_add(other.cents).map(Price::from_cents)
    }

    pub fn checked_mul(self, quantity: u64) -> Option<Price> {
        self.cents.checked_mul(quantity).map(Price::from_cents)
    }
}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}.{:02}", self.cents / 100, self.cents % 100)
    }
}

impl FromStr for Price {
    type Err = DomainError;

    /// Accepts `5`, `5.7`, `5.75` and an optional leading `$`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DomainError::validation(format!("invalid price `{s}`"));

        let raw = s.trim();
        let raw = raw.strip_prefix('$').unwrap_or(raw);
        let (units, frac) = match raw.split_once('.') {
            Some((units, frac)) => (units, Some(frac)),
            None => (raw, None),
        };

        if units.is_empty() || !units.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let units: u64 = units.parse().map_err(|_| invalid())?;

        let frac_cents = match frac {
            None => 0,
            Some(frac) => {
                if frac.is_empty() || frac.len() > 2 || !frac.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(invalid());
                }
                let value: u64 = frac.parse().map_err(|_| invalid())?;
                if frac.len() == 1 { value * 10 } else { value }
            }
        };

        units
            .checked_mul(100)
            .and_then(|c| c.checked_add(frac_cents))
            .map(Price::from_cents)
            .ok_or_else(invalid)
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_major())
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let amount = f64::deserialize(deserializer)?;
        Price::from_major(amount).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn displays_two_decimals() {
        assert_eq!(Price::from_cents(175).to_string(), "1.75");
        assert_eq!(Price::from_cents(100).to_string(), "1.00");
        assert_eq!(Price::from_cents(5).to_string(), "0.05");
        assert_eq!(Price::ZERO.to_string(), "0.00");
        assert_eq!(Price::from_cents(196_125).to_string(), "1961.25");
    }

    #[test]
    fn from_major_rounds_to_nearest_cent() {
        assert_eq!(Price::from_major(5.75).unwrap(), Price::from_cents(575));
        assert_eq!(Price::from_major(0.1 + 0.2).unwrap(), Price::from_cents(30));
        assert_eq!(Price::from_major(0.0).unwrap(), Price::ZERO);
    }

    #[test]
    fn from_major_rejects_negative_and_non_finite() {
        for bad in [-0.01, f64::NAN, f64::INFINITY, f64::NEG_INFINITY, 1e30] {
            let err = Price::from_major(bad).unwrap_err();
            assert!(matches!(err, DomainError::Validation(_)), "{bad} accepted");
        }
    }

    #[test]
    fn parses_common_forms() {
        assert_eq!("5.75".parse::<Price>().unwrap(), Price::from_cents(575));
        assert_eq!("$4".parse::<Price>().unwrap(), Price::from_cents(400));
        assert_eq!("0.5".parse::<Price>().unwrap(), Price::from_cents(50));
        assert_eq!(" 2.25 ".parse::<Price>().unwrap(), Price::from_cents(225));
    }

    #[test]
    fn rejects_malformed_strings() {
        for bad in ["", "$", "-1.00", "1.234", "1.", ".5", "abc", "1,00", "+3"] {
            assert!(bad.parse::<Price>().is_err(), "`{bad}` accepted");
        }
    }

    #[test]
    fn checked_arithmetic_reports_overflow() {
        let max = Price::from_cents(u64::MAX);
        assert_eq!(max.checked_add(Price::from_cents(1)), None);
        assert_eq!(max.checked_mul(2), None);
        assert_eq!(
            Price::from_cents(575).checked_mul(90),
            Some(Price::from_cents(51_750))
        );
    }

    #[test]
    fn serializes_in_major_units() {
        assert_eq!(serde_json::to_string(&Price::from_cents(175)).unwrap(), "1.75");
        let p: Price = serde_json::from_str("5.5").unwrap();
        assert_eq!(p, Price::from_cents(550));
        assert!(serde_json::from_str::<Price>("-2.0").is_err());
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: any whole-cent amount survives the trip through major units.
        #[test]
        fn major_units_preserve_cents(cents in 0u64..10_000_000_000u64) {
            let price = Price::from_major(cents as f64 / 100.0).unwrap();
            prop_assert_eq!(price.cents(), cents);
        }
    }
}
