//! Ruble amounts.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

const KOPECKS_PER_RUBLE: u64 = 100;

/// Non-negative amount in rubles, stored in kopecks.
///
/// Decimal input is rounded to two fractional digits on construction, so every
/// later computation (line totals, grand total, words) works on the same
/// kopeck value that gets displayed.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(u64);

impl ValueObject for Money {}

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_kopecks(kopecks: u64) -> Self {
        Self(kopecks)
    }

    /// Build an amount from a decimal ruble value (e.g. `1234.5`).
    pub fn from_rubles(value: f64) -> DomainResult<Self> {
        Self::from_scaled_kopecks(value * KOPECKS_PER_RUBLE as f64, value)
    }

    fn from_scaled_kopecks(kopecks: f64, original: f64) -> DomainResult<Self> {
        if !kopecks.is_finite() {
            return Err(DomainError::invalid_amount(format!(
                "{original} is not a finite number"
            )));
        }
        if kopecks < 0.0 {
            return Err(DomainError::invalid_amount(format!(
                "{original} is negative"
            )));
        }
        let rounded = kopecks.round();
        if rounded >= u64::MAX as f64 {
            return Err(DomainError::invalid_amount(format!(
                "{original} is too large"
            )));
        }
        Ok(Self(rounded as u64))
    }

    pub fn kopecks(self) -> u64 {
        self.0
    }

    /// Whole rubles.
    pub fn rubles(self) -> u64 {
        self.0 / KOPECKS_PER_RUBLE
    }

    /// Kopecks after the whole rubles (0..=99).
    pub fn kopeck_part(self) -> u64 {
        self.0 % KOPECKS_PER_RUBLE
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Decimal ruble value, for JSON and display arithmetic only.
    pub fn as_f64(self) -> f64 {
        self.0 as f64 / KOPECKS_PER_RUBLE as f64
    }

    pub fn checked_add(self, other: Money) -> DomainResult<Money> {
        self.0
            .checked_add(other.0)
            .map(Money)
            .ok_or_else(|| DomainError::invalid_amount("total overflow"))
    }

    /// Multiply by a quantity, rounding the result to the kopeck.
    pub fn times(self, quantity: f64) -> DomainResult<Money> {
        Self::from_scaled_kopecks(self.0 as f64 * quantity, self.as_f64() * quantity)
    }
}

/// Always two decimals, dot separator: `1234.50`.
impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}.{:02}", self.rubles(), self.kopeck_part())
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_f64())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        Money::from_rubles(value).map_err(serde::de::Error::custom)
    }
}
