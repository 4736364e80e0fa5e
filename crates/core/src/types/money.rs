//! Monetary amounts with minor-unit conversion.
//!
//! Gateway APIs express amounts as integers in the currency's minor unit
//! (e.g. cents for USD, öre for SEK), while the commerce platform works in
//! decimal major units. [`Money::minor_units`] is the single conversion
//! point between the two.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// A decimal amount paired with its currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    /// Amount in the currency's standard unit (e.g. dollars, not cents).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency: CurrencyCode,
}

impl Money {
    /// Create a new amount.
    #[must_use]
    pub const fn new(amount: Decimal, currency: CurrencyCode) -> Self {
        Self { amount, currency }
    }

    /// The amount as an integer count of the currency's minor unit,
    /// rounded half-up at the minor-unit boundary.
    #[must_use]
    pub fn minor_units(&self) -> i64 {
        let factor = Decimal::from(10_i64.pow(self.currency.minor_unit_exponent()));
        (self.amount * factor)
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_i64()
            .unwrap_or_default()
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} {}", self.amount, self.currency.as_str())
    }
}

/// ISO 4217 currency codes for the supported sales markets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    USD,
    EUR,
    GBP,
    SEK,
    NOK,
    DKK,
    CAD,
    AUD,
    JPY,
}

impl CurrencyCode {
    /// The ISO 4217 alphabetic code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::USD => "USD",
            Self::EUR => "EUR",
            Self::GBP => "GBP",
            Self::SEK => "SEK",
            Self::NOK => "NOK",
            Self::DKK => "DKK",
            Self::CAD => "CAD",
            Self::AUD => "AUD",
            Self::JPY => "JPY",
        }
    }

    /// Number of decimal places in the currency's minor unit.
    #[must_use]
    pub const fn minor_unit_exponent(self) -> u32 {
        match self {
            Self::JPY => 0,
            _ => 2,
        }
    }

    /// Parse an ISO 4217 alphabetic code.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        [
            Self::USD,
            Self::EUR,
            Self::GBP,
            Self::SEK,
            Self::NOK,
            Self::DKK,
            Self::CAD,
            Self::AUD,
            Self::JPY,
        ]
        .into_iter()
        .find(|c| c.as_str().eq_ignore_ascii_case(code))
    }
}

impl std::fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
