//! Amount validation.
//!
//! Raw input text becomes an [`Amount`] only through [`Amount::parse`], so
//! holding an `Amount` means the value already passed the positivity check.

use std::fmt;
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Number of decimal places used when money is displayed.
pub const DISPLAY_PLACES: u32 = 2;

/// How a parsed amount is treated before approval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingPolicy {
    /// Keep every decimal place the user typed.
    #[default]
    Preserve,
    /// Round to whole cents (midpoint away from zero).
    Cents,
}

impl RoundingPolicy {
    pub fn apply(self, value: Decimal) -> Decimal {
        match self {
            RoundingPolicy::Preserve => value,
            RoundingPolicy::Cents => {
                value.round_dp_with_strategy(DISPLAY_PLACES, RoundingStrategy::MidpointAwayFromZero)
            }
        }
    }
}

/// A strictly positive monetary amount approved for a credit or debit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(Decimal);

impl Amount {
    /// Parse raw input keeping full precision.
    pub fn parse(input: &str) -> Result<Self> {
        Self::parse_with(input, RoundingPolicy::Preserve)
    }

    /// Parse raw input and apply `policy` before the positivity check.
    ///
    /// Surrounding whitespace is ignored. Plain decimal notation is tried
    /// first, then scientific notation (`1e3`). Digit separators (`1_000`)
    /// are not numbers here.
    ///
    /// Accepted values are those a [`Decimal`] holds: at most
    /// `79228162514264337593543950335` and no finer than 28 decimal places.
    /// Anything outside that range is rejected.
    pub fn parse_with(input: &str, policy: RoundingPolicy) -> Result<Self> {
        let trimmed = input.trim();
        if trimmed.contains('_') {
            return Err(Error::InvalidAmount(input.to_string()));
        }
        let parsed = Decimal::from_str(trimmed)
            .or_else(|_| Decimal::from_scientific(trimmed))
            .map_err(|_| Error::InvalidAmount(input.to_string()))?;

        let value = policy.apply(parsed);
        if value <= Decimal::ZERO {
            return Err(Error::InvalidAmount(input.to_string()));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl FromStr for Amount {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Format money as `<symbol><value>` with exactly two decimals.
pub fn format_money(symbol: &str, value: Decimal) -> String {
    let mut shown =
        value.round_dp_with_strategy(DISPLAY_PLACES, RoundingStrategy::MidpointAwayFromZero);
    shown.rescale(DISPLAY_PLACES);
    format!("{}{}", symbol, shown)
}
