//! The balance state machine.
//!
//! A [`Balance`] has exactly two transitions, [`Balance::credit`] and
//! [`Balance::debit`]. Both take an [`Amount`], which is always positive,
//! and neither can leave the balance below zero.

use rust_decimal::Decimal;

use super::amount::Amount;
use crate::{Error, Result};

/// Kind of balance transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Increase the balance (deposit).
    Credit,
    /// Decrease the balance (withdrawal).
    Debit,
}

impl Operation {
    pub fn label(&self) -> &'static str {
        match self {
            Operation::Credit => "deposit",
            Operation::Debit => "withdrawal",
        }
    }
}

/// Available balance. Starts at zero and never goes negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Balance(Decimal);

impl Balance {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn available(&self) -> Decimal {
        self.0
    }

    /// Add `amount`. Returns the new balance.
    ///
    /// Fails when the sum leaves the representable decimal range or would
    /// need more than 28 significant digits to be exact. The amount is then
    /// treated as invalid and nothing changes.
    pub fn credit(&mut self, amount: Amount) -> Result<Decimal> {
        let next = self
            .0
            .checked_add(amount.value())
            .filter(|next| *next - self.0 == amount.value())
            .ok_or_else(|| Error::InvalidAmount(amount.to_string()))?;
        self.0 = next;
        Ok(next)
    }

    /// Subtract `amount` if it is covered by the balance. Returns the new balance.
    ///
    /// A covered amount whose difference cannot be represented exactly is
    /// rejected as invalid.
    pub fn debit(&mut self, amount: Amount) -> Result<Decimal> {
        if amount.value() > self.0 {
            return Err(Error::InsufficientFunds {
                requested: amount.value(),
                available: self.0,
            });
        }
        let next = self
            .0
            .checked_sub(amount.value())
            .filter(|next| self.0 - *next == amount.value())
            .ok_or_else(|| Error::InvalidAmount(amount.to_string()))?;
        self.0 = next;
        Ok(next)
    }
}
