//! Banking card view-model.
//!
//! Holds the two pending input strings and the balance, and implements the
//! deposit and withdraw handlers. Every attempt reports exactly one toast to
//! the injected [`Notifier`]; a rejected attempt changes neither the balance
//! nor the input text.

use rust_decimal::Decimal;

use super::amount::{format_money, Amount, RoundingPolicy};
use super::balance::{Balance, Operation};
use crate::notify::{Notifier, Severity};
use crate::{blog, blog_warn, Error, Result};

const TITLE_INVALID: &str = "Invalid Amount";
const TITLE_INSUFFICIENT: &str = "Insufficient Funds";
const TITLE_DEPOSITED: &str = "Deposit Successful";
const TITLE_WITHDRAWN: &str = "Withdrawal Successful";

/// Display and validation settings for a card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardSettings {
    pub currency: String,
    pub rounding: RoundingPolicy,
}

impl Default for CardSettings {
    fn default() -> Self {
        Self {
            currency: "$".to_string(),
            rounding: RoundingPolicy::default(),
        }
    }
}

pub struct BankingCard<N: Notifier> {
    deposit_amount: String,
    withdraw_amount: String,
    balance: Balance,
    settings: CardSettings,
    notifier: N,
}

impl<N: Notifier> BankingCard<N> {
    pub fn new(notifier: N) -> Self {
        Self::with_settings(notifier, CardSettings::default())
    }

    pub fn with_settings(notifier: N, settings: CardSettings) -> Self {
        Self {
            deposit_amount: String::new(),
            withdraw_amount: String::new(),
            balance: Balance::new(),
            settings,
            notifier,
        }
    }

    // Accessors

    pub fn deposit_amount(&self) -> &str {
        &self.deposit_amount
    }

    pub fn withdraw_amount(&self) -> &str {
        &self.withdraw_amount
    }

    pub fn set_deposit_amount(&mut self, text: impl Into<String>) {
        self.deposit_amount = text.into();
    }

    pub fn set_withdraw_amount(&mut self, text: impl Into<String>) {
        self.withdraw_amount = text.into();
    }

    /// Mutable access to a pending input, for key-by-key editing.
    pub fn input_mut(&mut self, op: Operation) -> &mut String {
        match op {
            Operation::Credit => &mut self.deposit_amount,
            Operation::Debit => &mut self.withdraw_amount,
        }
    }

    pub fn input(&self, op: Operation) -> &str {
        match op {
            Operation::Credit => &self.deposit_amount,
            Operation::Debit => &self.withdraw_amount,
        }
    }

    pub fn balance(&self) -> Decimal {
        self.balance.available()
    }

    pub fn balance_display(&self) -> String {
        self.money(self.balance.available())
    }

    pub fn settings(&self) -> &CardSettings {
        &self.settings
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }

    /// A button is only enabled once its input has text.
    pub fn can_deposit(&self) -> bool {
        !self.deposit_amount.is_empty()
    }

    pub fn can_withdraw(&self) -> bool {
        !self.withdraw_amount.is_empty()
    }

    pub fn can_submit(&self, op: Operation) -> bool {
        match op {
            Operation::Credit => self.can_deposit(),
            Operation::Debit => self.can_withdraw(),
        }
    }

    // Handlers

    /// Credit the pending deposit amount. Returns the credited amount.
    pub fn deposit(&mut self) -> Result<Amount> {
        let rounding = self.settings.rounding;
        let balance = &mut self.balance;
        let amount = match Amount::parse_with(&self.deposit_amount, rounding)
            .and_then(|amount| balance.credit(amount).map(|_| amount))
        {
            Ok(amount) => amount,
            Err(e) => {
                blog_warn!("deposit rejected: input={:?} err={}", self.deposit_amount, e);
                self.notifier.notify(
                    TITLE_INVALID,
                    "Please enter a valid deposit amount",
                    Severity::Destructive,
                );
                return Err(e);
            }
        };

        self.deposit_amount.clear();
        blog!(
            "deposit applied: amount={} balance={}",
            amount,
            self.balance.available()
        );
        let description = format!(
            "{} has been added to your account",
            self.money(amount.value())
        );
        self.notifier.notify(TITLE_DEPOSITED, &description, Severity::Success);
        Ok(amount)
    }

    /// Debit the pending withdraw amount. Returns the debited amount.
    pub fn withdraw(&mut self) -> Result<Amount> {
        let rounding = self.settings.rounding;
        let balance = &mut self.balance;
        let amount = match Amount::parse_with(&self.withdraw_amount, rounding)
            .and_then(|amount| balance.debit(amount).map(|_| amount))
        {
            Ok(amount) => amount,
            Err(e) => {
                blog_warn!("withdrawal rejected: input={:?} err={}", self.withdraw_amount, e);
                let (title, description) = match e {
                    Error::InsufficientFunds { .. } => (
                        TITLE_INSUFFICIENT,
                        "You don't have enough balance for this withdrawal",
                    ),
                    _ => (TITLE_INVALID, "Please enter a valid withdrawal amount"),
                };
                self.notifier.notify(title, description, Severity::Destructive);
                return Err(e);
            }
        };

        self.withdraw_amount.clear();
        blog!(
            "withdrawal applied: amount={} balance={}",
            amount,
            self.balance.available()
        );
        let description = format!(
            "{} has been withdrawn from your account",
            self.money(amount.value())
        );
        self.notifier.notify(TITLE_WITHDRAWN, &description, Severity::Warning);
        Ok(amount)
    }

    /// Run the handler for `op`.
    pub fn submit(&mut self, op: Operation) -> Result<Amount> {
        match op {
            Operation::Credit => self.deposit(),
            Operation::Debit => self.withdraw(),
        }
    }

    fn money(&self, value: Decimal) -> String {
        format_money(&self.settings.currency, value)
    }
}

impl<N: Notifier + Default> Default for BankingCard<N> {
    fn default() -> Self {
        Self::new(N::default())
    }
}

impl<N: Notifier> std::fmt::Debug for BankingCard<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BankingCard")
            .field("deposit_amount", &self.deposit_amount)
            .field("withdraw_amount", &self.withdraw_amount)
            .field("balance", &self.balance.available())
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}
