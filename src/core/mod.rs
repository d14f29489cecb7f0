//! Core banking logic: amount validation and the balance state machine.
//!
//! Nothing in here knows about the terminal. The [`card`] view-model ties
//! the two together with a [`Notifier`](crate::notify::Notifier).

pub mod amount;
pub mod balance;
pub mod card;

pub use amount::{format_money, Amount, RoundingPolicy};
pub use balance::{Balance, Operation};
pub use card::{BankingCard, CardSettings};
