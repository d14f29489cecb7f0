//! Test fixtures for integration tests.
//!
//! Provides helpers for:
//! - Cards wired to a recording notifier, optionally pre-funded
//! - Decimal literals
//! - Typing into the TUI model key by key

use std::str::FromStr;

use bankcard::config::Config;
use bankcard::notify::RecordingNotifier;
use bankcard::tea::{update, Command, Message, Model};
use bankcard::BankingCard;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rust_decimal::Decimal;

pub type TestCard = BankingCard<RecordingNotifier>;

/// Parse a decimal literal.
pub fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).expect("valid decimal literal")
}

/// A fresh card with a zero balance.
pub fn new_card() -> TestCard {
    BankingCard::new(RecordingNotifier::default())
}

/// A card whose balance was built with a single deposit.
/// The notifier is cleared so tests only see their own toasts.
pub fn funded_card(amount: &str) -> TestCard {
    let mut card = new_card();
    card.set_deposit_amount(amount);
    card.deposit().expect("funding deposit succeeds");
    card.notifier_mut().toasts.clear();
    card
}

/// Amounts that must always be rejected by the validator.
pub const INVALID_INPUTS: &[&str] = &[
    "", " ", "abc", "-5", "0", "0.0", "-0.01", "1.2.3", "five", "$10", "10$", "--1", "+-1",
    "1_000",
];

/// A TUI model with default config.
pub fn new_model() -> Model {
    Model::new(Config::default())
}

pub fn press(model: &mut Model, code: KeyCode) -> Vec<Command> {
    update(model, Message::Key(KeyEvent::new(code, KeyModifiers::empty())))
}

pub fn type_text(model: &mut Model, text: &str) {
    for c in text.chars() {
        press(model, KeyCode::Char(c));
    }
}
