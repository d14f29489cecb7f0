//! Model for the TEA (The Elm Architecture) pattern.
//!
//! The Model is pure application state - no channels, no terminal handles.

use crate::config::Config;
use crate::core::{BankingCard, Operation};
use crate::notify::{LatestToast, Toast};
use crate::render::{next_version, RenderState};

/// Input field that currently has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Field {
    #[default]
    Deposit,
    Withdraw,
}

impl Field {
    pub fn label(&self) -> &'static str {
        match self {
            Field::Deposit => "Enter the Amount",
            Field::Withdraw => "Withdraw Amount",
        }
    }

    pub fn button(&self) -> &'static str {
        match self {
            Field::Deposit => "Deposit",
            Field::Withdraw => "Withdraw",
        }
    }

    pub fn operation(&self) -> Operation {
        match self {
            Field::Deposit => Operation::Credit,
            Field::Withdraw => Operation::Debit,
        }
    }

    /// Cycle focus (Tab behavior). With two fields next and previous coincide.
    pub fn next(&self) -> Field {
        match self {
            Field::Deposit => Field::Withdraw,
            Field::Withdraw => Field::Deposit,
        }
    }
}

/// Pure application state - the single source of truth.
pub struct Model {
    pub card: BankingCard<LatestToast>,
    pub focus: Field,

    // UI toggle state
    /// Whether the keymap legend is expanded (toggled by '?')
    pub show_keymap: bool,

    /// Rejected operations so far; the render thread rings the bell on change
    pub bells: u64,

    // Dirty flag - set when state changes and render is needed
    pub dirty: bool,

    // Config (immutable after init)
    pub config: Config,
}

impl Model {
    /// Create a fresh model. The balance always starts at zero.
    pub fn new(config: Config) -> Self {
        Self {
            card: BankingCard::with_settings(LatestToast::default(), config.card_settings()),
            focus: Field::default(),
            show_keymap: false,
            bells: 0,
            dirty: true,
            config,
        }
    }

    pub fn toast(&self) -> Option<&Toast> {
        self.card.notifier().current()
    }

    /// Create an immutable snapshot for the render thread.
    ///
    /// Each snapshot gets a monotonically increasing version number so the
    /// render thread can skip redundant draws.
    pub fn snapshot(&self) -> RenderState {
        RenderState {
            version: next_version(),
            balance: self.card.balance_display(),
            deposit_input: self.card.deposit_amount().to_string(),
            withdraw_input: self.card.withdraw_amount().to_string(),
            deposit_enabled: self.card.can_deposit(),
            withdraw_enabled: self.card.can_withdraw(),
            focus: self.focus,
            toast: self.toast().cloned(),
            show_keymap: self.show_keymap,
            bells: self.bells,
        }
    }
}
