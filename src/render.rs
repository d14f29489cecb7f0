use crate::notify::Toast;
use crate::tea::Field;
use std::sync::atomic::{AtomicU64, Ordering};

static VERSION_COUNTER: AtomicU64 = AtomicU64::new(0);

pub fn next_version() -> u64 {
    VERSION_COUNTER.fetch_add(1, Ordering::Relaxed)
}

/// Everything the UI needs to draw one frame, already formatted.
#[derive(Debug, Clone)]
pub struct RenderState {
    pub version: u64,
    /// Formatted balance, e.g. "$60.00"
    pub balance: String,
    pub deposit_input: String,
    pub withdraw_input: String,
    pub deposit_enabled: bool,
    pub withdraw_enabled: bool,
    pub focus: Field,
    pub toast: Option<Toast>,
    /// Whether the keymap legend is expanded (toggled by '?')
    pub show_keymap: bool,
    /// Monotonic count of rejected operations
    pub bells: u64,
}

impl RenderState {
    pub fn input(&self, field: Field) -> &str {
        match field {
            Field::Deposit => &self.deposit_input,
            Field::Withdraw => &self.withdraw_input,
        }
    }

    pub fn enabled(&self, field: Field) -> bool {
        match field {
            Field::Deposit => self.deposit_enabled,
            Field::Withdraw => self.withdraw_enabled,
        }
    }
}

impl Default for RenderState {
    fn default() -> Self {
        Self {
            version: 0,
            balance: "$0.00".to_string(),
            deposit_input: String::new(),
            withdraw_input: String::new(),
            deposit_enabled: false,
            withdraw_enabled: false,
            focus: Field::Deposit,
            toast: None,
            show_keymap: false,
            bells: 0,
        }
    }
}
