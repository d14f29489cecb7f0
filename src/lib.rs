pub mod config;
pub mod core;
pub mod error;
pub mod log;
pub mod notify;

// Decoupled game loop architecture
pub mod app;
pub mod render;
pub mod tea;
pub mod ui;

pub use crate::core::{Amount, Balance, BankingCard, Operation, RoundingPolicy};
pub use error::{Error, Result};
pub use notify::{Notifier, Severity, Toast};
