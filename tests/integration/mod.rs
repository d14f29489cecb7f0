//! Integration test suite for bankcard.
//!
//! These tests drive the public API the way the TUI does: through the
//! banking card view-model and through the TEA update function.
//!
//! # Test Categories
//!
//! - `scenarios`: the reference deposit / withdraw walkthroughs
//! - `properties`: balance invariants checked over many amounts
//! - `tui_flow`: keyboard-driven flows through `update` and the renderer
//! - `config_file`: config loading feeding into the card settings

mod fixtures;

mod properties;
mod scenarios;
mod tui_flow;
