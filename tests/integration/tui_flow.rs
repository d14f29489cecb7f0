//! Keyboard-driven flows through the TEA update function.
//!
//! These mirror what a user does in the terminal: type into the focused
//! field, press Enter, switch fields with Tab.

use bankcard::config::Config;
use bankcard::core::RoundingPolicy;
use bankcard::notify::Severity;
use bankcard::tea::{Command, Field, Model};
use bankcard::ui;
use crossterm::event::KeyCode;
use ratatui::{backend::TestBackend, Terminal};

use crate::fixtures::{dec, new_model, press, type_text};

fn screen(model: &Model) -> String {
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    let state = model.snapshot();
    terminal.draw(|f| ui::draw(f, &state)).unwrap();
    let buffer = terminal.backend().buffer();
    let mut out = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

#[test]
fn test_deposit_then_withdraw_by_keyboard() {
    let mut model = new_model();

    type_text(&mut model, "100");
    assert!(press(&mut model, KeyCode::Enter).is_empty());
    assert_eq!(model.card.balance(), dec("100"));
    assert_eq!(model.toast().unwrap().title, "Deposit Successful");

    press(&mut model, KeyCode::Tab);
    assert_eq!(model.focus, Field::Withdraw);
    assert!(model.toast().is_none(), "Tab should dismiss the toast");

    type_text(&mut model, "40");
    press(&mut model, KeyCode::Enter);
    assert_eq!(model.card.balance(), dec("60"));
    assert_eq!(model.card.withdraw_amount(), "");
    let toast = model.toast().unwrap();
    assert_eq!(toast.title, "Withdrawal Successful");
    assert_eq!(toast.severity, Severity::Warning);
}

#[test]
fn test_overdraft_by_keyboard_keeps_input() {
    let mut model = new_model();
    type_text(&mut model, "60");
    press(&mut model, KeyCode::Enter);
    press(&mut model, KeyCode::Tab);
    type_text(&mut model, "1000");

    let cmds = press(&mut model, KeyCode::Enter);

    assert_eq!(cmds, vec![Command::Bell]);
    assert_eq!(model.card.balance(), dec("60"));
    assert_eq!(model.card.withdraw_amount(), "1000");
    assert_eq!(model.toast().unwrap().title, "Insufficient Funds");
}

#[test]
fn test_screen_shows_balance_and_toast() {
    let mut model = new_model();
    type_text(&mut model, "100");
    press(&mut model, KeyCode::Enter);

    let text = screen(&model);
    assert!(text.contains("Banking Portal"));
    assert!(text.contains("$100.00"));
    assert!(text.contains("Deposit Successful $100.00 has been added to your account"));
}

#[test]
fn test_screen_shows_pending_input() {
    let mut model = new_model();
    press(&mut model, KeyCode::Tab);
    type_text(&mut model, "12.5");

    let text = screen(&model);
    assert!(text.contains("12.5_"));
    assert!(text.contains("- Withdraw"));
}

#[test]
fn test_cents_rounding_through_tui() {
    let config = Config {
        rounding: RoundingPolicy::Cents,
        ..Config::default()
    };
    let mut model = Model::new(config);
    type_text(&mut model, "0.004");

    let cmds = press(&mut model, KeyCode::Enter);

    assert_eq!(cmds, vec![Command::Bell]);
    assert_eq!(model.toast().unwrap().title, "Invalid Amount");
    assert_eq!(model.card.balance(), dec("0"));
}
