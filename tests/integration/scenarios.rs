//! Reference walkthroughs of the banking card.
//!
//! Each test starts from the balance the walkthrough names and checks the
//! balance, the affected input and the reported outcome.

use bankcard::notify::Severity;
use bankcard::Error;

use crate::fixtures::{dec, funded_card, new_card};

/// Given a zero balance
/// When "100" is deposited
/// Then the balance is 100.00 and the deposit input is cleared
#[test]
fn test_deposit_into_empty_card() {
    let mut card = new_card();
    card.set_deposit_amount("100");

    card.deposit().unwrap();

    assert_eq!(card.balance(), dec("100"));
    assert_eq!(card.balance_display(), "$100.00");
    assert_eq!(card.deposit_amount(), "");
}

/// Given a balance of 100
/// When "40" is withdrawn
/// Then the balance is 60.00 and the withdraw input is cleared
#[test]
fn test_withdraw_part_of_balance() {
    let mut card = funded_card("100");
    card.set_withdraw_amount("40");

    card.withdraw().unwrap();

    assert_eq!(card.balance(), dec("60"));
    assert_eq!(card.balance_display(), "$60.00");
    assert_eq!(card.withdraw_amount(), "");
}

/// Given a balance of 60
/// When "1000" is withdrawn
/// Then the balance stays 60.00 and insufficient funds is reported
#[test]
fn test_withdraw_more_than_balance() {
    let mut card = funded_card("60");
    card.set_withdraw_amount("1000");

    let err = card.withdraw().unwrap_err();

    assert!(matches!(err, Error::InsufficientFunds { .. }));
    assert_eq!(card.balance_display(), "$60.00");
    assert_eq!(card.withdraw_amount(), "1000");
    let toast = card.notifier().last().unwrap();
    assert_eq!(toast.title, "Insufficient Funds");
    assert_eq!(toast.severity, Severity::Destructive);
}

/// Given a balance of 60
/// When "-5" is deposited
/// Then the balance stays 60.00 and invalid amount is reported
#[test]
fn test_deposit_negative_amount() {
    let mut card = funded_card("60");
    card.set_deposit_amount("-5");

    let err = card.deposit().unwrap_err();

    assert!(matches!(err, Error::InvalidAmount(_)));
    assert_eq!(card.balance_display(), "$60.00");
    assert_eq!(card.notifier().last().unwrap().title, "Invalid Amount");
}

/// Given a balance of 60
/// When "abc" is deposited
/// Then the balance is unchanged and invalid amount is reported
#[test]
fn test_deposit_non_numeric_text() {
    let mut card = funded_card("60");
    card.set_deposit_amount("abc");

    let err = card.deposit().unwrap_err();

    assert!(matches!(err, Error::InvalidAmount(_)));
    assert_eq!(card.balance(), dec("60"));
    assert_eq!(card.deposit_amount(), "abc");
}

/// The walkthroughs chained on one card, as a user would perform them.
#[test]
fn test_full_session() {
    let mut card = new_card();

    card.set_deposit_amount("100");
    card.deposit().unwrap();
    card.set_withdraw_amount("40");
    card.withdraw().unwrap();
    card.set_withdraw_amount("1000");
    assert!(card.withdraw().is_err());
    card.set_deposit_amount("-5");
    assert!(card.deposit().is_err());
    card.set_deposit_amount("abc");
    assert!(card.deposit().is_err());

    assert_eq!(card.balance_display(), "$60.00");

    let titles: Vec<&str> = card
        .notifier()
        .toasts
        .iter()
        .map(|t| t.title.as_str())
        .collect();
    assert_eq!(
        titles,
        vec![
            "Deposit Successful",
            "Withdrawal Successful",
            "Insufficient Funds",
            "Invalid Amount",
            "Invalid Amount",
        ]
    );
}
