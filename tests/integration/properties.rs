//! Balance invariants checked over a spread of amounts.

use bankcard::{Amount, Error};
use rust_decimal::Decimal;

use crate::fixtures::{dec, funded_card, new_card, INVALID_INPUTS};

const VALID_AMOUNTS: &[&str] = &[
    "0.01", "0.1", "1", "7.25", "19.99", "100", "250.5", "1000", "123456.789", "1e2",
];

#[test]
fn test_credit_increases_balance_by_exact_amount() {
    for start in ["0", "0.5", "60", "1000"] {
        for input in VALID_AMOUNTS {
            let mut card = if start == "0" {
                new_card()
            } else {
                funded_card(start)
            };
            let before = card.balance();
            card.set_deposit_amount(*input);

            let amount = card.deposit().unwrap();

            assert_eq!(
                card.balance() - before,
                amount.value(),
                "deposit {:?} from {}",
                input,
                start
            );
            assert_eq!(amount, Amount::parse(input).unwrap());
        }
    }
}

#[test]
fn test_debit_decreases_balance_by_exact_amount() {
    for input in VALID_AMOUNTS {
        let mut card = funded_card("200000");
        let before = card.balance();
        card.set_withdraw_amount(*input);

        let amount = card.withdraw().unwrap();

        assert_eq!(before - card.balance(), amount.value(), "withdraw {:?}", input);
    }
}

/// Given a balance that already uses most of the 28 significant digits
/// When an amount is applied whose result would have to be rounded
/// Then the attempt is rejected and the balance keeps its exact value
#[test]
fn test_amounts_that_cannot_be_applied_exactly_are_rejected() {
    let start = "1000000000000000000000000000";
    for input in ["0.01", "0.05", "1.23"] {
        let mut card = funded_card(start);

        card.set_deposit_amount(input);
        assert!(
            matches!(card.deposit(), Err(Error::InvalidAmount(_))),
            "deposit {:?} should be rejected",
            input
        );
        card.set_withdraw_amount(input);
        assert!(
            matches!(card.withdraw(), Err(Error::InvalidAmount(_))),
            "withdraw {:?} should be rejected",
            input
        );

        assert_eq!(card.balance(), dec(start));
        assert_eq!(card.deposit_amount(), input);
        assert_eq!(card.withdraw_amount(), input);
    }
}

#[test]
fn test_invalid_inputs_never_change_balance() {
    for input in INVALID_INPUTS {
        let mut card = funded_card("60");

        card.set_deposit_amount(*input);
        assert!(
            matches!(card.deposit(), Err(Error::InvalidAmount(_))),
            "deposit {:?} should be invalid",
            input
        );
        card.set_withdraw_amount(*input);
        assert!(
            matches!(card.withdraw(), Err(Error::InvalidAmount(_))),
            "withdraw {:?} should be invalid",
            input
        );

        assert_eq!(card.balance(), dec("60"));
        assert_eq!(card.deposit_amount(), *input);
        assert_eq!(card.withdraw_amount(), *input);
    }
}

#[test]
fn test_overdraft_never_changes_balance() {
    for (balance, request) in [("0.01", "0.02"), ("60", "60.0001"), ("60", "1000"), ("1", "1e3")] {
        let mut card = funded_card(balance);
        card.set_withdraw_amount(request);

        assert!(
            matches!(card.withdraw(), Err(Error::InsufficientFunds { .. })),
            "withdraw {} from {}",
            request,
            balance
        );
        assert_eq!(card.balance(), dec(balance));
    }
}

#[test]
fn test_repeated_rejections_are_idempotent() {
    let mut card = funded_card("60");
    card.set_deposit_amount("abc");
    card.set_withdraw_amount("61");

    for _ in 0..50 {
        let _ = card.deposit();
        let _ = card.withdraw();
    }

    assert_eq!(card.balance(), dec("60"));
    assert_eq!(card.notifier().toasts.len(), 100);
}

#[test]
fn test_balance_never_negative() {
    let mut card = new_card();
    let script = [
        ("d", "10"),
        ("w", "3.5"),
        ("w", "7"),
        ("w", "6.5"),
        ("w", "0.01"),
        ("d", "0.5"),
        ("w", "0.5"),
    ];

    for (op, input) in script {
        if op == "d" {
            card.set_deposit_amount(input);
            let _ = card.deposit();
        } else {
            card.set_withdraw_amount(input);
            let _ = card.withdraw();
        }
        assert!(card.balance() >= Decimal::ZERO);
    }
    assert_eq!(card.balance(), Decimal::ZERO);
}
