//! Tests for the Payment model
//!
//! Payments are immutable records: every field is fixed at construction
//! and exposed read-only. The contract performs no validation.

use chrono::{DateTime, Duration, TimeZone, Utc};
use fee_tracker_core_rs::{Payment, PaymentMethod};

fn paid_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 10, 14, 30, 0).unwrap()
}

#[test]
fn test_cash_payment() {
    let payment = Payment::cash(1, 500.0, paid_at());

    assert_eq!(payment.id(), 1);
    assert_eq!(payment.amount(), 500.0);
    assert_eq!(payment.paid_at(), paid_at());
    assert_eq!(payment.method(), &PaymentMethod::Cash);
    assert_eq!(payment.card_number(), None);
    assert_eq!(payment.bank_account(), None);
}

#[test]
fn test_credit_card_payment() {
    let payment = Payment::credit_card(2, 300.0, paid_at(), "1234-5678-9012-3456".to_string());

    assert_eq!(payment.id(), 2);
    assert_eq!(payment.amount(), 300.0);
    assert_eq!(payment.card_number(), Some("1234-5678-9012-3456"));
    assert_eq!(payment.bank_account(), None);
    assert_eq!(
        payment.method(),
        &PaymentMethod::CreditCard {
            card_number: "1234-5678-9012-3456".to_string()
        }
    );
}

#[test]
fn test_bank_transfer_payment() {
    let payment = Payment::bank_transfer(
        3,
        60.0,
        paid_at(),
        "FR76 1234 5678 9012 3456 7890 123".to_string(),
    );

    assert_eq!(payment.id(), 3);
    assert_eq!(payment.amount(), 60.0);
    assert_eq!(
        payment.bank_account(),
        Some("FR76 1234 5678 9012 3456 7890 123")
    );
    assert_eq!(payment.card_number(), None);
}

#[test]
fn test_no_validation_of_amount() {
    // Negative and zero amounts are stored as given; nothing rejects them.
    let negative = Payment::cash(4, -100.0, paid_at());
    let zero = Payment::cash(5, 0.0, paid_at());

    assert_eq!(negative.amount(), -100.0);
    assert_eq!(zero.amount(), 0.0);
}

#[test]
fn test_no_validation_of_timestamp() {
    // A timestamp far in the future is accepted; visibility is decided
    // per query, not at construction.
    let future = paid_at() + Duration::days(10_000);
    let payment = Payment::cash(6, 10.0, future);

    assert_eq!(payment.paid_at(), future);
}
