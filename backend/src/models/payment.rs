//! Payment model
//!
//! An immutable record of money applied to a fee at a point in time.
//! Each payment has:
//! - Caller-assigned id
//! - Amount (f64)
//! - Timestamp of the payment
//! - Method tag (cash, credit card, bank transfer) carrying the one
//!   extra identifying field relevant to that method
//!
//! The ledger performs no validation: a negative amount or an arbitrary
//! timestamp is accepted uncritically and flows into totals as-is. This
//! is a known gap in the contract.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How a payment was made.
///
/// Card and bank-transfer payments carry the identifying field for that
/// method; cash carries nothing extra.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    /// Cash over the counter
    Cash,

    /// Card payment
    CreditCard {
        /// Card number as given, not normalized
        card_number: String,
    },

    /// Transfer from a bank account
    BankTransfer {
        /// Account identifier as given (e.g. an IBAN)
        bank_account: String,
    },
}

/// A single monetary contribution toward a fee.
///
/// Payments are created by the caller, attached to exactly one [`Fee`],
/// and never mutated or removed afterwards. All fields are fixed at
/// construction.
///
/// [`Fee`]: crate::models::fee::Fee
///
/// # Example
/// ```
/// use chrono::{TimeZone, Utc};
/// use fee_tracker_core_rs::{Payment, PaymentMethod};
///
/// let paid_at = Utc.with_ymd_and_hms(2024, 1, 10, 14, 30, 0).unwrap();
/// let payment = Payment::credit_card(2, 300.0, paid_at, "1234-5678-9012-3456".to_string());
///
/// assert_eq!(payment.id(), 2);
/// assert_eq!(payment.amount(), 300.0);
/// assert_eq!(payment.card_number(), Some("1234-5678-9012-3456"));
/// assert!(matches!(payment.method(), PaymentMethod::CreditCard { .. }));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    /// Caller-assigned identifier, unique within the system
    id: u32,

    /// Amount paid (f64, accepted as given)
    amount: f64,

    /// Instant the payment was made or recorded
    paid_at: DateTime<Utc>,

    /// Payment method with its variant-specific field
    method: PaymentMethod,
}

impl Payment {
    /// Create a cash payment
    ///
    /// # Arguments
    /// * `id` - Caller-assigned payment id
    /// * `amount` - Amount paid
    /// * `paid_at` - Instant the payment was made
    pub fn cash(id: u32, amount: f64, paid_at: DateTime<Utc>) -> Self {
        Self {
            id,
            amount,
            paid_at,
            method: PaymentMethod::Cash,
        }
    }

    /// Create a credit card payment
    ///
    /// # Arguments
    /// * `id` - Caller-assigned payment id
    /// * `amount` - Amount paid
    /// * `paid_at` - Instant the payment was made
    /// * `card_number` - Card number, stored as given
    pub fn credit_card(id: u32, amount: f64, paid_at: DateTime<Utc>, card_number: String) -> Self {
        Self {
            id,
            amount,
            paid_at,
            method: PaymentMethod::CreditCard { card_number },
        }
    }

    /// Create a bank transfer payment
    ///
    /// # Arguments
    /// * `id` - Caller-assigned payment id
    /// * `amount` - Amount paid
    /// * `paid_at` - Instant the payment was made
    /// * `bank_account` - Source account identifier, stored as given
    pub fn bank_transfer(
        id: u32,
        amount: f64,
        paid_at: DateTime<Utc>,
        bank_account: String,
    ) -> Self {
        Self {
            id,
            amount,
            paid_at,
            method: PaymentMethod::BankTransfer { bank_account },
        }
    }

    /// Get payment ID
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Get amount paid
    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// Get the instant the payment was made
    pub fn paid_at(&self) -> DateTime<Utc> {
        self.paid_at
    }

    /// Get the payment method
    pub fn method(&self) -> &PaymentMethod {
        &self.method
    }

    /// Card number, if this is a card payment
    pub fn card_number(&self) -> Option<&str> {
        match &self.method {
            PaymentMethod::CreditCard { card_number } => Some(card_number),
            _ => None,
        }
    }

    /// Source account identifier, if this is a bank transfer
    pub fn bank_account(&self) -> Option<&str> {
        match &self.method {
            PaymentMethod::BankTransfer { bank_account } => Some(bank_account),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 10, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_cash_has_no_variant_field() {
        let payment = Payment::cash(1, 500.0, instant());

        assert_eq!(payment.method(), &PaymentMethod::Cash);
        assert_eq!(payment.card_number(), None);
        assert_eq!(payment.bank_account(), None);
    }

    #[test]
    fn test_variant_fields_are_exposed() {
        let card = Payment::credit_card(2, 300.0, instant(), "1234".to_string());
        let transfer = Payment::bank_transfer(3, 60.0, instant(), "FR76 1234".to_string());

        assert_eq!(card.card_number(), Some("1234"));
        assert_eq!(card.bank_account(), None);
        assert_eq!(transfer.bank_account(), Some("FR76 1234"));
        assert_eq!(transfer.card_number(), None);
    }

    #[test]
    fn test_negative_amount_is_accepted() {
        // No validation by contract: the value is stored as given.
        let payment = Payment::cash(4, -25.0, instant());

        assert_eq!(payment.amount(), -25.0);
    }
}
