//! Fee model
//!
//! The core aggregate: an amount a student owes, with a deadline and an
//! append-only ledger of payments. A fee stores no status field; status
//! is derived from the ledger and the deadline at an explicit evaluation
//! instant, recomputed fresh on every call.
//!
//! # Critical Invariants
//!
//! 1. `amount_due` and `deadline` are fixed at construction
//! 2. Payments are only appended, never removed, mutated, or reordered
//! 3. A payment is visible at instant `at` iff its timestamp is `<= at`
//! 4. A fully or over paid fee is never [`FeeStatus::Late`], whatever
//!    the deadline
//! 5. Amount comparisons are exact f64 equality (no epsilon)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

use crate::models::payment::Payment;
use crate::models::student::Student;

/// Settlement status of a fee at a given evaluation instant.
///
/// Serialized in SCREAMING_SNAKE_CASE (`"IN_PROGRESS"`, `"PAID"`,
/// `"LATE"`, `"NULL"`, `"OVERPAID"`), the vocabulary callers see.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FeeStatus {
    /// Partially paid, deadline not yet passed
    InProgress,

    /// Visible payments sum to exactly the amount due
    Paid,

    /// Partially paid and strictly past the deadline
    Late,

    /// No payment visible at the evaluation instant
    Null,

    /// Visible payments exceed the amount due
    Overpaid,
}

/// An amount a student owes, with a deadline and a ledger of payments.
///
/// The fee exclusively owns its payments (a payment belongs to exactly
/// one fee) and references its student by id; many fees may reference
/// the same student. Identity is the caller-assigned id.
///
/// # Example
/// ```
/// use chrono::{Duration, TimeZone, Utc};
/// use fee_tracker_core_rs::{Fee, FeeStatus, Payment, Student};
///
/// let enrolled = Utc.with_ymd_and_hms(2023, 9, 1, 8, 0, 0).unwrap();
/// let student = Student::new(1, "Dupont".to_string(), "Jean".to_string(), enrolled);
/// let deadline = Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap();
///
/// let mut fee = Fee::new(1, "Tuition S1".to_string(), 1000.0, deadline, &student);
/// assert_eq!(fee.status_at(deadline), FeeStatus::Null);
///
/// fee.add_payment(Payment::cash(1, 400.0, deadline - Duration::days(30)));
/// assert_eq!(fee.status_at(deadline), FeeStatus::InProgress);
/// assert_eq!(fee.status_at(deadline + Duration::days(1)), FeeStatus::Late);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fee {
    /// Caller-assigned identifier, unique within the system
    id: u32,

    /// Descriptive label (e.g. "Tuition S1")
    label: String,

    /// Amount owed (f64, fixed at construction)
    amount_due: f64,

    /// Instant by which the fee should be settled
    deadline: DateTime<Utc>,

    /// Id of the owning student
    student_id: u32,

    /// Payment ledger in insertion order (append-only)
    payments: Vec<Payment>,
}

impl Fee {
    /// Create a new fee with an empty payment ledger
    ///
    /// The student is recorded by id only; the fee holds no reference to
    /// the `Student` value itself.
    ///
    /// # Arguments
    /// * `id` - Caller-assigned fee id
    /// * `label` - Descriptive label
    /// * `amount_due` - Amount owed
    /// * `deadline` - Instant by which the fee should be settled
    /// * `student` - The student who owes this fee
    pub fn new(
        id: u32,
        label: String,
        amount_due: f64,
        deadline: DateTime<Utc>,
        student: &Student,
    ) -> Self {
        Self {
            id,
            label,
            amount_due,
            deadline,
            student_id: student.id(),
            payments: Vec::new(),
        }
    }

    /// Get fee ID
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Get the descriptive label
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Get the amount owed
    pub fn amount_due(&self) -> f64 {
        self.amount_due
    }

    /// Get the deadline
    pub fn deadline(&self) -> DateTime<Utc> {
        self.deadline
    }

    /// Get the id of the owning student
    pub fn student_id(&self) -> u32 {
        self.student_id
    }

    /// Get the payment ledger, oldest entry first
    pub fn payments(&self) -> &[Payment] {
        &self.payments
    }

    /// Attach a payment to this fee
    ///
    /// Appends to the ledger. Nothing is deduplicated, capped, or
    /// reordered; the ledger keeps insertion order even when payment
    /// timestamps are out of order.
    pub fn add_payment(&mut self, payment: Payment) {
        self.payments.push(payment);
    }

    /// Total paid over the whole ledger, regardless of time
    pub fn total_paid(&self) -> f64 {
        self.payments.iter().map(|payment| payment.amount()).sum()
    }

    /// Total paid as of the evaluation instant `at`
    ///
    /// Sums the payments whose timestamp is not after `at`; a payment
    /// with a later timestamp is excluded entirely, not discounted.
    ///
    /// # Example
    /// ```
    /// use chrono::{Duration, TimeZone, Utc};
    /// use fee_tracker_core_rs::{Fee, Payment, Student};
    ///
    /// let enrolled = Utc.with_ymd_and_hms(2023, 9, 1, 8, 0, 0).unwrap();
    /// let student = Student::new(1, "Dupont".to_string(), "Jean".to_string(), enrolled);
    /// let deadline = Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap();
    ///
    /// let mut fee = Fee::new(1, "Tuition S1".to_string(), 1000.0, deadline, &student);
    /// let at = deadline - Duration::days(10);
    /// fee.add_payment(Payment::cash(1, 400.0, at));
    /// fee.add_payment(Payment::cash(2, 100.0, at + Duration::days(5)));
    ///
    /// assert_eq!(fee.total_paid_at(at), 400.0); // second payment not yet visible
    /// assert_eq!(fee.total_paid(), 500.0);
    /// ```
    pub fn total_paid_at(&self, at: DateTime<Utc>) -> f64 {
        self.payments
            .iter()
            .filter(|payment| payment.paid_at() <= at)
            .map(|payment| payment.amount())
            .sum()
    }

    /// Derive the fee's status at the evaluation instant `at`
    ///
    /// Folds the visible part of the ledger on every call; nothing is
    /// cached or transitioned incrementally. Checks run in a fixed
    /// order:
    ///
    /// 1. nothing visible paid → [`FeeStatus::Null`]
    /// 2. paid more than due → [`FeeStatus::Overpaid`]
    /// 3. paid exactly the amount due → [`FeeStatus::Paid`]
    /// 4. otherwise partially paid: strictly past the deadline →
    ///    [`FeeStatus::Late`], else [`FeeStatus::InProgress`]
    ///
    /// Over- and exact payment are checked before the deadline, so a fee
    /// settled in full is never `Late`, even when it was settled after
    /// the deadline passed.
    ///
    /// # Boundary Semantics
    /// - `at < deadline`: a partial payment is `InProgress`
    /// - `at == deadline`: still `InProgress` (only strictly-after is late)
    /// - `at > deadline`: a partial payment is `Late`
    ///
    /// # Known fragility
    /// The `Null` and `Paid` branches compare f64 sums with `==`, by
    /// contract. An amount that picks up floating-point rounding on the
    /// way in (e.g. `0.1 + 0.2` against a due amount of `0.3`) will
    /// classify as `Overpaid`, `InProgress`, or `Late` rather than
    /// `Paid`. No epsilon tolerance is applied.
    pub fn status_at(&self, at: DateTime<Utc>) -> FeeStatus {
        let paid = self.total_paid_at(at);

        if paid == 0.0 {
            return FeeStatus::Null;
        }
        if paid > self.amount_due {
            return FeeStatus::Overpaid;
        }
        if paid == self.amount_due {
            return FeeStatus::Paid;
        }

        if at > self.deadline {
            FeeStatus::Late
        } else {
            FeeStatus::InProgress
        }
    }
}

impl PartialEq for Fee {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Fee {}

impl Hash for Fee {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn student() -> Student {
        let enrolled = Utc.with_ymd_and_hms(2023, 9, 1, 8, 0, 0).unwrap();
        Student::new(1, "Dupont".to_string(), "Jean".to_string(), enrolled)
    }

    fn deadline() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_no_payment_is_null_even_past_deadline() {
        let fee = Fee::new(1, "Tuition S1".to_string(), 400.0, deadline(), &student());

        // Unpaid is Null, not Late, on both sides of the deadline
        assert_eq!(fee.status_at(deadline() - Duration::days(1)), FeeStatus::Null);
        assert_eq!(fee.status_at(deadline() + Duration::days(30)), FeeStatus::Null);
    }

    #[test]
    fn test_exact_payment_is_paid_regardless_of_deadline() {
        let mut fee = Fee::new(1, "Tuition S1".to_string(), 300.0, deadline(), &student());
        fee.add_payment(Payment::cash(1, 300.0, deadline() + Duration::days(5)));

        // Paid late, but in full: Paid wins over Late
        assert_eq!(fee.status_at(deadline() + Duration::days(6)), FeeStatus::Paid);
    }

    #[test]
    fn test_overpaid_wins_over_late() {
        let mut fee = Fee::new(1, "Tuition S1".to_string(), 100.0, deadline(), &student());
        fee.add_payment(Payment::cash(1, 150.0, deadline() + Duration::days(5)));

        assert_eq!(fee.status_at(deadline() + Duration::days(6)), FeeStatus::Overpaid);
    }

    #[test]
    fn test_partial_payment_straddles_deadline() {
        let mut fee = Fee::new(1, "Tuition S1".to_string(), 1000.0, deadline(), &student());
        fee.add_payment(Payment::cash(1, 400.0, deadline() - Duration::days(30)));

        assert_eq!(fee.status_at(deadline() - Duration::days(1)), FeeStatus::InProgress);
        assert_eq!(fee.status_at(deadline()), FeeStatus::InProgress); // at deadline is not late
        assert_eq!(fee.status_at(deadline() + Duration::seconds(1)), FeeStatus::Late);
    }

    #[test]
    fn test_future_payment_is_invisible() {
        let mut fee = Fee::new(1, "Tuition S1".to_string(), 500.0, deadline(), &student());
        fee.add_payment(Payment::cash(1, 500.0, deadline() - Duration::days(1)));

        let before_payment = deadline() - Duration::days(2);
        assert_eq!(fee.total_paid_at(before_payment), 0.0);
        assert_eq!(fee.status_at(before_payment), FeeStatus::Null);
    }

    #[test]
    fn test_payment_at_evaluation_instant_counts() {
        let mut fee = Fee::new(1, "Tuition S1".to_string(), 500.0, deadline(), &student());
        let at = deadline() - Duration::days(1);
        fee.add_payment(Payment::cash(1, 200.0, at));

        assert_eq!(fee.total_paid_at(at), 200.0);
    }

    #[test]
    fn test_ledger_keeps_insertion_order() {
        let mut fee = Fee::new(1, "Tuition S1".to_string(), 500.0, deadline(), &student());
        fee.add_payment(Payment::cash(2, 100.0, deadline() - Duration::days(1)));
        fee.add_payment(Payment::cash(1, 100.0, deadline() - Duration::days(10)));

        // Appended order, not timestamp order
        assert_eq!(fee.payments()[0].id(), 2);
        assert_eq!(fee.payments()[1].id(), 1);
    }

    #[test]
    fn test_identity_by_id_only() {
        let a = Fee::new(1, "Tuition S1".to_string(), 500.0, deadline(), &student());
        let b = Fee::new(1, "Library".to_string(), 50.0, deadline(), &student());

        assert_eq!(a, b);
    }
}
