//! Statistics Module
//!
//! Aggregate reports over fee collections, all parameterized by an
//! explicit evaluation instant so a report can be produced for any point
//! in time, past or future.
//!
//! # Critical Invariants
//!
//! 1. **Pure reads**: nothing here mutates a fee or a payment
//! 2. **Late only**: missing-fee totals count fees that are
//!    [`FeeStatus::Late`] at the instant, and nothing else. A fee past
//!    its deadline with no payment at all is `Null`, not `Late`, and
//!    contributes zero
//! 3. **Order preservation**: filtered reports keep the input order
//!
//! # Example
//!
//! ```rust
//! use chrono::{Duration, TimeZone, Utc};
//! use fee_tracker_core_rs::{stats, Fee, Payment, Student};
//!
//! let enrolled = Utc.with_ymd_and_hms(2023, 9, 1, 8, 0, 0).unwrap();
//! let student = Student::new(1, "Dupont".to_string(), "Jean".to_string(), enrolled);
//! let now = Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap();
//!
//! // 500 due yesterday, 200 paid: late, 300 missing
//! let mut fee = Fee::new(1, "Tuition S1".to_string(), 500.0, now - Duration::days(1), &student);
//! fee.add_payment(Payment::cash(1, 200.0, now - Duration::days(2)));
//!
//! let fees = vec![fee];
//! assert_eq!(stats::late_fees(&fees, now).len(), 1);
//! assert_eq!(stats::total_missing_fees(&fees, now), 300.0);
//! assert_eq!(stats::total_paid_by_student(&student, &fees, now), 200.0);
//! ```

use chrono::{DateTime, Utc};

use crate::models::fee::{Fee, FeeStatus};
use crate::models::student::Student;

/// Fees that are late at the evaluation instant
///
/// Returns the subsequence of `fees` whose status at `at` is
/// [`FeeStatus::Late`], preserving the original relative order.
pub fn late_fees(fees: &[Fee], at: DateTime<Utc>) -> Vec<&Fee> {
    fees.iter()
        .filter(|fee| fee.status_at(at) == FeeStatus::Late)
        .collect()
}

/// Total amount still owed across the fees late at the evaluation instant
///
/// Sums `amount_due - total_paid_at(at)` over the fees that are
/// [`FeeStatus::Late`] at `at`. Fees in any other status contribute zero
/// even when unpaid: an untouched fee past its deadline is `Null`, a
/// partial payment before the deadline is `InProgress`, and neither is
/// counted here.
pub fn total_missing_fees(fees: &[Fee], at: DateTime<Utc>) -> f64 {
    fees.iter()
        .filter(|fee| fee.status_at(at) == FeeStatus::Late)
        .map(|fee| fee.amount_due() - fee.total_paid_at(at))
        .sum()
}

/// Total visible payments across every fee owed by the student
///
/// Sums `total_paid_at(at)` over the fees whose owning student id equals
/// `student`'s id, regardless of each fee's status.
pub fn total_paid_by_student(student: &Student, fees: &[Fee], at: DateTime<Utc>) -> f64 {
    fees.iter()
        .filter(|fee| fee.student_id() == student.id())
        .map(|fee| fee.total_paid_at(at))
        .sum()
}
