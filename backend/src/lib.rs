//! University Fee Tracker - Core Ledger
//!
//! Tracks fee obligations per student and derives, for any evaluation
//! instant, whether each fee is untouched, in progress, late, paid, or
//! over paid, given the payments applied to it.
//!
//! # Architecture
//!
//! - **models**: Domain types (Payment, Group, Teacher, Student, Fee)
//! - **stats**: Aggregate reports over fee collections
//!
//! # Critical Invariants
//!
//! 1. Status is never stored: every query folds the payment ledger at an
//!    explicit evaluation instant
//! 2. A payment is visible at instant `at` iff its timestamp is `<= at`
//! 3. A fully or over paid fee is never late, whatever its deadline
//! 4. Amount comparisons are exact f64 equality (no epsilon)

// Module declarations
pub mod models;
pub mod stats;

// Re-exports for convenience
pub use models::{
    fee::{Fee, FeeStatus},
    group::Group,
    payment::{Payment, PaymentMethod},
    student::{GroupMembership, Student},
    teacher::Teacher,
};
pub use stats::{late_fees, total_missing_fees, total_paid_by_student};
