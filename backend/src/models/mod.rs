//! Domain models for the fee tracker

pub mod fee;
pub mod group;
pub mod payment;
pub mod student;
pub mod teacher;

// Re-exports
pub use fee::{Fee, FeeStatus};
pub use group::Group;
pub use payment::{Payment, PaymentMethod};
pub use student::{GroupMembership, Student};
pub use teacher::Teacher;
