//! Demo caller for the fee tracker core.
//!
//! Builds a small university scenario (two students, two groups, a
//! handful of fees and payments) and prints the ledger report for an
//! evaluation instant: `Utc::now()`, or an RFC 3339 instant passed as
//! the first argument, e.g.
//!
//! ```text
//! fee-tracker-cli 2024-02-01T12:00:00Z
//! ```

use chrono::{DateTime, Duration, Utc};
use fee_tracker_core_rs::{stats, Fee, Group, Payment, Student};
use std::env;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let at = match env::args().nth(1) {
        Some(raw) => DateTime::parse_from_rfc3339(&raw)?.with_timezone(&Utc),
        None => Utc::now(),
    };

    let yesterday = at - Duration::days(1);
    let tomorrow = at + Duration::days(1);

    // Students and their group history
    let mut jean = Student::new(
        1,
        "Dupont".to_string(),
        "Jean".to_string(),
        at - Duration::days(365),
    );
    let mut marie = Student::new(
        2,
        "Martin".to_string(),
        "Marie".to_string(),
        at - Duration::days(182),
    );
    jean.add_group_history(Group::new(1, "L3 INFO".to_string()), jean.enrolled_at());
    marie.add_group_history(Group::new(2, "M1 INFO".to_string()), marie.enrolled_at());

    // Fees with assorted outcomes
    let mut tuition_s1 = Fee::new(1, "Tuition S1".to_string(), 1000.0, yesterday, &jean);
    tuition_s1.add_payment(Payment::cash(1, 500.0, at - Duration::hours(12)));

    let mut tuition_s2 = Fee::new(2, "Tuition S2".to_string(), 1200.0, tomorrow, &jean);
    tuition_s2.add_payment(Payment::credit_card(
        2,
        300.0,
        at - Duration::hours(6),
        "1234-5678-9012-3456".to_string(),
    ));

    let mut library = Fee::new(3, "Library fee".to_string(), 50.0, yesterday, &marie);
    library.add_payment(Payment::bank_transfer(
        3,
        60.0,
        at - Duration::hours(12),
        "FR76 1234 5678 9012 3456 7890 123".to_string(),
    ));

    let untouched = Fee::new(4, "Sports fee".to_string(), 400.0, tomorrow, &jean);

    let mut exam = Fee::new(5, "Exam fee".to_string(), 100.0, tomorrow, &jean);
    exam.add_payment(Payment::cash(4, 100.0, at - Duration::hours(12)));

    let fees = vec![tuition_s1, tuition_s2, library, untouched, exam];
    let students = [&jean, &marie];

    println!("=== university fee report ===");
    println!("evaluated at {}\n", at.to_rfc3339());

    println!("fees:");
    for fee in &fees {
        let owner = students
            .iter()
            .find(|student| student.id() == fee.student_id())
            .map(|student| format!("{} {}", student.first_name(), student.last_name()))
            .unwrap_or_else(|| format!("student #{}", fee.student_id()));
        println!(
            "  [{}] {:<12} {:>8.2} / {:>8.2}  due {}  {:?}",
            fee.id(),
            fee.label(),
            fee.total_paid_at(at),
            fee.amount_due(),
            fee.deadline().to_rfc3339(),
            fee.status_at(at),
        );
        println!("        owed by {}", owner);
    }

    let late = stats::late_fees(&fees, at);
    println!("\nlate fees: {}", late.len());
    for fee in &late {
        println!(
            "  [{}] {}: {:.2} outstanding",
            fee.id(),
            fee.label(),
            fee.amount_due() - fee.total_paid_at(at)
        );
    }
    println!("total missing: {:.2}", stats::total_missing_fees(&fees, at));

    println!("\npaid per student:");
    for student in students {
        println!(
            "  {} {}: {:.2}",
            student.first_name(),
            student.last_name(),
            stats::total_paid_by_student(student, &fees, at)
        );
    }

    Ok(())
}
