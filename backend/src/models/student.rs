//! Student model
//!
//! A student on record, owning the ordered history of the groups they
//! joined. The history is append-only: entries are never removed or
//! reordered, so it reads as a chronicle of memberships in the order
//! they were recorded.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

use crate::models::group::Group;

/// One entry of a student's group history: which group, joined when.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupMembership {
    /// The group joined
    group: Group,

    /// Instant the student joined it
    joined_at: DateTime<Utc>,
}

impl GroupMembership {
    /// Get the group joined
    pub fn group(&self) -> &Group {
        &self.group
    }

    /// Get the instant the student joined
    pub fn joined_at(&self) -> DateTime<Utc> {
        self.joined_at
    }
}

/// A student with an enrollment date and a group membership history.
///
/// Identity is the caller-assigned id; name changes do not make a
/// different student. Many fees may reference the same student.
///
/// # Example
/// ```
/// use chrono::{TimeZone, Utc};
/// use fee_tracker_core_rs::{Group, Student};
///
/// let enrolled = Utc.with_ymd_and_hms(2023, 9, 1, 8, 0, 0).unwrap();
/// let mut student = Student::new(1, "Dupont".to_string(), "Jean".to_string(), enrolled);
///
/// student.add_group_history(Group::new(1, "L3 INFO".to_string()), enrolled);
/// assert_eq!(student.group_history().len(), 1);
/// assert_eq!(student.group_history()[0].group().name(), "L3 INFO");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    /// Caller-assigned identifier, unique within the system
    id: u32,

    /// Family name
    last_name: String,

    /// Given name
    first_name: String,

    /// Instant the student entered the university
    enrolled_at: DateTime<Utc>,

    /// Group memberships in the order they were recorded (append-only)
    group_history: Vec<GroupMembership>,
}

impl Student {
    /// Create a new student with an empty group history
    ///
    /// # Arguments
    /// * `id` - Caller-assigned student id
    /// * `last_name` - Family name
    /// * `first_name` - Given name
    /// * `enrolled_at` - Instant the student entered the university
    pub fn new(id: u32, last_name: String, first_name: String, enrolled_at: DateTime<Utc>) -> Self {
        Self {
            id,
            last_name,
            first_name,
            enrolled_at,
            group_history: Vec::new(),
        }
    }

    /// Get student ID
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Get family name
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Get given name
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Get the enrollment instant
    pub fn enrolled_at(&self) -> DateTime<Utc> {
        self.enrolled_at
    }

    /// Get the group history, oldest entry first
    pub fn group_history(&self) -> &[GroupMembership] {
        &self.group_history
    }

    /// Record that the student joined a group
    ///
    /// Appends to the history; there is no removal or reordering.
    ///
    /// # Arguments
    /// * `group` - The group joined
    /// * `joined_at` - Instant the student joined it
    pub fn add_group_history(&mut self, group: Group, joined_at: DateTime<Utc>) {
        self.group_history.push(GroupMembership { group, joined_at });
    }
}

impl PartialEq for Student {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Student {}

impl Hash for Student {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
