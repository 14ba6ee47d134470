//! Group reference data
//!
//! A teaching group students belong to over time. The group itself is
//! identity-bearing reference data; membership history lives on the
//! student side.

use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// A teaching group (cohort, class section).
///
/// Identity is the caller-assigned id: two `Group` values with the same
/// id are the same group regardless of their names.
///
/// # Example
/// ```
/// use fee_tracker_core_rs::Group;
///
/// let group = Group::new(1, "L3 INFO".to_string());
/// assert_eq!(group.id(), 1);
/// assert_eq!(group.name(), "L3 INFO");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Group {
    /// Caller-assigned identifier, unique within the system
    id: u32,

    /// Display name
    name: String,
}

impl Group {
    /// Create a new group
    pub fn new(id: u32, name: String) -> Self {
        Self { id, name }
    }

    /// Get group ID
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Get group name
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl PartialEq for Group {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Group {}

impl Hash for Group {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_by_id_only() {
        let a = Group::new(7, "L3 INFO".to_string());
        let b = Group::new(7, "L3 INFO (renamed)".to_string());
        let c = Group::new(8, "L3 INFO".to_string());

        assert_eq!(a, b); // same id, different name
        assert_ne!(a, c); // different id, same name
    }
}
