//! Teacher reference data
//!
//! Part of the data model for completeness; no ledger query reads it.

use serde::{Deserialize, Serialize};

/// A teacher on record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Teacher {
    /// Caller-assigned identifier, unique within the system
    id: u32,

    /// Family name
    last_name: String,

    /// Given name
    first_name: String,
}

impl Teacher {
    /// Create a new teacher record
    pub fn new(id: u32, last_name: String, first_name: String) -> Self {
        Self {
            id,
            last_name,
            first_name,
        }
    }

    /// Get teacher ID
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
}
