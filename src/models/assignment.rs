//! Seat assignment (solution) model.
//!
//! Assignments are produced only as output: one per guest, naming the
//! table and the seat number at that table. The caller persists them as
//! a single "replace all assignments for this layout" transaction.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A guest-to-seat assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    /// Seated guest.
    pub guest_id: String,
    /// Table the guest sits at.
    pub table_id: String,
    /// Seat number at the table (1-based).
    pub seat_number: u32,
}

impl Assignment {
    /// Creates a new assignment.
    pub fn new(guest_id: impl Into<String>, table_id: impl Into<String>, seat_number: u32) -> Self {
        Self {
            guest_id: guest_id.into(),
            table_id: table_id.into(),
            seat_number,
        }
    }
}

/// Counts assigned guests per table ID.
pub fn occupancy(assignments: &[Assignment]) -> HashMap<&str, usize> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for a in assignments {
        *counts.entry(a.table_id.as_str()).or_insert(0) += 1;
    }
    counts
}
