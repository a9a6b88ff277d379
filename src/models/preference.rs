//! Seating preference model.
//!
//! A preference links two guests with a social constraint and a priority
//! weight. Preferences are soft: the optimizer maximizes the weighted share
//! of satisfied preferences but never violates table capacity to do so.

use serde::{Deserialize, Serialize};

/// A pairwise seating preference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preference {
    /// Unique preference identifier.
    pub id: String,
    /// Floor layout the preference applies to.
    #[serde(default)]
    pub layout_id: String,
    /// First guest.
    pub guest_id1: String,
    /// Second guest.
    pub guest_id2: String,
    /// Kind of constraint between the two guests.
    pub preference_type: PreferenceType,
    /// Weight of this preference (higher = more important).
    pub priority: u32,
}

/// Kind of pairwise preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PreferenceType {
    /// Both guests should share a table.
    MustSitTogether,
    /// The guests should be at different tables.
    CannotSitTogether,
    /// Any type the optimizer does not score.
    #[serde(other)]
    Other,
}

impl PreferenceType {
    /// Whether the optimizer knows how to score this type.
    pub fn is_scored(self) -> bool {
        !matches!(self, PreferenceType::Other)
    }

    /// Whether this preference is satisfied given the guests' table placement.
    pub fn is_satisfied(self, same_table: bool) -> bool {
        match self {
            PreferenceType::MustSitTogether => same_table,
            PreferenceType::CannotSitTogether => !same_table,
            PreferenceType::Other => false,
        }
    }
}

impl Preference {
    /// Creates a preference.
    pub fn new(
        id: impl Into<String>,
        guest_id1: impl Into<String>,
        guest_id2: impl Into<String>,
        preference_type: PreferenceType,
        priority: u32,
    ) -> Self {
        Self {
            id: id.into(),
            layout_id: String::new(),
            guest_id1: guest_id1.into(),
            guest_id2: guest_id2.into(),
            preference_type,
            priority,
        }
    }

    /// Creates a "must sit together" preference.
    pub fn must_sit_together(
        id: impl Into<String>,
        guest_id1: impl Into<String>,
        guest_id2: impl Into<String>,
        priority: u32,
    ) -> Self {
        Self::new(id, guest_id1, guest_id2, PreferenceType::MustSitTogether, priority)
    }

    /// Creates a "cannot sit together" preference.
    pub fn cannot_sit_together(
        id: impl Into<String>,
        guest_id1: impl Into<String>,
        guest_id2: impl Into<String>,
        priority: u32,
    ) -> Self {
        Self::new(id, guest_id1, guest_id2, PreferenceType::CannotSitTogether, priority)
    }

    /// Sets the owning layout.
    pub fn with_layout(mut self, layout_id: impl Into<String>) -> Self {
        self.layout_id = layout_id.into();
        self
    }

    /// Whether the preference involves the given guest.
    pub fn involves(&self, guest_id: &str) -> bool {
        self.guest_id1 == guest_id || self.guest_id2 == guest_id
    }
}
