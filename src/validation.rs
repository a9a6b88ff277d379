//! Input validation for seating problems.
//!
//! Runs before any search work. Detects:
//! - Duplicate guest and table IDs
//! - Zero-capacity tables
//! - Insufficient total capacity (the only check that depends on counts)
//! - Malformed preferences: unknown guests, a guest paired with itself,
//!   zero priority, or a preference type the optimizer cannot score
//!
//! Structural checks accumulate every problem found instead of stopping
//! at the first one.

use std::collections::HashSet;

use crate::error::SeatingError;
use crate::models::{total_capacity, Guest, Preference, Table};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// ID of the offending guest, table, or preference.
    pub entity_id: String,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same ID.
    DuplicateId,
    /// A table has no seats.
    ZeroCapacity,
    /// A preference references a guest that is not in the guest list.
    UnknownGuest,
    /// A preference pairs a guest with itself.
    SelfPreference,
    /// A preference has zero weight.
    ZeroPriority,
    /// A preference type the optimizer does not score.
    UnsupportedPreferenceType,
}

impl ValidationError {
    /// Creates a validation error.
    pub fn new(
        kind: ValidationErrorKind,
        entity_id: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            entity_id: entity_id.into(),
            message: message.into(),
        }
    }
}

/// Validates guest and table records.
///
/// Checks:
/// 1. No duplicate guest IDs
/// 2. No duplicate table IDs
/// 3. Every table has at least one seat
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(guests: &[Guest], tables: &[Table]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut guest_ids = HashSet::new();
    for g in guests {
        if !guest_ids.insert(g.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                &g.id,
                format!("Duplicate guest ID: {}", g.id),
            ));
        }
    }

    let mut table_ids = HashSet::new();
    for t in tables {
        if !table_ids.insert(t.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                &t.id,
                format!("Duplicate table ID: {}", t.id),
            ));
        }
        if t.capacity == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroCapacity,
                &t.id,
                format!("Table '{}' has zero capacity", t.id),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Capacity Validator: fails when the tables cannot hold every guest.
///
/// Must pass before the genetic loop runs; an infeasible instance is a
/// terminal input error, never a fitness penalty.
pub fn check_capacity(guests: &[Guest], tables: &[Table]) -> Result<(), SeatingError> {
    let capacity = total_capacity(tables);
    if capacity < guests.len() {
        return Err(SeatingError::CapacityExceeded {
            guests: guests.len(),
            capacity,
            shortfall: guests.len() - capacity,
        });
    }
    Ok(())
}

/// Classifies a single preference against the known guest IDs.
///
/// Returns `None` for a well-formed, scorable preference.
pub fn check_preference(
    preference: &Preference,
    guest_ids: &HashSet<&str>,
) -> Option<ValidationError> {
    let id = preference.id.as_str();
    for guest in [&preference.guest_id1, &preference.guest_id2] {
        if !guest_ids.contains(guest.as_str()) {
            return Some(ValidationError::new(
                ValidationErrorKind::UnknownGuest,
                id,
                format!("Preference '{id}' references unknown guest '{guest}'"),
            ));
        }
    }
    if preference.guest_id1 == preference.guest_id2 {
        return Some(ValidationError::new(
            ValidationErrorKind::SelfPreference,
            id,
            format!(
                "Preference '{id}' pairs guest '{}' with itself",
                preference.guest_id1
            ),
        ));
    }
    if preference.priority == 0 {
        return Some(ValidationError::new(
            ValidationErrorKind::ZeroPriority,
            id,
            format!("Preference '{id}' has zero priority"),
        ));
    }
    if !preference.preference_type.is_scored() {
        return Some(ValidationError::new(
            ValidationErrorKind::UnsupportedPreferenceType,
            id,
            format!("Preference '{id}' has an unsupported type"),
        ));
    }
    None
}

/// Collects every malformed preference.
pub fn validate_preferences(guests: &[Guest], preferences: &[Preference]) -> Vec<ValidationError> {
    let guest_ids: HashSet<&str> = guests.iter().map(|g| g.id.as_str()).collect();
    preferences
        .iter()
        .filter_map(|p| check_preference(p, &guest_ids))
        .collect()
}
