//! Error types.

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors returned by the seating optimizer.
#[derive(Debug, Error)]
pub enum SeatingError {
    /// Total table capacity is smaller than the guest count.
    #[error("capacity exceeded: {guests} guests but only {capacity} seats (short by {shortfall})")]
    CapacityExceeded {
        /// Number of guests to seat.
        guests: usize,
        /// Sum of all table capacities.
        capacity: usize,
        /// Missing seats (`guests - capacity`).
        shortfall: usize,
    },

    /// A configuration value is outside its allowed range.
    #[error("invalid optimizer configuration: {0}")]
    InvalidConfig(String),

    /// Structural problems in the input records.
    #[error("invalid seating input: {}", summarize(.0))]
    InvalidInput(Vec<ValidationError>),
}

/// Result alias for seating operations.
pub type Result<T> = std::result::Result<T, SeatingError>;

fn summarize(errors: &[ValidationError]) -> String {
    match errors {
        [] => "no details".to_string(),
        [only] => only.message.clone(),
        [first, rest @ ..] => format!("{} (and {} more)", first.message, rest.len()),
    }
}
