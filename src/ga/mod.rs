//! GA-based seating optimization.
//!
//! A generational genetic search over capacity-feasible guest → table
//! assignments.
//!
//! # Encoding
//!
//! A chromosome is a flat `Vec<usize>`: position = guest index, value =
//! table index. Copy, crossover and mutation are plain vector operations.
//! There is no cached per-table load: occupancy is recomputed in O(G + T)
//! by the operators that need it, each of which is already O(G).
//!
//! # Submodules
//!
//! - [`config`]: search parameters with defaults and range validation
//! - [`runner`]: problem-agnostic generational driver (tournament selection,
//!   elitism, termination, convergence history)
//!
//! # Reference
//! - Falkenauer (1998), "Genetic Algorithms and Grouping Problems"
//! - Syswerda (1989), "Uniform Crossover in Genetic Algorithms"

mod chromosome;
pub mod config;
mod problem;
pub mod runner;

pub use chromosome::{
    relocate_mutation, repair_capacity, swap_mutation, uniform_crossover, SeatingChromosome,
};
pub use config::GaConfig;
pub use problem::{PairPreference, SeatingGaProblem};
pub use runner::{
    tournament_select, GaProblem, GaResult, GaRunner, GenerationRecord, Individual,
    TerminationReason,
};
