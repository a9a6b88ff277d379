//! Event seating optimization.
//!
//! Assigns guests to tables under hard capacity limits and weighted
//! "sit together" / "sit apart" preferences. Exact solutions are out of
//! reach at realistic guest counts, so the core is a genetic search that
//! returns a capacity-feasible, near-optimal plan within a generation or
//! time budget.
//!
//! # Modules
//!
//! - **`models`**: Domain records — `Guest`, `Table`, `Preference`, `Assignment`
//! - **`validation`**: Input integrity checks (duplicate IDs, capacity, malformed preferences)
//! - **`ga`**: Chromosome encoding, genetic operators, generational driver
//! - **`optimizer`**: `optimize` entry point, seat numbering, plan KPIs
//! - **`error`**: `SeatingError`
//!
//! # Architecture
//!
//! Pure computation: no I/O, no global state. Loading guests/tables/
//! preferences and persisting the returned assignments belong to the
//! calling service. Each call owns its RNG, so runs are reproducible given
//! a seed and independent calls may run concurrently.
//!
//! # Example
//!
//! ```
//! use u_seating::models::{Guest, Preference, Table};
//! use u_seating::optimizer::optimize;
//! use u_seating::ga::GaConfig;
//!
//! let guests: Vec<Guest> = (1..=4).map(|i| Guest::new(format!("g{i}"))).collect();
//! let tables = vec![Table::new("t1", 2), Table::new("t2", 2)];
//! let prefs = vec![Preference::must_sit_together("p1", "g1", "g2", 10)];
//!
//! let result = optimize(&guests, &tables, &prefs, Some(GaConfig::default().with_seed(1))).unwrap();
//! assert_eq!(result.table_of("g1"), result.table_of("g2"));
//! ```
//!
//! # References
//!
//! - Lewis & Carroll (2016), "Creating seating plans: a practical application"
//! - Falkenauer (1998), "Genetic Algorithms and Grouping Problems"

pub mod error;
pub mod ga;
pub mod models;
pub mod optimizer;
pub mod validation;

pub use error::{Result, SeatingError};
