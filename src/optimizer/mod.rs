//! Seating optimizer and plan KPIs.
//!
//! `SeatingOptimizer` wraps validation, the genetic search, and seat
//! numbering behind a single call. `SeatingKpi` scores any finished plan,
//! whether produced here or edited by hand afterwards.
//!
//! # Contract
//!
//! - No guests: `solution = []`, `fitness = 1`, `generations = 0`.
//! - Capacity shortfall: `SeatingError::CapacityExceeded` before any search.
//! - Otherwise every guest receives exactly one seat and no table exceeds
//!   its capacity.

mod engine;
mod kpi;

pub use engine::{optimize, OptimizationResult, PreferencePolicy, SeatingOptimizer};
pub use kpi::SeatingKpi;
