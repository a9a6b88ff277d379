//! Seating optimizer entry point.
//!
//! # Pipeline
//!
//! 1. Empty guest list → trivial perfect result, no search.
//! 2. Structural validation and the capacity check (fatal on failure).
//! 3. Malformed preferences: dropped and logged, or rejected, per
//!    [`PreferencePolicy`].
//! 4. Generational GA over capacity-feasible chromosomes.
//! 5. Seat numbering of the best chromosome.
//!
//! Each call owns its RNG and population, so independent calls may run
//! concurrently on separate threads without coordination.

use std::collections::HashSet;

use log::{info, warn};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SeatingError};
use crate::ga::{GaConfig, GaRunner, GenerationRecord, SeatingGaProblem, TerminationReason};
use crate::models::{Assignment, Guest, Preference, Table};
use crate::validation::{check_capacity, check_preference, validate_input};

/// What to do with preferences that cannot be scored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PreferencePolicy {
    /// Drop them from scoring, log a warning, and report their IDs.
    #[default]
    Ignore,
    /// Fail the call with [`SeatingError::InvalidInput`].
    Reject,
}

/// Outcome of an optimization run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationResult {
    /// One assignment per guest, in guest input order.
    pub solution: Vec<Assignment>,
    /// Fitness of the solution in [0, 1].
    pub fitness: f64,
    /// Number of evaluated generations.
    pub generations: usize,
    /// Best/average fitness per generation.
    pub convergence_history: Vec<GenerationRecord>,
    /// Stop condition that ended the run.
    pub termination: TerminationReason,
    /// IDs of preferences left out of scoring.
    pub ignored_preferences: Vec<String>,
}

impl OptimizationResult {
    /// Result for an event without guests.
    pub fn trivial() -> Self {
        Self {
            solution: Vec::new(),
            fitness: 1.0,
            generations: 0,
            convergence_history: Vec::new(),
            termination: TerminationReason::Trivial,
            ignored_preferences: Vec::new(),
        }
    }

    /// Table assigned to a guest.
    pub fn table_of(&self, guest_id: &str) -> Option<&str> {
        self.solution
            .iter()
            .find(|a| a.guest_id == guest_id)
            .map(|a| a.table_id.as_str())
    }

    /// Guests seated at a table, by seat number.
    pub fn guests_at(&self, table_id: &str) -> Vec<&str> {
        let mut seated: Vec<&Assignment> = self
            .solution
            .iter()
            .filter(|a| a.table_id == table_id)
            .collect();
        seated.sort_by_key(|a| a.seat_number);
        seated.into_iter().map(|a| a.guest_id.as_str()).collect()
    }
}

/// Genetic seating optimizer.
///
/// # Example
///
/// ```
/// use u_seating::ga::GaConfig;
/// use u_seating::models::{Guest, Preference, Table};
/// use u_seating::optimizer::SeatingOptimizer;
///
/// let guests: Vec<Guest> = (1..=4).map(|i| Guest::new(format!("g{i}"))).collect();
/// let tables = vec![Table::new("t1", 2), Table::new("t2", 2)];
/// let prefs = vec![Preference::must_sit_together("p1", "g1", "g2", 10)];
///
/// let optimizer = SeatingOptimizer::new(GaConfig::default().with_seed(42)).unwrap();
/// let result = optimizer.optimize(&guests, &tables, &prefs).unwrap();
/// assert_eq!(result.solution.len(), 4);
/// assert_eq!(result.table_of("g1"), result.table_of("g2"));
/// ```
#[derive(Debug, Clone)]
pub struct SeatingOptimizer {
    config: GaConfig,
    preference_policy: PreferencePolicy,
}

impl SeatingOptimizer {
    /// Creates an optimizer, validating the configuration.
    pub fn new(config: GaConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            preference_policy: PreferencePolicy::default(),
        })
    }

    /// Sets the malformed-preference policy.
    pub fn with_preference_policy(mut self, policy: PreferencePolicy) -> Self {
        self.preference_policy = policy;
        self
    }

    /// Search configuration.
    pub fn config(&self) -> &GaConfig {
        &self.config
    }

    /// Malformed-preference policy.
    pub fn preference_policy(&self) -> PreferencePolicy {
        self.preference_policy
    }

    /// Optimizes with the RNG described by the configured seed.
    pub fn optimize(
        &self,
        guests: &[Guest],
        tables: &[Table],
        preferences: &[Preference],
    ) -> Result<OptimizationResult> {
        let mut rng = self.config.rng();
        self.optimize_with_rng(guests, tables, preferences, &mut rng)
    }

    /// Optimizes with a caller-supplied RNG.
    pub fn optimize_with_rng<R: Rng>(
        &self,
        guests: &[Guest],
        tables: &[Table],
        preferences: &[Preference],
        rng: &mut R,
    ) -> Result<OptimizationResult> {
        if guests.is_empty() {
            info!("no guests to seat; returning empty plan");
            return Ok(OptimizationResult::trivial());
        }

        validate_input(guests, tables).map_err(SeatingError::InvalidInput)?;
        check_capacity(guests, tables)?;
        let (scorable, ignored_preferences) = self.screen_preferences(guests, preferences)?;

        let problem = SeatingGaProblem::from_screened(guests, tables, scorable);
        info!(
            "seating {} guests at {} tables with {} preferences (population={}, max_generations={})",
            guests.len(),
            tables.len(),
            problem.preferences.len(),
            self.config.population_size,
            self.config.max_generations
        );

        let outcome = GaRunner::run_with_rng(&problem, &self.config, rng)?;
        info!(
            "optimization finished: {:?} after {} generations, fitness {:.4}",
            outcome.termination, outcome.generations, outcome.best_fitness
        );

        Ok(OptimizationResult {
            solution: problem.decode(&outcome.best),
            fitness: outcome.best_fitness,
            generations: outcome.generations,
            convergence_history: outcome.history,
            termination: outcome.termination,
            ignored_preferences,
        })
    }

    /// Applies the preference policy.
    ///
    /// Returns the scorable preferences and the IDs of dropped ones.
    fn screen_preferences<'a>(
        &self,
        guests: &[Guest],
        preferences: &'a [Preference],
    ) -> Result<(Vec<&'a Preference>, Vec<String>)> {
        let known: HashSet<&str> = guests.iter().map(|g| g.id.as_str()).collect();
        let mut scorable = Vec::with_capacity(preferences.len());
        let mut issues = Vec::new();
        for preference in preferences {
            match check_preference(preference, &known) {
                Some(issue) => issues.push(issue),
                None => scorable.push(preference),
            }
        }
        if issues.is_empty() {
            return Ok((scorable, Vec::new()));
        }

        match self.preference_policy {
            PreferencePolicy::Reject => Err(SeatingError::InvalidInput(issues)),
            PreferencePolicy::Ignore => {
                let ignored = issues
                    .into_iter()
                    .map(|issue| {
                        warn!("ignoring preference: {}", issue.message);
                        issue.entity_id
                    })
                    .collect();
                Ok((scorable, ignored))
            }
        }
    }
}

/// Optimizes a seating plan, using defaults for any omitted configuration.
pub fn optimize(
    guests: &[Guest],
    tables: &[Table],
    preferences: &[Preference],
    config: Option<GaConfig>,
) -> Result<OptimizationResult> {
    SeatingOptimizer::new(config.unwrap_or_default())?.optimize(guests, tables, preferences)
}
