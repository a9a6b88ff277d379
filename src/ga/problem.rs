//! Seating GA problem definition.
//!
//! Implements [`GaProblem`] for guest seating. Compiles domain records into
//! index form once (guest/table positions, capacity vector, pairwise
//! preferences) so the hot loop never touches string IDs.
//!
//! # Fitness
//!
//! ```text
//! fitness = Σ priority(satisfied) / Σ priority(all scored preferences)
//! ```
//!
//! `1.0` when there is nothing to score; `0.0` for any chromosome that
//! breaks table capacity.

use std::collections::{HashMap, HashSet};

use rand::Rng;

use super::chromosome::{
    relocate_mutation, repair_capacity, swap_mutation, uniform_crossover, SeatingChromosome,
};
use super::runner::GaProblem;
use crate::error::SeatingError;
use crate::models::{Assignment, Guest, Preference, PreferenceType, Table};
use crate::validation::{check_capacity, check_preference};

/// A preference in index form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairPreference {
    /// First guest index.
    pub first: usize,
    /// Second guest index.
    pub second: usize,
    /// Constraint kind.
    pub preference_type: PreferenceType,
    /// Priority weight.
    pub weight: u64,
}

impl PairPreference {
    /// Whether the chromosome satisfies this preference.
    #[inline]
    pub fn is_satisfied(&self, genes: &[usize]) -> bool {
        self.preference_type
            .is_satisfied(genes[self.first] == genes[self.second])
    }
}

/// GA problem definition for guest seating.
///
/// # Example
/// ```
/// use u_seating::ga::{GaConfig, GaRunner, SeatingGaProblem};
/// use u_seating::models::{Guest, Preference, Table};
///
/// let guests: Vec<Guest> = (1..=4).map(|i| Guest::new(format!("g{i}"))).collect();
/// let tables = vec![Table::new("t1", 2), Table::new("t2", 2)];
/// let prefs = vec![Preference::must_sit_together("p1", "g1", "g2", 10)];
///
/// let problem = SeatingGaProblem::new(&guests, &tables, &prefs).unwrap();
/// let result = GaRunner::run(&problem, &GaConfig::default().with_seed(42)).unwrap();
/// assert_eq!(result.best_fitness, 1.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SeatingGaProblem {
    /// Guest IDs in input order (gene index → ID).
    pub guest_ids: Vec<String>,
    /// Table IDs in input order (table index → ID).
    pub table_ids: Vec<String>,
    /// Seats per table index.
    pub capacities: Vec<usize>,
    /// Scorable preferences in index form.
    pub preferences: Vec<PairPreference>,
    /// Sum of all preference weights.
    pub total_weight: u64,
}

impl SeatingGaProblem {
    /// Creates a problem from domain records.
    ///
    /// Fails if total capacity cannot seat every guest. Malformed
    /// preferences are skipped here; reporting them is the caller's job.
    pub fn new(
        guests: &[Guest],
        tables: &[Table],
        preferences: &[Preference],
    ) -> Result<Self, SeatingError> {
        check_capacity(guests, tables)?;

        let known: HashSet<&str> = guests.iter().map(|g| g.id.as_str()).collect();
        let scorable = preferences
            .iter()
            .filter(|p| check_preference(p, &known).is_none());
        Ok(Self::from_screened(guests, tables, scorable))
    }

    /// Creates a problem from records that have already passed the capacity
    /// and preference checks.
    ///
    /// Used by the optimizer, which runs those checks itself to apply its
    /// preference policy. A preference naming an unknown guest is still
    /// dropped rather than indexed.
    pub(crate) fn from_screened<'a>(
        guests: &[Guest],
        tables: &[Table],
        preferences: impl IntoIterator<Item = &'a Preference>,
    ) -> Self {
        let guest_index: HashMap<&str, usize> = guests
            .iter()
            .enumerate()
            .map(|(i, g)| (g.id.as_str(), i))
            .collect();

        let compiled: Vec<PairPreference> = preferences
            .into_iter()
            .filter_map(|p| {
                Some(PairPreference {
                    first: *guest_index.get(p.guest_id1.as_str())?,
                    second: *guest_index.get(p.guest_id2.as_str())?,
                    preference_type: p.preference_type,
                    weight: u64::from(p.priority),
                })
            })
            .collect();
        let total_weight = compiled.iter().map(|p| p.weight).sum();

        Self {
            guest_ids: guests.iter().map(|g| g.id.clone()).collect(),
            table_ids: tables.iter().map(|t| t.id.clone()).collect(),
            capacities: tables.iter().map(Table::seats).collect(),
            preferences: compiled,
            total_weight,
        }
    }

    /// Number of guests (chromosome length).
    pub fn guest_count(&self) -> usize {
        self.guest_ids.len()
    }

    /// Weighted preference satisfaction in [0, 1]; 0 if capacity is broken.
    pub fn fitness(&self, chromosome: &SeatingChromosome) -> f64 {
        if chromosome.genes.len() != self.guest_count() || !chromosome.is_feasible(&self.capacities)
        {
            return 0.0;
        }
        if self.total_weight == 0 {
            return 1.0;
        }
        let satisfied: u64 = self
            .preferences
            .iter()
            .filter(|p| p.is_satisfied(&chromosome.genes))
            .map(|p| p.weight)
            .sum();
        satisfied as f64 / self.total_weight as f64
    }

    /// Decodes a chromosome into assignments with seat numbers.
    ///
    /// Output follows guest input order. Seats at each table are numbered
    /// from 1 in the same order.
    pub fn decode(&self, chromosome: &SeatingChromosome) -> Vec<Assignment> {
        let mut next_seat = vec![0u32; self.table_ids.len()];
        chromosome
            .genes
            .iter()
            .zip(&self.guest_ids)
            .filter_map(|(&table, guest_id)| {
                let table_id = self.table_ids.get(table)?;
                next_seat[table] += 1;
                Some(Assignment::new(guest_id, table_id, next_seat[table]))
            })
            .collect()
    }
}

impl GaProblem for SeatingGaProblem {
    type Individual = SeatingChromosome;

    fn create_individual<R: Rng>(&self, rng: &mut R) -> SeatingChromosome {
        SeatingChromosome::random_feasible(&self.capacities, self.guest_count(), rng)
    }

    fn evaluate(&self, individual: &SeatingChromosome) -> f64 {
        self.fitness(individual)
    }

    fn crossover<R: Rng>(
        &self,
        parent1: &SeatingChromosome,
        parent2: &SeatingChromosome,
        rng: &mut R,
    ) -> SeatingChromosome {
        let mut child = uniform_crossover(parent1, parent2, rng);
        repair_capacity(&mut child, &self.capacities, rng);
        child
    }

    fn mutate<R: Rng>(&self, individual: &mut SeatingChromosome, rng: &mut R) {
        if individual.genes.is_empty() {
            return;
        }
        let guest = rng.random_range(0..individual.genes.len());
        if !relocate_mutation(individual, guest, &self.capacities, rng) {
            swap_mutation(individual, guest, rng);
        }
    }
}
