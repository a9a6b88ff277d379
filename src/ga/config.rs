//! Genetic search configuration.
//!
//! Every field is optional on the wire (`#[serde(default)]`), so the
//! service layer can pass a partial JSON object and inherit defaults.
//! Ranges are enforced by [`GaConfig::validate`], which the optimizer
//! calls at construction.

use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::SeatingError;

/// Parameters of the generational genetic search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GaConfig {
    /// Chromosomes per generation (> 0).
    pub population_size: usize,
    /// Upper bound on evaluated generations (> 0).
    pub max_generations: usize,
    /// Probability that an offspring is mutated, in [0, 1].
    pub mutation_rate: f64,
    /// Best chromosomes copied unchanged into the next generation (< population_size).
    pub elite_size: usize,
    /// Chromosomes sampled per tournament (>= 1).
    pub tournament_size: usize,
    /// Probability that an offspring is recombined rather than copied, in [0, 1].
    pub crossover_rate: f64,
    /// Stop once the best fitness reaches this value, in [0, 1].
    pub target_fitness: f64,
    /// Stop after this many consecutive generations without improvement (> 0).
    pub max_stagnation: usize,
    /// RNG seed. `None` seeds from the operating system.
    pub seed: Option<u64>,
    /// Score each generation with a rayon thread pool.
    pub parallel: bool,
    /// Wall-clock budget in milliseconds, checked once per generation.
    pub time_limit_ms: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            max_generations: 500,
            mutation_rate: 0.1,
            elite_size: 2,
            tournament_size: 3,
            crossover_rate: 0.8,
            target_fitness: 1.0,
            max_stagnation: 100,
            seed: None,
            parallel: false,
            time_limit_ms: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, size: usize) -> Self {
        self.population_size = size;
        self
    }

    /// Sets the generation limit.
    pub fn with_max_generations(mut self, generations: usize) -> Self {
        self.max_generations = generations;
        self
    }

    /// Sets the mutation probability.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the number of elites.
    pub fn with_elite_size(mut self, size: usize) -> Self {
        self.elite_size = size;
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, size: usize) -> Self {
        self.tournament_size = size;
        self
    }

    /// Sets the crossover probability.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate;
        self
    }

    /// Sets the target fitness.
    pub fn with_target_fitness(mut self, target: f64) -> Self {
        self.target_fitness = target;
        self
    }

    /// Sets the stagnation limit.
    pub fn with_max_stagnation(mut self, generations: usize) -> Self {
        self.max_stagnation = generations;
        self
    }

    /// Fixes the RNG seed for reproducible runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enables or disables parallel fitness evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the wall-clock budget.
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit_ms = Some(limit.as_millis().min(u64::MAX as u128) as u64);
        self
    }

    /// Wall-clock budget, if any.
    pub fn time_limit(&self) -> Option<Duration> {
        self.time_limit_ms.map(Duration::from_millis)
    }

    /// Creates the run's random source from the seed.
    pub fn rng(&self) -> SmallRng {
        match self.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        }
    }

    /// Checks every field against its allowed range.
    pub fn validate(&self) -> Result<(), SeatingError> {
        fn invalid(msg: String) -> Result<(), SeatingError> {
            Err(SeatingError::InvalidConfig(msg))
        }
        fn is_probability(v: f64) -> bool {
            (0.0..=1.0).contains(&v)
        }

        if self.population_size == 0 {
            return invalid("populationSize must be greater than 0".into());
        }
        if self.max_generations == 0 {
            return invalid("maxGenerations must be greater than 0".into());
        }
        if !is_probability(self.mutation_rate) {
            return invalid(format!("mutationRate must be in [0, 1], got {}", self.mutation_rate));
        }
        if self.elite_size >= self.population_size {
            return invalid(format!(
                "eliteSize ({}) must be less than populationSize ({})",
                self.elite_size, self.population_size
            ));
        }
        if self.tournament_size == 0 {
            return invalid("tournamentSize must be at least 1".into());
        }
        if !is_probability(self.crossover_rate) {
            return invalid(format!("crossoverRate must be in [0, 1], got {}", self.crossover_rate));
        }
        if !is_probability(self.target_fitness) {
            return invalid(format!("targetFitness must be in [0, 1], got {}", self.target_fitness));
        }
        if self.max_stagnation == 0 {
            return invalid("maxStagnation must be greater than 0".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_default_is_valid() {
        assert!(GaConfig::default().validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let c = GaConfig::default()
            .with_population_size(40)
            .with_max_generations(10)
            .with_mutation_rate(0.3)
            .with_elite_size(4)
            .with_tournament_size(5)
            .with_crossover_rate(0.5)
            .with_target_fitness(0.9)
            .with_max_stagnation(7)
            .with_seed(42)
            .with_parallel(true)
            .with_time_limit(Duration::from_secs(2));

        assert_eq!(c.population_size, 40);
        assert_eq!(c.elite_size, 4);
        assert_eq!(c.seed, Some(42));
        assert_eq!(c.time_limit(), Some(Duration::from_millis(2000)));
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_rejects_out_of_range() {
        let bad = [
            GaConfig::default().with_population_size(0),
            GaConfig::default().with_max_generations(0),
            GaConfig::default().with_mutation_rate(1.5),
            GaConfig::default().with_mutation_rate(f64::NAN),
            GaConfig::default().with_population_size(4).with_elite_size(4),
            GaConfig::default().with_tournament_size(0),
            GaConfig::default().with_crossover_rate(-0.1),
            GaConfig::default().with_target_fitness(1.01),
            GaConfig::default().with_max_stagnation(0),
        ];
        for config in bad {
            assert!(
                matches!(config.validate(), Err(SeatingError::InvalidConfig(_))),
                "expected rejection for {config:?}"
            );
        }
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let c = GaConfig::default().with_seed(7);
        let mut r1 = c.rng();
        let mut r2 = c.rng();
        let s1: Vec<u32> = (0..5).map(|_| r1.random()).collect();
        let s2: Vec<u32> = (0..5).map(|_| r2.random()).collect();
        assert_eq!(s1, s2);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let c: GaConfig =
            serde_json::from_str(r#"{"populationSize": 20, "targetFitness": 0.5}"#).unwrap();
        assert_eq!(c.population_size, 20);
        assert!((c.target_fitness - 0.5).abs() < 1e-12);
        assert_eq!(c.max_generations, GaConfig::default().max_generations);
        assert_eq!(c.seed, None);
    }
}
