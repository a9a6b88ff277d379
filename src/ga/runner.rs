//! Generational GA driver.
//!
//! Problem-agnostic: a problem supplies individual creation, evaluation,
//! crossover and mutation through [`GaProblem`]; the runner owns the
//! population, tournament selection, elitism and termination.
//!
//! # Per generation
//! 1. Score every unscored chromosome (optionally in parallel).
//! 2. Record best-so-far and average fitness.
//! 3. Stop if converged, stagnated, out of time, or out of generations.
//! 4. Carry the top `elite_size` chromosomes unchanged.
//! 5. Fill the rest with selection → crossover → mutation.
//!
//! Fitness is maximized.
//!
//! # Reference
//! Goldberg (1989), "Genetic Algorithms in Search, Optimization and Machine Learning"

use std::time::Instant;

use log::debug;
use rand::Rng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::config::GaConfig;
use crate::error::SeatingError;

/// A candidate solution that carries its own fitness.
pub trait Individual: Clone + Send + Sync {
    /// Last assigned fitness.
    fn fitness(&self) -> f64;
    /// Stores a freshly computed fitness.
    fn set_fitness(&mut self, fitness: f64);
}

/// Problem definition driven by [`GaRunner`].
pub trait GaProblem: Send + Sync {
    /// Chromosome type.
    type Individual: Individual;

    /// Builds one random individual for the initial population.
    fn create_individual<R: Rng>(&self, rng: &mut R) -> Self::Individual;

    /// Scores an individual (higher = better). Must be pure.
    fn evaluate(&self, individual: &Self::Individual) -> f64;

    /// Combines two parents into one child.
    fn crossover<R: Rng>(
        &self,
        parent1: &Self::Individual,
        parent2: &Self::Individual,
        rng: &mut R,
    ) -> Self::Individual;

    /// Perturbs an individual in place.
    fn mutate<R: Rng>(&self, individual: &mut Self::Individual, rng: &mut R);
}

/// Convergence history entry, one per evaluated generation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRecord {
    /// Generation index (0-based).
    pub generation: usize,
    /// Best fitness seen in this or any earlier generation.
    pub best_fitness: f64,
    /// Mean fitness of this generation.
    pub avg_fitness: f64,
}

/// Why a run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TerminationReason {
    /// Best fitness reached the target.
    Converged,
    /// Generation limit reached.
    MaxGenerationsReached,
    /// No improvement for `max_stagnation` generations.
    Stagnated,
    /// Wall-clock budget exhausted.
    TimeLimit,
    /// Nothing to search (no guests); no generation was run.
    Trivial,
}

/// Outcome of a GA run.
#[derive(Debug, Clone)]
pub struct GaResult<I> {
    /// Best individual found.
    pub best: I,
    /// Fitness of `best`.
    pub best_fitness: f64,
    /// Number of evaluated generations.
    pub generations: usize,
    /// Per-generation statistics.
    pub history: Vec<GenerationRecord>,
    /// Stop condition that ended the run.
    pub termination: TerminationReason,
}

/// Tournament selection: samples `size` individuals with replacement and
/// returns the fittest.
///
/// `population` must not be empty.
pub fn tournament_select<'a, I: Individual, R: Rng>(
    population: &'a [I],
    size: usize,
    rng: &mut R,
) -> &'a I {
    let mut winner = &population[rng.random_range(0..population.len())];
    for _ in 1..size {
        let contender = &population[rng.random_range(0..population.len())];
        if contender.fitness() > winner.fitness() {
            winner = contender;
        }
    }
    winner
}

/// Generational GA runner.
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA with the RNG described by `config.seed`.
    pub fn run<P: GaProblem>(
        problem: &P,
        config: &GaConfig,
    ) -> Result<GaResult<P::Individual>, SeatingError> {
        let mut rng = config.rng();
        Self::run_with_rng(problem, config, &mut rng)
    }

    /// Runs the GA with a caller-supplied RNG.
    pub fn run_with_rng<P: GaProblem, R: Rng>(
        problem: &P,
        config: &GaConfig,
        rng: &mut R,
    ) -> Result<GaResult<P::Individual>, SeatingError> {
        config.validate()?;
        let started = Instant::now();
        let time_limit = config.time_limit();

        let mut population: Vec<P::Individual> = (0..config.population_size)
            .map(|_| problem.create_individual(rng))
            .collect();
        Self::evaluate_all(problem, &mut population, config.parallel);

        let (first_best, _) = Self::stats(&population);
        let mut best = population[first_best].clone();
        let mut history = Vec::with_capacity(config.max_generations.min(1024));
        let mut generation = 0usize;
        let mut stagnation = 0usize;

        let termination = loop {
            let (best_idx, avg_fitness) = Self::stats(&population);
            if population[best_idx].fitness() > best.fitness() {
                best = population[best_idx].clone();
                stagnation = 0;
            } else if generation > 0 {
                stagnation += 1;
            }

            history.push(GenerationRecord {
                generation,
                best_fitness: best.fitness(),
                avg_fitness,
            });
            debug!(
                "generation {generation}: best={:.4} avg={avg_fitness:.4} stagnation={stagnation}",
                best.fitness()
            );
            generation += 1;

            if best.fitness() >= config.target_fitness {
                break TerminationReason::Converged;
            }
            if stagnation >= config.max_stagnation {
                break TerminationReason::Stagnated;
            }
            if time_limit.is_some_and(|limit| started.elapsed() >= limit) {
                break TerminationReason::TimeLimit;
            }
            if generation >= config.max_generations {
                break TerminationReason::MaxGenerationsReached;
            }

            population = Self::next_generation(problem, config, &population, rng);
        };

        Ok(GaResult {
            best_fitness: best.fitness(),
            best,
            generations: generation,
            history,
            termination,
        })
    }

    /// Builds the next population: elites first, then offspring.
    fn next_generation<P: GaProblem, R: Rng>(
        problem: &P,
        config: &GaConfig,
        population: &[P::Individual],
        rng: &mut R,
    ) -> Vec<P::Individual> {
        let mut ranked: Vec<usize> = (0..population.len()).collect();
        ranked.sort_by(|&a, &b| population[b].fitness().total_cmp(&population[a].fitness()));

        let mut next = Vec::with_capacity(config.population_size);
        next.extend(
            ranked
                .iter()
                .take(config.elite_size)
                .map(|&i| population[i].clone()),
        );
        let elites = next.len();

        while next.len() < config.population_size {
            let parent1 = tournament_select(population, config.tournament_size, rng);
            let parent2 = tournament_select(population, config.tournament_size, rng);

            let mut child = if rng.random_bool(config.crossover_rate) {
                problem.crossover(parent1, parent2, rng)
            } else {
                parent1.clone()
            };
            if rng.random_bool(config.mutation_rate) {
                problem.mutate(&mut child, rng);
            }
            next.push(child);
        }

        Self::evaluate_all(problem, &mut next[elites..], config.parallel);
        next
    }

    fn evaluate_all<P: GaProblem>(problem: &P, individuals: &mut [P::Individual], parallel: bool) {
        if parallel {
            individuals.par_iter_mut().for_each(|ind| {
                let fitness = problem.evaluate(ind);
                ind.set_fitness(fitness);
            });
        } else {
            for ind in individuals.iter_mut() {
                let fitness = problem.evaluate(ind);
                ind.set_fitness(fitness);
            }
        }
    }

    /// Index of the fittest individual and the mean fitness.
    fn stats<I: Individual>(population: &[I]) -> (usize, f64) {
        let mut best = 0;
        let mut sum = 0.0;
        for (i, ind) in population.iter().enumerate() {
            sum += ind.fitness();
            if ind.fitness() > population[best].fitness() {
                best = i;
            }
        }
        (best, sum / population.len().max(1) as f64)
    }
}
