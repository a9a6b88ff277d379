//! Guest → table index chromosome.
//!
//! # Encoding
//!
//! `genes[g]` is the table index of guest `g`, both indices into the input
//! slices. Seat numbers are not part of the encoding; they are derived once
//! from the final chromosome.
//!
//! # Feasibility
//!
//! Every operator here keeps each table at or below its capacity:
//! the initializer by construction, crossover through [`repair_capacity`],
//! and mutation by moving only into tables with a free seat or by swapping.

use rand::prelude::IndexedRandom;
use rand::seq::SliceRandom;
use rand::Rng;

use super::runner::Individual;

/// Flat seating chromosome.
///
/// Higher fitness = better seating (maximization convention).
#[derive(Debug, Clone, PartialEq)]
pub struct SeatingChromosome {
    /// Table index per guest index.
    pub genes: Vec<usize>,
    /// Fitness value (`NEG_INFINITY` until evaluated).
    pub fitness: f64,
}

impl Individual for SeatingChromosome {
    fn fitness(&self) -> f64 {
        self.fitness
    }

    fn set_fitness(&mut self, fitness: f64) {
        self.fitness = fitness;
    }
}

impl SeatingChromosome {
    /// Wraps an explicit gene vector.
    pub fn from_genes(genes: Vec<usize>) -> Self {
        Self {
            genes,
            fitness: f64::NEG_INFINITY,
        }
    }

    /// Creates a random capacity-feasible chromosome.
    ///
    /// Guests are visited in random order; each goes to a uniformly chosen
    /// table that still has a free seat. Requires
    /// `capacities.iter().sum() >= guest_count`.
    pub fn random_feasible<R: Rng>(capacities: &[usize], guest_count: usize, rng: &mut R) -> Self {
        let mut order: Vec<usize> = (0..guest_count).collect();
        order.shuffle(rng);

        let mut remaining = capacities.to_vec();
        let mut open: Vec<usize> = (0..capacities.len()).filter(|&t| remaining[t] > 0).collect();
        let mut genes = vec![0; guest_count];

        for guest in order {
            if open.is_empty() {
                break;
            }
            let slot = rng.random_range(0..open.len());
            let table = open[slot];
            genes[guest] = table;
            remaining[table] -= 1;
            if remaining[table] == 0 {
                open.swap_remove(slot);
            }
        }

        Self::from_genes(genes)
    }

    /// Guests seated per table.
    pub fn occupancy(&self, table_count: usize) -> Vec<usize> {
        let mut load = vec![0; table_count];
        for &table in &self.genes {
            if let Some(count) = load.get_mut(table) {
                *count += 1;
            }
        }
        load
    }

    /// Whether every gene names a real table and no table is over capacity.
    pub fn is_feasible(&self, capacities: &[usize]) -> bool {
        self.genes.iter().all(|&t| t < capacities.len())
            && self
                .occupancy(capacities.len())
                .iter()
                .zip(capacities)
                .all(|(load, cap)| load <= cap)
    }

    /// Guest indices seated at `table`.
    pub fn guests_at(&self, table: usize) -> Vec<usize> {
        self.genes
            .iter()
            .enumerate()
            .filter(|&(_, &t)| t == table)
            .map(|(g, _)| g)
            .collect()
    }

    fn invalidate(&mut self) {
        self.fitness = f64::NEG_INFINITY;
    }
}

// ======================== Crossover operators ========================

/// Uniform crossover: each gene comes from either parent with equal odds.
///
/// The child may exceed table capacities; follow with [`repair_capacity`].
pub fn uniform_crossover<R: Rng>(
    p1: &SeatingChromosome,
    p2: &SeatingChromosome,
    rng: &mut R,
) -> SeatingChromosome {
    let genes = p1
        .genes
        .iter()
        .zip(&p2.genes)
        .map(|(&a, &b)| if rng.random_bool(0.5) { a } else { b })
        .collect();
    SeatingChromosome::from_genes(genes)
}

/// Moves surplus guests out of over-capacity tables.
///
/// Tables are handled worst overflow first. Surplus guests are picked at
/// random among those seated there and each goes to the table with the most
/// free seats (lowest index on ties). Terminates whenever total capacity
/// covers all guests.
///
/// Returns the number of guests moved.
pub fn repair_capacity<R: Rng>(
    chromosome: &mut SeatingChromosome,
    capacities: &[usize],
    rng: &mut R,
) -> usize {
    let mut load = chromosome.occupancy(capacities.len());
    let mut overflowing: Vec<usize> = (0..capacities.len())
        .filter(|&t| load[t] > capacities[t])
        .collect();
    overflowing.sort_by_key(|&t| std::cmp::Reverse(load[t] - capacities[t]));

    let mut moved = 0;
    for table in overflowing {
        let excess = load[table] - capacities[table];
        let mut seated = chromosome.guests_at(table);
        seated.shuffle(rng);

        for &guest in seated.iter().take(excess) {
            let Some(target) = most_free_table(capacities, &load) else {
                break;
            };
            chromosome.genes[guest] = target;
            load[table] -= 1;
            load[target] += 1;
            moved += 1;
        }
    }

    if moved > 0 {
        chromosome.invalidate();
    }
    moved
}

fn most_free_table(capacities: &[usize], load: &[usize]) -> Option<usize> {
    (0..capacities.len())
        .filter(|&t| load[t] < capacities[t])
        .max_by_key(|&t| (capacities[t] - load[t], std::cmp::Reverse(t)))
}

// ======================== Mutation operators ========================

/// Relocate mutation: moves `guest` to another table with a free seat.
///
/// Returns `false` (chromosome untouched) when no other table has room.
pub fn relocate_mutation<R: Rng>(
    chromosome: &mut SeatingChromosome,
    guest: usize,
    capacities: &[usize],
    rng: &mut R,
) -> bool {
    let Some(&current) = chromosome.genes.get(guest) else {
        return false;
    };
    let load = chromosome.occupancy(capacities.len());
    let spare: Vec<usize> = (0..capacities.len())
        .filter(|&t| t != current && load[t] < capacities[t])
        .collect();

    match spare.choose(rng) {
        Some(&target) => {
            chromosome.genes[guest] = target;
            chromosome.invalidate();
            true
        }
        None => false,
    }
}

/// Swap mutation: exchanges the tables of `guest` and a random guest seated
/// at a different table.
///
/// Capacity is preserved exactly. Returns `false` when everyone sits at
/// `guest`'s table.
pub fn swap_mutation<R: Rng>(chromosome: &mut SeatingChromosome, guest: usize, rng: &mut R) -> bool {
    let Some(&current) = chromosome.genes.get(guest) else {
        return false;
    };
    let partners: Vec<usize> = (0..chromosome.genes.len())
        .filter(|&g| chromosome.genes[g] != current)
        .collect();

    match partners.choose(rng) {
        Some(&other) => {
            chromosome.genes.swap(guest, other);
            chromosome.invalidate();
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_feasible() {
        let caps = vec![4, 4, 4];
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..200 {
            let ch = SeatingChromosome::random_feasible(&caps, 10, &mut rng);
            assert_eq!(ch.genes.len(), 10);
            assert!(ch.is_feasible(&caps));
            assert_eq!(ch.occupancy(3).iter().sum::<usize>(), 10);
            assert_eq!(ch.fitness, f64::NEG_INFINITY);
        }
    }

    #[test]
    fn test_random_feasible_exact_fit() {
        let caps = vec![1, 2, 3];
        let mut rng = SmallRng::seed_from_u64(7);
        let ch = SeatingChromosome::random_feasible(&caps, 6, &mut rng);
        assert_eq!(ch.occupancy(3), vec![1, 2, 3]);
    }

    #[test]
    fn test_random_feasible_is_diverse() {
        let caps = vec![5, 5, 5, 5];
        let mut rng = SmallRng::seed_from_u64(42);
        let a = SeatingChromosome::random_feasible(&caps, 12, &mut rng);
        let distinct = (0..20)
            .map(|_| SeatingChromosome::random_feasible(&caps, 12, &mut rng))
            .filter(|c| c.genes != a.genes)
            .count();
        assert!(distinct > 15);
    }

    #[test]
    fn test_infeasible_detection() {
        let caps = vec![1, 1];
        assert!(!SeatingChromosome::from_genes(vec![0, 0]).is_feasible(&caps));
        assert!(!SeatingChromosome::from_genes(vec![0, 5]).is_feasible(&caps));
        assert!(SeatingChromosome::from_genes(vec![1, 0]).is_feasible(&caps));
    }

    #[test]
    fn test_uniform_crossover_takes_parent_genes() {
        let p1 = SeatingChromosome::from_genes(vec![0, 0, 0, 0, 0, 0]);
        let p2 = SeatingChromosome::from_genes(vec![1, 1, 1, 1, 1, 1]);
        let mut rng = SmallRng::seed_from_u64(42);
        let child = uniform_crossover(&p1, &p2, &mut rng);
        assert_eq!(child.genes.len(), 6);
        assert!(child.genes.iter().all(|&t| t == 0 || t == 1));
        assert_eq!(child.fitness, f64::NEG_INFINITY);
    }

    #[test]
    fn test_repair_restores_capacity() {
        let caps = vec![2, 2, 3];
        let mut rng = SmallRng::seed_from_u64(42);
        let mut ch = SeatingChromosome::from_genes(vec![0, 0, 0, 0, 0, 1]);
        ch.fitness = 0.5;

        let moved = repair_capacity(&mut ch, &caps, &mut rng);
        assert_eq!(moved, 3);
        assert!(ch.is_feasible(&caps));
        assert_eq!(ch.occupancy(3), vec![2, 2, 2]);
        assert_eq!(ch.fitness, f64::NEG_INFINITY);
    }

    #[test]
    fn test_repair_prefers_most_free_table() {
        let caps = vec![1, 2, 5];
        let mut rng = SmallRng::seed_from_u64(1);
        let mut ch = SeatingChromosome::from_genes(vec![0, 0]);
        assert_eq!(repair_capacity(&mut ch, &caps, &mut rng), 1);
        assert_eq!(ch.occupancy(3), vec![1, 0, 1]);
    }

    #[test]
    fn test_repair_noop_when_feasible() {
        let caps = vec![2, 2];
        let mut rng = SmallRng::seed_from_u64(42);
        let mut ch = SeatingChromosome::from_genes(vec![0, 1, 1]);
        ch.fitness = 0.75;
        assert_eq!(repair_capacity(&mut ch, &caps, &mut rng), 0);
        assert_eq!(ch.genes, vec![0, 1, 1]);
        assert_eq!(ch.fitness, 0.75);
    }

    #[test]
    fn test_crossover_then_repair_stays_feasible() {
        let caps = vec![3, 3, 4];
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..200 {
            let p1 = SeatingChromosome::random_feasible(&caps, 10, &mut rng);
            let p2 = SeatingChromosome::random_feasible(&caps, 10, &mut rng);
            let mut child = uniform_crossover(&p1, &p2, &mut rng);
            repair_capacity(&mut child, &caps, &mut rng);
            assert!(child.is_feasible(&caps));
        }
    }

    #[test]
    fn test_relocate_mutation() {
        let caps = vec![2, 2, 2];
        let mut rng = SmallRng::seed_from_u64(42);
        let mut ch = SeatingChromosome::from_genes(vec![0, 0, 1, 1]);
        assert!(relocate_mutation(&mut ch, 0, &caps, &mut rng));
        assert_eq!(ch.genes, vec![2, 0, 1, 1]);
        assert!(ch.is_feasible(&caps));
    }

    #[test]
    fn test_relocate_fails_when_full() {
        let caps = vec![2, 2];
        let mut rng = SmallRng::seed_from_u64(42);
        let mut ch = SeatingChromosome::from_genes(vec![0, 0, 1, 1]);
        assert!(!relocate_mutation(&mut ch, 1, &caps, &mut rng));
        assert!(!relocate_mutation(&mut ch, 9, &caps, &mut rng));
        assert_eq!(ch.genes, vec![0, 0, 1, 1]);
    }

    #[test]
    fn test_swap_mutation_preserves_occupancy() {
        let mut rng = SmallRng::seed_from_u64(42);
        let mut ch = SeatingChromosome::from_genes(vec![0, 0, 1, 1]);
        assert!(swap_mutation(&mut ch, 0, &mut rng));
        assert_eq!(ch.occupancy(2), vec![2, 2]);
        assert_ne!(ch.genes, vec![0, 0, 1, 1]);
    }

    #[test]
    fn test_swap_moves_the_chosen_guest() {
        let caps = vec![2, 1, 1];
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..50 {
            let mut ch = SeatingChromosome::from_genes(vec![0, 0, 1, 2]);
            assert!(!relocate_mutation(&mut ch, 1, &caps, &mut rng));
            assert!(swap_mutation(&mut ch, 1, &mut rng));
            assert_ne!(ch.genes[1], 0);
            assert_eq!(ch.genes[0], 0);
            assert_eq!(ch.occupancy(3), vec![2, 1, 1]);
        }
    }

    #[test]
    fn test_swap_mutation_single_table() {
        let mut rng = SmallRng::seed_from_u64(42);
        let mut ch = SeatingChromosome::from_genes(vec![0, 0, 0]);
        assert!(!swap_mutation(&mut ch, 2, &mut rng));
        assert_eq!(ch.genes, vec![0, 0, 0]);
    }
}
