//! Seating plan quality metrics (KPIs).
//!
//! Computed from a finished plan and its inputs, independently of the GA's
//! internal encoding. Callers use them to decide whether a plan is good
//! enough or whether to re-run with another seed or a larger population.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Weighted satisfaction | Σ priority(satisfied) / Σ priority(scored) |
//! | Satisfied / violated | Counts of scored preferences |
//! | Unscored | Preferences naming an unseated guest or an unsupported type |
//! | Avg utilization | Mean of occupancy / capacity over tables |
//! | Tables used | Tables with at least one guest |
//! | Over-capacity tables | Tables seating more guests than seats |

use std::collections::HashMap;

use crate::models::{occupancy, Assignment, Preference, Table};

/// Seating plan performance indicators.
#[derive(Debug, Clone)]
pub struct SeatingKpi {
    /// Weighted share of satisfied preferences (1.0 when nothing is scored).
    pub weighted_satisfaction: f64,
    /// Number of satisfied preferences.
    pub satisfied_preferences: usize,
    /// IDs of scored preferences the plan violates.
    pub violated_preferences: Vec<String>,
    /// Preferences that could not be scored against this plan.
    pub unscored_preferences: usize,
    /// Sum of satisfied priorities.
    pub satisfied_weight: u64,
    /// Sum of scored priorities.
    pub total_weight: u64,
    /// Guests seated per table ID.
    pub occupancy_by_table: HashMap<String, usize>,
    /// Mean table utilization (0.0..=1.0 for feasible plans).
    pub avg_utilization: f64,
    /// Tables with at least one guest.
    pub tables_used: usize,
    /// Tables seating more guests than their capacity.
    pub over_capacity_tables: Vec<String>,
}

impl SeatingKpi {
    /// Computes KPIs from a plan and its inputs.
    pub fn calculate(solution: &[Assignment], tables: &[Table], preferences: &[Preference]) -> Self {
        let table_of: HashMap<&str, &str> = solution
            .iter()
            .map(|a| (a.guest_id.as_str(), a.table_id.as_str()))
            .collect();

        let mut satisfied_preferences = 0;
        let mut violated_preferences = Vec::new();
        let mut unscored_preferences = 0;
        let mut satisfied_weight = 0u64;
        let mut total_weight = 0u64;

        for p in preferences {
            let placed = (
                table_of.get(p.guest_id1.as_str()),
                table_of.get(p.guest_id2.as_str()),
            );
            let (Some(t1), Some(t2)) = placed else {
                unscored_preferences += 1;
                continue;
            };
            if !p.preference_type.is_scored() || p.guest_id1 == p.guest_id2 {
                unscored_preferences += 1;
                continue;
            }

            total_weight += u64::from(p.priority);
            if p.preference_type.is_satisfied(t1 == t2) {
                satisfied_preferences += 1;
                satisfied_weight += u64::from(p.priority);
            } else {
                violated_preferences.push(p.id.clone());
            }
        }

        let weighted_satisfaction = if total_weight == 0 {
            1.0
        } else {
            satisfied_weight as f64 / total_weight as f64
        };

        let counts = occupancy(solution);
        let occupancy_by_table: HashMap<String, usize> = tables
            .iter()
            .map(|t| (t.id.clone(), counts.get(t.id.as_str()).copied().unwrap_or(0)))
            .collect();

        let utilizations: Vec<f64> = tables
            .iter()
            .filter(|t| t.capacity > 0)
            .map(|t| occupancy_by_table[&t.id] as f64 / t.capacity as f64)
            .collect();
        let avg_utilization = if utilizations.is_empty() {
            0.0
        } else {
            utilizations.iter().sum::<f64>() / utilizations.len() as f64
        };

        let tables_used = occupancy_by_table.values().filter(|&&n| n > 0).count();
        let over_capacity_tables = tables
            .iter()
            .filter(|t| occupancy_by_table[&t.id] > t.seats())
            .map(|t| t.id.clone())
            .collect();

        Self {
            weighted_satisfaction,
            satisfied_preferences,
            violated_preferences,
            unscored_preferences,
            satisfied_weight,
            total_weight,
            occupancy_by_table,
            avg_utilization,
            tables_used,
            over_capacity_tables,
        }
    }

    /// Whether the plan is capacity-feasible and meets the satisfaction floor.
    pub fn meets_threshold(&self, min_satisfaction: f64) -> bool {
        self.over_capacity_tables.is_empty() && self.weighted_satisfaction >= min_satisfaction
    }
}
