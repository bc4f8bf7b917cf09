//! Final meal counts.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Meal counts per philosopher, gathered after every philosopher has been joined.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealReport {
    pub rounds: usize,
    pub meals: Vec<u64>,
}

impl MealReport {
    pub(crate) fn new(philosophers: usize, rounds: usize) -> Self {
        Self {
            rounds,
            meals: vec![0; philosophers],
        }
    }

    /// Adds one round's per-philosopher increments.
    pub(crate) fn record(&mut self, round_meals: &[u64]) {
        for (total, meals) in self.meals.iter_mut().zip(round_meals) {
            *total += meals;
        }
    }

    pub fn total(&self) -> u64 {
        self.meals.iter().sum()
    }

    /// Ids of philosophers that never ate.
    pub fn hungry(&self) -> Vec<usize> {
        self.meals
            .iter()
            .enumerate()
            .filter(|(_, meals)| **meals == 0)
            .map(|(id, _)| id)
            .collect()
    }
}

impl fmt::Display for MealReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (id, meals) in self.meals.iter().enumerate() {
            writeln!(f, "philosopher {id}: {meals} meal(s)")?;
        }
        write!(
            f,
            "total: {} meal(s) over {} round(s)",
            self.total(),
            self.rounds
        )
    }
}
