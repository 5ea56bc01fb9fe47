//! Summary of a simulation run

use crate::game_of_life::GenerationDelta;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunOutcome {
    /// Ran for the requested number of generations
    Completed,
    /// The population died out
    Extinct,
    /// A generation produced no change
    Stable,
}

/// Aggregate statistics collected while running a simulation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    pub generations_run: u64,
    pub initial_population: usize,
    pub final_population: usize,
    pub peak_population: usize,
    pub total_born: usize,
    pub total_died: usize,
    pub outcome: RunOutcome,
}

impl RunReport {
    pub fn new(initial_population: usize) -> Self {
        Self {
            generations_run: 0,
            initial_population,
            final_population: initial_population,
            peak_population: initial_population,
            total_born: 0,
            total_died: 0,
            outcome: RunOutcome::Completed,
        }
    }

    /// Account for one applied delta
    pub fn record(&mut self, delta: &GenerationDelta, population: usize) {
        self.generations_run += 1;
        self.total_born += delta.born.len();
        self.total_died += delta.died.len();
        self.final_population = population;
        self.peak_population = self.peak_population.max(population);
    }
}

impl fmt::Display for RunOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunOutcome::Completed => write!(f, "completed"),
            RunOutcome::Extinct => write!(f, "extinct"),
            RunOutcome::Stable => write!(f, "stable"),
        }
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Run Summary:")?;
        writeln!(f, "  Generations: {}", self.generations_run)?;
        writeln!(f, "  Outcome: {}", self.outcome)?;
        writeln!(f, "  Population: {} → {} (peak {})",
                 self.initial_population, self.final_population, self.peak_population)?;
        write!(f, "  Born: {}, Died: {}", self.total_born, self.total_died)
    }
}
