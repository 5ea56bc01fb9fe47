//! Conway's Game of Life on an unbounded grid
//!
//! The rule engine ([`LifeEngine`]) is a pure function from the current set of
//! live cells to the cells born and died in the next generation. A
//! [`Simulation`] owns the live-cell set and drives the engine once per tick.

pub mod config;
pub mod driver;
pub mod game_of_life;
pub mod utils;

pub use config::Settings;
pub use driver::{RunReport, Simulation};
pub use game_of_life::{Coordinate, GenerationDelta, LifeEngine, LiveCells};

use anyhow::Result;

/// Run a simulation described by `settings`, discarding the per-tick deltas
pub fn run_simulation(settings: &Settings) -> Result<RunReport> {
    let mut simulation = Simulation::from_settings(settings)?;
    let report = simulation.run(
        settings.simulation.generations,
        |_: u64, _: &GenerationDelta, _: &LiveCells| {},
    );
    Ok(report)
}
