//! Driver loop that owns the live-cell set and steps it with the engine

pub mod report;
pub mod simulation;

pub use report::{RunOutcome, RunReport};
pub use simulation::{Simulation, TickObserver};
