//! The simulation driver

use super::{RunOutcome, RunReport};
use crate::config::Settings;
use crate::game_of_life::{GenerationDelta, LifeEngine, LiveCells};
use anyhow::{Context, Result};
use std::time::Duration;
use tracing::{debug, info};

/// Receives every delta produced by [`Simulation::run`]
pub trait TickObserver {
    /// Called after the delta has been applied; `live_cells` is the new generation
    fn on_tick(&mut self, generation: u64, delta: &GenerationDelta, live_cells: &LiveCells);
}

impl<F> TickObserver for F
where
    F: FnMut(u64, &GenerationDelta, &LiveCells),
{
    fn on_tick(&mut self, generation: u64, delta: &GenerationDelta, live_cells: &LiveCells) {
        self(generation, delta, live_cells)
    }
}

/// Owns the authoritative live-cell set and advances it one engine call per tick
#[derive(Debug, Clone)]
pub struct Simulation {
    live_cells: LiveCells,
    generation: u64,
    tick_interval: Option<Duration>,
    stop_when_stable: bool,
}

impl Simulation {
    /// Start a simulation at generation 0
    pub fn new(live_cells: LiveCells) -> Self {
        Self {
            live_cells,
            generation: 0,
            tick_interval: None,
            stop_when_stable: false,
        }
    }

    /// Create a simulation seeded and paced according to `settings`
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let live_cells = settings
            .initial_cells()
            .context("Failed to load initial pattern")?;

        let interval = settings.simulation.tick_interval_ms;
        let simulation = Self::new(live_cells)
            .with_tick_interval((interval > 0).then(|| Duration::from_millis(interval)))
            .with_stop_when_stable(settings.simulation.stop_when_stable);

        Ok(simulation)
    }

    /// Sleep this long between ticks in [`Simulation::run`]
    pub fn with_tick_interval(mut self, interval: Option<Duration>) -> Self {
        self.tick_interval = interval;
        self
    }

    /// End [`Simulation::run`] as soon as a generation produces no change
    pub fn with_stop_when_stable(mut self, stop: bool) -> Self {
        self.stop_when_stable = stop;
        self
    }

    pub fn live_cells(&self) -> &LiveCells {
        &self.live_cells
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.live_cells.len()
    }

    /// Advance one generation and return the delta that was applied
    pub fn tick(&mut self) -> GenerationDelta {
        let delta = LifeEngine::iterate(&self.live_cells);
        delta.apply_to(&mut self.live_cells);
        self.generation += 1;

        debug!(
            generation = self.generation,
            born = delta.born.len(),
            died = delta.died.len(),
            population = self.live_cells.len(),
            "tick"
        );

        delta
    }

    /// Tick up to `max_generations` times, reporting each delta to `observer`
    ///
    /// Stops early once the population dies out, or on the first empty delta
    /// when stop-when-stable is enabled.
    pub fn run<O: TickObserver>(&mut self, max_generations: u64, mut observer: O) -> RunReport {
        info!(
            max_generations,
            population = self.population(),
            "starting simulation"
        );

        let mut report = RunReport::new(self.population());

        for step in 0..max_generations {
            if self.live_cells.is_empty() {
                report.outcome = RunOutcome::Extinct;
                break;
            }

            if step > 0 {
                if let Some(interval) = self.tick_interval {
                    std::thread::sleep(interval);
                }
            }

            let delta = self.tick();
            report.record(&delta, self.population());
            observer.on_tick(self.generation, &delta, &self.live_cells);

            if self.live_cells.is_empty() {
                report.outcome = RunOutcome::Extinct;
                break;
            }
            if self.stop_when_stable && delta.is_empty() {
                report.outcome = RunOutcome::Stable;
                break;
            }
        }

        info!(
            generations = report.generations_run,
            population = report.final_population,
            outcome = ?report.outcome,
            "simulation finished"
        );

        report
    }
}
