//! The born/died delta between two consecutive generations

use super::{Coordinate, LiveCells};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Structural change from one generation to the next
///
/// `born` and `died` are always disjoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationDelta {
    /// Dead cells that come alive
    pub born: HashSet<Coordinate>,
    /// Live cells that die
    pub died: HashSet<Coordinate>,
}

impl GenerationDelta {
    pub fn new(born: HashSet<Coordinate>, died: HashSet<Coordinate>) -> Self {
        Self { born, died }
    }

    /// True when nothing changes, i.e. the world is a still life or empty
    pub fn is_empty(&self) -> bool {
        self.born.is_empty() && self.died.is_empty()
    }

    /// Fold this delta into a live-cell set: `(live ∪ born) − died`
    pub fn apply_to(&self, live: &mut LiveCells) {
        live.extend(self.born.iter().copied());
        for cell in &self.died {
            live.remove(cell);
        }
    }

    /// Net change in population size
    pub fn population_change(&self) -> i64 {
        self.born.len() as i64 - self.died.len() as i64
    }

    /// Born cells in row-major order
    pub fn born_sorted(&self) -> Vec<Coordinate> {
        self.born.iter().copied().sorted().collect()
    }

    /// Died cells in row-major order
    pub fn died_sorted(&self) -> Vec<Coordinate> {
        self.died.iter().copied().sorted().collect()
    }
}

impl fmt::Display for GenerationDelta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Born ({}): {}", self.born.len(), self.born_sorted().iter().join(" "))?;
        write!(f, "Died ({}): {}", self.died.len(), self.died_sorted().iter().join(" "))
    }
}
