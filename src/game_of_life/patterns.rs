//! Named seed patterns
//!
//! Coordinates use screen orientation: `y` grows downward.

use super::{Coordinate, LiveCells};

/// A small, named live-cell configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub cells: &'static [(i64, i64)],
}

impl Pattern {
    /// The pattern as a live-cell set at its native position
    pub fn live_cells(&self) -> LiveCells {
        self.translated(0, 0)
    }

    /// The pattern shifted by `(dx, dy)`
    ///
    /// Cells pushed past the `i64` limits are dropped.
    pub fn translated(&self, dx: i64, dy: i64) -> LiveCells {
        self.cells
            .iter()
            .filter_map(|&(x, y)| Coordinate::new(x, y).checked_offset(dx, dy))
            .collect()
    }
}

pub const BLINKER: Pattern = Pattern {
    name: "blinker",
    description: "Period 2 oscillator",
    cells: &[(-1, 0), (0, 0), (1, 0)],
};

pub const BLOCK: Pattern = Pattern {
    name: "block",
    description: "2x2 still life",
    cells: &[(0, 0), (1, 0), (0, 1), (1, 1)],
};

pub const GLIDER: Pattern = Pattern {
    name: "glider",
    description: "Spaceship moving one cell diagonally every 4 generations",
    cells: &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
};

pub const BEACON: Pattern = Pattern {
    name: "beacon",
    description: "Period 2 oscillator made of two blocks",
    cells: &[(0, 0), (1, 0), (0, 1), (1, 1), (2, 2), (3, 2), (2, 3), (3, 3)],
};

pub const TOAD: Pattern = Pattern {
    name: "toad",
    description: "Period 2 oscillator",
    cells: &[(1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1)],
};

pub const R_PENTOMINO: Pattern = Pattern {
    name: "r-pentomino",
    description: "Methuselah that stabilizes after 1103 generations",
    cells: &[(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)],
};

/// All built-in patterns
pub const PATTERNS: &[Pattern] = &[BLINKER, BLOCK, GLIDER, BEACON, TOAD, R_PENTOMINO];

/// Look up a built-in pattern by name, ignoring case
pub fn find_pattern(name: &str) -> Option<&'static Pattern> {
    PATTERNS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}
