//! Grid coordinates on the unbounded Game of Life lattice

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;

/// The set of currently alive cells. Owned by the caller, only borrowed by the engine.
pub type LiveCells = HashSet<Coordinate>;

/// A single cell position on the infinite integer grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: i64,
    pub y: i64,
}

impl Coordinate {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Shift this coordinate by the given offset
    ///
    /// Returns `None` when the result falls outside the `i64` range.
    pub fn checked_offset(self, dx: i64, dy: i64) -> Option<Self> {
        Some(Self {
            x: self.x.checked_add(dx)?,
            y: self.y.checked_add(dy)?,
        })
    }

    /// Chebyshev (king-move) distance between two coordinates
    pub fn chebyshev_distance(self, other: Coordinate) -> u64 {
        self.x.abs_diff(other.x).max(self.y.abs_diff(other.y))
    }
}

impl From<(i64, i64)> for Coordinate {
    fn from((x, y): (i64, i64)) -> Self {
        Self::new(x, y)
    }
}

// Row-major: rows top to bottom, then columns left to right.
impl Ord for Coordinate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl PartialOrd for Coordinate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Build a live-cell set from `(x, y)` pairs
pub fn cells_from_pairs<I>(pairs: I) -> LiveCells
where
    I: IntoIterator<Item = (i64, i64)>,
{
    pairs.into_iter().map(Coordinate::from).collect()
}
