//! Bounding boxes and text rendering for live-cell sets

use super::{Coordinate, LiveCells};
use itertools::{Itertools, MinMaxResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Smallest rectangle containing a set of cells (inclusive on both ends)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: Coordinate,
    pub max: Coordinate,
}

impl Bounds {
    /// Bounding box of `live_cells`, or `None` for an empty set
    pub fn of(live_cells: &LiveCells) -> Option<Self> {
        let (min_x, max_x) = min_max(live_cells.iter().map(|c| c.x))?;
        let (min_y, max_y) = min_max(live_cells.iter().map(|c| c.y))?;
        Some(Self {
            min: Coordinate::new(min_x, min_y),
            max: Coordinate::new(max_x, max_y),
        })
    }

    /// Grow the box by `margin` cells on every side
    pub fn padded(self, margin: i64) -> Self {
        Self {
            min: Coordinate::new(self.min.x.saturating_sub(margin), self.min.y.saturating_sub(margin)),
            max: Coordinate::new(self.max.x.saturating_add(margin), self.max.y.saturating_add(margin)),
        }
    }

    /// Number of columns; saturates at `u64::MAX` for a box spanning every `x`
    pub fn width(&self) -> u64 {
        self.max.x.abs_diff(self.min.x).saturating_add(1)
    }

    pub fn height(&self) -> u64 {
        self.max.y.abs_diff(self.min.y).saturating_add(1)
    }

    /// Number of cells inside the box, saturating
    pub fn area(&self) -> u64 {
        self.width().saturating_mul(self.height())
    }

    pub fn contains(&self, cell: Coordinate) -> bool {
        (self.min.x..=self.max.x).contains(&cell.x) && (self.min.y..=self.max.y).contains(&cell.y)
    }

    /// Render the area inside the box one text row per `y`, top to bottom
    pub fn render(&self, live_cells: &LiveCells, alive: &str, dead: &str) -> String {
        let mut output = String::new();
        for y in self.min.y..=self.max.y {
            for x in self.min.x..=self.max.x {
                let symbol = if live_cells.contains(&Coordinate::new(x, y)) { alive } else { dead };
                output.push_str(symbol);
            }
            output.push('\n');
        }
        output
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{} ({}x{})", self.min, self.max, self.width(), self.height())
    }
}

fn min_max(values: impl Iterator<Item = i64>) -> Option<(i64, i64)> {
    match values.minmax() {
        MinMaxResult::NoElements => None,
        MinMaxResult::OneElement(v) => Some((v, v)),
        MinMaxResult::MinMax(lo, hi) => Some((lo, hi)),
    }
}
