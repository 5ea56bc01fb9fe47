//! Conway's B3/S23 rules over an unbounded set of live cells

use super::{Coordinate, GenerationDelta, LiveCells};
use itertools::iproduct;
use rayon::prelude::*;
use std::collections::HashSet;

/// Game of Life rules engine
///
/// Stateless: every call is a pure function of the live-cell set it is given.
/// Positions past the `i64` limits do not exist, so cells on the edge of the
/// representable range have fewer than 8 neighbors.
#[derive(Debug, Clone, Copy, Default)]
pub struct LifeEngine;

impl LifeEngine {
    /// Representable cells of the Moore neighborhood, excluding the cell itself
    fn neighborhood(cell: Coordinate) -> impl Iterator<Item = Coordinate> {
        iproduct!(-1..=1, -1..=1)
            .filter(|&(dx, dy)| dx != 0 || dy != 0)
            .filter_map(move |(dx, dy)| cell.checked_offset(dx, dy))
    }

    /// The 8 coordinates at Chebyshev distance 1 from `cell`
    pub fn neighbors_of(cell: Coordinate) -> HashSet<Coordinate> {
        Self::neighborhood(cell).collect()
    }

    /// Whether `a` and `b` are distinct cells touching each other (including diagonally)
    pub fn are_neighbors(a: Coordinate, b: Coordinate) -> bool {
        a.chebyshev_distance(b) == 1
    }

    /// Number of live cells adjacent to `cell`; `cell` itself never counts
    pub fn count_live_neighbors(cell: Coordinate, live_cells: &LiveCells) -> usize {
        Self::neighborhood(cell)
            .filter(|neighbor| live_cells.contains(neighbor))
            .count()
    }

    /// Every dead cell adjacent to at least one live cell
    ///
    /// A dead cell with no live neighbor can never be born, so this is the
    /// complete set of birth candidates.
    pub fn candidate_cells(live_cells: &LiveCells) -> HashSet<Coordinate> {
        live_cells
            .iter()
            .flat_map(|&cell| Self::neighborhood(cell))
            .filter(|cell| !live_cells.contains(cell))
            .collect()
    }

    /// Compute the next generation as a born/died delta
    pub fn iterate(live_cells: &LiveCells) -> GenerationDelta {
        let born = Self::candidate_cells(live_cells)
            .into_iter()
            .filter(|&cell| {
                Self::should_be_alive(false, Self::count_live_neighbors(cell, live_cells))
            })
            .collect();

        let died = live_cells
            .iter()
            .copied()
            .filter(|&cell| {
                !Self::should_be_alive(true, Self::count_live_neighbors(cell, live_cells))
            })
            .collect();

        GenerationDelta { born, died }
    }

    /// Step many independent worlds at once, one engine call per world
    ///
    /// Output order matches input order.
    pub fn iterate_all(worlds: &[LiveCells]) -> Vec<GenerationDelta> {
        worlds.par_iter().map(Self::iterate).collect()
    }

    /// The live-cell set one generation after `live_cells`
    pub fn next_generation(live_cells: &LiveCells) -> LiveCells {
        let mut next = live_cells.clone();
        Self::iterate(live_cells).apply_to(&mut next);
        next
    }

    /// Check if a cell should be alive in the next generation given its current state and neighbor count
    pub fn should_be_alive(currently_alive: bool, neighbor_count: usize) -> bool {
        if currently_alive {
            Self::survival_neighbor_counts().contains(&neighbor_count)
        } else {
            Self::birth_neighbor_counts().contains(&neighbor_count)
        }
    }

    /// Neighbor counts that bring a dead cell to life
    pub fn birth_neighbor_counts() -> &'static [usize] {
        &[3]
    }

    /// Neighbor counts that keep a live cell alive
    pub fn survival_neighbor_counts() -> &'static [usize] {
        &[2, 3]
    }

    /// Get the maximum possible neighbor count for any cell
    pub fn max_neighbor_count() -> usize {
        8
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_of_life::{cells_from_pairs, patterns};
    use itertools::iproduct;

    fn c(x: i64, y: i64) -> Coordinate {
        Coordinate::new(x, y)
    }

    #[test]
    fn test_neighbors_of() {
        let neighbors = LifeEngine::neighbors_of(c(0, 0));
        assert_eq!(neighbors.len(), 8);
        assert!(!neighbors.contains(&c(0, 0)));
        for n in &neighbors {
            assert_eq!(n.chebyshev_distance(c(0, 0)), 1);
        }
    }

    #[test]
    fn test_are_neighbors() {
        assert!(LifeEngine::are_neighbors(c(0, 0), c(1, 1)));
        assert!(LifeEngine::are_neighbors(c(0, 0), c(0, -1)));
        assert!(!LifeEngine::are_neighbors(c(0, 0), c(0, 0)));
        assert!(!LifeEngine::are_neighbors(c(0, 0), c(2, 0)));
        assert!(!LifeEngine::are_neighbors(c(i64::MIN, 0), c(i64::MAX, 0)));

        let center = c(7, -3);
        for candidate in iproduct!(4..=10, -6..=0).map(|(x, y)| c(x, y)) {
            assert_eq!(
                LifeEngine::are_neighbors(center, candidate),
                LifeEngine::neighbors_of(center).contains(&candidate)
            );
        }
    }

    #[test]
    fn test_count_live_neighbors() {
        let live = cells_from_pairs([(0, 0), (1, 0), (0, 1), (5, 5)]);
        assert_eq!(LifeEngine::count_live_neighbors(c(0, 0), &live), 2);
        assert_eq!(LifeEngine::count_live_neighbors(c(1, 1), &live), 3);
        assert_eq!(LifeEngine::count_live_neighbors(c(5, 5), &live), 0);
        assert_eq!(LifeEngine::count_live_neighbors(c(-10, -10), &live), 0);

        let full = LifeEngine::neighbors_of(c(0, 0));
        assert_eq!(
            LifeEngine::count_live_neighbors(c(0, 0), &full),
            LifeEngine::max_neighbor_count()
        );
    }

    #[test]
    fn test_candidate_cells() {
        assert!(LifeEngine::candidate_cells(&LiveCells::new()).is_empty());

        let live = cells_from_pairs([(0, 0)]);
        assert_eq!(LifeEngine::candidate_cells(&live), LifeEngine::neighbors_of(c(0, 0)));

        let blinker = patterns::BLINKER.live_cells();
        let candidates = LifeEngine::candidate_cells(&blinker);
        assert_eq!(candidates.len(), 12);
        assert!(candidates.is_disjoint(&blinker));
        assert!(!candidates.contains(&c(3, 0)));
        for cell in &candidates {
            assert!(LifeEngine::count_live_neighbors(*cell, &blinker) > 0);
        }
    }

    #[test]
    fn test_empty_world() {
        let delta = LifeEngine::iterate(&LiveCells::new());
        assert!(delta.born.is_empty());
        assert!(delta.died.is_empty());
    }

    #[test]
    fn test_lonely_cell_dies() {
        let live = cells_from_pairs([(42, -17)]);
        let delta = LifeEngine::iterate(&live);
        assert!(delta.born.is_empty());
        assert_eq!(delta.died, live);
    }

    #[test]
    fn test_still_life_block() {
        let block = patterns::BLOCK.live_cells();
        assert!(LifeEngine::iterate(&block).is_empty());
    }

    #[test]
    fn test_oscillator_blinker() {
        let horizontal = cells_from_pairs([(-1, 0), (0, 0), (1, 0)]);
        let delta = LifeEngine::iterate(&horizontal);

        assert_eq!(delta.born, cells_from_pairs([(0, -1), (0, 1)]));
        assert_eq!(delta.died, cells_from_pairs([(-1, 0), (1, 0)]));

        let vertical = LifeEngine::next_generation(&horizontal);
        assert_eq!(vertical, cells_from_pairs([(0, -1), (0, 0), (0, 1)]));
        assert_eq!(LifeEngine::next_generation(&vertical), horizontal);
    }

    #[test]
    fn test_overpopulation() {
        // Plus sign: the center has 4 neighbors and dies
        let plus = cells_from_pairs([(0, 0), (1, 0), (-1, 0), (0, 1), (0, -1)]);
        let delta = LifeEngine::iterate(&plus);
        assert!(delta.died.contains(&c(0, 0)));
        assert!(delta.born.contains(&c(1, 1)));
    }

    #[test]
    fn test_glider_translates() {
        let glider = patterns::GLIDER.live_cells();
        let mut world = glider.clone();
        for _ in 0..4 {
            world = LifeEngine::next_generation(&world);
        }
        let shifted: LiveCells = glider.iter().map(|cell| c(cell.x + 1, cell.y + 1)).collect();
        assert_eq!(world, shifted);
    }

    #[test]
    fn test_delta_invariants() {
        for pattern in patterns::PATTERNS {
            let live = pattern.live_cells();
            let delta = LifeEngine::iterate(&live);

            assert!(delta.born.is_disjoint(&delta.died), "{}", pattern.name);
            assert!(delta.born.is_disjoint(&live), "{}", pattern.name);
            assert!(delta.died.is_subset(&live), "{}", pattern.name);
            assert_eq!(delta, LifeEngine::iterate(&live), "{}", pattern.name);
        }
    }

    #[test]
    fn test_extreme_coordinates_do_not_panic() {
        let live = cells_from_pairs([(i64::MAX, i64::MAX), (i64::MIN, i64::MIN), (i64::MAX, 0)]);
        let delta = LifeEngine::iterate(&live);
        assert!(delta.born.is_disjoint(&delta.died));
        assert_eq!(delta.died, live);
        assert!(delta.born.is_empty());
    }

    #[test]
    fn test_no_wraparound_at_lattice_edge() {
        let max = i64::MAX;
        let min = i64::MIN;

        assert_eq!(LifeEngine::neighbors_of(c(max, 0)).len(), 5);
        assert_eq!(LifeEngine::neighbors_of(c(max, max)).len(), 3);
        assert!(!LifeEngine::neighbors_of(c(max, 0)).contains(&c(min, 0)));

        let opposite = cells_from_pairs([(max, 0), (min, 0)]);
        assert!(!LifeEngine::are_neighbors(c(max, 0), c(min, 0)));
        assert_eq!(LifeEngine::count_live_neighbors(c(max, 0), &opposite), 0);
        assert_eq!(LifeEngine::count_live_neighbors(c(min, 0), &opposite), 0);

        // Vertical blinker pressed against the right edge
        let edge_blinker = cells_from_pairs([(max, -1), (max, 0), (max, 1)]);
        let delta = LifeEngine::iterate(&edge_blinker);
        assert!(!delta.born.contains(&c(min, 0)));
        assert_eq!(delta.born, cells_from_pairs([(max - 1, 0)]));
        assert_eq!(delta.died, cells_from_pairs([(max, -1), (max, 1)]));
        for cell in LifeEngine::candidate_cells(&edge_blinker) {
            assert!(cell.x > 0, "{} wrapped across the lattice", cell);
        }
    }

    #[test]
    fn test_iterate_all_preserves_order() {
        let worlds = vec![
            patterns::BLOCK.live_cells(),
            LiveCells::new(),
            patterns::BLINKER.live_cells(),
        ];
        let deltas = LifeEngine::iterate_all(&worlds);

        assert_eq!(deltas.len(), 3);
        for (world, delta) in worlds.iter().zip(&deltas) {
            assert_eq!(*delta, LifeEngine::iterate(world));
        }
    }

    #[test]
    fn test_rule_logic() {
        assert!(LifeEngine::should_be_alive(true, 2)); // Survival with 2 neighbors
        assert!(LifeEngine::should_be_alive(true, 3)); // Survival with 3 neighbors
        assert!(LifeEngine::should_be_alive(false, 3)); // Birth with 3 neighbors
        assert!(!LifeEngine::should_be_alive(true, 1)); // Death with 1 neighbor
        assert!(!LifeEngine::should_be_alive(true, 4)); // Death with 4 neighbors
        assert!(!LifeEngine::should_be_alive(false, 2)); // No birth with 2 neighbors
    }
}
