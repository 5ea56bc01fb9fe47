//! Game of Life core functionality

pub mod coordinate;
pub mod delta;
pub mod grid;
pub mod io;
pub mod patterns;
pub mod rules;

pub use coordinate::{cells_from_pairs, Coordinate, LiveCells};
pub use delta::GenerationDelta;
pub use grid::Bounds;
pub use io::{create_example_patterns, load_pattern_from_file, parse_pattern, save_pattern_to_file, PatternError};
pub use patterns::{find_pattern, Pattern, PATTERNS};
pub use rules::LifeEngine;
