//! File I/O for seed patterns

use super::{patterns::PATTERNS, Bounds, Coordinate, LiveCells};
use anyhow::{Context, Result};
use std::path::Path;
use thiserror::Error;

/// Errors produced while parsing a pattern from text
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PatternError {
    #[error("pattern contains no rows")]
    Empty,
    #[error("invalid character '{ch}' at row {row}, column {col}")]
    InvalidCharacter { ch: char, row: usize, col: usize },
}

/// Parse a pattern from its text representation
///
/// Each line is a row, top to bottom. `1`, `O`, `*` and `#` are alive; `0` and
/// `.` are dead. Blank lines and lines starting with `!` are skipped, and
/// short rows are padded with dead cells. Row 0 maps to `y = 0`.
pub fn parse_pattern(content: &str) -> Result<LiveCells, PatternError> {
    let rows: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('!'))
        .collect();

    if rows.is_empty() {
        return Err(PatternError::Empty);
    }

    let mut live = LiveCells::new();
    for (row, line) in rows.iter().enumerate() {
        for (col, ch) in line.chars().enumerate() {
            match ch {
                '1' | 'O' | '*' | '#' => {
                    live.insert(Coordinate::new(col as i64, row as i64));
                }
                '0' | '.' => {}
                _ => return Err(PatternError::InvalidCharacter { ch, row, col }),
            }
        }
    }

    Ok(live)
}

/// Load a pattern from a text file
pub fn load_pattern_from_file<P: AsRef<Path>>(path: P) -> Result<LiveCells> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read pattern file: {}", path.as_ref().display()))?;

    parse_pattern(&content)
        .with_context(|| format!("Failed to parse pattern from file: {}", path.as_ref().display()))
}

/// Convert a live-cell set to text, cropped to its bounding box
///
/// The empty set renders as an empty string.
pub fn pattern_to_string(live_cells: &LiveCells) -> String {
    Bounds::of(live_cells)
        .map(|bounds| bounds.render(live_cells, "1", "0"))
        .unwrap_or_default()
}

/// Save a live-cell set to a text file
pub fn save_pattern_to_file<P: AsRef<Path>>(live_cells: &LiveCells, path: P) -> Result<()> {
    if let Some(parent) = path.as_ref().parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    std::fs::write(&path, pattern_to_string(live_cells))
        .with_context(|| format!("Failed to write pattern to file: {}", path.as_ref().display()))?;

    Ok(())
}

/// Write every built-in pattern to `<name>.txt` in `output_dir`
pub fn create_example_patterns<P: AsRef<Path>>(output_dir: P) -> Result<()> {
    let dir = output_dir.as_ref();
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    for pattern in PATTERNS {
        let path = dir.join(format!("{}.txt", pattern.name));
        let content = format!("! {}\n{}", pattern.description, pattern_to_string(&pattern.live_cells()));
        std::fs::write(&path, content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_of_life::{cells_from_pairs, patterns};
    use tempfile::tempdir;

    #[test]
    fn test_parse_pattern() {
        let live = parse_pattern("010\n101\n010\n").unwrap();
        assert_eq!(live, cells_from_pairs([(1, 0), (0, 1), (2, 1), (1, 2)]));
    }

    #[test]
    fn test_parse_plaintext_style() {
        let content = "! Glider\n.O.\n..O\nOOO\n";
        let live = parse_pattern(content).unwrap();
        assert_eq!(live, patterns::GLIDER.live_cells());
    }

    #[test]
    fn test_ragged_rows_are_padded() {
        let live = parse_pattern("1\n011\n").unwrap();
        assert_eq!(live, cells_from_pairs([(0, 0), (1, 1), (2, 1)]));
    }

    #[test]
    fn test_pattern_to_string_crops_to_bounds() {
        let live = cells_from_pairs([(5, 5), (6, 6)]);
        assert_eq!(pattern_to_string(&live), "10\n01\n");
        assert_eq!(pattern_to_string(&LiveCells::new()), "");
    }

    #[test]
    fn test_invalid_input() {
        assert_eq!(
            parse_pattern("010\n1X1\n"),
            Err(PatternError::InvalidCharacter { ch: 'X', row: 1, col: 1 })
        );
        assert_eq!(parse_pattern(""), Err(PatternError::Empty));
        assert_eq!(parse_pattern("! only a comment\n\n"), Err(PatternError::Empty));
    }

    #[test]
    fn test_file_operations() {
        let temp_dir = tempdir().unwrap();
        let file_path = temp_dir.path().join("nested/beacon.txt");

        let beacon = patterns::BEACON.live_cells();
        save_pattern_to_file(&beacon, &file_path).unwrap();
        let loaded = load_pattern_from_file(&file_path).unwrap();

        assert_eq!(loaded, beacon);
    }

    #[test]
    fn test_create_example_patterns() {
        let temp_dir = tempdir().unwrap();
        create_example_patterns(temp_dir.path()).unwrap();

        for pattern in patterns::PATTERNS {
            assert!(temp_dir.path().join(format!("{}.txt", pattern.name)).exists());
        }

        let glider = load_pattern_from_file(temp_dir.path().join("glider.txt")).unwrap();
        assert_eq!(glider.len(), 5);
    }
}
