//! Display and output formatting utilities

use crate::game_of_life::{Bounds, Coordinate, GenerationDelta, LiveCells};
use anyhow::Result;
use itertools::Itertools;
use serde::Serialize;

/// Worlds whose bounding box is wider or taller than this are summarized, not drawn
pub const MAX_RENDER_SIZE: u64 = 256;

/// Format live-cell sets and deltas for the console
pub struct WorldFormatter;

/// One generation as emitted in JSON output
#[derive(Debug, Serialize)]
pub struct DeltaFrame {
    pub generation: u64,
    pub population: usize,
    pub born: Vec<Coordinate>,
    pub died: Vec<Coordinate>,
}

impl DeltaFrame {
    pub fn new(generation: u64, delta: &GenerationDelta, live_cells: &LiveCells) -> Self {
        Self {
            generation,
            population: live_cells.len(),
            born: delta.born_sorted(),
            died: delta.died_sorted(),
        }
    }
}

impl WorldFormatter {
    fn is_drawable(bounds: &Bounds) -> bool {
        bounds.width() <= MAX_RENDER_SIZE && bounds.height() <= MAX_RENDER_SIZE
    }

    fn format_too_large(bounds: &Bounds, live_cells: &LiveCells) -> String {
        format!("({} live cells spread over {}, too large to draw)\n", live_cells.len(), bounds)
    }

    /// Format the live cells cropped to their bounding box
    pub fn format_world_compact(live_cells: &LiveCells) -> String {
        match Bounds::of(live_cells) {
            Some(bounds) if Self::is_drawable(&bounds) => bounds.render(live_cells, "█", "·"),
            Some(bounds) => Self::format_too_large(&bounds, live_cells),
            None => "(empty)\n".to_string(),
        }
    }

    /// Format the live cells with a one-cell margin and x/y axis labels
    pub fn format_world_with_coords(live_cells: &LiveCells) -> String {
        let Some(bounds) = Bounds::of(live_cells).map(|b| b.padded(1)) else {
            return "(empty)\n".to_string();
        };
        if !Self::is_drawable(&bounds) {
            return Self::format_too_large(&bounds, live_cells);
        }

        let mut output = String::new();

        // Header with the last digit of each column's x
        output.push_str("     ");
        for x in bounds.min.x..=bounds.max.x {
            output.push_str(&format!("{:2}", x.rem_euclid(10)));
        }
        output.push('\n');

        for y in bounds.min.y..=bounds.max.y {
            output.push_str(&format!("{:4} ", y));
            for x in bounds.min.x..=bounds.max.x {
                let alive = live_cells.contains(&Coordinate::new(x, y));
                output.push_str(if alive { "██" } else { "··" });
            }
            output.push('\n');
        }

        output
    }

    /// Format one tick of a running simulation
    pub fn format_frame(
        generation: u64,
        delta: &GenerationDelta,
        live_cells: &LiveCells,
        show_delta: bool,
    ) -> String {
        let mut output = format!(
            "Generation {} (population {}, {:+})\n",
            generation,
            live_cells.len(),
            delta.population_change()
        );
        output.push_str(&Self::format_world_compact(live_cells));

        if show_delta {
            output.push_str(&Self::format_delta(delta));
            output.push('\n');
        }

        output
    }

    /// Format born and died cells, colored when the terminal allows
    pub fn format_delta(delta: &GenerationDelta) -> String {
        format!(
            "{} {}\n{} {}",
            ColorOutput::colored(&format!("+{}", delta.born.len()), Color::Green),
            delta.born_sorted().iter().join(" "),
            ColorOutput::colored(&format!("-{}", delta.died.len()), Color::Red),
            delta.died_sorted().iter().join(" "),
        )
    }

    /// Serialize one tick as a single JSON line
    pub fn format_frame_json(
        generation: u64,
        delta: &GenerationDelta,
        live_cells: &LiveCells,
    ) -> Result<String> {
        Ok(serde_json::to_string(&DeltaFrame::new(generation, delta, live_cells))?)
    }
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    /// Check if terminal supports color
    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err() &&
        (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    /// Format success message
    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    /// Format warning message
    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    /// Format info message
    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
        }
    }
}
