//! Configuration settings for the Game of Life driver

use crate::game_of_life::{find_pattern, load_pattern_from_file, LiveCells};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub simulation: SimulationConfig,
    pub input: InputConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Maximum number of generations to run
    pub generations: u64,
    /// Pause between ticks; 0 runs as fast as possible
    pub tick_interval_ms: u64,
    pub stop_when_stable: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    /// Name of a built-in pattern, used when `pattern_file` is not set
    pub pattern: String,
    /// Relative paths are resolved against the directory of the config file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern_file: Option<PathBuf>,
    /// Translation applied to the seed pattern
    #[serde(default)]
    pub offset: (i64, i64),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Print born/died cells along with each frame
    pub show_delta: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Text,
    Json,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            simulation: SimulationConfig {
                generations: 20,
                tick_interval_ms: 200,
                stop_when_stable: true,
            },
            input: InputConfig {
                pattern: "glider".to_string(),
                pattern_file: None,
                offset: (0, 0),
            },
            output: OutputConfig {
                format: OutputFormat::Text,
                show_delta: false,
            },
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let mut settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        if let Some(file) = settings.input.pattern_file.take() {
            settings.input.pattern_file = Some(match path.parent() {
                Some(config_dir) if file.is_relative() => config_dir.join(file),
                _ => file,
            });
        }

        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file(&self, path: &PathBuf) -> Result<()> {
        let content = serde_yaml::to_string(self)
            .context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        if self.simulation.generations == 0 {
            anyhow::bail!("Number of generations must be positive");
        }

        match &self.input.pattern_file {
            Some(file) if !file.exists() => {
                anyhow::bail!("Pattern file does not exist: {}", file.display());
            }
            Some(_) => {}
            None if find_pattern(&self.input.pattern).is_none() => {
                anyhow::bail!("Unknown pattern: {}", self.input.pattern);
            }
            None => {}
        }

        Ok(())
    }

    /// The seed live-cell set, translated by the configured offset
    pub fn initial_cells(&self) -> Result<LiveCells> {
        let cells = match &self.input.pattern_file {
            Some(file) => load_pattern_from_file(file)?,
            None => find_pattern(&self.input.pattern)
                .with_context(|| format!("Unknown pattern: {}", self.input.pattern))?
                .live_cells(),
        };

        let (dx, dy) = self.input.offset;
        cells
            .into_iter()
            .map(|cell| {
                cell.checked_offset(dx, dy).with_context(|| {
                    format!("Offset ({}, {}) moves cell {} outside the grid", dx, dy, cell)
                })
            })
            .collect()
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(generations) = cli_overrides.generations {
            self.simulation.generations = generations;
        }
        if let Some(interval) = cli_overrides.tick_interval_ms {
            self.simulation.tick_interval_ms = interval;
        }
        if let Some(ref pattern) = cli_overrides.pattern {
            self.input.pattern = pattern.clone();
            self.input.pattern_file = None;
        }
        if let Some(ref pattern_file) = cli_overrides.pattern_file {
            self.input.pattern_file = Some(pattern_file.clone());
        }
        if let Some(format) = cli_overrides.format {
            self.output.format = format;
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub generations: Option<u64>,
    pub tick_interval_ms: Option<u64>,
    pub pattern: Option<String>,
    pub pattern_file: Option<PathBuf>,
    pub format: Option<OutputFormat>,
}
