//! Command line driver for the Game of Life engine

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use life_engine::{
    config::{CliOverrides, OutputFormat, Settings},
    driver::{RunOutcome, Simulation},
    game_of_life::{
        create_example_patterns, find_pattern, load_pattern_from_file, GenerationDelta,
        LifeEngine, LiveCells, PATTERNS,
    },
    utils::{ColorOutput, WorldFormatter},
};
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;

#[derive(Parser)]
#[command(name = "life_engine")]
#[command(about = "Conway's Game of Life on an unbounded grid")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a simulation, printing each generation
    Run {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Built-in pattern to seed with (overrides config)
        #[arg(short, long)]
        pattern: Option<String>,

        /// Pattern file to seed with (overrides config)
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Number of generations (overrides config)
        #[arg(short, long)]
        generations: Option<u64>,

        /// Milliseconds between generations (overrides config)
        #[arg(short, long)]
        interval_ms: Option<u64>,

        /// Emit one JSON object per generation
        #[arg(long)]
        json: bool,

        /// Only print the final summary
        #[arg(short, long)]
        quiet: bool,
    },

    /// Compute a single generation and print the born/died cells
    Step {
        /// Built-in pattern
        #[arg(short, long, default_value = "glider")]
        pattern: String,

        /// Pattern file (takes precedence over --pattern)
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Print the delta as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the built-in patterns
    Patterns,

    /// Create a default configuration and example pattern files
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("life_engine=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { config, pattern, file, generations, interval_ms, json, quiet } => {
            let overrides = CliOverrides {
                generations,
                tick_interval_ms: interval_ms,
                pattern,
                pattern_file: file,
                format: json.then_some(OutputFormat::Json),
            };
            run_command(config, overrides, quiet)
        }
        Commands::Step { pattern, file, json } => step_command(pattern, file, json),
        Commands::Patterns => patterns_command(),
        Commands::Setup { directory, force } => setup_command(directory, force),
    }
}

fn load_settings(config_path: &PathBuf) -> Result<Settings> {
    if config_path.exists() {
        Settings::from_file(config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))
    } else {
        println!("{}", ColorOutput::warning(&format!(
            "Config file {} not found, using defaults", config_path.display()
        )));
        Ok(Settings::default())
    }
}

fn run_command(config_path: PathBuf, overrides: CliOverrides, quiet: bool) -> Result<()> {
    let mut settings = load_settings(&config_path)?;
    settings.merge_with_cli(&overrides);
    settings.validate().context("Configuration validation failed")?;

    let mut simulation = Simulation::from_settings(&settings)
        .context("Failed to create simulation")?;

    let format = settings.output.format;
    let show_delta = settings.output.show_delta;

    if !quiet && format == OutputFormat::Text {
        println!("{}", ColorOutput::info("Generation 0"));
        println!("{}", WorldFormatter::format_world_compact(simulation.live_cells()));
    }

    let start_time = Instant::now();
    let mut write_error = None;
    let report = simulation.run(
        settings.simulation.generations,
        |generation: u64, delta: &GenerationDelta, live: &LiveCells| {
            if quiet || write_error.is_some() {
                return;
            }
            match format {
                OutputFormat::Text => {
                    println!("{}", WorldFormatter::format_frame(generation, delta, live, show_delta));
                }
                OutputFormat::Json => match WorldFormatter::format_frame_json(generation, delta, live) {
                    Ok(line) => println!("{}", line),
                    Err(e) => write_error = Some(e),
                },
            }
        },
    );

    if let Some(e) = write_error {
        return Err(e.context("Failed to serialize generation"));
    }

    info!(elapsed_ms = start_time.elapsed().as_millis() as u64, "run complete");

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string(&report)?);
    } else if report.outcome == RunOutcome::Extinct {
        println!("{}", ColorOutput::warning(&report.to_string()));
    } else {
        println!("{}", ColorOutput::success(&report.to_string()));
    }

    Ok(())
}

fn step_command(pattern: String, file: Option<PathBuf>, json: bool) -> Result<()> {
    let live = match file {
        Some(path) => load_pattern_from_file(&path)?,
        None => find_pattern(&pattern)
            .with_context(|| format!("Unknown pattern: {}", pattern))?
            .live_cells(),
    };

    let delta = LifeEngine::iterate(&live);

    if json {
        println!("{}", serde_json::to_string_pretty(&serde_json::json!({
            "born": delta.born_sorted(),
            "died": delta.died_sorted(),
        }))?);
        return Ok(());
    }

    println!("{}", ColorOutput::info("Current generation:"));
    println!("{}", WorldFormatter::format_world_with_coords(&live));
    println!("{}", WorldFormatter::format_delta(&delta));

    let mut next = live;
    delta.apply_to(&mut next);
    println!("\n{}", ColorOutput::info("Next generation:"));
    println!("{}", WorldFormatter::format_world_with_coords(&next));

    Ok(())
}

fn patterns_command() -> Result<()> {
    println!("{}", ColorOutput::info("Built-in patterns:"));
    for pattern in PATTERNS {
        println!("  {:12} {:2} cells  {}", pattern.name, pattern.cells.len(), pattern.description);
    }
    Ok(())
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("Setting up project structure..."));

    let config_dir = directory.join("config");
    let patterns_dir = directory.join("patterns");

    for dir in [&config_dir, &patterns_dir] {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;
    }

    let config_path = config_dir.join("default.yaml");
    if !config_path.exists() || force {
        Settings::default().to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!("Skipped: {} (already exists)", config_path.display());
    }

    create_example_patterns(&patterns_dir)
        .context("Failed to create example patterns")?;
    println!("Created example patterns in: {}", patterns_dir.display());

    // A config seeded from a pattern file instead of a built-in name
    let mut file_config = Settings::default();
    file_config.simulation.generations = 200;
    file_config.simulation.tick_interval_ms = 50;
    // Resolved relative to the config file's directory
    file_config.input.pattern_file = Some(PathBuf::from("../patterns/r-pentomino.txt"));
    file_config.to_file(&config_dir.join("r-pentomino.yaml"))?;

    println!("\n{}", ColorOutput::success("Setup complete!"));
    println!("\nNext steps:");
    println!("1. Edit configuration files in {}", config_dir.display());
    println!("2. Add your own patterns to {}", patterns_dir.display());
    println!("3. Run: cargo run -- run --config config/default.yaml");

    Ok(())
}
