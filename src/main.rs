//! # Skirmish Main Entry Point
//!
//! Reads the run configuration, searches for encounters, and writes the report.

use clap::Parser;
use log::{error, info};
use skirmish::{
    generation::utils, write_to_file, Bestiary, EncounterGenerator, GenerationConfig,
    LoadOptions, OutputFormat, Report, SkirmishResult,
};
use std::path::PathBuf;
#[cfg(feature = "dev-tools")]
use tracing::Level;

/// Command line arguments for the Skirmish encounter builder.
///
/// Flags override values from `--config`.
#[derive(Parser, Debug)]
#[command(name = "skirmish")]
#[command(about = "Builds balanced combat encounters for a party of adventurers")]
#[command(version)]
struct Args {
    /// JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Adventurer level (1-20)
    #[arg(short, long)]
    level: Option<i32>,

    /// Number of adventurers (1-1000)
    #[arg(short = 'n', long)]
    party_size: Option<u32>,

    /// Trivial encounters to generate
    #[arg(long)]
    trivial: Option<u32>,

    /// Low encounters to generate
    #[arg(long)]
    low: Option<u32>,

    /// Moderate encounters to generate
    #[arg(long)]
    moderate: Option<u32>,

    /// Severe encounters to generate
    #[arg(long)]
    severe: Option<u32>,

    /// Extreme encounters to generate
    #[arg(long)]
    extreme: Option<u32>,

    /// Maximum distinct monster levels per encounter
    #[arg(long)]
    max_unique: Option<u32>,

    /// Maximum monsters per encounter
    #[arg(long)]
    max_total: Option<u32>,

    /// Bestiary JSON used to name monsters
    #[arg(short, long)]
    bestiary: Option<PathBuf>,

    /// Allow unique creatures in filled encounters
    #[arg(long)]
    include_unique: bool,

    /// Random seed for reproducible picks
    #[arg(short, long)]
    seed: Option<u64>,

    /// Report format
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Write the report to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

impl Args {
    /// Builds the run configuration: file values first, then flag overrides.
    fn to_config(&self) -> SkirmishResult<GenerationConfig> {
        let mut config = match &self.config {
            Some(path) => GenerationConfig::from_json_file(path)?,
            None => GenerationConfig::new(),
        };

        if let Some(level) = self.level {
            config.party_level = level;
        }
        if let Some(size) = self.party_size {
            config.party_size = size;
        }
        if let Some(count) = self.trivial {
            config.battles.trivial = count;
        }
        if let Some(count) = self.low {
            config.battles.low = count;
        }
        if let Some(count) = self.moderate {
            config.battles.moderate = count;
        }
        if let Some(count) = self.severe {
            config.battles.severe = count;
        }
        if let Some(count) = self.extreme {
            config.battles.extreme = count;
        }
        if let Some(max) = self.max_unique {
            config.max_unique_monsters = max;
        }
        if let Some(max) = self.max_total {
            config.max_total_monsters = max;
        }
        if let Some(path) = &self.bestiary {
            config.bestiary_path = Some(path.clone());
        }
        if self.include_unique {
            config.include_unique = true;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(format) = self.format {
            config.format = format;
        }
        if let Some(path) = &self.output {
            config.output_path = Some(path.clone());
        }

        config.validate()?;
        Ok(config)
    }
}

fn main() -> SkirmishResult<()> {
    let args = Args::parse();

    initialize_logging(&args.log_level)?;

    info!("Starting Skirmish v{}", skirmish::VERSION);

    let config = match args.to_config() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            return Err(e);
        }
    };

    run(&config)
}

/// Initializes the logging system based on the specified log level.
fn initialize_logging(log_level: &str) -> SkirmishResult<()> {
    #[cfg(feature = "dev-tools")]
    {
        let level = match log_level.to_lowercase().as_str() {
            "error" => Level::ERROR,
            "warn" => Level::WARN,
            "info" => Level::INFO,
            "debug" => Level::DEBUG,
            "trace" => Level::TRACE,
            _ => Level::INFO,
        };

        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_target(false)
            .init();
    }

    #[cfg(not(feature = "dev-tools"))]
    {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
            .format_target(false)
            .init();
    }

    Ok(())
}

/// Runs one generation: search, pick, fill, render, write.
fn run(config: &GenerationConfig) -> SkirmishResult<()> {
    let party = config.party()?;
    info!(
        "Searching encounters for {} level {} adventurers",
        party.size(),
        party.level()
    );

    let generator = EncounterGenerator::new(
        party,
        config.max_unique_monsters,
        config.max_total_monsters,
    );

    let bestiary = match &config.bestiary_path {
        Some(path) => Some(Bestiary::load(
            path,
            LoadOptions {
                include_unique: config.include_unique,
            },
        )?),
        None => None,
    };

    let mut rng = utils::create_rng(config);
    let report = Report::build(&generator, &config.battles, bestiary.as_ref(), &mut rng);
    let rendered = report.render(config.format)?;

    match &config.output_path {
        Some(path) => {
            write_to_file(path, &rendered)?;
            info!(
                "Wrote {} encounters to {}",
                report.num_entries(),
                path.display()
            );
        }
        None => print!("{}", rendered),
    }

    Ok(())
}
