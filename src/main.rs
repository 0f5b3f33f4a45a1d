//! Command-line entry point for the INKK rating tool
//!
//! Collects raw match lines (from a file or stdin) and the two evaluation
//! scalars, runs the parse-then-evaluate pipeline once, and renders the
//! ranked table. One synchronous request/response; nothing is persisted
//! between runs.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use inkk::config::EvaluationConfig;
use inkk::{evaluate_text, output};
use std::io::Read;
use std::path::PathBuf;
use tracing::{debug, info};

/// INKK Evaluation System - pot-based match rating and ranking
#[derive(Parser)]
#[command(
    name = "inkk",
    version,
    about = "Rank players from plain-text match results",
    long_about = "Reads match lines of the form '<Player1> <Score1>-<Score2> <Player2>', \
                 folds them through a pot-based redistribution scheme in input order, \
                 and prints the resulting standings."
)]
struct Args {
    /// Input file with one match per line (reads stdin when omitted)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Fraction of rating and pot withdrawn per match (0.0 to 1.0)
    #[arg(short, long, value_name = "FACTOR")]
    factor: Option<f64>,

    /// Starting pot value, as entered in the scale box (integer)
    #[arg(short, long, value_name = "POT")]
    pot: Option<String>,

    /// Configuration file path (TOML format)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Table)]
    format: Format,

    /// Override log level (trace, debug, info, warn, error)
    #[arg(short, long, value_name = "LEVEL", default_value = "warn")]
    log_level: String,

    /// Enable debug mode with verbose logging
    #[arg(short, long)]
    debug: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Table,
    Json,
}

/// Initialize structured logging with the configured level
fn init_logging(log_level: &str) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

/// Load and merge configuration from environment, file, and CLI arguments
fn load_config(args: &Args) -> Result<EvaluationConfig> {
    let mut config = if let Some(config_path) = &args.config {
        debug!("loading configuration from {}", config_path.display());
        EvaluationConfig::from_file(config_path)?
    } else {
        EvaluationConfig::from_env()?
    };

    // CLI flags win over environment and file values.
    if let Some(factor) = args.factor {
        config.factor = factor;
    }
    if let Some(pot) = &args.pot {
        config.start_pot = EvaluationConfig::parse_pot(pot)?;
    }

    config.validate()?;
    Ok(config)
}

/// Read the raw match text from the input file or stdin
fn read_input(args: &Args) -> Result<String> {
    match &args.input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file: {}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            Ok(text)
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.debug { "debug" } else { &args.log_level };
    init_logging(log_level)?;

    // Configuration errors short-circuit before any line is parsed.
    let config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };
    info!(factor = config.factor, start_pot = config.start_pot, "evaluating");

    let text = read_input(&args)?;

    match evaluate_text(&text, config) {
        Ok(standings) => match args.format {
            Format::Table => print!("{}", output::render_table(&standings)),
            Format::Json => println!("{}", output::render_json(&standings)?),
        },
        Err(errors) => {
            for error in &errors {
                eprintln!("{}", error);
            }
            std::process::exit(1);
        }
    }

    Ok(())
}
