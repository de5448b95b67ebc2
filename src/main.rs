//! Binary entry point for essential.
//!
//! This binary provides the CLI interface for the essential pipeline.

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(missing_docs)]
// Allow print_stderr in main binary for CLI output
#![allow(clippy::print_stderr)]
#![allow(clippy::print_stdout)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::multiple_crate_versions)]

use clap::{Parser, Subcommand, ValueEnum};
use essential::config::FrameworkConfig;
use essential::observability::{self, InitOptions};
use essential::{EssentialFramework, Problem};
use std::path::Path;
use std::process::ExitCode;

/// Essential - think, create, evolve.
#[derive(Parser)]
#[command(name = "essential")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file.
    #[arg(short, long, global = true, env = "ESSENTIAL_CONFIG_PATH")]
    config: Option<String>,

    /// Enable metrics. Prometheus text is printed to stderr on exit whenever
    /// metrics are enabled, by this flag, the config file or the environment.
    #[arg(long, global = true)]
    metrics: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands.
#[derive(Subcommand)]
enum Commands {
    /// Run a problem through the pipeline.
    Solve {
        /// The problem. Use `-` to read it from stdin.
        problem: String,

        /// Parse the problem as a JSON value instead of plain text.
        #[arg(long)]
        json: bool,

        /// Print every intermediate artifact, not just the creation.
        #[arg(long)]
        trace: bool,

        /// Output format.
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Manage configuration.
    Config {
        /// Show current configuration.
        #[arg(long)]
        show: bool,
    },
}

/// Output formats.
#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Human-readable text.
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Main entry point.
fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            return ExitCode::FAILURE;
        },
    };

    let observability = match observability::init_from_config(
        &config.observability,
        InitOptions {
            verbose: cli.verbose,
            metrics: cli.metrics,
        },
    ) {
        Ok(handle) => handle,
        Err(e) => {
            eprintln!("Failed to initialize observability: {e}");
            return ExitCode::FAILURE;
        },
    };

    let result = run_command(cli.command, &config);

    if let Some(metrics) = observability.metrics() {
        eprint!("{}", metrics.render());
    }

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        },
    }
}

/// Runs the selected command.
fn run_command(
    command: Commands,
    config: &FrameworkConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Solve {
            problem,
            json,
            trace,
            format,
        } => cmd_solve(config, problem, json, trace, format),

        Commands::Config { show } => cmd_config(config, show),
    }
}

/// Loads configuration.
fn load_config(path: Option<&str>) -> Result<FrameworkConfig, Box<dyn std::error::Error>> {
    if let Some(config_path) = path.filter(|p| !p.trim().is_empty()) {
        return FrameworkConfig::load_from_file(Path::new(config_path))
            .map_err(std::convert::Into::into);
    }

    FrameworkConfig::load_default().map_err(std::convert::Into::into)
}

/// Reads the problem argument, resolving `-` to stdin.
fn read_problem(raw: String, json: bool) -> essential::Result<Problem> {
    if raw == "-" {
        Problem::read_from(std::io::stdin().lock(), json)
    } else {
        Problem::from_input(raw, json)
    }
}

/// Solve command.
fn cmd_solve(
    config: &FrameworkConfig,
    problem: String,
    json: bool,
    trace: bool,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let problem = read_problem(problem, json)?;
    let framework = EssentialFramework::new(config);

    if trace {
        let solution = framework.solve_detailed(&problem);
        match format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&solution)?),
            OutputFormat::Text => {
                println!("Problem ({}): {}", problem.kind(), solution.problem);
                println!("Patterns: {}", solution.understanding.patterns.join(" "));
                println!("Insights: {}", solution.insights.len());
                for insight in &solution.insights {
                    println!("  {insight}");
                }
                println!("Concepts: {}", solution.thought.concept.join(" "));
                println!("Implications: {}", solution.thought.implications.len());
                println!("Innovations: {}", solution.innovation.len());
                println!("Creation: {}", solution.creation);
                println!("Evolution: {}", solution.evolution);
            },
        }
        return Ok(());
    }

    let creation = framework.solve(&problem);
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&creation)?),
        OutputFormat::Text => {
            println!("Creation:");
            println!("  novelty: {}", creation.novelty);
            println!("  value: {}", creation.value);
            println!("  feasibility: {}", creation.feasibility);
        },
    }

    Ok(())
}

/// Config command.
fn cmd_config(config: &FrameworkConfig, show: bool) -> Result<(), Box<dyn std::error::Error>> {
    if show {
        println!("{}", toml::to_string_pretty(config)?);
    } else {
        println!("Use --show to display current configuration");
    }
    Ok(())
}
