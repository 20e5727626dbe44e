//! Horizon CLI - explore AGI / ASI timeline projections from the terminal
//!
//! This CLI lets analysts:
//! - Inspect the lever schema and the scenario catalogue
//! - Project milestone years and a scenario for a lever mix
//! - Sample the capability trajectory
//! - Check which model calibration is in effect

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use horizon_core::HorizonModel;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;
mod output;

use commands::{levers, project, scenarios, settings, trajectory, LeverArgs};
use error::CliResult;
use output::OutputFormat;

/// Horizon CLI application
#[derive(Parser)]
#[command(name = "horizon")]
#[command(about = "Horizon - lever-driven AGI / ASI timeline projections", long_about = None)]
#[command(version)]
struct Cli {
    /// Model configuration file
    #[arg(short, long, global = true, env = "HORIZON_CONFIG")]
    config: Option<String>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    output: OutputFormat,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand)]
enum Commands {
    /// List the lever schema
    Levers,

    /// List scenarios and the conditions that trigger them
    Scenarios,

    /// Project milestone years and scenario for a lever mix
    Project(LeverArgs),

    /// Print the capability trajectory for a lever mix
    Trajectory(trajectory::TrajectoryArgs),

    /// Show the effective model configuration
    Config,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logs go to stderr so JSON output stays parseable
    let level = if cli.verbose { "debug" } else { "info" };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| level.into());

    if cli.json_logs {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .without_time()
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::print_error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> CliResult<()> {
    let model_config = config::load(cli.config.as_deref())?;
    let model = HorizonModel::new(model_config)?;

    match cli.command {
        Commands::Levers => levers::execute(cli.output),
        Commands::Scenarios => scenarios::execute(cli.output),
        Commands::Project(args) => project::execute(&args, &model, cli.output),
        Commands::Trajectory(args) => trajectory::execute(&args, &model, cli.output),
        Commands::Config => settings::execute(model.config(), cli.config.as_deref(), cli.output),
    }
}
