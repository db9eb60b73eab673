use std::fs;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;

use prospect_core::analysis::{RateAxis, VolumeSweepSpec, sweep_grid, sweep_volume};
use prospect_core::config::SimulationConfig;
use prospect_core::model::FunnelStage;
use prospect_core::simulation::simulate;

mod logging;

use logging::init_logging;

#[derive(Parser, Debug)]
#[command(name = "prospect")]
#[command(about = "Prospecting cost simulator - point estimates and sensitivity sweeps")]
struct Args {
    /// Path to a simulation config JSON (defaults to the reference scenario)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a point simulation and print the itemized cost breakdown
    Simulate,
    /// Sweep total cost over lead volume for variations of one stage's rate
    SweepVolume {
        /// Which funnel stage's rate to vary
        #[arg(long, value_enum, default_value_t = StageArg::Response)]
        stage: StageArg,
    },
    /// Sweep cost, CPA, and bookings over qualification x booking rates
    SweepGrid,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum StageArg {
    Response,
    Qualification,
    Booking,
}

impl From<StageArg> for FunnelStage {
    fn from(stage: StageArg) -> Self {
        match stage {
            StageArg::Response => FunnelStage::Response,
            StageArg::Qualification => FunnelStage::Qualification,
            StageArg::Booking => FunnelStage::Booking,
        }
    }
}

fn load_config(path: Option<&PathBuf>) -> color_eyre::Result<SimulationConfig> {
    match path {
        Some(path) => {
            tracing::info!("loading config from {}", path.display());
            let contents = fs::read_to_string(path)?;
            Ok(serde_json::from_str(&contents)?)
        }
        None => {
            tracing::info!("no config given, using the reference scenario");
            Ok(SimulationConfig::reference())
        }
    }
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> color_eyre::Result<()> {
    let output = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{output}");
    Ok(())
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    init_logging(&args.log_level)?;

    let config = load_config(args.config.as_ref())?;

    match args.command {
        Command::Simulate => {
            let result = simulate(&config)?;
            tracing::info!(
                total_cost = result.total_cost,
                booked = result.counts.booked,
                "simulation complete"
            );
            let breakdown = result.breakdown();
            print_json(
                &serde_json::json!({ "result": result, "breakdown": breakdown }),
                args.pretty,
            )?;
        }
        Command::SweepVolume { stage } => {
            let spec = VolumeSweepSpec::for_stage(stage.into());
            let sweep = sweep_volume(&config, &spec)?;
            tracing::info!(series = sweep.series.len(), "volume sweep complete");
            print_json(&sweep, args.pretty)?;
        }
        Command::SweepGrid => {
            let sweep = sweep_grid(
                &config,
                &RateAxis::qualification_reference(),
                &RateAxis::booking_reference(),
            )?;
            tracing::info!(
                rows = sweep.total_cost.rows(),
                cols = sweep.total_cost.cols(),
                "grid sweep complete"
            );
            let summary = sweep.summary();
            print_json(
                &serde_json::json!({ "sweep": sweep, "summary": summary }),
                args.pretty,
            )?;
        }
    }

    Ok(())
}
