//! Command-line exporter for Atlas of Group Representations data.

mod cli;
mod commands;
mod telemetry;

use anyhow::{Context, Result};
use atlas_core::ExportConfig;
use atlas_reps::{LinearRep, PermutationRep};
use clap::Parser;
use cli::{Cli, Command};
use tracing::info;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = match &cli.config {
        Some(path) => ExportConfig::from_json_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => ExportConfig::default(),
    };

    telemetry::init_telemetry(&config.log_filter)?;

    match &cli.command {
        Command::Maximal { file, select, output } => {
            commands::run_maximal(file, select, output, &config)?;
        }
        Command::Linear { file, output } => {
            commands::run_representation::<LinearRep>(file, output, &config)?;
        }
        Command::Permutation { file, output } => {
            commands::run_representation::<PermutationRep>(file, output, &config)?;
        }
        Command::Check { file } => {
            let checked = commands::run_check(file)?;
            info!("Checked {} programs in {}", checked, file.display());
        }
    }

    Ok(())
}
