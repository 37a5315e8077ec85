//! Command-line interface for selecting tour packages from catalogue files.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod catalog_file;
mod error;
mod fs;
mod regions;
mod select;

pub use error::CliError;

use regions::{RegionsArgs, run_regions};
use select::{SelectArgs, run_select};

pub(crate) const ARG_CATALOGUE: &str = "catalogue";
pub(crate) const ARG_REGION: &str = "region";
pub(crate) const ARG_MAX_DAYS: &str = "max-days";
pub(crate) const ARG_MAX_BUDGET: &str = "max-budget";
pub(crate) const ARG_STRATEGY: &str = "strategy";
pub(crate) const ENV_REGIONS_CATALOGUE: &str = "TOURPACK_CMDS_REGIONS_CATALOGUE";
pub(crate) const ENV_SELECT_CATALOGUE: &str = "TOURPACK_CMDS_SELECT_CATALOGUE";
pub(crate) const ENV_SELECT_REGION: &str = "TOURPACK_CMDS_SELECT_REGION";

/// Run the Tourpack CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments, configuration or the catalogue are
/// invalid, or when output cannot be written.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Regions(args) => run_regions(args),
        Command::Select(args) => run_select(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "tourpack",
    about = "Select culturally valuable tour packages from a catalogue",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List the regions offered by a catalogue.
    Regions(RegionsArgs),
    /// Choose a package of tours for one region.
    Select(SelectArgs),
}

#[cfg(test)]
mod tests;
