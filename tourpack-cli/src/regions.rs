//! Regions command implementation.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use tourpack_core::Catalog;

use crate::catalog_file::CatalogFile;
use crate::fs::require_existing;
use crate::{ARG_CATALOGUE, CliError, ENV_REGIONS_CATALOGUE};

/// CLI arguments for the `regions` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(about = "List region identifiers, one per line")]
#[ortho_config(prefix = "TOURPACK")]
pub(crate) struct RegionsArgs {
    /// Path to a JSON catalogue file.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) catalogue: Option<Utf8PathBuf>,
}

impl RegionsArgs {
    pub(crate) fn into_config(self) -> Result<RegionsConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RegionsConfig::try_from(merged)
    }
}

/// Resolved `regions` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RegionsConfig {
    pub(crate) catalogue: Utf8PathBuf,
}

impl TryFrom<RegionsArgs> for RegionsConfig {
    type Error = CliError;

    fn try_from(args: RegionsArgs) -> Result<Self, Self::Error> {
        let catalogue = args.catalogue.ok_or(CliError::MissingArgument {
            field: ARG_CATALOGUE,
            env: ENV_REGIONS_CATALOGUE,
        })?;
        Ok(Self { catalogue })
    }
}

pub(crate) fn run_regions(args: RegionsArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_regions_with(args, &mut stdout)
}

pub(crate) fn run_regions_with(args: RegionsArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    require_existing(&config.catalogue, ARG_CATALOGUE)?;
    let catalog = CatalogFile::load(&config.catalogue)?;
    write_regions(writer, &catalog)
}

fn write_regions(writer: &mut dyn Write, catalog: &Catalog) -> Result<(), CliError> {
    for region in catalog.regions() {
        writeln!(writer, "{}", region.id).map_err(CliError::WriteOutput)?;
    }
    Ok(())
}
