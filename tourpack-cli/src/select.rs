//! Select command implementation.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use log::debug;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use tourpack_core::{Constraints, Package, RegionId, SelectionRequest, Selector};
use tourpack_select::SelectorKind;

use crate::catalog_file::CatalogFile;
use crate::fs::require_existing;
use crate::{
    ARG_CATALOGUE, ARG_MAX_BUDGET, ARG_MAX_DAYS, ARG_REGION, ARG_STRATEGY, CliError,
    ENV_SELECT_CATALOGUE, ENV_SELECT_REGION,
};

/// CLI arguments for the `select` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Choose the tours of one region that together cover the most \
                 cultural value without exceeding the day and budget \
                 ceilings. Shared attractions are counted once. The package \
                 is printed as JSON.",
    about = "Select a tour package for a region"
)]
#[ortho_config(prefix = "TOURPACK")]
pub(crate) struct SelectArgs {
    /// Path to a JSON catalogue file.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) catalogue: Option<Utf8PathBuf>,
    /// Region to select tours from.
    #[arg(long = ARG_REGION, value_name = "id")]
    #[serde(default)]
    pub(crate) region: Option<String>,
    /// Maximum total duration in days; unbounded when omitted.
    #[arg(long = ARG_MAX_DAYS, value_name = "days")]
    #[serde(default)]
    pub(crate) max_days: Option<u32>,
    /// Maximum total cost; unbounded when omitted.
    #[arg(long = ARG_MAX_BUDGET, value_name = "amount")]
    #[serde(default)]
    pub(crate) max_budget: Option<u64>,
    /// Selection strategy: `exact` (default) or `greedy`.
    #[arg(long = ARG_STRATEGY, value_name = "name")]
    #[serde(default)]
    pub(crate) strategy: Option<String>,
}

impl SelectArgs {
    pub(crate) fn into_config(self) -> Result<SelectConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        SelectConfig::try_from(merged)
    }
}

/// Resolved `select` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SelectConfig {
    /// Path to the catalogue file.
    pub(crate) catalogue: Utf8PathBuf,
    /// Request handed to the selector.
    pub(crate) request: SelectionRequest,
    /// Strategy used to answer the request.
    pub(crate) strategy: SelectorKind,
}

impl TryFrom<SelectArgs> for SelectConfig {
    type Error = CliError;

    fn try_from(args: SelectArgs) -> Result<Self, Self::Error> {
        let catalogue = args.catalogue.ok_or(CliError::MissingArgument {
            field: ARG_CATALOGUE,
            env: ENV_SELECT_CATALOGUE,
        })?;
        let region = args.region.ok_or(CliError::MissingArgument {
            field: ARG_REGION,
            env: ENV_SELECT_REGION,
        })?;
        let strategy = match args.strategy {
            Some(name) => name.parse::<SelectorKind>()?,
            None => SelectorKind::default(),
        };
        let constraints = Constraints {
            max_days: args.max_days,
            max_budget: args.max_budget,
        };
        Ok(Self {
            catalogue,
            request: SelectionRequest::new(region).with_constraints(constraints),
            strategy,
        })
    }
}

/// Document printed by the `select` command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct SelectionReport {
    pub(crate) region: RegionId,
    pub(crate) strategy: &'static str,
    pub(crate) constraints: Constraints,
    pub(crate) package: Package,
}

pub(crate) fn run_select(args: SelectArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_select_with(args, &mut stdout)
}

pub(crate) fn run_select_with(args: SelectArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    let report = execute_select(&config)?;
    write_report(writer, &report)
}

pub(crate) fn execute_select(config: &SelectConfig) -> Result<SelectionReport, CliError> {
    require_existing(&config.catalogue, ARG_CATALOGUE)?;
    let catalog = CatalogFile::load(&config.catalogue)?;
    if catalog.region(&config.request.region).is_none() {
        debug!(
            "region {} not present in {}; selection will be empty",
            config.request.region, config.catalogue
        );
    }
    let package = config.strategy.select(&catalog, &config.request);
    Ok(SelectionReport {
        region: config.request.region.clone(),
        strategy: config.strategy.name(),
        constraints: config.request.constraints,
        package,
    })
}

fn write_report(writer: &mut dyn Write, report: &SelectionReport) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(report).map_err(CliError::SerializeOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<SelectConfig, CliError> {
    let merged = SelectArgs::merge_from_layers(layers).map_err(CliError::from)?;
    SelectConfig::try_from(merged)
}
