//! CLI for saving and loading SQLFlow models.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use sqlflow_model_core::config::{self, ModelStoreConfig};
use sqlflow_model_core::EstimatorType;
use std::path::PathBuf;

use commands::{run_drivers, run_load, run_parse_uri, run_save};

/// Top-level CLI for the SQLFlow model store.
#[derive(Debug, Parser)]
#[command(name = "sqlflow-model")]
#[command(
    about = "Save and load SQLFlow trained models by <driver>://<path> URI",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Split a model URI into driver and path.
    ParseUri {
        /// Model URI, e.g. sqlfs://mydb/mytable.
        uri: String,
    },

    /// Save a model described by a metadata JSON file.
    Save {
        /// Destination URI, e.g. sqlfs://mydb/mytable or file:///tmp/model.
        uri: String,
        /// Estimator that trained the model: tensorflow or xgboost.
        #[arg(long, short = 'e')]
        estimator: EstimatorType,
        /// Path to a JSON object with the training metadata.
        #[arg(long, value_name = "FILE")]
        meta: PathBuf,
        /// Connection DSN (required by sqlfs). Defaults to the configured datasource.
        #[arg(long, value_name = "DSN")]
        datasource: Option<String>,
        /// Working directory recorded on the model (default: config, then current dir).
        #[arg(long, value_name = "DIR")]
        working_dir: Option<PathBuf>,
    },

    /// Load a model and print it as JSON.
    Load {
        /// Source URI.
        uri: String,
        /// Connection DSN (required by sqlfs). Defaults to the configured datasource.
        #[arg(long, value_name = "DSN")]
        datasource: Option<String>,
    },

    /// List the registered storage drivers.
    Drivers,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        cli.command.run(config::load_or_init)
    }

    /// Dispatch the command. `load_config` is only called by commands that
    /// read configuration (`save`, `load`).
    pub fn run(self, load_config: impl FnOnce() -> Result<ModelStoreConfig>) -> Result<()> {
        match self {
            CliCommand::ParseUri { uri } => run_parse_uri(&uri)?,
            CliCommand::Save {
                uri,
                estimator,
                meta,
                datasource,
                working_dir,
            } => {
                let cfg = load_config()?;
                tracing::debug!("loaded config: {:?}", cfg);
                let datasource = cfg.resolve_datasource(datasource.as_deref());
                let working_dir = cfg.resolve_working_dir(working_dir.as_deref())?;
                run_save(&uri, estimator, &meta, datasource.as_ref(), &working_dir)?;
            }
            CliCommand::Load { uri, datasource } => {
                let cfg = load_config()?;
                tracing::debug!("loaded config: {:?}", cfg);
                let datasource = cfg.resolve_datasource(datasource.as_deref());
                run_load(&uri, datasource.as_ref())?;
            }
            CliCommand::Drivers => run_drivers(),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
