//! `sqlflow-model load <uri>` – load a model and print it as JSON.

use anyhow::{Context, Result};
use sqlflow_model_core::{model, Datasource};

/// Load the model at `uri` and print it as pretty JSON.
pub fn run_load(uri: &str, datasource: Option<&Datasource>) -> Result<()> {
    let loaded = model::load(uri, datasource)
        .with_context(|| format!("load model from {uri}"))?;
    let json = serde_json::to_string_pretty(&loaded).context("serialize model")?;
    println!("{json}");
    Ok(())
}
