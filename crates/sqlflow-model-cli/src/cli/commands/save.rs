//! `sqlflow-model save <uri> --estimator <e> --meta <file>` – save a model.

use anyhow::{Context, Result};
use sqlflow_model_core::{Datasource, EstimatorType, Metadata, Model};
use std::fs;
use std::path::Path;

/// Reads the metadata JSON object from `meta_path`.
pub(crate) fn read_metadata(meta_path: &Path) -> Result<Metadata> {
    let text = fs::read_to_string(meta_path)
        .with_context(|| format!("read metadata: {}", meta_path.display()))?;
    let meta = Metadata::from_json_str(&text)
        .with_context(|| format!("parse metadata: {}", meta_path.display()))?;
    Ok(meta)
}

/// Read metadata from `meta_path`, build the model and save it to `uri`.
pub fn run_save(
    uri: &str,
    estimator: EstimatorType,
    meta_path: &Path,
    datasource: Option<&Datasource>,
    working_dir: &Path,
) -> Result<()> {
    let meta = read_metadata(meta_path)?;
    tracing::debug!(keys = meta.len(), "read model metadata");
    let model = Model::new(estimator, meta, working_dir);
    model
        .save(uri, datasource)
        .with_context(|| format!("save {estimator} model to {uri}"))?;
    println!("Saved {estimator} model to {uri}");
    Ok(())
}
