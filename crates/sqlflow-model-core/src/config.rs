use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::datasource::Datasource;

/// Global configuration loaded from `~/.config/sqlflow/model.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelStoreConfig {
    /// DSN used for `sqlfs` when the caller does not pass one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_datasource: Option<String>,
    /// Working directory recorded on new models (None = process cwd).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub working_dir: Option<PathBuf>,
}

impl ModelStoreConfig {
    /// The explicit datasource if given, else the configured default.
    pub fn resolve_datasource(&self, explicit: Option<&str>) -> Option<Datasource> {
        explicit
            .or(self.default_datasource.as_deref())
            .map(Datasource::from)
    }

    /// The explicit directory if given, else the configured one, else the process cwd.
    pub fn resolve_working_dir(&self, explicit: Option<&Path>) -> Result<PathBuf> {
        if let Some(dir) = explicit.or(self.working_dir.as_deref()) {
            return Ok(dir.to_path_buf());
        }
        std::env::current_dir().context("read current working directory")
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("sqlflow")?;
    Ok(xdg_dirs.place_config_file("model.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ModelStoreConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = ModelStoreConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from_path(&path)
}

pub fn load_from_path(path: &Path) -> Result<ModelStoreConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("read config: {}", path.display()))?;
    let cfg: ModelStoreConfig = toml::from_str(&data)
        .with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}
