//! `file://` driver: model artifacts on the local filesystem.

use crate::datasource::Datasource;
use crate::error::ModelError;
use crate::model::Model;

use super::StorageDriver;

#[derive(Debug, Clone, Copy, Default)]
pub struct FileDriver;

impl StorageDriver for FileDriver {
    fn name(&self) -> &str {
        "file"
    }

    fn save(
        &self,
        model: &Model,
        path: &str,
        _datasource: Option<&Datasource>,
    ) -> Result<(), ModelError> {
        // TODO: write the model JSON and the engine payload under `path`.
        tracing::debug!(
            path,
            working_dir = %model.working_dir().display(),
            "file driver save requested"
        );
        Err(ModelError::not_implemented("saving a model to the local file system"))
    }
}
