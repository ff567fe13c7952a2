//! `sqlfs://` driver: model artifacts stored as rows in a SQL table.

use crate::datasource::Datasource;
use crate::error::ModelError;
use crate::model::Model;

use super::StorageDriver;

#[derive(Debug, Clone, Copy, Default)]
pub struct SqlfsDriver;

impl StorageDriver for SqlfsDriver {
    fn name(&self) -> &str {
        "sqlfs"
    }

    fn save(
        &self,
        model: &Model,
        path: &str,
        datasource: Option<&Datasource>,
    ) -> Result<(), ModelError> {
        if datasource.is_none() {
            tracing::warn!(
                path,
                "sqlfs save without a datasource; one is required to reach the database"
            );
        }
        tracing::debug!(
            path,
            estimator = %model.estimator(),
            "sqlfs driver save requested"
        );
        Err(ModelError::not_implemented("saving a model to sqlfs"))
    }
}
