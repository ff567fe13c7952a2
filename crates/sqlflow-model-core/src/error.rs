//! User-facing error type for model persistence.
//!
//! Every failure is reported before any storage is touched, so callers never
//! see partial writes. Application layers wrap this in `anyhow` with context.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// The input does not match `<driver>://<path>`.
    #[error("invalid model saving URI: {uri}, which should be <driver>://<path>")]
    MalformedUri { uri: String },

    /// The URI is well formed but no driver is registered under its scheme.
    #[error("unsupported driver to save model: {driver}")]
    UnsupportedDriver { driver: String },

    /// The request is valid but the backend has not been built yet.
    #[error("{operation} is not implemented yet")]
    NotImplemented { operation: String },

    #[error("unknown estimator type: {name} (expected tensorflow or xgboost)")]
    UnknownEstimator { name: String },

    #[error("invalid model metadata: {reason}")]
    InvalidMetadata { reason: String },

    #[error("cannot read working directory: {reason}")]
    WorkingDirUnavailable { reason: String },
}

impl ModelError {
    pub(crate) fn not_implemented(operation: impl Into<String>) -> Self {
        ModelError::NotImplemented {
            operation: operation.into(),
        }
    }

    /// True for the "backend not built yet" case, which callers may want to
    /// report differently from a bad request.
    pub fn is_not_implemented(&self) -> bool {
        matches!(self, ModelError::NotImplemented { .. })
    }
}
