pub mod config;
pub mod logging;

pub mod datasource;
pub mod driver;
pub mod error;
pub mod estimator;
pub mod metadata;
pub mod model;
pub mod uri;

pub use datasource::Datasource;
pub use driver::{DriverRegistry, StorageDriver};
pub use error::ModelError;
pub use estimator::EstimatorType;
pub use metadata::{collect_model_metadata, Metadata};
pub use model::{load, Model};
pub use uri::{parse_uri, ModelUri};
