//! Estimator family a trained model comes from.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Training engine that produced a model. Closed set; adding an engine is a
/// compile-time change that every `match` has to acknowledge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EstimatorType {
    TensorFlow,
    XGBoost,
}

impl EstimatorType {
    pub const ALL: [EstimatorType; 2] = [EstimatorType::TensorFlow, EstimatorType::XGBoost];

    pub fn as_str(self) -> &'static str {
        match self {
            EstimatorType::TensorFlow => "tensorflow",
            EstimatorType::XGBoost => "xgboost",
        }
    }

    /// Numeric estimator code: TensorFlow = 1, XGBoost = 2.
    pub fn code(self) -> u8 {
        match self {
            EstimatorType::TensorFlow => 1,
            EstimatorType::XGBoost => 2,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|e| e.code() == code)
    }
}

impl fmt::Display for EstimatorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EstimatorType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|e| e.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| ModelError::UnknownEstimator {
                name: s.to_string(),
            })
    }
}
