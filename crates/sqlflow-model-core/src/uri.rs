//! Model URI parsing: `<driver>://<path>`.
//!
//! The input is split at the first `://`. A path that itself contains `://`
//! is rejected, so an input is accepted only when the separator occurs exactly
//! once and both sides are non-empty.

use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

pub const SEPARATOR: &str = "://";

/// A parsed model location: storage driver plus driver-specific path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModelUri {
    pub driver: String,
    pub path: String,
}

impl ModelUri {
    pub fn parse(uri: &str) -> Result<Self, ModelError> {
        let (driver, path) = parse_uri(uri)?;
        Ok(Self {
            driver: driver.to_string(),
            path: path.to_string(),
        })
    }
}

impl FromStr for ModelUri {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ModelUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.driver, SEPARATOR, self.path)
    }
}

/// Splits `uri` into `(driver, path)` without allocating.
///
/// # Examples
///
/// - `parse_uri("sqlfs://mydb/mytable")` → `("sqlfs", "mydb/mytable")`
/// - `parse_uri("file:///tmp/model")` → `("file", "/tmp/model")`
/// - `parse_uri("invalid-uri")` → `MalformedUri`
pub fn parse_uri(uri: &str) -> Result<(&str, &str), ModelError> {
    let malformed = || ModelError::MalformedUri {
        uri: uri.to_string(),
    };
    let (driver, path) = uri.split_once(SEPARATOR).ok_or_else(malformed)?;
    if driver.is_empty() || path.is_empty() || path.contains(SEPARATOR) {
        return Err(malformed());
    }
    Ok((driver, path))
}
