//! `sqlflow-model parse-uri <uri>` – show how a model URI is split.

use anyhow::Result;
use sqlflow_model_core::ModelUri;

/// Output lines for `uri`: `driver=<driver>` then `path=<path>`.
pub fn parse_uri_lines(uri: &str) -> Result<Vec<String>> {
    let parsed = ModelUri::parse(uri)?;
    Ok(vec![
        format!("driver={}", parsed.driver),
        format!("path={}", parsed.path),
    ])
}

/// Parse the URI and print its driver and path, one per line.
pub fn run_parse_uri(uri: &str) -> Result<()> {
    for line in parse_uri_lines(uri)? {
        println!("{line}");
    }
    Ok(())
}
