//! Params command: dump the whole parameter mapping as JSON.

use anyhow::{Context, Result};
use strutil_core::query::parse_params;

fn params_json(url: &str) -> Result<String> {
    let params = parse_params(url);
    tracing::info!("params count={}", params.len());
    serde_json::to_string_pretty(&params).context("serialize parameters")
}

pub fn run_params(url: &str) -> Result<()> {
    println!("{}", params_json(url)?);
    Ok(())
}
