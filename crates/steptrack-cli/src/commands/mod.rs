pub mod flare;
pub mod grade;
pub mod import;
pub mod reconstruct;
pub mod search;
pub mod show;
pub mod validate;

use std::fs;

use anyhow::{Context, Result};
use steptrack_core::ChartMetrics;

use crate::cli::ChartArgs;

pub fn chart_metrics(args: &ChartArgs) -> ChartMetrics {
    ChartMetrics::new(args.notes, args.freeze_arrow, args.shock_arrow)
}

/// A JSON argument: inline text, or `@path` to read it from a file.
pub fn read_json_arg(arg: &str) -> Result<String> {
    if let Some(path) = arg.strip_prefix('@') {
        fs::read_to_string(path).with_context(|| format!("Failed to read {path}"))
    } else {
        Ok(arg.to_string())
    }
}
