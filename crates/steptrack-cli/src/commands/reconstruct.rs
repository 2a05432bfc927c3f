use anyhow::{Context, Result};
use steptrack_core::{PartialScore, reconstruct};

use crate::cli::ChartArgs;

use super::{chart_metrics, read_json_arg};

pub fn run(chart: &ChartArgs, partial_arg: &str) -> Result<()> {
    let metrics = chart_metrics(chart);
    let json = read_json_arg(partial_arg)?;
    let partial: PartialScore =
        serde_json::from_str(&json).context("Failed to parse partial score")?;

    let record = reconstruct(&metrics, &partial)?;
    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}
