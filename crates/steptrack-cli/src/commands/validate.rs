use anyhow::{Context, Result, bail};
use steptrack_core::{ScoreRecord, is_consistent};

use crate::cli::ChartArgs;

use super::{chart_metrics, read_json_arg};

pub fn run(chart: &ChartArgs, record_arg: &str) -> Result<()> {
    let metrics = chart_metrics(chart);
    let json = read_json_arg(record_arg)?;
    let record: ScoreRecord =
        serde_json::from_str(&json).context("Failed to parse score record")?;

    if !is_consistent(&metrics, &record) {
        bail!(
            "Record is inconsistent with chart (objects: {}, max EX: {}, full combo: {})",
            metrics.objects(),
            metrics.max_ex_score(),
            metrics.full_combo()
        );
    }
    println!("Record is consistent");
    Ok(())
}
