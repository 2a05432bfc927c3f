use anyhow::{Result, bail};
use steptrack_core::{ClearLamp, enumerate_judgment_counts};

use crate::cli::ChartArgs;

use super::chart_metrics;

pub fn run(chart: &ChartArgs, score: u32, lamp: u8, limit: Option<usize>) -> Result<()> {
    let metrics = chart_metrics(chart);
    let Some(clear_lamp) = ClearLamp::from_u8(lamp) else {
        bail!("Invalid clear lamp tier: {lamp} (expected 0-7)");
    };

    let results = enumerate_judgment_counts(&metrics, score, clear_lamp);
    let shown = limit.unwrap_or(results.len()).min(results.len());

    for counts in &results[..shown] {
        println!("{}", serde_json::to_string(counts)?);
    }
    eprintln!(
        "{} breakdown(s) for score {} ({} shown)",
        results.len(),
        score,
        shown
    );
    Ok(())
}
