use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use steptrack_core::{
    ChartKey, ChartMetrics, Difficulty, PartialScore, PlayStyle, ScoreBook, is_consistent,
    reconstruct,
};
use tracing::warn;

/// One observation line: which chart it is, its note counts, and what the
/// source actually reported.
#[derive(Debug, Deserialize)]
struct Observation {
    song_id: String,
    play_style: PlayStyle,
    difficulty: Difficulty,
    chart: ChartMetrics,
    score: PartialScore,
}

pub fn run(book_path: &Path, input: &Path) -> Result<()> {
    let mut book = if book_path.exists() {
        ScoreBook::load(book_path)?
    } else {
        ScoreBook::new()
    };

    let content = fs::read_to_string(input)
        .with_context(|| format!("Failed to read {}", input.display()))?;

    let mut imported = 0usize;
    let mut rejected = 0usize;
    for (index, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let observation: Observation = match serde_json::from_str(line) {
            Ok(o) => o,
            Err(e) => {
                warn!("Skipping line {}: {}", index + 1, e);
                rejected += 1;
                continue;
            }
        };
        let record = match reconstruct(&observation.chart, &observation.score) {
            Ok(r) => r,
            Err(e) => {
                warn!(
                    "Skipping {} {}/{}: {}",
                    observation.song_id, observation.play_style, observation.difficulty, e
                );
                rejected += 1;
                continue;
            }
        };
        if !is_consistent(&observation.chart, &record) {
            warn!(
                "Skipping {} {}/{}: record is inconsistent with chart",
                observation.song_id, observation.play_style, observation.difficulty
            );
            rejected += 1;
            continue;
        }
        book.record(
            ChartKey {
                song_id: observation.song_id,
                play_style: observation.play_style,
                difficulty: observation.difficulty,
            },
            record,
        );
        imported += 1;
    }

    book.save(book_path)?;
    println!(
        "Imported {} observation(s), rejected {}, book now tracks {} chart(s)",
        imported,
        rejected,
        book.len()
    );
    Ok(())
}
