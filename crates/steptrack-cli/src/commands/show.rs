use std::path::Path;

use anyhow::Result;
use steptrack_core::ScoreBook;

pub fn run(book_path: &Path, json: bool) -> Result<()> {
    let book = ScoreBook::load(book_path)?;

    let mut entries: Vec<_> = book.iter().collect();
    entries.sort_by(|(a, _), (b, _)| {
        (&a.song_id, a.play_style as u8, a.difficulty as u8).cmp(&(
            &b.song_id,
            b.play_style as u8,
            b.difficulty as u8,
        ))
    });

    for (key, entry) in entries {
        if json {
            println!(
                "{}",
                serde_json::json!({
                    "song_id": key.song_id,
                    "play_style": key.play_style,
                    "difficulty": key.difficulty,
                    "record": entry.record,
                    "updated_at": entry.updated_at,
                })
            );
        } else {
            let record = &entry.record;
            let ex = record
                .ex_score
                .map_or_else(|| "-".to_string(), |ex| ex.to_string());
            println!(
                "{} {}/{}: {} {} [{}] EX {}",
                key.song_id,
                key.play_style,
                key.difficulty,
                record.score,
                record.rank,
                record.clear_lamp,
                ex
            );
        }
    }
    Ok(())
}
