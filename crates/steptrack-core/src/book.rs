//! Personal-best score book.
//!
//! Folds repeated observations of the same chart into a running best
//! composite via [`merge`], and persists the result as a JSON file.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::chart::{Difficulty, PlayStyle};
use crate::error::Result;
use crate::score::{ScoreRecord, merge};

/// Chart identifier within a song catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChartKey {
    pub song_id: String,
    pub play_style: PlayStyle,
    pub difficulty: Difficulty,
}

/// One chart's best composite record and when it last improved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookEntry {
    pub record: ScoreRecord,
    pub updated_at: DateTime<Utc>,
}

/// Flat row stored in the book file.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct BookRow {
    song_id: String,
    play_style: PlayStyle,
    difficulty: Difficulty,
    record: ScoreRecord,
    updated_at: DateTime<Utc>,
}

/// Per-chart personal bests, folded together with [`merge`].
#[derive(Debug, Clone, Default)]
pub struct ScoreBook {
    entries: HashMap<ChartKey, BookEntry>,
}

impl ScoreBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold an observation into the chart's running best. The timestamp
    /// only moves when the composite actually improves.
    pub fn record(&mut self, key: ChartKey, observed: ScoreRecord) {
        let now = Utc::now();
        match self.entries.entry(key) {
            Entry::Occupied(mut entry) => {
                let merged = merge(&entry.get().record, &observed);
                if merged != entry.get().record {
                    entry.insert(BookEntry {
                        record: merged,
                        updated_at: now,
                    });
                }
            }
            Entry::Vacant(slot) => {
                slot.insert(BookEntry {
                    record: observed,
                    updated_at: now,
                });
            }
        }
    }

    pub fn get(&self, key: &ChartKey) -> Option<&BookEntry> {
        self.entries.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ChartKey, &BookEntry)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)?;
        let rows: Vec<BookRow> = serde_json::from_str(&content)?;
        let mut book = Self::new();
        for row in rows {
            let key = ChartKey {
                song_id: row.song_id,
                play_style: row.play_style,
                difficulty: row.difficulty,
            };
            book.entries.insert(
                key,
                BookEntry {
                    record: row.record,
                    updated_at: row.updated_at,
                },
            );
        }
        info!(
            "Loaded score book from {:?} ({} charts)",
            path.as_ref(),
            book.len()
        );
        Ok(book)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut rows: Vec<BookRow> = self
            .entries
            .iter()
            .map(|(key, entry)| BookRow {
                song_id: key.song_id.clone(),
                play_style: key.play_style,
                difficulty: key.difficulty,
                record: entry.record.clone(),
                updated_at: entry.updated_at,
            })
            .collect();
        // Stable row order keeps the file diffable
        rows.sort_by(|a, b| {
            (a.song_id.as_str(), a.play_style as u8, a.difficulty as u8).cmp(&(
                b.song_id.as_str(),
                b.play_style as u8,
                b.difficulty as u8,
            ))
        });
        fs::write(&path, serde_json::to_string_pretty(&rows)?)?;
        info!(
            "Saved score book to {:?} ({} charts)",
            path.as_ref(),
            rows.len()
        );
        Ok(())
    }
}
