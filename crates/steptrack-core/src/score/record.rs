use serde::{Deserialize, Serialize};

use crate::score::{ClearLamp, DanceLevel, FlareRank};

/// A player's result on a single chart.
///
/// Records are immutable values: they are produced by
/// [`reconstruct`](crate::score::reconstruct) or
/// [`merge`](crate::score::merge) and never patched in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    /// Normal score, 0..=1,000,000, always a multiple of 10
    pub score: u32,
    /// EX score: a finer precision metric (Marvelous/O.K. 3, Perfect 2,
    /// Great 1 per judged unit), when observed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ex_score: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_combo: Option<u32>,
    pub clear_lamp: ClearLamp,
    pub rank: DanceLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flare_rank: Option<FlareRank>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flare_skill: Option<u32>,
}

/// A partially observed score: what a results page scrape or a client
/// submission actually carried. Any subset of fields may be present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartialScore {
    pub score: Option<u32>,
    pub ex_score: Option<u32>,
    pub max_combo: Option<u32>,
    pub clear_lamp: Option<ClearLamp>,
    pub rank: Option<DanceLevel>,
    pub flare_rank: Option<FlareRank>,
    pub flare_skill: Option<u32>,
}

impl PartialScore {
    /// True when the observation itself marks the attempt as failed.
    pub fn is_failed(&self) -> bool {
        self.rank == Some(DanceLevel::E) || self.clear_lamp == Some(ClearLamp::Failed)
    }
}

impl From<&ScoreRecord> for PartialScore {
    fn from(record: &ScoreRecord) -> Self {
        Self {
            score: Some(record.score),
            ex_score: record.ex_score,
            max_combo: record.max_combo,
            clear_lamp: Some(record.clear_lamp),
            rank: Some(record.rank),
            flare_rank: record.flare_rank,
            flare_skill: record.flare_skill,
        }
    }
}
