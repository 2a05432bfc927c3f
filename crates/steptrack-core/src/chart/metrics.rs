use serde::{Deserialize, Serialize};

use crate::score::{ClearLamp, DanceLevel, ScoreRecord};

/// Physical note counts of a single chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChartMetrics {
    /// Normal step count
    pub notes: u32,
    /// Freeze arrow (hold note) count
    #[serde(default)]
    pub freeze_arrow: u32,
    /// Shock arrow (mine) count
    #[serde(default)]
    pub shock_arrow: u32,
}

impl ChartMetrics {
    pub fn new(notes: u32, freeze_arrow: u32, shock_arrow: u32) -> Self {
        Self {
            notes,
            freeze_arrow,
            shock_arrow,
        }
    }

    /// Total judged units (steps + freezes + shocks)
    pub fn objects(&self) -> u32 {
        self.notes + self.freeze_arrow + self.shock_arrow
    }

    /// Maximum combo value. Freeze arrows do not extend combo.
    pub fn full_combo(&self) -> u32 {
        self.notes + self.shock_arrow
    }

    /// Maximum EX score (every judged unit at Marvelous/O.K. is worth 3)
    pub fn max_ex_score(&self) -> u32 {
        self.objects() * 3
    }

    /// The all-Marvelous result for this chart.
    pub fn max_score_record(&self) -> ScoreRecord {
        ScoreRecord {
            score: 1_000_000,
            ex_score: Some(self.max_ex_score()),
            max_combo: Some(self.full_combo()),
            clear_lamp: ClearLamp::MarvelousFullCombo,
            rank: DanceLevel::Aaa,
            flare_rank: None,
            flare_skill: None,
        }
    }
}
