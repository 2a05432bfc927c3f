use serde::{Deserialize, Serialize};

/// Per-judgment breakdown of a single attempt.
///
/// Marvelous steps and O.K. judgments (held freezes, evaded shocks) score
/// identically, so they are folded into one count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JudgmentCounts {
    pub marvelous_or_ok: u32,
    pub perfect: u32,
    pub great: u32,
    pub good: u32,
    pub miss: u32,
}

impl JudgmentCounts {
    pub fn total(&self) -> u32 {
        self.marvelous_or_ok + self.perfect + self.great + self.good + self.miss
    }

    /// EX score of this breakdown: Marvelous/O.K. 3, Perfect 2, Great 1.
    pub fn ex_score(&self) -> u32 {
        self.marvelous_or_ok * 3 + self.perfect * 2 + self.great
    }
}

/// Normal score for a breakdown over `units` judged objects.
///
/// Each object is worth `1,000,000 / units` at Marvelous or O.K.; a
/// Perfect costs a flat 10 points, a Great scores 60% of the object value
/// minus 10, a Good 20% minus 10, a Miss nothing. The result is floored
/// to a multiple of 10.
pub fn calc_score(units: u32, counts: &JudgmentCounts) -> u32 {
    if units == 0 {
        return 0;
    }
    let marvelous = i64::from(counts.marvelous_or_ok);
    let perfect = i64::from(counts.perfect);
    let great = i64::from(counts.great);
    let good = i64::from(counts.good);

    let weighted = 100_000 * (marvelous + perfect) + 60_000 * great + 20_000 * good;
    let raw = weighted / i64::from(units) - perfect - great - good;
    (raw.max(0) * 10) as u32
}

/// EX score from individual judgment counts, with Marvelous and O.K. kept
/// separate. Good and Miss contribute nothing.
pub fn calc_ex_score(marvelous: u32, perfect: u32, great: u32, ok: u32) -> u32 {
    (marvelous + ok) * 3 + perfect * 2 + great
}
