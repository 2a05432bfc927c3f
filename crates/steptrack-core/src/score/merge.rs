use crate::score::{ClearLamp, ScoreRecord};

/// Merge two observations of the same chart into the best composite.
///
/// Commutative; used to fold repeated imports into a running personal best
/// and by aggregation jobs building world-record / area-top entries.
pub fn merge(a: &ScoreRecord, b: &ScoreRecord) -> ScoreRecord {
    ScoreRecord {
        score: a.score.max(b.score),
        ex_score: max_present(a.ex_score, b.ex_score),
        max_combo: max_present(a.max_combo, b.max_combo),
        clear_lamp: merge_lamp(a.clear_lamp, b.clear_lamp),
        rank: if a.score > b.score { a.rank } else { b.rank },
        flare_rank: max_present(a.flare_rank, b.flare_rank),
        flare_skill: max_present(a.flare_skill, b.flare_skill),
    }
}

/// Higher lamp wins, except that an Assisted Clear is never upgraded by a
/// plain Clear on the other side. Whether that exception is intended
/// policy is an open product question (see DESIGN.md); do not "fix" it
/// without a ruling.
fn merge_lamp(a: ClearLamp, b: ClearLamp) -> ClearLamp {
    use ClearLamp::{AssistedClear, Clear};
    match (a, b) {
        (AssistedClear, Clear) | (Clear, AssistedClear) => AssistedClear,
        _ => a.max(b),
    }
}

/// Present if either side defines it, taking the larger value (an absent
/// side counts as zero).
fn max_present<T: Ord + Copy + Default>(a: Option<T>, b: Option<T>) -> Option<T> {
    if a.is_none() && b.is_none() {
        return None;
    }
    Some(a.unwrap_or_default().max(b.unwrap_or_default()))
}
