use crate::chart::ChartMetrics;
use crate::score::{ClearLamp, ScoreRecord};

/// Check that a claimed record is physically possible on the chart.
///
/// Returns `false` rather than erroring; callers decide whether to reject
/// the submission.
pub fn is_consistent(metrics: &ChartMetrics, record: &ScoreRecord) -> bool {
    let max_ex = metrics.max_ex_score();

    if let Some(ex) = record.ex_score {
        if ex > max_ex {
            return false;
        }
        // The top three EX values each imply a specific lamp: a full EX
        // score means every judgment was Marvelous, one below means a
        // single Perfect, two below at least a Great Full Combo.
        if ex == max_ex && record.clear_lamp != ClearLamp::MarvelousFullCombo {
            return false;
        }
        if ex + 1 == max_ex && record.clear_lamp != ClearLamp::PerfectFullCombo {
            return false;
        }
        if ex + 2 == max_ex && record.clear_lamp < ClearLamp::GreatFullCombo {
            return false;
        }
    }

    // Max possible combo does not force a full-combo lamp: a dropped
    // trailing freeze arrow keeps the combo intact but loses the lamp.
    record.max_combo.unwrap_or(0) <= metrics.full_combo()
}
