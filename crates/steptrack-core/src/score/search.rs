use crate::chart::ChartMetrics;
use crate::score::{ClearLamp, JudgmentCounts, calc_score};

/// Enumerate every judgment breakdown that reproduces `score` on a chart.
///
/// The clear lamp bans judgments outright (a Perfect Full Combo admits no
/// Great, Good or Miss; a Great Full Combo no Good or Miss; a Full Combo
/// no Miss). Each loop level breaks as soon as the best remaining score
/// falls below the target, since degrading any single judgment never
/// raises the formula's value. Results are ordered by descending
/// Marvelous/O.K. count, then descending Perfect count.
///
/// The search is bounded but combinatorial (worst-case quartic in chart
/// size); callers needing cancellation must impose it externally.
pub fn enumerate_judgment_counts(
    metrics: &ChartMetrics,
    score: u32,
    clear_lamp: ClearLamp,
) -> Vec<JudgmentCounts> {
    let units = metrics.objects();
    let mut matches = Vec::new();

    let max_miss = if clear_lamp >= ClearLamp::FullCombo { 0 } else { units };
    let max_good = if clear_lamp >= ClearLamp::GreatFullCombo { 0 } else { units };
    let max_great = if clear_lamp >= ClearLamp::PerfectFullCombo { 0 } else { units };

    for miss in 0..=max_miss {
        if best_with(units, 0, 0, miss) < score {
            break;
        }
        for good in 0..=max_good.min(units - miss) {
            if best_with(units, 0, good, miss) < score {
                break;
            }
            for great in 0..=max_great.min(units - miss - good) {
                if best_with(units, great, good, miss) < score {
                    break;
                }
                for perfect in 0..=(units - miss - good - great) {
                    let counts = JudgmentCounts {
                        marvelous_or_ok: units - miss - good - great - perfect,
                        perfect,
                        great,
                        good,
                        miss,
                    };
                    let value = calc_score(units, &counts);
                    if value < score {
                        break;
                    }
                    if value == score {
                        matches.push(counts);
                    }
                }
            }
        }
    }

    matches.sort_by(|a, b| {
        b.marvelous_or_ok
            .cmp(&a.marvelous_or_ok)
            .then(b.perfect.cmp(&a.perfect))
    });
    matches
}

/// Best achievable score with the given counts fixed and every remaining
/// unit at Marvelous.
fn best_with(units: u32, great: u32, good: u32, miss: u32) -> u32 {
    calc_score(
        units,
        &JudgmentCounts {
            marvelous_or_ok: units - great - good - miss,
            perfect: 0,
            great,
            good,
            miss,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perfect_score_has_single_breakdown() {
        let metrics = ChartMetrics::new(138, 0, 0);
        let results = enumerate_judgment_counts(&metrics, 1_000_000, ClearLamp::Failed);
        assert_eq!(
            results,
            vec![JudgmentCounts {
                marvelous_or_ok: 138,
                perfect: 0,
                great: 0,
                good: 0,
                miss: 0,
            }]
        );
    }

    #[test]
    fn test_every_match_reproduces_the_score() {
        let metrics = ChartMetrics::new(50, 5, 0);
        let units = metrics.objects();
        let target = 985_000;
        let results = enumerate_judgment_counts(&metrics, target, ClearLamp::Failed);
        assert!(!results.is_empty());
        for counts in &results {
            assert_eq!(counts.total(), units);
            assert_eq!(calc_score(units, counts), target);
        }
    }

    #[test]
    fn test_lamp_bans_worse_judgments() {
        let metrics = ChartMetrics::new(50, 5, 0);
        let target = 985_000;

        let as_gfc = enumerate_judgment_counts(&metrics, target, ClearLamp::GreatFullCombo);
        assert!(as_gfc.iter().all(|c| c.good == 0 && c.miss == 0));
        assert!(as_gfc.iter().any(|c| c.great > 0));

        let as_pfc = enumerate_judgment_counts(&metrics, target, ClearLamp::PerfectFullCombo);
        assert!(as_pfc.iter().all(|c| c.great == 0 && c.good == 0 && c.miss == 0));

        // The unconstrained search is a superset of the lamp-constrained one
        let all = enumerate_judgment_counts(&metrics, target, ClearLamp::Failed);
        assert!(as_gfc.iter().all(|c| all.contains(c)));
    }

    #[test]
    fn test_pfc_constrained_search_counts_perfects() {
        // Each Perfect costs exactly 10 points, so under a Perfect Full
        // Combo a 50-point drop is five Perfects and nothing else.
        let metrics = ChartMetrics::new(50, 5, 0);
        let results = enumerate_judgment_counts(&metrics, 999_950, ClearLamp::PerfectFullCombo);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].perfect, 5);
        assert_eq!(results[0].marvelous_or_ok, 50);
    }

    #[test]
    fn test_ordering_by_marvelous_then_perfect() {
        let metrics = ChartMetrics::new(200, 0, 0);
        let results = enumerate_judgment_counts(&metrics, 996_000, ClearLamp::Failed);
        for pair in results.windows(2) {
            let ordered = pair[0].marvelous_or_ok > pair[1].marvelous_or_ok
                || (pair[0].marvelous_or_ok == pair[1].marvelous_or_ok
                    && pair[0].perfect >= pair[1].perfect);
            assert!(ordered);
        }
    }

    #[test]
    fn test_impossible_score_yields_nothing() {
        // Score between the reachable multiples of the formula
        let metrics = ChartMetrics::new(10, 0, 0);
        let results = enumerate_judgment_counts(&metrics, 999_995, ClearLamp::Failed);
        assert!(results.is_empty());
    }
}
