//! End-to-end properties of the score engine.
//!
//! These exercise the documented behavior across modules: formula
//! monotonicity, merge algebra, reconstruction round-trips, and the
//! judgment-count search.

use steptrack_core::{
    ChartMetrics, ClearLamp, DanceLevel, JudgmentCounts, PartialScore, ScoreRecord, calc_score,
    enumerate_judgment_counts, is_consistent, merge, reconstruct,
};

fn chart() -> ChartMetrics {
    ChartMetrics::new(100, 20, 10)
}

// =============================================================================
// Formula monotonicity
// =============================================================================

mod formula_monotonicity {
    use super::*;

    /// Degrading one judgment while holding the total fixed never raises
    /// the score.
    #[test]
    fn degrading_any_judgment_never_raises_the_score() {
        let units = chart().objects();
        for base in [0u32, 5, 30] {
            let reference = JudgmentCounts {
                marvelous_or_ok: units - base * 4,
                perfect: base,
                great: base,
                good: base,
                miss: base,
            };
            let reference_score = calc_score(units, &reference);

            let degradations = [
                JudgmentCounts {
                    marvelous_or_ok: reference.marvelous_or_ok - 1,
                    perfect: reference.perfect + 1,
                    ..reference
                },
                JudgmentCounts {
                    perfect: reference.perfect.saturating_sub(1),
                    great: reference.great + 1,
                    ..reference
                },
                JudgmentCounts {
                    great: reference.great.saturating_sub(1),
                    good: reference.good + 1,
                    ..reference
                },
                JudgmentCounts {
                    good: reference.good.saturating_sub(1),
                    miss: reference.miss + 1,
                    ..reference
                },
            ];
            for degraded in degradations {
                if degraded.total() != units {
                    continue;
                }
                assert!(
                    calc_score(units, &degraded) <= reference_score,
                    "degrading {reference:?} to {degraded:?} raised the score"
                );
            }
        }
    }
}

// =============================================================================
// Merge algebra
// =============================================================================

mod merge_algebra {
    use super::*;

    fn samples() -> Vec<ScoreRecord> {
        let partials = [
            PartialScore {
                score: Some(1_000_000),
                ..Default::default()
            },
            PartialScore {
                score: Some(999_930),
                ..Default::default()
            },
            PartialScore {
                score: Some(890_000),
                clear_lamp: Some(ClearLamp::Life4),
                ..Default::default()
            },
            PartialScore {
                score: Some(650_000),
                clear_lamp: Some(ClearLamp::AssistedClear),
                ..Default::default()
            },
            PartialScore {
                score: Some(650_000),
                clear_lamp: Some(ClearLamp::Clear),
                ..Default::default()
            },
            PartialScore {
                score: Some(0),
                ..Default::default()
            },
        ];
        partials
            .iter()
            .map(|p| reconstruct(&chart(), p).unwrap())
            .collect()
    }

    #[test]
    fn merge_is_idempotent() {
        for record in samples() {
            assert_eq!(merge(&record, &record), record);
        }
    }

    #[test]
    fn merge_is_commutative() {
        let records = samples();
        for a in &records {
            for b in &records {
                assert_eq!(merge(a, b), merge(b, a), "merge({a:?}, {b:?})");
            }
        }
    }

    #[test]
    fn merged_record_is_at_least_as_good_as_both_sides() {
        let records = samples();
        for a in &records {
            for b in &records {
                let merged = merge(a, b);
                assert!(merged.score >= a.score.max(b.score));
                assert!(merged.ex_score >= a.ex_score.max(b.ex_score));
                assert!(merged.max_combo >= a.max_combo.max(b.max_combo));
            }
        }
    }
}

// =============================================================================
// Reconstruction round-trips
// =============================================================================

mod round_trip {
    use super::*;

    /// Every way of reporting a perfect play reconstructs to the same
    /// all-Marvelous record.
    #[test]
    fn perfect_play_reconstructs_identically_from_each_field() {
        let expected = chart().max_score_record();
        let reports = [
            PartialScore {
                clear_lamp: Some(ClearLamp::MarvelousFullCombo),
                ..Default::default()
            },
            PartialScore {
                score: Some(1_000_000),
                ..Default::default()
            },
            PartialScore {
                ex_score: Some(chart().max_ex_score()),
                ..Default::default()
            },
        ];
        for report in reports {
            assert_eq!(reconstruct(&chart(), &report).unwrap(), expected);
        }
    }

    /// Reconstructed records always validate against their chart.
    #[test]
    fn reconstructed_records_are_consistent() {
        let reports = [
            PartialScore {
                score: Some(1_000_000),
                ..Default::default()
            },
            PartialScore {
                score: Some(999_930),
                ..Default::default()
            },
            PartialScore {
                score: Some(996_910),
                ..Default::default()
            },
            PartialScore {
                score: Some(993_000),
                ..Default::default()
            },
            PartialScore {
                score: Some(890_000),
                ..Default::default()
            },
            PartialScore {
                score: Some(890_000),
                rank: Some(DanceLevel::E),
                ..Default::default()
            },
            PartialScore {
                score: Some(0),
                ..Default::default()
            },
            PartialScore {
                ex_score: Some(389),
                ..Default::default()
            },
        ];
        for report in reports {
            let record = reconstruct(&chart(), &report).unwrap();
            assert!(
                is_consistent(&chart(), &record),
                "reconstructed {record:?} from {report:?} failed validation"
            );
        }
    }

    /// A reconstructed record folded into itself is a fixed point of the
    /// merge.
    #[test]
    fn reconstruct_then_merge_is_stable() {
        let record = reconstruct(
            &chart(),
            &PartialScore {
                score: Some(999_930),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(merge(&record, &record), record);
    }
}

// =============================================================================
// Judgment-count search
// =============================================================================

mod search {
    use super::*;

    #[test]
    fn perfect_score_has_exactly_one_breakdown() {
        let metrics = ChartMetrics::new(138, 0, 0);
        let results = enumerate_judgment_counts(&metrics, 1_000_000, ClearLamp::Failed);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].marvelous_or_ok, 138);
        assert_eq!(results[0].perfect, 0);
    }

    /// The search inverts the formula: reconstructing a pinned record and
    /// searching for its score finds the original breakdown.
    #[test]
    fn search_recovers_the_reconstructed_breakdown() {
        let metrics = chart();
        let record = reconstruct(
            &metrics,
            &PartialScore {
                score: Some(999_930),
                ..Default::default()
            },
        )
        .unwrap();

        let results =
            enumerate_judgment_counts(&metrics, record.score, ClearLamp::PerfectFullCombo);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].perfect, 7);
        assert_eq!(results[0].ex_score(), record.ex_score.unwrap());
    }

    #[test]
    fn search_matches_formula_exactly() {
        let metrics = ChartMetrics::new(60, 10, 2);
        let units = metrics.objects();
        for target in [1_000_000, 999_950, 980_000, 500_000] {
            for counts in enumerate_judgment_counts(&metrics, target, ClearLamp::Failed) {
                assert_eq!(counts.total(), units);
                assert_eq!(calc_score(units, &counts), target);
            }
        }
    }
}
