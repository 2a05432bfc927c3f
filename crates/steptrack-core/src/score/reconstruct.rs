//! Completion of partially observed scores.
//!
//! A results-page scrape or a client submission rarely carries every
//! field. Reconstruction fills in the blanks with an ordered rule chain:
//! EX-score shortcuts that need no normal score, then score-magnitude tier
//! refinement, then the failed and zero-score overrides. The first
//! matching rule wins, which keeps the priority order auditable and each
//! rule testable on its own.

use crate::chart::ChartMetrics;
use crate::error::{Error, Result};
use crate::score::{
    ClearLamp, DanceLevel, JudgmentCounts, PartialScore, ScoreRecord, calc_score,
};

type ExScoreRule = fn(&Ctx<'_>) -> Option<ScoreRecord>;
type TierRule = fn(&Ctx<'_>, &ScoreRecord) -> Option<ScoreRecord>;

/// Shortcuts that can complete a record from the EX score (and lamp)
/// alone. Tried in order before a normal score is required.
const EX_SCORE_RULES: &[ExScoreRule] = &[
    rule_perfect_play,
    rule_single_perfect,
    rule_perfect_full_combo_from_ex,
    rule_great_full_combo_from_ex,
    rule_near_miss_from_ex,
];

/// Score-magnitude tier refinement, in strict priority order. Each guard
/// compares the score against the worst configuration of "exactly one
/// unit of the next-worse judgment, nothing worse than that".
const TIER_RULES: &[TierRule] = &[
    tier_perfect_full_combo,
    tier_great_full_combo,
    tier_single_good_full_combo,
    tier_full_combo,
    tier_single_miss,
];

/// Complete a partial observation into a full record.
///
/// Fails with [`Error::ScoreRequired`] when no EX-score shortcut applies
/// and the observation carries no score, and with
/// [`Error::ScoreOutOfRange`] when the claimed score exceeds 1,000,000.
pub fn reconstruct(metrics: &ChartMetrics, partial: &PartialScore) -> Result<ScoreRecord> {
    let ctx = Ctx::new(metrics, partial);

    for rule in EX_SCORE_RULES {
        if let Some(record) = rule(&ctx) {
            return Ok(ctx.carry_flare(record));
        }
    }

    let score = partial.score.ok_or(Error::ScoreRequired)?;

    // Baseline: rank from the grading table, lamp as reported (Clear when
    // the observation does not say).
    let mut record = ScoreRecord {
        score,
        ex_score: partial.ex_score,
        max_combo: partial.max_combo,
        clear_lamp: partial.clear_lamp.unwrap_or(ClearLamp::Clear),
        rank: DanceLevel::for_score(score)?,
        flare_rank: partial.flare_rank,
        flare_skill: partial.flare_skill,
    };

    if let Some(refined) = TIER_RULES.iter().find_map(|rule| rule(&ctx, &record)) {
        record = refined;
    }

    if ctx.failed {
        record.clear_lamp = ClearLamp::Failed;
        record.rank = DanceLevel::E;
    }

    if score == 0 {
        record = ctx.zero_score(record.rank);
    }

    Ok(record)
}

/// Chart constants and observation flags shared by every rule.
struct Ctx<'a> {
    partial: &'a PartialScore,
    units: u32,
    max_ex: u32,
    full_combo: u32,
    failed: bool,
    max_record: ScoreRecord,
}

impl<'a> Ctx<'a> {
    fn new(metrics: &'a ChartMetrics, partial: &'a PartialScore) -> Self {
        Self {
            partial,
            units: metrics.objects(),
            max_ex: metrics.max_ex_score(),
            full_combo: metrics.full_combo(),
            failed: partial.is_failed(),
            max_record: metrics.max_score_record(),
        }
    }

    /// Score when the breakdown is all Marvelous except the given counts.
    fn boundary(&self, perfect: u32, great: u32, good: u32, miss: u32) -> u32 {
        let counted = perfect + great + good + miss;
        calc_score(
            self.units,
            &JudgmentCounts {
                marvelous_or_ok: self.units.saturating_sub(counted),
                perfect,
                great,
                good,
                miss,
            },
        )
    }

    /// Flare fields are never derived, only carried over from the input.
    fn carry_flare(&self, mut record: ScoreRecord) -> ScoreRecord {
        record.flare_rank = self.partial.flare_rank.or(record.flare_rank);
        record.flare_skill = self.partial.flare_skill.or(record.flare_skill);
        record
    }

    /// A score of zero with the attempt not failed means either an
    /// assisted clear (pre-flare mechanic) or a flare-gauge clear; zero
    /// score is physically possible on short charts under assist options.
    fn zero_score(&self, rank: DanceLevel) -> ScoreRecord {
        let clear_lamp = if self.failed {
            ClearLamp::Failed
        } else if self.partial.flare_rank.is_some() {
            ClearLamp::Clear
        } else {
            ClearLamp::AssistedClear
        };
        ScoreRecord {
            score: 0,
            ex_score: Some(0),
            max_combo: Some(0),
            clear_lamp,
            rank,
            flare_rank: self.partial.flare_rank,
            flare_skill: self.partial.flare_skill,
        }
    }
}

/// A Marvelous Full Combo pins every field, whichever way it was reported.
fn rule_perfect_play(ctx: &Ctx) -> Option<ScoreRecord> {
    let perfect = ctx.partial.clear_lamp == Some(ClearLamp::MarvelousFullCombo)
        || ctx.partial.score == Some(1_000_000)
        || ctx.partial.ex_score == Some(ctx.max_ex);
    perfect.then(|| ctx.max_record.clone())
}

/// EX one below the maximum means exactly one Perfect judgment.
fn rule_single_perfect(ctx: &Ctx) -> Option<ScoreRecord> {
    let ex = ctx.partial.ex_score?;
    if ex + 1 != ctx.max_ex {
        return None;
    }
    Some(ScoreRecord {
        score: 999_990,
        ex_score: Some(ex),
        max_combo: Some(ctx.full_combo),
        clear_lamp: ClearLamp::PerfectFullCombo,
        rank: DanceLevel::Aaa,
        flare_rank: None,
        flare_skill: None,
    })
}

/// Under a Perfect Full Combo every EX point below the maximum is one
/// Perfect, and each Perfect costs exactly 10 score points.
fn rule_perfect_full_combo_from_ex(ctx: &Ctx) -> Option<ScoreRecord> {
    if ctx.partial.clear_lamp != Some(ClearLamp::PerfectFullCombo) {
        return None;
    }
    let ex = ctx.partial.ex_score?;
    let dropped = ctx.max_ex.checked_sub(ex)?;
    let score = 1_000_000u32.checked_sub(dropped.checked_mul(10)?)?;
    Some(ScoreRecord {
        score,
        ex_score: Some(ex),
        max_combo: Some(ctx.full_combo),
        clear_lamp: ClearLamp::PerfectFullCombo,
        rank: DanceLevel::lookup(score),
        flare_rank: None,
        flare_skill: None,
    })
}

/// A Great Full Combo two or three EX below the maximum carried exactly
/// one Great (three below: one Perfect rode along), so the score is
/// determined.
fn rule_great_full_combo_from_ex(ctx: &Ctx) -> Option<ScoreRecord> {
    if ctx.partial.clear_lamp != Some(ClearLamp::GreatFullCombo) {
        return None;
    }
    let ex = ctx.partial.ex_score?;
    if ex + 2 != ctx.max_ex && ex + 3 != ctx.max_ex {
        return None;
    }
    let perfect = ctx.max_ex - 2 - ex;
    let score = ctx.boundary(perfect, 1, 0, 0);
    Some(ScoreRecord {
        score,
        ex_score: Some(ex),
        max_combo: Some(ctx.full_combo),
        clear_lamp: ClearLamp::GreatFullCombo,
        rank: DanceLevel::lookup(score),
        flare_rank: None,
        flare_skill: None,
    })
}

/// EX three below the maximum with no better lamp information: one Good
/// on a Full Combo, otherwise one Miss. Below this tier the EX score
/// alone cannot determine the score.
fn rule_near_miss_from_ex(ctx: &Ctx) -> Option<ScoreRecord> {
    let ex = ctx.partial.ex_score?;
    if ex + 3 != ctx.max_ex {
        return None;
    }
    if ctx.partial.clear_lamp == Some(ClearLamp::FullCombo) {
        let score = ctx.boundary(0, 0, 1, 0);
        return Some(ScoreRecord {
            score,
            ex_score: Some(ex),
            max_combo: Some(ctx.full_combo),
            clear_lamp: ClearLamp::FullCombo,
            rank: DanceLevel::lookup(score),
            flare_rank: None,
            flare_skill: None,
        });
    }
    let score = ctx.boundary(0, 0, 0, 1);
    let (clear_lamp, rank) = if ctx.failed {
        (ClearLamp::Failed, DanceLevel::E)
    } else {
        (
            ctx.partial.clear_lamp.unwrap_or(ClearLamp::Clear),
            DanceLevel::lookup(score),
        )
    };
    Some(ScoreRecord {
        score,
        ex_score: Some(ex),
        max_combo: ctx.partial.max_combo,
        clear_lamp,
        rank,
        flare_rank: None,
        flare_skill: None,
    })
}

/// Scores above the one-Great ceiling only admit Perfects; the drop from
/// 1,000,000 counts them exactly.
fn tier_perfect_full_combo(ctx: &Ctx, base: &ScoreRecord) -> Option<ScoreRecord> {
    let in_tier = ctx.partial.clear_lamp == Some(ClearLamp::PerfectFullCombo)
        || base.score > ctx.boundary(0, 1, 0, 0);
    if !in_tier {
        return None;
    }
    let dropped = (1_000_000 - base.score) / 10;
    let ex_score = ctx.max_ex.checked_sub(dropped)?;
    Some(ScoreRecord {
        ex_score: Some(ex_score),
        max_combo: Some(ctx.full_combo),
        clear_lamp: ClearLamp::PerfectFullCombo,
        ..base.clone()
    })
}

/// Scores above the one-Good ceiling admit only Greats and Perfects. The
/// Great count is probed upward; when it is pinned (a single Great, or
/// the score sits exactly on a Great-count ceiling) the EX score follows,
/// otherwise several Great/Perfect mixes reproduce the score and the EX
/// score is left open.
fn tier_great_full_combo(ctx: &Ctx, base: &ScoreRecord) -> Option<ScoreRecord> {
    let in_tier = ctx.partial.clear_lamp == Some(ClearLamp::GreatFullCombo)
        || base.score > ctx.boundary(0, 0, 1, 0);
    if !in_tier {
        return None;
    }

    let record = ScoreRecord {
        max_combo: Some(ctx.full_combo),
        clear_lamp: ClearLamp::GreatFullCombo,
        ..base.clone()
    };

    // Largest Great count whose zero-Perfect ceiling still reaches the
    // observed score.
    let mut greats = 1;
    while greats < ctx.units && ctx.boundary(0, greats + 1, 0, 0) >= base.score {
        greats += 1;
    }
    let Some(residual) = ctx.boundary(0, greats, 0, 0).checked_sub(base.score) else {
        return Some(record);
    };
    let perfects = residual / 10;
    let pinned = greats == 1 || perfects == 0;
    if !pinned || perfects + greats > ctx.units {
        return Some(record);
    }
    Some(ScoreRecord {
        ex_score: Some(ctx.max_ex - 2 * greats - perfects),
        ..record
    })
}

/// A Full Combo above the one-Great-one-Good ceiling carried exactly one
/// Good; the residual drop counts the Perfects.
fn tier_single_good_full_combo(ctx: &Ctx, base: &ScoreRecord) -> Option<ScoreRecord> {
    if ctx.partial.clear_lamp != Some(ClearLamp::FullCombo)
        || base.score <= ctx.boundary(0, 1, 1, 0)
    {
        return None;
    }
    let perfects = ctx.boundary(0, 0, 1, 0).checked_sub(base.score)? / 10;
    let ex_score = ctx.max_ex.checked_sub(3 + perfects)?;
    Some(ScoreRecord {
        ex_score: Some(ex_score),
        max_combo: Some(ctx.full_combo),
        ..base.clone()
    })
}

/// A reported Full Combo, or a score too high to admit a Miss: the combo
/// is full but the judgment mix stays open.
fn tier_full_combo(ctx: &Ctx, base: &ScoreRecord) -> Option<ScoreRecord> {
    let in_tier = ctx.partial.clear_lamp == Some(ClearLamp::FullCombo)
        || base.score > ctx.boundary(0, 0, 0, 1);
    in_tier.then(|| ScoreRecord {
        max_combo: Some(ctx.full_combo),
        clear_lamp: ClearLamp::FullCombo,
        ..base.clone()
    })
}

/// Without a full combo, a score above the one-Great-one-Miss ceiling —
/// or a reported combo equal to the chart's maximum (a dropped trailing
/// freeze arrow) — pins the breakdown to one Miss plus Perfects.
fn tier_single_miss(ctx: &Ctx, base: &ScoreRecord) -> Option<ScoreRecord> {
    if base.clear_lamp >= ClearLamp::FullCombo {
        return None;
    }
    let in_tier = base.score > ctx.boundary(0, 1, 0, 1)
        || ctx.partial.max_combo == Some(ctx.full_combo);
    if !in_tier {
        return None;
    }
    let perfects = ctx.boundary(0, 0, 0, 1).checked_sub(base.score)? / 10;
    let ex_score = ctx.max_ex.checked_sub(3 + perfects)?;
    Some(ScoreRecord {
        ex_score: Some(ex_score),
        ..base.clone()
    })
}
