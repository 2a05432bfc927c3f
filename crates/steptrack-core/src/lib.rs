//! Score reconstruction and validation engine for step-chart rhythm games.
//!
//! The engine is a pure computation layer over chart note counts and score
//! records: it grades scores, computes a chart's theoretical maxima, merges
//! partial observations into a best composite, validates records against a
//! chart's physical limits, completes partially observed score reports, and
//! enumerates judgment breakdowns consistent with an observed score. It
//! performs no I/O and holds no state; the [`book`] module adds a small
//! file-backed personal-best store on top.

pub mod book;
pub mod chart;
pub mod error;
pub mod score;

pub use book::{BookEntry, ChartKey, ScoreBook};
pub use chart::{ChartMetrics, Difficulty, PlayStyle};
pub use error::{Error, Result};
pub use score::{
    ClearLamp, DanceLevel, FlareRank, JudgmentCounts, PartialScore, ScoreRecord, calc_ex_score,
    calc_score, enumerate_judgment_counts, flare_skill, is_consistent, merge, reconstruct,
};
