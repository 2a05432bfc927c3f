use serde::{Deserialize, Serialize};
use strum::{EnumString, FromRepr, IntoStaticStr};

use crate::error::{Error, Result};

/// Dance level: the letter-grade tier derived solely from the score.
///
/// `E` is reserved for failed attempts and is never produced by the
/// grading table itself.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    FromRepr,
    EnumString,
    IntoStaticStr,
)]
#[repr(u8)]
pub enum DanceLevel {
    E = 0,
    D = 1,
    #[serde(rename = "D+")]
    #[strum(serialize = "D+")]
    DPlus = 2,
    #[serde(rename = "C-")]
    #[strum(serialize = "C-")]
    CMinus = 3,
    C = 4,
    #[serde(rename = "C+")]
    #[strum(serialize = "C+")]
    CPlus = 5,
    #[serde(rename = "B-")]
    #[strum(serialize = "B-")]
    BMinus = 6,
    B = 7,
    #[serde(rename = "B+")]
    #[strum(serialize = "B+")]
    BPlus = 8,
    #[serde(rename = "A-")]
    #[strum(serialize = "A-")]
    AMinus = 9,
    A = 10,
    #[serde(rename = "A+")]
    #[strum(serialize = "A+")]
    APlus = 11,
    #[serde(rename = "AA-")]
    #[strum(serialize = "AA-")]
    AaMinus = 12,
    #[serde(rename = "AA")]
    #[strum(serialize = "AA")]
    Aa = 13,
    #[serde(rename = "AA+")]
    #[strum(serialize = "AA+")]
    AaPlus = 14,
    #[serde(rename = "AAA")]
    #[strum(serialize = "AAA")]
    Aaa = 15,
}

/// Descending (threshold, level) grading table. Scores below every
/// threshold grade as D.
const GRADING_TABLE: [(u32, DanceLevel); 14] = [
    (990_000, DanceLevel::Aaa),
    (950_000, DanceLevel::AaPlus),
    (900_000, DanceLevel::Aa),
    (890_000, DanceLevel::AaMinus),
    (850_000, DanceLevel::APlus),
    (800_000, DanceLevel::A),
    (790_000, DanceLevel::AMinus),
    (750_000, DanceLevel::BPlus),
    (700_000, DanceLevel::B),
    (690_000, DanceLevel::BMinus),
    (650_000, DanceLevel::CPlus),
    (600_000, DanceLevel::C),
    (590_000, DanceLevel::CMinus),
    (550_000, DanceLevel::DPlus),
];

impl DanceLevel {
    pub fn from_u8(value: u8) -> Option<Self> {
        Self::from_repr(value)
    }

    /// Grade a score. Scores above 1,000,000 are rejected.
    pub fn for_score(score: u32) -> Result<Self> {
        if score > 1_000_000 {
            return Err(Error::ScoreOutOfRange(score));
        }
        Ok(Self::lookup(score))
    }

    /// Grading-table lookup for a score already known to be in range.
    pub(crate) fn lookup(score: u32) -> Self {
        GRADING_TABLE
            .iter()
            .find(|(threshold, _)| score >= *threshold)
            .map_or(Self::D, |(_, level)| *level)
    }

    pub fn short_name(&self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for DanceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_name())
    }
}
