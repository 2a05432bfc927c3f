use serde::{Deserialize, Serialize};
use strum::{EnumString, FromRepr, IntoStaticStr};

use crate::error::{Error, Result};

/// Flare rank: the optional gauge-challenge tier of an attempt, tracked
/// independently from the clear lamp.
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
    Default,
    FromRepr,
    EnumString,
    IntoStaticStr,
)]
#[repr(u8)]
pub enum FlareRank {
    #[default]
    None = 0,
    I = 1,
    II = 2,
    III = 3,
    IV = 4,
    V = 5,
    VI = 6,
    VII = 7,
    VIII = 8,
    IX = 9,
    EX = 10,
}

impl FlareRank {
    pub fn from_u8(value: u8) -> Option<Self> {
        Self::from_repr(value)
    }

    pub fn short_name(&self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for FlareRank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

/// Base flare skill score per chart level. Level 20 has no defined base
/// value, so the table stops at 19.
const FLARE_SKILL_BASE: [u32; 19] = [
    145, 155, 170, 185, 205, 230, 255, 290, 335, 400, 465, 510, 545, 575, 600, 620, 635, 650, 665,
];

/// Flare skill bonus for clearing a chart of `level` with `rank`.
///
/// The multiplier grows by 6% per flare rank tier, so EX is x1.6. Computed
/// in exact integer arithmetic: `floor(base * (100 + 6 * rank) / 100)`.
pub fn flare_skill(level: u8, rank: FlareRank) -> Result<u32> {
    let base = match level {
        1..=19 => FLARE_SKILL_BASE[usize::from(level) - 1],
        _ => return Err(Error::LevelOutOfRange(level)),
    };
    Ok(base * (100 + 6 * u32::from(rank as u8)) / 100)
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_flare_skill_values() {
        // No flare rank: the bare base value
        assert_eq!(flare_skill(1, FlareRank::None).unwrap(), 145);
        assert_eq!(flare_skill(19, FlareRank::None).unwrap(), 665);
        // EX multiplies by 1.6
        assert_eq!(flare_skill(19, FlareRank::EX).unwrap(), 1064);
        assert_eq!(flare_skill(18, FlareRank::EX).unwrap(), 1040);
        assert_eq!(flare_skill(10, FlareRank::EX).unwrap(), 640);
        // Intermediate tiers floor
        assert_eq!(flare_skill(11, FlareRank::III).unwrap(), 548); // 465 * 1.18
        assert_eq!(flare_skill(17, FlareRank::IV).unwrap(), 787); // 635 * 1.24
    }

    #[test]
    fn test_flare_skill_rejects_bad_levels() {
        assert!(flare_skill(0, FlareRank::EX).is_err());
        assert!(flare_skill(20, FlareRank::EX).is_err());
        assert!(flare_skill(21, FlareRank::EX).is_err());
    }

    #[test]
    fn test_flare_rank_ordering() {
        assert!(FlareRank::None < FlareRank::I);
        assert!(FlareRank::IX < FlareRank::EX);
    }

    #[test]
    fn test_flare_rank_parse() {
        assert_eq!(FlareRank::from_str("IX"), Ok(FlareRank::IX));
        assert_eq!(FlareRank::from_str("EX"), Ok(FlareRank::EX));
        assert_eq!(FlareRank::from_str("None"), Ok(FlareRank::None));
        assert!(FlareRank::from_str("X").is_err());
    }
}
