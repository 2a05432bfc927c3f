use serde::{Deserialize, Serialize};
use strum::{EnumString, FromRepr, IntoStaticStr};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    FromRepr,
    EnumString,
    IntoStaticStr,
)]
#[repr(u8)]
#[serde(rename_all = "UPPERCASE")]
pub enum PlayStyle {
    #[strum(serialize = "SINGLE")]
    Single = 1,
    #[strum(serialize = "DOUBLE")]
    Double = 2,
}

impl PlayStyle {
    pub fn from_u8(value: u8) -> Option<Self> {
        Self::from_repr(value)
    }

    pub fn short_name(&self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for PlayStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

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
#[serde(rename_all = "UPPERCASE")]
pub enum Difficulty {
    #[strum(serialize = "BEGINNER")]
    Beginner = 0,
    #[strum(serialize = "BASIC")]
    Basic = 1,
    #[strum(serialize = "DIFFICULT")]
    Difficult = 2,
    #[strum(serialize = "EXPERT")]
    Expert = 3,
    #[strum(serialize = "CHALLENGE")]
    Challenge = 4,
}

impl Difficulty {
    pub fn from_u8(value: u8) -> Option<Self> {
        Self::from_repr(value)
    }

    pub fn short_name(&self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_name())
    }
}
