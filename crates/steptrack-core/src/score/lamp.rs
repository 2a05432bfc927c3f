use serde::{Deserialize, Serialize};
use strum::{FromRepr, IntoStaticStr};

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
    IntoStaticStr,
)]
#[repr(u8)]
pub enum ClearLamp {
    #[default]
    #[strum(serialize = "Failed")]
    Failed = 0,
    #[strum(serialize = "Assisted Clear")]
    AssistedClear = 1,
    #[strum(serialize = "Clear")]
    Clear = 2,
    #[strum(serialize = "Life 4")]
    Life4 = 3,
    #[strum(serialize = "Full Combo")]
    FullCombo = 4,
    #[strum(serialize = "Great Full Combo")]
    GreatFullCombo = 5,
    #[strum(serialize = "Perfect Full Combo")]
    PerfectFullCombo = 6,
    #[strum(serialize = "Marvelous Full Combo")]
    MarvelousFullCombo = 7,
}

impl ClearLamp {
    pub fn from_u8(value: u8) -> Option<Self> {
        Self::from_repr(value)
    }

    pub fn short_name(&self) -> &'static str {
        self.into()
    }

    /// Any full-combo tier (the attempt contained no Miss)
    pub fn is_full_combo(&self) -> bool {
        *self >= Self::FullCombo
    }
}

impl std::fmt::Display for ClearLamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_name())
    }
}
