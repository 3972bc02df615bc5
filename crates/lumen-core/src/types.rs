use crate::spectrum::{self, Bands};
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Profile
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Profile {
    Human,
    Plant,
}

impl Profile {
    pub fn all() -> &'static [Profile] {
        &[Profile::Human, Profile::Plant]
    }

    /// Modes emitted for one day of this profile, in time-of-day order.
    pub fn modes(self) -> &'static [Mode] {
        match self {
            Profile::Human => &[Mode::Sleep, Mode::WakeSync, Mode::Work, Mode::WindDown],
            Profile::Plant => &[Mode::Night, Mode::GrowthSurge, Mode::Maintain],
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Profile::Human => "human",
            Profile::Plant => "plant",
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Profile {
    type Err = crate::error::LumenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "human" => Ok(Profile::Human),
            "plant" => Ok(Profile::Plant),
            _ => Err(crate::error::LumenError::UnknownProfile(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Mode
// ---------------------------------------------------------------------------

/// A named lighting regime. Serialized with its display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    #[serde(rename = "SLEEP")]
    Sleep,
    #[serde(rename = "WAKE SYNC")]
    WakeSync,
    #[serde(rename = "WORK")]
    Work,
    #[serde(rename = "WIND DOWN")]
    WindDown,
    #[serde(rename = "NIGHT")]
    Night,
    #[serde(rename = "GROWTH SURGE")]
    GrowthSurge,
    #[serde(rename = "MAINTAIN")]
    Maintain,
}

impl Mode {
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Sleep => "SLEEP",
            Mode::WakeSync => "WAKE SYNC",
            Mode::Work => "WORK",
            Mode::WindDown => "WIND DOWN",
            Mode::Night => "NIGHT",
            Mode::GrowthSurge => "GROWTH SURGE",
            Mode::Maintain => "MAINTAIN",
        }
    }

    pub fn profile(self) -> Profile {
        match self {
            Mode::Sleep | Mode::WakeSync | Mode::Work | Mode::WindDown => Profile::Human,
            Mode::Night | Mode::GrowthSurge | Mode::Maintain => Profile::Plant,
        }
    }

    /// Fraction of the day at which this mode's keyframe sits.
    pub fn tod(self) -> f64 {
        match self {
            Mode::Sleep => 0.00,
            Mode::WakeSync => 0.25,
            Mode::Work => 0.50,
            Mode::WindDown => 0.75,
            Mode::Night => 0.00,
            Mode::GrowthSurge => 0.30,
            Mode::Maintain => 0.65,
        }
    }

    /// Fixed intensity scalar applied on top of the day modulation.
    pub fn multiplier(self) -> f64 {
        match self {
            Mode::Sleep => 0.95,
            Mode::WakeSync => 1.00,
            Mode::Work => 0.98,
            Mode::WindDown => 0.96,
            Mode::Night => 0.96,
            Mode::GrowthSurge => 1.00,
            Mode::Maintain => 0.98,
        }
    }

    pub fn reference(self) -> &'static Bands {
        match self {
            Mode::Sleep => &spectrum::HUMAN_SLEEP,
            Mode::WakeSync => &spectrum::HUMAN_WAKE,
            Mode::Work => &spectrum::HUMAN_WORK,
            Mode::WindDown => &spectrum::HUMAN_WIND,
            Mode::Night => &spectrum::PLANT_NIGHT,
            Mode::GrowthSurge => &spectrum::PLANT_SURGE,
            Mode::Maintain => &spectrum::PLANT_MAINT,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Mode {
    type Err = crate::error::LumenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Profile::all()
            .iter()
            .flat_map(|p| p.modes())
            .copied()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| crate::error::LumenError::UnknownMode(s.to_string()))
    }
}
