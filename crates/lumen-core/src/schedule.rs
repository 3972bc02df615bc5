use crate::error::{LumenError, Result};
use crate::spectrum::{self, Bands, BAND_COUNT, WAVELENGTHS_NM};
use crate::types::{Mode, Profile};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

pub const DEFAULT_DAYS: u32 = 30;

/// Length of the slow modulation cycle, in days.
pub const MODULATION_PERIOD_DAYS: f64 = 30.0;

// ---------------------------------------------------------------------------
// Document types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keyframe {
    pub tod: f64,
    pub bands: Bands,
    pub mode: Mode,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayRecord {
    pub day: u32,
    pub keyframes: Vec<Keyframe>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meta {
    pub bands: usize,
    #[serde(rename = "wavelengthsNm")]
    pub wavelengths_nm: Vec<u32>,
}

impl Default for Meta {
    fn default() -> Self {
        Self {
            bands: BAND_COUNT,
            wavelengths_nm: WAVELENGTHS_NM.to_vec(),
        }
    }
}

/// The document served at `/schedule/30d`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    pub human: Vec<DayRecord>,
    pub plant: Vec<DayRecord>,
    pub meta: Meta,
}

// ---------------------------------------------------------------------------
// Generation
// ---------------------------------------------------------------------------

/// Slow multi-day trend in [0.9, 1.1].
pub fn day_mod(day: u32) -> f64 {
    1.0 + 0.1 * (2.0 * PI * f64::from(day) / MODULATION_PERIOD_DAYS).sin()
}

pub fn keyframes_for_day(profile: Profile, day: u32) -> Vec<Keyframe> {
    let f = day_mod(day);
    profile
        .modes()
        .iter()
        .map(|&mode| Keyframe {
            tod: mode.tod(),
            bands: spectrum::apply_day_mod(*mode.reference(), f * mode.multiplier()),
            mode,
        })
        .collect()
}

pub fn human_keyframes_for_day(day: u32) -> Vec<Keyframe> {
    keyframes_for_day(Profile::Human, day)
}

pub fn plant_keyframes_for_day(day: u32) -> Vec<Keyframe> {
    keyframes_for_day(Profile::Plant, day)
}

fn build_days(profile: Profile, days: u32) -> Vec<DayRecord> {
    (0..days)
        .map(|day| DayRecord {
            day,
            keyframes: keyframes_for_day(profile, day),
        })
        .collect()
}

pub fn build_schedule(days: u32) -> Schedule {
    Schedule {
        human: build_days(Profile::Human, days),
        plant: build_days(Profile::Plant, days),
        meta: Meta::default(),
    }
}

// ---------------------------------------------------------------------------
// Access and validation
// ---------------------------------------------------------------------------

impl Schedule {
    pub fn days(&self, profile: Profile) -> &[DayRecord] {
        match profile {
            Profile::Human => &self.human,
            Profile::Plant => &self.plant,
        }
    }

    /// Check the structural contract the frontend relies on.
    pub fn validate(&self) -> Result<()> {
        if self.meta.bands != BAND_COUNT {
            return Err(invalid(format!(
                "meta.bands is {}, expected {BAND_COUNT}",
                self.meta.bands
            )));
        }
        if self.meta.wavelengths_nm != WAVELENGTHS_NM {
            return Err(invalid(format!(
                "meta.wavelengthsNm is {:?}, expected {:?}",
                self.meta.wavelengths_nm, WAVELENGTHS_NM
            )));
        }
        for &profile in Profile::all() {
            for (i, record) in self.days(profile).iter().enumerate() {
                validate_day(profile, i, record)?;
            }
        }
        Ok(())
    }
}

fn validate_day(profile: Profile, index: usize, record: &DayRecord) -> Result<()> {
    if record.day as usize != index {
        return Err(invalid(format!(
            "{profile}[{index}] has day {}, expected {index}",
            record.day
        )));
    }
    for (k, frame) in record.keyframes.iter().enumerate() {
        if !(0.0..=1.0).contains(&frame.tod) {
            return Err(invalid(format!(
                "{profile} day {index} keyframe {k}: tod {} outside [0, 1]",
                frame.tod
            )));
        }
        if frame.mode.profile() != profile {
            return Err(invalid(format!(
                "{profile} day {index} keyframe {k}: mode '{}' belongs to {}",
                frame.mode,
                frame.mode.profile()
            )));
        }
        if let Some(band) = frame.bands.iter().position(|v| !(0.0..=1.0).contains(v)) {
            return Err(invalid(format!(
                "{profile} day {index} keyframe {k}: band {band} intensity {} outside [0, 1]",
                frame.bands[band]
            )));
        }
    }
    if record.keyframes.windows(2).any(|w| w[0].tod > w[1].tod) {
        return Err(invalid(format!(
            "{profile} day {index}: keyframes are not ordered by tod"
        )));
    }
    Ok(())
}

fn invalid(msg: String) -> LumenError {
    LumenError::InvalidSchedule(msg)
}
