use crate::error::{LumenError, Result};
use crate::schedule::{DayRecord, Keyframe, Schedule};
use crate::spectrum::{lerp, Bands, BAND_COUNT};
use crate::types::{Mode, Profile};
use serde::Serialize;

/// Spectrum at an arbitrary point in a day, interpolated between keyframes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sample {
    pub bands: Bands,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<Mode>,
}

impl Sample {
    fn dark() -> Self {
        Self {
            bands: [0.0; BAND_COUNT],
            mode: None,
        }
    }

    fn at(frame: &Keyframe) -> Self {
        Self {
            bands: frame.bands,
            mode: Some(frame.mode),
        }
    }
}

/// Accept only a time of day that is a fraction of the day. NaN and
/// infinities are rejected along with anything outside [0, 1].
pub fn check_tod(tod: f64) -> Result<f64> {
    if (0.0..=1.0).contains(&tod) {
        Ok(tod)
    } else {
        Err(LumenError::InvalidTimeOfDay(tod))
    }
}

impl DayRecord {
    /// Sample this day at `tod`.
    ///
    /// Outside the keyframe range the nearest keyframe is held. Between two
    /// keyframes the bands are interpolated and the mode switches at the
    /// midpoint.
    pub fn sample(&self, tod: f64) -> Sample {
        let mut sorted: Vec<&Keyframe> = self.keyframes.iter().collect();
        sorted.sort_by(|a, b| a.tod.total_cmp(&b.tod));

        let (Some(first), Some(last)) = (sorted.first(), sorted.last()) else {
            return Sample::dark();
        };
        if tod <= first.tod {
            return Sample::at(first);
        }
        if tod >= last.tod {
            return Sample::at(last);
        }
        if let Some(hit) = sorted.iter().find(|k| k.tod == tod) {
            return Sample::at(hit);
        }

        let mut i = 0;
        while i < sorted.len() - 1 && tod > sorted[i + 1].tod {
            i += 1;
        }
        let (k0, k1) = (sorted[i], sorted[i + 1]);
        let span = match k1.tod - k0.tod {
            s if s == 0.0 => 1.0,
            s => s,
        };
        let t = (tod - k0.tod) / span;

        Sample {
            bands: std::array::from_fn(|b| lerp(k0.bands[b], k1.bands[b], t)),
            mode: Some(if t < 0.5 { k0.mode } else { k1.mode }),
        }
    }
}

impl Schedule {
    /// Sample `profile` on `day` at `tod`. Days past either end clamp to the
    /// first or last record.
    pub fn sample(&self, profile: Profile, day: usize, tod: f64) -> Sample {
        let days = self.days(profile);
        match days.len() {
            0 => Sample::dark(),
            n => days[day.min(n - 1)].sample(tod),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::build_schedule;

    fn frame(tod: f64, level: f64, mode: Mode) -> Keyframe {
        Keyframe {
            tod,
            bands: [level; BAND_COUNT],
            mode,
        }
    }

    fn two_frame_day() -> DayRecord {
        DayRecord {
            day: 0,
            keyframes: vec![
                frame(0.2, 0.0, Mode::Night),
                frame(0.6, 1.0, Mode::GrowthSurge),
            ],
        }
    }

    #[test]
    fn sample_at_keyframe_returns_it_exactly() {
        let s = build_schedule(30);
        let day = &s.human[3];
        for k in &day.keyframes {
            let sample = day.sample(k.tod);
            assert_eq!(sample.bands, k.bands);
            assert_eq!(sample.mode, Some(k.mode));
        }
    }

    #[test]
    fn sample_holds_before_first_and_after_last() {
        let day = two_frame_day();
        assert_eq!(day.sample(0.0).bands, [0.0; BAND_COUNT]);
        assert_eq!(day.sample(0.0).mode, Some(Mode::Night));
        assert_eq!(day.sample(0.99).bands, [1.0; BAND_COUNT]);
        assert_eq!(day.sample(0.99).mode, Some(Mode::GrowthSurge));
    }

    #[test]
    fn sample_interpolates_between_keyframes() {
        let day = two_frame_day();
        let sample = day.sample(0.3);
        assert!((sample.bands[0] - 0.25).abs() < 1e-12);
        assert_eq!(sample.mode, Some(Mode::Night));

        let sample = day.sample(0.5);
        assert!((sample.bands[7] - 0.75).abs() < 1e-12);
        assert_eq!(sample.mode, Some(Mode::GrowthSurge));
    }

    #[test]
    fn sample_sorts_unordered_keyframes() {
        let mut day = two_frame_day();
        day.keyframes.reverse();
        assert!((day.sample(0.3).bands[0] - 0.25).abs() < 1e-12);
    }

    #[test]
    fn sample_without_keyframes_is_dark() {
        let day = DayRecord {
            day: 0,
            keyframes: vec![],
        };
        assert_eq!(day.sample(0.5), Sample::dark());
    }

    #[test]
    fn schedule_sample_clamps_day_index() {
        let s = build_schedule(5);
        assert_eq!(
            s.sample(Profile::Plant, 99, 0.3),
            s.plant[4].sample(0.3)
        );
        assert_eq!(build_schedule(0).sample(Profile::Human, 0, 0.5), Sample::dark());
    }

    #[test]
    fn check_tod_accepts_unit_range() {
        assert_eq!(check_tod(0.0).unwrap(), 0.0);
        assert_eq!(check_tod(1.0).unwrap(), 1.0);
        assert_eq!(check_tod(0.42).unwrap(), 0.42);
    }

    #[test]
    fn check_tod_rejects_non_fractions() {
        for tod in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY, -0.01, 5.0] {
            assert!(
                matches!(check_tod(tod), Err(LumenError::InvalidTimeOfDay(_))),
                "{tod} accepted"
            );
        }
    }

    #[test]
    fn sample_mode_is_omitted_when_dark() {
        let json = serde_json::to_value(Sample::dark()).unwrap();
        assert!(json.get("mode").is_none());
        assert_eq!(json["bands"].as_array().unwrap().len(), BAND_COUNT);
    }
}
