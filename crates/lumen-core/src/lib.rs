pub mod config;
pub mod error;
pub mod io;
pub mod paths;
pub mod sample;
pub mod schedule;
pub mod spectrum;
pub mod types;

pub use error::{LumenError, Result};
pub use sample::{check_tod, Sample};
pub use schedule::{build_schedule, day_mod, DayRecord, Keyframe, Meta, Schedule};
pub use types::{Mode, Profile};
