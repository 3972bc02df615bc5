use crate::output::{intensity_bar, print_json, print_table};
use anyhow::Context;
use lumen_core::spectrum::WAVELENGTHS_NM;
use lumen_core::{build_schedule, check_tod, io, paths, Profile};
use std::path::{Path, PathBuf};

const BAR_WIDTH: usize = 20;

pub fn run(
    root: &Path,
    profile: &str,
    day: usize,
    tod: f64,
    file: Option<PathBuf>,
    json: bool,
) -> anyhow::Result<()> {
    let profile: Profile = profile.parse()?;
    let tod = check_tod(tod)?;

    let schedule = match file {
        Some(f) => {
            let path = paths::resolve(root, &f);
            io::read_schedule(&path)
                .with_context(|| format!("failed to load {}", path.display()))?
        }
        None => build_schedule(lumen_core::schedule::DEFAULT_DAYS),
    };
    let sample = schedule.sample(profile, day, tod);

    if json {
        return print_json(&sample);
    }

    let mode = sample.mode.map(|m| m.as_str()).unwrap_or("-");
    println!("{profile} day {day} @ {tod:.3}: {mode}");
    let rows = WAVELENGTHS_NM
        .iter()
        .zip(sample.bands)
        .map(|(nm, v)| vec![format!("{nm}"), format!("{v:.3}"), intensity_bar(v, BAR_WIDTH)])
        .collect();
    print_table(&["NM", "LEVEL", "BAR"], rows);
    Ok(())
}
