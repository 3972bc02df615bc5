use crate::output::print_json;
use anyhow::Context;
use lumen_core::{io, paths};
use std::path::Path;

pub fn run(root: &Path, file: &Path, json: bool) -> anyhow::Result<()> {
    let path = paths::resolve(root, file);
    let schedule = io::read_schedule(&path)
        .with_context(|| format!("{} is not a valid schedule", path.display()))?;

    if json {
        print_json(&serde_json::json!({
            "valid": true,
            "human_days": schedule.human.len(),
            "plant_days": schedule.plant.len(),
            "bands": schedule.meta.bands,
        }))?;
    } else {
        println!(
            "{} is valid: {} human days, {} plant days, {} bands",
            path.display(),
            schedule.human.len(),
            schedule.plant.len(),
            schedule.meta.bands
        );
    }
    Ok(())
}
