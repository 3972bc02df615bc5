use crate::output::print_json;
use anyhow::Context;
use lumen_core::config::Config;
use lumen_core::{build_schedule, io, paths};
use std::path::{Path, PathBuf};

pub fn run(root: &Path, out: Option<PathBuf>, days: Option<u32>, json: bool) -> anyhow::Result<()> {
    let config = Config::load(root).context("failed to load config")?;
    let days = days.unwrap_or(config.days);

    let schedule = build_schedule(days);
    tracing::debug!(days, "schedule built");

    if out.as_deref() == Some(Path::new("-")) {
        print!("{}", io::schedule_to_json(&schedule)?);
        return Ok(());
    }

    let path = match out {
        Some(p) => paths::resolve(root, &p),
        None => config.output_path(root),
    };
    io::write_schedule(&path, &schedule)
        .with_context(|| format!("failed to write {}", path.display()))?;

    if json {
        print_json(&serde_json::json!({
            "path": path,
            "days": days,
            "bands": schedule.meta.bands,
        }))?;
    } else {
        println!("[ok] wrote {}", path.display());
    }
    Ok(())
}
