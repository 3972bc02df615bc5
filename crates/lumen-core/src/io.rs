use crate::error::Result;
use crate::schedule::Schedule;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Atomically write `data` to `path` using a tempfile in the same directory.
/// Prevents a half-written fixture from being served.
pub fn atomic_write(path: &Path, data: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(data)?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Pretty JSON with two-space indentation, newline-terminated.
pub fn schedule_to_json(schedule: &Schedule) -> Result<String> {
    let mut out = serde_json::to_string_pretty(schedule)?;
    out.push('\n');
    Ok(out)
}

pub fn write_schedule(path: &Path, schedule: &Schedule) -> Result<()> {
    let json = schedule_to_json(schedule)?;
    atomic_write(path, json.as_bytes())
}

/// Read a schedule file and check it against the frontend contract.
pub fn read_schedule(path: &Path) -> Result<Schedule> {
    let data = std::fs::read_to_string(path)?;
    let schedule: Schedule = serde_json::from_str(&data)?;
    schedule.validate()?;
    Ok(schedule)
}
