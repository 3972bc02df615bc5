use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// File constants
// ---------------------------------------------------------------------------

pub const CONFIG_FILE: &str = "lumen.yaml";

/// Where the frontend and the server expect the generated fixture.
pub const SCHEDULE_FILE: &str = "data/mock/daily.json";

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}

pub fn schedule_path(root: &Path) -> PathBuf {
    root.join(SCHEDULE_FILE)
}

/// Schedule files the server looks for, in priority order: the one beside
/// `root` (a backend checked out next to the data directory) first, then
/// the one inside it.
pub fn schedule_candidates(root: &Path) -> Vec<PathBuf> {
    let mut out = Vec::with_capacity(2);
    if let Some(parent) = root.parent() {
        out.push(parent.join(SCHEDULE_FILE));
    }
    out.push(schedule_path(root));
    out
}

/// Resolve `path` against `root` unless it is already absolute.
pub fn resolve(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}
