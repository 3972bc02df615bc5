use axum::extract::{Query, State};
use axum::Json;
use lumen_core::schedule::{build_schedule, Schedule, DEFAULT_DAYS};
use lumen_core::{check_tod, paths, Profile, Sample};
use serde::Deserialize;
use std::path::Path;

use crate::error::AppError;
use crate::state::AppState;

/// First valid fixture among the candidate paths, else a freshly generated
/// 30-day schedule.
pub fn load_or_generate(root: &Path) -> Schedule {
    for path in paths::schedule_candidates(root) {
        if !path.exists() {
            continue;
        }
        match lumen_core::io::read_schedule(&path) {
            Ok(schedule) => {
                tracing::debug!(path = %path.display(), "serving schedule file");
                return schedule;
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring schedule file");
            }
        }
    }
    build_schedule(DEFAULT_DAYS)
}

async fn current_schedule(app: &AppState) -> Result<Schedule, AppError> {
    let root = app.root.clone();
    tokio::task::spawn_blocking(move || load_or_generate(&root))
        .await
        .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))
}

/// GET /schedule/30d: the document consumed by the frontend schedule hook.
pub async fn get_schedule(State(app): State<AppState>) -> Result<Json<Schedule>, AppError> {
    Ok(Json(current_schedule(&app).await?))
}

#[derive(Deserialize)]
pub struct SampleQuery {
    profile: String,
    #[serde(default)]
    day: usize,
    #[serde(default)]
    tod: f64,
}

/// GET /schedule/sample?profile=human&day=3&tod=0.4
pub async fn get_sample(
    State(app): State<AppState>,
    Query(q): Query<SampleQuery>,
) -> Result<Json<Sample>, AppError> {
    let profile: Profile = q.profile.parse()?;
    let tod = check_tod(q.tod)?;
    let schedule = current_schedule(&app).await?;
    Ok(Json(schedule.sample(profile, q.day, tod)))
}
