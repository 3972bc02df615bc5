use thiserror::Error;

#[derive(Debug, Error)]
pub enum LumenError {
    #[error("invalid schedule: {0}")]
    InvalidSchedule(String),

    #[error("unknown profile '{0}': expected 'human' or 'plant'")]
    UnknownProfile(String),

    #[error("unknown mode: {0}")]
    UnknownMode(String),

    #[error("time of day must be within [0, 1], got {0}")]
    InvalidTimeOfDay(f64),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LumenError>;
