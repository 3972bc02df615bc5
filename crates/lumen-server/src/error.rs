use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use lumen_core::error::LumenError;

// ---------------------------------------------------------------------------
// AppError
// ---------------------------------------------------------------------------

/// Unified error type for HTTP responses.
#[derive(Debug)]
pub struct AppError(pub anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = if let Some(e) = self.0.downcast_ref::<LumenError>() {
            match e {
                LumenError::UnknownProfile(_)
                | LumenError::UnknownMode(_)
                | LumenError::InvalidTimeOfDay(_) => {
                    StatusCode::BAD_REQUEST
                }
                LumenError::InvalidSchedule(_) => StatusCode::UNPROCESSABLE_ENTITY,
                LumenError::Io(_)
                | LumenError::Yaml(_)
                | LumenError::Json(_) => StatusCode::INTERNAL_SERVER_ERROR,
            }
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };

        let body = serde_json::json!({ "error": self.0.to_string() });
        (status, axum::Json(body)).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
