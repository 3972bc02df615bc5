use axum::Json;

pub const SERVICE_NAME: &str = "lumen";

/// GET /health
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "ok": true }))
}

/// GET /: liveness ping with the server clock.
pub async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "ok": true,
        "service": SERVICE_NAME,
        "time": chrono::Utc::now().to_rfc3339(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn health_is_ok() {
        let Json(body) = health().await;
        assert_eq!(body["ok"], true);
    }

    #[tokio::test]
    async fn root_reports_service_and_time() {
        let Json(body) = root().await;
        assert_eq!(body["service"], "lumen");
        let time = body["time"].as_str().unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(time).is_ok());
    }
}
