use axum::http::StatusCode;
use http_body_util::BodyExt;
use lumen_core::schedule::build_schedule;
use tempfile::TempDir;
use tower::ServiceExt;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// A backend root nested one level inside the temp dir, so both schedule
/// candidates live inside it.
fn backend_root(dir: &TempDir) -> std::path::PathBuf {
    let root = dir.path().join("backend");
    std::fs::create_dir_all(&root).unwrap();
    root
}

/// Send a GET request via `oneshot` and return (status, parsed JSON body).
async fn get(app: axum::Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let req = axum::http::Request::builder()
        .uri(uri)
        .body(axum::body::Body::empty())
        .unwrap();
    let response = app.oneshot(req).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
    (status, json)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[tokio::test]
async fn health_returns_ok() {
    let dir = TempDir::new().unwrap();
    let app = lumen_server::build_router(backend_root(&dir));
    let (status, json) = get(app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["ok"], true);
}

#[tokio::test]
async fn root_names_the_service() {
    let dir = TempDir::new().unwrap();
    let app = lumen_server::build_router(backend_root(&dir));
    let (status, json) = get(app, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["service"], "lumen");
    assert!(json["time"].is_string());
}

#[tokio::test]
async fn schedule_falls_back_to_generated() {
    let dir = TempDir::new().unwrap();
    let app = lumen_server::build_router(backend_root(&dir));
    let (status, json) = get(app, "/schedule/30d").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["human"].as_array().unwrap().len(), 30);
    assert_eq!(json["plant"].as_array().unwrap().len(), 30);
    assert_eq!(json["meta"]["bands"], 12);
    assert_eq!(json["human"][0]["keyframes"][2]["mode"], "WORK");
    assert_eq!(json["plant"][29]["day"], 29);
}

#[tokio::test]
async fn schedule_serves_file_from_data_dir() {
    let dir = TempDir::new().unwrap();
    let root = backend_root(&dir);
    lumen_core::io::write_schedule(&root.join("data/mock/daily.json"), &build_schedule(7)).unwrap();

    let app = lumen_server::build_router(root);
    let (status, json) = get(app, "/schedule/30d").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["human"].as_array().unwrap().len(), 7);
}

#[tokio::test]
async fn schedule_ignores_invalid_file() {
    let dir = TempDir::new().unwrap();
    let root = backend_root(&dir);
    let path = root.join("data/mock/daily.json");
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, r#"{"human":[],"plant":[],"meta":{"bands":6,"wavelengthsNm":[]}}"#)
        .unwrap();

    let app = lumen_server::build_router(root);
    let (status, json) = get(app, "/schedule/30d").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["meta"]["bands"], 12);
    assert_eq!(json["plant"].as_array().unwrap().len(), 30);
}

#[tokio::test]
async fn sample_returns_keyframe_at_its_time() {
    let dir = TempDir::new().unwrap();
    let app = lumen_server::build_router(backend_root(&dir));
    let (status, json) = get(app, "/schedule/sample?profile=plant&day=3&tod=0.3").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["mode"], "GROWTH SURGE");
    let expected = build_schedule(30).plant[3].keyframes[1].bands;
    let got = json["bands"].as_array().unwrap();
    assert_eq!(got.len(), expected.len());
    for (g, e) in got.iter().zip(expected) {
        assert!((g.as_f64().unwrap() - e).abs() < 1e-12);
    }
}

#[tokio::test]
async fn sample_unknown_profile_is_bad_request() {
    let dir = TempDir::new().unwrap();
    let app = lumen_server::build_router(backend_root(&dir));
    let (status, json) = get(app, "/schedule/sample?profile=fungus").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("fungus"));
}

#[tokio::test]
async fn sample_nan_tod_is_bad_request() {
    let dir = TempDir::new().unwrap();
    let app = lumen_server::build_router(backend_root(&dir));
    let (status, json) = get(app, "/schedule/sample?profile=human&day=0&tod=NaN").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("time of day"));
}

#[tokio::test]
async fn sample_tod_past_end_of_day_is_bad_request() {
    let dir = TempDir::new().unwrap();
    let app = lumen_server::build_router(backend_root(&dir));
    let (status, json) = get(app, "/schedule/sample?profile=human&day=0&tod=5").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json.get("bands").is_none());
}

#[tokio::test]
async fn sample_requires_profile() {
    let dir = TempDir::new().unwrap();
    let app = lumen_server::build_router(backend_root(&dir));
    let (status, _json) = get(app, "/schedule/sample?day=1").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}
