use std::path::Path;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;

use filediff::application::services::diff::text_diff::DiffGranularity;
use filediff::bootstrap::app_context::AppContext;
use filediff::bootstrap::config::Config;
use filediff::presentation::http;

fn app(granularity: DiffGranularity) -> Router {
    let cfg = Config {
        diff_granularity: granularity,
        ..Config::default()
    };
    http::router(AppContext::from_config(cfg)).unwrap()
}

fn path_str(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

#[tokio::test]
async fn compare_returns_annotated_lines() {
    let dir = tempfile::tempdir().unwrap();
    let left = dir.path().join("left.txt");
    let right = dir.path().join("right.txt");
    std::fs::write(&left, "line1\nold\nline2\n").unwrap();
    std::fs::write(&right, "line1\nnew\nline2\n").unwrap();

    let (status, body) = post_json(
        app(DiffGranularity::Lines),
        "/api/files/compare",
        json!({ "leftPath": path_str(&left), "rightPath": path_str(&right) }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["leftLines"],
        json!([
            { "lineNumber": 1, "content": "line1", "type": "same" },
            { "lineNumber": 2, "content": "old", "type": "removed" },
            { "lineNumber": 3, "content": "line2", "type": "same" },
        ])
    );
    assert_eq!(
        body["rightLines"],
        json!([
            { "lineNumber": 1, "content": "line1", "type": "same" },
            { "lineNumber": 2, "content": "new", "type": "added" },
            { "lineNumber": 3, "content": "line2", "type": "same" },
        ])
    );
    assert_eq!(body["summary"], json!({ "added": 1, "removed": 1, "unchanged": 2 }));
}

#[tokio::test]
async fn compare_identical_files_with_char_diff() {
    let dir = tempfile::tempdir().unwrap();
    let left = dir.path().join("a.txt");
    let right = dir.path().join("b.txt");
    std::fs::write(&left, "same\ntext\n").unwrap();
    std::fs::write(&right, "same\ntext\n").unwrap();

    let (status, body) = post_json(
        app(DiffGranularity::Chars),
        "/api/files/compare",
        json!({ "leftPath": path_str(&left), "rightPath": path_str(&right) }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["leftLines"], body["rightLines"]);
    assert_eq!(body["leftLines"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn compare_with_default_config_splits_at_character_changes() {
    let dir = tempfile::tempdir().unwrap();
    let left = dir.path().join("left.txt");
    let right = dir.path().join("right.txt");
    std::fs::write(&left, "line1\nold\nline2\n").unwrap();
    std::fs::write(&right, "line1\nnew\nline2\n").unwrap();

    let router = http::router(AppContext::from_config(Config::default())).unwrap();
    let (status, body) = post_json(
        router,
        "/api/files/compare",
        json!({ "leftPath": path_str(&left), "rightPath": path_str(&right) }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["leftLines"],
        json!([
            { "lineNumber": 1, "content": "line1", "type": "same" },
            { "lineNumber": 2, "content": "old", "type": "removed" },
            { "lineNumber": 3, "content": "", "type": "same" },
            { "lineNumber": 4, "content": "line2", "type": "same" },
        ])
    );
    assert_eq!(
        body["rightLines"],
        json!([
            { "lineNumber": 1, "content": "line1", "type": "same" },
            { "lineNumber": 2, "content": "new", "type": "added" },
            { "lineNumber": 3, "content": "", "type": "same" },
            { "lineNumber": 4, "content": "line2", "type": "same" },
        ])
    );
}

#[tokio::test]
async fn compare_missing_file_is_404() {
    let dir = tempfile::tempdir().unwrap();
    let left = dir.path().join("present.txt");
    std::fs::write(&left, "x\n").unwrap();

    let (status, body) = post_json(
        app(DiffGranularity::Lines),
        "/api/files/compare",
        json!({
            "leftPath": path_str(&left),
            "rightPath": path_str(&dir.path().join("absent.txt")),
        }),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("absent.txt"));
}

#[tokio::test]
async fn compare_rejects_blank_path() {
    let (status, _) = post_json(
        app(DiffGranularity::Lines),
        "/api/files/compare",
        json!({ "leftPath": "", "rightPath": "/tmp/x" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn apply_copies_in_requested_direction() {
    let dir = tempfile::tempdir().unwrap();
    let left = dir.path().join("left.txt");
    let right = dir.path().join("right.txt");
    std::fs::write(&left, "left\n").unwrap();
    std::fs::write(&right, "right\n").unwrap();

    let (status, _) = post_json(
        app(DiffGranularity::Lines),
        "/api/files/apply",
        json!({
            "leftPath": path_str(&left),
            "rightPath": path_str(&right),
            "direction": "right_to_left",
        }),
    )
    .await;

    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(std::fs::read_to_string(&left).unwrap(), "right\n");
    assert_eq!(std::fs::read_to_string(&right).unwrap(), "right\n");
}

#[tokio::test]
async fn merge_writes_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let left = dir.path().join("left.txt");
    let right = dir.path().join("right.txt");
    let output = dir.path().join("merged.txt");
    std::fs::write(&left, "a\nb\n").unwrap();
    std::fs::write(&right, "a\nc\n").unwrap();

    let (status, _) = post_json(
        app(DiffGranularity::Lines),
        "/api/files/merge",
        json!({
            "leftPath": path_str(&left),
            "rightPath": path_str(&right),
            "outputPath": path_str(&output),
        }),
    )
    .await;

    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(std::fs::read_to_string(&output).unwrap(), "a\nc\n");
}

#[tokio::test]
async fn health_and_openapi_are_served() {
    let response = app(DiffGranularity::Lines)
        .oneshot(Request::get("/api/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app(DiffGranularity::Lines)
        .oneshot(Request::get("/api/openapi.json").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let doc: Value = serde_json::from_slice(&bytes).unwrap();
    assert!(doc["paths"]["/api/files/compare"].is_object());
}
