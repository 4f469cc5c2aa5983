//! HTTP server & routing integration tests

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;
use ttsr_common::config::{default_model_labels, Config};
use ttsr_ui::{build_router, AppState};

/// Create test app state with in-memory database and a temp root folder
async fn test_state() -> (AppState, tempfile::TempDir) {
    let pool = sqlx::SqlitePool::connect(":memory:").await.unwrap();
    ttsr_common::db::init_tables(&pool).await.unwrap();

    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        root_folder: dir.path().to_path_buf(),
        port: 0,
        admin_token: Some("test-secret".to_string()),
        model_labels: default_model_labels(),
    };

    (AppState::new(pool, config), dir)
}

#[tokio::test]
async fn test_root_route_serves_html() {
    let (state, _dir) = test_state().await;
    let app = build_router(state);

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK, "Root route should return 200 OK");

    let content_type = response.headers().get("content-type");
    assert!(
        content_type.is_some() && content_type.unwrap().to_str().unwrap().contains("text/html"),
        "Root route should serve HTML"
    );

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let html = String::from_utf8_lossy(&body);
    assert!(html.contains("TTS Audio File Rating"));
}

#[tokio::test]
async fn test_app_js_served_as_javascript() {
    let (state, _dir) = test_state().await;
    let app = build_router(state);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/static/app.js")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let content_type = response.headers().get("content-type");
    assert!(
        content_type.is_some()
            && content_type
                .unwrap()
                .to_str()
                .unwrap()
                .contains("application/javascript"),
        "/static/app.js should serve JavaScript"
    );
}

#[tokio::test]
async fn test_api_routes_exist() {
    let (state, _dir) = test_state().await;

    // (method, uri) pairs for critical API endpoints; bodies are empty so
    // 400s are expected, but never 404
    let endpoints = vec![
        ("POST", "/api/catalog"),
        ("GET", "/api/catalog"),
        ("POST", "/api/audio"),
        ("GET", "/api/models"),
        ("GET", "/api/assets?model=Google%20TTS"),
        ("POST", "/api/ratings"),
        ("GET", "/api/ratings/summary"),
        ("POST", "/api/export"),
    ];

    for (method, endpoint) in endpoints {
        let app = build_router(state.clone());
        let response = app
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(endpoint)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_ne!(
            response.status(),
            StatusCode::NOT_FOUND,
            "{} {} route should exist",
            method,
            endpoint
        );
    }
}

#[tokio::test]
async fn test_health_endpoint_returns_json() {
    let (state, _dir) = test_state().await;
    let app = build_router(state);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK, "/health should return 200 OK");

    let content_type = response.headers().get("content-type");
    assert!(
        content_type.is_some()
            && content_type
                .unwrap()
                .to_str()
                .unwrap()
                .contains("application/json"),
        "/health should return JSON"
    );

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["status"], "ok", "Health status should be 'ok'");
    assert_eq!(json["module"], "ttsr-ui", "Module should be 'ttsr-ui'");
    assert!(json["version"].is_string(), "Version should be a string");
}

#[tokio::test]
async fn test_models_endpoint_returns_vocabulary() {
    let (state, _dir) = test_state().await;
    let app = build_router(state);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/models")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(
        json["models"],
        serde_json::json!(["Google TTS", "Facebook MMS", "Indic TTS", "Venkaiah TTS"])
    );
}

#[tokio::test]
async fn test_ingested_audio_is_served_for_playback() {
    let (state, _dir) = test_state().await;

    // Ingest one clip through the service, then fetch it over /audio
    let ingestor =
        ttsr_ui::services::AudioIngestor::new(state.db.clone(), state.config.audio_dir());
    ingestor
        .ingest(&[("7_GoogleTTS_sample.wav".to_string(), b"RIFFdata".to_vec())])
        .await
        .unwrap();

    let app = build_router(state);
    let response = app
        .oneshot(
            Request::builder()
                .uri("/audio/7_GoogleTTS_sample.wav")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&body[..], b"RIFFdata");
}
