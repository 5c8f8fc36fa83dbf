//! Integration test: real socket → DeviceInfoServer → fixture profile
//!
//! Binds an ephemeral port, serves a recorded profile and queries it with
//! reqwest, then shuts the server down through its cancellation token.

use std::path::PathBuf;
use std::sync::Arc;

use droidinfo_core::config::NetworkConfig;
use droidinfo_fixture::FixturePlatformProvider;
use droidinfo_server::{DeviceInfoServer, RequestMetrics};
use serde_json::{json, Value};
use tokio_util::sync::CancellationToken;

fn profile(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../profiles")
        .join(name)
}

async fn start(profile: PathBuf) -> (String, CancellationToken, tokio::task::JoinHandle<()>) {
    let server = Arc::new(
        DeviceInfoServer::new(
            Arc::new(FixturePlatformProvider::new(profile)),
            NetworkConfig::default(),
            Some(Arc::new(RequestMetrics::new().unwrap())),
            "127.0.0.1:0",
        )
        .unwrap(),
    );
    let listener = server.bind().await.unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());

    let shutdown = CancellationToken::new();
    let token = shutdown.clone();
    let handle = tokio::spawn(async move {
        server.serve(listener, token).await.unwrap();
    });
    (base, shutdown, handle)
}

#[tokio::test]
async fn test_device_info_over_http() {
    let (base, shutdown, handle) = start(profile("pixel-7.yaml")).await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{base}/session/e2e/appium/device/info"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    assert!(response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("application/json")));

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["sessionId"], json!("e2e"));
    assert_eq!(body["value"]["model"], json!("Pixel 7"));
    assert_eq!(body["value"]["networks"].as_array().map(Vec::len), Some(2));

    let bars: Value = client
        .get(format!("{base}/session/e2e/appium/device/system_bars"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(bars["value"], json!({"statusBar": 118}));

    let metrics = client
        .get(format!("{base}/metrics"))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(metrics.contains("droidinfo_requests_total{route=\"device_info\",status=\"200\"} 1"));
    assert!(metrics.contains("droidinfo_requests_total{route=\"system_bars\",status=\"200\"} 1"));

    shutdown.cancel();
    handle.await.unwrap();
}

#[tokio::test]
async fn test_missing_profile_over_http() {
    let dir = tempfile::tempdir().unwrap();
    let (base, shutdown, handle) = start(dir.path().join("gone.yaml")).await;

    let response = reqwest::get(format!("{base}/session/e2e/appium/device/info"))
        .await
        .unwrap();
    assert_eq!(response.status(), 500);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["value"]["error"], json!("unknown error"));
    assert!(body["value"]["message"]
        .as_str()
        .is_some_and(|m| m.contains("Failed to load device profile")));

    let response = reqwest::get(format!("{base}/status")).await.unwrap();
    assert_eq!(response.status(), 404);

    shutdown.cancel();
    handle.await.unwrap();
}
