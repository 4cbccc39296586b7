//! Integration tests for the health endpoint and CORS layer.
//!
//! Run with: cargo test -p donatello-backend --test health_check

mod common;

use common::spawn_app;
use reqwest::Client;
use std::time::Duration;

#[tokio::test]
async fn health_check_returns_healthy() {
    let port = spawn_app().await;
    let client = Client::new();

    let response = client
        .get(format!("http://localhost:{}/health", port))
        .timeout(Duration::from_secs(5))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "donatello-backend");
}

#[tokio::test]
async fn allowed_origin_gets_cors_headers() {
    let port = spawn_app().await;
    let client = Client::new();

    let response = client
        .get(format!("http://localhost:{}/health", port))
        .header("Origin", "http://localhost:3000")
        .timeout(Duration::from_secs(5))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("http://localhost:3000")
    );
}

#[tokio::test]
async fn unknown_origin_gets_no_cors_headers() {
    let port = spawn_app().await;
    let client = Client::new();

    let response = client
        .get(format!("http://localhost:{}/health", port))
        .header("Origin", "http://evil.example.com")
        .timeout(Duration::from_secs(5))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response
        .headers()
        .get("access-control-allow-origin")
        .is_none());
}
