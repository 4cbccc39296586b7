//! Shared helpers for integration tests.

use donatello_backend::config::DonatelloConfig;
use donatello_backend::startup::Application;
use std::time::Duration;

/// Spawn the application on a random port and return the port number.
///
/// GOOGLE_AI_API_KEY is blanked, so the assistant endpoint serves its canned
/// replies and tests never touch the network beyond localhost.
pub async fn spawn_app() -> u16 {
    std::env::set_var("ENVIRONMENT", "test");
    std::env::set_var("APP__PORT", "0"); // Random port
    std::env::set_var("GOOGLE_AI_API_KEY", "");

    let config = DonatelloConfig::load().expect("Failed to load config");
    let app = Application::build(config)
        .await
        .expect("Failed to build application");

    let port = app.port();

    // Spawn the server in the background
    tokio::spawn(async move {
        let _ = app.run_until_stopped().await;
    });

    // Wait for server to start
    tokio::time::sleep(Duration::from_millis(100)).await;

    port
}

