//! The three dependency probes.
//!
//! Each probe prints its own detail lines while it runs and returns a
//! pass/fail flag for the summary. Probes never abort the run.

use donatello_backend::services::providers::gemini::{GeminiConfig, GeminiTextProvider};
use donatello_backend::services::providers::TextProvider;
use donatello_backend::startup::cors_layer;
use std::time::Duration;
use tokio::process::Command;

/// Env var holding the Gemini API key.
pub const API_KEY_VAR: &str = "GOOGLE_AI_API_KEY";

/// Models to try, newest first. `gemini-pro` was retired from the v1beta API
/// and is expected to fail; it stays in the list so the probe output shows
/// the exact error a stale configuration would hit.
const MODELS_TO_TEST: &[&str] = &["gemini-1.5-flash", "gemini-1.5-pro", "gemini-pro"];

const PROBE_PROMPT: &str = "Hello! Just testing if you work.";

/// How long a walrus CLI invocation may take.
const CLI_TIMEOUT: Duration = Duration::from_secs(10);

pub fn api_key_from_env() -> Option<String> {
    std::env::var(API_KEY_VAR).ok().filter(|k| !k.is_empty())
}

/// Probe the Gemini API: one trivial prompt per model, first success wins.
///
/// Without an API key this returns early and never builds a request.
pub async fn check_gemini_api() -> bool {
    println!("\n\u{1F916} Testing Gemini API...");

    let Some(api_key) = api_key_from_env() else {
        println!("\u{274C} {} environment variable not set", API_KEY_VAR);
        println!("Set it with: export {}='your_api_key'", API_KEY_VAR);
        return false;
    };

    let key_preview: String = api_key.chars().take(10).collect();
    println!("\u{2705} API key found: {}...", key_preview);

    for model in MODELS_TO_TEST {
        println!("\n\u{1F9EA} Testing model: {}", model);

        let provider = match GeminiTextProvider::new(GeminiConfig {
            api_key: api_key.clone(),
            model: model.to_string(),
        }) {
            Ok(p) => p,
            Err(e) => {
                println!("\u{274C} {}: Failed - {}", model, e);
                continue;
            }
        };

        match provider.generate(PROBE_PROMPT).await {
            Ok(text) => {
                let preview: String = text.chars().take(50).collect();
                println!("\u{2705} {}: Working! Response: {}...", model, preview);
                return true;
            }
            Err(e) => println!("\u{274C} {}: Failed - {}", model, e),
        }
    }

    false
}

/// Probe the walrus CLI with `walrus --version`.
///
/// Missing executable, nonzero exit, and timeout are reported separately.
pub async fn check_walrus_cli() -> bool {
    println!("\n\u{1F40B} Testing Walrus CLI...");

    let mut cmd = Command::new("walrus");
    cmd.arg("--version")
        .stdout(std::process::Stdio::piped())
        .stderr(std::process::Stdio::piped());

    match tokio::time::timeout(CLI_TIMEOUT, cmd.output()).await {
        Err(_) => {
            println!("\u{274C} Walrus CLI timeout");
            false
        }
        Ok(Err(e)) if e.kind() == std::io::ErrorKind::NotFound => {
            println!("\u{274C} Walrus CLI not found. Install from: https://docs.walrus.site/");
            false
        }
        Ok(Err(e)) => {
            println!("\u{274C} Walrus CLI error: {}", e);
            false
        }
        Ok(Ok(output)) => {
            if output.status.success() {
                let version = String::from_utf8_lossy(&output.stdout);
                println!("\u{2705} Walrus CLI found: {}", version.trim());
                true
            } else {
                let stderr = String::from_utf8_lossy(&output.stderr);
                println!("\u{274C} Walrus CLI error: {}", stderr.trim());
                false
            }
        }
    }
}

/// Probe the backend's CORS layer: every configured origin must parse.
pub fn check_cors_layer(allowed_origins: &[String]) -> bool {
    println!("\n\u{1F310} Testing CORS layer...");

    match cors_layer(allowed_origins) {
        Ok(_) => {
            println!(
                "\u{2705} CORS layer built for {} origin(s)",
                allowed_origins.len()
            );
            true
        }
        Err(e) => {
            println!("\u{274C} CORS layer failed: {}", e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cors_probe_accepts_default_origins() {
        let origins = vec![
            "http://localhost:3000".to_string(),
            "http://127.0.0.1:3000".to_string(),
        ];
        assert!(check_cors_layer(&origins));
    }

    #[test]
    fn cors_probe_rejects_malformed_origin() {
        let origins = vec!["http://localhost:3000\ninjected".to_string()];
        assert!(!check_cors_layer(&origins));
    }

    #[tokio::test]
    async fn gemini_probe_fails_fast_without_key() {
        std::env::remove_var(API_KEY_VAR);
        assert!(!check_gemini_api().await);
    }
}
