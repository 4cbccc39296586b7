//! Generative-AI provider abstraction.
//!
//! A trait-based seam over text-generation backends so the assistant endpoint
//! and the diagnostics binary never depend on a concrete SDK.

pub mod gemini;
pub mod mock;

use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Rate limited")]
    RateLimited,

    #[error("Content filtered")]
    ContentFiltered,

    #[error("Network error: {0}")]
    NetworkError(String),
}

/// Trait for text generation providers (e.g., Gemini).
#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Generate a reply for a fully-built prompt.
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError>;

    /// Verify the provider is reachable and configured.
    async fn health_check(&self) -> Result<(), ProviderError>;
}
