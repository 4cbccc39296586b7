//! Content-storage client.
//!
//! The decentralized storage service (Walrus) is an external collaborator
//! reached only through [`ContentStorage`]. No real upload happens yet; the
//! placeholder reports a fixed locator.

use async_trait::async_trait;
use service_core::error::AppError;

#[async_trait]
pub trait ContentStorage: Send + Sync {
    /// Store a blob and return its public locator.
    async fn store(&self, bytes: &[u8], name: &str) -> Result<String, AppError>;
}

pub struct PlaceholderStorage {
    url: String,
}

impl PlaceholderStorage {
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
        }
    }
}

#[async_trait]
impl ContentStorage for PlaceholderStorage {
    async fn store(&self, bytes: &[u8], name: &str) -> Result<String, AppError> {
        tracing::info!(
            name = %name,
            size = bytes.len(),
            url = %self.url,
            "Reporting placeholder storage locator"
        );
        Ok(self.url.clone())
    }
}
