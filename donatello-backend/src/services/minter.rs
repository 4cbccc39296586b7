//! NFT minting client.
//!
//! Minting is an external collaborator reached only through [`NftMinter`].
//! The placeholder returns fixed identifiers; no chain interaction occurs.

use async_trait::async_trait;
use service_core::error::AppError;

/// Metadata attached to a minted token.
#[derive(Debug, Clone)]
pub struct NftMetadata {
    pub title: String,
    pub description: String,
    pub svg_url: String,
    pub recipient: String,
}

/// Receipt returned by a mint operation.
#[derive(Debug, Clone)]
pub struct MintReceipt {
    pub transaction_hash: String,
    pub token_id: String,
    pub contract_address: String,
}

#[async_trait]
pub trait NftMinter: Send + Sync {
    async fn mint(&self, metadata: &NftMetadata) -> Result<MintReceipt, AppError>;
}

pub struct PlaceholderMinter {
    contract_address: String,
}

impl PlaceholderMinter {
    pub fn new(contract_address: &str) -> Self {
        Self {
            contract_address: contract_address.to_string(),
        }
    }
}

#[async_trait]
impl NftMinter for PlaceholderMinter {
    async fn mint(&self, metadata: &NftMetadata) -> Result<MintReceipt, AppError> {
        tracing::info!(
            title = %metadata.title,
            recipient = %metadata.recipient,
            svg_url = %metadata.svg_url,
            "Issuing placeholder mint receipt"
        );

        Ok(MintReceipt {
            transaction_hash: "0x1234567890abcdef".to_string(),
            token_id: "123".to_string(),
            contract_address: self.contract_address.clone(),
        })
    }
}

/// Marketplace listing URL for a minted token.
pub fn marketplace_url(base_url: &str, receipt: &MintReceipt) -> String {
    format!(
        "{}/{}/{}",
        base_url.trim_end_matches('/'),
        receipt.contract_address,
        receipt.token_id
    )
}
