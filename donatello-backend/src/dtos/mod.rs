//! Request/response payloads for the HTTP surface.
//!
//! Field names are the wire contract the Next.js frontend already speaks:
//! camelCase for the `/api/*` routes, snake_case for the alternate `/chat`
//! assistant endpoint.

use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvertRequest {
    /// Base64-encoded PNG bytes.
    pub image: Option<String>,
    pub filename: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvertResponse {
    pub success: bool,
    pub walrus_url: String,
    pub svg_content: String,
    pub message: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub has_image: bool,
    #[serde(default)]
    pub svg_url: Option<String>,
    #[serde(default)]
    pub context: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    pub success: bool,
    pub response: String,
    #[serde(rename = "canMintNFT")]
    pub can_mint_nft: bool,
    pub svg_url: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MintRequest {
    pub svg_url: Option<String>,
    pub user_address: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MintResponse {
    pub success: bool,
    pub transaction_hash: String,
    pub token_id: String,
    pub contract_address: String,
    pub opensea_url: String,
    pub message: String,
}

/// Request body for the alternate `/chat` assistant endpoint (snake_case).
#[derive(Debug, Deserialize)]
pub struct AssistantChatRequest {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub image_blob_id: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub context: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AssistantChatResponse {
    pub success: bool,
    pub response: String,
    pub image_analyzed: bool,
}

#[derive(Debug, Serialize)]
pub struct AssistantChatError {
    pub success: bool,
    pub error: String,
    pub response: String,
}
