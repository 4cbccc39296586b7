use crate::dtos::{MintRequest, MintResponse};
use crate::services::minter::{marketplace_url, NftMetadata};
use crate::startup::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use service_core::error::AppError;

pub async fn mint_nft(
    State(state): State<AppState>,
    Json(req): Json<MintRequest>,
) -> Result<impl IntoResponse, AppError> {
    let svg_url = req.svg_url.unwrap_or_default();
    let user_address = req.user_address.unwrap_or_default();

    if svg_url.is_empty() || user_address.is_empty() {
        return Err(AppError::BadRequest(anyhow::anyhow!(
            "Missing required parameters"
        )));
    }

    let metadata = NftMetadata {
        title: req
            .title
            .unwrap_or_else(|| "Donatello AI Artwork".to_string()),
        description: req
            .description
            .unwrap_or_else(|| "AI-generated artwork".to_string()),
        svg_url,
        recipient: user_address,
    };

    let receipt = state.minter.mint(&metadata).await.map_err(|e| {
        tracing::error!(recipient = %metadata.recipient, error = %e, "Mint failed");
        e
    })?;

    let opensea_url = marketplace_url(&state.config.nft.marketplace_base_url, &receipt);

    tracing::info!(
        token_id = %receipt.token_id,
        transaction_hash = %receipt.transaction_hash,
        "NFT minted"
    );

    Ok(Json(MintResponse {
        success: true,
        transaction_hash: receipt.transaction_hash,
        token_id: receipt.token_id,
        contract_address: receipt.contract_address,
        opensea_url,
        message: "NFT successfully minted!".to_string(),
    }))
}
