use crate::dtos::{
    AssistantChatError, AssistantChatRequest, AssistantChatResponse, ChatRequest, ChatResponse,
};
use crate::services::providers::{ProviderError, TextProvider};
use crate::startup::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use service_core::error::AppError;

/// Reply when a converted artwork is ready to mint.
const CONVERTED_REPLY: &str = "Great! I've converted your image to SVG format. \
The artwork looks amazing! Would you like me to help you mint this as an NFT?";

/// Reply when there is nothing to mint yet.
const PROMPT_REPLY: &str = "I understand you want to create something amazing! \
Could you describe what kind of artwork you'd like to create, or upload a PNG \
image for me to convert?";

const APOLOGY_REPLY: &str = "I'm experiencing some technical difficulties. Please try again!";

/// POST /api/chat: canned-template router for the conversion flow.
///
/// Minting is offered only once an image has been converted and stored; the
/// decision is pure field-presence branching.
pub async fn chat(Json(req): Json<ChatRequest>) -> Result<impl IntoResponse, AppError> {
    let svg_url = req.svg_url.unwrap_or_default();

    let (response, can_mint_nft) = if req.has_image && !svg_url.is_empty() {
        (CONVERTED_REPLY, true)
    } else {
        (PROMPT_REPLY, false)
    };

    tracing::info!(
        has_image = req.has_image,
        can_mint_nft = can_mint_nft,
        message_len = req.message.len(),
        "Chat message handled"
    );

    Ok(Json(ChatResponse {
        success: true,
        response: response.to_string(),
        can_mint_nft,
        svg_url,
    }))
}

/// POST /chat: Gemini-backed assistant endpoint.
///
/// Without a configured provider the endpoint serves canned replies; a
/// provider failure is a dependency error and returns 500 with the
/// documented `{success, error, response}` body.
pub async fn assistant_chat(
    State(state): State<AppState>,
    Json(req): Json<AssistantChatRequest>,
) -> Response {
    let image_analyzed = req.image_blob_id.is_some();

    match assistant_reply(state.text_provider.as_deref(), &req).await {
        Ok(response) => (
            StatusCode::OK,
            Json(AssistantChatResponse {
                success: true,
                response,
                image_analyzed,
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Assistant chat failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(AssistantChatError {
                    success: false,
                    error: e.to_string(),
                    response: APOLOGY_REPLY.to_string(),
                }),
            )
                .into_response()
        }
    }
}

/// Produce the assistant reply, falling back to canned text when no provider
/// is configured.
pub(crate) async fn assistant_reply(
    provider: Option<&dyn TextProvider>,
    req: &AssistantChatRequest,
) -> Result<String, ProviderError> {
    let Some(provider) = provider else {
        return Ok(fallback_reply(req));
    };

    provider.generate(&build_prompt(req)).await
}

fn build_prompt(req: &AssistantChatRequest) -> String {
    if let (Some(blob_id), Some(image_url)) = (&req.image_blob_id, &req.image_url) {
        format!(
            "You are Donatello, an AI-powered creative assistant specializing in \
digital art and NFTs.\n\n\
A user has uploaded an image that has been analyzed and stored on Walrus storage.\n\
Image URL: {image_url}\n\
Blob ID: {blob_id}\n\n\
User message: {message}\n\n\
Provide a creative, enthusiastic response about their image. Mention what you \
can analyze about the image, creative suggestions or variations, NFT minting \
possibilities, and next steps they could take. Keep the tone friendly, \
creative, and encouraging.",
            message = req.message,
        )
    } else {
        format!(
            "You are Donatello, an AI-powered creative assistant specializing in \
digital art and NFTs.\n\n\
User message: {message}\n\
Context: {context}\n\n\
Respond helpfully about digital art creation and analysis, NFT minting and \
blockchain deployment, Walrus storage for permanent asset storage, and \
creative workflows. Keep responses concise, friendly, and actionable.",
            message = req.message,
            context = req.context.as_deref().unwrap_or("general"),
        )
    }
}

fn fallback_reply(req: &AssistantChatRequest) -> String {
    if req.image_blob_id.is_some() {
        "\u{1F3A8} Fantastic! I can see your image has been successfully stored \
on Walrus! It is now permanently available at this decentralized storage \
location. Would you like me to help you mint this as an NFT? I can guide you \
through deployment on Ethereum, Base, Polygon, Arbitrum, or Optimism!"
            .to_string()
    } else {
        let closing = if req.message.is_empty() {
            "What would you like to create today?"
        } else {
            req.message.as_str()
        };

        format!(
            "Hello! I'm Donatello, your creative AI assistant! \u{1F3A8} I can \
help you with image analysis and Walrus storage, NFT creation on multiple \
blockchains, creative workflows, and digital asset management.\n\n{closing}"
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{
        CorsConfig, DonatelloConfig, GoogleConfig, NftConfig, StorageConfig,
    };
    use crate::services::providers::mock::MockTextProvider;
    use crate::services::{PlaceholderConverter, PlaceholderMinter, PlaceholderStorage};
    use axum::extract::State;
    use std::sync::Arc;

    fn state_with_provider(provider: Option<Arc<dyn TextProvider>>) -> AppState {
        AppState {
            config: DonatelloConfig {
                common: service_core::config::Config { port: 0 },
                cors: CorsConfig {
                    allowed_origins: vec!["http://localhost:3000".to_string()],
                },
                google: GoogleConfig {
                    api_key: String::new(),
                    text_model: "gemini-1.5-flash".to_string(),
                },
                nft: NftConfig {
                    contract_address: "0xYourNFTContractAddress".to_string(),
                    marketplace_base_url: "https://opensea.io/assets/ethereum".to_string(),
                },
                storage: StorageConfig {
                    placeholder_url: "https://walrus-storage-url/your-svg-file.svg".to_string(),
                },
            },
            converter: Arc::new(PlaceholderConverter::new()),
            storage: Arc::new(PlaceholderStorage::new(
                "https://walrus-storage-url/your-svg-file.svg",
            )),
            minter: Arc::new(PlaceholderMinter::new("0xYourNFTContractAddress")),
            text_provider: provider,
        }
    }

    fn request(message: &str, blob_id: Option<&str>, url: Option<&str>) -> AssistantChatRequest {
        AssistantChatRequest {
            message: message.to_string(),
            image_blob_id: blob_id.map(String::from),
            image_url: url.map(String::from),
            context: None,
        }
    }

    #[tokio::test]
    async fn reply_without_provider_uses_canned_greeting() {
        let req = request("", None, None);
        let reply = assistant_reply(None, &req).await.unwrap();
        assert!(reply.contains("What would you like to create today?"));
    }

    #[tokio::test]
    async fn reply_without_provider_acknowledges_stored_image() {
        let req = request("look at this", Some("blob-1"), Some("https://w/blob-1"));
        let reply = assistant_reply(None, &req).await.unwrap();
        assert!(reply.contains("stored"));
    }

    #[tokio::test]
    async fn reply_with_provider_sends_persona_prompt() {
        let provider = MockTextProvider::new(true);
        let req = request("make it blue", None, None);
        let reply = assistant_reply(Some(&provider), &req).await.unwrap();
        assert!(reply.contains("Mock response for:"));
        assert!(reply.contains("You are Donatello"));
        assert!(reply.contains("make it blue"));
    }

    #[tokio::test]
    async fn reply_with_failing_provider_propagates_error() {
        let provider = MockTextProvider::new(false);
        let req = request("hello", None, None);
        let err = assistant_reply(Some(&provider), &req).await.unwrap_err();
        assert!(matches!(err, ProviderError::NotConfigured(_)));
    }

    #[tokio::test]
    async fn failing_configured_provider_returns_500_with_error_body() {
        let state = state_with_provider(Some(Arc::new(MockTextProvider::new(false))));
        let response =
            assistant_chat(State(state), Json(request("hello", None, None))).await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read response body");
        let body: serde_json::Value =
            serde_json::from_slice(&bytes).expect("Failed to parse JSON");

        assert_eq!(body["success"], false);
        assert!(body["error"]
            .as_str()
            .expect("error should be a string")
            .contains("not enabled"));
        assert_eq!(body["response"], APOLOGY_REPLY);
    }

    #[test]
    fn image_prompt_includes_blob_and_url() {
        let prompt = build_prompt(&request("nice", Some("blob-9"), Some("https://w/9")));
        assert!(prompt.contains("blob-9"));
        assert!(prompt.contains("https://w/9"));
    }
}
