use crate::config::DonatelloConfig;
use crate::handlers;
use crate::services::providers::gemini::{GeminiConfig, GeminiTextProvider};
use crate::services::providers::TextProvider;
use crate::services::{
    ContentStorage, NftMinter, PlaceholderConverter, PlaceholderMinter, PlaceholderStorage,
    SvgConverter,
};
use axum::http::{HeaderValue, Method};
use axum::{
    routing::{get, post},
    Router,
};
use service_core::error::AppError;
use std::future::IntoFuture;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub config: DonatelloConfig,
    pub converter: Arc<dyn SvgConverter>,
    pub storage: Arc<dyn ContentStorage>,
    pub minter: Arc<dyn NftMinter>,
    /// None when no API key is configured; the assistant endpoint then
    /// serves canned replies.
    pub text_provider: Option<Arc<dyn TextProvider>>,
}

/// Build the CORS layer for the configured frontend origins.
pub fn cors_layer(allowed_origins: &[String]) -> Result<CorsLayer, AppError> {
    let origins = allowed_origins
        .iter()
        .map(|origin| {
            origin.parse::<HeaderValue>().map_err(|e| {
                AppError::ConfigError(anyhow::anyhow!("Invalid CORS origin {}: {}", origin, e))
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any))
}

pub struct Application {
    port: u16,
    server: Box<dyn std::future::Future<Output = std::io::Result<()>> + Send + Unpin>,
}

impl Application {
    pub async fn build(config: DonatelloConfig) -> Result<Self, AppError> {
        let converter: Arc<dyn SvgConverter> = Arc::new(PlaceholderConverter::new());
        let storage: Arc<dyn ContentStorage> =
            Arc::new(PlaceholderStorage::new(&config.storage.placeholder_url));
        let minter: Arc<dyn NftMinter> =
            Arc::new(PlaceholderMinter::new(&config.nft.contract_address));

        let text_provider: Option<Arc<dyn TextProvider>> = if config.google.api_key.is_empty() {
            tracing::warn!("GOOGLE_AI_API_KEY not set; /chat will serve canned replies");
            None
        } else {
            let provider = GeminiTextProvider::new(GeminiConfig {
                api_key: config.google.api_key.clone(),
                model: config.google.text_model.clone(),
            })
            .map_err(|e| AppError::ConfigError(anyhow::anyhow!(e)))?;

            tracing::info!(
                model = %config.google.text_model,
                "Initialized Gemini text provider"
            );
            Some(Arc::new(provider))
        };

        let cors = cors_layer(&config.cors.allowed_origins)?;

        let state = AppState {
            config: config.clone(),
            converter,
            storage,
            minter,
            text_provider,
        };

        let app = Router::new()
            .route("/health", get(handlers::health_check))
            .route("/api/convert-to-svg", post(handlers::convert_to_svg))
            .route("/api/chat", post(handlers::chat))
            .route("/api/mint-nft", post(handlers::mint_nft))
            .route("/chat", post(handlers::assistant_chat))
            .layer(cors)
            .layer(TraceLayer::new_for_http())
            .with_state(state);

        // Port 0 = random port for testing
        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Listening on {}", port);

        let server = axum::serve(listener, app);

        Ok(Self {
            port,
            server: Box::new(server.into_future()),
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.server.await
    }
}
