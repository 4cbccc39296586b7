use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

/// Gemini model used for assistant replies. The older `gemini-pro` alias was
/// retired from the v1beta API; keep this on a current model name.
const DEFAULT_TEXT_MODEL: &str = "gemini-1.5-flash";

#[derive(Debug, Clone)]
pub struct DonatelloConfig {
    pub common: core_config::Config,
    pub cors: CorsConfig,
    pub google: GoogleConfig,
    pub nft: NftConfig,
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GoogleConfig {
    /// Empty when unset; the backend then serves canned assistant replies.
    pub api_key: String,
    pub text_model: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NftConfig {
    pub contract_address: String,
    pub marketplace_base_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Locator reported for stored documents until a real storage client
    /// replaces the placeholder.
    pub placeholder_url: String,
}

impl DonatelloConfig {
    pub fn load() -> Result<Self, AppError> {
        // Load common config (handles .env and APP__ prefix)
        let common = core_config::Config::load()?;

        let is_prod = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";

        let allowed_origins = get_env(
            "CORS_ALLOWED_ORIGINS",
            Some("http://localhost:3000,http://localhost:3001,http://127.0.0.1:3000,http://127.0.0.1:3001"),
            is_prod,
        )?
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();

        Ok(DonatelloConfig {
            common,
            cors: CorsConfig { allowed_origins },
            google: GoogleConfig {
                api_key: env::var("GOOGLE_AI_API_KEY").unwrap_or_default(),
                text_model: get_env("GEMINI_TEXT_MODEL", Some(DEFAULT_TEXT_MODEL), is_prod)?,
            },
            nft: NftConfig {
                contract_address: get_env(
                    "NFT_CONTRACT_ADDRESS",
                    Some("0xYourNFTContractAddress"),
                    is_prod,
                )?,
                marketplace_base_url: get_env(
                    "MARKETPLACE_BASE_URL",
                    Some("https://opensea.io/assets/ethereum"),
                    is_prod,
                )?,
            },
            storage: StorageConfig {
                placeholder_url: get_env(
                    "WALRUS_PLACEHOLDER_URL",
                    Some("https://walrus-storage-url/your-svg-file.svg"),
                    is_prod,
                )?,
            },
        })
    }
}

fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => {
            if is_prod {
                Err(AppError::ConfigError(anyhow::anyhow!(format!(
                    "{} is required in production but not set",
                    key
                ))))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::ConfigError(anyhow::anyhow!(format!(
                    "{} is required but not set",
                    key
                ))))
            }
        }
    }
}
