//! Minimal config for cnctd_openai.
//! Load once at startup (e.g., from env) and pass down explicitly.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::ApiError;

/// Default endpoint root. Override via config or `OPENAI_BASE_URL`.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Endpoint root: "https://api.openai.com/v1" or a compatible gateway.
    pub base_url: String,
    /// API key, sent as a bearer token. Must be non-empty.
    pub api_key: String,
    /// Organization id, sent as `OpenAI-Organization` when present.
    pub organization: Option<String>,
    /// Timeout applied by the default transport.
    pub request_timeout: Duration,
}

impl ApiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
            organization: None,
            request_timeout: Duration::from_secs(30),
        }
    }

    /// Load from environment variables (good enough for dev/prod).
    /// `OPENAI_API_KEY` is required; everything else falls back to defaults.
    pub fn from_env() -> Result<Self, ApiError> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .map_err(|_| ApiError::Config("OPENAI_API_KEY is not set".to_string()))?;
        Ok(Self {
            base_url: std::env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            api_key,
            organization: std::env::var("OPENAI_ORGANIZATION").ok(),
            request_timeout: Duration::from_secs(
                std::env::var("AI_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(30),
            ),
        })
    }

    /// An unresolvable API key is a configuration problem, not a
    /// per-request validation failure.
    pub fn check(&self) -> Result<(), ApiError> {
        if self.api_key.trim().is_empty() {
            return Err(ApiError::Config("api key must be non-empty".to_string()));
        }
        Ok(())
    }
}
