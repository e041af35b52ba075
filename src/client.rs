//! Client facade: one method per endpoint, one shared pipeline underneath.

use serde_json::Value;
use tracing::{debug, warn};

use crate::config::ApiConfig;
use crate::endpoints::Endpoint;
use crate::error::ApiError;
use crate::request::build_request;
use crate::response::normalize;
use crate::schema::ParameterBag;
use crate::transport::{ReqwestTransport, Transport};
use crate::validate::validate;

/// Client for one OpenAI-compatible service.
///
/// Cheap to clone; the per-call override helpers hand back derived clones
/// that share the underlying connection pool.
#[derive(Clone, Debug)]
pub struct ApiClient<T: Transport = ReqwestTransport> {
    config: ApiConfig,
    transport: T,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        config.check()?;
        let transport = ReqwestTransport::new(config.request_timeout)?;
        Ok(Self { config, transport })
    }

    /// Configuration read from the environment once, here at the boundary.
    pub fn from_env() -> Result<Self, ApiError> {
        Self::new(ApiConfig::from_env()?)
    }
}

impl<T: Transport> ApiClient<T> {
    /// Use a custom transport: a shared pool, a recording proxy, a fake in
    /// tests.
    pub fn with_transport(config: ApiConfig, transport: T) -> Result<Self, ApiError> {
        config.check()?;
        Ok(Self { config, transport })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Run one endpoint through the pipeline: validate, build, send,
    /// normalize. Fixed order, fail fast; nothing is sent once validation
    /// has failed.
    ///
    /// The endpoint wrappers cover the common operations; this is the
    /// escape hatch for compatible endpoints the crate has no wrapper for.
    pub async fn call(&self, endpoint: &Endpoint, params: ParameterBag) -> Result<Value, ApiError> {
        let validated = validate(&endpoint.schema, params)?;
        for warning in &validated.warnings {
            warn!(path = endpoint.path, "{warning}");
        }

        let request = build_request(endpoint, &validated.params, &self.config)?;
        debug!(method = request.method.as_str(), url = %request.url, "dispatching request");

        let response = self.transport.send(&request).await?;
        debug!(status = response.status, bytes = response.body.len(), "response received");

        normalize(response)
    }
}

impl<T: Transport + Clone> ApiClient<T> {
    /// Same transport, different key for this call.
    pub fn with_api_key(&self, api_key: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.config.api_key = api_key.into();
        next
    }

    pub fn with_organization(&self, organization: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.config.organization = Some(organization.into());
        next
    }

    pub fn with_base_url(&self, base_url: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.config.base_url = base_url.into();
        next
    }
}
