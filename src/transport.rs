//! The injected HTTP-sending capability.

use std::time::Duration;

use async_trait::async_trait;

use crate::error::TransportError;
use crate::request::{Method, RequestSpec};

/// Raw HTTP response: status, headers, body bytes. No interpretation.
#[derive(Clone, Debug)]
pub struct RawResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl RawResponse {
    /// Header lookup, case-insensitive on the name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Sends one request and returns the raw response.
///
/// The pipeline imposes no timeout of its own; whatever policy the
/// implementation applies is the only one in effect, so an implementation
/// without a timeout can hang a call indefinitely. Implementations that
/// support cancellation should surface it as [`TransportError::Cancelled`].
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: &RequestSpec) -> Result<RawResponse, TransportError>;
}

/// Default transport over a pooled reqwest client.
#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    http: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(timeout: Duration) -> Result<Self, TransportError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("cnctd_openai/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|e| TransportError::Http(Box::new(e)))?;
        Ok(Self { http })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: &RequestSpec) -> Result<RawResponse, TransportError> {
        let mut req = match request.method {
            Method::Get => self.http.get(&request.url),
            Method::Post => self.http.post(&request.url),
            Method::Delete => self.http.delete(&request.url),
        };
        for (name, value) in &request.headers {
            req = req.header(*name, value.as_str());
        }
        if let Some(body) = &request.body {
            let bytes = serde_json::to_vec(body).map_err(|e| TransportError::Http(Box::new(e)))?;
            req = req.body(bytes);
        }

        let response = req.send().await.map_err(|e| TransportError::Http(Box::new(e)))?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(n, v)| (n.to_string(), String::from_utf8_lossy(v.as_bytes()).into_owned()))
            .collect();
        let body = response
            .bytes()
            .await
            .map_err(|e| TransportError::Http(Box::new(e)))?
            .to_vec();

        Ok(RawResponse { status, headers, body })
    }
}
