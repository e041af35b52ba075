//! Client for OpenAI-compatible HTTP APIs.
//!
//! One public function per remote endpoint; every function runs the same
//! pipeline: validate parameters against the endpoint's schema, build the
//! request, send it through the configured [`Transport`], normalize the
//! response. A call ends in exactly one outcome (the parsed payload or one
//! typed [`ApiError`]), and nothing is ever sent once validation fails.
//!
//! ```rust,no_run
//! # async fn run() -> Result<(), cnctd_openai::ApiError> {
//! use cnctd_openai::{ApiClient, CompletionParams};
//!
//! let client = ApiClient::from_env()?;
//! let completion = client
//!     .create_completion(&CompletionParams {
//!         model: "gpt-3.5-turbo-instruct".to_string(),
//!         prompt: Some(vec!["Say hi".to_string()]),
//!         max_tokens: Some(16),
//!         ..Default::default()
//!     })
//!     .await?;
//! println!("{completion}");
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod request;
pub mod response;
pub mod schema;
pub mod transport;
pub mod validate;

pub use client::ApiClient;
pub use config::ApiConfig;
pub use endpoints::completions::CompletionParams;
pub use endpoints::Endpoint;
pub use error::{ApiError, TransportError, ValidationError, ValidationReason};
pub use request::{build_request, Method, RequestSpec};
pub use response::normalize;
pub use schema::{CrossCheck, FieldKind, FieldSpec, NormalizedBag, ParameterBag, ParameterSchema};
pub use transport::{RawResponse, ReqwestTransport, Transport};
pub use validate::{validate, Validated};
