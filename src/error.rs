use thiserror::Error;

/// Why a single field was rejected.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ValidationReason {
    #[error("required field is missing")]
    Missing,
    #[error("expected {expected}")]
    TypeMismatch { expected: &'static str },
    #[error("value {value} outside [{min}, {max}]")]
    OutOfRange { value: f64, min: f64, max: f64 },
    #[error("length {len} outside [{min}, {max}]")]
    LengthOutOfRange { len: usize, min: usize, max: usize },
    #[error("{0}")]
    CrossField(String),
    #[error("unexpected content type {0:?}")]
    UnexpectedContentType(String),
}

/// A parameter bag was rejected before any network activity.
#[derive(Clone, Debug, PartialEq, Error)]
#[error("{field}: {reason}")]
pub struct ValidationError {
    pub field: String,
    pub reason: ValidationReason,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, reason: ValidationReason) -> Self {
        Self { field: field.into(), reason }
    }
}

/// Network-layer failure, distinct from a rejection by the service itself.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("http: {0}")] Http(#[source] Box<dyn std::error::Error + Send + Sync>),
    #[error("request cancelled")] Cancelled,
}

/// Every terminal outcome a call can fail with. Exactly one kind per call;
/// callers branch on the variant, never on message text.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Caller's fault; no request was sent.
    #[error("validation: {0}")] Validation(#[from] ValidationError),
    /// Network failure; retrying is the caller's decision.
    #[error("transport: {0}")] Transport(#[from] TransportError),
    /// Response body was not the structured format it claimed to be.
    #[error("parse: {0}")] Parse(#[from] serde_json::Error),
    /// The service rejected the request; message passed through verbatim.
    #[error("api returned {status}: {message}")] Status { status: u16, message: String },
    /// Unusable client configuration (e.g. no resolvable API key).
    #[error("config: {0}")] Config(String),
}
