//! Response normalization: raw bytes in, success payload or typed error out.

use serde_json::Value;

use crate::error::{ApiError, ValidationError, ValidationReason};
use crate::transport::RawResponse;

/// Turn a raw response into the caller's terminal outcome.
///
/// The content-type guard runs first so an HTML error page from a proxy is
/// never parsed as data. Success or failure is then decided purely from the
/// status code: any 4xx/5xx is a service rejection regardless of body shape.
pub fn normalize(response: RawResponse) -> Result<Value, ApiError> {
    let content_type = response.header("content-type").unwrap_or_default();
    if !content_type.starts_with("application/json") {
        return Err(ValidationError::new(
            "content-type",
            ValidationReason::UnexpectedContentType(content_type.to_string()),
        )
        .into());
    }

    let body: Value = serde_json::from_slice(&response.body)?;

    if (400..600).contains(&response.status) {
        let message = body
            .pointer("/error/message")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| format!("HTTP status {}", response.status));
        return Err(ApiError::Status { status: response.status, message });
    }

    Ok(body)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn response(status: u16, content_type: &str, body: &str) -> RawResponse {
        RawResponse {
            status,
            headers: vec![("Content-Type".to_string(), content_type.to_string())],
            body: body.as_bytes().to_vec(),
        }
    }

    #[test]
    fn success_body_is_returned_unchanged() {
        let raw = response(200, "application/json; charset=utf-8", r#"{"id":"cmpl-1","choices":[]}"#);
        assert_eq!(normalize(raw).unwrap(), json!({"id": "cmpl-1", "choices": []}));
    }

    #[test]
    fn error_status_extracts_the_service_message() {
        let raw = response(401, "application/json", r#"{"error":{"message":"Invalid API key"}}"#);
        match normalize(raw).unwrap_err() {
            ApiError::Status { status, message } => {
                assert_eq!(status, 401);
                assert_eq!(message, "Invalid API key");
            }
            other => panic!("expected Status, got {other:?}"),
        }
    }

    #[test]
    fn error_status_without_message_falls_back_to_the_code() {
        let raw = response(500, "application/json", r#"{"oops":true}"#);
        match normalize(raw).unwrap_err() {
            ApiError::Status { status: 500, message } => assert_eq!(message, "HTTP status 500"),
            other => panic!("expected Status, got {other:?}"),
        }
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let raw = response(200, "application/json", "not json");
        assert!(matches!(normalize(raw).unwrap_err(), ApiError::Parse(_)));
    }

    #[test]
    fn non_json_content_type_is_caught_before_parsing() {
        let raw = response(200, "text/html", "<html>gateway error</html>");
        match normalize(raw).unwrap_err() {
            ApiError::Validation(err) => {
                assert_eq!(err.reason, ValidationReason::UnexpectedContentType("text/html".to_string()));
            }
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn missing_content_type_is_rejected() {
        let raw = RawResponse { status: 200, headers: Vec::new(), body: b"{}".to_vec() };
        assert!(matches!(normalize(raw).unwrap_err(), ApiError::Validation(_)));
    }
}
