//! Text completion endpoint.

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::client::ApiClient;
use crate::error::{ApiError, ValidationError, ValidationReason};
use crate::request::Method;
use crate::schema::{CrossCheck, FieldKind, FieldSpec, NormalizedBag, ParameterSchema};
use crate::transport::Transport;

use super::{to_bag, Endpoint};

lazy_static! {
    static ref CREATE_COMPLETION: Endpoint = Endpoint {
        method: Method::Post,
        path: "completions",
        schema: ParameterSchema::new(vec![
            FieldSpec::required("model", FieldKind::String),
            FieldSpec::optional("prompt", FieldKind::StringList),
            FieldSpec::optional("suffix", FieldKind::String),
            FieldSpec::optional("max_tokens", FieldKind::Integer).range(1.0, 131072.0),
            FieldSpec::optional("temperature", FieldKind::Float).range(0.0, 2.0),
            FieldSpec::optional("top_p", FieldKind::Float).range(0.0, 1.0),
            FieldSpec::optional("n", FieldKind::Integer).range(1.0, 128.0),
            FieldSpec::optional("logprobs", FieldKind::Integer).range(0.0, 5.0),
            FieldSpec::optional("echo", FieldKind::Boolean),
            FieldSpec::optional("stop", FieldKind::StringList).length(1, 4),
            FieldSpec::optional("presence_penalty", FieldKind::Float).range(-2.0, 2.0),
            FieldSpec::optional("frequency_penalty", FieldKind::Float).range(-2.0, 2.0),
            FieldSpec::optional("best_of", FieldKind::Integer).range(1.0, 20.0),
            FieldSpec::optional("logit_bias", FieldKind::Map),
            FieldSpec::optional("user", FieldKind::String),
        ])
        .cross_rule(best_of_covers_n)
        .cross_rule(temperature_and_top_p),
    };
}

// best_of candidates are sampled server-side, then the top n are returned
fn best_of_covers_n(params: &NormalizedBag) -> CrossCheck {
    let best_of = params.get("best_of").and_then(Value::as_i64);
    let n = params.get("n").and_then(Value::as_i64);
    match (best_of, n) {
        (Some(best_of), Some(n)) if best_of < n => CrossCheck::Fail(ValidationError::new(
            "best_of",
            ValidationReason::CrossField(format!("best_of ({best_of}) must be >= n ({n})")),
        )),
        _ => CrossCheck::Pass,
    }
}

fn temperature_and_top_p(params: &NormalizedBag) -> CrossCheck {
    if params.contains_key("temperature") && params.contains_key("top_p") {
        CrossCheck::Warn(
            "temperature and top_p are both set; the service recommends altering only one".to_string(),
        )
    } else {
        CrossCheck::Pass
    }
}

/// Parameters for [`ApiClient::create_completion`]. Knobs left as `None`
/// are omitted from the request body entirely.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CompletionParams {
    pub model: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub n: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logprobs: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub echo: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub presence_penalty: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency_penalty: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_of: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logit_bias: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
}

impl<T: Transport> ApiClient<T> {
    /// `POST /completions`. The response shape belongs to the service; it is
    /// returned as parsed JSON without reinterpretation.
    pub async fn create_completion(&self, params: &CompletionParams) -> Result<Value, ApiError> {
        self.call(&CREATE_COMPLETION, to_bag(params)?).await
    }
}
