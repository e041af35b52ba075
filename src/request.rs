//! Transport-ready request construction. Builds a value, sends nothing.

use serde_json::Value;

use crate::config::ApiConfig;
use crate::endpoints::Endpoint;
use crate::error::ApiError;
use crate::schema::NormalizedBag;

/// HTTP verbs the API surface uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Delete => "DELETE",
        }
    }

    fn has_body(self) -> bool {
        matches!(self, Method::Post)
    }
}

/// One fully-assembled HTTP request. Never mutated after construction.
#[derive(Clone, Debug)]
pub struct RequestSpec {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(&'static str, String)>,
    /// JSON body for write methods; `None` for reads and deletes.
    pub body: Option<Value>,
}

impl RequestSpec {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Translate a validated bag into a [`RequestSpec`] for `endpoint`.
///
/// Path placeholders (`files/{file_id}`) consume their field from the bag,
/// so a substituted value never also appears in the body.
pub fn build_request(
    endpoint: &Endpoint,
    params: &NormalizedBag,
    config: &ApiConfig,
) -> Result<RequestSpec, ApiError> {
    let mut body = params.clone();

    let mut path = endpoint.path.to_string();
    while let Some(start) = path.find('{') {
        let end = path[start..]
            .find('}')
            .map(|i| start + i)
            .ok_or_else(|| ApiError::Config(format!("unterminated placeholder in path {:?}", endpoint.path)))?;
        let name = path[start + 1..end].to_string();
        let value = body
            .remove(&name)
            .and_then(|v| v.as_str().map(str::to_string))
            .ok_or_else(|| ApiError::Config(format!("no value for path placeholder {name:?}")))?;
        path.replace_range(start..=end, &value);
    }

    let url = format!("{}/{}", config.base_url.trim_end_matches('/'), path);

    let mut headers = vec![
        ("Authorization", format!("Bearer {}", config.api_key)),
        ("Content-Type", "application/json".to_string()),
    ];
    if let Some(org) = &config.organization {
        headers.push(("OpenAI-Organization", org.clone()));
    }

    let body = endpoint.method.has_body().then(|| Value::Object(body));

    Ok(RequestSpec { method: endpoint.method, url, headers, body })
}
