//! Endpoint declarations: each remote operation contributes a schema, an
//! HTTP method, and a path. The pipeline does the rest.

pub mod completions;
pub mod files;

use serde::Serialize;

use crate::error::ApiError;
use crate::request::Method;
use crate::schema::{ParameterBag, ParameterSchema};

/// One remote operation, everything the generic pipeline needs to run it.
#[derive(Clone, Debug)]
pub struct Endpoint {
    pub method: Method,
    /// Path under the base URL; may contain `{placeholders}` filled from
    /// validated fields.
    pub path: &'static str,
    pub schema: ParameterSchema,
}

/// Serialize a typed parameter struct into a raw bag. `None` fields are
/// skipped by serde, so an unset option never reaches the wire as a null.
pub(crate) fn to_bag<P: Serialize>(params: &P) -> Result<ParameterBag, ApiError> {
    match serde_json::to_value(params)? {
        serde_json::Value::Object(map) => Ok(map),
        _ => Err(ApiError::Config("parameters must serialize to an object".to_string())),
    }
}
