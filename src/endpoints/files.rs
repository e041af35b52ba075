//! File endpoints: retrieve, list, delete.

use lazy_static::lazy_static;
use serde_json::Value;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::request::Method;
use crate::schema::{FieldKind, FieldSpec, ParameterBag, ParameterSchema};
use crate::transport::Transport;

use super::Endpoint;

lazy_static! {
    static ref RETRIEVE_FILE: Endpoint = Endpoint {
        method: Method::Get,
        path: "files/{file_id}",
        schema: file_id_schema(),
    };
    static ref LIST_FILES: Endpoint = Endpoint {
        method: Method::Get,
        path: "files",
        schema: ParameterSchema::new(Vec::new()),
    };
    static ref DELETE_FILE: Endpoint = Endpoint {
        method: Method::Delete,
        path: "files/{file_id}",
        schema: file_id_schema(),
    };
}

fn file_id_schema() -> ParameterSchema {
    ParameterSchema::new(vec![
        FieldSpec::required("file_id", FieldKind::String).length(1, 256),
    ])
}

fn file_id_bag(file_id: &str) -> ParameterBag {
    let mut bag = ParameterBag::new();
    bag.insert("file_id".to_string(), Value::String(file_id.to_string()));
    bag
}

impl<T: Transport> ApiClient<T> {
    /// `GET /files/{file_id}`.
    pub async fn retrieve_file(&self, file_id: &str) -> Result<Value, ApiError> {
        self.call(&RETRIEVE_FILE, file_id_bag(file_id)).await
    }

    /// `GET /files`.
    pub async fn list_files(&self) -> Result<Value, ApiError> {
        self.call(&LIST_FILES, ParameterBag::new()).await
    }

    /// `DELETE /files/{file_id}`.
    pub async fn delete_file(&self, file_id: &str) -> Result<Value, ApiError> {
        self.call(&DELETE_FILE, file_id_bag(file_id)).await
    }
}
