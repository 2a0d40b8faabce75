//! Operation descriptors
//!
//! An [`Operation`] says everything the executor needs to know about one API
//! call except the expected result shape, which is the type parameter of
//! [`PostmarkClient::execute`](crate::PostmarkClient::execute).

use serde::Serialize;

use crate::credentials::TokenType;
use crate::error::{ClientError, Result};
use crate::transport::HttpMethod;

/// One API call: verb, path (relative to the base URL, query included),
/// optional JSON payload and the token scope it must be sent with.
#[derive(Debug, Clone, PartialEq)]
pub struct Operation {
    method: HttpMethod,
    path: String,
    payload: Option<serde_json::Value>,
    token_type: TokenType,
}

impl Operation {
    pub fn new(method: HttpMethod, path: impl Into<String>, token_type: TokenType) -> Self {
        Self {
            method,
            path: path.into(),
            payload: None,
            token_type,
        }
    }

    /// Attaches a JSON body.
    pub fn with_payload<B: Serialize>(mut self, payload: &B) -> Result<Self> {
        let value = serde_json::to_value(payload).map_err(|e| ClientError::Serialization {
            detail: e.to_string(),
        })?;
        self.payload = Some(value);
        Ok(self)
    }

    /// Appends `key=value` pairs as a query string; values are URL-encoded.
    #[must_use]
    pub fn with_query(mut self, params: &[(&str, String)]) -> Self {
        if params.is_empty() {
            return self;
        }
        let query = params
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");
        let sep = if self.path.contains('?') { '&' } else { '?' };
        self.path = format!("{}{sep}{query}", self.path);
        self
    }

    pub fn method(&self) -> HttpMethod {
        self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn payload(&self) -> Option<&serde_json::Value> {
        self.payload.as_ref()
    }

    pub fn token_type(&self) -> TokenType {
        self.token_type
    }
}
