//! Generic executor for Postmark operations

use std::sync::Arc;

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::credentials::Credentials;
use crate::error::{ClientError, Result};
use crate::operation::Operation;
use crate::transport::{HttpRequest, HttpResponse, ReqwestTransport, Transport};
use crate::utils::log_sanitizer::truncate_for_log;

/// Postmark error code for a bad or missing API token.
pub(crate) const INVALID_TOKEN_ERROR_CODE: i64 = 10;

/// Error fields as they may appear in any response body.
///
/// Both are optional so that a success-shaped body still decodes.
#[derive(Debug, Default, Deserialize)]
struct ErrorEnvelope {
    #[serde(rename = "ErrorCode")]
    error_code: Option<i64>,
    #[serde(rename = "Message")]
    message: Option<String>,
}

/// Typed client for the Postmark REST API.
///
/// Holds configuration, credentials and a shared [`Transport`]; no state
/// changes between calls, so one client can serve many tasks at once.
#[derive(Clone)]
pub struct PostmarkClient {
    base_url: String,
    credentials: Credentials,
    transport: Arc<dyn Transport>,
}

impl std::fmt::Debug for PostmarkClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PostmarkClient")
            .field("base_url", &self.base_url)
            .field("credentials", &self.credentials)
            .finish_non_exhaustive()
    }
}

impl PostmarkClient {
    /// Client for the production API with default timeouts.
    pub fn new(credentials: Credentials) -> Result<Self> {
        Self::with_config(credentials, ClientConfig::default())
    }

    /// Client backed by a [`ReqwestTransport`] built from `config`.
    pub fn with_config(credentials: Credentials, config: ClientConfig) -> Result<Self> {
        let transport = ReqwestTransport::new(&config)?;
        Ok(Self::with_transport(
            credentials,
            &config,
            Arc::new(transport),
        ))
    }

    /// Client that sends through a caller-supplied transport.
    pub fn with_transport(
        credentials: Credentials,
        config: &ClientConfig,
        transport: Arc<dyn Transport>,
    ) -> Self {
        Self {
            base_url: config.normalized_base_url().to_string(),
            credentials,
            transport,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Runs one operation and decodes the body into `T`.
    ///
    /// Every response goes through the same checks before decoding: a
    /// non-zero `ErrorCode` fails the call even under HTTP 2xx, and a non-2xx
    /// status fails it even when `ErrorCode` is zero.
    pub async fn execute<T: DeserializeOwned>(&self, operation: &Operation) -> Result<T> {
        let result = self.execute_inner(operation).await;
        if let Err(e) = &result {
            if e.is_expected() {
                log::warn!("[postmark] {} {} failed: {e}", operation.method(), operation.path());
            } else {
                log::error!("[postmark] {} {} failed: {e}", operation.method(), operation.path());
            }
        }
        result
    }

    async fn execute_inner<T: DeserializeOwned>(&self, operation: &Operation) -> Result<T> {
        let request = self.build_request(operation)?;
        log::debug!("[postmark] {} {}", request.method, request.url);
        if let Some(body) = &request.body {
            log::debug!("[postmark] Request Body: {}", truncate_for_log(body));
        }

        let response = self.transport.send(request).await?;
        validate_response(&response)?;
        decode_body(&response.body)
    }

    /// Turns a descriptor into a wire request: URL, auth header, JSON body.
    ///
    /// Fails without touching the network when the path is empty or the
    /// required token is not configured.
    pub(crate) fn build_request(&self, operation: &Operation) -> Result<HttpRequest> {
        let path = operation.path().trim_start_matches('/');
        if path.is_empty() {
            return Err(ClientError::InvalidRequest {
                detail: "operation path must not be empty".to_string(),
            });
        }

        let token_type = operation.token_type();
        let token = self
            .credentials
            .token(token_type)
            .ok_or(ClientError::MissingCredential { token_type })?;

        let mut headers = vec![
            ("Accept".to_string(), "application/json".to_string()),
            (token_type.header_name().to_string(), token.to_string()),
        ];

        let body = match operation.payload() {
            Some(payload) => {
                headers.push(("Content-Type".to_string(), "application/json".to_string()));
                Some(
                    serde_json::to_string(payload).map_err(|e| ClientError::Serialization {
                        detail: e.to_string(),
                    })?,
                )
            }
            None => None,
        };

        Ok(HttpRequest {
            method: operation.method(),
            url: format!("{}/{path}", self.base_url),
            headers,
            body,
        })
    }
}

/// Applies the provider's error convention to a raw response.
pub(crate) fn validate_response(response: &HttpResponse) -> Result<()> {
    let envelope = serde_json::from_str::<ErrorEnvelope>(&response.body).unwrap_or_default();

    if let Some(code) = envelope.error_code.filter(|c| *c != 0) {
        return Err(map_api_error(code, envelope.message.unwrap_or_default()));
    }

    if !response.is_success() {
        let message = envelope
            .message
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| truncate_for_log(&response.body));
        return Err(ClientError::HttpStatus {
            status: response.status,
            message,
        });
    }

    Ok(())
}

/// Maps a non-zero provider error code to the client error taxonomy.
fn map_api_error(code: i64, message: String) -> ClientError {
    match code {
        INVALID_TOKEN_ERROR_CODE => ClientError::InvalidCredentials { message },
        _ => ClientError::Api { code, message },
    }
}

fn decode_body<T: DeserializeOwned>(body: &str) -> Result<T> {
    serde_json::from_str(body).map_err(|e| {
        log::error!("[postmark] JSON parse failed: {e}");
        log::error!("[postmark] Raw response: {}", truncate_for_log(body));
        ClientError::Decode {
            detail: e.to_string(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::TokenType;
    use crate::test_utils::client_with;
    use crate::transport::HttpMethod;
    use crate::types::{ApiError, Domain};

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            body: body.to_string(),
        }
    }

    // ---- validate_response ----

    #[test]
    fn non_zero_code_fails_under_2xx() {
        let err = validate_response(&response(
            200,
            r#"{"ErrorCode":702,"Message":"Invalid domain ID"}"#,
        ))
        .unwrap_err();
        assert_eq!(
            err,
            ClientError::Api {
                code: 702,
                message: "Invalid domain ID".into(),
            }
        );
    }

    #[test]
    fn zero_code_under_non_2xx_still_fails() {
        let err =
            validate_response(&response(500, r#"{"ErrorCode":0,"Message":"Oops"}"#)).unwrap_err();
        assert_eq!(
            err,
            ClientError::HttpStatus {
                status: 500,
                message: "Oops".into(),
            }
        );
    }

    #[test]
    fn non_json_error_body_becomes_status_error() {
        let err = validate_response(&response(502, "<html>Bad Gateway</html>")).unwrap_err();
        assert_eq!(
            err,
            ClientError::HttpStatus {
                status: 502,
                message: "<html>Bad Gateway</html>".into(),
            }
        );
    }

    #[test]
    fn code_10_is_invalid_credentials() {
        let err = validate_response(&response(
            401,
            r#"{"ErrorCode":10,"Message":"Bad or missing API token"}"#,
        ))
        .unwrap_err();
        assert!(matches!(err, ClientError::InvalidCredentials { .. }));
    }

    #[test]
    fn success_body_without_envelope_passes() {
        assert!(validate_response(&response(200, r#"{"Name":"example.com","ID":1}"#)).is_ok());
        assert!(validate_response(&response(200, r"[1,2,3]")).is_ok());
    }

    // ---- build_request ----

    #[test]
    fn empty_path_rejected() {
        let (client, mock) = client_with(Credentials::server("srv"));
        let op = Operation::new(HttpMethod::Get, "", TokenType::Server);
        let err = client.build_request(&op).unwrap_err();
        assert!(matches!(err, ClientError::InvalidRequest { .. }));
        assert!(mock.requests().is_empty());
    }

    #[test]
    fn server_token_header_selected() {
        let (client, _mock) = client_with(Credentials::new(
            Some("srv".into()),
            Some("acc".into()),
        ));
        let op = Operation::new(HttpMethod::Get, "domains/1", TokenType::Server);
        let req = client.build_request(&op).unwrap();
        assert_eq!(req.url, "http://postmark.test/domains/1");
        assert_eq!(req.header("X-Postmark-Server-Token"), Some("srv"));
        assert_eq!(req.header("X-Postmark-Account-Token"), None);
        assert_eq!(req.header("Accept"), Some("application/json"));
        assert_eq!(req.header("Content-Type"), None);
        assert!(req.body.is_none());
    }

    #[test]
    fn account_token_header_selected() {
        let (client, _mock) = client_with(Credentials::new(
            Some("srv".into()),
            Some("acc".into()),
        ));
        let op = Operation::new(HttpMethod::Get, "servers", TokenType::Account);
        let req = client.build_request(&op).unwrap();
        assert_eq!(req.header("X-Postmark-Account-Token"), Some("acc"));
        assert_eq!(req.header("X-Postmark-Server-Token"), None);
    }

    #[test]
    fn payload_sets_json_body() {
        let (client, _mock) = client_with(Credentials::server("srv"));
        let op = Operation::new(HttpMethod::Post, "domains", TokenType::Server)
            .with_payload(&serde_json::json!({ "Name": "example.com" }))
            .unwrap();
        let req = client.build_request(&op).unwrap();
        assert_eq!(req.header("Content-Type"), Some("application/json"));
        assert_eq!(req.body.as_deref(), Some(r#"{"Name":"example.com"}"#));
    }

    // ---- execute ----

    #[tokio::test]
    async fn missing_credential_sends_nothing() {
        let (client, mock) = client_with(Credentials::account("acc"));
        let op = Operation::new(HttpMethod::Get, "domains/1", TokenType::Server);
        let result: Result<Domain> = client.execute(&op).await;
        assert_eq!(
            result.unwrap_err(),
            ClientError::MissingCredential {
                token_type: TokenType::Server,
            }
        );
        assert!(mock.requests().is_empty());
    }

    #[tokio::test]
    async fn transport_error_surfaces_unchanged() {
        let (client, mock) = client_with(Credentials::server("srv"));
        mock.push_error(ClientError::Transport {
            detail: "connection refused".into(),
        });
        let op = Operation::new(HttpMethod::Get, "domains/1", TokenType::Server);
        let result: Result<Domain> = client.execute(&op).await;
        assert_eq!(
            result.unwrap_err(),
            ClientError::Transport {
                detail: "connection refused".into(),
            }
        );
        assert_eq!(mock.requests().len(), 1);
    }

    #[tokio::test]
    async fn shape_mismatch_is_decode_error() {
        let (client, mock) = client_with(Credentials::server("srv"));
        mock.push_json(200, r#"{"Name": 42}"#);
        let op = Operation::new(HttpMethod::Get, "domains/1", TokenType::Server);
        let result: Result<Domain> = client.execute(&op).await;
        assert!(matches!(result, Err(ClientError::Decode { .. })));
    }

    #[tokio::test]
    async fn decodes_declared_shape() {
        let (client, mock) = client_with(Credentials::server("srv"));
        mock.push_json(200, r#"{"ErrorCode":0,"Message":"OK"}"#);
        let op = Operation::new(HttpMethod::Delete, "domains/1", TokenType::Server);
        let result: ApiError = client.execute(&op).await.unwrap();
        assert!(result.is_success());
        assert_eq!(result.message, "OK");
    }
}
