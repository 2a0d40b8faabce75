use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::credentials::TokenType;

/// Unified error type for every Postmark client operation.
///
/// All variants are serializable for structured error reporting.
/// Nothing in this crate retries; every failure reaches the caller unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum ClientError {
    /// The transport could not complete the request (DNS, connection refused, TLS, ...).
    #[error("Transport error: {detail}")]
    Transport {
        /// Error details.
        detail: String,
    },

    /// The transport gave up waiting for the provider.
    #[error("Request timeout: {detail}")]
    Timeout {
        /// Error details.
        detail: String,
    },

    /// The provider rejected the token (error code 10).
    #[error("Invalid credentials: {message}")]
    InvalidCredentials {
        /// Message returned by the provider.
        message: String,
    },

    /// The operation needs a token that was not configured. Nothing was sent.
    #[error("Missing {token_type} token")]
    MissingCredential {
        /// Token kind the operation requires.
        token_type: TokenType,
    },

    /// The provider reported a non-zero `ErrorCode`, whatever the HTTP status.
    #[error("API error {code}: {message}")]
    Api {
        /// Provider error code.
        code: i64,
        /// Provider error message.
        message: String,
    },

    /// Non-2xx response that carried no provider error code.
    #[error("HTTP {status}: {message}")]
    HttpStatus {
        /// HTTP status code.
        status: u16,
        /// Message from the body, if any.
        message: String,
    },

    /// The response body did not match the expected shape.
    #[error("Decode error: {detail}")]
    Decode {
        /// Details about the decode failure.
        detail: String,
    },

    /// The request payload could not be serialized.
    #[error("Serialization error: {detail}")]
    Serialization {
        /// Details about the serialization failure.
        detail: String,
    },

    /// The operation descriptor is malformed.
    #[error("Invalid request: {detail}")]
    InvalidRequest {
        /// What is wrong with the descriptor.
        detail: String,
    },
}

impl ClientError {
    /// Whether the failure is caller- or provider-side (bad input, rejected token, 4xx).
    ///
    /// `true` is logged at `warn`, `false` at `error`.
    /// **Keep in sync when adding variants.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::InvalidCredentials { .. }
            | Self::MissingCredential { .. }
            | Self::Api { .. }
            | Self::InvalidRequest { .. } => true,
            Self::HttpStatus { status, .. } => (400..500).contains(status),
            Self::Transport { .. }
            | Self::Timeout { .. }
            | Self::Decode { .. }
            | Self::Serialization { .. } => false,
        }
    }

    /// Provider error code, when the failure came from the API envelope.
    #[must_use]
    pub fn api_code(&self) -> Option<i64> {
        match self {
            Self::Api { code, .. } => Some(*code),
            Self::InvalidCredentials { .. } => Some(crate::client::INVALID_TOKEN_ERROR_CODE),
            _ => None,
        }
    }
}

/// Convenience type alias for `Result<T, ClientError>`.
pub type Result<T> = std::result::Result<T, ClientError>;
