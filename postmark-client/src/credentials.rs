//! Postmark credential scopes

use serde::{Deserialize, Serialize};

/// Header carrying the server-level token.
pub const SERVER_TOKEN_HEADER: &str = "X-Postmark-Server-Token";
/// Header carrying the account-level token.
pub const ACCOUNT_TOKEN_HEADER: &str = "X-Postmark-Account-Token";

/// Environment variable read by [`Credentials::from_env`] for the server token.
pub const SERVER_TOKEN_ENV: &str = "POSTMARK_SERVER_TOKEN";
/// Environment variable read by [`Credentials::from_env`] for the account token.
pub const ACCOUNT_TOKEN_ENV: &str = "POSTMARK_ACCOUNT_TOKEN";

/// Which token an operation must be authenticated with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    /// Account-wide token (manages servers, domains, sender signatures).
    Account,
    /// Token scoped to a single server.
    Server,
}

impl TokenType {
    /// HTTP header the token is sent in.
    pub fn header_name(self) -> &'static str {
        match self {
            Self::Account => ACCOUNT_TOKEN_HEADER,
            Self::Server => SERVER_TOKEN_HEADER,
        }
    }
}

impl std::fmt::Display for TokenType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Account => write!(f, "account"),
            Self::Server => write!(f, "server"),
        }
    }
}

/// The two Postmark tokens. Either may be absent; operations that need a
/// missing one fail before any request is sent.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    server_token: Option<String>,
    account_token: Option<String>,
}

impl Credentials {
    pub fn new(server_token: Option<String>, account_token: Option<String>) -> Self {
        Self {
            server_token: server_token.filter(|t| !t.is_empty()),
            account_token: account_token.filter(|t| !t.is_empty()),
        }
    }

    /// Only a server token.
    pub fn server(token: impl Into<String>) -> Self {
        Self::new(Some(token.into()), None)
    }

    /// Only an account token.
    pub fn account(token: impl Into<String>) -> Self {
        Self::new(None, Some(token.into()))
    }

    /// Reads `POSTMARK_SERVER_TOKEN` and `POSTMARK_ACCOUNT_TOKEN`. Unset or empty variables are skipped.
    pub fn from_env() -> Self {
        Self::new(
            std::env::var(SERVER_TOKEN_ENV).ok(),
            std::env::var(ACCOUNT_TOKEN_ENV).ok(),
        )
    }

    /// Token for the given scope, if configured.
    pub fn token(&self, token_type: TokenType) -> Option<&str> {
        match token_type {
            TokenType::Account => self.account_token.as_deref(),
            TokenType::Server => self.server_token.as_deref(),
        }
    }
}

// Tokens must never end up in logs.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("server_token", &self.server_token.as_ref().map(|_| "***"))
            .field("account_token", &self.account_token.as_ref().map(|_| "***"))
            .finish()
    }
}
