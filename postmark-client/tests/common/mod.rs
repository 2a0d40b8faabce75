//! Shared helpers for integration tests

#![allow(dead_code)]

use std::env;

use postmark_client::{ClientConfig, Credentials, DomainListParams, DomainsApi, PostmarkClient};
use serde_json::{Value, json};
use wiremock::MockServer;

pub const SERVER_TOKEN: &str = "test-server-token";

/// Skips the test when any of the listed environment variables is missing.
#[macro_export]
macro_rules! skip_if_no_credentials {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("skipping: missing environment variable {}", $var);
                return;
            }
        )+
    };
}

/// Asserts a `Result` is `Ok` and unwraps it (fails the test otherwise).
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// Client pointed at a wiremock server, authenticated with [`SERVER_TOKEN`].
pub fn mock_client(server: &MockServer) -> PostmarkClient {
    PostmarkClient::with_config(
        Credentials::server(SERVER_TOKEN),
        ClientConfig::with_base_url(server.uri()),
    )
    .expect("failed to build client")
}

/// A full domain body as the API returns it.
pub fn domain_json(id: i64, name: &str) -> Value {
    json!({
        "Name": name,
        "SPFVerified": true,
        "SPFHost": name,
        "SPFTextValue": "v=spf1 a mx include:spf.mtasv.net ~all",
        "DKIMVerified": false,
        "WeakDKIM": false,
        "DKIMHost": format!("20240101pm._domainkey.{name}"),
        "DKIMTextValue": "k=rsa;p=MIGfMA0GCSqGSIb3DQEBAQUAA4GNADCBiQKBgQ",
        "DKIMPendingHost": "",
        "DKIMPendingTextValue": "",
        "DKIMRevokedHost": "",
        "DKIMRevokedTextValue": "",
        "SafeToRemoveRevokedKeyFromDNS": false,
        "DKIMUpdateStatus": "Pending",
        "ReturnPathDomain": format!("pm-bounces.{name}"),
        "ReturnPathDomainVerified": false,
        "ReturnPathDomainCNAMEValue": "pm.mtasv.net",
        "ID": id
    })
}

/// Unique throwaway domain name for live tests.
pub fn generate_test_domain_name() -> String {
    let uuid = uuid::Uuid::new_v4();
    format!("test-{}.example.com", &uuid.to_string()[..8])
}

/// Live test context: a real client and the domain under test.
pub struct TestContext {
    pub client: PostmarkClient,
    pub domain: String,
}

impl TestContext {
    /// Reads `POSTMARK_SERVER_TOKEN` and `TEST_DOMAIN`.
    pub fn from_env() -> Option<Self> {
        let domain = env::var("TEST_DOMAIN").ok()?;
        let client = PostmarkClient::new(Credentials::from_env()).ok()?;
        Some(Self { client, domain })
    }

    /// Looks up the test domain's ID in the first page of the listing.
    pub async fn find_domain_id(&self) -> Option<String> {
        let page = self
            .client
            .list_domains(&DomainListParams::new(500, 0))
            .await
            .ok()?;
        page.domains
            .into_iter()
            .find(|d| d.name == self.domain)
            .map(|d| d.id.to_string())
    }
}
