use serde::{Deserialize, Serialize};

// ============ Envelope ============

/// The `{ErrorCode, Message}` pair Postmark puts in error bodies and in the
/// body of some mutating calls. Code `0` means success.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    #[serde(rename = "ErrorCode", default)]
    pub error_code: i64,
    #[serde(rename = "Message", default)]
    pub message: String,
}

impl ApiError {
    pub fn is_success(&self) -> bool {
        self.error_code == 0
    }
}

// ============ Pagination ============

/// `count`/`offset` for the domain listing, passed through to the API as-is.
///
/// # Default
///
/// `count = 100, offset = 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainListParams {
    /// Number of records to return.
    pub count: u32,
    /// Number of records to skip.
    pub offset: u32,
}

impl Default for DomainListParams {
    fn default() -> Self {
        Self {
            count: 100,
            offset: 0,
        }
    }
}

impl DomainListParams {
    pub fn new(count: u32, offset: u32) -> Self {
        Self { count, offset }
    }
}

// ============ Domain Types ============

/// Full domain record, including SPF/DKIM/return-path DNS details.
///
/// Replaced wholesale by every response; fields the API omits decode to
/// their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Domain {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "SPFVerified")]
    pub spf_verified: bool,
    #[serde(rename = "SPFHost")]
    pub spf_host: String,
    #[serde(rename = "SPFTextValue")]
    pub spf_text_value: String,
    #[serde(rename = "DKIMVerified")]
    pub dkim_verified: bool,
    #[serde(rename = "WeakDKIM")]
    pub weak_dkim: bool,
    #[serde(rename = "DKIMHost")]
    pub dkim_host: String,
    #[serde(rename = "DKIMTextValue")]
    pub dkim_text_value: String,
    #[serde(rename = "DKIMPendingHost")]
    pub dkim_pending_host: String,
    #[serde(rename = "DKIMPendingTextValue")]
    pub dkim_pending_text_value: String,
    #[serde(rename = "DKIMRevokedHost")]
    pub dkim_revoked_host: String,
    #[serde(rename = "DKIMRevokedTextValue")]
    pub dkim_revoked_text_value: String,
    #[serde(rename = "SafeToRemoveRevokedKeyFromDNS")]
    pub safe_to_remove_revoked_key_from_dns: bool,
    #[serde(rename = "DKIMUpdateStatus")]
    pub dkim_update_status: String,
    #[serde(rename = "ReturnPathDomain")]
    pub return_path_domain: String,
    #[serde(rename = "ReturnPathDomainVerified")]
    pub return_path_domain_verified: bool,
    #[serde(rename = "ReturnPathDomainCNAMEValue")]
    pub return_path_domain_cname_value: String,
    #[serde(rename = "ID")]
    pub id: i64,
}

/// Summary row returned by the domain listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DomainInfo {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "SPFVerified")]
    pub spf_verified: bool,
    #[serde(rename = "DKIMVerified")]
    pub dkim_verified: bool,
    #[serde(rename = "WeakDKIM")]
    pub weak_dkim: bool,
    #[serde(rename = "ReturnPathDomainVerified")]
    pub return_path_domain_verified: bool,
    #[serde(rename = "ID")]
    pub id: i64,
}

/// One page of domains, in the order the API returned them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainList {
    #[serde(rename = "TotalCount")]
    pub total_count: u64,
    #[serde(rename = "Domains", default)]
    pub domains: Vec<DomainInfo>,
}

/// Payload for creating a domain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateDomain {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "ReturnPathDomain")]
    pub return_path_domain: String,
}

/// Payload for editing a domain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditDomain {
    #[serde(rename = "ReturnPathDomain")]
    pub return_path_domain: String,
}

/// DKIM state after a key rotation request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RotatedDkim {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "DKIMVerified")]
    pub dkim_verified: bool,
    #[serde(rename = "WeakDKIM")]
    pub weak_dkim: bool,
    #[serde(rename = "DKIMHost")]
    pub dkim_host: String,
    #[serde(rename = "DKIMTextValue")]
    pub dkim_text_value: String,
    #[serde(rename = "DKIMPendingHost")]
    pub dkim_pending_host: String,
    #[serde(rename = "DKIMPendingTextValue")]
    pub dkim_pending_text_value: String,
    #[serde(rename = "DKIMRevokedHost")]
    pub dkim_revoked_host: String,
    #[serde(rename = "DKIMRevokedTextValue")]
    pub dkim_revoked_text_value: String,
    #[serde(rename = "SafeToRemoveRevokedKeyFromDNS")]
    pub safe_to_remove_revoked_key_from_dns: bool,
    #[serde(rename = "DKIMUpdateStatus")]
    pub dkim_update_status: String,
    #[serde(rename = "ID")]
    pub id: i64,
}
