use async_trait::async_trait;

use crate::error::Result;
use crate::types::{CreateDomain, Domain, DomainList, DomainListParams, EditDomain, RotatedDkim};

/// Postmark domains API.
///
/// Implemented by [`PostmarkClient`](crate::PostmarkClient); code that only
/// needs domain management can depend on this trait and take a fake in tests.
/// Every method is a single request authenticated with the server token.
/// Domain identifiers are opaque and interpolated into the path unchanged.
#[async_trait]
pub trait DomainsApi: Send + Sync {
    /// Lists domains, `params.count` at a time starting at `params.offset`.
    async fn list_domains(&self, params: &DomainListParams) -> Result<DomainList>;

    /// Fetches one domain.
    async fn get_domain(&self, domain_id: &str) -> Result<Domain>;

    /// Creates a domain.
    async fn create_domain(&self, request: &CreateDomain) -> Result<Domain>;

    /// Replaces the editable fields of a domain.
    async fn edit_domain(&self, domain_id: &str, request: &EditDomain) -> Result<Domain>;

    /// Deletes a domain. Succeeds only when the provider answers with error code 0.
    async fn delete_domain(&self, domain_id: &str) -> Result<()>;

    /// Asks the provider to re-check the DKIM DNS record.
    async fn verify_dkim(&self, domain_id: &str) -> Result<Domain>;

    /// Asks the provider to re-check the return-path CNAME record.
    async fn verify_return_path(&self, domain_id: &str) -> Result<Domain>;

    /// Starts a DKIM key rotation.
    async fn rotate_dkim(&self, domain_id: &str) -> Result<RotatedDkim>;
}
