//! `DomainsApi` implementation for `PostmarkClient`

use async_trait::async_trait;

use crate::client::PostmarkClient;
use crate::error::{ClientError, Result};
use crate::traits::DomainsApi;
use crate::types::{
    ApiError, CreateDomain, Domain, DomainList, DomainListParams, EditDomain, RotatedDkim,
};

use super::operations;

#[async_trait]
impl DomainsApi for PostmarkClient {
    async fn list_domains(&self, params: &DomainListParams) -> Result<DomainList> {
        self.execute(&operations::list(params)).await
    }

    async fn get_domain(&self, domain_id: &str) -> Result<Domain> {
        self.execute(&operations::get(domain_id)).await
    }

    async fn create_domain(&self, request: &CreateDomain) -> Result<Domain> {
        self.execute(&operations::create(request)?).await
    }

    async fn edit_domain(&self, domain_id: &str, request: &EditDomain) -> Result<Domain> {
        self.execute(&operations::edit(domain_id, request)?).await
    }

    async fn delete_domain(&self, domain_id: &str) -> Result<()> {
        let status: ApiError = self.execute(&operations::delete(domain_id)).await?;
        // The body is the error value itself; success means exactly code 0.
        if status.is_success() {
            Ok(())
        } else {
            Err(ClientError::Api {
                code: status.error_code,
                message: status.message,
            })
        }
    }

    async fn verify_dkim(&self, domain_id: &str) -> Result<Domain> {
        self.execute(&operations::verify_dkim(domain_id)).await
    }

    async fn verify_return_path(&self, domain_id: &str) -> Result<Domain> {
        self.execute(&operations::verify_return_path(domain_id)).await
    }

    async fn rotate_dkim(&self, domain_id: &str) -> Result<RotatedDkim> {
        self.execute(&operations::rotate_dkim(domain_id)).await
    }
}
