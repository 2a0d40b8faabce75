//! # postmark-client
//!
//! A typed async client for the [Postmark](https://postmarkapp.com/) REST API,
//! covering the domains resource.
//!
//! ## Operations
//!
//! | Method | Endpoint | Token |
//! |--------|----------|-------|
//! | [`list_domains`](DomainsApi::list_domains) | `GET /domains?count=&offset=` | server |
//! | [`get_domain`](DomainsApi::get_domain) | `GET /domains/{id}` | server |
//! | [`create_domain`](DomainsApi::create_domain) | `POST /domains` | server |
//! | [`edit_domain`](DomainsApi::edit_domain) | `PUT /domains/{id}` | server |
//! | [`delete_domain`](DomainsApi::delete_domain) | `DELETE /domains/{id}` | server |
//! | [`verify_dkim`](DomainsApi::verify_dkim) | `PUT /domains/{id}/verifyDkim` | server |
//! | [`verify_return_path`](DomainsApi::verify_return_path) | `PUT /domains/{id}/verifyReturnPath` | server |
//! | [`rotate_dkim`](DomainsApi::rotate_dkim) | `POST /domains/{id}/rotatedkim` | server |
//!
//! Other endpoints can be reached with [`Operation`] and
//! [`PostmarkClient::execute`], which apply the same authentication and
//! error handling.
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)* — Use the platform's native TLS implementation.
//! - **`rustls`** — Use rustls.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use postmark_client::{
//!     CreateDomain, Credentials, DomainListParams, DomainsApi, PostmarkClient,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = PostmarkClient::new(Credentials::server("your-server-token"))?;
//!
//!     let domain = client
//!         .create_domain(&CreateDomain {
//!             name: "example.com".to_string(),
//!             return_path_domain: "pm-bounces.example.com".to_string(),
//!         })
//!         .await?;
//!     println!("{} -> DKIM host {}", domain.name, domain.dkim_host);
//!
//!     let page = client.list_domains(&DomainListParams::new(50, 0)).await?;
//!     for info in &page.domains {
//!         println!("{} (dkim verified: {})", info.name, info.dkim_verified);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Every operation returns [`Result<T, ClientError>`](ClientError). A body
//! with a non-zero `ErrorCode` is reported as [`ClientError::Api`] even when
//! the HTTP status is 2xx, and a non-2xx status is reported as
//! [`ClientError::HttpStatus`] even when `ErrorCode` is 0. Nothing is retried.

mod client;
mod config;
mod credentials;
mod domains;
mod error;
mod operation;
mod traits;
mod transport;
mod types;
mod utils;

#[cfg(test)]
mod test_utils;

pub use client::PostmarkClient;
pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use credentials::{
    ACCOUNT_TOKEN_ENV, ACCOUNT_TOKEN_HEADER, Credentials, SERVER_TOKEN_ENV, SERVER_TOKEN_HEADER,
    TokenType,
};
pub use domains::operations as domain_operations;
pub use error::{ClientError, Result};
pub use operation::Operation;
pub use traits::DomainsApi;
pub use transport::{HttpMethod, HttpRequest, HttpResponse, ReqwestTransport, Transport};
pub use types::{
    ApiError, CreateDomain, Domain, DomainInfo, DomainList, DomainListParams, EditDomain,
    RotatedDkim,
};
