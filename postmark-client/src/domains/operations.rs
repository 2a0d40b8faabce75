//! Descriptor table for the domains resource
//!
//! | Operation | Method | Path |
//! |---|---|---|
//! | list | GET | `domains?count=&offset=` |
//! | get | GET | `domains/{id}` |
//! | create | POST | `domains` |
//! | edit | PUT | `domains/{id}` |
//! | delete | DELETE | `domains/{id}` |
//! | verify DKIM | PUT | `domains/{id}/verifyDkim` |
//! | verify return path | PUT | `domains/{id}/verifyReturnPath` |
//! | rotate DKIM | POST | `domains/{id}/rotatedkim` |
//!
//! All of them use the server token.

use crate::credentials::TokenType;
use crate::error::Result;
use crate::operation::Operation;
use crate::transport::HttpMethod;
use crate::types::{CreateDomain, DomainListParams, EditDomain};

const DOMAINS_PATH: &str = "domains";
const TOKEN: TokenType = TokenType::Server;

fn domain_path(domain_id: &str) -> String {
    format!("{DOMAINS_PATH}/{domain_id}")
}

pub fn list(params: &DomainListParams) -> Operation {
    Operation::new(HttpMethod::Get, DOMAINS_PATH, TOKEN).with_query(&[
        ("count", params.count.to_string()),
        ("offset", params.offset.to_string()),
    ])
}

pub fn get(domain_id: &str) -> Operation {
    Operation::new(HttpMethod::Get, domain_path(domain_id), TOKEN)
}

pub fn create(request: &CreateDomain) -> Result<Operation> {
    Operation::new(HttpMethod::Post, DOMAINS_PATH, TOKEN).with_payload(request)
}

pub fn edit(domain_id: &str, request: &EditDomain) -> Result<Operation> {
    Operation::new(HttpMethod::Put, domain_path(domain_id), TOKEN).with_payload(request)
}

pub fn delete(domain_id: &str) -> Operation {
    Operation::new(HttpMethod::Delete, domain_path(domain_id), TOKEN)
}

pub fn verify_dkim(domain_id: &str) -> Operation {
    Operation::new(
        HttpMethod::Put,
        format!("{}/verifyDkim", domain_path(domain_id)),
        TOKEN,
    )
}

pub fn verify_return_path(domain_id: &str) -> Operation {
    Operation::new(
        HttpMethod::Put,
        format!("{}/verifyReturnPath", domain_path(domain_id)),
        TOKEN,
    )
}

pub fn rotate_dkim(domain_id: &str) -> Operation {
    Operation::new(
        HttpMethod::Post,
        format!("{}/rotatedkim", domain_path(domain_id)),
        TOKEN,
    )
}
