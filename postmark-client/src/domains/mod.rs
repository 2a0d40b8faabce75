//! Postmark domains resource

pub mod operations;
mod provider;
