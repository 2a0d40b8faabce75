//! Utility modules.

/// Keeps DKIM key material and large bodies out of logs.
pub mod log_sanitizer;
