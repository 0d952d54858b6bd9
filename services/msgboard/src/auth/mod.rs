//! Authentication module.
//!
//! # Purpose
//! Credential checking, access-token issuance/verification, and the `/token`
//! endpoint handler.
pub mod credentials;
pub mod issue;
pub mod token;

pub(crate) fn extract_bearer(headers: &axum::http::HeaderMap) -> Option<&str> {
    let value = headers.get(axum::http::header::AUTHORIZATION)?;
    let value = value.to_str().ok()?;
    value.strip_prefix("Bearer ")
}
