//! Credential table and password checking.
//!
//! # Purpose
//! Validates username/password pairs against a fixed, in-memory table and
//! hands back the authenticated identity for token minting.
//!
//! # Security considerations
//! - Passwords are compared in plaintext and the table is compiled in; this is
//!   demo behavior, not production guidance.
//! - An unknown username and a wrong password are indistinguishable to the
//!   caller, so responses cannot be used to enumerate users.
//! - Every call is independent: there is no lockout or attempt counting.
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("access denied")]
    Denied,
}

/// The opaque identity produced by a successful authentication. The caller
/// mints a token against it; nothing else is derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub username: String,
}

/// Fixed credential table, read-only after construction.
pub struct Authenticator {
    userlist: HashMap<String, String>,
}

impl Authenticator {
    pub fn new(entries: impl IntoIterator<Item = (String, String)>) -> Self {
        Self {
            userlist: entries.into_iter().collect(),
        }
    }

    /// The demo table shipped with the service: `test_user` / `foobar`.
    pub fn with_demo_users() -> Self {
        Self::new([("test_user".to_string(), "foobar".to_string())])
    }

    /// Validate a credential pair.
    ///
    /// # Errors
    /// - `AuthError::Denied` if the username is absent or the password does
    ///   not match exactly (case-sensitive).
    pub fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<AuthenticatedUser, AuthError> {
        match self.userlist.get(username) {
            Some(expected) if expected == password => Ok(AuthenticatedUser {
                username: username.to_string(),
            }),
            _ => Err(AuthError::Denied),
        }
    }
}
