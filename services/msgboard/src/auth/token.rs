//! Access-token minting and verification.
//!
//! # Purpose
//! Defines the claim structure and a small service that signs and validates
//! HS256 access tokens with the configured secret.
//!
//! # Key invariants
//! - Tokens are always HS256 over the single configured secret; there is no
//!   key rotation in this service.
//! - `sub` carries the authenticated username and `exp` is always set, so
//!   verification rejects expired tokens without extra checks at call sites.
//!
//! # Security boundary
//! The secret is shared between minting and verification inside one process.
//! Error messages never include the secret or the token contents.
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use thiserror::Error;

/// Claims carried by issued access tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessClaims {
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("jwt error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),
}

/// Signs and verifies access tokens for one configured secret and TTL.
#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl TokenService {
    pub fn new(secret: &str, ttl: Duration) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl,
        }
    }

    /// Mint a token for an authenticated identity.
    ///
    /// # Errors
    /// - `TokenError::Jwt` if encoding fails.
    pub fn issue(&self, identity: &str) -> Result<String, TokenError> {
        let now = now_epoch_seconds();
        let claims = AccessClaims {
            sub: identity.to_string(),
            iat: now,
            exp: now + self.ttl.as_secs() as i64,
        };
        Ok(jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &self.encoding,
        )?)
    }

    /// Verify a presented token and return its claims.
    ///
    /// # Errors
    /// - `TokenError::Jwt` for a bad signature, malformed token, or expiry.
    pub fn verify(&self, token: &str) -> Result<AccessClaims, TokenError> {
        let validation = Validation::new(Algorithm::HS256);
        let data = jsonwebtoken::decode::<AccessClaims>(token, &self.decoding, &validation)?;
        Ok(data.claims)
    }
}

fn now_epoch_seconds() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> TokenService {
        TokenService::new("test-secret", Duration::from_secs(900))
    }

    #[test]
    fn issued_token_round_trips() {
        let tokens = service();
        let token = tokens.issue("test_user").unwrap();
        let claims = tokens.verify(&token).unwrap();
        assert_eq!(claims.sub, "test_user");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn verify_rejects_garbage() {
        let tokens = service();
        assert!(tokens.verify("not-a-jwt").is_err());
    }

    #[test]
    fn verify_rejects_other_secret() {
        let token = TokenService::new("other-secret", Duration::from_secs(900))
            .issue("test_user")
            .unwrap();
        assert!(service().verify(&token).is_err());
    }

    #[test]
    fn verify_rejects_expired_token() {
        let tokens = service();
        let now = now_epoch_seconds();
        let claims = AccessClaims {
            sub: "test_user".to_string(),
            iat: now - 7200,
            // Far enough in the past to clear the default clock-skew leeway.
            exp: now - 3600,
        };
        let token = jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap();
        assert!(tokens.verify(&token).is_err());
    }

    #[test]
    fn verify_rejects_tampered_payload() {
        let tokens = service();
        let token = tokens.issue("test_user").unwrap();
        let mut parts: Vec<&str> = token.split('.').collect();
        assert_eq!(parts.len(), 3);
        let forged = "eyJzdWIiOiJhZG1pbiJ9";
        parts[1] = forged;
        let tampered = parts.join(".");
        assert!(tokens.verify(&tampered).is_err());
    }
}
