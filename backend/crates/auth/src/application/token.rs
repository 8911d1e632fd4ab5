//! Token Service
//!
//! Issues and verifies the signed, time-bound bearer tokens that assert
//! "this bearer is author X". Tokens are JWTs (HS256) carrying only the
//! subject and expiry; they are opaque strings to clients. There is no
//! refresh or rotation, a sign-in yields one long-lived token.

use std::str::FromStr;
use std::sync::Arc;

use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::application::config::AuthConfig;
use crate::domain::value_object::author_id::AuthorId;
use crate::error::{AuthError, AuthResult};

/// JWT claims
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the author's UUID
    pub sub: String,
    /// Issued at (UTC seconds)
    pub iat: i64,
    /// Expiry (UTC seconds)
    pub exp: i64,
}

/// Issues and verifies bearer tokens
///
/// Built from [`AuthConfig`]; the signing secret is read-only process
/// configuration, never the ambient environment.
#[derive(Clone)]
pub struct TokenService {
    config: Arc<AuthConfig>,
}

impl TokenService {
    pub fn new(config: Arc<AuthConfig>) -> Self {
        Self { config }
    }

    /// Issue a token for the given author
    ///
    /// Expiry is `token_ttl` (1 week by default) from now. Fails with a
    /// configuration error when no signing secret is available.
    pub fn issue(&self, author_id: &AuthorId) -> AuthResult<String> {
        let secret = self.secret()?;

        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: author_id.to_string(),
            iat: now,
            exp: now + self.config.token_ttl_secs(),
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret),
        )
        .map_err(|e| AuthError::Internal(format!("Token signing failed: {}", e)))
    }

    /// Verify a token and return its subject
    ///
    /// Distinguishes an expired token from one whose signature or shape
    /// is wrong; both are 401s but the caller may want the message.
    pub fn verify(&self, token: &str) -> AuthResult<AuthorId> {
        let secret = self.secret()?;

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        let data = decode::<Claims>(token, &DecodingKey::from_secret(secret), &validation)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => AuthError::InvalidToken,
            })?;

        let uuid = Uuid::from_str(&data.claims.sub).map_err(|_| AuthError::InvalidToken)?;

        Ok(AuthorId::from_uuid(uuid))
    }

    fn secret(&self) -> AuthResult<&[u8]> {
        if self.config.token_secret.is_empty() {
            return Err(AuthError::Configuration(
                "Token signing secret is not configured".to_string(),
            ));
        }
        Ok(&self.config.token_secret)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> TokenService {
        TokenService::new(Arc::new(AuthConfig::with_random_secret()))
    }

    #[test]
    fn test_issue_and_verify_roundtrip() {
        let service = service();
        let author_id = AuthorId::new();

        let token = service.issue(&author_id).unwrap();
        let subject = service.verify(&token).unwrap();

        assert_eq!(subject, author_id);
    }

    #[test]
    fn test_verify_rejects_garbage() {
        let service = service();
        assert!(matches!(
            service.verify("not.a.jwt"),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn test_verify_rejects_foreign_secret() {
        let issuing = service();
        let verifying = service(); // different random secret

        let token = issuing.issue(&AuthorId::new()).unwrap();
        assert!(matches!(
            verifying.verify(&token),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn test_verify_rejects_expired() {
        let config = Arc::new(AuthConfig::with_random_secret());
        let service = TokenService::new(config.clone());

        // Hand-craft a token that expired an hour ago, same secret
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: AuthorId::new().to_string(),
            iat: now - 7200,
            exp: now - 3600,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(&config.token_secret),
        )
        .unwrap();

        assert!(matches!(
            service.verify(&token),
            Err(AuthError::TokenExpired)
        ));
    }

    #[test]
    fn test_issue_without_secret_is_configuration_error() {
        let service = TokenService::new(Arc::new(AuthConfig::default()));
        assert!(matches!(
            service.issue(&AuthorId::new()),
            Err(AuthError::Configuration(_))
        ));
    }
}
