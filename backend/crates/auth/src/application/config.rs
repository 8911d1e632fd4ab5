//! Application Configuration
//!
//! Configuration for the Auth application layer. All process-wide secrets
//! (token signing key, provider credentials) live here and are passed into
//! the services at construction; nothing reads the environment ambiently.

use std::time::Duration;

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Secret key for signing bearer tokens. Empty means unconfigured;
    /// token issuance fails until it is set.
    pub token_secret: Vec<u8>,
    /// Token lifetime from issuance (1 week)
    pub token_ttl: Duration,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
    /// Federated login provider; None disables the OAuth routes
    pub oauth: Option<OAuthProviderConfig>,
}

/// Federated identity provider configuration
#[derive(Debug, Clone)]
pub struct OAuthProviderConfig {
    pub client_id: String,
    pub client_secret: String,
    /// Provider's authorization endpoint
    pub auth_url: String,
    /// Provider's code-for-token endpoint
    pub token_url: String,
    /// Provider's profile endpoint
    pub userinfo_url: String,
    /// Our callback URL, registered with the provider
    pub redirect_url: String,
    /// Frontend URL the callback redirects to, token appended
    pub frontend_redirect_url: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_secret: Vec::new(),
            token_ttl: Duration::from_secs(7 * 24 * 3600), // 1 week
            password_pepper: None,
            oauth: None,
        }
    }
}

impl AuthConfig {
    /// Create config with a random token secret (for development)
    pub fn with_random_secret() -> Self {
        use rand::RngCore;
        let mut secret = vec![0u8; 32];
        rand::rng().fill_bytes(&mut secret);
        Self {
            token_secret: secret,
            ..Default::default()
        }
    }

    /// Create config for development
    pub fn development() -> Self {
        Self::with_random_secret()
    }

    /// Get token TTL in seconds
    pub fn token_ttl_secs(&self) -> i64 {
        self.token_ttl.as_secs() as i64
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AuthConfig::default();

        assert!(config.token_secret.is_empty());
        assert_eq!(config.token_ttl, Duration::from_secs(7 * 24 * 3600));
        assert!(config.password_pepper.is_none());
        assert!(config.oauth.is_none());
    }

    #[test]
    fn test_with_random_secret() {
        let config1 = AuthConfig::with_random_secret();
        let config2 = AuthConfig::with_random_secret();

        assert_ne!(config1.token_secret, config2.token_secret);
        assert!(config1.token_secret.iter().any(|&b| b != 0));
    }

    #[test]
    fn test_token_ttl_secs() {
        let config = AuthConfig::default();
        assert_eq!(config.token_ttl_secs(), 604_800);
    }
}
