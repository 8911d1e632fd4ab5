//! HTTP Identity Provider
//!
//! reqwest-backed implementation of the federated login boundary:
//! authorization-code exchange followed by a profile fetch. Field names
//! accept both the OIDC spelling (`sub`, `picture`) and the plain-OAuth
//! spelling (`id`, `avatar`) some providers use.

use reqwest::Url;
use serde::Deserialize;

use crate::application::config::OAuthProviderConfig;
use crate::application::federated::{FederatedProfile, IdentityProvider};
use crate::error::{AuthError, AuthResult};

/// Identity provider reached over HTTP
#[derive(Clone)]
pub struct HttpIdentityProvider {
    config: OAuthProviderConfig,
    auth_url: Url,
    http: reqwest::Client,
}

impl HttpIdentityProvider {
    /// Build the provider client, validating the configured endpoints
    pub fn new(config: OAuthProviderConfig) -> AuthResult<Self> {
        let auth_url = Url::parse(&config.auth_url)
            .map_err(|e| AuthError::Configuration(format!("Invalid auth URL: {}", e)))?;

        Ok(Self {
            config,
            auth_url,
            http: reqwest::Client::new(),
        })
    }
}

#[derive(Deserialize)]
struct TokenExchangeResponse {
    access_token: String,
}

#[derive(Deserialize)]
struct UserInfoResponse {
    #[serde(alias = "id")]
    sub: String,
    name: String,
    email: String,
    #[serde(default, alias = "avatar")]
    picture: Option<String>,
}

impl IdentityProvider for HttpIdentityProvider {
    fn authorize_url(&self, state: &str) -> String {
        let mut url = self.auth_url.clone();
        url.query_pairs_mut()
            .append_pair("client_id", &self.config.client_id)
            .append_pair("redirect_uri", &self.config.redirect_url)
            .append_pair("response_type", "code")
            .append_pair("scope", "openid profile email")
            .append_pair("state", state);
        url.into()
    }

    async fn exchange_code(&self, code: &str) -> AuthResult<FederatedProfile> {
        let response = self
            .http
            .post(&self.config.token_url)
            .form(&[
                ("grant_type", "authorization_code"),
                ("code", code),
                ("client_id", &self.config.client_id),
                ("client_secret", &self.config.client_secret),
                ("redirect_uri", &self.config.redirect_url),
            ])
            .send()
            .await
            .map_err(|e| AuthError::Provider(format!("Token exchange failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(AuthError::Provider(format!(
                "Token exchange returned status {}",
                response.status()
            )));
        }

        let exchange: TokenExchangeResponse = response
            .json()
            .await
            .map_err(|e| AuthError::Provider(format!("Invalid token response: {}", e)))?;

        let response = self
            .http
            .get(&self.config.userinfo_url)
            .bearer_auth(&exchange.access_token)
            .send()
            .await
            .map_err(|e| AuthError::Provider(format!("Profile fetch failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(AuthError::Provider(format!(
                "Profile fetch returned status {}",
                response.status()
            )));
        }

        let info: UserInfoResponse = response
            .json()
            .await
            .map_err(|e| AuthError::Provider(format!("Invalid profile response: {}", e)))?;

        Ok(FederatedProfile {
            subject: info.sub,
            name: info.name,
            email: info.email,
            avatar: info.picture,
        })
    }
}
