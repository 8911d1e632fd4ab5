//! Federated Sign-In Use Case
//!
//! Authentication delegated to an external identity provider. The first
//! sign-in creates the account; later sign-ins find it by the provider's
//! subject id, so the operation is idempotent per external identity.

use std::sync::Arc;

use crate::application::token::TokenService;
use crate::domain::entity::author::Author;
use crate::domain::repository::AuthorRepository;
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};

/// Profile delivered by the provider after a successful code exchange
#[derive(Debug, Clone)]
pub struct FederatedProfile {
    /// Provider's stable subject id
    pub subject: String,
    /// Display name
    pub name: String,
    /// Primary email
    pub email: String,
    /// Avatar URL, when the provider sends one
    pub avatar: Option<String>,
}

/// Identity provider boundary
///
/// Implemented over HTTP in the infrastructure layer; stubbed in tests.
#[trait_variant::make(IdentityProvider: Send)]
pub trait LocalIdentityProvider {
    /// Build the provider authorization URL for the given state token
    fn authorize_url(&self, state: &str) -> String;

    /// Exchange a callback code for the provider-held profile
    async fn exchange_code(&self, code: &str) -> AuthResult<FederatedProfile>;
}

/// Federated sign-in output
pub struct FederatedSignInOutput {
    pub author: Author,
    pub token: String,
    /// True when this call created the account
    pub created: bool,
}

/// Federated sign-in use case
pub struct FederatedSignInUseCase<R, P>
where
    R: AuthorRepository,
    P: IdentityProvider,
{
    repo: Arc<R>,
    provider: Arc<P>,
    tokens: TokenService,
}

impl<R, P> FederatedSignInUseCase<R, P>
where
    R: AuthorRepository,
    P: IdentityProvider,
{
    pub fn new(repo: Arc<R>, provider: Arc<P>, tokens: TokenService) -> Self {
        Self {
            repo,
            provider,
            tokens,
        }
    }

    pub async fn execute(&self, code: &str) -> AuthResult<FederatedSignInOutput> {
        let profile = self.provider.exchange_code(code).await?;

        // Returning sign-in: subject already known
        if let Some(author) = self.repo.find_by_federated_id(&profile.subject).await? {
            let token = self.tokens.issue(&author.author_id)?;
            return Ok(FederatedSignInOutput {
                author,
                token,
                created: false,
            });
        }

        let email = Email::new(&profile.email)
            .map_err(|e| AuthError::Provider(format!("Provider sent invalid email: {}", e)))?;

        // Same email already registered locally: link the external
        // identity instead of violating one-author-per-email.
        if let Some(mut author) = self.repo.find_by_email(&email).await? {
            author.link_federated_id(profile.subject.clone());
            self.repo.update(&author).await?;

            tracing::info!(
                author_id = %author.author_id,
                "Linked federated identity to existing author"
            );

            let token = self.tokens.issue(&author.author_id)?;
            return Ok(FederatedSignInOutput {
                author,
                token,
                created: false,
            });
        }

        // First sign-in: create with default role and a generated avatar
        // when the provider sent none.
        let author = Author::new_federated(profile.name, email, profile.subject, profile.avatar);

        self.repo.create(&author).await?;

        tracing::info!(
            author_id = %author.author_id,
            email = %author.email,
            "Author created from federated sign-in"
        );

        let token = self.tokens.issue(&author.author_id)?;

        Ok(FederatedSignInOutput {
            author,
            token,
            created: true,
        })
    }
}
