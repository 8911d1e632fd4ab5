//! Register Author Use Case
//!
//! Creates a new locally-registered author account.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::application::config::AuthConfig;
use crate::domain::entity::author::Author;
use crate::domain::repository::AuthorRepository;
use crate::domain::value_object::{
    author_password::{AuthorPassword, RawPassword},
    email::Email,
};
use crate::error::{AuthError, AuthResult};

/// Registration input
pub struct RegisterInput {
    pub name: String,
    pub email: String,
    pub password: String,
    pub birth_date: Option<NaiveDate>,
    pub avatar: Option<String>,
}

/// Register use case
pub struct RegisterAuthorUseCase<R>
where
    R: AuthorRepository,
{
    repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R> RegisterAuthorUseCase<R>
where
    R: AuthorRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<Author> {
        let name = input.name.trim().to_string();
        if name.is_empty() {
            return Err(AuthError::Validation("Name cannot be empty".to_string()));
        }

        let email = Email::new(input.email)
            .map_err(|e| AuthError::Validation(e.message().to_string()))?;

        // Application-level duplicate check; the unique index is the
        // authoritative guard against races.
        if self.repo.exists_by_email(&email).await? {
            return Err(AuthError::EmailTaken);
        }

        // The plaintext never reaches the store: validate, then replace
        // with a fresh salted hash before persisting.
        let raw_password = RawPassword::new(input.password)
            .map_err(|e| AuthError::Validation(e.message().to_string()))?;
        let password_hash = AuthorPassword::from_raw(&raw_password, self.config.pepper())
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        let author = Author::new_local(name, email, password_hash, input.birth_date, input.avatar);

        self.repo.create(&author).await?;

        tracing::info!(
            author_id = %author.author_id,
            email = %author.email,
            "Author registered"
        );

        Ok(author)
    }
}
