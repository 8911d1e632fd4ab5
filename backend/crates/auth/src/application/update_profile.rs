//! Update Author Use Case
//!
//! Applies profile changes for both the self-service and the admin paths.
//! The scope decides what the payload may touch: self-service can never
//! change `role`, whatever the request claims.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::application::config::AuthConfig;
use crate::domain::entity::author::Author;
use crate::domain::repository::AuthorRepository;
use crate::domain::value_object::{
    author_id::AuthorId,
    author_password::{AuthorPassword, RawPassword},
    author_role::AuthorRole,
    email::Email,
};
use crate::error::{AuthError, AuthResult};

/// Who is performing the update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateScope {
    /// The author edits their own profile; `role` input is ignored
    SelfService,
    /// An admin edits any author; `role` input is applied
    Admin,
}

/// Update input. Absent fields are left unchanged.
#[derive(Debug, Default)]
pub struct UpdateAuthorInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub avatar: Option<String>,
    pub role: Option<AuthorRole>,
}

/// Update use case
pub struct UpdateAuthorUseCase<R>
where
    R: AuthorRepository,
{
    repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R> UpdateAuthorUseCase<R>
where
    R: AuthorRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(
        &self,
        target: &AuthorId,
        input: UpdateAuthorInput,
        scope: UpdateScope,
    ) -> AuthResult<Author> {
        let mut author = self
            .repo
            .find_by_id(target)
            .await?
            .ok_or(AuthError::AuthorNotFound)?;

        if let Some(name) = input.name {
            let name = name.trim().to_string();
            if name.is_empty() {
                return Err(AuthError::Validation("Name cannot be empty".to_string()));
            }
            author.set_name(name);
        }

        if let Some(email) = input.email {
            let email = Email::new(email)
                .map_err(|e| AuthError::Validation(e.message().to_string()))?;
            if email != author.email {
                if self.repo.exists_by_email(&email).await? {
                    return Err(AuthError::EmailTaken);
                }
                author.set_email(email);
            }
        }

        if let Some(password) = input.password {
            // Re-derive the hash with a fresh salt on every change
            let raw = RawPassword::new(password)
                .map_err(|e| AuthError::Validation(e.message().to_string()))?;
            let hash = AuthorPassword::from_raw(&raw, self.config.pepper())
                .map_err(|e| AuthError::Internal(e.to_string()))?;
            author.set_password(hash);
        }

        if let Some(birth_date) = input.birth_date {
            author.set_birth_date(birth_date);
        }

        if let Some(avatar) = input.avatar {
            author.set_avatar(avatar);
        }

        // Role is preserved across self-updates regardless of payload
        if let Some(role) = input.role {
            match scope {
                UpdateScope::Admin => author.set_role(role),
                UpdateScope::SelfService => {
                    tracing::debug!(
                        author_id = %author.author_id,
                        "Ignoring role field in self-service update"
                    );
                }
            }
        }

        self.repo.update(&author).await?;

        Ok(author)
    }
}
