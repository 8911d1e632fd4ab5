//! Check Credentials Use Case
//!
//! Answers "which author do these credentials belong to", without ever
//! exposing stored hashes.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::entity::author::Author;
use crate::domain::repository::AuthorRepository;
use crate::domain::value_object::{
    author_password::{AuthorPassword, RawPassword},
    email::Email,
};
use crate::error::AuthResult;

/// Check credentials use case
///
/// Returns `Ok(None)` for unknown email, federation-only accounts, and
/// wrong passwords alike; the three no-match cases are indistinguishable
/// to the caller, and each costs one Argon2 comparison.
pub struct CheckCredentialsUseCase<R>
where
    R: AuthorRepository,
{
    repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R> CheckCredentialsUseCase<R>
where
    R: AuthorRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, email: &str, password: String) -> AuthResult<Option<Author>> {
        let pepper = self.config.pepper();
        let raw = RawPassword::for_login(password);

        // A malformed email cannot match any account; fall through to the
        // dummy verification rather than returning early.
        let author = match Email::new(email) {
            Ok(email) => self.repo.find_by_email(&email).await?,
            Err(_) => None,
        };

        match author {
            Some(author) => match &author.password_hash {
                Some(hash) if hash.verify(&raw, pepper) => Ok(Some(author)),
                Some(_) => Ok(None),
                None => {
                    // Federation-only account: no local password to compare
                    AuthorPassword::verify_dummy(&raw, pepper);
                    Ok(None)
                }
            },
            None => {
                AuthorPassword::verify_dummy(&raw, pepper);
                Ok(None)
            }
        }
    }
}
