//! Author listing and removal use cases

use std::sync::Arc;

use crate::domain::repository::{AuthorFilter, AuthorPage, AuthorRepository, AuthorSort};
use crate::domain::value_object::author_id::AuthorId;
use crate::error::{AuthError, AuthResult};

/// Hard cap on page size
pub const MAX_PAGE_SIZE: i64 = 100;

/// Default page size
pub const DEFAULT_PAGE_SIZE: i64 = 20;

/// Paginated author listing use case
pub struct ListAuthorsUseCase<R>
where
    R: AuthorRepository,
{
    repo: Arc<R>,
}

impl<R> ListAuthorsUseCase<R>
where
    R: AuthorRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(
        &self,
        filter: AuthorFilter,
        sort: AuthorSort,
        limit: Option<i64>,
        skip: Option<i64>,
    ) -> AuthResult<AuthorPage> {
        let limit = limit.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE);
        let skip = skip.unwrap_or(0).max(0);

        self.repo.count_and_find(&filter, sort, limit, skip).await
    }
}

/// Author removal use case (self-service delete and admin delete)
pub struct DeleteAuthorUseCase<R>
where
    R: AuthorRepository,
{
    repo: Arc<R>,
}

impl<R> DeleteAuthorUseCase<R>
where
    R: AuthorRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, target: &AuthorId) -> AuthResult<()> {
        if !self.repo.delete(target).await? {
            return Err(AuthError::AuthorNotFound);
        }

        tracing::info!(author_id = %target, "Author deleted");

        Ok(())
    }
}
