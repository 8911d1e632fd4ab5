//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.
//! The backing store is an external collaborator; these traits carry its
//! contract (create / find / update / delete-by-id, count + paginated find,
//! email uniqueness).

use crate::domain::entity::author::Author;
use crate::domain::value_object::{author_id::AuthorId, author_role::AuthorRole, email::Email};
use crate::error::AuthResult;

/// Filter criteria for paginated author listing
#[derive(Debug, Clone, Default)]
pub struct AuthorFilter {
    /// Case-insensitive substring match on the display name
    pub name_contains: Option<String>,
    /// Exact email match
    pub email: Option<Email>,
    /// Role match
    pub role: Option<AuthorRole>,
}

/// Sort order for paginated author listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthorSort {
    #[default]
    CreatedAtDesc,
    CreatedAtAsc,
    NameAsc,
    NameDesc,
}

/// One page of authors plus the total match count
#[derive(Debug, Clone)]
pub struct AuthorPage {
    pub total: i64,
    pub authors: Vec<Author>,
}

/// Author repository trait
#[trait_variant::make(AuthorRepository: Send)]
pub trait LocalAuthorRepository {
    /// Create a new author
    async fn create(&self, author: &Author) -> AuthResult<()>;

    /// Find author by ID
    async fn find_by_id(&self, author_id: &AuthorId) -> AuthResult<Option<Author>>;

    /// Find author by email (the login key)
    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<Author>>;

    /// Find author by external provider subject id
    async fn find_by_federated_id(&self, federated_id: &str) -> AuthResult<Option<Author>>;

    /// Check if an email is already registered
    async fn exists_by_email(&self, email: &Email) -> AuthResult<bool>;

    /// Update author
    async fn update(&self, author: &Author) -> AuthResult<()>;

    /// Delete author; returns false when no such author existed
    async fn delete(&self, author_id: &AuthorId) -> AuthResult<bool>;

    /// Count matching authors and return one page of them
    async fn count_and_find(
        &self,
        filter: &AuthorFilter,
        sort: AuthorSort,
        limit: i64,
        skip: i64,
    ) -> AuthResult<AuthorPage>;
}
