//! Auth (Authentication & Authorization) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, repository traits
//! - `application/` - Use cases and application services
//! - `infra/` - Database implementations, OAuth provider client
//! - `presentation/` - HTTP handlers, DTOs, router, middleware
//!
//! ## Features
//! - Author registration with email + password
//! - Basic, Bearer-token and federated (OAuth) authentication
//! - Stateless JWT bearer tokens (7-day expiry)
//! - Role-based access (Author, Admin)
//!
//! ## Security Model
//! - Passwords hashed with Argon2id, fresh salt on every change
//! - Unknown-email and wrong-password sign-ins are indistinguishable
//! - Role is never settable through self-service updates

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use application::config::AuthConfig;
pub use application::token::TokenService;
pub use error::{AuthError, AuthResult};
pub use infra::postgres::PgAuthorRepository;
pub use presentation::router::authors_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod store {
    pub use crate::infra::postgres::PgAuthorRepository as AuthorStore;
}

pub mod router {
    pub use crate::presentation::router::*;
}

pub mod middleware {
    pub use crate::presentation::middleware::*;
}
