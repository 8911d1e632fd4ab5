//! Blog Backend Module
//!
//! Blog posts with reviews and likes. Consumes the identity resolved by
//! the `auth` crate: mutations require a Bearer-authenticated author, and
//! posts can only be edited by their owner or an admin.
//!
//! Structure:
//! - `domain/` - Entities, value objects, repository trait
//! - `infra/` - PostgreSQL implementation
//! - `presentation/` - HTTP handlers, DTOs, router

pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use error::{BlogError, BlogResult};
pub use infra::postgres::PgBlogPostRepository;
pub use presentation::router::posts_router;

pub mod store {
    pub use crate::infra::postgres::PgBlogPostRepository as BlogStore;
}

pub mod models {
    pub use crate::domain::entities::*;
    pub use crate::domain::value_objects::*;
    pub use crate::presentation::dto::*;
}

pub mod router {
    pub use crate::presentation::router::*;
}
