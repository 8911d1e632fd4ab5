//! Infrastructure Layer
//!
//! Database implementation and external service integrations.

pub mod oauth;
pub mod postgres;

pub use oauth::HttpIdentityProvider;
pub use postgres::PgAuthorRepository;
