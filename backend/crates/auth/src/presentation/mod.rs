//! Presentation Layer
//!
//! HTTP handlers, DTOs, router, and middleware.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod router;

pub use handlers::AuthAppState;
pub use middleware::{
    AuthMiddlewareState, CurrentAuthor, basic_auth, bearer_auth, require_admin,
};
pub use router::{authors_router, authors_router_generic};
