//! Presentation Layer

pub mod dto;
pub mod handlers;
pub mod router;

pub use handlers::BlogAppState;
pub use router::{posts_router, posts_router_generic};
