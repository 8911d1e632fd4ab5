//! Domain Layer

pub mod entities;
pub mod repository;
pub mod value_objects;

// Re-exports
pub use entities::{BlogPost, Review};
pub use repository::{BlogPostRepository, PostFilter, PostPage, PostSort};
pub use value_objects::{PostId, Rate, ReadTime, ReviewId};
