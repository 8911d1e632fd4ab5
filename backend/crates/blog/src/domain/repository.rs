//! Repository Trait
//!
//! Interface for blog post persistence. Implementation is in the
//! infrastructure layer.

use auth::domain::value_object::author_id::AuthorId;

use crate::domain::entities::{BlogPost, Review};
use crate::domain::value_objects::{PostId, ReviewId};
use crate::error::BlogResult;

/// Filter criteria for paginated post listing
#[derive(Debug, Clone, Default)]
pub struct PostFilter {
    /// Exact category match
    pub category: Option<String>,
    /// Case-insensitive substring match on the title
    pub title_contains: Option<String>,
    /// Posts by one author
    pub author_id: Option<AuthorId>,
}

/// Sort order for paginated post listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PostSort {
    #[default]
    CreatedAtDesc,
    CreatedAtAsc,
    TitleAsc,
}

/// One page of posts plus the total match count
#[derive(Debug, Clone)]
pub struct PostPage {
    pub total: i64,
    pub posts: Vec<BlogPost>,
}

/// Blog post repository trait
#[trait_variant::make(BlogPostRepository: Send)]
pub trait LocalBlogPostRepository {
    /// Create a new post
    async fn create(&self, post: &BlogPost) -> BlogResult<()>;

    /// Find post by ID, with its like count
    async fn find_by_id(&self, post_id: &PostId) -> BlogResult<Option<BlogPost>>;

    /// Update post scalar fields
    async fn update(&self, post: &BlogPost) -> BlogResult<()>;

    /// Delete post (cascades to reviews and likes); returns false when
    /// no such post existed
    async fn delete(&self, post_id: &PostId) -> BlogResult<bool>;

    /// Count matching posts and return one page of them
    async fn count_and_find(
        &self,
        filter: &PostFilter,
        sort: PostSort,
        limit: i64,
        skip: i64,
    ) -> BlogResult<PostPage>;

    /// Attach a review to a post
    async fn add_review(&self, review: &Review) -> BlogResult<()>;

    /// Find one review of a post
    async fn find_review(
        &self,
        post_id: &PostId,
        review_id: &ReviewId,
    ) -> BlogResult<Option<Review>>;

    /// All reviews of a post, newest first
    async fn list_reviews(&self, post_id: &PostId) -> BlogResult<Vec<Review>>;

    /// Update a review
    async fn update_review(&self, review: &Review) -> BlogResult<()>;

    /// Delete a review; returns false when no such review existed
    async fn delete_review(&self, post_id: &PostId, review_id: &ReviewId) -> BlogResult<bool>;

    /// Record a like; idempotent per author. Returns the like count.
    async fn add_like(&self, post_id: &PostId, author_id: &AuthorId) -> BlogResult<i64>;

    /// Remove a like; idempotent. Returns the like count.
    async fn remove_like(&self, post_id: &PostId, author_id: &AuthorId) -> BlogResult<i64>;
}
