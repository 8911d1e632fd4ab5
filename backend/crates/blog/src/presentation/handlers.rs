//! HTTP Handlers
//!
//! Mutations read the identity resolved by the auth middleware; posts and
//! reviews may only be edited by their owner or an admin.

use axum::Json;
use axum::extract::{Extension, Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use std::sync::Arc;
use uuid::Uuid;

use auth::domain::value_object::author_id::AuthorId;
use auth::presentation::middleware::CurrentAuthor;

use crate::domain::entities::{BlogPost, Review};
use crate::domain::repository::{BlogPostRepository, PostFilter};
use crate::domain::value_objects::{PostId, Rate, ReadTime, ReviewId};
use crate::error::{BlogError, BlogResult};
use crate::presentation::dto::{
    CreatePostRequest, CreateReviewRequest, LikeResponse, ListPostsQuery, PostDetailResponse,
    PostPageResponse, PostResponse, ReviewResponse, UpdatePostRequest, UpdateReviewRequest,
};

/// Hard cap on page size
const MAX_PAGE_SIZE: i64 = 100;

/// Default page size
const DEFAULT_PAGE_SIZE: i64 = 20;

/// Shared state for blog handlers
#[derive(Clone)]
pub struct BlogAppState<B>
where
    B: BlogPostRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<B>,
}

fn ensure_owner_or_admin(current: &CurrentAuthor, owner: &AuthorId) -> BlogResult<()> {
    if current.0.role.is_admin() || &current.0.author_id == owner {
        Ok(())
    } else {
        Err(BlogError::NotOwner)
    }
}

fn non_empty(value: String, field: &str) -> BlogResult<String> {
    let value = value.trim().to_string();
    if value.is_empty() {
        return Err(BlogError::Validation(format!("{field} cannot be empty")));
    }
    Ok(value)
}

// ============================================================================
// Posts
// ============================================================================

/// GET /api/posts
pub async fn list_posts<B>(
    State(state): State<BlogAppState<B>>,
    Query(query): Query<ListPostsQuery>,
) -> BlogResult<Json<PostPageResponse>>
where
    B: BlogPostRepository + Clone + Send + Sync + 'static,
{
    let filter = PostFilter {
        category: query.category.clone(),
        title_contains: query.title.clone(),
        author_id: query.author.map(AuthorId::from_uuid),
    };

    let limit = query.limit.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE);
    let skip = query.skip.unwrap_or(0).max(0);

    let page = state
        .repo
        .count_and_find(&filter, query.sort_order(), limit, skip)
        .await?;

    Ok(Json(PostPageResponse {
        total: page.total,
        posts: page.posts.iter().map(PostResponse::from).collect(),
    }))
}

/// GET /api/posts/{post_id}
pub async fn get_post<B>(
    State(state): State<BlogAppState<B>>,
    Path(post_id): Path<Uuid>,
) -> BlogResult<Json<PostDetailResponse>>
where
    B: BlogPostRepository + Clone + Send + Sync + 'static,
{
    let post_id = PostId::from_uuid(post_id);

    let post = state
        .repo
        .find_by_id(&post_id)
        .await?
        .ok_or(BlogError::PostNotFound)?;

    let reviews = state.repo.list_reviews(&post_id).await?;

    Ok(Json(PostDetailResponse {
        post: PostResponse::from(&post),
        reviews: reviews.iter().map(ReviewResponse::from).collect(),
    }))
}

/// POST /api/posts
pub async fn create_post<B>(
    State(state): State<BlogAppState<B>>,
    Extension(current): Extension<CurrentAuthor>,
    Json(req): Json<CreatePostRequest>,
) -> BlogResult<impl IntoResponse>
where
    B: BlogPostRepository + Clone + Send + Sync + 'static,
{
    let read_time = ReadTime::new(req.read_time.value, req.read_time.unit)?;

    let post = BlogPost::new(
        current.0.author_id,
        non_empty(req.category, "Category")?,
        non_empty(req.title, "Title")?,
        non_empty(req.cover, "Cover")?,
        non_empty(req.content, "Content")?,
        read_time,
    );

    state.repo.create(&post).await?;

    tracing::info!(
        post_id = %post.post_id,
        author_id = %post.author_id,
        "Blog post created"
    );

    Ok((StatusCode::CREATED, Json(PostResponse::from(&post))))
}

/// PUT /api/posts/{post_id}
pub async fn update_post<B>(
    State(state): State<BlogAppState<B>>,
    Extension(current): Extension<CurrentAuthor>,
    Path(post_id): Path<Uuid>,
    Json(req): Json<UpdatePostRequest>,
) -> BlogResult<Json<PostResponse>>
where
    B: BlogPostRepository + Clone + Send + Sync + 'static,
{
    let mut post = state
        .repo
        .find_by_id(&PostId::from_uuid(post_id))
        .await?
        .ok_or(BlogError::PostNotFound)?;

    ensure_owner_or_admin(&current, &post.author_id)?;

    if let Some(category) = req.category {
        post.set_category(non_empty(category, "Category")?);
    }
    if let Some(title) = req.title {
        post.set_title(non_empty(title, "Title")?);
    }
    if let Some(cover) = req.cover {
        post.set_cover(non_empty(cover, "Cover")?);
    }
    if let Some(content) = req.content {
        post.set_content(non_empty(content, "Content")?);
    }
    if let Some(read_time) = req.read_time {
        post.set_read_time(ReadTime::new(read_time.value, read_time.unit)?);
    }

    state.repo.update(&post).await?;

    Ok(Json(PostResponse::from(&post)))
}

/// DELETE /api/posts/{post_id}
pub async fn delete_post<B>(
    State(state): State<BlogAppState<B>>,
    Extension(current): Extension<CurrentAuthor>,
    Path(post_id): Path<Uuid>,
) -> BlogResult<StatusCode>
where
    B: BlogPostRepository + Clone + Send + Sync + 'static,
{
    let post_id = PostId::from_uuid(post_id);

    let post = state
        .repo
        .find_by_id(&post_id)
        .await?
        .ok_or(BlogError::PostNotFound)?;

    ensure_owner_or_admin(&current, &post.author_id)?;

    state.repo.delete(&post_id).await?;

    tracing::info!(post_id = %post_id, "Blog post deleted");

    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// Reviews
// ============================================================================

/// POST /api/posts/{post_id}/reviews
pub async fn add_review<B>(
    State(state): State<BlogAppState<B>>,
    Extension(current): Extension<CurrentAuthor>,
    Path(post_id): Path<Uuid>,
    Json(req): Json<CreateReviewRequest>,
) -> BlogResult<impl IntoResponse>
where
    B: BlogPostRepository + Clone + Send + Sync + 'static,
{
    let post_id = PostId::from_uuid(post_id);

    state
        .repo
        .find_by_id(&post_id)
        .await?
        .ok_or(BlogError::PostNotFound)?;

    let review = Review::new(
        post_id,
        current.0.author_id,
        non_empty(req.comment, "Comment")?,
        Rate::new(req.rate)?,
    );

    state.repo.add_review(&review).await?;

    Ok((StatusCode::CREATED, Json(ReviewResponse::from(&review))))
}

/// GET /api/posts/{post_id}/reviews
pub async fn list_reviews<B>(
    State(state): State<BlogAppState<B>>,
    Path(post_id): Path<Uuid>,
) -> BlogResult<Json<Vec<ReviewResponse>>>
where
    B: BlogPostRepository + Clone + Send + Sync + 'static,
{
    let post_id = PostId::from_uuid(post_id);

    state
        .repo
        .find_by_id(&post_id)
        .await?
        .ok_or(BlogError::PostNotFound)?;

    let reviews = state.repo.list_reviews(&post_id).await?;

    Ok(Json(reviews.iter().map(ReviewResponse::from).collect()))
}

/// GET /api/posts/{post_id}/reviews/{review_id}
pub async fn get_review<B>(
    State(state): State<BlogAppState<B>>,
    Path((post_id, review_id)): Path<(Uuid, Uuid)>,
) -> BlogResult<Json<ReviewResponse>>
where
    B: BlogPostRepository + Clone + Send + Sync + 'static,
{
    let review = state
        .repo
        .find_review(&PostId::from_uuid(post_id), &ReviewId::from_uuid(review_id))
        .await?
        .ok_or(BlogError::ReviewNotFound)?;

    Ok(Json(ReviewResponse::from(&review)))
}

/// PUT /api/posts/{post_id}/reviews/{review_id}
pub async fn update_review<B>(
    State(state): State<BlogAppState<B>>,
    Extension(current): Extension<CurrentAuthor>,
    Path((post_id, review_id)): Path<(Uuid, Uuid)>,
    Json(req): Json<UpdateReviewRequest>,
) -> BlogResult<Json<ReviewResponse>>
where
    B: BlogPostRepository + Clone + Send + Sync + 'static,
{
    let mut review = state
        .repo
        .find_review(&PostId::from_uuid(post_id), &ReviewId::from_uuid(review_id))
        .await?
        .ok_or(BlogError::ReviewNotFound)?;

    ensure_owner_or_admin(&current, &review.author_id)?;

    if let Some(comment) = req.comment {
        review.set_comment(non_empty(comment, "Comment")?);
    }
    if let Some(rate) = req.rate {
        review.set_rate(Rate::new(rate)?);
    }

    state.repo.update_review(&review).await?;

    Ok(Json(ReviewResponse::from(&review)))
}

/// DELETE /api/posts/{post_id}/reviews/{review_id}
pub async fn delete_review<B>(
    State(state): State<BlogAppState<B>>,
    Extension(current): Extension<CurrentAuthor>,
    Path((post_id, review_id)): Path<(Uuid, Uuid)>,
) -> BlogResult<StatusCode>
where
    B: BlogPostRepository + Clone + Send + Sync + 'static,
{
    let post_id = PostId::from_uuid(post_id);
    let review_id = ReviewId::from_uuid(review_id);

    let review = state
        .repo
        .find_review(&post_id, &review_id)
        .await?
        .ok_or(BlogError::ReviewNotFound)?;

    ensure_owner_or_admin(&current, &review.author_id)?;

    state.repo.delete_review(&post_id, &review_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// Likes
// ============================================================================

/// PUT /api/posts/{post_id}/like
pub async fn like_post<B>(
    State(state): State<BlogAppState<B>>,
    Extension(current): Extension<CurrentAuthor>,
    Path(post_id): Path<Uuid>,
) -> BlogResult<Json<LikeResponse>>
where
    B: BlogPostRepository + Clone + Send + Sync + 'static,
{
    let post_id = PostId::from_uuid(post_id);

    state
        .repo
        .find_by_id(&post_id)
        .await?
        .ok_or(BlogError::PostNotFound)?;

    let likes = state.repo.add_like(&post_id, &current.0.author_id).await?;

    Ok(Json(LikeResponse { likes }))
}

/// DELETE /api/posts/{post_id}/like
pub async fn unlike_post<B>(
    State(state): State<BlogAppState<B>>,
    Extension(current): Extension<CurrentAuthor>,
    Path(post_id): Path<Uuid>,
) -> BlogResult<Json<LikeResponse>>
where
    B: BlogPostRepository + Clone + Send + Sync + 'static,
{
    let post_id = PostId::from_uuid(post_id);

    state
        .repo
        .find_by_id(&post_id)
        .await?
        .ok_or(BlogError::PostNotFound)?;

    let likes = state
        .repo
        .remove_like(&post_id, &current.0.author_id)
        .await?;

    Ok(Json(LikeResponse { likes }))
}
