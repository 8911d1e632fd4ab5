//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::{BlogPost, Review};
use crate::domain::repository::PostSort;
use crate::domain::value_objects::ReadTime;

// ============================================================================
// Posts
// ============================================================================

/// Post creation request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    pub category: String,
    pub title: String,
    pub cover: String,
    pub content: String,
    pub read_time: ReadTimeDto,
}

/// Post update request. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePostRequest {
    pub category: Option<String>,
    pub title: Option<String>,
    pub cover: Option<String>,
    pub content: Option<String>,
    pub read_time: Option<ReadTimeDto>,
}

/// Read time as carried on the wire
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadTimeDto {
    pub value: i32,
    pub unit: String,
}

impl From<&ReadTime> for ReadTimeDto {
    fn from(read_time: &ReadTime) -> Self {
        Self {
            value: read_time.value,
            unit: read_time.unit.clone(),
        }
    }
}

/// Post projection
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub id: Uuid,
    pub author_id: Uuid,
    pub category: String,
    pub title: String,
    pub cover: String,
    pub content: String,
    pub read_time: ReadTimeDto,
    pub likes: i64,
    pub created_at: DateTime<Utc>,
}

impl From<&BlogPost> for PostResponse {
    fn from(post: &BlogPost) -> Self {
        Self {
            id: *post.post_id.as_uuid(),
            author_id: *post.author_id.as_uuid(),
            category: post.category.clone(),
            title: post.title.clone(),
            cover: post.cover.clone(),
            content: post.content.clone(),
            read_time: ReadTimeDto::from(&post.read_time),
            likes: post.likes,
            created_at: post.created_at,
        }
    }
}

/// Post projection with its reviews (single-post reads)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDetailResponse {
    #[serde(flatten)]
    pub post: PostResponse,
    pub reviews: Vec<ReviewResponse>,
}

/// Post listing query string
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListPostsQuery {
    pub limit: Option<i64>,
    pub skip: Option<i64>,
    /// Exact category match
    pub category: Option<String>,
    /// Substring match on the title
    pub title: Option<String>,
    /// Posts by one author
    pub author: Option<Uuid>,
    /// Sort key; `-` prefix for descending (e.g. `-createdAt`, `title`)
    pub sort: Option<String>,
}

impl ListPostsQuery {
    pub fn sort_order(&self) -> PostSort {
        match self.sort.as_deref() {
            Some("createdAt") => PostSort::CreatedAtAsc,
            Some("title") => PostSort::TitleAsc,
            _ => PostSort::CreatedAtDesc,
        }
    }
}

/// One page of posts
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostPageResponse {
    pub total: i64,
    pub posts: Vec<PostResponse>,
}

// ============================================================================
// Reviews
// ============================================================================

/// Review creation request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReviewRequest {
    pub comment: String,
    pub rate: i16,
}

/// Review update request
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateReviewRequest {
    pub comment: Option<String>,
    pub rate: Option<i16>,
}

/// Review projection
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewResponse {
    pub id: Uuid,
    pub author_id: Uuid,
    pub comment: String,
    pub rate: i16,
    pub created_at: DateTime<Utc>,
}

impl From<&Review> for ReviewResponse {
    fn from(review: &Review) -> Self {
        Self {
            id: *review.review_id.as_uuid(),
            author_id: *review.author_id.as_uuid(),
            comment: review.comment.clone(),
            rate: review.rate.value(),
            created_at: review.created_at,
        }
    }
}

// ============================================================================
// Likes
// ============================================================================

/// Like count after a like/unlike
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeResponse {
    pub likes: i64,
}
