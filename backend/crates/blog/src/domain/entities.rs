//! Blog domain entities

use auth::domain::value_object::author_id::AuthorId;
use chrono::{DateTime, Utc};

use crate::domain::value_objects::{PostId, Rate, ReadTime, ReviewId};

/// Blog post entity
///
/// Reviews live in their own table and are loaded separately; `likes`
/// carries the like count as stored.
#[derive(Debug, Clone)]
pub struct BlogPost {
    pub post_id: PostId,
    /// Owning author; only the owner or an admin may mutate the post
    pub author_id: AuthorId,
    pub category: String,
    pub title: String,
    /// Cover image URL
    pub cover: String,
    pub content: String,
    pub read_time: ReadTime,
    /// Number of distinct authors who liked this post
    pub likes: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BlogPost {
    pub fn new(
        author_id: AuthorId,
        category: String,
        title: String,
        cover: String,
        content: String,
        read_time: ReadTime,
    ) -> Self {
        let now = Utc::now();
        Self {
            post_id: PostId::new(),
            author_id,
            category,
            title,
            cover,
            content,
            read_time,
            likes: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether the given author owns this post
    pub fn is_owned_by(&self, author_id: &AuthorId) -> bool {
        &self.author_id == author_id
    }

    pub fn set_category(&mut self, category: String) {
        self.category = category;
        self.touch();
    }

    pub fn set_title(&mut self, title: String) {
        self.title = title;
        self.touch();
    }

    pub fn set_cover(&mut self, cover: String) {
        self.cover = cover;
        self.touch();
    }

    pub fn set_content(&mut self, content: String) {
        self.content = content;
        self.touch();
    }

    pub fn set_read_time(&mut self, read_time: ReadTime) {
        self.read_time = read_time;
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// Review of a blog post
#[derive(Debug, Clone)]
pub struct Review {
    pub review_id: ReviewId,
    pub post_id: PostId,
    /// The reviewing author
    pub author_id: AuthorId,
    pub comment: String,
    pub rate: Rate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Review {
    pub fn new(post_id: PostId, author_id: AuthorId, comment: String, rate: Rate) -> Self {
        let now = Utc::now();
        Self {
            review_id: ReviewId::new(),
            post_id,
            author_id,
            comment,
            rate,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether the given author wrote this review
    pub fn is_written_by(&self, author_id: &AuthorId) -> bool {
        &self.author_id == author_id
    }

    pub fn set_comment(&mut self, comment: String) {
        self.comment = comment;
        self.updated_at = Utc::now();
    }

    pub fn set_rate(&mut self, rate: Rate) {
        self.rate = rate;
        self.updated_at = Utc::now();
    }
}
