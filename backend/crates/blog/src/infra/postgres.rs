//! PostgreSQL Repository Implementation

use auth::domain::value_object::author_id::AuthorId;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entities::{BlogPost, Review};
use crate::domain::repository::{BlogPostRepository, PostFilter, PostPage, PostSort};
use crate::domain::value_objects::{PostId, Rate, ReadTime, ReviewId};
use crate::error::BlogResult;

/// PostgreSQL-backed blog post repository
#[derive(Clone)]
pub struct PgBlogPostRepository {
    pool: PgPool,
}

impl PgBlogPostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const POST_COLUMNS: &str = r#"
    p.post_id,
    p.author_id,
    p.category,
    p.title,
    p.cover,
    p.content,
    p.read_time_value,
    p.read_time_unit,
    (SELECT COUNT(*) FROM post_likes l WHERE l.post_id = p.post_id) AS likes,
    p.created_at,
    p.updated_at
"#;

impl BlogPostRepository for PgBlogPostRepository {
    async fn create(&self, post: &BlogPost) -> BlogResult<()> {
        sqlx::query(
            r#"
            INSERT INTO blog_posts (
                post_id,
                author_id,
                category,
                title,
                cover,
                content,
                read_time_value,
                read_time_unit,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(post.post_id.as_uuid())
        .bind(post.author_id.as_uuid())
        .bind(&post.category)
        .bind(&post.title)
        .bind(&post.cover)
        .bind(&post.content)
        .bind(post.read_time.value)
        .bind(&post.read_time.unit)
        .bind(post.created_at)
        .bind(post.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, post_id: &PostId) -> BlogResult<Option<BlogPost>> {
        let row = sqlx::query_as::<_, PostRow>(&format!(
            "SELECT {POST_COLUMNS} FROM blog_posts p WHERE p.post_id = $1"
        ))
        .bind(post_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(PostRow::into_post))
    }

    async fn update(&self, post: &BlogPost) -> BlogResult<()> {
        sqlx::query(
            r#"
            UPDATE blog_posts SET
                category = $2,
                title = $3,
                cover = $4,
                content = $5,
                read_time_value = $6,
                read_time_unit = $7,
                updated_at = $8
            WHERE post_id = $1
            "#,
        )
        .bind(post.post_id.as_uuid())
        .bind(&post.category)
        .bind(&post.title)
        .bind(&post.cover)
        .bind(&post.content)
        .bind(post.read_time.value)
        .bind(&post.read_time.unit)
        .bind(post.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete(&self, post_id: &PostId) -> BlogResult<bool> {
        let deleted = sqlx::query("DELETE FROM blog_posts WHERE post_id = $1")
            .bind(post_id.as_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted > 0)
    }

    async fn count_and_find(
        &self,
        filter: &PostFilter,
        sort: PostSort,
        limit: i64,
        skip: i64,
    ) -> BlogResult<PostPage> {
        const FILTER: &str = r#"
            ($1::text IS NULL OR p.category = $1)
            AND ($2::text IS NULL OR p.title ILIKE '%' || $2 || '%')
            AND ($3::uuid IS NULL OR p.author_id = $3)
        "#;

        let order = match sort {
            PostSort::CreatedAtDesc => "p.created_at DESC",
            PostSort::CreatedAtAsc => "p.created_at ASC",
            PostSort::TitleAsc => "p.title ASC",
        };

        let category = filter.category.as_deref();
        let title = filter.title_contains.as_deref();
        let author = filter.author_id.as_ref().map(|a| *a.as_uuid());

        let total = sqlx::query_scalar::<_, i64>(&format!(
            "SELECT COUNT(*) FROM blog_posts p WHERE {FILTER}"
        ))
        .bind(category)
        .bind(title)
        .bind(author)
        .fetch_one(&self.pool)
        .await?;

        let rows = sqlx::query_as::<_, PostRow>(&format!(
            "SELECT {POST_COLUMNS} FROM blog_posts p WHERE {FILTER} ORDER BY {order} LIMIT $4 OFFSET $5"
        ))
        .bind(category)
        .bind(title)
        .bind(author)
        .bind(limit)
        .bind(skip)
        .fetch_all(&self.pool)
        .await?;

        Ok(PostPage {
            total,
            posts: rows.into_iter().map(PostRow::into_post).collect(),
        })
    }

    async fn add_review(&self, review: &Review) -> BlogResult<()> {
        sqlx::query(
            r#"
            INSERT INTO post_reviews (
                review_id,
                post_id,
                author_id,
                comment,
                rate,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(review.review_id.as_uuid())
        .bind(review.post_id.as_uuid())
        .bind(review.author_id.as_uuid())
        .bind(&review.comment)
        .bind(review.rate.value())
        .bind(review.created_at)
        .bind(review.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_review(
        &self,
        post_id: &PostId,
        review_id: &ReviewId,
    ) -> BlogResult<Option<Review>> {
        let row = sqlx::query_as::<_, ReviewRow>(
            r#"
            SELECT review_id, post_id, author_id, comment, rate, created_at, updated_at
            FROM post_reviews
            WHERE post_id = $1 AND review_id = $2
            "#,
        )
        .bind(post_id.as_uuid())
        .bind(review_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(ReviewRow::into_review))
    }

    async fn list_reviews(&self, post_id: &PostId) -> BlogResult<Vec<Review>> {
        let rows = sqlx::query_as::<_, ReviewRow>(
            r#"
            SELECT review_id, post_id, author_id, comment, rate, created_at, updated_at
            FROM post_reviews
            WHERE post_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(post_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(ReviewRow::into_review).collect())
    }

    async fn update_review(&self, review: &Review) -> BlogResult<()> {
        sqlx::query(
            r#"
            UPDATE post_reviews SET
                comment = $2,
                rate = $3,
                updated_at = $4
            WHERE review_id = $1
            "#,
        )
        .bind(review.review_id.as_uuid())
        .bind(&review.comment)
        .bind(review.rate.value())
        .bind(review.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete_review(&self, post_id: &PostId, review_id: &ReviewId) -> BlogResult<bool> {
        let deleted =
            sqlx::query("DELETE FROM post_reviews WHERE post_id = $1 AND review_id = $2")
                .bind(post_id.as_uuid())
                .bind(review_id.as_uuid())
                .execute(&self.pool)
                .await?
                .rows_affected();

        Ok(deleted > 0)
    }

    async fn add_like(&self, post_id: &PostId, author_id: &AuthorId) -> BlogResult<i64> {
        // Idempotent: the primary key on (post_id, author_id) makes a
        // second like a no-op.
        sqlx::query(
            r#"
            INSERT INTO post_likes (post_id, author_id, created_at)
            VALUES ($1, $2, $3)
            ON CONFLICT (post_id, author_id) DO NOTHING
            "#,
        )
        .bind(post_id.as_uuid())
        .bind(author_id.as_uuid())
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        self.count_likes(post_id).await
    }

    async fn remove_like(&self, post_id: &PostId, author_id: &AuthorId) -> BlogResult<i64> {
        sqlx::query("DELETE FROM post_likes WHERE post_id = $1 AND author_id = $2")
            .bind(post_id.as_uuid())
            .bind(author_id.as_uuid())
            .execute(&self.pool)
            .await?;

        self.count_likes(post_id).await
    }
}

impl PgBlogPostRepository {
    async fn count_likes(&self, post_id: &PostId) -> BlogResult<i64> {
        let likes =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM post_likes WHERE post_id = $1")
                .bind(post_id.as_uuid())
                .fetch_one(&self.pool)
                .await?;

        Ok(likes)
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct PostRow {
    post_id: Uuid,
    author_id: Uuid,
    category: String,
    title: String,
    cover: String,
    content: String,
    read_time_value: i32,
    read_time_unit: String,
    likes: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl PostRow {
    fn into_post(self) -> BlogPost {
        BlogPost {
            post_id: PostId::from_uuid(self.post_id),
            author_id: AuthorId::from_uuid(self.author_id),
            category: self.category,
            title: self.title,
            cover: self.cover,
            content: self.content,
            read_time: ReadTime {
                value: self.read_time_value,
                unit: self.read_time_unit,
            },
            likes: self.likes,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct ReviewRow {
    review_id: Uuid,
    post_id: Uuid,
    author_id: Uuid,
    comment: String,
    rate: i16,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ReviewRow {
    fn into_review(self) -> Review {
        Review {
            review_id: ReviewId::from_uuid(self.review_id),
            post_id: PostId::from_uuid(self.post_id),
            author_id: AuthorId::from_uuid(self.author_id),
            comment: self.comment,
            rate: Rate::from_db(self.rate),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
