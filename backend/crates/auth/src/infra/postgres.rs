//! PostgreSQL Repository Implementation

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::author::Author;
use crate::domain::repository::{
    AuthorFilter, AuthorPage, AuthorRepository, AuthorSort,
};
use crate::domain::value_object::{
    author_id::AuthorId, author_password::AuthorPassword, author_role::AuthorRole, email::Email,
};
use crate::error::{AuthError, AuthResult};

/// PostgreSQL-backed author repository
#[derive(Clone)]
pub struct PgAuthorRepository {
    pool: PgPool,
}

impl PgAuthorRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const AUTHOR_COLUMNS: &str = r#"
    author_id,
    name,
    email,
    password_hash,
    federated_id,
    role,
    birth_date,
    avatar,
    created_at,
    updated_at
"#;

impl AuthorRepository for PgAuthorRepository {
    async fn create(&self, author: &Author) -> AuthResult<()> {
        sqlx::query(
            r#"
            INSERT INTO authors (
                author_id,
                name,
                email,
                password_hash,
                federated_id,
                role,
                birth_date,
                avatar,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(author.author_id.as_uuid())
        .bind(&author.name)
        .bind(author.email.as_str())
        .bind(author.password_hash.as_ref().map(|h| h.as_str()))
        .bind(author.federated_id.as_deref())
        .bind(author.role.id())
        .bind(author.birth_date)
        .bind(&author.avatar)
        .bind(author.created_at)
        .bind(author.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_unique_violation)?;

        Ok(())
    }

    async fn find_by_id(&self, author_id: &AuthorId) -> AuthResult<Option<Author>> {
        let row = sqlx::query_as::<_, AuthorRow>(&format!(
            "SELECT {AUTHOR_COLUMNS} FROM authors WHERE author_id = $1"
        ))
        .bind(author_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(AuthorRow::into_author))
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<Author>> {
        let row = sqlx::query_as::<_, AuthorRow>(&format!(
            "SELECT {AUTHOR_COLUMNS} FROM authors WHERE email = $1"
        ))
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(AuthorRow::into_author))
    }

    async fn find_by_federated_id(&self, federated_id: &str) -> AuthResult<Option<Author>> {
        let row = sqlx::query_as::<_, AuthorRow>(&format!(
            "SELECT {AUTHOR_COLUMNS} FROM authors WHERE federated_id = $1"
        ))
        .bind(federated_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(AuthorRow::into_author))
    }

    async fn exists_by_email(&self, email: &Email) -> AuthResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM authors WHERE email = $1)",
        )
        .bind(email.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn update(&self, author: &Author) -> AuthResult<()> {
        sqlx::query(
            r#"
            UPDATE authors SET
                name = $2,
                email = $3,
                password_hash = $4,
                federated_id = $5,
                role = $6,
                birth_date = $7,
                avatar = $8,
                updated_at = $9
            WHERE author_id = $1
            "#,
        )
        .bind(author.author_id.as_uuid())
        .bind(&author.name)
        .bind(author.email.as_str())
        .bind(author.password_hash.as_ref().map(|h| h.as_str()))
        .bind(author.federated_id.as_deref())
        .bind(author.role.id())
        .bind(author.birth_date)
        .bind(&author.avatar)
        .bind(author.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_unique_violation)?;

        Ok(())
    }

    async fn delete(&self, author_id: &AuthorId) -> AuthResult<bool> {
        let deleted = sqlx::query("DELETE FROM authors WHERE author_id = $1")
            .bind(author_id.as_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted > 0)
    }

    async fn count_and_find(
        &self,
        filter: &AuthorFilter,
        sort: AuthorSort,
        limit: i64,
        skip: i64,
    ) -> AuthResult<AuthorPage> {
        // Filters are null-tolerant so one statement covers every
        // combination; the order clause is static per variant.
        const FILTER: &str = r#"
            ($1::text IS NULL OR name ILIKE '%' || $1 || '%')
            AND ($2::text IS NULL OR email = $2)
            AND ($3::smallint IS NULL OR role = $3)
        "#;

        let order = match sort {
            AuthorSort::CreatedAtDesc => "created_at DESC",
            AuthorSort::CreatedAtAsc => "created_at ASC",
            AuthorSort::NameAsc => "name ASC",
            AuthorSort::NameDesc => "name DESC",
        };

        let name = filter.name_contains.as_deref();
        let email = filter.email.as_ref().map(|e| e.as_str());
        let role = filter.role.map(|r| r.id());

        let total = sqlx::query_scalar::<_, i64>(&format!(
            "SELECT COUNT(*) FROM authors WHERE {FILTER}"
        ))
        .bind(name)
        .bind(email)
        .bind(role)
        .fetch_one(&self.pool)
        .await?;

        let rows = sqlx::query_as::<_, AuthorRow>(&format!(
            "SELECT {AUTHOR_COLUMNS} FROM authors WHERE {FILTER} ORDER BY {order} LIMIT $4 OFFSET $5"
        ))
        .bind(name)
        .bind(email)
        .bind(role)
        .bind(limit)
        .bind(skip)
        .fetch_all(&self.pool)
        .await?;

        Ok(AuthorPage {
            total,
            authors: rows.into_iter().map(AuthorRow::into_author).collect(),
        })
    }
}

/// Surface a unique-index hit as the email collision it is
fn map_unique_violation(err: sqlx::Error) -> AuthError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.code().as_deref() == Some("23505") {
            return AuthError::EmailTaken;
        }
    }
    AuthError::Database(err)
}

// ============================================================================
// Row Type for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct AuthorRow {
    author_id: Uuid,
    name: String,
    email: String,
    password_hash: Option<String>,
    federated_id: Option<String>,
    role: i16,
    birth_date: Option<NaiveDate>,
    avatar: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl AuthorRow {
    fn into_author(self) -> Author {
        Author {
            author_id: AuthorId::from_uuid(self.author_id),
            name: self.name,
            email: Email::from_db(self.email),
            password_hash: self.password_hash.map(AuthorPassword::from_db),
            federated_id: self.federated_id,
            role: AuthorRole::from_id(self.role),
            birth_date: self.birth_date,
            avatar: self.avatar,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
