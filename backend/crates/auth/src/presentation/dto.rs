//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entity::author::Author;
use crate::domain::repository::AuthorSort;

// ============================================================================
// Register
// ============================================================================

/// Registration request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub birth_date: Option<NaiveDate>,
    pub avatar: Option<String>,
}

// ============================================================================
// Sign in
// ============================================================================

/// Token response (login and federated redirect)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    pub token: String,
}

// ============================================================================
// Author projection
// ============================================================================

/// Client-safe author projection
///
/// The password hash and provider subject id never leave the server;
/// this is the only author shape handlers return.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: String,
    pub birth_date: Option<NaiveDate>,
    pub avatar: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Author> for AuthorResponse {
    fn from(author: &Author) -> Self {
        Self {
            id: *author.author_id.as_uuid(),
            name: author.name.clone(),
            email: author.email.to_string(),
            role: author.role.code().to_string(),
            birth_date: author.birth_date,
            avatar: author.avatar.clone(),
            created_at: author.created_at,
        }
    }
}

// ============================================================================
// Update
// ============================================================================

/// Update request, shared by the self-service and admin routes
///
/// On the self-service route the `role` field is accepted and ignored;
/// only the admin route applies it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAuthorRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub avatar: Option<String>,
    pub role: Option<String>,
}

// ============================================================================
// Listing
// ============================================================================

/// Author listing query string
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListAuthorsQuery {
    pub limit: Option<i64>,
    pub skip: Option<i64>,
    /// Substring match on the display name
    pub name: Option<String>,
    /// Exact email match
    pub email: Option<String>,
    pub role: Option<String>,
    /// Sort key; `-` prefix for descending (e.g. `-createdAt`, `name`)
    pub sort: Option<String>,
}

impl ListAuthorsQuery {
    pub fn sort_order(&self) -> AuthorSort {
        match self.sort.as_deref() {
            Some("createdAt") => AuthorSort::CreatedAtAsc,
            Some("name") => AuthorSort::NameAsc,
            Some("-name") => AuthorSort::NameDesc,
            _ => AuthorSort::CreatedAtDesc,
        }
    }
}

/// One page of authors
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorPageResponse {
    pub total: i64,
    pub authors: Vec<AuthorResponse>,
}

// ============================================================================
// Federated login
// ============================================================================

/// Provider callback query string
#[derive(Debug, Clone, Deserialize)]
pub struct OAuthCallbackQuery {
    pub code: String,
    #[allow(dead_code)]
    pub state: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_deserialization() {
        let json = r#"{
            "name": "Jane Doe",
            "email": "jane@example.com",
            "password": "CorrectHorse9!",
            "birthDate": "1990-04-12"
        }"#;
        let request: RegisterRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request.name, "Jane Doe");
        assert_eq!(request.email, "jane@example.com");
        assert_eq!(
            request.birth_date,
            Some(NaiveDate::from_ymd_opt(1990, 4, 12).unwrap())
        );
        assert!(request.avatar.is_none());
    }

    #[test]
    fn test_update_request_tolerates_role_field() {
        let json = r#"{"role": "Admin", "name": "X"}"#;
        let request: UpdateAuthorRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.role.as_deref(), Some("Admin"));
        assert_eq!(request.name.as_deref(), Some("X"));
    }

    #[test]
    fn test_author_response_serialization_is_camel_case() {
        let response = AuthorResponse {
            id: Uuid::nil(),
            name: "Jane".to_string(),
            email: "jane@example.com".to_string(),
            role: "author".to_string(),
            birth_date: None,
            avatar: "https://ui-avatars.com/api/?name=Jane".to_string(),
            created_at: Utc::now(),
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("birthDate"));
        assert!(json.contains("createdAt"));
        assert!(!json.contains("password"));
    }

    #[test]
    fn test_list_query_sort_order() {
        let query = ListAuthorsQuery::default();
        assert_eq!(query.sort_order(), AuthorSort::CreatedAtDesc);

        let query = ListAuthorsQuery {
            sort: Some("name".to_string()),
            ..Default::default()
        };
        assert_eq!(query.sort_order(), AuthorSort::NameAsc);

        let query = ListAuthorsQuery {
            sort: Some("-name".to_string()),
            ..Default::default()
        };
        assert_eq!(query.sort_order(), AuthorSort::NameDesc);

        let query = ListAuthorsQuery {
            sort: Some("createdAt".to_string()),
            ..Default::default()
        };
        assert_eq!(query.sort_order(), AuthorSort::CreatedAtAsc);
    }
}
