//! Unit tests for the blog crate

#[cfg(test)]
mod entity_tests {
    use auth::domain::value_object::author_id::AuthorId;

    use crate::domain::entities::{BlogPost, Review};
    use crate::domain::value_objects::{Rate, ReadTime};

    fn sample_post(author_id: AuthorId) -> BlogPost {
        BlogPost::new(
            author_id,
            "rust".to_string(),
            "Ownership explained".to_string(),
            "https://cdn.example.com/cover.png".to_string(),
            "Long-form content".to_string(),
            ReadTime::new(7, "minutes").unwrap(),
        )
    }

    #[test]
    fn test_post_creation_defaults() {
        let author_id = AuthorId::new();
        let post = sample_post(author_id);

        assert_eq!(post.likes, 0);
        assert_eq!(post.author_id, author_id);
        assert_eq!(post.created_at, post.updated_at);
    }

    #[test]
    fn test_post_ownership() {
        let owner = AuthorId::new();
        let other = AuthorId::new();
        let post = sample_post(owner);

        assert!(post.is_owned_by(&owner));
        assert!(!post.is_owned_by(&other));
    }

    #[test]
    fn test_post_setters_touch_updated_at() {
        let mut post = sample_post(AuthorId::new());
        let before = post.updated_at;

        post.set_title("New title".to_string());

        assert_eq!(post.title, "New title");
        assert!(post.updated_at >= before);
    }

    #[test]
    fn test_review_authorship() {
        let reviewer = AuthorId::new();
        let post = sample_post(AuthorId::new());
        let review = Review::new(
            post.post_id,
            reviewer,
            "Insightful".to_string(),
            Rate::new(5).unwrap(),
        );

        assert!(review.is_written_by(&reviewer));
        assert!(!review.is_written_by(&AuthorId::new()));
        assert_eq!(review.post_id, post.post_id);
    }
}

#[cfg(test)]
mod dto_tests {
    use crate::presentation::dto::*;

    #[test]
    fn test_create_post_request_deserialization() {
        let json = r#"{
            "category": "rust",
            "title": "Ownership explained",
            "cover": "https://cdn.example.com/cover.png",
            "content": "Long-form content",
            "readTime": { "value": 7, "unit": "minutes" }
        }"#;
        let request: CreatePostRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request.category, "rust");
        assert_eq!(request.read_time.value, 7);
        assert_eq!(request.read_time.unit, "minutes");
    }

    #[test]
    fn test_update_post_request_partial() {
        let json = r#"{"title": "Renamed"}"#;
        let request: UpdatePostRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request.title.as_deref(), Some("Renamed"));
        assert!(request.category.is_none());
        assert!(request.read_time.is_none());
    }

    #[test]
    fn test_list_query_sort_order() {
        use crate::domain::repository::PostSort;

        let query = ListPostsQuery::default();
        assert_eq!(query.sort_order(), PostSort::CreatedAtDesc);

        let query = ListPostsQuery {
            sort: Some("title".to_string()),
            ..Default::default()
        };
        assert_eq!(query.sort_order(), PostSort::TitleAsc);

        let query = ListPostsQuery {
            sort: Some("createdAt".to_string()),
            ..Default::default()
        };
        assert_eq!(query.sort_order(), PostSort::CreatedAtAsc);
    }

    #[test]
    fn test_like_response_serialization() {
        let response = LikeResponse { likes: 3 };
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"likes":3}"#);
    }

    #[test]
    fn test_review_request_deserialization() {
        let json = r#"{"comment": "Insightful", "rate": 5}"#;
        let request: CreateReviewRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request.comment, "Insightful");
        assert_eq!(request.rate, 5);
    }
}

#[cfg(test)]
mod error_tests {
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    use crate::error::BlogError;

    #[test]
    fn test_error_into_response_status_codes() {
        let test_cases: Vec<(BlogError, StatusCode)> = vec![
            (BlogError::PostNotFound, StatusCode::NOT_FOUND),
            (BlogError::ReviewNotFound, StatusCode::NOT_FOUND),
            (BlogError::NotOwner, StatusCode::FORBIDDEN),
            (
                BlogError::Validation("bad".into()),
                StatusCode::BAD_REQUEST,
            ),
            (
                BlogError::Internal("test".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected_status) in test_cases {
            let response = error.into_response();
            assert_eq!(
                response.status(),
                expected_status,
                "Error should return correct status code"
            );
        }
    }

    #[test]
    fn test_error_display() {
        assert!(BlogError::PostNotFound.to_string().contains("not found"));
        assert!(BlogError::NotOwner.to_string().contains("admin"));
    }
}
