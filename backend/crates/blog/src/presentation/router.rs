//! Blog Router
//!
//! Reads are public; mutations are guarded by the Bearer resolver from
//! the auth crate. Per-handler layering keeps public and guarded methods
//! on the same path.

use axum::handler::Handler;
use axum::middleware::from_fn_with_state;
use axum::{
    Router,
    routing::{get, put},
};
use std::sync::Arc;

use auth::application::config::AuthConfig;
use auth::domain::repository::AuthorRepository;
use auth::presentation::middleware::{AuthMiddlewareState, bearer_auth};

use crate::domain::repository::BlogPostRepository;
use crate::infra::postgres::PgBlogPostRepository;
use crate::presentation::handlers::{self, BlogAppState};

/// Create the posts router with the PostgreSQL repositories
pub fn posts_router(
    repo: PgBlogPostRepository,
    authors: auth::PgAuthorRepository,
    config: AuthConfig,
) -> Router {
    posts_router_generic(repo, authors, config)
}

/// Create a generic posts router for any repository pair
pub fn posts_router_generic<B, R>(repo: B, authors: R, config: AuthConfig) -> Router
where
    B: BlogPostRepository + Clone + Send + Sync + 'static,
    R: AuthorRepository + Clone + Send + Sync + 'static,
{
    let state = BlogAppState {
        repo: Arc::new(repo),
    };

    let mw_state = AuthMiddlewareState {
        repo: Arc::new(authors),
        config: Arc::new(config),
    };

    let bearer = from_fn_with_state(mw_state, bearer_auth::<R>);

    Router::new()
        .route(
            "/",
            get(handlers::list_posts::<B>)
                .post(handlers::create_post::<B>.layer(bearer.clone())),
        )
        .route(
            "/{post_id}",
            get(handlers::get_post::<B>)
                .put(handlers::update_post::<B>.layer(bearer.clone()))
                .delete(handlers::delete_post::<B>.layer(bearer.clone())),
        )
        .route(
            "/{post_id}/reviews",
            get(handlers::list_reviews::<B>)
                .post(handlers::add_review::<B>.layer(bearer.clone())),
        )
        .route(
            "/{post_id}/reviews/{review_id}",
            get(handlers::get_review::<B>)
                .put(handlers::update_review::<B>.layer(bearer.clone()))
                .delete(handlers::delete_review::<B>.layer(bearer.clone())),
        )
        .route(
            "/{post_id}/like",
            put(handlers::like_post::<B>.layer(bearer.clone()))
                .delete(handlers::unlike_post::<B>.layer(bearer)),
        )
        .with_state(state)
}
