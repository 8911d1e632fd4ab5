//! Auth Router
//!
//! Each route declares its single authentication strategy statically:
//! the Basic resolver guards only the session route, the Bearer resolver
//! guards self-service and administration, and the admin gate composes
//! after the Bearer resolver. Per-handler layering keeps public and
//! guarded methods on the same path.

use axum::handler::Handler;
use axum::middleware::{from_fn, from_fn_with_state};
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::federated::IdentityProvider;
use crate::domain::repository::AuthorRepository;
use crate::infra::oauth::HttpIdentityProvider;
use crate::infra::postgres::PgAuthorRepository;
use crate::presentation::handlers::{self, AuthAppState};
use crate::presentation::middleware::{
    AuthMiddlewareState, basic_auth, bearer_auth, require_admin,
};

/// Create the authors router with the PostgreSQL repository
pub fn authors_router(
    repo: PgAuthorRepository,
    provider: Option<HttpIdentityProvider>,
    config: AuthConfig,
) -> Router {
    authors_router_generic(repo, provider, config)
}

/// Create a generic authors router for any repository / provider pair
pub fn authors_router_generic<R, P>(repo: R, provider: Option<P>, config: AuthConfig) -> Router
where
    R: AuthorRepository + Clone + Send + Sync + 'static,
    P: IdentityProvider + Clone + Send + Sync + 'static,
{
    let state = AuthAppState {
        repo: Arc::new(repo),
        provider: provider.map(Arc::new),
        config: Arc::new(config),
    };

    let mw_state = AuthMiddlewareState {
        repo: state.repo.clone(),
        config: state.config.clone(),
    };

    let basic = from_fn_with_state(mw_state.clone(), basic_auth::<R>);
    let bearer = from_fn_with_state(mw_state, bearer_auth::<R>);
    let admin = from_fn(require_admin);

    Router::new()
        .route(
            "/",
            post(handlers::register::<R, P>).get(
                handlers::list_authors::<R, P>
                    .layer(admin.clone())
                    .layer(bearer.clone()),
            ),
        )
        .route(
            "/session",
            post(handlers::login::<R, P>.layer(basic)),
        )
        .route(
            "/me",
            get(handlers::me.layer(bearer.clone()))
                .put(handlers::update_me::<R, P>.layer(bearer.clone()))
                .delete(handlers::delete_me::<R, P>.layer(bearer.clone())),
        )
        .route(
            "/{author_id}",
            get(handlers::get_author::<R, P>)
                .put(
                    handlers::update_author::<R, P>
                        .layer(admin.clone())
                        .layer(bearer.clone()),
                )
                .delete(
                    handlers::delete_author::<R, P>
                        .layer(admin)
                        .layer(bearer),
                ),
        )
        .route("/oauth/login", get(handlers::oauth_login::<R, P>))
        .route("/oauth/redirect", get(handlers::oauth_redirect::<R, P>))
        .with_state(state)
}
