//! Auth Middleware
//!
//! The three authentication resolvers (Basic, Bearer; federated login is
//! a callback route, not a middleware) plus the admin authorization gate.
//! A route declares exactly one resolver; on success the resolver inserts
//! the canonical [`CurrentAuthor`] extension, which the gate and the
//! handlers read. Failures are terminal for the request, never retried.

use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

use platform::headers::{extract_basic, extract_bearer};

use crate::application::config::AuthConfig;
use crate::application::credentials::CheckCredentialsUseCase;
use crate::application::token::TokenService;
use crate::domain::entity::author::Author;
use crate::domain::repository::AuthorRepository;
use crate::error::AuthError;

/// The resolved identity, attached to the request extensions
///
/// All resolvers populate this one field; handlers never read anything
/// else to learn who is calling.
#[derive(Clone)]
pub struct CurrentAuthor(pub Author);

/// Middleware state
#[derive(Clone)]
pub struct AuthMiddlewareState<R>
where
    R: AuthorRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

/// Basic resolver: `Authorization: Basic base64(email:password)`
///
/// Credentials are checked against the store on every request; there is
/// no session. 401 when the header is absent/malformed or the
/// credentials are wrong.
pub async fn basic_auth<R>(
    State(state): State<AuthMiddlewareState<R>>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response>
where
    R: AuthorRepository + Clone + Send + Sync + 'static,
{
    let credentials = match extract_basic(req.headers()) {
        Ok(c) => c,
        Err(e) => return Err(AuthError::from(e).into_response()),
    };

    let use_case = CheckCredentialsUseCase::new(state.repo.clone(), state.config.clone());

    match use_case.execute(&credentials.email, credentials.password).await {
        Ok(Some(author)) => {
            req.extensions_mut().insert(CurrentAuthor(author));
            Ok(next.run(req).await)
        }
        Ok(None) => Err(AuthError::InvalidCredentials.into_response()),
        Err(e) => Err(e.into_response()),
    }
}

/// Bearer resolver: `Authorization: Bearer <token>`
///
/// Verifies the token signature and expiry, then loads the author. A
/// valid token whose author has since been deleted is a 404, not a 401.
pub async fn bearer_auth<R>(
    State(state): State<AuthMiddlewareState<R>>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response>
where
    R: AuthorRepository + Clone + Send + Sync + 'static,
{
    let token = match extract_bearer(req.headers()) {
        Ok(t) => t,
        Err(e) => return Err(AuthError::from(e).into_response()),
    };

    let tokens = TokenService::new(state.config.clone());

    let author_id = match tokens.verify(&token) {
        Ok(id) => id,
        Err(e) => return Err(e.into_response()),
    };

    match state.repo.find_by_id(&author_id).await {
        Ok(Some(author)) => {
            req.extensions_mut().insert(CurrentAuthor(author));
            Ok(next.run(req).await)
        }
        Ok(None) => Err(AuthError::AuthorNotFound.into_response()),
        Err(e) => Err(e.into_response()),
    }
}

/// Authorization gate: requires an already-resolved Admin identity
///
/// Stateless predicate composed after any resolver. A missing
/// [`CurrentAuthor`] means no resolver ran, which is an authentication
/// failure rather than an authorization one.
pub async fn require_admin(req: Request<Body>, next: Next) -> Result<Response, Response> {
    match req.extensions().get::<CurrentAuthor>() {
        Some(current) if current.0.role.is_admin() => Ok(next.run(req).await),
        Some(_) => Err(AuthError::Forbidden.into_response()),
        None => Err(AuthError::MissingCredentials.into_response()),
    }
}
