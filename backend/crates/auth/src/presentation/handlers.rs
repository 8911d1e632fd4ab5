//! HTTP Handlers

use axum::Json;
use axum::extract::{Extension, Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect};
use std::sync::Arc;
use uuid::Uuid;

use crate::application::federated::{FederatedSignInUseCase, IdentityProvider};
use crate::application::{
    AuthConfig, DeleteAuthorUseCase, ListAuthorsUseCase, RegisterAuthorUseCase, RegisterInput,
    TokenService, UpdateAuthorInput, UpdateAuthorUseCase, UpdateScope,
};
use crate::domain::repository::{AuthorFilter, AuthorRepository};
use crate::domain::value_object::{author_id::AuthorId, author_role::AuthorRole, email::Email};
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::{
    AuthorPageResponse, AuthorResponse, ListAuthorsQuery, OAuthCallbackQuery, RegisterRequest,
    TokenResponse, UpdateAuthorRequest,
};
use crate::presentation::middleware::CurrentAuthor;

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R, P>
where
    R: AuthorRepository + Clone + Send + Sync + 'static,
    P: IdentityProvider + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub provider: Option<Arc<P>>,
    pub config: Arc<AuthConfig>,
}

// ============================================================================
// Register
// ============================================================================

/// POST /api/authors
pub async fn register<R, P>(
    State(state): State<AuthAppState<R, P>>,
    Json(req): Json<RegisterRequest>,
) -> AuthResult<impl IntoResponse>
where
    R: AuthorRepository + Clone + Send + Sync + 'static,
    P: IdentityProvider + Clone + Send + Sync + 'static,
{
    let use_case = RegisterAuthorUseCase::new(state.repo.clone(), state.config.clone());

    let input = RegisterInput {
        name: req.name,
        email: req.email,
        password: req.password,
        birth_date: req.birth_date,
        avatar: req.avatar,
    };

    let author = use_case.execute(input).await?;

    Ok((StatusCode::CREATED, Json(AuthorResponse::from(&author))))
}

// ============================================================================
// Sign in (Basic resolver guards this route)
// ============================================================================

/// POST /api/authors/session
pub async fn login<R, P>(
    State(state): State<AuthAppState<R, P>>,
    Extension(current): Extension<CurrentAuthor>,
) -> AuthResult<Json<TokenResponse>>
where
    R: AuthorRepository + Clone + Send + Sync + 'static,
    P: IdentityProvider + Clone + Send + Sync + 'static,
{
    let tokens = TokenService::new(state.config.clone());
    let token = tokens.issue(&current.0.author_id)?;

    tracing::info!(author_id = %current.0.author_id, "Author signed in");

    Ok(Json(TokenResponse { token }))
}

// ============================================================================
// Self-service (Bearer resolver guards these routes)
// ============================================================================

/// GET /api/authors/me
pub async fn me(Extension(current): Extension<CurrentAuthor>) -> Json<AuthorResponse> {
    Json(AuthorResponse::from(&current.0))
}

/// PUT /api/authors/me
///
/// The `role` field of the payload is deliberately not forwarded: the
/// stored role survives whatever the request claims.
pub async fn update_me<R, P>(
    State(state): State<AuthAppState<R, P>>,
    Extension(current): Extension<CurrentAuthor>,
    Json(req): Json<UpdateAuthorRequest>,
) -> AuthResult<Json<AuthorResponse>>
where
    R: AuthorRepository + Clone + Send + Sync + 'static,
    P: IdentityProvider + Clone + Send + Sync + 'static,
{
    let use_case = UpdateAuthorUseCase::new(state.repo.clone(), state.config.clone());

    let input = UpdateAuthorInput {
        name: req.name,
        email: req.email,
        password: req.password,
        birth_date: req.birth_date,
        avatar: req.avatar,
        role: None,
    };

    let author = use_case
        .execute(&current.0.author_id, input, UpdateScope::SelfService)
        .await?;

    Ok(Json(AuthorResponse::from(&author)))
}

/// DELETE /api/authors/me
pub async fn delete_me<R, P>(
    State(state): State<AuthAppState<R, P>>,
    Extension(current): Extension<CurrentAuthor>,
) -> AuthResult<StatusCode>
where
    R: AuthorRepository + Clone + Send + Sync + 'static,
    P: IdentityProvider + Clone + Send + Sync + 'static,
{
    let use_case = DeleteAuthorUseCase::new(state.repo.clone());
    use_case.execute(&current.0.author_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// Public lookup
// ============================================================================

/// GET /api/authors/{author_id}
pub async fn get_author<R, P>(
    State(state): State<AuthAppState<R, P>>,
    Path(author_id): Path<Uuid>,
) -> AuthResult<Json<AuthorResponse>>
where
    R: AuthorRepository + Clone + Send + Sync + 'static,
    P: IdentityProvider + Clone + Send + Sync + 'static,
{
    let author = state
        .repo
        .find_by_id(&AuthorId::from_uuid(author_id))
        .await?
        .ok_or(AuthError::AuthorNotFound)?;

    Ok(Json(AuthorResponse::from(&author)))
}

// ============================================================================
// Administration (Bearer resolver + admin gate)
// ============================================================================

/// GET /api/authors
pub async fn list_authors<R, P>(
    State(state): State<AuthAppState<R, P>>,
    Query(query): Query<ListAuthorsQuery>,
) -> AuthResult<Json<AuthorPageResponse>>
where
    R: AuthorRepository + Clone + Send + Sync + 'static,
    P: IdentityProvider + Clone + Send + Sync + 'static,
{
    let filter = AuthorFilter {
        name_contains: query.name.clone(),
        email: match &query.email {
            Some(raw) => Some(
                Email::new(raw.clone())
                    .map_err(|e| AuthError::Validation(e.message().to_string()))?,
            ),
            None => None,
        },
        role: match &query.role {
            Some(raw) => Some(
                AuthorRole::parse(raw)
                    .ok_or_else(|| AuthError::Validation(format!("Unknown role: {}", raw)))?,
            ),
            None => None,
        },
    };

    let use_case = ListAuthorsUseCase::new(state.repo.clone());
    let page = use_case
        .execute(filter, query.sort_order(), query.limit, query.skip)
        .await?;

    Ok(Json(AuthorPageResponse {
        total: page.total,
        authors: page.authors.iter().map(AuthorResponse::from).collect(),
    }))
}

/// PUT /api/authors/{author_id}
pub async fn update_author<R, P>(
    State(state): State<AuthAppState<R, P>>,
    Path(author_id): Path<Uuid>,
    Json(req): Json<UpdateAuthorRequest>,
) -> AuthResult<Json<AuthorResponse>>
where
    R: AuthorRepository + Clone + Send + Sync + 'static,
    P: IdentityProvider + Clone + Send + Sync + 'static,
{
    let role = match req.role {
        Some(raw) => Some(
            AuthorRole::parse(&raw)
                .ok_or_else(|| AuthError::Validation(format!("Unknown role: {}", raw)))?,
        ),
        None => None,
    };

    let use_case = UpdateAuthorUseCase::new(state.repo.clone(), state.config.clone());

    let input = UpdateAuthorInput {
        name: req.name,
        email: req.email,
        password: req.password,
        birth_date: req.birth_date,
        avatar: req.avatar,
        role,
    };

    let author = use_case
        .execute(&AuthorId::from_uuid(author_id), input, UpdateScope::Admin)
        .await?;

    Ok(Json(AuthorResponse::from(&author)))
}

/// DELETE /api/authors/{author_id}
pub async fn delete_author<R, P>(
    State(state): State<AuthAppState<R, P>>,
    Path(author_id): Path<Uuid>,
) -> AuthResult<StatusCode>
where
    R: AuthorRepository + Clone + Send + Sync + 'static,
    P: IdentityProvider + Clone + Send + Sync + 'static,
{
    let use_case = DeleteAuthorUseCase::new(state.repo.clone());
    use_case.execute(&AuthorId::from_uuid(author_id)).await?;

    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// Federated login
// ============================================================================

/// GET /api/authors/oauth/login
///
/// Redirects to the provider's authorization endpoint.
pub async fn oauth_login<R, P>(
    State(state): State<AuthAppState<R, P>>,
) -> AuthResult<Redirect>
where
    R: AuthorRepository + Clone + Send + Sync + 'static,
    P: IdentityProvider + Clone + Send + Sync + 'static,
{
    let provider = state
        .provider
        .as_ref()
        .ok_or_else(|| AuthError::Configuration("OAuth provider not configured".to_string()))?;

    let state_token = platform::crypto::to_base64_url(&platform::crypto::random_bytes(24));
    let url = provider.authorize_url(&state_token);

    Ok(Redirect::temporary(&url))
}

/// GET /api/authors/oauth/redirect
///
/// Provider callback. Finds or creates the account, then redirects to the
/// frontend with the token appended as a fragment.
pub async fn oauth_redirect<R, P>(
    State(state): State<AuthAppState<R, P>>,
    Query(query): Query<OAuthCallbackQuery>,
) -> AuthResult<Redirect>
where
    R: AuthorRepository + Clone + Send + Sync + 'static,
    P: IdentityProvider + Clone + Send + Sync + 'static,
{
    let provider = state
        .provider
        .as_ref()
        .ok_or_else(|| AuthError::Configuration("OAuth provider not configured".to_string()))?;

    let oauth_config = state
        .config
        .oauth
        .as_ref()
        .ok_or_else(|| AuthError::Configuration("OAuth provider not configured".to_string()))?;

    let tokens = TokenService::new(state.config.clone());
    let use_case =
        FederatedSignInUseCase::new(state.repo.clone(), provider.clone(), tokens);

    let output = use_case.execute(&query.code).await?;

    let destination = format!(
        "{}#token={}",
        oauth_config.frontend_redirect_url, output.token
    );

    Ok(Redirect::temporary(&destination))
}
